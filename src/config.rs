use crate::error::{Error, Result};
use crate::preset::{self, Preset};
use crate::settings::Settings;
use std::time::Duration;

/// Largest accepted screen side; keeps rows addressable by crossterm's u16 cursor.
pub const MAX_SCREEN: usize = 4096;
/// Largest accepted grid side.
pub const MAX_GRID: usize = 1024;

/// Values given on the command line; `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub mode: Option<String>,
    pub grid: Option<usize>,
    pub glyph: Option<String>,
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub time: Option<f32>,
    pub frames: Option<u64>,
    pub no_status: bool,
}

/// Resolved configuration for one run
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub preset: &'static Preset,
    pub grid: usize,
    pub glyph: String,
    pub width: usize,
    pub height: usize,
    pub frame: Duration,
    pub frames: Option<u64>,
    pub status: bool,
}

impl RenderConfig {
    /// Layer preset defaults, then settings, then command-line overrides.
    pub fn resolve(settings: &Settings, cli: &Overrides) -> Result<Self> {
        let mode = cli.mode.as_deref().or(settings.mode.as_deref());
        let preset = match mode {
            Some(name) => preset::find(name).unwrap_or_else(|| {
                eprintln!("Unknown mode: {}. Using {}.", name, preset::default_preset().name);
                eprintln!("Available: {}", preset::names().join(", "));
                preset::default_preset()
            }),
            None => preset::default_preset(),
        };

        let frame = cli
            .time
            .or(settings.time)
            .filter(|t| *t > 0.0)
            .and_then(|t| Duration::try_from_secs_f32(t).ok());
        let config = Self {
            preset,
            grid: cli.grid.or(settings.grid).unwrap_or(preset.grid),
            glyph: cli
                .glyph
                .clone()
                .or_else(|| settings.glyph.clone())
                .unwrap_or_else(|| preset.glyph.to_string()),
            width: cli.width.or(settings.width).unwrap_or(preset.screen.0),
            height: cli.height.or(settings.height).unwrap_or(preset.screen.1),
            frame: frame.unwrap_or(preset.frame),
            frames: cli.frames,
            status: !cli.no_status && settings.status.unwrap_or(true),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid == 0 || self.grid > MAX_GRID {
            return Err(Error::InvalidDimensions {
                what: "grid",
                width: self.grid,
                height: self.grid,
            });
        }
        let in_range = |side: usize| (1..=MAX_SCREEN).contains(&side);
        if !in_range(self.width) || !in_range(self.height) {
            return Err(Error::InvalidDimensions {
                what: "screen",
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_come_from_classic_preset() {
        let config = RenderConfig::resolve(&Settings::default(), &Overrides::default()).unwrap();
        assert_eq!(config.preset.name, "classic");
        assert_eq!(config.grid, 18);
        assert_eq!(config.glyph, "@");
        assert_eq!((config.width, config.height), (70, 50));
        assert_eq!(config.frame, Duration::from_millis(120));
        assert!(config.status);
        assert_eq!(config.frames, None);
    }

    #[test]
    fn cli_beats_settings_beats_preset() {
        let settings = Settings {
            mode: Some("infinite".into()),
            grid: Some(10),
            width: Some(40),
            status: Some(false),
            ..Settings::default()
        };
        let cli = Overrides {
            grid: Some(12),
            ..Overrides::default()
        };
        let config = RenderConfig::resolve(&settings, &cli).unwrap();
        assert_eq!(config.preset.name, "infinite");
        assert_eq!(config.glyph, "█");
        assert_eq!(config.grid, 12);
        assert_eq!((config.width, config.height), (40, 30));
        assert!(!config.status);
    }

    #[test]
    fn unknown_mode_falls_back_to_default() {
        let cli = Overrides {
            mode: Some("teapot".into()),
            ..Overrides::default()
        };
        let config = RenderConfig::resolve(&Settings::default(), &cli).unwrap();
        assert_eq!(config.preset.name, "classic");
    }

    #[test]
    fn frame_time_override_ignores_non_positive() {
        let cli = Overrides {
            time: Some(0.05),
            ..Overrides::default()
        };
        let config = RenderConfig::resolve(&Settings::default(), &cli).unwrap();
        assert_eq!(config.frame, Duration::from_secs_f32(0.05));

        let cli = Overrides {
            time: Some(-1.0),
            ..Overrides::default()
        };
        let config = RenderConfig::resolve(&Settings::default(), &cli).unwrap();
        assert_eq!(config.frame, Duration::from_millis(120));
    }

    #[test]
    fn zero_sizes_are_rejected() {
        let cli = Overrides {
            grid: Some(0),
            ..Overrides::default()
        };
        assert!(matches!(
            RenderConfig::resolve(&Settings::default(), &cli),
            Err(Error::InvalidDimensions { what: "grid", .. })
        ));

        let cli = Overrides {
            height: Some(0),
            ..Overrides::default()
        };
        assert!(matches!(
            RenderConfig::resolve(&Settings::default(), &cli),
            Err(Error::InvalidDimensions { what: "screen", .. })
        ));
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        let cli = Overrides {
            width: Some(usize::MAX / 2),
            height: Some(3),
            ..Overrides::default()
        };
        assert!(matches!(
            RenderConfig::resolve(&Settings::default(), &cli),
            Err(Error::InvalidDimensions { what: "screen", .. })
        ));

        let settings = Settings {
            height: Some(MAX_SCREEN + 1),
            ..Settings::default()
        };
        assert!(matches!(
            RenderConfig::resolve(&settings, &Overrides::default()),
            Err(Error::InvalidDimensions { what: "screen", .. })
        ));

        let cli = Overrides {
            grid: Some(MAX_GRID + 1),
            ..Overrides::default()
        };
        assert!(matches!(
            RenderConfig::resolve(&Settings::default(), &cli),
            Err(Error::InvalidDimensions { what: "grid", .. })
        ));

        let cli = Overrides {
            width: Some(MAX_SCREEN),
            height: Some(MAX_SCREEN),
            grid: Some(MAX_GRID),
            ..Overrides::default()
        };
        assert!(RenderConfig::resolve(&Settings::default(), &cli).is_ok());
    }
}
