//! Animation loop: advance time, update angles, render, present, pace.

use crate::config::RenderConfig;
use crate::math::Vector3;
use crate::preset::{FrameStatus, Preset};
use crate::raster::{Rasterizer, ScreenBuffer};
use crate::surface::{RotationState, Surface};
use crate::terminal::DisplaySink;
use std::io;
use std::time::{Duration, Instant};

/// Per-run animation state for one preset.
pub struct Animator {
    preset: &'static Preset,
    raster: Rasterizer,
    time: f64,
    angles: RotationState,
    started: bool,
}

impl Animator {
    pub fn new(preset: &'static Preset) -> Self {
        Self {
            preset,
            raster: preset.rasterizer(),
            time: 0.0,
            angles: match preset.smoothing {
                Some(_) => RotationState::zero(),
                None => (preset.angles)(0.0),
            },
            started: false,
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    /// Render the next frame into `buf`.
    ///
    /// `since_last` is the wall-clock time since the previous frame began;
    /// only measured clocks use it. The first frame is always at time zero.
    pub fn frame(&mut self, surface: &mut Surface, buf: &mut ScreenBuffer, since_last: Duration) -> FrameStatus {
        if self.started {
            self.time = self.preset.clock.advance(self.time, since_last);
        }
        self.started = true;

        let target = (self.preset.angles)(self.time);
        match self.preset.smoothing {
            Some(factor) => self.angles.lerp_towards(target, factor),
            None => self.angles = target,
        }
        surface.set_rotation(self.angles);
        self.raster.render(surface, self.time, (self.preset.phase)(self.time), buf);

        let secs = since_last.as_secs_f64();
        FrameStatus {
            time: self.time,
            angles: self.angles,
            fps: if secs > 0.0 { 1.0 / secs } else { 0.0 },
        }
    }
}

/// Totals reported after a run ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunStats {
    pub frames: u64,
    pub elapsed: Duration,
}

impl RunStats {
    pub fn mean_fps(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.frames as f64 / secs
        } else {
            0.0
        }
    }
}

pub fn surface_for(config: &RenderConfig) -> Surface {
    Surface::new(Vector3::ZERO, config.glyph.clone(), config.grid)
}

/// Run until the sink reports an interrupt or the frame limit is reached.
pub fn run<S: DisplaySink>(config: &RenderConfig, surface: &mut Surface, sink: &mut S) -> io::Result<RunStats> {
    let mut buf = ScreenBuffer::new(config.width, config.height);
    let mut animator = Animator::new(config.preset);

    let run_start = Instant::now();
    let mut last_start: Option<Instant> = None;
    let mut frames: u64 = 0;

    loop {
        let frame_start = Instant::now();
        let since_last = last_start.map(|t| frame_start - t).unwrap_or_default();
        last_start = Some(frame_start);

        let status = animator.frame(surface, &mut buf, since_last);
        let line = config.status.then(|| (config.preset.status)(status));
        sink.present(&buf, line.as_deref())?;
        frames += 1;

        if config.frames.is_some_and(|limit| frames >= limit) {
            break;
        }

        let remaining = config.frame.saturating_sub(frame_start.elapsed());
        if sink.idle(remaining)? {
            break;
        }
    }

    Ok(RunStats {
        frames,
        elapsed: run_start.elapsed(),
    })
}

/// Render one frame at animation time `time`, without smoothing.
pub fn render_at(config: &RenderConfig, time: f64) -> ScreenBuffer {
    let mut surface = surface_for(config);
    let mut buf = ScreenBuffer::new(config.width, config.height);
    let preset = config.preset;
    surface.set_rotation((preset.angles)(time));
    preset.rasterizer().render(&surface, time, (preset.phase)(time), &mut buf);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Overrides;
    use crate::preset;
    use crate::settings::Settings;
    use crate::terminal::TextSink;

    fn config(mode: &str) -> RenderConfig {
        let cli = Overrides {
            mode: Some(mode.to_string()),
            ..Overrides::default()
        };
        RenderConfig::resolve(&Settings::default(), &cli).unwrap()
    }

    fn run_with<S: DisplaySink>(cfg: &RenderConfig, sink: &mut S) -> io::Result<RunStats> {
        run(cfg, &mut surface_for(cfg), sink)
    }

    /// Records presented frames and interrupts after a fixed count.
    struct Recorder {
        frames: Vec<String>,
        statuses: Vec<Option<String>>,
        waits: Vec<Duration>,
        stop_after: usize,
    }

    impl Recorder {
        fn new(stop_after: usize) -> Self {
            Self {
                frames: Vec::new(),
                statuses: Vec::new(),
                waits: Vec::new(),
                stop_after,
            }
        }
    }

    impl DisplaySink for Recorder {
        fn present(&mut self, frame: &ScreenBuffer, status: Option<&str>) -> io::Result<()> {
            self.frames.push(frame.to_string());
            self.statuses.push(status.map(str::to_string));
            Ok(())
        }

        fn idle(&mut self, timeout: Duration) -> io::Result<bool> {
            self.waits.push(timeout);
            Ok(self.frames.len() >= self.stop_after)
        }
    }

    #[test]
    fn interrupt_ends_the_loop() {
        let mut sink = Recorder::new(3);
        let stats = run_with(&config("classic"), &mut sink).unwrap();
        assert_eq!(stats.frames, 3);
        assert_eq!(sink.frames.len(), 3);
        assert_eq!(sink.waits.len(), 3);
        assert!(sink.waits.iter().all(|w| *w <= Duration::from_millis(120)));
    }

    #[test]
    fn frame_limit_ends_the_loop_without_waiting() {
        let mut cfg = config("wave");
        cfg.frames = Some(2);
        let mut sink = Recorder::new(usize::MAX);
        let stats = run_with(&cfg, &mut sink).unwrap();
        assert_eq!(stats.frames, 2);
        assert_eq!(sink.waits.len(), 1);
    }

    #[test]
    fn status_line_follows_config() {
        let mut cfg = config("classic");
        cfg.frames = Some(2);

        let mut sink = Recorder::new(usize::MAX);
        run_with(&cfg, &mut sink).unwrap();
        assert_eq!(sink.statuses[0].as_deref(), Some("Time: 0.0s | X:0° Y:0° Z:17°"));
        assert!(sink.statuses[1].as_deref().unwrap().starts_with("Time: 0.1s"));

        cfg.status = false;
        let mut sink = Recorder::new(usize::MAX);
        run_with(&cfg, &mut sink).unwrap();
        assert!(sink.statuses.iter().all(Option::is_none));
    }

    #[test]
    fn frames_change_as_the_surface_turns() {
        let mut cfg = config("dense");
        cfg.frames = Some(3);
        let mut sink = Recorder::new(usize::MAX);
        run_with(&cfg, &mut sink).unwrap();
        assert_ne!(sink.frames[0], sink.frames[1]);
        assert_ne!(sink.frames[1], sink.frames[2]);
    }

    #[test]
    fn step_clock_advances_per_frame() {
        let cfg = config("bouncing");
        let mut surface = surface_for(&cfg);
        let mut buf = ScreenBuffer::new(cfg.width, cfg.height);
        let mut animator = Animator::new(cfg.preset);

        let first = animator.frame(&mut surface, &mut buf, Duration::from_secs(9));
        assert_eq!(first.time, 0.0);
        animator.frame(&mut surface, &mut buf, Duration::from_secs(9));
        animator.frame(&mut surface, &mut buf, Duration::from_secs(9));
        assert!((animator.time() - 0.1).abs() < 1e-12);
        assert_eq!(surface.rotation(), (cfg.preset.angles)(animator.time()));
    }

    #[test]
    fn measured_clock_follows_wall_time() {
        let cfg = config("smooth");
        let mut surface = surface_for(&cfg);
        let mut buf = ScreenBuffer::new(cfg.width, cfg.height);
        let mut animator = Animator::new(cfg.preset);

        animator.frame(&mut surface, &mut buf, Duration::ZERO);
        let status = animator.frame(&mut surface, &mut buf, Duration::from_millis(50));
        assert!((status.time - 0.05).abs() < 1e-12);
        assert!((status.fps - 20.0).abs() < 1e-9);
    }

    #[test]
    fn smoothing_lags_behind_target() {
        let cfg = config("interpolated");
        let mut surface = surface_for(&cfg);
        let mut buf = ScreenBuffer::new(cfg.width, cfg.height);
        let mut animator = Animator::new(cfg.preset);

        for _ in 0..10 {
            animator.frame(&mut surface, &mut buf, Duration::ZERO);
        }
        let target = (cfg.preset.angles)(animator.time());
        let actual = surface.rotation();
        assert!(actual.b < target.b);
        assert!(actual.b > 0.0);
    }

    #[test]
    fn smoothing_eases_in_from_rest() {
        let cfg = config("interpolated");
        let mut surface = surface_for(&cfg);
        let mut buf = ScreenBuffer::new(cfg.width, cfg.height);
        let mut animator = Animator::new(cfg.preset);

        let first = animator.frame(&mut surface, &mut buf, Duration::ZERO);
        let target = (cfg.preset.angles)(0.0);
        assert!(target.c > 0.0);
        assert!((first.angles.c - target.c * 0.15).abs() < 1e-12);
        assert!(first.angles.c < target.c);

        // unsmoothed presets start on their target
        let cfg = config("classic");
        let mut animator = Animator::new(cfg.preset);
        let first = animator.frame(&mut surface, &mut buf, Duration::ZERO);
        assert_eq!(first.angles, (cfg.preset.angles)(0.0));
    }

    #[test]
    fn render_at_is_deterministic() {
        let cfg = config("spiral");
        assert_eq!(render_at(&cfg, 2.5).to_string(), render_at(&cfg, 2.5).to_string());
        assert!(render_at(&cfg, 0.0).filled() > 0);
    }

    #[test]
    fn every_preset_draws_something_on_its_first_frame() {
        for p in preset::PRESETS {
            let cfg = config(p.name);
            let buf = render_at(&cfg, 0.0);
            assert_eq!((buf.width(), buf.height()), p.screen);
            assert!(buf.filled() > 0, "{} rendered an empty frame", p.name);
        }
    }

    #[test]
    fn text_sink_run_emits_fixed_size_frames() {
        let mut cfg = config("infinite");
        cfg.frames = Some(2);
        cfg.status = false;
        let mut sink = TextSink::unpaced(Vec::new());
        run_with(&cfg, &mut sink).unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2 * 30);
        assert!(lines.iter().all(|l| l.chars().count() == 60));
    }
}
