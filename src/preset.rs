//! Built-in animation presets.
//!
//! Every preset is the same pipeline with different strategies plugged in:
//! an angle function of animation time, a depth profile, a glyph policy,
//! a clock and a status line format.

use crate::glyph::{self, GlyphPolicy};
use crate::raster::{DepthProfile, FieldInput, Rasterizer};
use crate::surface::RotationState;
use std::f64::consts::{PI, TAU};
use std::time::Duration;

/// How animation time advances between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Clock {
    /// Fixed increment per frame, optionally wrapped back to zero past `wrap`
    Step { step: f64, wrap: Option<f64> },
    /// Measured wall-clock seconds since the previous frame
    Measured,
}

impl Clock {
    pub fn advance(&self, time: f64, elapsed: Duration) -> f64 {
        match *self {
            Clock::Step { step, wrap } => {
                let next = time + step;
                match wrap {
                    Some(limit) if next > limit => 0.0,
                    _ => next,
                }
            }
            Clock::Measured => time + elapsed.as_secs_f64(),
        }
    }
}

/// Values available to a status line formatter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStatus {
    pub time: f64,
    pub angles: RotationState,
    pub fps: f64,
}

/// Fully parameterized render mode.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub title: &'static str,
    pub screen: (usize, usize),
    pub grid: usize,
    pub glyph: &'static str,
    pub scale: f64,
    pub profile: DepthProfile,
    pub glyphs: GlyphPolicy,
    pub angles: fn(f64) -> RotationState,
    pub phase: fn(f64) -> f64,
    pub clock: Clock,
    pub frame: Duration,
    /// Approach target angles by this factor per frame instead of jumping
    pub smoothing: Option<f64>,
    pub status: fn(FrameStatus) -> String,
}

impl Preset {
    pub fn rasterizer(&self) -> Rasterizer {
        Rasterizer::new(self.scale, self.profile, self.glyphs)
    }

    pub fn matches(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.name == name || self.aliases.iter().any(|alias| *alias == name)
    }
}

/// Look up a preset by name or alias (case-insensitive).
pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.matches(name))
}

pub fn names() -> Vec<&'static str> {
    PRESETS.iter().map(|p| p.name).collect()
}

pub fn default_preset() -> &'static Preset {
    &PRESETS[0]
}

const fn millis(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

const DEFAULT_GRID: usize = 18;
const BLOCK_GRID: usize = 20;

const CLASSIC_LAYERS: DepthProfile = DepthProfile::Layers { range: 4, step: 0.3 };
const BLOCK_LAYERS: DepthProfile = DepthProfile::Layers { range: 2, step: 0.5 };
const SMOOTH_LAYERS: DepthProfile = DepthProfile::Layers { range: 6, step: 0.4 };

pub static PRESETS: &[Preset] = &[
    Preset {
        name: "classic",
        aliases: &["default"],
        title: "Classic ASCII Rotation",
        screen: (70, 50),
        grid: DEFAULT_GRID,
        glyph: "@",
        scale: 1.8,
        profile: CLASSIC_LAYERS,
        glyphs: GlyphPolicy::DepthBucket(glyph::CLASSIC),
        angles: angles::drift,
        phase: no_phase,
        clock: Clock::Step { step: 0.1, wrap: None },
        frame: millis(120),
        smoothing: None,
        status: status::time_and_angles,
    },
    Preset {
        name: "dense",
        aliases: &[],
        title: "Dense Character Rotation",
        screen: (70, 50),
        grid: DEFAULT_GRID,
        glyph: "@",
        scale: 1.8,
        profile: CLASSIC_LAYERS,
        glyphs: GlyphPolicy::DepthBucket(glyph::DENSE),
        angles: angles::tumble,
        phase: no_phase,
        clock: Clock::Step { step: PI / 20.0, wrap: None },
        frame: millis(100),
        smoothing: None,
        status: status::rotation,
    },
    Preset {
        name: "simple",
        aliases: &[],
        title: "Simple Rotation",
        screen: (70, 50),
        grid: DEFAULT_GRID,
        glyph: "@",
        scale: 1.8,
        profile: CLASSIC_LAYERS,
        glyphs: GlyphPolicy::DepthBucket(glyph::SIMPLE),
        angles: angles::drift,
        phase: no_phase,
        clock: Clock::Step { step: 0.1, wrap: None },
        frame: millis(120),
        smoothing: None,
        status: status::time_and_angles,
    },
    Preset {
        name: "modern",
        aliases: &[],
        title: "Modern Rotation",
        screen: (70, 50),
        grid: DEFAULT_GRID,
        glyph: "@",
        scale: 1.8,
        profile: CLASSIC_LAYERS,
        glyphs: GlyphPolicy::DepthBucket(glyph::MODERN),
        angles: angles::drift,
        phase: no_phase,
        clock: Clock::Step { step: 0.1, wrap: None },
        frame: millis(120),
        smoothing: None,
        status: status::time_and_angles,
    },
    Preset {
        name: "wave",
        aliases: &["waves"],
        title: "Wave Pattern Rotation",
        screen: (65, 50),
        grid: DEFAULT_GRID,
        glyph: "@",
        scale: 1.5,
        profile: DepthProfile::Field(fields::wave),
        glyphs: GlyphPolicy::HeightBucket { cutoffs: glyph::WAVE, floor: '.' },
        angles: angles::sway,
        phase: no_phase,
        clock: Clock::Step { step: 0.08, wrap: None },
        frame: millis(90),
        smoothing: None,
        status: status::wave_time,
    },
    Preset {
        name: "spiral",
        aliases: &[],
        title: "Spiral Rotation",
        screen: (60, 50),
        grid: DEFAULT_GRID,
        glyph: "@",
        scale: 1.6,
        profile: DepthProfile::Field(fields::spiral),
        glyphs: GlyphPolicy::Cyclic(glyph::SPIRAL),
        angles: angles::spiral,
        phase: spiral_phase,
        clock: Clock::Step { step: 0.15, wrap: None },
        frame: millis(110),
        smoothing: None,
        status: status::spiral,
    },
    Preset {
        name: "infinite",
        aliases: &["block", "blocks"],
        title: "Infinite 3D Rotation",
        screen: (60, 30),
        grid: BLOCK_GRID,
        glyph: "█",
        scale: 2.0,
        profile: BLOCK_LAYERS,
        glyphs: GlyphPolicy::DepthBucket(glyph::BLOCK),
        angles: angles::infinite,
        phase: no_phase,
        clock: Clock::Step { step: PI / 30.0, wrap: Some(TAU) },
        frame: millis(100),
        smoothing: None,
        status: status::wrapped_angles,
    },
    Preset {
        name: "pattern",
        aliases: &[],
        title: "Pattern Rotation",
        screen: (60, 30),
        grid: BLOCK_GRID,
        glyph: "█",
        scale: 2.0,
        profile: BLOCK_LAYERS,
        glyphs: GlyphPolicy::DepthBucket(glyph::BLOCK),
        angles: angles::pattern,
        phase: no_phase,
        clock: Clock::Step { step: 0.1, wrap: None },
        frame: millis(80),
        smoothing: None,
        status: status::pattern,
    },
    Preset {
        name: "bouncing",
        aliases: &["bounce"],
        title: "Bouncing Rotation",
        screen: (60, 30),
        grid: BLOCK_GRID,
        glyph: "█",
        scale: 2.0,
        profile: BLOCK_LAYERS,
        glyphs: GlyphPolicy::DepthBucket(glyph::BLOCK),
        angles: angles::bounce,
        phase: no_phase,
        clock: Clock::Step { step: 0.05, wrap: None },
        frame: millis(60),
        smoothing: None,
        status: status::bounce,
    },
    Preset {
        name: "smooth",
        aliases: &["ultra"],
        title: "Ultra-Smooth Rotation",
        screen: (80, 50),
        grid: DEFAULT_GRID,
        glyph: "@",
        scale: 2.0,
        profile: SMOOTH_LAYERS,
        glyphs: GlyphPolicy::DepthBucket(glyph::CLASSIC),
        angles: angles::smooth,
        phase: no_phase,
        clock: Clock::Measured,
        frame: Duration::from_nanos(1_000_000_000 / 60),
        smoothing: None,
        status: status::fps,
    },
    Preset {
        name: "interpolated",
        aliases: &["lerp"],
        title: "Interpolated Rotation",
        screen: (80, 50),
        grid: DEFAULT_GRID,
        glyph: "@",
        scale: 2.0,
        profile: SMOOTH_LAYERS,
        glyphs: GlyphPolicy::DepthBucket(glyph::CLASSIC),
        angles: angles::drift,
        phase: no_phase,
        clock: Clock::Step { step: 0.016, wrap: None },
        frame: millis(16),
        smoothing: Some(0.15),
        status: status::interpolated,
    },
    Preset {
        name: "ripple",
        aliases: &["hifi", "hifi-wave"],
        title: "High-FPS Wave Rotation",
        screen: (80, 50),
        grid: DEFAULT_GRID,
        glyph: "@",
        scale: 1.8,
        profile: DepthProfile::Field(fields::ripple),
        glyphs: GlyphPolicy::HeightBucket { cutoffs: glyph::RIPPLE, floor: '.' },
        angles: angles::ripple,
        phase: no_phase,
        clock: Clock::Step { step: 0.01, wrap: None },
        frame: millis(10),
        smoothing: None,
        status: status::ripple,
    },
];

fn no_phase(_time: f64) -> f64 {
    0.0
}

fn spiral_phase(time: f64) -> f64 {
    time * 2.0
}

/// Angle update rules, as functions of animation time.
mod angles {
    use super::RotationState;
    use std::f64::consts::PI;

    /// Gentle X/Z sway with a steady Y spin
    pub fn drift(t: f64) -> RotationState {
        RotationState::new((t * 0.3).sin() * 0.5, t * 0.8, (t * 0.2).cos() * 0.3)
    }

    pub fn tumble(t: f64) -> RotationState {
        RotationState::new(t * 0.7, t, t * 0.4)
    }

    pub fn sway(t: f64) -> RotationState {
        RotationState::new(t.sin() * PI / 3.0, t * 1.2, (t * 1.5).sin() * PI / 4.0)
    }

    pub fn spiral(t: f64) -> RotationState {
        let radius = (t * 0.1).sin().abs() * PI / 2.0;
        RotationState::new(radius, t * 2.0, radius * 0.5)
    }

    pub fn infinite(t: f64) -> RotationState {
        RotationState::new(t * 0.7, t, t * 0.5)
    }

    pub fn pattern(t: f64) -> RotationState {
        RotationState::new((t * 0.5).sin() * PI / 4.0, t, (t * 0.3).cos() * PI / 6.0)
    }

    pub fn bounce(t: f64) -> RotationState {
        let bounce = (t * 2.0).sin() * PI / 3.0;
        RotationState::new(bounce, t * 2.0, bounce * 0.5)
    }

    pub fn smooth(t: f64) -> RotationState {
        RotationState::new((t * 0.8).sin() * 0.6, t * 1.2, (t * 0.5).cos() * 0.4)
    }

    pub fn ripple(t: f64) -> RotationState {
        RotationState::new((t * 2.0).sin() * 0.4, t * 1.5, (t * 1.8).sin() * 0.3)
    }
}

/// Height fields for single-sample modes.
mod fields {
    use super::FieldInput;

    pub fn wave(p: FieldInput) -> f64 {
        ((p.i + p.j) as f64 * 0.5 + p.time * 3.0).sin() * 2.0
    }

    pub fn spiral(p: FieldInput) -> f64 {
        (p.distance * 0.8 + p.time).sin() * 1.5
    }

    /// Two crossing waves
    pub fn ripple(p: FieldInput) -> f64 {
        let along = ((p.i + p.j) as f64 * 0.4 + p.time * 4.0).sin() * 1.5;
        let across = ((p.i as f64 - p.j as f64) * 0.3 + p.time * 2.0).cos() * 0.8;
        along + across
    }
}

mod status {
    use super::FrameStatus;

    pub fn time_and_angles(s: FrameStatus) -> String {
        let (x, y, z) = s.angles.degrees();
        format!("Time: {:.1}s | X:{:.0}° Y:{:.0}° Z:{:.0}°", s.time, x, y % 360.0, z)
    }

    pub fn rotation(s: FrameStatus) -> String {
        format!("=== DENSE ASCII ROTATION === Rotation: {:.0} degrees", s.angles.b.to_degrees() % 360.0)
    }

    pub fn wave_time(s: FrameStatus) -> String {
        format!("~~~ WAVE PATTERN ROTATION ~~~ Wave Time: {:.2}", s.time)
    }

    pub fn spiral(s: FrameStatus) -> String {
        format!("*** SPIRAL ROTATION *** Spiral: {:.1} | Radius: {:.2}", s.time, s.angles.a)
    }

    pub fn wrapped_angles(s: FrameStatus) -> String {
        let (x, y, z) = s.angles.degrees();
        format!("Rotation: X={:.1}° Y={:.1}° Z={:.1}°", x % 360.0, y % 360.0, z % 360.0)
    }

    pub fn pattern(s: FrameStatus) -> String {
        format!("Time: {:.2} | Pattern Rotation Active", s.time)
    }

    pub fn bounce(s: FrameStatus) -> String {
        format!(
            "Bouncing Rotation Mode | Bounce: {:.1}° | Spin: {:.1}°",
            s.angles.a.to_degrees(),
            s.angles.b.to_degrees() % 360.0
        )
    }

    pub fn fps(s: FrameStatus) -> String {
        format!("FPS: {:.1} | Time: {:.1}s", s.fps, s.time)
    }

    pub fn interpolated(s: FrameStatus) -> String {
        format!("Smooth interpolation | Time: {:.1}s", s.time)
    }

    pub fn ripple(s: FrameStatus) -> String {
        format!("High-FPS Wave | Time: {:.2}s", s.time)
    }
}
