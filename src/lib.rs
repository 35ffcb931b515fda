//! Rotating 3D point surface rendered as ASCII art in the terminal.
//!
//! The pipeline is [`surface`] (Euler rotation) → [`raster`] (projection and
//! nearest-wins depth test) → [`glyph`] (character choice), driven per frame
//! by [`driver`] with a [`preset`] supplying the animation strategies.

pub mod config;
pub mod driver;
pub mod error;
pub mod glyph;
pub mod math;
pub mod preset;
pub mod raster;
pub mod settings;
pub mod surface;
pub mod terminal;

pub use error::{Error, Result};
