//! The rotatable point surface and its Euler rotation state.

use crate::math::{Mat3, Vector3};

/// Rotation about the X, Y and Z axes (radians).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl RotationState {
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Angles in degrees, for status display
    pub fn degrees(&self) -> (f64, f64, f64) {
        (self.a.to_degrees(), self.b.to_degrees(), self.c.to_degrees())
    }

    /// Move each angle `factor` of the way towards `target`.
    pub fn lerp_towards(&mut self, target: RotationState, factor: f64) {
        self.a += (target.a - self.a) * factor;
        self.b += (target.b - self.b) * factor;
        self.c += (target.c - self.c) * factor;
    }

    /// Combined rotation `Rz(c) · Ry(b) · Rx(a)`: X is applied first.
    pub fn matrix(&self) -> Mat3 {
        Mat3::rotation_z(self.c)
            .mul(&Mat3::rotation_y(self.b))
            .mul(&Mat3::rotation_x(self.a))
    }
}

/// A square sample grid attached to a rotation.
///
/// Grid points are not stored; they are generated from indices on demand.
#[derive(Debug, Clone)]
pub struct Surface {
    origin: Vector3,
    glyph: String,
    width: usize,
    rotation: RotationState,
}

impl Surface {
    pub fn new(origin: Vector3, glyph: impl Into<String>, width: usize) -> Self {
        Self::with_rotation(origin, glyph, width, RotationState::zero())
    }

    pub fn with_rotation(
        origin: Vector3,
        glyph: impl Into<String>,
        width: usize,
        rotation: RotationState,
    ) -> Self {
        Self {
            origin,
            glyph: glyph.into(),
            width,
            rotation,
        }
    }

    /// Rotate `point` by the current angles.
    ///
    /// Rebuilds the matrix on every call; per-frame callers should take
    /// [`Surface::rotation_matrix`] once instead.
    pub fn rotate_vector(&self, point: Vector3) -> Vector3 {
        self.rotation_matrix().apply(point)
    }

    pub fn rotation_matrix(&self) -> Mat3 {
        self.rotation.matrix()
    }

    pub fn set_rotation_angles(&mut self, a: f64, b: f64, c: f64) {
        self.rotation = RotationState::new(a, b, c);
    }

    pub fn set_rotation(&mut self, rotation: RotationState) {
        self.rotation = rotation;
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn origin(&self) -> Vector3 {
        self.origin
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn set_glyph(&mut self, glyph: impl Into<String>) {
        self.glyph = glyph.into();
    }

    /// Side length of the sample grid
    pub fn width(&self) -> usize {
        self.width
    }

    /// Offset of grid index `i` from the grid centre, in grid units.
    pub fn centered(&self, i: usize) -> f64 {
        i as f64 - (self.width / 2) as f64
    }

    /// Unrotated sample point for grid cell `(i, j)` at the given depth.
    pub fn lattice_point(&self, i: usize, j: usize, scale: f64, depth: f64) -> Vector3 {
        Vector3::new(self.centered(i) * scale, self.centered(j) * scale, depth)
    }
}
