//! Vector and fixed 3x3 matrix types for Euler rotation.

use std::ops::{Mul, Sub};

/// A point or direction in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub i: f64,
    pub j: f64,
    pub k: f64,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3 { i: 0.0, j: 0.0, k: 0.0 };

    pub const fn new(i: f64, j: f64, k: f64) -> Self {
        Self { i, j, k }
    }

    pub fn dot(self, other: Vector3) -> f64 {
        self.i * other.i + self.j * other.j + self.k * other.k
    }

    /// Euclidean length
    pub fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.i - rhs.i, self.j - rhs.j, self.k - rhs.k)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f64) -> Vector3 {
        Vector3::new(self.i * rhs, self.j * rhs, self.k * rhs)
    }
}

/// Row-major 3x3 matrix.
///
/// Shapes are fixed by the type, so every product below is well-formed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    pub rows: [[f64; 3]; 3],
}

impl Mat3 {
    pub const IDENTITY: Mat3 = Mat3 {
        rows: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    pub const fn new(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Right-handed rotation about the X axis
    pub fn rotation_x(a: f64) -> Self {
        let (sin, cos) = a.sin_cos();
        Self::new([[1.0, 0.0, 0.0], [0.0, cos, -sin], [0.0, sin, cos]])
    }

    /// Right-handed rotation about the Y axis
    pub fn rotation_y(b: f64) -> Self {
        let (sin, cos) = b.sin_cos();
        Self::new([[cos, 0.0, sin], [0.0, 1.0, 0.0], [-sin, 0.0, cos]])
    }

    /// Right-handed rotation about the Z axis
    pub fn rotation_z(c: f64) -> Self {
        let (sin, cos) = c.sin_cos();
        Self::new([[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Matrix product `self · rhs`.
    pub fn mul(&self, rhs: &Mat3) -> Mat3 {
        let mut out = [[0.0; 3]; 3];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|n| self.rows[r][n] * rhs.rows[n][c]).sum();
            }
        }
        Mat3::new(out)
    }

    /// Matrix-vector product `self · v`.
    pub fn apply(&self, v: Vector3) -> Vector3 {
        let [r0, r1, r2] = &self.rows;
        Vector3::new(
            r0[0] * v.i + r0[1] * v.j + r0[2] * v.k,
            r1[0] * v.i + r1[1] * v.j + r1[2] * v.k,
            r2[0] * v.i + r2[1] * v.j + r2[2] * v.k,
        )
    }
}
