//! Depth-tested rasterization of a rotated surface into a character buffer.

use crate::glyph::{GlyphPolicy, SampleInfo};
use crate::math::{Mat3, Vector3};
use crate::surface::Surface;
use std::fmt;
use std::io::{self, Write};

/// One buffer cell: the winning glyph and its depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub depth: f64,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            depth: f64::INFINITY,
        }
    }
}

/// Fixed-size grid of glyphs with a per-cell depth key.
#[derive(Debug, Clone)]
pub struct ScreenBuffer {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl ScreenBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Blank every cell, keeping the allocation
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn get(&self, col: usize, row: usize) -> Option<Cell> {
        if col < self.width && row < self.height {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Write `ch` at `(col, row)` if `depth` is nearer than what is there.
    ///
    /// Off-buffer coordinates and equal depths leave the buffer untouched.
    /// Returns whether the cell changed.
    pub fn plot(&mut self, col: i64, row: i64, depth: f64, ch: char) -> bool {
        if col < 0 || row < 0 || col >= self.width as i64 || row >= self.height as i64 {
            return false;
        }
        let cell = &mut self.cells[row as usize * self.width + col as usize];
        if depth < cell.depth {
            *cell = Cell { ch, depth };
            true
        } else {
            false
        }
    }

    pub fn row(&self, row: usize) -> impl Iterator<Item = char> + '_ {
        let start = row.min(self.height) * self.width;
        let end = (row + 1).min(self.height) * self.width;
        self.cells[start..end].iter().map(|c| c.ch)
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.height).map(move |y| self.row(y).collect())
    }

    /// Number of cells holding a glyph this frame
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.depth.is_finite()).count()
    }

    /// Serialize as `height` lines of `width` characters, each ending in `\n`.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.rows() {
            out.write_all(line.as_bytes())?;
            out.write_all(b"\n")?;
        }
        Ok(())
    }
}

impl fmt::Display for ScreenBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.rows() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Inputs to a height-field function for one grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldInput {
    pub i: usize,
    pub j: usize,
    /// Offsets from the grid centre, in grid units
    pub u: f64,
    pub v: f64,
    pub distance: f64,
    pub time: f64,
}

/// How depth values are generated for each grid cell.
#[derive(Debug, Clone, Copy)]
pub enum DepthProfile {
    /// Integer layers `-range..=range`, each `step` apart
    Layers { range: i32, step: f64 },
    /// One sample per cell, depth from a function of position and time
    Field(fn(FieldInput) -> f64),
}

/// Orthographic projection to a buffer cell, z kept as the depth key.
pub fn project(p: Vector3, width: usize, height: usize) -> (i64, i64, f64) {
    let col = p.i.round() as i64 + (width / 2) as i64;
    let row = p.j.round() as i64 + (height / 2) as i64;
    (col, row, p.k)
}

/// Per-mode rendering parameters: scale, depth generation and glyph policy.
#[derive(Debug, Clone, Copy)]
pub struct Rasterizer {
    pub scale: f64,
    pub profile: DepthProfile,
    pub glyphs: GlyphPolicy,
}

impl Rasterizer {
    pub fn new(scale: f64, profile: DepthProfile, glyphs: GlyphPolicy) -> Self {
        Self { scale, profile, glyphs }
    }

    /// Rebuild `buf` from scratch for the surface's current rotation.
    ///
    /// `time` feeds height fields, `phase` feeds cyclic glyph selection.
    pub fn render(&self, surface: &Surface, time: f64, phase: f64, buf: &mut ScreenBuffer) {
        buf.clear();
        let rotation = surface.rotation_matrix();
        let n = surface.width();

        for i in 0..n {
            let u = surface.centered(i);
            for j in 0..n {
                let v = surface.centered(j);
                let distance = (u * u + v * v).sqrt();

                match self.profile {
                    DepthProfile::Layers { range, step } => {
                        for level in -range..=range {
                            let height = level as f64 * step;
                            let sample = SampleInfo { level, height, distance };
                            let point = surface.lattice_point(i, j, self.scale, height);
                            self.plot(&rotation, point, &sample, phase, buf);
                        }
                    }
                    DepthProfile::Field(field) => {
                        let height = field(FieldInput { i, j, u, v, distance, time });
                        let sample = SampleInfo { level: 0, height, distance };
                        let point = surface.lattice_point(i, j, self.scale, height);
                        self.plot(&rotation, point, &sample, phase, buf);
                    }
                }
            }
        }
    }

    fn plot(&self, rotation: &Mat3, point: Vector3, sample: &SampleInfo, phase: f64, buf: &mut ScreenBuffer) {
        let (col, row, depth) = project(rotation.apply(point), buf.width(), buf.height());
        buf.plot(col, row, depth, self.glyphs.select(sample, phase));
    }

    /// Samples generated per frame for a grid of side `n`
    pub fn samples_per_frame(&self, n: usize) -> usize {
        match self.profile {
            DepthProfile::Layers { range, .. } => n * n * (2 * range.unsigned_abs() as usize + 1),
            DepthProfile::Field(_) => n * n,
        }
    }
}
