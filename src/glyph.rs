//! Glyph selection policies: map a sample's depth, height or distance to a
//! single display character.

/// Front-to-back depth ramps
pub const CLASSIC: &[char] = &['@', '#', '*', '+', '=', '-', ':', '.', ' '];
pub const DENSE: &[char] = &['@', '&', '#', '*', '%', '+', '=', '-', ':', '.', ' '];
pub const SIMPLE: &[char] = &['@', '*', '+', '.', ' '];
pub const MODERN: &[char] = &['#', '@', '*', '&', '%', '+', '=', '-', '~', '.', ' '];
pub const BLOCK: &[char] = &['█', '▓', '░'];

/// Banding ramp for cyclic mode
pub const SPIRAL: &[char] = &['@', '#', '&', '*', '%', '+', '=', '-', ':', '.', ' '];

/// Height cutoffs, checked top-down: first `height > threshold` wins.
pub const WAVE: &[(f64, char)] = &[(1.5, '@'), (0.5, '#'), (-0.5, '*'), (-1.5, '+')];
pub const RIPPLE: &[(f64, char)] = &[(2.0, '@'), (1.0, '#'), (0.0, '*'), (-1.0, '+'), (-2.0, '-')];

/// What the rasterizer knows about one sample when picking its glyph.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SampleInfo {
    /// Integer depth layer (0 for height-field samples)
    pub level: i32,
    /// Unrotated depth value
    pub height: f64,
    /// Planar distance from the grid centre, in grid units
    pub distance: f64,
}

/// How a render mode turns a sample into a glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlyphPolicy {
    DepthBucket(&'static [char]),
    HeightBucket {
        cutoffs: &'static [(f64, char)],
        floor: char,
    },
    Cyclic(&'static [char]),
}

impl GlyphPolicy {
    pub fn select(&self, sample: &SampleInfo, phase: f64) -> char {
        match *self {
            GlyphPolicy::DepthBucket(table) => depth_bucket(table, sample.level),
            GlyphPolicy::HeightBucket { cutoffs, floor } => height_bucket(cutoffs, floor, sample.height),
            GlyphPolicy::Cyclic(table) => cyclic(table, sample.distance, phase),
        }
    }
}

/// `table[|level|]`, clamped to the last entry.
pub fn depth_bucket(table: &[char], level: i32) -> char {
    match table.len() {
        0 => ' ',
        len => table[(level.unsigned_abs() as usize).min(len - 1)],
    }
}

pub fn height_bucket(cutoffs: &[(f64, char)], floor: char, height: f64) -> char {
    cutoffs
        .iter()
        .find(|(threshold, _)| height > *threshold)
        .map(|&(_, ch)| ch)
        .unwrap_or(floor)
}

/// `table[floor(distance + phase) mod len]`, wrapping negatives upward.
pub fn cyclic(table: &[char], distance: f64, phase: f64) -> char {
    if table.is_empty() {
        return ' ';
    }
    let len = table.len() as i64;
    let idx = ((distance + phase).floor() as i64).rem_euclid(len);
    table[idx as usize]
}
