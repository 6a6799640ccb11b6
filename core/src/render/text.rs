//! Numeric readouts drawn directly by pixel shaders.
//!
//! A [`Readout`] prints a number using a tiny 4×5 bitmap font, without any
//! textures or geometry: the shader asks, for each pixel, whether it falls
//! on a lit cell of some glyph.

use crate::math::{Vec2, float::f32 as fp, fract, vec2};

/// The glyphs of the digits 0 to 9. Bit `4 * row + col` is set if the cell
/// at `col` (from the left) and `row` (from the bottom) is lit.
const DIGITS: [u32; 10] = [
    480599, 139810, 476951, 476999, 350020, //
    464711, 464727, 476228, 481111, 481095,
];
/// The minus sign glyph.
const MINUS: u32 = 1792;
/// The decimal point glyph.
const POINT: u32 = 2;

/// A fixed-width decimal number printed at a position on screen.
///
/// Digits are laid out in `digits + 1` integer positions, followed by a
/// decimal point and `decimals` fractional positions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Readout {
    /// Bottom left corner of the readout, in window pixels.
    pub origin: Vec2,
    /// Size of one character cell in pixels.
    pub glyph: Vec2,
    /// Number of integer digit positions, minus one.
    pub digits: f32,
    /// Number of fractional digits. Zero omits the decimal point.
    pub decimals: f32,
}

impl Default for Readout {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            glyph: vec2(8.0, 15.0),
            digits: 6.0,
            decimals: 0.0,
        }
    }
}

impl Readout {
    /// Returns a readout at `origin` with the default glyph size and
    /// digit counts.
    pub fn at(x: f32, y: f32) -> Self {
        Self { origin: vec2(x, y), ..Self::default() }
    }

    /// Sets the number of integer digit positions.
    pub fn digits(self, digits: f32) -> Self {
        Self { digits, ..self }
    }

    /// Sets the number of fractional digits.
    pub fn decimals(self, decimals: f32) -> Self {
        Self { decimals, ..self }
    }

    /// Returns 1.0 if the window pixel at `frag_coord` is lit by the glyphs
    /// printing `value`, and 0.0 otherwise.
    ///
    /// Returns 0.0 for non-finite values.
    pub fn coverage(&self, frag_coord: Vec2, value: f32) -> f32 {
        let p = frag_coord - self.origin;
        let cell = vec2(p.x() / self.glyph.x(), p.y() / self.glyph.y());
        glyph_coverage(cell, value, self.digits, self.decimals)
    }
}

/// Returns the coverage at `cell`, in units of character cells from the
/// bottom left corner of the readout.
fn glyph_coverage(cell: Vec2, value: f32, digits: f32, decimals: f32) -> f32 {
    let (x, y) = (cell.x(), cell.y());
    if !(0.0..1.0).contains(&y) || !value.is_finite() {
        return 0.0;
    }
    let neg = value < 0.0;
    let value = fp::abs(value);

    let log10 = if value > 0.0 {
        fp::log2(value) / fp::log2(10.0)
    } else {
        0.0
    };
    let biggest = fp::floor(log10).max(0.0);
    let mut index = digits - fp::floor(x);

    let bits = if index <= -decimals - 1.01 {
        0
    } else if index > biggest {
        // Leading blanks; the sign goes right before the first digit
        if neg && index < biggest + 1.5 { MINUS } else { 0 }
    } else if index == -1.0 {
        if decimals > 0.0 { POINT } else { 0 }
    } else {
        let mut reduced = value;
        if index < 0.0 {
            reduced = fract(value);
            index += 1.0;
        }
        let digit = fp::abs(reduced / fp::powf(10.0, index)) % 10.0;
        DIGITS[(fp::floor(digit) as usize).min(9)]
    };

    let col = fp::floor(fract(x) * 4.0) as u32;
    let row = fp::floor(y * 5.0) as u32;
    ((bits >> (4 * row + col)) & 1) as f32
}
