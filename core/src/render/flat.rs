//! A flat-colored full-screen quad.

use crate::math::{Color3f, Vec2, lerp};

use super::{FrameContext, PixelShader, text::Readout};

/// A pixel shader that fills the viewport with a single color, optionally
/// overlaid with a numeric [readout][Readout].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlatQuad {
    /// The background color.
    pub color: Color3f,
    /// The readout, if any, and its color.
    pub readout: Option<(Readout, Color3f)>,
    /// The value shown by the readout, or `None` to show the frame time.
    pub value: Option<f32>,
}

impl FlatQuad {
    /// Returns a quad of color `color` without a readout.
    pub fn new(color: Color3f) -> Self {
        Self { color, readout: None, value: None }
    }

    /// Adds a readout drawn in `color`.
    pub fn with_readout(self, readout: Readout, color: Color3f) -> Self {
        Self { readout: Some((readout, color)), ..self }
    }

    /// Makes the readout show a fixed `value` instead of the frame time.
    pub fn showing(self, value: f32) -> Self {
        Self { value: Some(value), ..self }
    }
}

impl PixelShader for FlatQuad {
    fn shade_pixel(&self, uv: Vec2, frame: &FrameContext) -> Color3f {
        let Some((readout, ink)) = &self.readout else {
            return self.color;
        };
        let value = self.value.unwrap_or(frame.time as f32);
        let cov = readout.coverage(frame.frag_coord(uv), value);
        lerp(cov, self.color, *ink)
    }
}

#[cfg(test)]
mod tests {
    use crate::math::{rgb, vec2};
    use crate::render::render;
    use crate::util::buf::Buf2;

    use super::*;

    const CYAN: Color3f = rgb(0.0, 1.0, 1.0);

    #[test]
    fn without_readout_is_flat() {
        let quad = FlatQuad::new(rgb(0.2, 0.4, 0.6));
        let frame = FrameContext::new(3.0, (8, 8));
        for uv in [vec2(0.0, 0.0), vec2(0.5, 0.5), vec2(0.99, 0.01)] {
            assert_eq!(quad.shade_pixel(uv, &frame), rgb(0.2, 0.4, 0.6));
        }
    }

    #[test]
    fn readout_of_fixed_value() {
        // A single "1" at the left edge: its glyph lights column 1 of 4
        let readout = Readout::default().digits(0.0);
        let quad = FlatQuad::new(Color3f::BLACK)
            .with_readout(readout, CYAN)
            .showing(1.0);
        let frame = FrameContext::new(0.0, (8, 15));
        let mut buf = Buf2::<u32>::new_default(8, 15);

        render(&quad, &frame, &mut buf);

        for row in buf.rows() {
            assert_eq!(row, [0, 0, 0xFFFF, 0xFFFF, 0, 0, 0, 0]);
        }
    }

    #[test]
    fn readout_shows_frame_time_by_default() {
        let readout = Readout::default().digits(0.0);
        let quad = FlatQuad::new(Color3f::BLACK).with_readout(readout, CYAN);
        let mut lit = [0usize; 2];
        for (i, t) in [0.0, 1.0].into_iter().enumerate() {
            let frame = FrameContext::new(t, (8, 15));
            let mut buf = Buf2::<u32>::new_default(8, 15);
            render(&quad, &frame, &mut buf);
            lit[i] = buf.data().iter().filter(|&&p| p != 0).count();
        }
        // "0" lights 12 cells of the font, "1" lights 5
        assert_eq!(lit, [12 * 6, 5 * 6]);
    }
}
