use super::{YuyvPair, YuyvSrc};
use crate::formats::rgb::{RgbPixel, RgbSrc};

// Integer BT.601 approximations. The sum is shifted as i32 and truncated to 8 bits
// *before* the offset is added, which then wraps. This order is part of the output format.

/// Luma of a single pixel
#[inline(always)]
pub fn rgb_to_y(r: u8, g: u8, b: u8) -> u8 {
    let (r, g, b) = (i32::from(r), i32::from(g), i32::from(b));

    (((66 * r + 129 * g + 25 * b + 128) >> 8) as u8).wrapping_add(16)
}

/// Blue difference chroma of a single pixel
#[inline(always)]
pub fn rgb_to_u(r: u8, g: u8, b: u8) -> u8 {
    let (r, g, b) = (i32::from(r), i32::from(g), i32::from(b));

    (((-38 * r - 74 * g + 112 * b + 128) >> 8) as u8).wrapping_add(128)
}

/// Red difference chroma of a single pixel
#[inline(always)]
pub fn rgb_to_v(r: u8, g: u8, b: u8) -> u8 {
    let (r, g, b) = (i32::from(r), i32::from(g), i32::from(b));

    (((112 * r - 94 * g - 18 * b + 128) >> 8) as u8).wrapping_add(128)
}

/// Visits an [`RgbSrc`] two pixels at a time and shares their averaged chroma
pub(crate) struct RgbToYuyv<S> {
    rgb_src: S,
}

impl<S: RgbSrc> RgbToYuyv<S> {
    pub(crate) fn new(rgb_src: S) -> Self {
        Self { rgb_src }
    }
}

impl<S: RgbSrc> YuyvSrc for RgbToYuyv<S> {
    #[inline(always)]
    fn read(&mut self, x: usize, y: usize) -> YuyvPair {
        let px0 = self.rgb_src.read(x, y);
        let px1 = self.rgb_src.read(x + 1, y);

        let RgbPixel { r, g, b } = px0;
        let (y0, u0, v0) = (rgb_to_y(r, g, b), rgb_to_u(r, g, b), rgb_to_v(r, g, b));

        let RgbPixel { r, g, b } = px1;
        let (y1, u1, v1) = (rgb_to_y(r, g, b), rgb_to_u(r, g, b), rgb_to_v(r, g, b));

        // Plain truncating average, no rounding
        let u = ((u16::from(u0) + u16::from(u1)) / 2) as u8;
        let v = ((u16::from(v0) + u16::from(v1)) / 2) as u8;

        YuyvPair { y0, u, y1, v }
    }
}
