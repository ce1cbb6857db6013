use super::{YuyvPair, YuyvSrc};
use crate::formats::rgb::{RgbPixel, RgbSrc};

// BT.601 limited range, fixed point with 20 fractional bits
const SHIFT: i32 = 20;
const HALF: i32 = 1 << (SHIFT - 1);

const CY: i32 = 1220542;
const CUB: i32 = 2116026;
const CUG: i32 = -409993;
const CVG: i32 = -852492;
const CVR: i32 = 1673527;

/// Convert one luma sample and its shared chroma back to `[r, g, b]`
#[inline(always)]
pub fn yuv_to_rgb(y: u8, u: u8, v: u8) -> [u8; 3] {
    let y = (i32::from(y) - 16).max(0) * CY;
    let u = i32::from(u) - 128;
    let v = i32::from(v) - 128;

    let ruv = HALF + CVR * v;
    let guv = HALF + CVG * v + CUG * u;
    let buv = HALF + CUB * u;

    let saturate = |c: i32| (c >> SHIFT).clamp(0, 255) as u8;

    [saturate(y + ruv), saturate(y + guv), saturate(y + buv)]
}

/// Expands every [`YuyvPair`] back into two RGB pixels sharing the same chroma
pub(crate) struct YuyvToRgb<S> {
    yuyv_src: S,
}

impl<S: YuyvSrc> YuyvToRgb<S> {
    pub(crate) fn new(yuyv_src: S) -> Self {
        Self { yuyv_src }
    }
}

impl<S: YuyvSrc> RgbSrc for YuyvToRgb<S> {
    #[inline(always)]
    fn read(&mut self, x: usize, y: usize) -> RgbPixel {
        let YuyvPair { y0, u, y1, v } = self.yuyv_src.read(x & !1, y);

        let luma = if x % 2 == 0 { y0 } else { y1 };

        RgbPixel::from_components::<false>(yuv_to_rgb(luma, u, v))
    }
}
