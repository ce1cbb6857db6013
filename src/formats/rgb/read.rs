use crate::formats::rgb::{RgbPixel, RgbSrc};
use crate::{ConvertError, ImageRef, ImageRefExt};

/// Reads 3 Bytes for every visited pixel, B G R order when `REVERSE`
pub(crate) struct RGBReader<'a, const REVERSE: bool> {
    rgb: &'a [u8],
    rgb_stride: usize,
}

impl<'a, const REVERSE: bool> RGBReader<'a, REVERSE> {
    pub(crate) fn new(src: &'a dyn ImageRef) -> Result<Self, ConvertError> {
        src.bounds_check()?;

        let (rgb, rgb_stride) = src.plane();

        Ok(Self { rgb, rgb_stride })
    }
}

impl<const REVERSE: bool> RgbSrc for RGBReader<'_, REVERSE> {
    #[inline(always)]
    fn read(&mut self, x: usize, y: usize) -> RgbPixel {
        let offset = y * self.rgb_stride + x * 3;

        let [c0, c1, c2] = [self.rgb[offset], self.rgb[offset + 1], self.rgb[offset + 2]];

        RgbPixel::from_components::<REVERSE>([c0, c1, c2])
    }
}
