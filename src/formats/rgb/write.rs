use crate::formats::rgb::RgbSrc;
use crate::formats::visit::{ImageVisitor, visit};
use crate::{ConvertError, ImageMut, ImageRefExt};

/// Writes 3 Bytes for every visited pixel in R G B order, B G R when `REVERSE`
pub(crate) struct RGBWriter<'a, const REVERSE: bool, S: RgbSrc> {
    rgb: &'a mut [u8],
    rgb_stride: usize,

    rgb_src: S,
}

impl<'a, const REVERSE: bool, S: RgbSrc> RGBWriter<'a, REVERSE, S> {
    pub(crate) fn write(dst: &'a mut dyn ImageMut, rgb_src: S) -> Result<(), ConvertError> {
        dst.bounds_check()?;

        let dst_width = dst.width();
        let dst_height = dst.height();

        let (rgb, rgb_stride) = dst.plane_mut();

        visit(
            dst_width,
            dst_height,
            Self {
                rgb,
                rgb_stride,
                rgb_src,
            },
        );

        Ok(())
    }
}

impl<const REVERSE: bool, S: RgbSrc> ImageVisitor for RGBWriter<'_, REVERSE, S> {
    #[inline(always)]
    fn visit(&mut self, x: usize, y: usize) {
        let px = self.rgb_src.read(x, y);

        let offset = y * self.rgb_stride + x * 3;

        self.rgb[offset..offset + 3].copy_from_slice(&px.into_components::<REVERSE>());
    }
}
