use crate::formats::visit::{ImageVisitor, visit};
use crate::{ConvertError, ImageMut, ImageRefExt};

pub(crate) trait LumaSrc {
    fn read(&mut self, x: usize, y: usize) -> u8;
}

/// Writes 1 Byte for every visited pixel
pub(crate) struct GrayWriter<'a, S: LumaSrc> {
    gray: &'a mut [u8],
    gray_stride: usize,

    luma_src: S,
}

impl<'a, S: LumaSrc> GrayWriter<'a, S> {
    pub(crate) fn write(dst: &'a mut dyn ImageMut, luma_src: S) -> Result<(), ConvertError> {
        dst.bounds_check()?;

        let dst_width = dst.width();
        let dst_height = dst.height();

        let (gray, gray_stride) = dst.plane_mut();

        visit(
            dst_width,
            dst_height,
            Self {
                gray,
                gray_stride,
                luma_src,
            },
        );

        Ok(())
    }
}

impl<S: LumaSrc> ImageVisitor for GrayWriter<'_, S> {
    #[inline(always)]
    fn visit(&mut self, x: usize, y: usize) {
        self.gray[y * self.gray_stride + x] = self.luma_src.read(x, y);
    }
}
