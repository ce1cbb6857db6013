use super::YuyvSrc;
use crate::formats::visit::{ImageVisitor, visit_pairs};
use crate::{ConvertError, ImageMut, ImageRefExt, PixelFormat};

/// Writes 4 Bytes `[y0, u, y1, v]` for every visited pixel pair
pub(crate) struct YUYVWriter<'a, S>
where
    S: YuyvSrc,
{
    yuyv: &'a mut [u8],

    yuyv_stride: usize,

    yuyv_src: S,
}

impl<'a, S> YUYVWriter<'a, S>
where
    S: YuyvSrc,
{
    pub(crate) fn write(dst: &'a mut dyn ImageMut, yuyv_src: S) -> Result<(), ConvertError> {
        dst.bounds_check()?;

        let dst_width = dst.width();
        let dst_height = dst.height();

        if dst_width % 2 != 0 {
            return Err(ConvertError::OddWidth(PixelFormat::YUYV, dst_width));
        }

        let (yuyv, yuyv_stride) = dst.plane_mut();

        visit_pairs(
            dst_width,
            dst_height,
            Self {
                yuyv,
                yuyv_stride,
                yuyv_src,
            },
        );

        Ok(())
    }
}

impl<S> ImageVisitor for YUYVWriter<'_, S>
where
    S: YuyvSrc,
{
    #[inline(always)]
    fn visit(&mut self, x: usize, y: usize) {
        let pair = self.yuyv_src.read(x, y);

        let offset = y * self.yuyv_stride + x * 2;

        self.yuyv[offset..offset + 4].copy_from_slice(&pair.to_bytes());
    }
}
