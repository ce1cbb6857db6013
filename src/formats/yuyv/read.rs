use super::{YuyvPair, YuyvSrc};
use crate::formats::gray::LumaSrc;
use crate::{ConvertError, ImageRef, ImageRefExt, PixelFormat};

/// Reads `[y0, u, y1, v]` pairs relative to the origin of the given view
///
/// A view starting at an odd column of the parent buffer is read the same way, so its
/// pairs come out as `[y1, v] [y0, u]` of two neighbouring pairs of the parent.
pub(crate) struct YUYVReader<'a> {
    yuyv: &'a [u8],

    yuyv_stride: usize,
}

impl<'a> YUYVReader<'a> {
    pub(crate) fn new(src: &'a dyn ImageRef) -> Result<Self, ConvertError> {
        src.bounds_check()?;

        if src.width() % 2 != 0 {
            return Err(ConvertError::OddWidth(PixelFormat::YUYV, src.width()));
        }

        let (yuyv, yuyv_stride) = src.plane();

        Ok(Self { yuyv, yuyv_stride })
    }
}

impl YuyvSrc for YUYVReader<'_> {
    #[inline(always)]
    fn read(&mut self, x: usize, y: usize) -> YuyvPair {
        let offset = y * self.yuyv_stride + x * 2;

        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&self.yuyv[offset..offset + 4]);

        YuyvPair::from_bytes(bytes)
    }
}

/// Reads the first byte of every 2 byte element, works for any width
pub(crate) struct YUYVLumaReader<'a> {
    yuyv: &'a [u8],

    yuyv_stride: usize,
}

impl<'a> YUYVLumaReader<'a> {
    pub(crate) fn new(src: &'a dyn ImageRef) -> Result<Self, ConvertError> {
        src.bounds_check()?;

        let (yuyv, yuyv_stride) = src.plane();

        Ok(Self { yuyv, yuyv_stride })
    }
}

impl LumaSrc for YUYVLumaReader<'_> {
    #[inline(always)]
    fn read(&mut self, x: usize, y: usize) -> u8 {
        self.yuyv[y * self.yuyv_stride + x * 2]
    }
}
