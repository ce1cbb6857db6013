use crate::{
    ConvertError, Image, ImageError, ImageRef, ImageRefExt, PixelFormat, Window, convert,
};

/// Owned YUYV buffer produced by [`pack_yuyv`] or [`pack_bgr`]
///
/// Rows are stored without padding, `buffer.len() == width * height * 2` and `width` is always
/// even. Views returned by [`PackedYuyv::view`] and [`PackedYuyv::view_as`] borrow the buffer
/// and never copy it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedYuyv {
    buffer: Vec<u8>,
    width: usize,
    height: usize,
}

impl PackedYuyv {
    fn empty(height: usize) -> Self {
        Self {
            buffer: vec![],
            width: 0,
            height,
        }
    }

    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_buffer(self) -> Vec<u8> {
        self.buffer
    }

    /// Effective (even) width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes per row
    pub fn stride(&self) -> usize {
        PixelFormat::YUYV.packed_stride(self.width)
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Zero-copy [`PixelFormat::YUYV`] view over the buffer
    pub fn view(&self) -> Result<Image<&[u8]>, ImageError> {
        self.view_as(PixelFormat::YUYV)
    }

    /// Zero-copy view over the buffer declared as `format`, using the packed stride of
    /// `format` for the same width and height
    ///
    /// Anything but [`PixelFormat::YUYV`] misreads the bytes. With [`PixelFormat::Gray`] every
    /// view row covers half a real row, luma and chroma bytes alternate in it, and the view only
    /// reaches the first half of the buffer.
    pub fn view_as(&self, format: PixelFormat) -> Result<Image<&[u8]>, ImageError> {
        Image::from_buffer(format, &self.buffer[..], None, self.width, self.height)
    }
}

/// Pack an [`RGB`](PixelFormat::RGB) or [`BGR`](PixelFormat::BGR) image into YUYV
///
/// Every pixel pair `(x, x + 1)` becomes `[Y0, U, Y1, V]` where `U`/`V` are the truncating
/// average of both pixels' chroma. An odd trailing column is dropped, an image narrower than 2
/// pixels produces an empty buffer.
///
/// Only fails if `src` isn't RGB/BGR or doesn't pass its bounds check.
pub fn pack_yuyv(src: &dyn ImageRef) -> Result<PackedYuyv, ConvertError> {
    let format = src.format();

    if !matches!(format, PixelFormat::RGB | PixelFormat::BGR) {
        return Err(ConvertError::UnsupportedConversion {
            src: format,
            dst: PixelFormat::YUYV,
        });
    }

    src.bounds_check()?;

    let width = src.width() & !1;
    let height = src.height();

    if width != src.width() {
        log::debug!(
            "dropping last column of {}x{} {:?} image to pack it as YUYV",
            src.width(),
            height,
            format
        );
    }

    if width == 0 || height == 0 {
        return Ok(PackedYuyv::empty(height));
    }

    let src = src.crop(Window {
        x: 0,
        y: 0,
        width,
        height,
    })?;

    let mut dst = Image::blank(PixelFormat::YUYV, width, height);

    convert(&src, &mut dst)?;

    log::debug!("packed {width}x{height} YUYV, {} bytes", dst.buffer().len());

    Ok(PackedYuyv {
        buffer: dst.into_buffer(),
        width,
        height,
    })
}

/// Pack a tightly packed B G R buffer of `width` x `height` pixels into YUYV
///
/// See [`pack_yuyv`] for the packing rules.
///
/// # Panics
///
/// If `bgr` is too small for the given dimensions this function will panic
pub fn pack_bgr(bgr: &[u8], width: usize, height: usize) -> PackedYuyv {
    if width < 2 || height == 0 {
        return PackedYuyv::empty(height);
    }

    let src = Image::from_buffer(PixelFormat::BGR, bgr, None, width, height)
        .expect("bgr buffer must be large enough for the given dimensions");

    pack_yuyv(&src).expect("a bounds checked BGR image can always be packed")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: usize, height: usize) -> Vec<u8> {
        (0..width * height * 3).map(|i| (i * 7 % 256) as u8).collect()
    }

    #[test]
    fn even_width_size() {
        for (w, h) in [(2, 2), (4, 3), (16, 9)] {
            let packed = pack_bgr(&gradient(w, h), w, h);

            assert_eq!(packed.buffer().len(), w * h * 2);
            assert_eq!(packed.width(), w);
            assert_eq!(packed.height(), h);
            assert_eq!(packed.stride(), w * 2);
        }
    }

    #[test]
    fn odd_width_drops_last_column() {
        let (w, h) = (5, 3);
        let bgr = gradient(w, h);

        let trimmed: Vec<u8> = bgr
            .chunks_exact(w * 3)
            .flat_map(|row| row[..(w - 1) * 3].iter().copied())
            .collect();

        let packed = pack_bgr(&bgr, w, h);

        assert_eq!(packed.width(), w - 1);
        assert_eq!(packed, pack_bgr(&trimmed, w - 1, h));
    }

    #[test]
    fn degenerate_sizes_are_empty() {
        assert!(pack_bgr(&[1, 2, 3], 1, 1).is_empty());
        assert_eq!(pack_bgr(&[1, 2, 3, 4, 5, 6], 1, 2).width(), 0);
        assert!(pack_bgr(&[], 0, 0).is_empty());
        assert!(pack_bgr(&[], 4, 0).is_empty());
    }

    #[test]
    fn deterministic() {
        let bgr = gradient(8, 8);

        assert_eq!(pack_bgr(&bgr, 8, 8), pack_bgr(&bgr, 8, 8));
    }

    #[test]
    fn byte_order_is_y_u_y_v() {
        let packed = pack_bgr(&[255, 0, 0, 0, 255, 0], 2, 1);

        assert_eq!(packed.buffer()[..4], [41, 147, 144, 72]);
    }

    #[test]
    fn pack_yuyv_rejects_non_rgb_sources() {
        let gray = Image::blank(PixelFormat::Gray, 4, 4);

        let err = pack_yuyv(&gray).unwrap_err();

        assert!(matches!(err, ConvertError::UnsupportedConversion { .. }));
    }

    #[test]
    fn view_borrows_the_buffer() {
        let packed = pack_bgr(&gradient(4, 2), 4, 2);

        let view = packed.view().unwrap();

        assert_eq!(view.plane().0.as_ptr(), packed.buffer().as_ptr());
        assert_eq!(view.stride(), 8);
        assert_eq!(view.format(), PixelFormat::YUYV);
    }

    #[test]
    fn view_as_gray_uses_gray_stride() {
        let packed = pack_bgr(&gradient(4, 2), 4, 2);

        let view = packed.view_as(PixelFormat::Gray).unwrap();

        assert_eq!(view.stride(), 4);
        assert_eq!(view.plane().0.len(), 16);
    }
}
