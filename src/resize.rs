use crate::planes::{rows, rows_mut};
use crate::{ConvertError, ImageMut, ImageRef, ImageRefExt, PixelFormat};

pub use fir::{FilterType, ResizeAlg};

/// Everything that can go wrong when calling [`Resizer::resize`]
#[derive(Debug, thiserror::Error)]
pub enum ResizeError {
    #[error("source and destination images have different pixel formats")]
    DifferentFormats,

    #[error("resizing {0:?} images is not supported")]
    UnsupportedFormat(PixelFormat),

    #[error(transparent)]
    ImageBuffer(#[from] fir::ImageBufferError),

    #[error(transparent)]
    Resize(#[from] fir::ResizeError),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Wrapper over [`fast_image_resize`](fir) to resize [`Gray`](PixelFormat::Gray),
/// [`RGB`](PixelFormat::RGB) and [`BGR`](PixelFormat::BGR) images
///
/// YUYV images are not supported.
pub struct Resizer {
    alg: fir::ResizeAlg,
    fir: fir::Resizer,
}

impl Resizer {
    pub fn new(alg: fir::ResizeAlg) -> Self {
        Self {
            alg,
            fir: fir::Resizer::new(),
        }
    }

    /// Resize an image. `src` and `dst` must have the same pixel format.
    pub fn resize(&mut self, src: &dyn ImageRef, dst: &mut dyn ImageMut) -> Result<(), ResizeError> {
        let format = src.format();

        if format != dst.format() {
            return Err(ResizeError::DifferentFormats);
        }

        let pixel_type = format
            .plane_desc()
            .pixel_type
            .ok_or(ResizeError::UnsupportedFormat(format))?;

        src.bounds_check().map_err(ConvertError::from)?;
        dst.bounds_check().map_err(ConvertError::from)?;

        // fir only takes buffers without row padding
        let packed;
        let (mut src_plane, src_stride) = src.plane();
        if src_stride != format.packed_stride(src.width()) {
            packed = ImageRefExt::clone_packed(&src)?;
            src_plane = packed.buffer().as_slice();
        }

        let src_view = fir::images::ImageRef::new(
            src.width() as u32,
            src.height() as u32,
            &src_plane[..format.buffer_size(src.width(), src.height())],
            pixel_type,
        )?;

        let mut dst_image =
            fir::images::Image::new(dst.width() as u32, dst.height() as u32, pixel_type);

        let options = fir::ResizeOptions::new().resize_alg(self.alg);

        self.fir.resize(&src_view, &mut dst_image, &options)?;

        log::debug!(
            "resized {:?} from {}x{} to {}x{}",
            format,
            src.width(),
            src.height(),
            dst.width(),
            dst.height()
        );

        let row_len = format.packed_stride(dst.width());
        let height = dst.height();
        let (dst_plane, dst_stride) = dst.plane_mut();

        for (src_row, dst_row) in rows(dst_image.buffer(), row_len, row_len, height)
            .zip(rows_mut(dst_plane, dst_stride, row_len, height))
        {
            dst_row.copy_from_slice(src_row);
        }

        Ok(())
    }
}
