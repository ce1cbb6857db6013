//! Pack RGB/BGR images into YUYV (YUY2) and look at the packed buffer through zero-copy views.
//!
//! A YUYV row stores two pixels in 4 bytes, `[Y0, U, Y1, V]`. A view that starts at an even
//! column lands on `[Y, U]` `[Y, V]` elements and decodes correctly. A view starting at an odd
//! column still has the right luma in every element, but its chroma slots are swapped. Wrapping
//! the same bytes as a single channel image mixes luma and chroma and halves every row.
//!
//! ```
//! use yuyv_parity::{ImageRef, ImageRefExt, PixelFormat, Window, pack_bgr};
//!
//! let bgr = vec![0x80u8; 8 * 2 * 3];
//! let packed = pack_bgr(&bgr, 8, 2);
//!
//! let view = packed.view().unwrap();
//! let odd = view
//!     .crop(Window { x: 1, y: 0, width: 4, height: 2 })
//!     .unwrap();
//!
//! assert_eq!(odd.format(), PixelFormat::YUYV);
//! ```

use formats::*;

pub use copy::copy;
pub use crop::{CropError, Cropped, Window, window_offset};
pub use formats::{rgb_to_u, rgb_to_v, rgb_to_y, yuv_to_rgb};
pub use crate::image::{Image, ImageError};
pub use image_traits::{ImageMut, ImageRef, ImageRefExt};
pub use packed::{PackedYuyv, pack_bgr, pack_yuyv};
pub use pixel_format::{BoundsCheckError, PixelFormat};
pub use planes::AnySlice;
#[cfg(feature = "resize")]
pub use resize::{FilterType, ResizeAlg, ResizeError, Resizer};

mod copy;
mod crop;
#[cfg(feature = "demo")]
pub mod demo;
mod formats;
mod image;
mod image_traits;
mod packed;
mod pixel_format;
mod plane_decs;
mod planes;
#[cfg(feature = "resize")]
mod resize;

/// Everything that can go wrong when calling [`convert`]
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("source and destination images have different dimensions")]
    MismatchedImageSize,

    #[error("conversion from {src:?} to {dst:?} is not supported")]
    UnsupportedConversion { src: PixelFormat, dst: PixelFormat },

    #[error("{0:?} image must have an even width, got {1}")]
    OddWidth(PixelFormat, usize),

    #[error(transparent)]
    Crop(#[from] CropError),

    #[error(transparent)]
    BoundsCheck(#[from] BoundsCheckError),
}

/// Verify that the input values are all valid and safe to move on to
fn verify_input_windows(src: &dyn ImageRef, dst: &dyn ImageMut) -> Result<(), ConvertError> {
    // Src and Dst must be the same size
    if src.width() != dst.width() || src.height() != dst.height() {
        return Err(ConvertError::MismatchedImageSize);
    }

    Ok(())
}

/// Convert pixel-format of `src` into `dst`
///
/// Supported conversions:
///
/// - same format on both sides: plain copy
/// - [`RGB`](PixelFormat::RGB) <-> [`BGR`](PixelFormat::BGR)
/// - RGB/BGR -> [`YUYV`](PixelFormat::YUYV), the destination width must be even
/// - YUYV -> [`Gray`](PixelFormat::Gray), any width
/// - YUYV -> RGB/BGR, the source width must be even
///
/// YUYV sources are always decoded relative to the origin of the given view: element `0` is
/// treated as `[Y, U]` and element `1` as `[Y, V]` no matter where the view starts inside
/// the buffer it was cropped from.
pub fn convert(src: &dyn ImageRef, dst: &mut dyn ImageMut) -> Result<(), ConvertError> {
    use PixelFormat::*;

    verify_input_windows(src, dst)?;

    log::debug!(
        "converting {}x{} {:?} to {:?}",
        src.width(),
        src.height(),
        src.format(),
        dst.format()
    );

    match (src.format(), dst.format()) {
        (src_format, dst_format) if src_format == dst_format => copy(src, dst),
        (RGB, BGR) => RGBWriter::<true, _>::write(dst, RGBReader::<false>::new(src)?),
        (BGR, RGB) => RGBWriter::<false, _>::write(dst, RGBReader::<true>::new(src)?),
        (RGB, YUYV) => YUYVWriter::write(dst, RgbToYuyv::new(RGBReader::<false>::new(src)?)),
        (BGR, YUYV) => YUYVWriter::write(dst, RgbToYuyv::new(RGBReader::<true>::new(src)?)),
        (YUYV, Gray) => GrayWriter::write(dst, YUYVLumaReader::new(src)?),
        (YUYV, RGB) => RGBWriter::<false, _>::write(dst, YuyvToRgb::new(YUYVReader::new(src)?)),
        (YUYV, BGR) => RGBWriter::<true, _>::write(dst, YuyvToRgb::new(YUYVReader::new(src)?)),
        (src_format, dst_format) => Err(ConvertError::UnsupportedConversion {
            src: src_format,
            dst: dst_format,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bgr_image(width: usize, height: usize, f: impl Fn(usize, usize) -> [u8; 3]) -> Image<Vec<u8>> {
        let mut image = Image::blank(PixelFormat::BGR, width, height);

        let (plane, stride) = image.plane_mut();
        for y in 0..height {
            for x in 0..width {
                let offset = y * stride + x * 3;
                plane[offset..offset + 3].copy_from_slice(&f(x, y));
            }
        }

        image
    }

    #[test]
    fn rgb_bgr_swizzle() {
        let bgr = bgr_image(3, 1, |x, _| [x as u8, 10, 20]);
        let mut rgb = Image::blank(PixelFormat::RGB, 3, 1);

        convert(&bgr, &mut rgb).unwrap();

        assert_eq!(rgb.buffer()[..], [20, 10, 0, 20, 10, 1, 20, 10, 2]);
    }

    #[test]
    fn bgr_to_yuyv_writes_pairs() {
        let bgr = bgr_image(2, 1, |x, _| if x == 0 { [255, 0, 0] } else { [0, 255, 0] });
        let mut yuyv = Image::blank(PixelFormat::YUYV, 2, 1);

        convert(&bgr, &mut yuyv).unwrap();

        assert_eq!(yuyv.buffer()[..], [41, 147, 144, 72]);
    }

    #[test]
    fn rgb_to_yuyv_reads_swapped_order() {
        let mut rgb = Image::blank(PixelFormat::RGB, 2, 1);
        rgb.plane_mut().0.copy_from_slice(&[0, 0, 255, 0, 255, 0]);
        let mut yuyv = Image::blank(PixelFormat::YUYV, 2, 1);

        convert(&rgb, &mut yuyv).unwrap();

        assert_eq!(yuyv.buffer()[..], [41, 147, 144, 72]);
    }

    #[test]
    fn yuyv_dst_must_have_even_width() {
        let bgr = Image::blank(PixelFormat::BGR, 3, 1);
        let mut yuyv = Image::blank(PixelFormat::YUYV, 3, 1);

        let err = convert(&bgr, &mut yuyv).unwrap_err();

        assert!(matches!(err, ConvertError::OddWidth(PixelFormat::YUYV, 3)));
    }

    #[test]
    fn yuyv_to_gray_takes_first_byte_of_every_element() {
        let yuyv = Image::from_buffer(
            PixelFormat::YUYV,
            vec![1, 100, 2, 200, 3, 101, 4, 201],
            None,
            4,
            1,
        )
        .unwrap();
        let mut gray = Image::blank(PixelFormat::Gray, 4, 1);

        convert(&yuyv, &mut gray).unwrap();

        assert_eq!(gray.buffer()[..], [1, 2, 3, 4]);
    }

    #[test]
    fn yuyv_to_gray_accepts_odd_width() {
        let yuyv = Image::from_buffer(PixelFormat::YUYV, vec![5, 128, 6, 128, 7, 128], None, 3, 1)
            .unwrap();
        let mut gray = Image::blank(PixelFormat::Gray, 3, 1);

        convert(&yuyv, &mut gray).unwrap();

        assert_eq!(gray.buffer()[..], [5, 6, 7]);
    }

    #[test]
    fn yuyv_to_bgr_rejects_odd_width() {
        let yuyv = Image::blank(PixelFormat::YUYV, 3, 1);
        let mut bgr = Image::blank(PixelFormat::BGR, 3, 1);

        let err = convert(&yuyv, &mut bgr).unwrap_err();

        assert!(matches!(err, ConvertError::OddWidth(PixelFormat::YUYV, 3)));
    }

    #[test]
    fn yuyv_to_bgr_shares_chroma_per_pair() {
        let yuyv = Image::from_buffer(PixelFormat::YUYV, vec![126, 128, 235, 128], None, 2, 1)
            .unwrap();
        let mut bgr = Image::blank(PixelFormat::BGR, 2, 1);

        convert(&yuyv, &mut bgr).unwrap();

        assert_eq!(bgr.buffer()[..], [128, 128, 128, 255, 255, 255]);
    }

    #[test]
    fn mismatched_sizes_are_rejected() {
        let bgr = Image::blank(PixelFormat::BGR, 4, 2);
        let mut yuyv = Image::blank(PixelFormat::YUYV, 4, 4);

        let err = convert(&bgr, &mut yuyv).unwrap_err();

        assert!(matches!(err, ConvertError::MismatchedImageSize));
    }

    #[test]
    fn unsupported_pairs_are_rejected() {
        let gray = Image::blank(PixelFormat::Gray, 4, 2);
        let mut yuyv = Image::blank(PixelFormat::YUYV, 4, 2);

        let err = convert(&gray, &mut yuyv).unwrap_err();

        assert!(matches!(
            err,
            ConvertError::UnsupportedConversion {
                src: PixelFormat::Gray,
                dst: PixelFormat::YUYV
            }
        ));
    }
}
