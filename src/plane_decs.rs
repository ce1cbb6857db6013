#[cfg(feature = "resize")]
use fir::PixelType::*;

/// Description of the single plane every supported format uses. Drives bounds checks, stride
/// calculation, crop offsets and buffer sizes.
///
/// Not used for the implementation of the format read or write, only utility functions.
#[derive(Clone, Copy)]
pub(crate) struct PlaneDesc {
    /// Bytes one pixel ("element") occupies in a row
    pub(crate) bytes_per_element: usize,

    #[cfg(feature = "resize")]
    pub(crate) pixel_type: Option<fir::PixelType>,
}

impl PlaneDesc {
    pub(crate) fn packed_stride(&self, width: usize) -> usize {
        width * self.bytes_per_element
    }

    /// Minimum number of bytes a plane must have to hold `height` rows of `width` elements with the given stride
    pub(crate) fn min_len(&self, width: usize, height: usize, stride: usize) -> usize {
        if width == 0 || height == 0 {
            return 0;
        }

        stride * (height - 1) + self.packed_stride(width)
    }
}

pub(crate) const YUYV_PLANE: PlaneDesc = PlaneDesc {
    bytes_per_element: 2,
    // Pairs carry shared chroma, blending across them is meaningless
    #[cfg(feature = "resize")]
    pixel_type: None,
};

pub(crate) const GRAY_PLANE: PlaneDesc = PlaneDesc {
    bytes_per_element: 1,
    #[cfg(feature = "resize")]
    pixel_type: Some(U8),
};

pub(crate) const RGB_PLANE: PlaneDesc = PlaneDesc {
    bytes_per_element: 3,
    #[cfg(feature = "resize")]
    pixel_type: Some(U8x3),
};
