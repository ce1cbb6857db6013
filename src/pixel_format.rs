use crate::plane_decs::*;

/// Supported pixel formats, all of them stored in a single interleaved plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PixelFormat {
    /// Packed Y0 U Y1 V, 4:2:2 sub sampling, 2 bytes per pixel
    YUYV,

    /// Single channel, 1 byte per pixel
    Gray,

    /// Interleaved R G B, 3 bytes per pixel
    RGB,

    /// Interleaved B G R, 3 bytes per pixel
    BGR,
}

impl PixelFormat {
    /// Calculate the required buffer size in bytes given the [`PixelFormat`] self and image dimensions (in pixel width, height).
    pub fn buffer_size(self, width: usize, height: usize) -> usize {
        self.packed_stride(width) * height
    }

    /// Calculate the stride of an image in a packed buffer
    pub fn packed_stride(self, width: usize) -> usize {
        self.plane_desc().packed_stride(width)
    }

    /// Number of bytes a single pixel occupies
    pub fn bytes_per_element(self) -> usize {
        self.plane_desc().bytes_per_element
    }

    /// Check if the given plane+stride is valid for dimensions
    pub fn bounds_check(
        self,
        plane: &[u8],
        stride: usize,
        width: usize,
        height: usize,
    ) -> Result<(), BoundsCheckError> {
        let desc = self.plane_desc();

        // Ensure stride is not smaller than the width would allow
        let min_stride = desc.packed_stride(width);

        if min_stride > stride {
            return Err(BoundsCheckError::InvalidStride {
                minimum: min_stride,
                got: stride,
            });
        }

        // Ensure slice is large enough
        let min_len = desc.min_len(width, height, stride);

        if min_len > plane.len() {
            return Err(BoundsCheckError::InvalidPlaneSize {
                minimum: min_len,
                got: plane.len(),
            });
        }

        Ok(())
    }

    pub(crate) fn plane_desc(&self) -> &'static PlaneDesc {
        use PixelFormat::*;

        match self {
            YUYV => &YUYV_PLANE,
            Gray => &GRAY_PLANE,
            RGB | BGR => &RGB_PLANE,
        }
    }

    pub fn variants() -> impl IntoIterator<Item = Self> {
        use PixelFormat::*;

        [YUYV, Gray, RGB, BGR]
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BoundsCheckError {
    #[error("invalid stride, expected it to be at least {minimum}, but got {got}")]
    InvalidStride { minimum: usize, got: usize },

    #[error("invalid plane size, expected it to be at least {minimum}, but got {got}")]
    InvalidPlaneSize { minimum: usize, got: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yuyv_uses_two_bytes_per_pixel() {
        assert_eq!(PixelFormat::YUYV.buffer_size(6, 4), 6 * 4 * 2);
        assert_eq!(PixelFormat::YUYV.packed_stride(6), 12);
        assert_eq!(PixelFormat::Gray.packed_stride(6), 6);
        assert_eq!(PixelFormat::BGR.bytes_per_element(), 3);
    }

    #[test]
    fn bounds_check_rejects_short_stride() {
        let buf = vec![0u8; 64];

        let err = PixelFormat::YUYV.bounds_check(&buf, 7, 4, 2).unwrap_err();

        assert!(matches!(
            err,
            BoundsCheckError::InvalidStride { minimum: 8, got: 7 }
        ));
    }

    #[test]
    fn bounds_check_rejects_short_plane() {
        let buf = vec![0u8; 15];

        let err = PixelFormat::Gray.bounds_check(&buf, 4, 4, 4).unwrap_err();

        assert!(matches!(
            err,
            BoundsCheckError::InvalidPlaneSize {
                minimum: 16,
                got: 15
            }
        ));
    }

    #[test]
    fn yuyv_buffer_passes_as_half_width_gray() {
        // The misinterpretation case: a W*H*2 buffer is plenty for a W*H gray image
        let buf = vec![0u8; PixelFormat::YUYV.buffer_size(10, 10)];

        PixelFormat::Gray.bounds_check(&buf, 10, 10, 10).unwrap();
    }
}
