use crate::{BoundsCheckError, ImageMut, ImageRef, ImageRefExt, PixelFormat};

/// Basic wrapper around any image buffer, implementing the [`ImageRef`] and [`ImageMut`] trait
///
/// With `S = &[u8]` this is a zero-copy view over memory owned elsewhere.
#[derive(Debug, Clone)]
pub struct Image<S> {
    format: PixelFormat,
    buffer: S,
    stride: usize,
    width: usize,
    height: usize,
}

/// Everything that can go wrong when constructing an [`Image`]
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("width or height must not be zero")]
    InvalidDimensions,

    #[error(transparent)]
    BoundsCheck(#[from] BoundsCheckError),
}

impl Image<Vec<u8>> {
    pub fn blank(format: PixelFormat, width: usize, height: usize) -> Self {
        Self {
            format,
            buffer: vec![0u8; format.buffer_size(width, height)],
            stride: format.packed_stride(width),
            width,
            height,
        }
    }
}

impl<S> Image<S>
where
    Image<S>: ImageRef,
{
    /// Wrap `buffer` as an image of the given format. Without an explicit `stride` the rows are
    /// assumed to be packed.
    ///
    /// The format is taken at face value, nothing stops a YUYV buffer from being wrapped as
    /// [`PixelFormat::Gray`] as long as it is large enough.
    pub fn from_buffer(
        format: PixelFormat,
        buffer: S,
        stride: Option<usize>,
        width: usize,
        height: usize,
    ) -> Result<Self, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::InvalidDimensions);
        }

        let stride = stride.unwrap_or_else(|| format.packed_stride(width));

        let this = Self {
            format,
            buffer,
            stride,
            width,
            height,
        };

        this.bounds_check()?;

        Ok(this)
    }

    pub fn buffer(&self) -> &S {
        &self.buffer
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn into_buffer(self) -> S {
        self.buffer
    }
}

unsafe impl<S: AsRef<[u8]>> ImageRef for Image<S> {
    fn format(&self) -> PixelFormat {
        self.format
    }
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
    fn plane(&self) -> (&[u8], usize) {
        (self.buffer.as_ref(), self.stride)
    }
}

unsafe impl<S: AsRef<[u8]> + AsMut<[u8]>> ImageMut for Image<S> {
    fn plane_mut(&mut self) -> (&mut [u8], usize) {
        (self.buffer.as_mut(), self.stride)
    }
}
