use crate::{
    AnySlice, BoundsCheckError, ImageMut, ImageRef, ImageRefExt, PixelFormat,
    plane_decs::PlaneDesc,
};

/// Error indicating an invalid [`Window`] for a given image
#[derive(Debug, thiserror::Error)]
pub enum CropError {
    #[error("the given window coordinates go out of the parent's image bounds")]
    WindowSizeOutOfBounds,

    #[error("The parent image doesn't pass the bounds check: {0}")]
    BoundsCheck(#[from] BoundsCheckError),
}

/// Rect used to mark the "cropping" window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// Wrapper around [`ImageRef`]/[`ImageMut`] and a [`Window`] cropping the wrapped image
///
/// The crop never copies, it inherits the parent's stride and starts at [`window_offset`].
pub struct Cropped<T>(T, Window);

impl<T: ImageRef + ImageRefExt> Cropped<T> {
    pub fn new(t: T, window: Window) -> Result<Self, CropError> {
        t.bounds_check()?;

        let w = window
            .x
            .checked_add(window.width)
            .ok_or(CropError::WindowSizeOutOfBounds)?;

        let h = window
            .y
            .checked_add(window.height)
            .ok_or(CropError::WindowSizeOutOfBounds)?;

        if (w > t.width()) || (h > t.height()) {
            return Err(CropError::WindowSizeOutOfBounds);
        }

        log::trace!(
            "cropping {:?} {}x{} at {:?}",
            t.format(),
            t.width(),
            t.height(),
            window
        );

        Ok(Self(t, window))
    }

    pub fn window(&self) -> Window {
        self.1
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Byte offset of the first element of `window` inside a plane of the given format and stride
///
/// `y * stride + x * bytes_per_element`, the element size is taken from the format the plane
/// is *declared* as, not the one it was written in.
pub fn window_offset(format: PixelFormat, stride: usize, window: Window) -> usize {
    window.y * stride + window.x * format.bytes_per_element()
}

unsafe impl<T: ImageRef> ImageRef for Cropped<T> {
    fn format(&self) -> PixelFormat {
        self.0.format()
    }

    fn width(&self) -> usize {
        self.1.width
    }

    fn height(&self) -> usize {
        self.1.height
    }

    fn plane(&self) -> (&[u8], usize) {
        let format = self.format();
        let (plane, stride) = self.0.plane();

        crop_plane(format, format.plane_desc(), plane, stride, self.1)
    }
}

unsafe impl<T: ImageMut> ImageMut for Cropped<T> {
    fn plane_mut(&mut self) -> (&mut [u8], usize) {
        let format = self.format();
        let window = self.1;
        let (plane, stride) = self.0.plane_mut();

        crop_plane(format, format.plane_desc(), plane, stride, window)
    }
}

fn crop_plane<S: AnySlice>(
    format: PixelFormat,
    plane_desc: &PlaneDesc,
    slice: S,
    stride: usize,
    window: Window,
) -> (S, usize) {
    if window.width == 0 || window.height == 0 {
        return (S::default(), stride);
    }

    // First trim the bytes "in front" of the window
    let split_at = window_offset(format, stride, window);
    let (_, slice) = slice.slice_split_at(split_at);

    // Trim the bytes at the end of the window, the last row ends right after its last element
    let split_at = plane_desc.min_len(window.width, window.height, stride);
    let (slice, _) = slice.slice_split_at(split_at);

    (slice, stride)
}
