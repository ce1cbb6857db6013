use crate::{
    BoundsCheckError, ConvertError, CropError, Cropped, Image, PixelFormat, Window, copy,
};

/// # Safety
///
/// Values returned must always be the same every call
pub unsafe trait ImageRef {
    fn format(&self) -> PixelFormat;
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    /// Returns the image's plane with its associated stride
    fn plane(&self) -> (&[u8], usize);
}

/// # Safety
///
/// Values returned must always be the same every call
pub unsafe trait ImageMut: ImageRef {
    /// Returns the image's plane with its associated stride
    fn plane_mut(&mut self) -> (&mut [u8], usize);
}

/// [`ImageRef`] extension methods
pub trait ImageRefExt: ImageRef {
    /// Perform a bounds check, return an error when it fails
    fn bounds_check(&self) -> Result<(), BoundsCheckError> {
        let (plane, stride) = self.plane();

        self.format()
            .bounds_check(plane, stride, self.width(), self.height())
    }

    /// Crop the image with the given window
    fn crop(self, window: Window) -> Result<Cropped<Self>, CropError>
    where
        Self: Sized,
    {
        Cropped::new(self, window)
    }

    /// Crop the image to the next lowest even resolution
    fn crop_even(self) -> Result<Cropped<Self>, CropError>
    where
        Self: Sized,
    {
        let width = self.width() & !1;
        let height = self.height() & !1;

        Cropped::new(
            self,
            Window {
                x: 0,
                y: 0,
                width,
                height,
            },
        )
    }

    /// Deep copy the image into a newly allocated buffer without any row padding
    fn clone_packed(&self) -> Result<Image<Vec<u8>>, ConvertError>
    where
        Self: Sized,
    {
        let mut dst = Image::blank(self.format(), self.width(), self.height());

        copy(self, &mut dst)?;

        Ok(dst)
    }
}

impl<T: ImageRef + ?Sized> ImageRefExt for T {}

unsafe impl<T: ImageRef> ImageRef for &T {
    fn format(&self) -> PixelFormat {
        <T as ImageRef>::format(self)
    }

    fn width(&self) -> usize {
        <T as ImageRef>::width(self)
    }

    fn height(&self) -> usize {
        <T as ImageRef>::height(self)
    }

    fn plane(&self) -> (&[u8], usize) {
        <T as ImageRef>::plane(self)
    }
}

unsafe impl<T: ImageRef> ImageRef for &mut T {
    fn format(&self) -> PixelFormat {
        <T as ImageRef>::format(self)
    }

    fn width(&self) -> usize {
        <T as ImageRef>::width(self)
    }

    fn height(&self) -> usize {
        <T as ImageRef>::height(self)
    }

    fn plane(&self) -> (&[u8], usize) {
        <T as ImageRef>::plane(self)
    }
}

unsafe impl<T: ImageMut> ImageMut for &mut T {
    fn plane_mut(&mut self) -> (&mut [u8], usize) {
        <T as ImageMut>::plane_mut(self)
    }
}

unsafe impl ImageRef for &dyn ImageRef {
    fn format(&self) -> PixelFormat {
        (**self).format()
    }

    fn width(&self) -> usize {
        (**self).width()
    }

    fn height(&self) -> usize {
        (**self).height()
    }

    fn plane(&self) -> (&[u8], usize) {
        (**self).plane()
    }
}

unsafe impl ImageRef for &mut dyn ImageMut {
    fn format(&self) -> PixelFormat {
        (**self).format()
    }

    fn width(&self) -> usize {
        (**self).width()
    }

    fn height(&self) -> usize {
        (**self).height()
    }

    fn plane(&self) -> (&[u8], usize) {
        (**self).plane()
    }
}

unsafe impl ImageMut for &mut dyn ImageMut {
    fn plane_mut(&mut self) -> (&mut [u8], usize) {
        (**self).plane_mut()
    }
}
