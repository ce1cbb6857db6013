/// Iterate over the first `row_len` bytes of `height` rows of a strided plane
///
/// # Panics
///
/// If `plane` is too small for the given dimensions this function will panic
pub(crate) fn rows(
    plane: &[u8],
    stride: usize,
    row_len: usize,
    height: usize,
) -> impl Iterator<Item = &[u8]> {
    (0..height).map(move |y| &plane[y * stride..y * stride + row_len])
}

/// Mutable version of [`rows`]
pub(crate) fn rows_mut(
    plane: &mut [u8],
    stride: usize,
    row_len: usize,
    height: usize,
) -> impl Iterator<Item = &mut [u8]> {
    // The last row may be shorter than stride, chunks handles that
    plane
        .chunks_mut(stride.max(1))
        .take(height)
        .map(move |row| &mut row[..row_len])
}

/// Helper trait implemented on &[T] and &mut [T]
#[diagnostic::on_unimplemented(message = "AnySlice is only implemented for &[T] and &mut [T].\n\
               When using or Vec<T> or similar try .as_slice() or .as_mut_slice()")]
pub trait AnySlice: sealed::Sealed + Default + Sized {
    fn slice_len(&self) -> usize;
    fn slice_split_at(self, at: usize) -> (Self, Self);
}

mod sealed {
    pub trait Sealed {}
    impl<T> Sealed for &[T] {}
    impl<T> Sealed for &mut [T] {}
}

impl<T> AnySlice for &[T] {
    fn slice_len(&self) -> usize {
        self.len()
    }

    fn slice_split_at(self, at: usize) -> (Self, Self) {
        self.split_at(at)
    }
}

impl<T> AnySlice for &mut [T] {
    fn slice_len(&self) -> usize {
        self.len()
    }

    fn slice_split_at(self, at: usize) -> (Self, Self) {
        self.split_at_mut(at)
    }
}
