use crate::planes::{rows, rows_mut};
use crate::{ConvertError, ImageMut, ImageRef, ImageRefExt, verify_input_windows};

/// Copy `src` into `dst` row by row, honoring both strides. Formats and dimensions must match.
pub fn copy(src: &dyn ImageRef, dst: &mut dyn ImageMut) -> Result<(), ConvertError> {
    verify_input_windows(src, dst)?;

    if src.format() != dst.format() {
        return Err(ConvertError::UnsupportedConversion {
            src: src.format(),
            dst: dst.format(),
        });
    }

    src.bounds_check()?;
    dst.bounds_check()?;

    if src.width() == 0 || src.height() == 0 {
        return Ok(());
    }

    let n = src.format().packed_stride(src.width());
    let height = src.height();

    let (src_plane, src_stride) = src.plane();
    let (dst_plane, dst_stride) = dst.plane_mut();

    for (src_row, dst_row) in rows(src_plane, src_stride, n, height).zip(rows_mut(
        dst_plane, dst_stride, n, height,
    )) {
        dst_row.copy_from_slice(src_row);
    }

    Ok(())
}
