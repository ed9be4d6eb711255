use bm_core::{Error, PackedBitmap, PackedView};

use crate::shift::shift_combine_row;

/// Computes the 8-connected outline of a packed binary bitmap.
///
/// An output bit is set iff it is unset in `src` and at least one of its up
/// to eight neighbors (horizontal, vertical, diagonal) is set. The result
/// has the same `row_bytes` and `height` as `src`; the input is read-only.
///
/// With `S(y)` the shift-combine of source row `y` and `R(y)` the raw row,
/// each output row is
///
/// ```text
/// out[y] = (S(y-1) | S(y) | S(y+1) | R(y-1) | R(y+1)) & !R(y)
/// ```
///
/// where terms for rows outside the bitmap are zero. `S(y)` carries the
/// horizontal and diagonal contributions, `R(y-1)`/`R(y+1)` the vertical
/// ones, and `& !R(y)` restricts the result to previously-unset pixels.
///
/// The scan is a single streaming pass: each `S(y)` is computed once into
/// one of three owned row buffers, rotated as the scan advances.
pub fn outline(src: &PackedView<'_>) -> Result<PackedBitmap, Error> {
    let w = src.row_bytes();
    let h = src.height();
    if w == 0 || h == 0 {
        return Err(Error::InvalidDimensions {
            row_bytes: w,
            height: h,
        });
    }

    let mut out = PackedBitmap::new_fill(w, h, 0);
    let mut dst = out.as_view_mut();

    // A single row has no vertical neighbors at all.
    if h == 1 {
        let r0 = src.row(0);
        let dst_row = dst.row_mut(0);
        shift_combine_row(r0, dst_row);
        for (d, &s) in dst_row.iter_mut().zip(r0) {
            *d &= !s;
        }
        return Ok(out);
    }

    let mut prev = vec![0u8; w];
    let mut curr = vec![0u8; w];
    let mut next = vec![0u8; w];

    shift_combine_row(src.row(0), &mut curr);
    shift_combine_row(src.row(1), &mut next);

    // Top row: no row above.
    {
        let r0 = src.row(0);
        let r1 = src.row(1);
        let dst_row = dst.row_mut(0);
        for x in 0..w {
            dst_row[x] = (curr[x] | next[x] | r1[x]) & !r0[x];
        }
    }

    for y in 1..h - 1 {
        core::mem::swap(&mut prev, &mut curr);
        core::mem::swap(&mut curr, &mut next);
        shift_combine_row(src.row(y + 1), &mut next);

        let above = src.row(y - 1);
        let here = src.row(y);
        let below = src.row(y + 1);
        let dst_row = dst.row_mut(y);
        for x in 0..w {
            dst_row[x] = (prev[x] | curr[x] | next[x] | above[x] | below[x]) & !here[x];
        }
    }

    // Bottom row: no row below.
    core::mem::swap(&mut prev, &mut curr);
    core::mem::swap(&mut curr, &mut next);
    let above = src.row(h - 2);
    let here = src.row(h - 1);
    let dst_row = dst.row_mut(h - 1);
    for x in 0..w {
        dst_row[x] = (prev[x] | curr[x] | above[x]) & !here[x];
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use bm_core::{Error, PackedBitmap, PackedView};

    use super::outline;

    #[test]
    fn three_pixel_stroke_outlines_to_bracket() {
        let src = PackedBitmap::from_vec(1, 3, vec![0x00, 0x70, 0x00]).expect("valid bitmap");
        let out = outline(&src.as_view()).expect("valid dimensions");

        // Row 1 must keep only the two horizontal end caps, not the body.
        assert_eq!(out.data(), &[0xF8, 0x88, 0xF8]);
    }

    #[test]
    fn all_zero_input_stays_zero() {
        let src = PackedBitmap::new_fill(3, 4, 0x00);
        let out = outline(&src.as_view()).expect("valid dimensions");

        assert_eq!(out.row_bytes(), 3);
        assert_eq!(out.height(), 4);
        assert!(out.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn all_ones_input_has_no_outline() {
        let src = PackedBitmap::new_fill(3, 4, 0xFF);
        let out = outline(&src.as_view()).expect("valid dimensions");

        assert!(out.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn isolated_pixel_yields_its_eight_neighbors() {
        let mut src = PackedBitmap::new_fill(2, 3, 0x00);
        src.set(4, 1, true).expect("in bounds");

        let out = outline(&src.as_view()).expect("valid dimensions");
        assert_eq!(out.data(), &[0x1C, 0x00, 0x14, 0x00, 0x1C, 0x00]);
        assert_eq!(out.get(4, 1), Some(false));
    }

    #[test]
    fn corner_pixel_yields_three_neighbors() {
        let src = PackedBitmap::from_vec(1, 2, vec![0x80, 0x00]).expect("valid bitmap");
        let out = outline(&src.as_view()).expect("valid dimensions");

        assert_eq!(out.data(), &[0x40, 0xC0]);
    }

    #[test]
    fn single_row_has_no_vertical_contribution() {
        let src = PackedBitmap::from_vec(1, 1, vec![0x70]).expect("valid bitmap");
        let out = outline(&src.as_view()).expect("valid dimensions");

        assert_eq!(out.data(), &[0x88]);
    }

    #[test]
    fn single_row_carry_crosses_byte_seam() {
        let src = PackedBitmap::from_vec(2, 1, vec![0x01, 0x00]).expect("valid bitmap");
        let out = outline(&src.as_view()).expect("valid dimensions");

        assert_eq!(out.data(), &[0x02, 0x80]);
    }

    #[test]
    fn two_row_bitmap_uses_both_rows() {
        let src = PackedBitmap::from_vec(1, 2, vec![0x00, 0x10]).expect("valid bitmap");
        let out = outline(&src.as_view()).expect("valid dimensions");

        assert_eq!(out.data(), &[0x38, 0x28]);
    }

    #[test]
    fn padded_view_rows_do_not_leak_into_result() {
        // 1-byte rows padded to a 2-byte stride; pad bytes are all ones and
        // must not contribute.
        let data = vec![0x00, 0xFF, 0x70, 0xFF, 0x00, 0xFF];
        let src = PackedView::from_slice(1, 3, 2, &data).expect("valid view");

        let out = outline(&src).expect("valid dimensions");
        assert_eq!(out.data(), &[0xF8, 0x88, 0xF8]);
    }

    #[test]
    fn empty_shapes_are_rejected() {
        let no_rows = PackedBitmap::new_fill(4, 0, 0x00);
        assert_eq!(
            outline(&no_rows.as_view()).unwrap_err(),
            Error::InvalidDimensions {
                row_bytes: 4,
                height: 0
            }
        );

        let no_bytes = PackedBitmap::new_fill(0, 4, 0x00);
        assert_eq!(
            outline(&no_bytes.as_view()).unwrap_err(),
            Error::InvalidDimensions {
                row_bytes: 0,
                height: 4
            }
        );
    }
}
