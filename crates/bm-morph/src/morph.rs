use bm_core::{Error, PackedBitmap, PackedView};

use crate::shift::shift_combine_row;

/// 3x3 binary dilation: a bit is set iff any bit of its 3x3 neighborhood
/// (itself included) is set in `src`. Neighbors outside the bitmap are
/// unset, so the foreground never grows past the border.
pub fn dilate3x3(src: &PackedView<'_>) -> Result<PackedBitmap, Error> {
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

    if h == 1 {
        let r0 = src.row(0);
        let dst_row = dst.row_mut(0);
        shift_combine_row(r0, dst_row);
        for (d, &s) in dst_row.iter_mut().zip(r0) {
            *d |= s;
        }
        return Ok(out);
    }

    let mut prev = vec![0u8; w];
    let mut curr = vec![0u8; w];
    let mut next = vec![0u8; w];

    shift_combine_row(src.row(0), &mut curr);
    shift_combine_row(src.row(1), &mut next);

    {
        let r0 = src.row(0);
        let r1 = src.row(1);
        let dst_row = dst.row_mut(0);
        for x in 0..w {
            dst_row[x] = curr[x] | r0[x] | next[x] | r1[x];
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
            dst_row[x] = prev[x] | above[x] | curr[x] | here[x] | next[x] | below[x];
        }
    }

    core::mem::swap(&mut prev, &mut curr);
    core::mem::swap(&mut curr, &mut next);
    let above = src.row(h - 2);
    let here = src.row(h - 1);
    let dst_row = dst.row_mut(h - 1);
    for x in 0..w {
        dst_row[x] = prev[x] | above[x] | curr[x] | here[x];
    }

    Ok(out)
}

/// 3x3 binary erosion: a bit survives iff its whole 3x3 neighborhood is set
/// in `src`. Neighbors outside the bitmap are unset, so border pixels always
/// erode to zero.
pub fn erode3x3(src: &PackedView<'_>) -> Result<PackedBitmap, Error> {
    let w = src.row_bytes();
    let h = src.height();
    if w == 0 || h == 0 {
        return Err(Error::InvalidDimensions {
            row_bytes: w,
            height: h,
        });
    }

    let mut out = PackedBitmap::new_fill(w, h, 0);

    // The first and last rows have a missing vertical neighbor and are
    // always zero; with fewer than three rows nothing survives.
    if h <= 2 {
        return Ok(out);
    }

    let mut dst = out.as_view_mut();

    let mut prev = vec![0u8; w];
    let mut curr = vec![0u8; w];
    let mut next = vec![0u8; w];

    erode_row(src.row(0), &mut prev);
    erode_row(src.row(1), &mut curr);

    for y in 1..h - 1 {
        erode_row(src.row(y + 1), &mut next);

        let dst_row = dst.row_mut(y);
        for x in 0..w {
            dst_row[x] = prev[x] & curr[x] & next[x];
        }

        core::mem::swap(&mut prev, &mut curr);
        core::mem::swap(&mut curr, &mut next);
    }

    Ok(out)
}

pub fn open3x3(src: &PackedView<'_>) -> Result<PackedBitmap, Error> {
    let eroded = erode3x3(src)?;
    dilate3x3(&eroded.as_view())
}

pub fn close3x3(src: &PackedView<'_>) -> Result<PackedBitmap, Error> {
    let dilated = dilate3x3(src)?;
    erode3x3(&dilated.as_view())
}

// 3-tap horizontal erosion of one row: a bit survives iff it and both its
// horizontal neighbors are set. Missing neighbors at the row ends are unset,
// so the first and last pixel of a row never survive.
fn erode_row(src: &[u8], out: &mut [u8]) {
    assert_eq!(out.len(), src.len(), "out must match src length");

    let w = src.len();
    if w == 0 {
        return;
    }
    if w == 1 {
        out[0] = (src[0] << 1) & src[0] & (src[0] >> 1);
        return;
    }

    out[0] = ((src[0] << 1) | (src[1] >> 7)) & src[0] & (src[0] >> 1);

    for x in 1..w - 1 {
        let left = (src[x] << 1) | (src[x + 1] >> 7);
        let right = (src[x - 1] << 7) | (src[x] >> 1);
        out[x] = left & src[x] & right;
    }

    out[w - 1] = (src[w - 1] << 1) & src[w - 1] & ((src[w - 2] << 7) | (src[w - 1] >> 1));
}
