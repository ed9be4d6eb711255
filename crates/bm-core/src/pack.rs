use crate::{Error, PackedBitmap, PackedView};

/// Packs a byte-per-pixel binary image into a bit-per-pixel bitmap.
///
/// Pixels are treated as binary with threshold `> 0`. Each row occupies
/// `width.div_ceil(8)` bytes; trailing pad bits of a row are zero.
pub fn pack_binary_u8(width: usize, height: usize, pixels: &[u8]) -> Result<PackedBitmap, Error> {
    let expected = width.checked_mul(height).ok_or(Error::SizeMismatch {
        expected: usize::MAX,
        actual: pixels.len(),
    })?;

    if pixels.len() != expected {
        return Err(Error::SizeMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    let row_bytes = width.div_ceil(8);
    let mut out = PackedBitmap::new_fill(row_bytes, height, 0);

    let mut view = out.as_view_mut();
    for y in 0..height {
        let src_row = &pixels[y * width..(y + 1) * width];
        let dst_row = view.row_mut(y);
        for (x, &px) in src_row.iter().enumerate() {
            if px > 0 {
                dst_row[x / 8] |= 0x80 >> (x % 8);
            }
        }
    }

    Ok(out)
}

/// Unpacks a packed bitmap into one byte per pixel, `0` or `255`.
///
/// The output width is `row_bytes * 8`; pad bits unpack like any other pixel.
pub fn unpack_binary_u8(src: &PackedView<'_>) -> Vec<u8> {
    let mut out = Vec::with_capacity(src.width_px() * src.height());
    for y in 0..src.height() {
        for &byte in src.row(y) {
            for bit in 0..8 {
                out.push(if byte & (0x80 >> bit) != 0 { 255 } else { 0 });
            }
        }
    }
    out
}
