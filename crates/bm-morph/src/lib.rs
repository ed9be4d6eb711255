//! Binary morphology on packed bit-per-pixel bitmaps.
//!
//! All operators are byte-parallel: rows are combined with whole-byte shifts,
//! ORs and ANDs, never with per-pixel neighbor loops.
//!
//! Conventions:
//! - Bit 7 of byte 0 is the leftmost pixel of a row (see `bm-core`).
//! - Neighbors outside the bitmap are unset. Nothing wraps around row ends,
//!   dilation cannot grow past the border, and border pixels always erode
//!   to zero.
//! - Operators reject empty inputs with `Error::InvalidDimensions` instead
//!   of touching any row.
//!
//! The core operator is [`outline`]: the set of unset pixels 8-connected to
//! at least one set pixel. For any bitmap `a`, `outline(a)` equals
//! `dilate3x3(a) & !a`, computed here in a single streaming pass.

mod morph;
mod outline;
mod shift;

pub use morph::{close3x3, dilate3x3, erode3x3, open3x3};
pub use outline::outline;
pub use shift::shift_combine_row;
