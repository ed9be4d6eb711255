//! Foundational containers for packed binary bitmaps.
//!
//! ## Bit Order
//! Eight horizontal pixels per byte, most-significant-bit-first: bit 7 of
//! byte 0 in a row is the leftmost pixel of that row's 8-pixel span. Shifting
//! a pixel toward lower x is `<< 1` on the byte value, toward higher x `>> 1`.
//!
//! ## Views and Stride
//! Views use byte stride. `stride` is the distance, in bytes, between
//! adjacent row starts and may be greater than `row_bytes`. This allows
//! borrowed views over padded buffers (e.g. BMP rows aligned to 4 bytes).
//!
//! ## Binary Convention
//! Byte-per-pixel conversions treat pixels as binary with threshold `> 0`.
//! Set bits unpack to `255`, clear bits to `0`.

mod bitmap;
mod error;
mod pack;

pub use bitmap::{PackedBitmap, PackedView, PackedViewMut};
pub use error::Error;
pub use pack::{pack_binary_u8, unpack_binary_u8};
