//! Umbrella crate for the `bitmorph` workspace.
//!
//! Re-exports the packed bitmap containers and the morphology operators so
//! callers can depend on a single crate.

pub use bm_core::*;
pub use bm_morph::*;
