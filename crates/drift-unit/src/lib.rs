//!
//! Base unit types.
//!
//! # Crate
//!
#![doc = include_str!("../README.md")]
#![warn(unused_extern_crates)]
#![warn(missing_docs)]

mod angle;
mod factor;
mod float_eq;
mod px;

#[doc(no_inline)]
pub use euclid;

pub use angle::*;
pub use factor::*;
pub use float_eq::*;
pub use px::*;

pub(crate) fn lerp(from: f32, to: f32, factor: Factor) -> f32 {
    from + (to - from) * factor.0
}
