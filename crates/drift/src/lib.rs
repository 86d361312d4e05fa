//!
//! Scroll-driven animation state sampling.
//!
//! # Crate
//!
#![doc = include_str!("../README.md")]
#![warn(unused_extern_crates)]
#![warn(missing_docs)]

mod config;
mod sampler;
mod source;

pub use config::*;
pub use sampler::*;
pub use source::*;

#[doc(no_inline)]
pub use drift_motion::*;

#[doc(no_inline)]
pub use drift_unit as unit;
