//!
//! Scroll-to-animation derivation.
//!
//! Every function in this crate is a pure derivation over one scroll sample, there is no
//! retained state and no I/O. The stateful sampling surface is in the `drift` crate.
//!
//! # Crate
//!
#![doc = include_str!("../README.md")]
#![warn(unused_extern_crates)]
#![warn(missing_docs)]

mod arc;
mod progress;
mod ranges;

pub use arc::*;
pub use progress::*;
pub use ranges::*;
