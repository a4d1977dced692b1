//! Register value model
//!
//! This module provides the typed view of SIMD register contents:
//! - [`lane`]: lane kinds (`i8` .. `f64`), register sizes and bit families
//! - [`value`]: [`RawVector`] bit patterns and tagged [`RegisterValue`]s
//! - [`scalar`]: per-lane [`Scalar`]s and their decimal/hex rendering
//! - [`errors`]: [`RegisterError`] for broken construction or lane access
//!
//! # Lane order
//!
//! Lane 0 is the least significant lane and sits at byte offset 0. Display
//! code walks lanes the other way, most significant first, which is how
//! register dumps are usually read:
//!
//! ```text
//! bytes:    [ l0 | l1 | l2 | l3 ]      (memory order)
//! display:  [ l3 | l2 | l1 | l0 ]      (left to right)
//! ```

pub mod errors;
pub mod lane;
pub mod scalar;
pub mod value;

pub use errors::RegisterError;
pub use lane::{BitFamily, LaneKind, RegisterSize};
pub use scalar::{LaneScalar, Scalar};
pub use value::{RawVector, RegisterValue};
