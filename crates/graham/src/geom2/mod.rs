//! 2D geometric primitives.
//!
//! Purpose
//! - Orientation and squared-distance predicates shared by the angular sorter
//!   and the hull sweep (`predicates`).
//! - Small vertex-list helpers for checking and summarising hull output (`poly`).
//!
//! Code cross-refs: `hull::{sort, sweep}`

mod poly;
mod predicates;

pub use poly::{contains_eps, signed_area};
pub use predicates::{orientation, squared_distance, turn_value, Orientation};
