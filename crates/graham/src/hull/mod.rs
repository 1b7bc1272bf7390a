//! Graham-scan convex hull.
//!
//! Purpose
//! - `compute_hull`: pivot selection + angular sort (`sort`), then a stack sweep
//!   that discards non-left turns (`sweep`).
//!
//! Behaviour worth knowing
//! - Fewer than three points → empty result. This is a valid answer, not an error.
//! - Output is the sweep stack drained top to bottom: last accepted point first,
//!   pivot last. With the turn convention in `geom2::orientation` this is
//!   clockwise order.
//! - The first three sorted points are pushed without a turn check, so an
//!   all-collinear triple comes back as a three-point "hull".
//! - Collinearity uses the truncated turn value (see `geom2::predicates`).
//!
//! Code cross-refs: `geom2::{orientation, squared_distance}`

mod sort;
mod sweep;

pub use sort::{select_pivot, sort_around_pivot, AngularOrder};
pub use sweep::sweep;

use nalgebra::Vector2;

/// Convex hull of `points` (consumed as the working copy).
///
/// Callers that need the input order preserved must pass a clone, or use [`hull_of`].
pub fn compute_hull(mut points: Vec<Vector2<f64>>) -> Vec<Vector2<f64>> {
    sort_around_pivot(&mut points);
    sweep(&points)
}

/// Borrowing variant of [`compute_hull`]; copies the input once.
#[inline]
pub fn hull_of(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    compute_hull(points.to_vec())
}
