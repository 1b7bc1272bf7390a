//! Orientation and distance predicates shared by the sorter and the sweep.
//!
//! Tolerance policy
//! - `orientation` reports `Collinear` when the turn value truncated to an
//!   integer is zero. There is no epsilon: values in `(-1, 1)` count as
//!   collinear regardless of coordinate scale.
//! - `squared_distance` only breaks ties between collinear candidates; it is
//!   never compared against an absolute threshold.

use nalgebra::Vector2;

/// Turn direction of an ordered triple `(p, q, r)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

/// Turn value `(q.y−p.y)(r.x−q.x) − (q.x−p.x)(r.y−q.y)`.
/// Positive for a clockwise turn, negative for counter-clockwise.
#[inline]
pub fn turn_value(p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>) -> f64 {
    (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y)
}

/// Orientation of `(p, q, r)` with the truncated-to-integer collinearity test.
///
/// The cast saturates for huge magnitudes and maps NaN to zero, so a NaN turn
/// value is reported as `Collinear`.
#[inline]
pub fn orientation(p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>) -> Orientation {
    let val = turn_value(p, q, r);
    if val as i32 == 0 {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Squared Euclidean distance (no square root).
#[inline]
pub fn squared_distance(p1: Vector2<f64>, p2: Vector2<f64>) -> f64 {
    (p1 - p2).norm_squared()
}
