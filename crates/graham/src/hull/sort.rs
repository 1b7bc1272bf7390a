//! Angular sorter: pivot selection and the polar-angle ordering around it.
//!
//! The ordering treats "turns counter-clockwise from `p1` to `p2` around the
//! pivot" as `p1` first, and falls back to distance from the pivot when the
//! orientation test reports `Collinear`. Because collinearity uses the
//! truncated turn value, near-collinear triples can make the relation
//! non-transitive for non-integer inputs. The sort below is a plain merge sort
//! driven by `precedes` alone, so an inconsistent relation only yields some
//! permutation of the input and never aborts.

use std::cmp::Ordering;

use nalgebra::Vector2;

use crate::geom2::{orientation, squared_distance, Orientation};

/// Index of the lowest point (min `y`, then min `x`). First occurrence wins on duplicates.
pub fn select_pivot(points: &[Vector2<f64>]) -> Option<usize> {
    if points.is_empty() {
        return None;
    }
    let mut min = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let m = points[min];
        if p.y < m.y || (p.y == m.y && p.x < m.x) {
            min = i;
        }
    }
    Some(min)
}

/// Polar-angle order around a fixed pivot (held by value, so each sort is self-contained).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngularOrder {
    pub pivot: Vector2<f64>,
}

impl AngularOrder {
    #[inline]
    pub fn new(pivot: Vector2<f64>) -> Self {
        Self { pivot }
    }

    /// Strict "comes before" relation.
    #[inline]
    pub fn precedes(&self, p1: Vector2<f64>, p2: Vector2<f64>) -> bool {
        match orientation(self.pivot, p1, p2) {
            Orientation::Collinear => {
                squared_distance(self.pivot, p1) < squared_distance(self.pivot, p2)
            }
            o => o == Orientation::CounterClockwise,
        }
    }

    /// Three-way comparison derived from `precedes` in both directions.
    #[inline]
    pub fn compare(&self, p1: &Vector2<f64>, p2: &Vector2<f64>) -> Ordering {
        if self.precedes(*p1, *p2) {
            Ordering::Less
        } else if self.precedes(*p2, *p1) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Move the pivot to index 0 and sort the rest by `AngularOrder`. Returns the pivot.
///
/// The slice is only reordered, never resized. Callers feeding the sweep must
/// still reject `len < 3` (the sweep does this itself).
pub fn sort_around_pivot(points: &mut [Vector2<f64>]) -> Option<Vector2<f64>> {
    let min = select_pivot(points)?;
    points.swap(0, min);
    let order = AngularOrder::new(points[0]);
    merge_sort(&mut points[1..], &order);
    Some(order.pivot)
}

/// Stable bottom-up merge sort. Terminates with a permutation of `points`
/// whether or not `order` is transitive.
fn merge_sort(points: &mut [Vector2<f64>], order: &AngularOrder) {
    let n = points.len();
    if n < 2 {
        return;
    }
    let mut buf = points.to_vec();
    let mut width = 1;
    while width < n {
        let mut lo = 0;
        while lo < n {
            let mid = (lo + width).min(n);
            let hi = (lo + 2 * width).min(n);
            merge(&points[lo..mid], &points[mid..hi], &mut buf[lo..hi], order);
            lo = hi;
        }
        points.copy_from_slice(&buf);
        width *= 2;
    }
}

fn merge(
    left: &[Vector2<f64>],
    right: &[Vector2<f64>],
    out: &mut [Vector2<f64>],
    order: &AngularOrder,
) {
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        // ties go left
        let take_right =
            j < right.len() && (i >= left.len() || order.precedes(right[j], left[i]));
        if take_right {
            *slot = right[j];
            j += 1;
        } else {
            *slot = left[i];
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn pivot_lowest_then_leftmost() {
        let pts = vec![
            vector![3.0, 1.0],
            vector![2.0, 0.0],
            vector![5.0, 4.0],
            vector![1.0, 0.0],
            vector![0.0, 2.0],
        ];
        assert_eq!(select_pivot(&pts), Some(3));
        assert_eq!(select_pivot(&[]), None);
        // duplicates keep the first
        let dup = vec![vector![1.0, 1.0], vector![1.0, 1.0]];
        assert_eq!(select_pivot(&dup), Some(0));
    }

    #[test]
    fn counter_clockwise_comes_first() {
        let order = AngularOrder::new(vector![0.0, 0.0]);
        let east = vector![4.0, 0.0];
        let north = vector![0.0, 4.0];
        assert!(order.precedes(east, north));
        assert!(!order.precedes(north, east));
        assert_eq!(order.compare(&east, &north), Ordering::Less);
        assert_eq!(order.compare(&north, &east), Ordering::Greater);
    }

    #[test]
    fn collinear_breaks_ties_by_distance() {
        let order = AngularOrder::new(vector![0.0, 0.0]);
        let near = vector![2.0, 2.0];
        let far = vector![4.0, 4.0];
        assert!(order.precedes(near, far));
        assert!(!order.precedes(far, near));
        assert_eq!(order.compare(&far, &far), Ordering::Equal);
    }

    #[test]
    fn sort_places_pivot_first_then_by_angle() {
        let mut pts = vec![
            vector![0.0, 4.0],
            vector![2.0, 2.0],
            vector![4.0, 4.0],
            vector![0.0, 0.0],
            vector![4.0, 0.0],
        ];
        let pivot = sort_around_pivot(&mut pts);
        assert_eq!(pivot, Some(vector![0.0, 0.0]));
        assert_eq!(
            pts,
            vec![
                vector![0.0, 0.0],
                vector![4.0, 0.0],
                vector![2.0, 2.0],
                vector![4.0, 4.0],
                vector![0.0, 4.0],
            ]
        );
    }

    #[test]
    fn sort_keeps_length_and_handles_tiny_inputs() {
        let mut empty: Vec<Vector2<f64>> = vec![];
        assert_eq!(sort_around_pivot(&mut empty), None);
        let mut one = vec![vector![1.0, 2.0]];
        assert_eq!(sort_around_pivot(&mut one), Some(vector![1.0, 2.0]));
        assert_eq!(one.len(), 1);
    }

    #[test]
    fn merge_sort_matches_compare_on_integer_points() {
        let order = AngularOrder::new(vector![0.0, 0.0]);
        let mut pts = vec![
            vector![0.0, 7.0],
            vector![3.0, 3.0],
            vector![9.0, 0.0],
            vector![1.0, 1.0],
            vector![-4.0, 2.0],
            vector![5.0, 1.0],
            vector![2.0, 0.0],
        ];
        let mut expected = pts.clone();
        expected.sort_by(|a, b| order.compare(a, b));
        merge_sort(&mut pts, &order);
        assert_eq!(pts, expected);
    }

    #[test]
    fn fractional_clouds_sort_to_a_permutation() {
        use rand::{rngs::StdRng, Rng, SeedableRng};
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut pts: Vec<Vector2<f64>> = (0..400)
                .map(|_| vector![rng.gen_range(0.0_f64..4.0), rng.gen_range(0.0_f64..4.0)])
                .collect();
            let mut before: Vec<(u64, u64)> =
                pts.iter().map(|p| (p.x.to_bits(), p.y.to_bits())).collect();
            let pivot = sort_around_pivot(&mut pts).unwrap();
            assert_eq!(pts[0], pivot);
            let mut after: Vec<(u64, u64)> =
                pts.iter().map(|p| (p.x.to_bits(), p.y.to_bits())).collect();
            before.sort_unstable();
            after.sort_unstable();
            assert_eq!(before, after, "seed {seed}");
        }
    }

    #[test]
    fn independent_pivots_do_not_interfere() {
        // Two orders alive at once: each carries its own pivot.
        let a = AngularOrder::new(vector![0.0, 0.0]);
        let b = AngularOrder::new(vector![10.0, 10.0]);
        let p = vector![5.0, 0.0];
        let q = vector![0.0, 5.0];
        assert!(a.precedes(p, q));
        assert!(!b.precedes(p, q));
        assert!(b.precedes(q, p));
    }
}
