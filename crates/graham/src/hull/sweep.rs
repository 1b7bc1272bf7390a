//! Hull sweep over a pivot-first, angle-sorted sequence.
//!
//! Invariant: a point stays on the boundary stack only while the next
//! candidate keeps the turn `(below, top, candidate)` counter-clockwise.
//! The stack is a plain LIFO: only `push`, `pop` and `last` are used.

use nalgebra::Vector2;

use crate::geom2::{orientation, Orientation};

/// Build the hull boundary from `sorted` (output of `sort_around_pivot`).
///
/// Returns an empty vector for fewer than three points. The first three points
/// seed the stack without a turn check, so a collinear leading triple survives
/// when nothing later pops it. The result is the stack drained top to bottom:
/// the last accepted point comes first and the pivot last.
pub fn sweep(sorted: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    if sorted.len() < 3 {
        return Vec::new();
    }
    let mut stack: Vec<Vector2<f64>> = Vec::with_capacity(sorted.len());
    stack.push(sorted[0]);
    stack.push(sorted[1]);
    stack.push(sorted[2]);

    for &p in &sorted[3..] {
        // size check, unconditional pop, then restore if the turn is still left
        while stack.len() > 1 {
            let Some(second) = stack.pop() else { break };
            let Some(&first) = stack.last() else { break };
            if orientation(first, second, p) == Orientation::CounterClockwise {
                stack.push(second);
                break;
            }
        }
        stack.push(p);
    }

    let mut hull = Vec::with_capacity(stack.len());
    while let Some(p) = stack.pop() {
        hull.push(p);
    }
    hull
}
