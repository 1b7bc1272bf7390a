//! Vertex-list polygon helpers used to check and summarise hull output.
//!
//! Polygons here are plain vertex sequences in either winding. Hull output
//! comes in stack-drain order (clockwise for the default turn convention), so
//! nothing below assumes counter-clockwise input.

use nalgebra::Vector2;

/// Shoelace area: positive for counter-clockwise vertex order, negative for clockwise.
pub fn signed_area(poly: &[Vector2<f64>]) -> f64 {
    if poly.len() < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for k in 0..poly.len() {
        let p = poly[k];
        let q = poly[(k + 1) % poly.len()];
        twice += p.x * q.y - q.x * p.y;
    }
    0.5 * twice
}

/// Inside-or-on test for a convex polygon with slack `eps` on every edge.
///
/// `p` must also lie in the vertex bounding box grown by `eps`. A convex
/// polygon fills its box's extent on both axes, so this never rejects a point
/// the edge tests accept for a proper polygon; for zero-area input (a segment,
/// or a degenerate collinear "hull") it cuts the supporting line down to the
/// segment itself.
pub fn contains_eps(poly: &[Vector2<f64>], p: Vector2<f64>, eps: f64) -> bool {
    match poly.len() {
        0 => false,
        1 => (poly[0] - p).norm() <= eps,
        _ => {
            if !in_bounding_box(poly, p, eps) {
                return false;
            }
            // clockwise polygons keep their interior on the right of each edge
            let sign = if signed_area(poly) < 0.0 { -1.0 } else { 1.0 };
            (0..poly.len()).all(|k| {
                let a = poly[k];
                let b = poly[(k + 1) % poly.len()];
                sign * edge_cross(a, b, p) >= -eps
            })
        }
    }
}

fn in_bounding_box(poly: &[Vector2<f64>], p: Vector2<f64>, eps: f64) -> bool {
    let (mut lo, mut hi) = (poly[0], poly[0]);
    for v in &poly[1..] {
        lo = lo.inf(v);
        hi = hi.sup(v);
    }
    p.x >= lo.x - eps && p.x <= hi.x + eps && p.y >= lo.y - eps && p.y <= hi.y + eps
}

#[inline]
fn edge_cross(a: Vector2<f64>, b: Vector2<f64>, p: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ap = p - a;
    ab.x * ap.y - ab.y * ap.x
}
