use crate::math::orient::{is_collinear, is_counter_clockwise};
use crate::math::Point2;

/// Returns `true` if `p` lies on or inside the hull boundary.
///
/// The hull must be in clockwise order, as produced by
/// [`compute_hull`](crate::hull::compute_hull): a point is inside exactly
/// when no directed boundary edge sees it on its counter-clockwise side.
/// Degenerate hulls (a single point or a two-point segment) are handled
/// by value.
#[must_use]
pub fn contains_point(hull: &[Point2], p: &Point2) -> bool {
    match hull {
        [] => false,
        [only] => only == p,
        [a, b] => on_segment(a, b, p),
        _ => (0..hull.len()).all(|i| {
            let a = &hull[i];
            let b = &hull[(i + 1) % hull.len()];
            !is_counter_clockwise(a, b, p)
        }),
    }
}

/// Checks that every three cyclically-consecutive vertices make a
/// non-counter-clockwise turn — the convexity invariant every hull in
/// this crate maintains. Hulls of fewer than three vertices are trivially
/// convex.
#[must_use]
pub fn is_convex_clockwise(hull: &[Point2]) -> bool {
    if hull.len() < 3 {
        return true;
    }
    (0..hull.len()).all(|i| {
        let a = &hull[i];
        let b = &hull[(i + 1) % hull.len()];
        let c = &hull[(i + 2) % hull.len()];
        !is_counter_clockwise(a, b, c)
    })
}

/// `true` when `p` lies on the closed segment from `a` to `b`.
fn on_segment(a: &Point2, b: &Point2, p: &Point2) -> bool {
    is_collinear(a, b, p)
        && p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y)
}
