use crate::math::angular::{lexicographic, sort_clockwise, sort_clockwise_about};
use crate::math::orient::{is_clockwise, is_collinear};
use crate::math::Point2;

/// Computes a hull directly with a pivot-anchored angular sweep.
///
/// This is the recursion's base case, and because it accepts any set size
/// it doubles as the whole-set fallback when a mean-x split degenerates.
///
/// Degenerate sets follow one convention throughout the crate: duplicates
/// are removed, and a fully collinear set collapses to its two
/// lexicographic extreme points.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sweep_hull(points: &[Point2]) -> Vec<Point2> {
    let mut pts = points.to_vec();
    pts.sort_by(lexicographic);
    pts.dedup();
    if pts.len() <= 2 {
        return pts;
    }
    if let Some((min, max)) = collinear_extremes(&pts) {
        return vec![min, max];
    }
    if pts.len() == 3 {
        return sort_clockwise(&pts);
    }

    // Pivot: lowest y, ties broken by lowest x.
    let mut pivot_idx = 0;
    for (i, p) in pts.iter().enumerate().skip(1) {
        let q = &pts[pivot_idx];
        if p.y < q.y || (p.y == q.y && p.x < q.x) {
            pivot_idx = i;
        }
    }
    let pivot = pts.swap_remove(pivot_idx);
    let rest = sort_clockwise_about(&pts, pivot.x as f64, pivot.y as f64);

    // Collapse runs collinear with the pivot, keeping only the farthest
    // point of each run: nearer collinear points cannot be hull vertices.
    let mut candidates: Vec<Point2> = Vec::with_capacity(rest.len());
    for p in rest {
        let same_ray = candidates
            .last()
            .is_some_and(|last| is_collinear(&pivot, last, &p));
        if same_ray {
            let end = candidates.len() - 1;
            if squared_distance(&pivot, &p) > squared_distance(&pivot, &candidates[end]) {
                candidates[end] = p;
            }
        } else {
            candidates.push(p);
        }
    }

    let mut stack = vec![pivot, candidates[0]];
    for candidate in &candidates[1..] {
        while stack.len() >= 2
            && !is_clockwise(&stack[stack.len() - 2], &stack[stack.len() - 1], candidate)
        {
            stack.pop();
        }
        stack.push(*candidate);
    }

    sort_clockwise(&stack)
}

/// If every point of the set lies on one line, returns the lexicographic
/// extreme pair; otherwise `None`. Sets with fewer than two distinct
/// points also return `None`.
pub(crate) fn collinear_extremes(points: &[Point2]) -> Option<(Point2, Point2)> {
    let first = *points.first()?;
    let second = *points.iter().find(|p| **p != first)?;
    if points.iter().any(|p| !is_collinear(&first, &second, p)) {
        return None;
    }
    let mut min = first;
    let mut max = first;
    for &p in points {
        if lexicographic(&p, &min).is_lt() {
            min = p;
        }
        if lexicographic(&p, &max).is_gt() {
            max = p;
        }
    }
    Some((min, max))
}

fn squared_distance(a: &Point2, b: &Point2) -> i128 {
    let dx = i128::from(b.x) - i128::from(a.x);
    let dy = i128::from(b.y) - i128::from(a.y);
    dx * dx + dy * dy
}
