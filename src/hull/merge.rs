use super::sweep::collinear_extremes;
use super::tangent::{lower_tangent, upper_tangent};
use crate::math::angular::sort_clockwise;
use crate::math::orient::is_collinear;
use crate::math::Point2;

/// Stitches two disjoint hulls into one along their bridging edges.
///
/// Both inputs must be in clockwise (ascending-angle) order with every
/// left-hull x strictly less than every right-hull x. Every output vertex
/// is a vertex of one of the inputs; the result is a single clockwise
/// cycle with no repeated point and no vertex interior to an edge.
///
/// A union that lies entirely on one line cannot be bridged — the tangent
/// endpoints would shadow the outer extremes — so it collapses straight to
/// the degenerate two-extreme hull.
#[must_use]
pub fn merge_hulls(left: &[Point2], right: &[Point2]) -> Vec<Point2> {
    if left.is_empty() {
        return right.to_vec();
    }
    if right.is_empty() {
        return left.to_vec();
    }

    let mut union = Vec::with_capacity(left.len() + right.len());
    union.extend_from_slice(left);
    union.extend_from_slice(right);
    if let Some((min, max)) = collinear_extremes(&union) {
        return vec![min, max];
    }

    let (top_left, top_right) = upper_tangent(left, right);
    let (bottom_left, bottom_right) = lower_tangent(left, right);

    // Bottom-left tangent vertex, up the left hull's outer chain to the
    // top-left tangent vertex, across the bridge, then down the right
    // hull's outer chain. Cursor arithmetic only: the tangents are
    // indices, so equal-valued vertices can't cut a walk short.
    let mut boundary = Vec::with_capacity(left.len() + right.len());
    let mut i = bottom_left;
    loop {
        boundary.push(left[i]);
        if i == top_left {
            break;
        }
        i = (i + left.len() - 1) % left.len();
    }
    let mut j = top_right;
    loop {
        boundary.push(right[j]);
        if j == bottom_right {
            break;
        }
        j = (j + right.len() - 1) % right.len();
    }

    let mut merged = sort_clockwise(&boundary);
    merged.dedup();
    drop_edge_interior_vertices(&merged)
}

/// Removes vertices collinear with their cyclic neighbors.
///
/// A tangent tie can legitimately end on the nearer of two collinear
/// touch vertices, leaving the farther one mid-edge after the stitch.
fn drop_edge_interior_vertices(hull: &[Point2]) -> Vec<Point2> {
    if hull.len() < 3 {
        return hull.to_vec();
    }
    let mut kept = Vec::with_capacity(hull.len());
    for i in 0..hull.len() {
        let prev = &hull[(i + hull.len() - 1) % hull.len()];
        let next = &hull[(i + 1) % hull.len()];
        if !is_collinear(prev, &hull[i], next) {
            kept.push(hull[i]);
        }
    }
    kept
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn pt(x: i64, y: i64) -> Point2 {
        Point2::new(x, y)
    }

    fn as_sorted_pairs(hull: &[Point2]) -> Vec<(i64, i64)> {
        let mut pairs: Vec<(i64, i64)> = hull.iter().map(|p| (p.x, p.y)).collect();
        pairs.sort_unstable();
        pairs
    }

    #[test]
    fn side_by_side_squares_make_a_rectangle() {
        let left = sort_clockwise(&[pt(0, 0), pt(0, 4), pt(4, 4), pt(4, 0)]);
        let right = sort_clockwise(&[pt(8, 0), pt(8, 4), pt(12, 4), pt(12, 0)]);
        let merged = merge_hulls(&left, &right);
        assert_eq!(
            as_sorted_pairs(&merged),
            vec![(0, 0), (0, 4), (12, 0), (12, 4)],
            "inner square corners sit on the bridged edges and must drop out"
        );
    }

    #[test]
    fn offset_squares_keep_both_outer_chains() {
        let left = sort_clockwise(&[pt(0, 0), pt(0, 4), pt(4, 4), pt(4, 0)]);
        let right = sort_clockwise(&[pt(8, 10), pt(8, 14), pt(12, 14), pt(12, 10)]);
        let merged = merge_hulls(&left, &right);
        assert_eq!(
            as_sorted_pairs(&merged),
            vec![(0, 0), (0, 4), (4, 0), (8, 14), (12, 10), (12, 14)]
        );
    }

    #[test]
    fn every_merged_vertex_comes_from_an_input_hull() {
        let left = sort_clockwise(&[pt(0, 0), pt(1, 5), pt(3, 2)]);
        let right = sort_clockwise(&[pt(7, 1), pt(8, 6), pt(10, 3)]);
        let merged = merge_hulls(&left, &right);
        for p in &merged {
            assert!(left.contains(p) || right.contains(p));
        }
        assert!(merged.len() >= 3);
    }

    #[test]
    fn collinear_union_collapses_to_extremes() {
        let left = sort_clockwise(&[pt(0, 0), pt(2, 2)]);
        let right = sort_clockwise(&[pt(5, 5), pt(9, 9)]);
        let merged = merge_hulls(&left, &right);
        assert_eq!(merged, vec![pt(0, 0), pt(9, 9)]);
    }

    #[test]
    fn single_point_against_triangle() {
        let left = vec![pt(0, 2)];
        let right = sort_clockwise(&[pt(5, 0), pt(5, 4), pt(9, 2)]);
        let merged = merge_hulls(&left, &right);
        assert_eq!(
            as_sorted_pairs(&merged),
            vec![(0, 2), (5, 0), (5, 4), (9, 2)]
        );
    }

    #[test]
    fn merged_hull_has_no_duplicate_vertices() {
        let left = sort_clockwise(&[pt(0, 0), pt(0, 6), pt(3, 3)]);
        let right = sort_clockwise(&[pt(7, 0), pt(7, 6), pt(10, 3)]);
        let merged = merge_hulls(&left, &right);
        let pairs = as_sorted_pairs(&merged);
        let mut deduped = pairs.clone();
        deduped.dedup();
        assert_eq!(pairs, deduped);
    }

    #[test]
    fn near_vertex_tangent_tie_is_dropped_from_the_boundary() {
        // (2, 2) ties into the upper tangent but sits mid-edge between
        // (0, 0) and (8, 8) on the merged boundary.
        let left = sort_clockwise(&[pt(0, 0), pt(2, 2)]);
        let right = sort_clockwise(&[pt(8, 8), pt(10, 0), pt(12, 4)]);
        let merged = merge_hulls(&left, &right);
        assert_eq!(
            as_sorted_pairs(&merged),
            vec![(0, 0), (8, 8), (10, 0), (12, 4)]
        );
    }
}
