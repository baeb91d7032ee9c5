pub mod merge;
pub mod partition;
pub mod query;
pub mod sweep;
pub mod tangent;

use crate::error::{InputError, Result};
use crate::math::Point2;

/// Largest set handed straight to the angular sweep. Below this the
/// divide-and-conquer overhead outweighs the split.
pub const BASE_CASE_LIMIT: usize = 5;

/// Computes the convex hull of a finite set of integer points.
///
/// Returns the hull boundary as a clockwise cycle of distinct vertices,
/// each a value from the input. Duplicates in the input are tolerated; a
/// fully collinear input collapses to its two extreme points, and a
/// single distinct point yields a one-vertex hull.
///
/// # Errors
///
/// Returns [`InputError::EmptyPointSet`] if `points` is empty.
pub fn compute_hull(points: &[Point2]) -> Result<Vec<Point2>> {
    if points.is_empty() {
        return Err(InputError::EmptyPointSet.into());
    }
    Ok(divide(points))
}

fn divide(points: &[Point2]) -> Vec<Point2> {
    if points.len() <= BASE_CASE_LIMIT {
        return sweep::sweep_hull(points);
    }
    let (left, right) = partition::split_by_mean_x(points);
    // A skewed x-distribution can land everything on one side of the
    // mean. Recursing again would not shrink the set, so the sweep takes
    // the whole of it instead.
    if left.is_empty() || right.is_empty() {
        return sweep::sweep_hull(points);
    }
    merge::merge_hulls(&divide(&left), &divide(&right))
}
