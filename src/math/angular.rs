use std::cmp::Ordering;
use std::f64::consts::TAU;

use super::Point2;

/// Returns the points ordered by ascending clockwise angle from +x about
/// their arithmetic-mean centroid, breaking ties first by ascending x and
/// then by ascending y.
///
/// Pure: the input slice is never reordered, so hulls held by other
/// recursion branches keep their order. Equal points keep their relative
/// order (stable sort).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sort_clockwise(points: &[Point2]) -> Vec<Point2> {
    // Trivial sets need no sort, and this dodges a 0/0 centroid.
    if points.len() < 2 {
        return points.to_vec();
    }
    let count = points.len() as f64;
    let centroid_x = points.iter().map(|p| p.x as f64).sum::<f64>() / count;
    let centroid_y = points.iter().map(|p| p.y as f64).sum::<f64>() / count;
    sort_clockwise_about(points, centroid_x, centroid_y)
}

/// Same ordering as [`sort_clockwise`], but about an explicit origin.
///
/// The angular sweep uses this with its pivot as the reference point.
#[must_use]
pub fn sort_clockwise_about(points: &[Point2], origin_x: f64, origin_y: f64) -> Vec<Point2> {
    let mut ordered = points.to_vec();
    ordered.sort_by(|a, b| {
        normalized_angle(a, origin_x, origin_y)
            .total_cmp(&normalized_angle(b, origin_x, origin_y))
            .then_with(|| a.x.cmp(&b.x))
            .then_with(|| a.y.cmp(&b.y))
    });
    ordered
}

/// Compares two points by the [`sort_clockwise`] tie-break alone (x, then y).
#[must_use]
pub fn lexicographic(a: &Point2, b: &Point2) -> Ordering {
    a.x.cmp(&b.x).then_with(|| a.y.cmp(&b.y))
}

/// Angle of `p` about the origin, measured from +x and normalized to [0, 2π).
#[allow(clippy::cast_precision_loss)]
fn normalized_angle(p: &Point2, origin_x: f64, origin_y: f64) -> f64 {
    let angle = (p.y as f64 - origin_y).atan2(p.x as f64 - origin_x);
    (angle + TAU) % TAU
}
