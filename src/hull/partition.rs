use crate::math::Point2;

/// Splits a point set into left/right groups about the arithmetic mean of
/// all x-coordinates: `x ≤ mean` goes left, the rest right.
///
/// Every input point lands in exactly one group, but neither group is
/// guaranteed non-empty — a skewed x-distribution can put everything on one
/// side, and the driver must tolerate that without recursing again on the
/// unchanged set.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn split_by_mean_x(points: &[Point2]) -> (Vec<Point2>, Vec<Point2>) {
    if points.is_empty() {
        return (Vec::new(), Vec::new());
    }
    let mean_x = points.iter().map(|p| p.x as f64).sum::<f64>() / points.len() as f64;

    let mut left = Vec::new();
    let mut right = Vec::new();
    for &p in points {
        if p.x as f64 <= mean_x {
            left.push(p);
        } else {
            right.push(p);
        }
    }
    (left, right)
}
