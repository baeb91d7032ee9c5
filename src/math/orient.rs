use super::Point2;

/// Computes the signed twice-area of the triangle `a`, `b`, `c`.
///
/// Negative for a clockwise sequence, positive for counter-clockwise,
/// near-zero for collinear points. Use the predicates below rather than
/// comparing the raw value against zero.
#[must_use]
pub fn orientation(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    let (first, second) = orientation_terms(a, b, c);
    first - second
}

/// Returns `true` if and only if `a`, `b`, `c` form a clockwise sequence,
/// subject to floating-point precision.
#[must_use]
pub fn is_clockwise(a: &Point2, b: &Point2, c: &Point2) -> bool {
    let (first, second) = orientation_terms(a, b, c);
    first - second < -area_tolerance(first, second)
}

/// Returns `true` if and only if `a`, `b`, `c` form a counter-clockwise
/// sequence, subject to floating-point precision.
#[must_use]
pub fn is_counter_clockwise(a: &Point2, b: &Point2, c: &Point2) -> bool {
    let (first, second) = orientation_terms(a, b, c);
    first - second > area_tolerance(first, second)
}

/// Returns `true` if and only if `a`, `b`, `c` are collinear, subject to
/// floating-point precision.
#[must_use]
pub fn is_collinear(a: &Point2, b: &Point2, c: &Point2) -> bool {
    let (first, second) = orientation_terms(a, b, c);
    (first - second).abs() <= area_tolerance(first, second)
}

/// The two products whose difference is the signed twice-area.
///
/// Kept separate so the predicates can scale their tolerance with the
/// magnitude of the cancelled terms.
#[allow(clippy::cast_precision_loss)]
fn orientation_terms(a: &Point2, b: &Point2, c: &Point2) -> (f64, f64) {
    let (ax, ay) = (a.x as f64, a.y as f64);
    let (bx, by) = (b.x as f64, b.y as f64);
    let (cx, cy) = (c.x as f64, c.y as f64);
    ((cx - bx) * (by - ay), (bx - ax) * (cy - by))
}

/// Relative collinearity tolerance.
///
/// Triangle areas scale with coordinate magnitude, so the near-zero band
/// must be one machine-epsilon step relative to the cancelled products,
/// not a fixed constant.
fn area_tolerance(first: f64, second: f64) -> f64 {
    f64::EPSILON * (first.abs() + second.abs())
}
