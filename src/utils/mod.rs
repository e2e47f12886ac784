extern crate nalgebra as na;
use na::{Point2, Vector2};

pub type Float = f64;
pub type P2 = Point2<Float>;
pub type V2 = Vector2<Float>;

/// Slack (in world units) allowed by the point-on-segment test.
/// Higher values make the test more forgiving and less accurate.
pub const POINT_ON_SEGMENT_BUFFER: Float = 0.1;

pub fn between(num: Float, a: Float, b: Float) -> bool {
    (num >= a) && (num <= b)
}

pub fn is_finite_point(p: &P2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
