use super::*;

/// exact comparison of both coordinates, no tolerance
pub fn point_equals_point(a: &P2, b: &P2) -> bool {
    a.x == b.x && a.y == b.y
}

/// Whether `p` lies on the segment `a`-`b`, using [`POINT_ON_SEGMENT_BUFFER`].
pub fn point_on_segment(a: &P2, b: &P2, p: &P2) -> bool {
    point_on_segment_within(a, b, p, POINT_ON_SEGMENT_BUFFER)
}

/// Whether `p` lies on the segment `a`-`b`.
///
/// The detour `|pa| + |pb|` has to match the segment length `|ab|` within
/// `buffer`. This is not an exact projection test: points slightly off the
/// segment are accepted, and the accepted band is an ellipse around the
/// segment rather than a constant-width strip.
pub fn point_on_segment_within(a: &P2, b: &P2, p: &P2, buffer: Float) -> bool {
    let detour = distance(p, a) + distance(p, b);
    let length = distance(a, b);
    between(detour, length - buffer, length + buffer)
}
