use super::*;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Segment between `a` and `b`. The direction carries no meaning, every
/// test treats `a`-`b` and `b`-`a` alike.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct LineSegment {
    pub a: P2,
    pub b: P2,
}

impl LineSegment {
    pub fn new(a: P2, b: P2) -> LineSegment {
        LineSegment { a, b }
    }

    pub fn length_sq(&self) -> Float {
        distance_squared(&self.a, &self.b)
    }

    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }
}

/// Segment-circle test using [`POINT_ON_SEGMENT_BUFFER`].
pub fn segment_intersects_circle(a: &P2, b: &P2, c: &Circle) -> bool {
    segment_intersects_circle_within(a, b, c, POINT_ON_SEGMENT_BUFFER)
}

/// True if an endpoint lies in the circle, or if the projection of the center
/// onto the line through `a` and `b` lies on the segment (within `buffer`) and
/// is no further than `radius` from the center.
///
/// A zero-length segment only collides through the endpoint check.
pub fn segment_intersects_circle_within(a: &P2, b: &P2, c: &Circle, buffer: Float) -> bool {
    if point_in_circle(a, c) || point_in_circle(b, c) {
        return true;
    }
    let ls = LineSegment::new(*a, *b);
    if ls.is_degenerate() {
        trace!(?a, "zero-length segment outside of circle");
        return false;
    }
    let ab = b - a;
    let len_sq = ls.length_sq();
    let dot = (c.origin - a).dot(&ab) / len_sq;
    let closest = a + ab * dot;
    if !point_on_segment_within(a, b, &closest, buffer) {
        return false;
    }
    distance(&c.origin, &closest) <= c.radius
}

/// Parametric line-line intersection: both parameters have to lie in `[0, 1]`.
///
/// Parallel and collinear segments have a zero denominator and are reported
/// as not intersecting, even when collinear segments overlap.
pub fn segment_intersects_segment(a: &P2, b: &P2, c: &P2, d: &P2) -> bool {
    let ab = b - a;
    let cd = d - c;
    let ca = a - c;
    let denom = cd.y * ab.x - cd.x * ab.y;
    if denom == 0.0 {
        trace!(?a, ?b, ?c, ?d, "parallel segments");
        return false;
    }
    let ua = (cd.x * ca.y - cd.y * ca.x) / denom;
    let ub = (ab.x * ca.y - ab.y * ca.x) / denom;
    between(ua, 0.0, 1.0) && between(ub, 0.0, 1.0)
}

/// True if the segment crosses one of the four edges. A segment lying
/// entirely inside the rectangle crosses no edge and is not reported.
pub fn segment_intersects_rectangle(a: &P2, b: &P2, r: &Rect) -> bool {
    r.line_segments()
        .iter()
        .any(|edge| segment_intersects_segment(a, b, &edge.a, &edge.b))
}

impl Contains for LineSegment {
    fn contains(&self, p: &P2) -> bool {
        point_on_segment(&self.a, &self.b, p)
    }
}

impl Collide<P2> for LineSegment {
    fn does_collide(&self, p: &P2) -> bool {
        self.contains(p)
    }
}

impl Collide<Circle> for LineSegment {
    fn does_collide(&self, circle: &Circle) -> bool {
        segment_intersects_circle(&self.a, &self.b, circle)
    }
}

impl Collide<Rect> for LineSegment {
    fn does_collide(&self, rect: &Rect) -> bool {
        segment_intersects_rectangle(&self.a, &self.b, rect)
    }
}

impl Collide<LineSegment> for LineSegment {
    fn does_collide(&self, other: &LineSegment) -> bool {
        segment_intersects_segment(&self.a, &self.b, &other.a, &other.b)
    }
}

impl Collide<Polygon> for LineSegment {
    fn does_collide(&self, polygon: &Polygon) -> bool {
        polygon_intersects_segment(polygon.points(), &self.a, &self.b)
    }
}

impl Distribution<LineSegment> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> LineSegment {
        let a = rng.gen();
        let b = rng.gen();
        LineSegment::new(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn p(x: Float, y: Float) -> P2 {
        P2::new(x, y)
    }

    #[test]
    fn crossing_diagonals() {
        assert!(segment_intersects_segment(
            &p(0.0, 0.0),
            &p(10.0, 10.0),
            &p(0.0, 10.0),
            &p(10.0, 0.0)
        ));
    }

    #[test]
    fn parallel_segments_do_not_intersect() {
        assert!(!segment_intersects_segment(
            &p(0.0, 0.0),
            &p(10.0, 10.0),
            &p(20.0, 20.0),
            &p(30.0, 30.0)
        ));
        assert!(!segment_intersects_segment(
            &p(0.0, 0.0),
            &p(10.0, 0.0),
            &p(0.0, 1.0),
            &p(10.0, 1.0)
        ));
    }

    #[test]
    fn overlapping_collinear_segments_are_not_reported() {
        assert!(!segment_intersects_segment(
            &p(0.0, 0.0),
            &p(10.0, 0.0),
            &p(5.0, 0.0),
            &p(15.0, 0.0)
        ));
    }

    #[test]
    fn touching_endpoints_intersect() {
        assert!(segment_intersects_segment(
            &p(0.0, 0.0),
            &p(10.0, 0.0),
            &p(10.0, 0.0),
            &p(10.0, 10.0)
        ));
        // T-junction
        assert!(segment_intersects_segment(
            &p(0.0, 0.0),
            &p(10.0, 0.0),
            &p(5.0, 0.0),
            &p(5.0, 10.0)
        ));
        assert!(!segment_intersects_segment(
            &p(0.0, 0.0),
            &p(10.0, 0.0),
            &p(5.0, 0.5),
            &p(5.0, 10.0)
        ));
    }

    #[test]
    fn zero_length_segment_never_crosses() {
        assert!(!segment_intersects_segment(
            &p(5.0, 5.0),
            &p(5.0, 5.0),
            &p(0.0, 0.0),
            &p(10.0, 10.0)
        ));
    }

    #[quickcheck]
    fn segment_segment_is_symmetric(
        a: (Float, Float),
        b: (Float, Float),
        c: (Float, Float),
        d: (Float, Float),
    ) -> TestResult {
        let pts = [p(a.0, a.1), p(b.0, b.1), p(c.0, c.1), p(d.0, d.1)];
        if !pts.iter().all(is_finite_point) {
            return TestResult::discard();
        }
        let [a, b, c, d] = pts;
        TestResult::from_bool(
            segment_intersects_segment(&a, &b, &c, &d)
                == segment_intersects_segment(&c, &d, &a, &b),
        )
    }

    #[test]
    fn segment_circle() {
        let c = Circle::new(p(5.0, 5.0), 2.0);
        // passes through the middle, both endpoints outside
        assert!(segment_intersects_circle(&p(0.0, 5.0), &p(10.0, 5.0), &c));
        // endpoint inside
        assert!(segment_intersects_circle(&p(5.0, 6.0), &p(50.0, 50.0), &c));
        // tangent
        assert!(segment_intersects_circle(&p(0.0, 7.0), &p(10.0, 7.0), &c));
        // line passes close, segment stops short
        assert!(!segment_intersects_circle(&p(0.0, 5.0), &p(2.0, 5.0), &c));
        assert!(!segment_intersects_circle(&p(0.0, 8.0), &p(10.0, 8.0), &c));
    }

    #[test]
    fn segment_circle_is_direction_independent() {
        let c = Circle::new(p(5.0, 5.0), 2.0);
        let (a, b) = (p(0.0, 4.0), p(10.0, 6.0));
        assert_eq!(
            segment_intersects_circle(&a, &b, &c),
            segment_intersects_circle(&b, &a, &c)
        );
    }

    #[test]
    fn zero_length_segment_circle() {
        let c = Circle::new(p(0.0, 0.0), 1.0);
        assert!(segment_intersects_circle(&p(0.5, 0.0), &p(0.5, 0.0), &c));
        assert!(!segment_intersects_circle(&p(5.0, 0.0), &p(5.0, 0.0), &c));
    }

    #[test]
    fn segment_rectangle() {
        let r = Rect::new(p(0.0, 0.0), 10.0, 10.0);
        assert!(segment_intersects_rectangle(&p(-5.0, 5.0), &p(5.0, 5.0), &r));
        assert!(segment_intersects_rectangle(&p(-5.0, 5.0), &p(15.0, 5.0), &r));
        assert!(!segment_intersects_rectangle(&p(-5.0, -5.0), &p(-1.0, 20.0), &r));
        // fully inside: no edge is crossed
        assert!(!segment_intersects_rectangle(&p(2.0, 2.0), &p(8.0, 8.0), &r));
    }

    #[test]
    fn segment_degenerate_rectangle() {
        // zero height: top and bottom coincide, left and right have zero length
        let flat = Rect::new(p(0.0, 5.0), 10.0, 0.0);
        assert!(segment_intersects_rectangle(&p(5.0, 0.0), &p(5.0, 10.0), &flat));
        // zero size rectangle: every edge is a point
        let dot = Rect::new(p(5.0, 5.0), 0.0, 0.0);
        assert!(!segment_intersects_rectangle(&p(0.0, 0.0), &p(10.0, 10.0), &dot));
    }

    #[test]
    fn collide_trait() {
        let ls = LineSegment::new(p(0.0, 0.0), p(10.0, 0.0));
        assert!(ls.does_collide(&p(4.0, 0.0)));
        assert!(ls.does_collide(&LineSegment::new(p(5.0, -1.0), p(5.0, 1.0))));
        assert!(!ls.is_degenerate());
        assert_eq!(ls.length_sq(), 100.0);
    }

    #[test]
    fn segment_rectangle_ignores_direction() {
        let mut rng = StdRng::seed_from_u64(19);
        let mut hits = 0;
        for _ in 0..2000 {
            let ls: LineSegment = rng.gen();
            let r: Rect = rng.gen();
            let forward = segment_intersects_rectangle(&ls.a, &ls.b, &r);
            let backward = segment_intersects_rectangle(&ls.b, &ls.a, &r);
            assert_eq!(forward, backward, "{:?} {:?}", ls, r);
            hits += forward as usize;
        }
        assert!(hits > 0 && hits < 2000);
    }
}
