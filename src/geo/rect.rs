use super::*;
use serde::{Deserialize, Serialize};

/// Axis aligned rectangle, `origin` is the top left corner and y grows
/// downwards. Deserialization goes through [`Rect::new`].
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(from = "RectFields")]
pub struct Rect {
    pub origin: P2,
    pub width: Float,
    pub height: Float,
}

#[derive(Deserialize)]
struct RectFields {
    origin: P2,
    width: Float,
    height: Float,
}

impl From<RectFields> for Rect {
    fn from(fields: RectFields) -> Self {
        Rect::new(fields.origin, fields.width, fields.height)
    }
}

pub type RectPoints = [P2; 4];

pub type RectLineSegments = [LineSegment; 4];

impl Rect {
    pub fn new(origin: P2, width: Float, height: Float) -> Rect {
        Rect {
            origin,
            width: width.abs(),
            height: height.abs(),
        }
    }

    pub fn from_tlbr(top: Float, left: Float, bottom: Float, right: Float) -> Self {
        Rect {
            origin: P2::new(left.min(right), top.min(bottom)),
            width: (right - left).abs(),
            height: (bottom - top).abs(),
        }
    }

    pub fn right(&self) -> Float {
        self.origin.x + self.width
    }

    pub fn bottom(&self) -> Float {
        self.origin.y + self.height
    }

    /// corners clockwise (on screen) starting at the top left
    pub fn points(&self) -> RectPoints {
        let (l, t, r, b) = (self.origin.x, self.origin.y, self.right(), self.bottom());
        [P2::new(l, t), P2::new(r, t), P2::new(r, b), P2::new(l, b)]
    }

    /// edges in the order left, right, top, bottom
    pub fn line_segments(&self) -> RectLineSegments {
        let [tl, tr, br, bl] = self.points();
        [
            LineSegment::new(tl, bl),
            LineSegment::new(tr, br),
            LineSegment::new(tl, tr),
            LineSegment::new(bl, br),
        ]
    }
}

/// boundary inclusive on all four edges
pub fn point_in_rectangle(p: &P2, r: &Rect) -> bool {
    between(p.x, r.origin.x, r.right()) && between(p.y, r.origin.y, r.bottom())
}

/// Overlapping projections on both axes. Touching edges count.
pub fn rectangle_intersects_rectangle(r1: &Rect, r2: &Rect) -> bool {
    r1.right() >= r2.origin.x
        && r1.origin.x <= r2.right()
        && r1.bottom() >= r2.origin.y
        && r1.origin.y <= r2.bottom()
}

impl Contains for Rect {
    fn contains(&self, p: &P2) -> bool {
        point_in_rectangle(p, self)
    }
}

impl Collide<P2> for Rect {
    fn does_collide(&self, p: &P2) -> bool {
        self.contains(p)
    }
}

impl Collide<Circle> for Rect {
    fn does_collide(&self, circle: &Circle) -> bool {
        circle_intersects_rectangle(circle, self)
    }
}

impl Collide<Rect> for Rect {
    fn does_collide(&self, other: &Rect) -> bool {
        rectangle_intersects_rectangle(self, other)
    }
}

impl Collide<LineSegment> for Rect {
    fn does_collide(&self, ls: &LineSegment) -> bool {
        segment_intersects_rectangle(&ls.a, &ls.b, self)
    }
}

impl Collide<Polygon> for Rect {
    /// Runs the polygon-polygon test in both directions with the rectangle's
    /// corners as the first polygon.
    fn does_collide(&self, polygon: &Polygon) -> bool {
        let corners = Polygon::from(*self);
        polygon_intersects_polygon(corners.points(), polygon.points())
            || polygon_intersects_polygon(polygon.points(), corners.points())
    }
}

impl Distribution<Rect> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Rect {
        let (a, b): (P2, P2) = (rng.gen(), rng.gen());
        Rect::from_tlbr(a.y, a.x, b.y, b.x)
    }
}
