use super::*;
use serde::{Deserialize, Serialize};

/// Deserialization goes through [`Circle::new`], so a negative radius is
/// flipped the same way.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(from = "CircleFields")]
pub struct Circle {
    pub origin: P2,
    pub radius: Float,
}

#[derive(Deserialize)]
struct CircleFields {
    origin: P2,
    radius: Float,
}

impl From<CircleFields> for Circle {
    fn from(fields: CircleFields) -> Self {
        Circle::new(fields.origin, fields.radius)
    }
}

impl Circle {
    pub fn new(origin: P2, radius: Float) -> Circle {
        Circle {
            origin,
            radius: radius.abs(),
        }
    }
}

/// boundary inclusive
pub fn point_in_circle(p: &P2, c: &Circle) -> bool {
    distance(p, &c.origin) <= c.radius
}

/// Touching and containment both count as intersecting.
pub fn circle_intersects_circle(c1: &Circle, c2: &Circle) -> bool {
    distance(&c1.origin, &c2.origin) <= c1.radius + c2.radius
}

/// Clamps the center onto the rectangle and checks the clamped point
/// against the radius. A center inside the rectangle clamps onto itself.
pub fn circle_intersects_rectangle(c: &Circle, r: &Rect) -> bool {
    let (right, bottom) = (r.origin.x + r.width, r.origin.y + r.height);
    // no f64::clamp: it panics on inverted bounds
    let test_x = if c.origin.x < r.origin.x {
        r.origin.x
    } else if c.origin.x > right {
        right
    } else {
        c.origin.x
    };
    let test_y = if c.origin.y < r.origin.y {
        r.origin.y
    } else if c.origin.y > bottom {
        bottom
    } else {
        c.origin.y
    };
    distance(&c.origin, &P2::new(test_x, test_y)) <= c.radius
}

impl Contains for Circle {
    fn contains(&self, p: &P2) -> bool {
        point_in_circle(p, self)
    }
}

impl Collide<P2> for Circle {
    fn does_collide(&self, p: &P2) -> bool {
        self.contains(p)
    }
}

impl Collide<Circle> for Circle {
    fn does_collide(&self, other: &Circle) -> bool {
        circle_intersects_circle(self, other)
    }
}

impl Collide<Rect> for Circle {
    fn does_collide(&self, rect: &Rect) -> bool {
        circle_intersects_rectangle(self, rect)
    }
}

impl Collide<LineSegment> for Circle {
    fn does_collide(&self, ls: &LineSegment) -> bool {
        segment_intersects_circle(&ls.a, &ls.b, self)
    }
}

impl Collide<Polygon> for Circle {
    fn does_collide(&self, polygon: &Polygon) -> bool {
        polygon_intersects_circle(polygon.points(), self)
    }
}

impl Distribution<Circle> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Circle {
        Circle {
            origin: rng.gen(),
            radius: rng.gen(),
        }
    }
}
