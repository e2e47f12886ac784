pub mod circle;
pub mod line_segment;
pub mod point;
pub mod polygon;
pub mod rect;
pub mod traits;

extern crate nalgebra as na;

pub use crate::utils::*;
pub use circle::*;
pub use line_segment::*;
pub use na::{distance, distance_squared};
pub use point::*;
pub use polygon::*;
pub use rand::distributions::{Distribution, Standard};
pub use rand::Rng;
pub use rect::*;
pub use traits::*;
use crate::config::CollisionConfig;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Geo {
    GeoPoint(P2),
    GeoCircle(Circle),
    GeoRect(Rect),
    GeoLineSegment(LineSegment),
    GeoPolygon(Polygon),
}

impl Geo {
    /// [`Geo::collides_with`] with the default tolerances
    pub fn does_collide(&self, other: &Geo) -> bool {
        self.collides_with(other, &CollisionConfig::default())
    }

    /// Symmetric collision test between any two shapes.
    ///
    /// Polygon-polygon runs the one-sided polygon test in both directions, so
    /// a polygon enclosed by the other is found regardless of argument order.
    pub fn collides_with(&self, other: &Geo, config: &CollisionConfig) -> bool {
        let buffer = config.point_on_segment_buffer;
        match (self, other) {
            (Geo::GeoPoint(p1), Geo::GeoPoint(p2)) => point_equals_point(p1, p2),
            (Geo::GeoPoint(p), Geo::GeoCircle(c)) => point_in_circle(p, c),
            (Geo::GeoPoint(p), Geo::GeoRect(r)) => point_in_rectangle(p, r),
            (Geo::GeoPoint(p), Geo::GeoLineSegment(ls)) => {
                point_on_segment_within(&ls.a, &ls.b, p, buffer)
            }
            (Geo::GeoPoint(p), Geo::GeoPolygon(poly)) => point_in_polygon(poly.points(), p),
            (Geo::GeoCircle(c1), Geo::GeoCircle(c2)) => circle_intersects_circle(c1, c2),
            (Geo::GeoCircle(c), Geo::GeoRect(r)) => circle_intersects_rectangle(c, r),
            (Geo::GeoCircle(c), Geo::GeoLineSegment(ls)) => {
                segment_intersects_circle_within(&ls.a, &ls.b, c, buffer)
            }
            (Geo::GeoCircle(c), Geo::GeoPolygon(poly)) => {
                polygon_intersects_circle_with(poly.points(), c, config)
            }
            (Geo::GeoRect(r1), Geo::GeoRect(r2)) => rectangle_intersects_rectangle(r1, r2),
            (Geo::GeoRect(r), Geo::GeoLineSegment(ls)) => {
                segment_intersects_rectangle(&ls.a, &ls.b, r)
            }
            (Geo::GeoRect(r), Geo::GeoPolygon(poly)) => r.does_collide(poly),
            (Geo::GeoLineSegment(ls1), Geo::GeoLineSegment(ls2)) => ls1.does_collide(ls2),
            (Geo::GeoLineSegment(ls), Geo::GeoPolygon(poly)) => ls.does_collide(poly),
            (Geo::GeoPolygon(p1), Geo::GeoPolygon(p2)) => {
                polygon_intersects_polygon(p1.points(), p2.points())
                    || polygon_intersects_polygon(p2.points(), p1.points())
            }
            (_, _) => other.collides_with(self, config),
        }
    }

    /// Point containment; segments use the default point-on-segment buffer.
    pub fn contains(&self, p: &P2) -> bool {
        match self {
            Geo::GeoPoint(geo) => point_equals_point(geo, p),
            Geo::GeoCircle(geo) => geo.contains(p),
            Geo::GeoRect(geo) => geo.contains(p),
            Geo::GeoLineSegment(geo) => geo.contains(p),
            Geo::GeoPolygon(geo) => geo.contains(p),
        }
    }
}

impl Contains for Geo {
    fn contains(&self, p: &P2) -> bool {
        Geo::contains(self, p)
    }
}

impl Collide<Geo> for Geo {
    fn does_collide(&self, other: &Geo) -> bool {
        Geo::does_collide(self, other)
    }
}

impl Distribution<Geo> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Geo {
        match rng.next_u32() % 5 {
            0 => Geo::GeoPoint(rng.gen()),
            1 => Geo::GeoCircle(rng.gen()),
            2 => Geo::GeoRect(rng.gen()),
            3 => Geo::GeoLineSegment(rng.gen()),
            _ => Geo::GeoPolygon(rng.gen()),
        }
    }
}

impl From<P2> for Geo {
    fn from(p: P2) -> Self {
        Geo::GeoPoint(p)
    }
}
impl From<Circle> for Geo {
    fn from(circle: Circle) -> Self {
        Geo::GeoCircle(circle)
    }
}
impl From<Rect> for Geo {
    fn from(rect: Rect) -> Self {
        Geo::GeoRect(rect)
    }
}
impl From<LineSegment> for Geo {
    fn from(ls: LineSegment) -> Self {
        Geo::GeoLineSegment(ls)
    }
}
impl From<Polygon> for Geo {
    fn from(polygon: Polygon) -> Self {
        Geo::GeoPolygon(polygon)
    }
}
