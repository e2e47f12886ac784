use super::*;
use crate::config::CollisionConfig;
use crate::error::GeoError;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use tracing::debug;

/// Simple polygon, possibly non-convex. The last vertex connects back to the
/// first; winding direction does not matter.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<P2>", into = "Vec<P2>")]
pub struct Polygon {
    points: Vec<P2>,
}

impl Polygon {
    pub fn new(points: Vec<P2>) -> Result<Self, GeoError> {
        if points.len() < 3 {
            debug!(len = points.len(), "rejecting polygon");
            return Err(GeoError::TooFewVertices(points.len()));
        }
        if let Some(index) = points.iter().position(|p| !is_finite_point(p)) {
            debug!(index, "rejecting polygon with non-finite vertex");
            return Err(GeoError::NonFiniteVertex { index });
        }
        Ok(Polygon { points })
    }

    pub fn points(&self) -> &[P2] {
        &self.points
    }
}

impl TryFrom<Vec<P2>> for Polygon {
    type Error = GeoError;

    fn try_from(points: Vec<P2>) -> Result<Self, GeoError> {
        Polygon::new(points)
    }
}

impl From<Polygon> for Vec<P2> {
    fn from(polygon: Polygon) -> Self {
        polygon.points
    }
}

impl From<Rect> for Polygon {
    fn from(rect: Rect) -> Self {
        Polygon {
            points: rect.points().to_vec(),
        }
    }
}

/// (current, next) vertex pairs, wrapping from the last vertex to the first
fn edges(vertices: &[P2]) -> impl Iterator<Item = (&P2, &P2)> {
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
}

/// Ray casting towards +x. Each edge that straddles `p.y` (half open, so a
/// vertex on the ray is counted once) and lies right of `p` flips the state.
pub fn point_in_polygon(vertices: &[P2], p: &P2) -> bool {
    let mut inside = false;
    for (vc, vn) in edges(vertices) {
        if ((vc.y >= p.y && vn.y < p.y) || (vc.y < p.y && vn.y >= p.y))
            && p.x < (vn.x - vc.x) * (p.y - vc.y) / (vn.y - vc.y) + vc.x
        {
            inside = !inside;
        }
    }
    inside
}

/// True if the segment crosses any edge. A segment lying entirely inside the
/// polygon is not reported.
pub fn polygon_intersects_segment(vertices: &[P2], a: &P2, b: &P2) -> bool {
    edges(vertices).any(|(vc, vn)| segment_intersects_segment(a, b, vc, vn))
}

/// True if the circle touches any edge. A circle enclosed by the polygon
/// without reaching an edge is not reported, see
/// [`CollisionConfig::circle_center_in_polygon`] for the enclosing variant.
pub fn polygon_intersects_circle(vertices: &[P2], c: &Circle) -> bool {
    polygon_intersects_circle_with(vertices, c, &CollisionConfig::default())
}

pub fn polygon_intersects_circle_with(
    vertices: &[P2],
    c: &Circle,
    config: &CollisionConfig,
) -> bool {
    let buffer = config.point_on_segment_buffer;
    if edges(vertices).any(|(vc, vn)| segment_intersects_circle_within(vc, vn, c, buffer)) {
        return true;
    }
    config.circle_center_in_polygon && point_in_polygon(vertices, &c.origin)
}

/// True if an edge of `p1` crosses `p2`, or the first vertex of `p2` lies
/// inside `p1`.
///
/// This is not symmetric: `p1` lying entirely inside `p2` is only found when
/// called the other way round. Only the first vertex of `p2` is tested for
/// containment.
pub fn polygon_intersects_polygon(p1: &[P2], p2: &[P2]) -> bool {
    if edges(p1).any(|(vc, vn)| polygon_intersects_segment(p2, vc, vn)) {
        return true;
    }
    p2.first().map_or(false, |first| point_in_polygon(p1, first))
}

impl Contains for Polygon {
    fn contains(&self, p: &P2) -> bool {
        point_in_polygon(&self.points, p)
    }
}

impl Collide<P2> for Polygon {
    fn does_collide(&self, p: &P2) -> bool {
        self.contains(p)
    }
}

impl Collide<Circle> for Polygon {
    fn does_collide(&self, circle: &Circle) -> bool {
        polygon_intersects_circle(&self.points, circle)
    }
}

impl Collide<Rect> for Polygon {
    fn does_collide(&self, rect: &Rect) -> bool {
        rect.does_collide(self)
    }
}

impl Collide<LineSegment> for Polygon {
    fn does_collide(&self, ls: &LineSegment) -> bool {
        polygon_intersects_segment(&self.points, &ls.a, &ls.b)
    }
}

impl Collide<Polygon> for Polygon {
    /// the one-sided [`polygon_intersects_polygon`] with `self` as `p1`
    fn does_collide(&self, other: &Polygon) -> bool {
        polygon_intersects_polygon(&self.points, &other.points)
    }
}

/// Star shaped polygon with 3 to 11 vertices around a random center in the
/// unit square.
impl Distribution<Polygon> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Polygon {
        let center: P2 = rng.gen();
        let n = rng.gen_range(3..12usize);
        let step = std::f64::consts::TAU / n as Float;
        let points = (0..n)
            .map(|i| {
                let jitter: Float = rng.gen_range(0.0..0.9);
                let r: Float = rng.gen_range(0.05..0.5);
                let angle = step * (i as Float + jitter);
                center + V2::new(angle.cos(), angle.sin()) * r
            })
            .collect();
        Polygon { points }
    }
}
