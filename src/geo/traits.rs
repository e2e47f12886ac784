use super::*;

/// whether a shape contains a point
pub trait Contains {
    fn contains(&self, p: &P2) -> bool;
}

impl Contains for P2 {
    fn contains(&self, p: &P2) -> bool {
        point_equals_point(self, p)
    }
}

/// boolean collision test between two shapes, using the default tolerances
pub trait Collide<T> {
    fn does_collide(&self, other: &T) -> bool;
}

impl Collide<P2> for P2 {
    fn does_collide(&self, other: &P2) -> bool {
        point_equals_point(self, other)
    }
}

impl Collide<Circle> for P2 {
    fn does_collide(&self, circle: &Circle) -> bool {
        circle.contains(self)
    }
}

impl Collide<Rect> for P2 {
    fn does_collide(&self, rect: &Rect) -> bool {
        rect.contains(self)
    }
}

impl Collide<LineSegment> for P2 {
    fn does_collide(&self, ls: &LineSegment) -> bool {
        ls.contains(self)
    }
}

impl Collide<Polygon> for P2 {
    fn does_collide(&self, polygon: &Polygon) -> bool {
        polygon.contains(self)
    }
}
