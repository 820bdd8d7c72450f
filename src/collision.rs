use crate::entities::{Body, Entity};

/// Strict AABB overlap: boxes that only touch along an edge do not collide.
pub fn overlaps(a: &Body, b: &Body) -> bool {
    a.x < b.x + b.width()
        && a.x + a.width() > b.x
        && a.y < b.y + b.height()
        && a.y + a.height() > b.y
}

pub fn collides<A, B>(a: &A, b: &B) -> bool
where
    A: Entity + ?Sized,
    B: Entity + ?Sized,
{
    overlaps(a.body(), b.body())
}
