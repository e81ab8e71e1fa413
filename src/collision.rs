//! Rectangle overlap tests.
//!
//! The two games anchor their entities differently and the conventions must
//! not be mixed: the catcher stores top-left corners, the shooter stores
//! centers. All comparisons are strict, so rectangles that merely touch do
//! not collide.

/// Axis-aligned box anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Aabb {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
}

/// Corner-anchored overlap test (catcher convention).
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

/// Point inside a center-anchored box (shooter projectile convention).
pub fn point_in_box(px: f64, py: f64, cx: f64, cy: f64, w: f64, h: f64) -> bool {
    px > cx - w / 2.0 && px < cx + w / 2.0 && py > cy - h / 2.0 && py < cy + h / 2.0
}

/// Center-anchored overlap with `b`'s half-extents folded into `a`'s bounds
/// on all four sides. Used for power-up pickup, where both bodies have area.
pub fn overlaps_centered_inflated(
    ax: f64,
    ay: f64,
    aw: f64,
    ah: f64,
    bx: f64,
    by: f64,
    bw: f64,
    bh: f64,
) -> bool {
    bx > ax - aw / 2.0 - bw / 2.0
        && bx < ax + aw / 2.0 + bw / 2.0
        && by > ay - ah / 2.0 - bh / 2.0
        && by < ay + ah / 2.0 + bh / 2.0
}
