//! Axis-aligned bounding box overlap
//!
//! Every entity is a rectangle anchored at its top-left corner, so a single
//! half-open interval test covers player/enemy and player/collectible hits.

use glam::Vec2;

/// Axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn from_pos_size(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// True when the rectangle has no area
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }
}

/// Check whether two rectangles intersect on both axes
///
/// Uses `a.x < b.x + b.w && a.x + a.w > b.x` (and the same on y), so
/// rectangles that only share an edge do not overlap. Empty rectangles
/// never overlap anything.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    let (a_max, b_max) = (a.max(), b.max());
    a.min.x < b_max.x && a_max.x > b.min.x && a.min.y < b_max.y && a_max.y > b.min.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_partial() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(90.0, 90.0, 50.0, 50.0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let right = Rect::new(100.0, 0.0, 50.0, 50.0);
        let below = Rect::new(0.0, 100.0, 50.0, 50.0);
        assert!(!overlaps(&a, &right));
        assert!(!overlaps(&a, &below));
    }

    #[test]
    fn test_contained_rect_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(25.0, 25.0, 10.0, 10.0);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    #[test]
    fn test_zero_size_never_overlaps() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let point = Rect::new(50.0, 50.0, 0.0, 0.0);
        let line = Rect::new(50.0, 50.0, 10.0, 0.0);
        assert!(!overlaps(&a, &point));
        assert!(!overlaps(&line, &a));
        assert!(!overlaps(&point, &point));
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (-500.0f32..1500.0, -500.0f32..1500.0, 0.0f32..300.0, 0.0f32..300.0)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }

        #[test]
        fn prop_nonempty_rect_overlaps_itself(
            x in -500.0f32..1500.0,
            y in -500.0f32..1500.0,
            w in 0.5f32..300.0,
            h in 0.5f32..300.0,
        ) {
            let r = Rect::new(x, y, w, h);
            prop_assert!(overlaps(&r, &r));
        }
    }
}
