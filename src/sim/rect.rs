//! Axis-aligned rectangles for hitboxes

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle anchored at its top-left corner (screen coords, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
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
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Overlap test (separating axis on x and y)
    ///
    /// All four comparisons are strict, so rectangles that only share an edge
    /// do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x
            && a_max.x > other.min.x
            && self.min.y < b_max.y
            && a_max.y > other.min.y
    }

    /// Shrink to `fraction` of each axis, keeping the same center
    pub fn inset(&self, fraction: f32) -> Self {
        let size = self.size * fraction;
        Self {
            min: self.min + (self.size - size) / 2.0,
            size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_shared_edge_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_zero_area_on_edge() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let line = Rect::new(10.0, 2.0, 0.0, 5.0);
        assert!(!a.intersects(&line));
    }

    #[test]
    fn test_inset_is_centered() {
        let r = Rect::new(50.0, 100.0, 30.0, 30.0).inset(0.8);
        assert!((r.min.x - 53.0).abs() < 1e-4);
        assert!((r.min.y - 103.0).abs() < 1e-4);
        assert!((r.size.x - 24.0).abs() < 1e-4);
        assert!((r.size.y - 24.0).abs() < 1e-4);
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (-500.0f32..500.0, -500.0f32..500.0, 0.0f32..300.0, 0.0f32..300.0)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_intersects_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn prop_edge_touching_never_collides(a in rect_strategy(), h in 0.0f32..300.0, dy in -100.0f32..100.0) {
            // Zero-width strip placed exactly on the right edge
            let strip = Rect::new(a.max().x, a.min.y + dy, 0.0, h);
            prop_assert!(!a.intersects(&strip));
            prop_assert!(!strip.intersects(&a));
        }
    }
}
