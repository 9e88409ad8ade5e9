//! Play area geometry
//!
//! The drawing surface splits vertically into a sprite zone (top) and a
//! text zone (bottom). The split is recomputed from the surface's pixel
//! size each time the loop restarts; nothing here persists.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in area-local pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    /// Inclusive containment
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Shrink every edge inward by `margin`. A margin larger than the
    /// half-extent collapses that axis onto the center line instead of
    /// inverting the rectangle.
    pub fn shrink(&self, margin: f32) -> Rect {
        let center = self.center();
        Rect {
            min: Vec2::new(
                (self.min.x + margin).min(center.x),
                (self.min.y + margin).min(center.y),
            ),
            max: Vec2::new(
                (self.max.x - margin).max(center.x),
                (self.max.y - margin).max(center.y),
            ),
        }
    }
}

/// The rectangular drawing surface split into sprite and text zones
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
    /// Fraction of the height given to the sprite zone
    pub divide_ratio: f32,
}

impl PlayArea {
    pub fn new(width: f32, height: f32, divide_ratio: f32) -> Self {
        Self {
            width,
            height,
            divide_ratio,
        }
    }

    /// Y coordinate of the line separating the two zones
    #[inline]
    pub fn divider_y(&self) -> f32 {
        self.height * self.divide_ratio
    }

    /// Top portion: where bubbles live
    pub fn sprite_zone(&self) -> Rect {
        Rect::new(Vec2::ZERO, Vec2::new(self.width, self.divider_y()))
    }

    /// Bottom portion: where the question prompt is drawn
    pub fn text_zone(&self) -> Rect {
        Rect::new(
            Vec2::new(0.0, self.divider_y()),
            Vec2::new(self.width, self.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_split() {
        let area = PlayArea::new(800.0, 480.0, 0.8);
        assert_eq!(area.divider_y(), 384.0);

        let sprites = area.sprite_zone();
        assert_eq!(sprites.min, Vec2::ZERO);
        assert_eq!(sprites.max, Vec2::new(800.0, 384.0));

        let text = area.text_zone();
        assert_eq!(text.min, Vec2::new(0.0, 384.0));
        assert_eq!(text.max, Vec2::new(800.0, 480.0));
        assert_eq!(text.center(), Vec2::new(400.0, 432.0));
    }

    #[test]
    fn test_rect_contains_is_inclusive() {
        let rect = Rect::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        assert!(rect.contains(Vec2::new(0.0, 0.0)));
        assert!(rect.contains(Vec2::new(10.0, 10.0)));
        assert!(!rect.contains(Vec2::new(10.01, 5.0)));
    }

    #[test]
    fn test_shrink() {
        let rect = Rect::new(Vec2::ZERO, Vec2::new(800.0, 384.0));
        let inner = rect.shrink(100.0);
        assert_eq!(inner.min, Vec2::new(100.0, 100.0));
        assert_eq!(inner.max, Vec2::new(700.0, 284.0));
    }

    #[test]
    fn test_shrink_collapses_instead_of_inverting() {
        let rect = Rect::new(Vec2::ZERO, Vec2::new(100.0, 400.0));
        let inner = rect.shrink(80.0);
        // X extent (100) is smaller than 2 * 80: collapse to the center
        assert_eq!(inner.min.x, 50.0);
        assert_eq!(inner.max.x, 50.0);
        // Y extent is wide enough to shrink normally
        assert_eq!(inner.min.y, 80.0);
        assert_eq!(inner.max.y, 320.0);
    }
}
