//! Sprite behavior contract and the default bubble implementation
//!
//! Sprites are circular, labeled, movable, visibility-toggleable game
//! objects. Overlap is evaluated pairwise on demand and never cached.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::render::{Canvas, DrawStyle, ImageId};
use crate::sim::area::Rect;

/// Reaction applied when a sprite is touched
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum TouchPolicy {
    /// Pop (become invisible) on any touch
    #[default]
    Hide,
    /// Pop only when the label matches the round's expected answer;
    /// decoys ignore the touch
    AnswerOnly { answer: i32 },
}

/// Behavior contract for every drawable game object
///
/// `overlaps` and `contains` are the only geometry the round logic needs;
/// both are strict (a shared boundary point is not a hit).
pub trait Sprite: Send {
    /// Center position in area-local pixels
    fn center(&self) -> Vec2;

    /// Collision radius; constant after creation
    fn radius(&self) -> f32;

    /// Display label, if any
    fn label(&self) -> Option<&str>;

    /// Invisible sprites stay in the collection but are excluded from
    /// hit-testing and drawing until the round resets
    fn is_visible(&self) -> bool;

    /// Advance motion/animation by `dt` seconds within `bounds`. Returns
    /// true once the sprite has expired. Runs once per frame for every
    /// sprite, visible or not.
    fn update(&mut self, dt: f32, bounds: &Rect) -> bool;

    /// Apply the touch reaction
    fn touched(&mut self);

    /// Render onto the current frame; no-op when invisible
    fn draw(&self, canvas: &mut dyn Canvas, style: &DrawStyle);

    /// Circle-circle overlap test: true iff the center distance is less
    /// than the sum of the radii. Used during placement only; sprites may
    /// drift into overlap afterwards, which is accepted behavior.
    fn overlaps(&self, other: &dyn Sprite) -> bool {
        let reach = self.radius() + other.radius();
        self.center().distance_squared(other.center()) < reach * reach
    }

    /// Point containment test: true iff the point lies strictly within
    /// the radius. Used for touch hit-testing.
    fn contains(&self, point: Vec2) -> bool {
        let r = self.radius();
        self.center().distance_squared(point) < r * r
    }
}

/// The default sprite: a drifting, poppable bubble
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bubble {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub label: Option<String>,
    pub visible: bool,
    /// Opaque handle into the host's image cache; the bubble does not own
    /// the pixels
    pub image: Option<ImageId>,
    pub policy: TouchPolicy,
}

impl Bubble {
    pub fn new(pos: Vec2, radius: f32, label: impl Into<String>) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            label: Some(label.into()),
            visible: true,
            image: None,
            policy: TouchPolicy::Hide,
        }
    }

    fn label_matches(&self, answer: i32) -> bool {
        self.label
            .as_deref()
            .and_then(|s| s.trim().parse::<i32>().ok())
            == Some(answer)
    }
}

impl Sprite for Bubble {
    fn center(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn update(&mut self, dt: f32, bounds: &Rect) -> bool {
        self.pos += self.vel * dt;

        // Reflect off the zone edges so a bubble never drifts out of reach
        let min = bounds.min + Vec2::splat(self.radius);
        let max = bounds.max - Vec2::splat(self.radius);
        if min.x <= max.x {
            if self.pos.x < min.x {
                self.pos.x = min.x;
                self.vel.x = self.vel.x.abs();
            } else if self.pos.x > max.x {
                self.pos.x = max.x;
                self.vel.x = -self.vel.x.abs();
            }
        }
        if min.y <= max.y {
            if self.pos.y < min.y {
                self.pos.y = min.y;
                self.vel.y = self.vel.y.abs();
            } else if self.pos.y > max.y {
                self.pos.y = max.y;
                self.vel.y = -self.vel.y.abs();
            }
        }

        // Bubbles expire by touch, not by time
        false
    }

    fn touched(&mut self) {
        match self.policy {
            TouchPolicy::Hide => self.visible = false,
            TouchPolicy::AnswerOnly { answer } => {
                if self.label_matches(answer) {
                    self.visible = false;
                }
            }
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas, style: &DrawStyle) {
        if !self.visible {
            return;
        }
        match self.image {
            Some(image) => canvas.image(image, self.pos, self.radius),
            None => canvas.circle(self.pos, self.radius, style.shape),
        }
        if let Some(label) = self.label.as_deref() {
            canvas.text(label, self.pos, style.text);
        }
    }
}
