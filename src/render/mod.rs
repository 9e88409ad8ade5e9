//! Host-facing rendering seam
//!
//! The core never owns a window or GPU device. The host supplies a
//! [`Surface`] that hands out one [`Canvas`] frame at a time, plus opaque
//! paint and image handles configured elsewhere. Frames are scoped:
//! whatever `frame()` returns releases the surface when dropped, on
//! success and error paths alike.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque handle to a host-configured paint/brush
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaintId(pub u32);

/// Opaque handle into the host's image cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageId(pub u32);

/// Styling handles for one round; immutable while the round runs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawStyle {
    pub shape: PaintId,
    pub text: PaintId,
    /// RGBA clear color
    pub background: u32,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            shape: PaintId(0),
            text: PaintId(1),
            background: crate::consts::BACKGROUND_COLOR,
        }
    }
}

/// Why a frame could not be produced this instant
///
/// Every variant is transient from the loop's point of view: log, skip the
/// frame, keep running.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The surface is mid-teardown or not yet ready
    #[error("surface is not currently valid")]
    Invalid,
    /// The underlying surface was lost; the host will recreate it
    #[error("surface lost: {0}")]
    Lost(String),
}

/// Draw commands the core issues while rendering one frame
pub trait Canvas {
    fn clear(&mut self, color: u32);
    fn line(&mut self, from: Vec2, to: Vec2, paint: PaintId);
    fn circle(&mut self, center: Vec2, radius: f32, paint: PaintId);
    /// Text centered on `center`
    fn text(&mut self, text: &str, center: Vec2, paint: PaintId);
    /// Host-cached image centered on `center`, scaled to `radius`
    fn image(&mut self, image: ImageId, center: Vec2, radius: f32);
}

/// A lockable drawing surface owned by the host
///
/// Implementations are shared between the host thread and the game
/// worker, so everything here takes `&self`.
pub trait Surface: Send + Sync {
    /// Current pixel dimensions
    fn size(&self) -> (f32, f32);

    /// False while the surface is mid-teardown; the loop skips the frame.
    /// The surface may still die between this check and `frame()`, which
    /// is why `frame()` can fail.
    fn is_valid(&self) -> bool;

    /// Acquire the next frame. The returned canvas holds the surface lock
    /// and presents/releases on drop.
    fn frame(&self) -> Result<Box<dyn Canvas + '_>, SurfaceError>;
}
