//! Bubble Count - an arithmetic bubble-popping mini-game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (sprites, placement, hit testing)
//! - `render`: Host-facing surface and draw-command seam
//! - `engine`: Question/answer provider contract
//! - `game`: The update/draw loop on its own worker thread
//! - `settings`: Run configuration

pub mod engine;
pub mod game;
pub mod render;
pub mod settings;
pub mod sim;

pub use engine::{CountingEngine, GameEngine, Question};
pub use game::GameLoop;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Number of bubbles placed per round
    pub const SPRITE_COUNT: usize = 10;
    /// Bubble radius in pixels
    pub const BUBBLE_RADIUS: f32 = 100.0;
    /// Fraction of the surface height given to the sprite zone; the rest
    /// holds the question prompt
    pub const VERTICAL_DIVIDE_RATIO: f32 = 0.8;
    /// Placement retries after the first attempt (11 attempts total);
    /// past the cap the overlapping spot is kept
    pub const PLACEMENT_RETRIES: u32 = 10;
    /// Drift speed range for freshly placed bubbles (pixels/second)
    pub const DRIFT_SPEED_MIN: f32 = 15.0;
    pub const DRIFT_SPEED_MAX: f32 = 45.0;
    /// Background clear color (RGBA)
    pub const BACKGROUND_COLOR: u32 = 0x0000_00ff;
    /// Upper bound on a single frame's dt so a stalled frame cannot
    /// teleport bubbles
    pub const MAX_FRAME_DT: f32 = 0.1;
}
