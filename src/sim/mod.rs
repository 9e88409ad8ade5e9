//! Deterministic simulation module
//!
//! All round state and hit-testing logic lives here. This module must stay
//! pure and deterministic:
//! - Seeded RNG only (placement takes an explicit `Rng`)
//! - No ambient time; callers pass dt
//! - No platform dependencies beyond the draw-command seam

pub mod area;
pub mod input;
pub mod round;
pub mod sprite;

pub use area::{PlayArea, Rect};
pub use input::{dispatch_touch, drain_touches};
pub use round::{Round, RoundBuilder};
pub use sprite::{Bubble, Sprite, TouchPolicy};
