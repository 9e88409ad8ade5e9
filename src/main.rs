//! Bubble Count demo entry point
//!
//! Runs one short round headlessly: resume, a simulated tap in the middle
//! of the sprite zone, pause, and a summary in the log. Pair the crate
//! with a real host surface for an interactive build.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use glam::Vec2;

use bubble_count::engine::CountingEngine;
use bubble_count::game::GameLoop;
use bubble_count::render::{Canvas, ImageId, PaintId, Surface, SurfaceError};
use bubble_count::settings::Settings;

/// Surface double that counts frames instead of drawing them, pacing the
/// loop at roughly 60 Hz the way a real display would
struct CountingSurface {
    width: f32,
    height: f32,
    frames: AtomicUsize,
}

struct CountingFrame<'a> {
    surface: &'a CountingSurface,
}

impl Canvas for CountingFrame<'_> {
    fn clear(&mut self, _color: u32) {
        self.surface.frames.fetch_add(1, Ordering::Relaxed);
    }
    fn line(&mut self, _from: Vec2, _to: Vec2, _paint: PaintId) {}
    fn circle(&mut self, _center: Vec2, _radius: f32, _paint: PaintId) {}
    fn text(&mut self, _text: &str, _center: Vec2, _paint: PaintId) {}
    fn image(&mut self, _image: ImageId, _center: Vec2, _radius: f32) {}
}

impl Surface for CountingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn is_valid(&self) -> bool {
        true
    }

    fn frame(&self) -> Result<Box<dyn Canvas + '_>, SurfaceError> {
        thread::sleep(Duration::from_millis(16));
        Ok(Box::new(CountingFrame { surface: self }))
    }
}

fn main() {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };

    let surface = Arc::new(CountingSurface {
        width: 800.0,
        height: 480.0,
        frames: AtomicUsize::new(0),
    });
    let seed: u64 = rand::random();
    log::info!("Bubble Count demo, seed {seed}");

    let mut game = GameLoop::new(Arc::clone(&surface), CountingEngine::new(seed), settings, seed);
    game.resume();
    thread::sleep(Duration::from_millis(300));

    // Tap the middle of the sprite zone; with ten big bubbles something
    // usually pops
    game.pointer_down(400.0, 190.0);
    thread::sleep(Duration::from_millis(200));
    game.pause();

    if let Some(round) = game.last_round() {
        log::info!(
            "round {} over: {} of {} bubbles left, {} frames drawn",
            round.number,
            round.visible_count(),
            round.sprites.len(),
            surface.frames.load(Ordering::Relaxed),
        );
    }
}
