//! The game loop
//!
//! `resume()` builds a round and hands it to a dedicated worker thread
//! that repeats update then draw at whatever rate the surface allows;
//! `pause()` signals stop over a channel and blocks until the worker has
//! exited. Exactly two threads touch the core: the host thread (resume /
//! pause / pointer_down) and the worker. The round moves into the worker
//! and moves back on join, so sprite state is never shared across threads.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::MAX_FRAME_DT;
use crate::engine::GameEngine;
use crate::render::{DrawStyle, Surface};
use crate::settings::Settings;
use crate::sim::area::PlayArea;
use crate::sim::input;
use crate::sim::round::{Round, RoundBuilder};

/// Mix the run seed with the round number so every round gets a fresh,
/// reproducible placement stream
fn round_seed(seed: u64, round: u32) -> u64 {
    (round as u64).wrapping_mul(2654435761).wrapping_add(seed)
}

struct Worker {
    stop_tx: Sender<()>,
    touch_tx: Sender<Vec2>,
    handle: JoinHandle<Round>,
}

/// Drives rounds of the bubble game against a host surface
pub struct GameLoop<S: Surface + 'static, E: GameEngine> {
    surface: Arc<S>,
    engine: E,
    settings: Settings,
    style: DrawStyle,
    seed: u64,
    rounds_prepared: u32,
    worker: Option<Worker>,
    last_round: Option<Round>,
}

impl<S: Surface + 'static, E: GameEngine> GameLoop<S, E> {
    pub fn new(surface: Arc<S>, engine: E, settings: Settings, seed: u64) -> Self {
        Self {
            surface,
            engine,
            settings: settings.sanitized(),
            style: DrawStyle::default(),
            seed,
            rounds_prepared: 0,
            worker: None,
            last_round: None,
        }
    }

    /// Replace the default styling handles with host-configured ones
    pub fn set_style(&mut self, style: DrawStyle) {
        self.style = style;
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Rounds prepared so far
    pub fn rounds_prepared(&self) -> u32 {
        self.rounds_prepared
    }

    /// The round handed back by the last `pause()`
    pub fn last_round(&self) -> Option<&Round> {
        self.last_round.as_ref()
    }

    fn builder(&self) -> RoundBuilder {
        RoundBuilder {
            sprite_count: self.settings.sprite_count,
            radius: self.settings.bubble_radius,
            drift_speed_min: self.settings.drift_speed_min,
            drift_speed_max: self.settings.drift_speed_max,
            ..RoundBuilder::default()
        }
    }

    /// Start a fresh round and the worker thread driving it.
    ///
    /// Must not be called again until `pause()` has returned: two workers
    /// racing on one sprite collection is a caller contract violation, so
    /// the call is refused with a warning instead.
    pub fn resume(&mut self) {
        if self.worker.is_some() {
            log::warn!("resume() while the game thread is running; ignoring");
            return;
        }

        let (width, height) = self.surface.size();
        let area = PlayArea::new(width, height, self.settings.divide_ratio);
        self.rounds_prepared += 1;

        let question = self.engine.next_question();
        log::info!("round {}: {}", self.rounds_prepared, question.text);

        let mut rng = Pcg32::seed_from_u64(round_seed(self.seed, self.rounds_prepared));
        let round = self
            .builder()
            .build(self.rounds_prepared, question, &area.sprite_zone(), &mut rng);

        let (stop_tx, stop_rx) = mpsc::channel();
        let (touch_tx, touch_rx) = mpsc::channel();
        let surface = Arc::clone(&self.surface);
        let style = self.style;
        let spawned = thread::Builder::new()
            .name("game-loop".into())
            .spawn(move || run_worker(surface, area, round, style, stop_rx, touch_rx));
        match spawned {
            Ok(handle) => {
                self.worker = Some(Worker {
                    stop_tx,
                    touch_tx,
                    handle,
                });
            }
            Err(e) => log::error!("failed to start game thread: {e}"),
        }
    }

    /// Stop the worker and block until it has exited.
    ///
    /// This is the only blocking call in the interface. The worker always
    /// finishes its current frame first. A worker panic is logged and
    /// treated as the pause having completed.
    pub fn pause(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };
        let _ = worker.stop_tx.send(());
        match worker.handle.join() {
            Ok(round) => self.last_round = Some(round),
            Err(_) => log::error!("game thread panicked during shutdown"),
        }
    }

    /// Forward a raw pointer-down event from the host.
    ///
    /// Queued and applied at the start of the worker's next update pass;
    /// dropped when no round is active.
    pub fn pointer_down(&self, x: f32, y: f32) {
        match &self.worker {
            Some(worker) => {
                if worker.touch_tx.send(Vec2::new(x, y)).is_err() {
                    log::debug!("pointer event dropped; game thread already stopped");
                }
            }
            None => log::debug!("pointer event ignored; game is paused"),
        }
    }
}

fn run_worker<S: Surface>(
    surface: Arc<S>,
    area: PlayArea,
    mut round: Round,
    style: DrawStyle,
    stop_rx: Receiver<()>,
    touch_rx: Receiver<Vec2>,
) -> Round {
    log::debug!("game thread up for round {}", round.number);
    let zone = area.sprite_zone();
    let mut last_frame = Instant::now();
    loop {
        // A stop signal or a dropped GameLoop both end the loop; the
        // current frame always completes before the check runs again
        match stop_rx.try_recv() {
            Err(TryRecvError::Empty) => {}
            Ok(()) | Err(TryRecvError::Disconnected) => break,
        }

        let now = Instant::now();
        let dt = (now - last_frame).as_secs_f32().min(MAX_FRAME_DT);
        last_frame = now;

        input::drain_touches(&touch_rx, &mut round.sprites);
        round.update(dt, &zone);
        draw_frame(surface.as_ref(), &area, &round, &style);
    }
    log::debug!("game thread down after round {}", round.number);
    round
}

/// Render one frame; any surface trouble skips the frame and never stops
/// the loop
fn draw_frame<S: Surface>(surface: &S, area: &PlayArea, round: &Round, style: &DrawStyle) {
    if !surface.is_valid() {
        return;
    }
    // The surface may die between the validity check and the lock; that
    // costs this frame only
    let mut frame = match surface.frame() {
        Ok(frame) => frame,
        Err(e) => {
            log::trace!("frame skipped: {e}");
            return;
        }
    };

    frame.clear(style.background);
    let divider_y = area.divider_y();
    frame.line(
        Vec2::new(0.0, divider_y),
        Vec2::new(area.width, divider_y),
        style.shape,
    );
    frame.text(&round.question.text, area.text_zone().center(), style.text);
    for sprite in &round.sprites {
        sprite.draw(&mut *frame, style);
    }
}
