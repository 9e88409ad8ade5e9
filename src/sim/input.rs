//! Touch hit-testing
//!
//! Pointer-down events arrive on the host thread and queue over a channel;
//! the worker drains the queue at the start of each update pass, so sprite
//! state is only ever written from one thread per round. A touch becomes
//! visible to the player at most one frame after it lands.

use std::sync::mpsc::Receiver;

use glam::Vec2;

use crate::sim::sprite::Sprite;

/// Apply a pointer-down point to the collection.
///
/// Every visible sprite containing the point is touched; overlapping
/// sprites all take the hit (no single-winner guarantee). Invisible
/// sprites are skipped - they would ignore the touch anyway. Returns the
/// number of sprites touched.
pub fn dispatch_touch(sprites: &mut [Box<dyn Sprite>], point: Vec2) -> usize {
    let mut hits = 0;
    for sprite in sprites.iter_mut() {
        if sprite.is_visible() && sprite.contains(point) {
            sprite.touched();
            hits += 1;
        }
    }
    hits
}

/// Drain every queued pointer-down event into the collection
pub fn drain_touches(queue: &Receiver<Vec2>, sprites: &mut [Box<dyn Sprite>]) -> usize {
    let mut hits = 0;
    for point in queue.try_iter() {
        let n = dispatch_touch(sprites, point);
        if n > 0 {
            log::debug!("touch at ({:.0}, {:.0}) popped {n} bubble(s)", point.x, point.y);
        }
        hits += n;
    }
    hits
}
