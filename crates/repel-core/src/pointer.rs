use crate::constants::pointer_sentinel_vec2;
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;

/// Latest known pointer position.
///
/// A single-slot cell: the pointer listener overwrites it, the frame loop
/// reads it once per tick. Clones share the same slot, so the listener and the
/// loop each hold one.
#[derive(Clone, Debug)]
pub struct PointerCell {
    slot: Rc<Cell<Vec2>>,
}

impl Default for PointerCell {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerCell {
    /// A fresh cell parked at the off-screen sentinel.
    pub fn new() -> Self {
        Self {
            slot: Rc::new(Cell::new(pointer_sentinel_vec2())),
        }
    }

    #[inline]
    pub fn record(&self, x: f32, y: f32) {
        self.slot.set(Vec2::new(x, y));
    }

    #[inline]
    pub fn latest(&self) -> Vec2 {
        self.slot.get()
    }

    /// Park the pointer off-screen again (pointer left the surface).
    pub fn reset(&self) {
        self.slot.set(pointer_sentinel_vec2());
    }
}
