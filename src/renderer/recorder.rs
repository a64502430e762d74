//! Surface that records draw calls instead of drawing

use super::{Sprite, Surface};
use crate::sim::Rect;

/// A single recorded operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCall {
    Clear,
    Sprite(Sprite, Rect),
}

/// Records the calls of each frame (cleared on `clear`)
#[derive(Debug, Clone, Default)]
pub struct DrawRecorder {
    pub calls: Vec<DrawCall>,
    /// Total draw calls since creation
    pub total: u64,
}

impl DrawRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sprites drawn since the last clear, in order
    pub fn sprites(&self) -> Vec<Sprite> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Sprite(sprite, _) => Some(*sprite),
                DrawCall::Clear => None,
            })
            .collect()
    }

    /// Rectangle of the first `sprite` drawn since the last clear
    pub fn rect_of(&self, sprite: Sprite) -> Option<Rect> {
        self.calls.iter().find_map(|c| match c {
            DrawCall::Sprite(s, rect) if *s == sprite => Some(*rect),
            _ => None,
        })
    }
}

impl Surface for DrawRecorder {
    fn clear(&mut self) {
        self.calls.clear();
        self.calls.push(DrawCall::Clear);
        self.total += 1;
    }

    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) {
        self.calls.push(DrawCall::Sprite(sprite, rect));
        self.total += 1;
    }
}
