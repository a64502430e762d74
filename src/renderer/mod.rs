//! 2D drawing surface abstraction
//!
//! The frame driver only needs "clear" and "draw this image into this
//! rectangle". On the web that is a `CanvasRenderingContext2d`; headless
//! hosts and tests use `DrawRecorder`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recorder;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recorder::{DrawCall, DrawRecorder};

use crate::sim::{Rect, SpriteVariant};

/// Image slots the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Background,
    Player(SpriteVariant),
    Enemy,
    Collectible,
}

impl Sprite {
    /// Every image the web host has to load
    pub const ALL: [Sprite; 5] = [
        Sprite::Background,
        Sprite::Player(SpriteVariant::Normal),
        Sprite::Player(SpriteVariant::Fallen),
        Sprite::Enemy,
        Sprite::Collectible,
    ];

    /// Asset path relative to the page
    pub fn asset_path(&self) -> &'static str {
        match self {
            Sprite::Background => "images/background.png",
            Sprite::Player(SpriteVariant::Normal) => "images/player.png",
            Sprite::Player(SpriteVariant::Fallen) => "images/player2.png",
            Sprite::Enemy => "images/enemy.png",
            Sprite::Collectible => "images/collectible.png",
        }
    }
}

/// Something the frame driver can draw on
pub trait Surface {
    /// Wipe the whole playfield
    fn clear(&mut self);

    /// Draw `sprite` stretched into `rect`
    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect);
}
