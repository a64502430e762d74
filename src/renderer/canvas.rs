//! Canvas 2D backend (web only)

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::{Sprite, Surface};
use crate::sim::{Rect, SpriteVariant};

/// Draws sprites onto an HTML canvas with `drawImage`
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    background: HtmlImageElement,
    player: HtmlImageElement,
    player_fallen: HtmlImageElement,
    enemy: HtmlImageElement,
    collectible: HtmlImageElement,
}

fn load_image(sprite: Sprite) -> Result<HtmlImageElement, JsValue> {
    let img = HtmlImageElement::new()?;
    img.set_src(sprite.asset_path());
    Ok(img)
}

impl CanvasSurface {
    /// Size the canvas to the logical playfield and start loading images
    pub fn new(canvas: &HtmlCanvasElement, width: u32, height: u32) -> Result<Self, JsValue> {
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;

        Ok(Self {
            ctx,
            width: width as f64,
            height: height as f64,
            background: load_image(Sprite::Background)?,
            player: load_image(Sprite::Player(SpriteVariant::Normal))?,
            player_fallen: load_image(Sprite::Player(SpriteVariant::Fallen))?,
            enemy: load_image(Sprite::Enemy)?,
            collectible: load_image(Sprite::Collectible)?,
        })
    }

    fn image(&self, sprite: Sprite) -> &HtmlImageElement {
        match sprite {
            Sprite::Background => &self.background,
            Sprite::Player(SpriteVariant::Normal) => &self.player,
            Sprite::Player(SpriteVariant::Fallen) => &self.player_fallen,
            Sprite::Enemy => &self.enemy,
            Sprite::Collectible => &self.collectible,
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) {
        let img = self.image(sprite);
        // Images that have not finished loading draw nothing
        if !img.complete() {
            return;
        }
        if let Err(e) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            img,
            rect.min.x as f64,
            rect.min.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        ) {
            log::warn!("drawImage failed for {:?}: {:?}", sprite, e);
        }
    }
}
