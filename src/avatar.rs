use crate::constants::AVATAR_URL;
use crate::core::{sample_particles, ParticleCloud};
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Slot the frame loop reads; filled once the avatar has been sampled.
pub type AvatarSlot = Rc<RefCell<Option<ParticleCloud>>>;

/// Load the avatar in the background and publish its particle cloud to `slot`.
/// A failed load leaves the slot empty.
pub fn spawn_avatar_load(document: web::Document, slot: AvatarSlot) {
    spawn_local(async move {
        match load_avatar(&document, AVATAR_URL).await {
            Ok(cloud) => {
                log::info!("[avatar] {} particles from {}", cloud.len(), AVATAR_URL);
                *slot.borrow_mut() = Some(cloud);
            }
            Err(e) => log::warn!("[avatar] particle layer disabled: {:?}", e),
        }
    });
}

async fn load_avatar(document: &web::Document, url: &str) -> anyhow::Result<ParticleCloud> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow!("{:?}", e))?;
    img.set_src(url);
    JsFuture::from(img.decode())
        .await
        .map_err(|e| anyhow!("decode {} failed: {:?}", url, e))?;

    let (width, height) = (img.natural_width(), img.natural_height());
    let rgba = rasterize(document, &img, width, height)?;
    let cloud = sample_particles(&rgba, width, height, &mut rand::thread_rng())?;
    Ok(cloud)
}

/// Draw the image into an off-screen 2D canvas and read back its RGBA bytes.
fn rasterize(
    document: &web::Document,
    img: &web::HtmlImageElement,
    width: u32,
    height: u32,
) -> anyhow::Result<Vec<u8>> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow!("{:?}", e))?;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into()
        .map_err(|e| anyhow!("{:?}", e))?;
    ctx.draw_image_with_html_image_element(img, 0.0, 0.0)
        .map_err(|e| anyhow!("{:?}", e))?;
    let data = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok(data.data().0)
}
