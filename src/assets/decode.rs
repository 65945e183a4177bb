use std::sync::Arc;

use anyhow::Context;
use image::codecs::jpeg::JpegEncoder;

use crate::{assets::cache::CachedFrame, foundation::error::LenticardResult};

/// Decode an encoded image and re-encode it as a self-contained JPEG.
///
/// Alpha is dropped; the display surface is opaque.
pub fn encode_frame(name: &str, bytes: &[u8], quality: u8) -> LenticardResult<CachedFrame> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgb = dyn_img.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, quality)
        .encode_image(&rgb)
        .context("encode jpeg")?;

    Ok(CachedFrame {
        name: name.to_owned(),
        width,
        height,
        jpeg: Arc::new(jpeg),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
