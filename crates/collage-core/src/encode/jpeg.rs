//! JPEG encoding.
//!
//! JPEG carries no alpha channel, so surfaces are flattened over an opaque
//! white background before encoding. Without this, transparent margins from
//! rotation or the round mask would resolve to black and produce dark
//! fringing at the edges.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;

use super::EncodeError;
use crate::decode::Surface;

/// Composite an RGBA surface over opaque white, producing RGB pixel data.
///
/// Straight-alpha blend per channel: `out = a * px + (1 - a) * 255`.
pub fn flatten_over_white(surface: &Surface) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(surface.pixels.len() / 4 * 3);

    for px in surface.pixels.chunks_exact(4) {
        let alpha = px[3] as f32 / 255.0;
        for channel in &px[0..3] {
            let v = *channel as f32 * alpha + 255.0 * (1.0 - alpha);
            rgb.push(v.round().clamp(0.0, 255.0) as u8);
        }
    }

    rgb
}

/// Encode a surface to JPEG bytes.
///
/// `quality` is 0.0 to 1.0 and maps to the encoder's 1-100 scale (the crate
/// default of 0.92 lands at 92).
pub fn encode_jpeg(surface: &Surface, quality: f32) -> Result<Vec<u8>, EncodeError> {
    let quality = ((quality * 100.0).round() as u8).clamp(1, 100);

    let rgb = flatten_over_white(surface);

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);

    encoder
        .write_image(
            &rgb,
            surface.width,
            surface.height,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| EncodeError::EncodingFailed {
            format: "JPEG",
            reason: e.to_string(),
        })?;

    Ok(buffer.into_inner())
}
