//! Image encoding for pipeline outputs.
//!
//! This module turns a finished RGBA [`Surface`] into encoded bytes in the
//! requested output format:
//! - JPEG with configurable quality (alpha flattened over white)
//! - PNG (lossless, alpha preserved)
//! - Lossy WebP with configurable quality (alpha preserved)
//!
//! Quality is expressed as a float in 0.0 to 1.0 throughout the crate and
//! mapped to each encoder's native scale here.

mod jpeg;
mod png;
mod webp;

use thiserror::Error;

use crate::decode::Surface;
use crate::resource::EncodedImage;
use crate::{OutputFormat, OutputSpec};

pub use jpeg::flatten_over_white;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The encoder rejected the image or produced no data
    #[error("{format} encoding failed: {reason}")]
    EncodingFailed { format: &'static str, reason: String },
}

/// Encode a surface using the given output settings.
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for an empty surface and
/// `EncodeError::EncodingFailed` if the underlying encoder errors.
pub fn encode(surface: &Surface, spec: &OutputSpec) -> Result<EncodedImage, EncodeError> {
    if surface.width == 0 || surface.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: surface.width,
            height: surface.height,
        });
    }

    let quality = spec.quality.clamp(0.0, 1.0);
    let bytes = match spec.format {
        OutputFormat::Jpeg => jpeg::encode_jpeg(surface, quality)?,
        OutputFormat::Png => png::encode_png(surface)?,
        OutputFormat::WebP => webp::encode_webp(surface, quality),
    };

    tracing::trace!(
        format = spec.format.mime_type(),
        width = surface.width,
        height = surface.height,
        bytes = bytes.len(),
        "encoded surface"
    );

    Ok(EncodedImage::new(
        bytes,
        spec.format,
        surface.width,
        surface.height,
    ))
}
