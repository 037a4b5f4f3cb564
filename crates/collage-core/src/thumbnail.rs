//! Downscaled thumbnail generation.
//!
//! Keeps grid rendering cheap: the full-resolution source is decoded once
//! and resampled down so its longest edge fits `max_size`, preserving
//! aspect ratio exactly. Runs independently of the crop pipeline; callers
//! treat failures as non-fatal and fall back to displaying the full source.

use tracing::debug;

use crate::decode::{self, FilterType};
use crate::encode;
use crate::resource::{EncodedImage, SourceImage};
use crate::transform::TransformError;
use crate::{OutputFormat, OutputSpec};

/// Default longest-edge limit for grid thumbnails.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 512;

/// Default thumbnail encoding quality (WebP).
pub const DEFAULT_THUMBNAIL_QUALITY: f32 = 0.8;

/// Generate a downscaled thumbnail of a source image.
///
/// `scale = min(1, max_size / max(W, H))`; each output dimension is the
/// rounded scaled size, floored to at least 1 pixel. Sources already within
/// `max_size` are re-encoded at their natural size. No cropping, rotation,
/// or masking is applied.
///
/// # Errors
///
/// Returns [`TransformError::Decode`] if the source cannot be decoded and
/// [`TransformError::Encode`] if the target encoding fails. Callers on the
/// upload path swallow these and keep the image without a thumbnail.
pub fn thumbnail(
    source: &SourceImage,
    max_size: u32,
    format: OutputFormat,
    quality: f32,
) -> Result<EncodedImage, TransformError> {
    let surface = decode::decode_image(source.bytes())?;
    let scaled = decode::scale_to_fit(&surface, max_size, FilterType::Lanczos3)?;

    let encoded = encode::encode(&scaled, &OutputSpec::new(format, quality))?;
    debug!(
        max_size,
        width = encoded.width(),
        height = encoded.height(),
        format = format.mime_type(),
        "thumbnail generated"
    );

    Ok(encoded)
}

/// [`thumbnail`] with the default size, format, and quality.
pub fn default_thumbnail(source: &SourceImage) -> Result<EncodedImage, TransformError> {
    thumbnail(
        source,
        DEFAULT_THUMBNAIL_SIZE,
        OutputFormat::WebP,
        DEFAULT_THUMBNAIL_QUALITY,
    )
}
