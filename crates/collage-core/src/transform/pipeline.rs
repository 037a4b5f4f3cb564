//! The transform pipeline entry point.

use tracing::{debug, trace};

use crate::decode;
use crate::encode;
use crate::resource::{EncodedImage, SourceImage};
use crate::{CropRect, TransformOptions};

use super::geometry::{self, GeometryError};
use super::mask;
use super::render;
use super::sample::InterpolationFilter;
use super::TransformError;

/// Crop, rotate, flip, mask, and re-encode a source image.
///
/// Referentially transparent: identical inputs produce identical outputs
/// (modulo nothing - the geometry is deterministic). The source is never
/// mutated; the returned [`EncodedImage`] is independent of it and owned by
/// the caller. All scratch surfaces are allocated and dropped within the
/// call.
///
/// # Errors
///
/// - [`TransformError::Decode`] if the source bytes are unreadable
/// - [`TransformError::Geometry`] if the crop is empty or out of bounds, or
///   an explicit output dimension is zero
/// - [`TransformError::Encode`] if the requested format cannot be produced
pub fn transform(
    source: &SourceImage,
    crop: CropRect,
    options: &TransformOptions,
) -> Result<EncodedImage, TransformError> {
    let surface = decode::decode_image(source.bytes())?;
    trace!(
        width = surface.width,
        height = surface.height,
        "decoded source"
    );

    geometry::validate_crop(&crop, surface.width, surface.height)?;

    let (out_w, out_h) = options.output_dimensions(&crop);
    if out_w == 0 || out_h == 0 {
        return Err(GeometryError::EmptyOutput {
            width: out_w,
            height: out_h,
        }
        .into());
    }

    let radians = options.rotation_radians();
    let safe = geometry::safe_area(surface.width, surface.height, radians);
    let working = render::render_working_surface(&surface, radians, options.flip, safe);
    trace!(safe, rotation = options.rotation, "rendered working surface");

    // Top-left of the source within the working surface
    let pos_x = safe as f64 / 2.0 - surface.width as f64 / 2.0;
    let pos_y = safe as f64 / 2.0 - surface.height as f64 / 2.0;

    let mut dest = render::blit_region(
        &working,
        pos_x + crop.x as f64,
        pos_y + crop.y as f64,
        crop.width as f64,
        crop.height as f64,
        out_w,
        out_h,
        InterpolationFilter::Lanczos3,
    );

    if options.round {
        mask::apply_round_mask(&mut dest);
    }

    let encoded = encode::encode(&dest, &options.output)?;
    debug!(
        out_w,
        out_h,
        format = options.output.format.mime_type(),
        bytes = encoded.bytes().len(),
        "transform complete"
    );

    Ok(encoded)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
