//! The image transform engine.
//!
//! [`transform`] is the single entry point: given a decodable source, a
//! crop rectangle, and a set of [`crate::TransformOptions`], it produces a
//! newly encoded output image. The stages run in a fixed order:
//!
//! 1. Decode the source into an RGBA surface
//! 2. Validate the crop geometry
//! 3. Render the rotated/flipped source into a square working surface
//! 4. Crop + resample into the destination surface in one blit
//! 5. Optionally apply the circular mask
//! 6. Encode (JPEG output is flattened over white first)
//!
//! Each stage is a discrete function over plain surfaces, so the pipeline
//! can be rehosted on any scheduling model; results are only observable
//! once all stages complete.
//!
//! # Coordinate System
//!
//! - Rotation is in degrees, positive = clockwise
//! - Crop coordinates are source pixels, origin at the top-left corner
//! - Flips apply in the rotated frame

mod geometry;
mod mask;
mod pipeline;
mod render;
mod sample;

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

pub use geometry::{rotated_bounds, safe_area, validate_crop, GeometryError};
pub use mask::apply_round_mask;
pub use pipeline::transform;
pub use render::{blit_region, render_working_surface};
pub use sample::{sample_bilinear, sample_lanczos3, InterpolationFilter};

/// Any failure of a transform pipeline run.
///
/// Wraps the per-stage error types; callers that only care about success
/// can treat this opaquely, while retry policy can match on the stage.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The source bytes could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The crop rectangle or output dimensions are invalid.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// The output could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}
