//! Collage Core - Image transform and composition library
//!
//! This crate provides the processing backbone for a grid-collage editor:
//! decoding uploaded images, the crop/rotate/flip/mask transform pipeline,
//! thumbnail generation, and the fixed-grid collage compositor.
//!
//! # Architecture
//!
//! Every operation is a pure function of its inputs: decode the source,
//! compute on an RGBA [`decode::Surface`], encode the result. Nothing is
//! cached or pooled between calls, so calls may be issued back-to-back or
//! from multiple threads without coordination. Produced resources are plain
//! owned values; dropping one releases it.

pub mod collage;
pub mod decode;
pub mod encode;
pub mod resource;
pub mod store;
pub mod thumbnail;
pub mod transform;

pub use collage::compose;
pub use decode::{DecodeError, FilterType, Surface};
pub use encode::EncodeError;
pub use resource::{EncodedImage, SourceImage};
pub use store::{ImageId, ImageRecord, ImageStore};
pub use thumbnail::{thumbnail, DEFAULT_THUMBNAIL_QUALITY, DEFAULT_THUMBNAIL_SIZE};
pub use transform::{transform, GeometryError, TransformError};

/// Crop rectangle in source-pixel coordinates.
///
/// Produced by an interactive cropping surface; the transform engine
/// validates it against the decoded source dimensions but never re-derives
/// it. `x + width` and `y + height` must stay within the source bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CropRect {
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Width in pixels (must be nonzero).
    pub width: u32,
    /// Height in pixels (must be nonzero).
    pub height: u32,
}

impl CropRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Crop covering an entire `width x height` source.
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// One past the right edge.
    pub fn right(&self) -> u64 {
        self.x as u64 + self.width as u64
    }

    /// One past the bottom edge.
    pub fn bottom(&self) -> u64 {
        self.y as u64 + self.height as u64
    }
}

/// Mirror flags, applied in the rotated frame.
///
/// Both active compose to a point reflection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Flip {
    /// Mirror across the vertical axis.
    pub horizontal: bool,
    /// Mirror across the horizontal axis.
    pub vertical: bool,
}

impl Flip {
    pub fn none() -> Self {
        Self::default()
    }

    /// True when neither axis is mirrored.
    pub fn is_none(&self) -> bool {
        !self.horizontal && !self.vertical
    }
}

/// Target encoding for produced images.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OutputFormat {
    /// Lossy, no alpha channel. Transparent regions are flattened over white.
    #[default]
    Jpeg,
    /// Lossless, alpha preserved. Quality setting is ignored.
    Png,
    /// Lossy, alpha preserved.
    WebP,
}

impl OutputFormat {
    /// MIME type for the encoded bytes.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Png => "image/png",
            OutputFormat::WebP => "image/webp",
        }
    }

    /// Conventional file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Png => "png",
            OutputFormat::WebP => "webp",
        }
    }

    /// Whether the encoding can carry transparency.
    pub fn supports_alpha(&self) -> bool {
        !matches!(self, OutputFormat::Jpeg)
    }
}

/// Output encoding settings.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OutputSpec {
    /// Target encoding.
    pub format: OutputFormat,
    /// Lossy quality in 0.0 to 1.0 (ignored for PNG).
    pub quality: f32,
}

impl Default for OutputSpec {
    fn default() -> Self {
        Self {
            format: OutputFormat::Jpeg,
            quality: 0.92,
        }
    }
}

impl OutputSpec {
    pub fn new(format: OutputFormat, quality: f32) -> Self {
        Self {
            format,
            quality: quality.clamp(0.0, 1.0),
        }
    }
}

/// Settings for a single transform call.
///
/// All fields have defaults matching an untouched editing session: no
/// rotation, no flip, no mask, JPEG at quality 0.92, output sized to the
/// crop rectangle.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransformOptions {
    /// Clockwise rotation in degrees, applied before cropping. Any real
    /// value is accepted and normalized mod 360.
    pub rotation: f64,
    /// Mirror flags, applied in the rotated frame.
    pub flip: Flip,
    /// Apply a circular alpha mask to the final output.
    pub round: bool,
    /// Target encoding and quality.
    pub output: OutputSpec,
    /// Resample target width; defaults to the crop width.
    pub output_width: Option<u32>,
    /// Resample target height; defaults to the crop height.
    pub output_height: Option<u32>,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            flip: Flip::none(),
            round: false,
            output: OutputSpec::default(),
            output_width: None,
            output_height: None,
        }
    }
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rotation normalized mod 360, sign preserved.
    pub fn normalized_rotation(&self) -> f64 {
        self.rotation % 360.0
    }

    /// Normalized rotation in radians.
    pub fn rotation_radians(&self) -> f64 {
        self.normalized_rotation().to_radians()
    }

    /// Output dimensions, falling back to the crop dimensions.
    pub fn output_dimensions(&self, crop: &CropRect) -> (u32, u32) {
        (
            self.output_width.unwrap_or(crop.width),
            self.output_height.unwrap_or(crop.height),
        )
    }
}
