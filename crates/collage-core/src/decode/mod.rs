//! Image decoding for the transform pipeline.
//!
//! This module provides functionality for:
//! - Decoding uploaded image bytes (JPEG, PNG, WebP) into RGBA surfaces
//! - EXIF orientation correction
//! - Dimension probing without a full decode
//! - Resizing for thumbnails and collage cells
//!
//! # Architecture
//!
//! Decoding is synchronous and allocation-per-call: every invocation decodes
//! into a fresh [`Surface`] that the caller owns. Nothing is cached between
//! calls, so decode work can be scheduled on any thread or queued
//! back-to-back without coordination.

mod image;
mod resize;
mod types;

pub use self::image::{decode_image, probe_dimensions};
pub use resize::{fit_dimensions, resize, scale_to_fit};
pub use types::{DecodeError, FilterType, Orientation, Surface};
