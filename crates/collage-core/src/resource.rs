//! Owned image resource handles.
//!
//! The pipeline deals in two resource kinds: [`SourceImage`], the immutable
//! uploaded original, and [`EncodedImage`], a produced result. Both own
//! their encoded bytes outright; dropping a handle releases its backing
//! allocation, so the release discipline from the surrounding application
//! (replace-drops-previous, remove-drops-all) falls out of ordinary
//! ownership.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::decode::{self, DecodeError};
use crate::OutputFormat;

/// An immutable, decodable source image.
///
/// Construction probes the natural dimensions so callers can lay out crop
/// surfaces without a full decode; the pixel data is decoded fresh on every
/// pipeline call.
#[derive(Debug, Clone)]
pub struct SourceImage {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
}

impl SourceImage {
    /// Wrap encoded image bytes, probing their dimensions.
    ///
    /// # Errors
    ///
    /// Returns a `DecodeError` if the bytes are not a readable image.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, DecodeError> {
        let (width, height) = decode::probe_dimensions(&bytes)?;
        Ok(Self {
            bytes,
            width,
            height,
        })
    }

    /// The encoded bytes backing this source.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Natural width in pixels (orientation corrected).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Natural height in pixels (orientation corrected).
    pub fn height(&self) -> u32 {
        self.height
    }
}

/// An encoded result produced by the pipeline.
///
/// Independent of the source it was derived from; the caller owns it and
/// releases it by dropping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    bytes: Vec<u8>,
    format: OutputFormat,
    width: u32,
    height: u32,
}

impl EncodedImage {
    pub fn new(bytes: Vec<u8>, format: OutputFormat, width: u32, height: u32) -> Self {
        Self {
            bytes,
            format,
            width,
            height,
        }
    }

    /// The encoded bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the handle, taking ownership of the bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// The encoding of the bytes.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Pixel width of the encoded image.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Pixel height of the encoded image.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Render the bytes as a `data:` URL.
    ///
    /// Inline fallback representation for display layers that cannot take
    /// raw bytes. The pixel content is identical to [`Self::bytes`]; the
    /// string form costs ~4/3 of the binary size, so prefer the bytes where
    /// possible.
    pub fn to_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.format.mime_type(),
            STANDARD.encode(&self.bytes)
        )
    }
}
