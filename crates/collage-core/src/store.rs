//! Image record store.
//!
//! Holds the per-image state the surrounding application tracks for each
//! upload: the immutable source, an optional thumbnail, and the current
//! cropped result. Every resource has exactly one owner - its record.
//! Assigning a new result drops the previous one, and removing a record
//! drops everything it holds, so nothing needs manual revocation.

use tracing::trace;

use crate::resource::{EncodedImage, SourceImage};

/// Identifier for a stored image record.
pub type ImageId = u64;

/// One uploaded image and its derived resources.
#[derive(Debug)]
pub struct ImageRecord {
    id: ImageId,
    source: SourceImage,
    thumbnail: Option<EncodedImage>,
    cropped: Option<EncodedImage>,
}

impl ImageRecord {
    pub fn id(&self) -> ImageId {
        self.id
    }

    pub fn source(&self) -> &SourceImage {
        &self.source
    }

    pub fn thumbnail(&self) -> Option<&EncodedImage> {
        self.thumbnail.as_ref()
    }

    pub fn cropped(&self) -> Option<&EncodedImage> {
        self.cropped.as_ref()
    }

    /// Bytes to display or export: the cropped result when present,
    /// otherwise the original source.
    pub fn display_bytes(&self) -> &[u8] {
        match &self.cropped {
            Some(cropped) => cropped.bytes(),
            None => self.source.bytes(),
        }
    }
}

/// Ordered collection of image records.
///
/// Insertion order is preserved; it drives both grid display and collage
/// cell placement.
#[derive(Debug, Default)]
pub struct ImageStore {
    records: Vec<ImageRecord>,
    next_id: ImageId,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an uploaded source, returning its record id.
    pub fn add(&mut self, source: SourceImage) -> ImageId {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(ImageRecord {
            id,
            source,
            thumbnail: None,
            cropped: None,
        });
        trace!(id, "image added");
        id
    }

    /// Remove a record, dropping its source, thumbnail, and cropped result.
    ///
    /// Returns false if the id is unknown.
    pub fn remove(&mut self, id: ImageId) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        self.records.len() != before
    }

    /// Attach or replace the thumbnail for a record. The previous
    /// thumbnail, if any, is dropped.
    ///
    /// Returns false if the id is unknown (the thumbnail is dropped).
    pub fn set_thumbnail(&mut self, id: ImageId, thumbnail: EncodedImage) -> bool {
        match self.record_mut(id) {
            Some(record) => {
                record.thumbnail = Some(thumbnail);
                true
            }
            None => false,
        }
    }

    /// Set the current cropped result for a record. The previous result,
    /// if any, is dropped - each record holds at most one.
    ///
    /// Returns false if the id is unknown (the result is dropped).
    pub fn set_cropped(&mut self, id: ImageId, cropped: EncodedImage) -> bool {
        match self.record_mut(id) {
            Some(record) => {
                record.cropped = Some(cropped);
                trace!(id, "cropped result replaced");
                true
            }
            None => false,
        }
    }

    /// Clear the cropped result for a record, reverting display to the
    /// source.
    pub fn clear_cropped(&mut self, id: ImageId) -> bool {
        match self.record_mut(id) {
            Some(record) => {
                record.cropped = None;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: ImageId) -> Option<&ImageRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ImageRecord> {
        self.records.iter()
    }

    /// Display bytes of every record in insertion order - the collage
    /// export input (`cropped` where present, source otherwise).
    pub fn export_sources(&self) -> Vec<&[u8]> {
        self.records
            .iter()
            .map(|record| record.display_bytes())
            .collect()
    }

    fn record_mut(&mut self, id: ImageId) -> Option<&mut ImageRecord> {
        self.records.iter_mut().find(|record| record.id == id)
    }
}
