//! Engine traits.
//!
//! The wrappers in this crate never touch pixels or file formats. They
//! pass option dictionaries to a backend and hand back what it returns.
//! A backend is the native image I/O engine on platforms that have one,
//! or [`memory`](crate::memory) elsewhere.
//!
//! All calls take an options [`RawMap`], already flattened from the typed
//! option values. An empty map means "no options".

use crate::TypeIdentifier;
use iio_props::RawMap;

/// Progress of a source, or of one image in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceStatus {
    /// All data has been read.
    Complete,
    /// More data is expected.
    Incomplete,
    /// Still reading the container header.
    ReadingHeader,
    /// Container type could not be determined.
    UnknownType,
    /// Data is corrupt.
    InvalidData,
    /// Data ended before the container did.
    UnexpectedEof,
}

impl SourceStatus {
    /// Returns `true` for [`SourceStatus::Complete`].
    #[inline]
    pub fn is_complete(self) -> bool {
        self == SourceStatus::Complete
    }

    /// Returns `true` for the three failure states.
    pub fn is_error(self) -> bool {
        matches!(
            self,
            SourceStatus::UnknownType | SourceStatus::InvalidData | SourceStatus::UnexpectedEof
        )
    }
}

/// Type identifiers an engine can read and write.
pub trait TypeRegistry {
    /// Identifiers readable by sources.
    fn source_types(&self) -> Vec<TypeIdentifier>;

    /// Identifiers writable by destinations.
    fn destination_types(&self) -> Vec<TypeIdentifier>;
}

/// Readable image container.
pub trait SourceBackend {
    /// Decoded image handle.
    type Image;

    /// Container type, once known.
    fn type_identifier(&self) -> Option<TypeIdentifier>;

    /// Number of images, not counting thumbnails.
    fn image_count(&self) -> usize;

    /// Status of the whole container.
    fn status(&self) -> SourceStatus;

    /// Status of the image at `index`.
    fn status_at(&self, index: usize) -> SourceStatus;

    /// Decodes the image at `index`.
    fn create_image(&self, index: usize, options: &RawMap) -> Option<Self::Image>;

    /// Returns a thumbnail for the image at `index`.
    fn create_thumbnail(&self, index: usize, options: &RawMap) -> Option<Self::Image>;

    /// Container-level properties.
    fn properties(&self, options: &RawMap) -> Option<RawMap>;

    /// Properties of the image at `index`.
    fn properties_at(&self, index: usize, options: &RawMap) -> Option<RawMap>;
}

/// Source fed with data as it arrives.
pub trait IncrementalBackend: SourceBackend {
    /// Replaces the accumulated data with `data`, the full prefix received
    /// so far. `is_final` marks the last update.
    fn update(&mut self, data: &[u8], is_final: bool);
}

/// Writable image container.
pub trait DestinationBackend {
    /// Image handle accepted by [`add_image`](DestinationBackend::add_image).
    type Image;
    /// Source type images can be copied from.
    type Source: SourceBackend<Image = Self::Image>;

    /// Container type being written.
    fn type_identifier(&self) -> TypeIdentifier;

    /// Appends an image with per-image properties.
    fn add_image(&mut self, image: &Self::Image, properties: &RawMap);

    /// Appends the image at `index` of `source`, keeping its properties
    /// unless overridden by `properties`.
    fn add_image_from_source(&mut self, source: &Self::Source, index: usize, properties: &RawMap);

    /// Sets container-level properties.
    fn set_properties(&mut self, properties: &RawMap);

    /// Writes the container. Returns `false` on failure.
    fn finalize(&mut self) -> bool;
}
