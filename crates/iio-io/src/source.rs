//! Image sources.
//!
//! [`ImageSource`] reads images, thumbnails and metadata from a
//! [`SourceBackend`]. Options are passed as typed [`SourceOption`] lists;
//! metadata comes back as a [`PropertiesContainer`] ready for typed access.
//!
//! # Example
//!
//! ```rust
//! use iio_io::{ImageSource, MemoryDestination, MemoryImage, ImageDestination, TypeIdentifier};
//! use iio_io::DestinationProperties;
//! use iio_props::ExifProperties;
//!
//! let mut dest = ImageDestination::new(MemoryDestination::new(TypeIdentifier::PNG));
//! let props = DestinationProperties::new()
//!     .with_image_properties(&ExifProperties { exposure_time: Some(0.5) });
//! dest.add_image(&MemoryImage::filled(2, 2, [0, 0, 0, 255]), &props).unwrap();
//! dest.finalize().unwrap();
//!
//! let bytes = dest.into_backend().into_bytes();
//! let source = ImageSource::from_bytes(&bytes).unwrap();
//! let exif = source
//!     .properties_for_image(0, &[])
//!     .and_then(|c| c.get::<ExifProperties>())
//!     .unwrap();
//! assert_eq!(exif.exposure_time, Some(0.5));
//! ```

use crate::backend::{IncrementalBackend, SourceBackend, SourceStatus, TypeRegistry};
use crate::options::{SourceOption, raw_options};
use crate::TypeIdentifier;
use iio_props::PropertiesContainer;
use std::ops::Deref;

/// Reader over an image container.
#[derive(Debug)]
pub struct ImageSource<B> {
    backend: B,
}

impl<B: SourceBackend> ImageSource<B> {
    /// Wraps an opened backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Returns the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Consumes the wrapper.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Container type, once known.
    pub fn type_identifier(&self) -> Option<TypeIdentifier> {
        self.backend.type_identifier()
    }

    /// Number of images, not counting thumbnails.
    pub fn image_count(&self) -> usize {
        self.backend.image_count()
    }

    /// Status of the whole container.
    pub fn status(&self) -> SourceStatus {
        self.backend.status()
    }

    /// Status of the image at `index`.
    pub fn status_at(&self, index: usize) -> SourceStatus {
        self.backend.status_at(index)
    }

    /// Decodes the image at `index`.
    pub fn create_image(&self, index: usize, options: &[SourceOption]) -> Option<B::Image> {
        self.backend.create_image(index, &raw_options(options))
    }

    /// Returns a thumbnail for the image at `index`.
    pub fn create_thumbnail(&self, index: usize, options: &[SourceOption]) -> Option<B::Image> {
        self.backend.create_thumbnail(index, &raw_options(options))
    }

    /// Thumbnail of the first image, at most `size` pixels wide and high,
    /// always generated from the full image.
    pub fn create_thumbnail_sized(&self, size: u32) -> Option<B::Image> {
        self.create_thumbnail(
            0,
            &[
                SourceOption::ThumbnailMaxPixelSize(size),
                SourceOption::CreateThumbnailFromImageAlways(true),
            ],
        )
    }

    /// Container-level properties.
    pub fn properties(&self, options: &[SourceOption]) -> Option<PropertiesContainer> {
        self.backend
            .properties(&raw_options(options))
            .map(PropertiesContainer::new)
    }

    /// Properties of the image at `index`.
    pub fn properties_for_image(
        &self,
        index: usize,
        options: &[SourceOption],
    ) -> Option<PropertiesContainer> {
        self.backend
            .properties_at(index, &raw_options(options))
            .map(PropertiesContainer::new)
    }

    /// Type identifiers `registry` can read.
    pub fn supported_types<R: TypeRegistry>(registry: &R) -> Vec<TypeIdentifier> {
        registry.source_types()
    }

    /// Whether `registry` can read `uti`.
    pub fn supports_type<R: TypeRegistry>(registry: &R, uti: impl AsRef<str>) -> bool {
        let uti = uti.as_ref();
        registry.source_types().iter().any(|t| t.as_str() == uti)
    }
}

/// Source fed with data as it arrives.
///
/// Dereferences to [`ImageSource`] for all reads.
#[derive(Debug)]
pub struct IncrementalImageSource<B> {
    inner: ImageSource<B>,
}

impl<B: IncrementalBackend> IncrementalImageSource<B> {
    /// Wraps an empty incremental backend.
    pub fn new(backend: B) -> Self {
        Self {
            inner: ImageSource::new(backend),
        }
    }

    /// Replaces the accumulated data with `data`; see
    /// [`IncrementalBackend::update`].
    pub fn update(&mut self, data: &[u8], is_final: bool) {
        tracing::trace!(len = data.len(), is_final, "incremental update");
        self.inner.backend.update(data, is_final);
    }

    /// Consumes the wrapper into a plain source.
    pub fn into_source(self) -> ImageSource<B> {
        self.inner
    }
}

impl<B> Deref for IncrementalImageSource<B> {
    type Target = ImageSource<B>;

    fn deref(&self) -> &ImageSource<B> {
        &self.inner
    }
}
