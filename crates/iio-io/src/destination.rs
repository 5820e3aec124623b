//! Image destinations.
//!
//! [`ImageDestination`] collects images and properties and writes the
//! container once, on [`finalize`](ImageDestination::finalize). After
//! that every mutating call fails with [`IoError::AlreadyFinalized`].

use crate::backend::{DestinationBackend, TypeRegistry};
use crate::options::DestinationProperties;
use crate::source::ImageSource;
use crate::{IoError, IoResult, TypeIdentifier};

/// Writer for an image container.
#[derive(Debug)]
pub struct ImageDestination<B> {
    backend: B,
    finalized: bool,
}

impl<B: DestinationBackend> ImageDestination<B> {
    /// Wraps a created backend.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            finalized: false,
        }
    }

    /// Returns the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Consumes the wrapper.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Container type being written.
    pub fn type_identifier(&self) -> TypeIdentifier {
        self.backend.type_identifier()
    }

    /// Whether [`finalize`](Self::finalize) has been called.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Appends an image.
    pub fn add_image(&mut self, image: &B::Image, properties: &DestinationProperties) -> IoResult<()> {
        self.ensure_open()?;
        self.backend.add_image(image, &properties.to_raw());
        Ok(())
    }

    /// Appends image `index` of `source`.
    ///
    /// # Errors
    ///
    /// [`IoError::IndexOutOfRange`] if `source` has no such image.
    pub fn add_image_from_source(
        &mut self,
        source: &ImageSource<B::Source>,
        index: usize,
        properties: &DestinationProperties,
    ) -> IoResult<()> {
        self.ensure_open()?;
        let count = source.image_count();
        if index >= count {
            return Err(IoError::IndexOutOfRange { index, count });
        }
        self.backend
            .add_image_from_source(source.backend(), index, &properties.to_raw());
        Ok(())
    }

    /// Sets container-level properties. A second call replaces the first.
    pub fn set_properties(&mut self, properties: &DestinationProperties) -> IoResult<()> {
        self.ensure_open()?;
        self.backend.set_properties(&properties.to_raw());
        Ok(())
    }

    /// Writes the container.
    ///
    /// The destination is closed afterwards whether or not the write
    /// succeeded.
    pub fn finalize(&mut self) -> IoResult<()> {
        self.ensure_open()?;
        self.finalized = true;
        if self.backend.finalize() {
            tracing::debug!("destination finalized");
            Ok(())
        } else {
            tracing::debug!("destination finalize failed");
            Err(IoError::FinalizeFailed)
        }
    }

    /// Type identifiers `registry` can write.
    pub fn supported_types<R: TypeRegistry>(registry: &R) -> Vec<TypeIdentifier> {
        registry.destination_types()
    }

    /// Whether `registry` can write `uti`.
    pub fn supports_type<R: TypeRegistry>(registry: &R, uti: impl AsRef<str>) -> bool {
        let uti = uti.as_ref();
        registry.destination_types().iter().any(|t| t.as_str() == uti)
    }

    fn ensure_open(&self) -> IoResult<()> {
        if self.finalized {
            Err(IoError::AlreadyFinalized)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{SourceBackend, SourceStatus};
    use iio_props::RawMap;

    struct NullSource;

    impl SourceBackend for NullSource {
        type Image = ();

        fn type_identifier(&self) -> Option<TypeIdentifier> {
            None
        }
        fn image_count(&self) -> usize {
            1
        }
        fn status(&self) -> SourceStatus {
            SourceStatus::Complete
        }
        fn status_at(&self, _index: usize) -> SourceStatus {
            SourceStatus::Complete
        }
        fn create_image(&self, _index: usize, _options: &RawMap) -> Option<()> {
            Some(())
        }
        fn create_thumbnail(&self, _index: usize, _options: &RawMap) -> Option<()> {
            None
        }
        fn properties(&self, _options: &RawMap) -> Option<RawMap> {
            None
        }
        fn properties_at(&self, _index: usize, _options: &RawMap) -> Option<RawMap> {
            None
        }
    }

    #[derive(Default)]
    struct Counting {
        added: usize,
        succeed: bool,
    }

    impl DestinationBackend for Counting {
        type Image = ();
        type Source = NullSource;

        fn type_identifier(&self) -> TypeIdentifier {
            TypeIdentifier::TIFF
        }

        fn add_image(&mut self, _image: &(), _properties: &RawMap) {
            self.added += 1;
        }
        fn add_image_from_source(&mut self, _source: &NullSource, _index: usize, _properties: &RawMap) {
            self.added += 1;
        }
        fn set_properties(&mut self, _properties: &RawMap) {}
        fn finalize(&mut self) -> bool {
            self.succeed
        }
    }

    #[test]
    fn test_finalize_once() {
        let mut dest = ImageDestination::new(Counting {
            succeed: true,
            ..Default::default()
        });
        dest.add_image(&(), &DestinationProperties::new()).unwrap();
        dest.finalize().unwrap();
        assert!(dest.is_finalized());
        assert!(matches!(dest.finalize(), Err(IoError::AlreadyFinalized)));
        assert!(matches!(
            dest.add_image(&(), &DestinationProperties::new()),
            Err(IoError::AlreadyFinalized)
        ));
        assert_eq!(dest.backend().added, 1);
    }

    #[test]
    fn test_finalize_failure() {
        let mut dest = ImageDestination::new(Counting::default());
        assert!(matches!(dest.finalize(), Err(IoError::FinalizeFailed)));
    }

    #[test]
    fn test_source_index_checked() {
        let mut dest = ImageDestination::new(Counting::default());
        let source = ImageSource::new(NullSource);
        let props = DestinationProperties::new();
        dest.add_image_from_source(&source, 0, &props).unwrap();
        let err = dest.add_image_from_source(&source, 1, &props).unwrap_err();
        assert!(matches!(err, IoError::IndexOutOfRange { index: 1, count: 1 }));
    }
}
