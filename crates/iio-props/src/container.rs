//! Namespace-level access to an outer property dictionary.
//!
//! [`PropertiesContainer`] wraps the dictionary the engine returns for one
//! image (or for the whole container) and hands out typed records by
//! namespace. It owns nothing but that dictionary and lives for one
//! read/modify/write cycle.
//!
//! # Example
//!
//! ```rust
//! use iio_props::{GpsProperties, LatitudeRef, PropertiesContainer, RawMap};
//!
//! let mut gps = GpsProperties::default();
//! gps.latitude_ref = Some(LatitudeRef::North);
//!
//! let mut container = PropertiesContainer::new(RawMap::new());
//! container.add(&gps);
//!
//! container.mutate(|gps: &mut Option<GpsProperties>| {
//!     if let Some(gps) = gps {
//!         gps.latitude_ref = Some(LatitudeRef::South);
//!     }
//! });
//!
//! let gps = container.get::<GpsProperties>().unwrap();
//! assert_eq!(gps.latitude_ref, Some(LatitudeRef::South));
//! ```

use crate::{ImageProperties, RawMap, RawValue};

/// Typed view over an outer `namespace -> dictionary` mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertiesContainer {
    raw: RawMap,
}

impl PropertiesContainer {
    /// Wraps an outer dictionary.
    pub fn new(raw: RawMap) -> Self {
        Self { raw }
    }

    /// Borrows the outer dictionary.
    #[inline]
    pub fn as_raw(&self) -> &RawMap {
        &self.raw
    }

    /// Returns the outer dictionary for hand-off to the engine.
    #[inline]
    pub fn into_raw(self) -> RawMap {
        self.raw
    }

    /// Decodes the record stored under `P::NAMESPACE`.
    ///
    /// Returns `None` when the namespace is missing. A namespace mapped to
    /// an empty dictionary yields a record with every field absent. An
    /// entry that is not a dictionary at all is treated as missing.
    pub fn get<P: ImageProperties>(&self) -> Option<P> {
        match self.raw.get(P::NAMESPACE)? {
            RawValue::Map(values) => Some(P::from_raw(values)),
            other => {
                tracing::warn!(
                    namespace = P::NAMESPACE,
                    found = other.type_name(),
                    "namespace entry is not a dictionary"
                );
                None
            }
        }
    }

    /// Encodes `record` under its namespace, replacing any existing entry.
    pub fn add<P: ImageProperties>(&mut self, record: &P) {
        self.raw.set(P::NAMESPACE, record.to_raw());
    }

    /// Read-modify-write of one record.
    ///
    /// The block receives the current record, or `None` if the namespace is
    /// missing, and may edit, create or clear it. If the value is present
    /// afterwards it is written back. Clearing it does not delete an existing
    /// namespace entry; use [`remove`](Self::remove) for that.
    pub fn mutate<P: ImageProperties>(&mut self, block: impl FnOnce(&mut Option<P>)) {
        let mut record = self.get::<P>();
        block(&mut record);

        if let Some(record) = record {
            self.add(&record);
        }
    }

    /// Checks whether `P::NAMESPACE` is present.
    #[inline]
    pub fn contains<P: ImageProperties>(&self) -> bool {
        self.raw.contains(P::NAMESPACE)
    }

    /// Deletes the namespace entry of `P`, returning the decoded record.
    pub fn remove<P: ImageProperties>(&mut self) -> Option<P> {
        let record = self.get::<P>();
        self.raw.remove(P::NAMESPACE);
        record
    }

    /// Namespace keys present in the outer dictionary.
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.raw.keys()
    }
}

impl From<RawMap> for PropertiesContainer {
    fn from(raw: RawMap) -> Self {
        Self::new(raw)
    }
}

impl From<PropertiesContainer> for RawMap {
    fn from(container: PropertiesContainer) -> Self {
        container.raw
    }
}
