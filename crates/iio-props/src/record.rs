//! Property records and their marshalling.
//!
//! An [`ImageProperties`] type is a fixed schema of optional fields that
//! all live under one namespace key of the outer dictionary. Encoding
//! emits only present fields; decoding starts from the all-absent default
//! and assigns every field it recognizes, ignoring the rest.
//!
//! [`PropertyBlock`] is the type-erased form of an encoded record, used
//! when a heterogeneous list of records is attached to an image at once.

use crate::RawMap;

/// Typed metadata record stored under one namespace key.
///
/// # Contract
///
/// - [`to_raw`](ImageProperties::to_raw) never emits an absent field. A
///   record with nothing set encodes to an empty dictionary, not to a
///   missing namespace.
/// - [`from_raw`](ImageProperties::from_raw) never fails. Unknown keys are
///   ignored and malformed values leave their field absent.
///
/// # Example
///
/// ```rust
/// use iio_props::{ExifProperties, ImageProperties};
///
/// let exif = ExifProperties { exposure_time: Some(10.0) };
/// let raw = exif.to_raw();
///
/// assert_eq!(ExifProperties::from_raw(&raw), exif);
/// assert_eq!(ExifProperties::NAMESPACE, "{Exif}");
/// ```
pub trait ImageProperties: Default {
    /// Namespace key of this record in the outer dictionary.
    const NAMESPACE: &'static str;

    /// Encodes every present field.
    fn to_raw(&self) -> RawMap;

    /// Decodes a record from its inner dictionary.
    fn from_raw(values: &RawMap) -> Self;

    /// Encodes the record together with its namespace key.
    fn to_block(&self) -> PropertyBlock {
        PropertyBlock {
            namespace: Self::NAMESPACE,
            values: self.to_raw(),
        }
    }
}

/// Encoded record paired with its namespace key.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyBlock {
    /// Namespace key in the outer dictionary.
    pub namespace: &'static str,
    /// Encoded inner dictionary.
    pub values: RawMap,
}

impl PropertyBlock {
    /// Encodes `record`.
    pub fn new<P: ImageProperties>(record: &P) -> Self {
        record.to_block()
    }

    /// Inserts this block into `outer`, replacing any previous entry.
    pub fn merge_into(&self, outer: &mut RawMap) {
        outer.set(self.namespace, self.values.clone());
    }
}

/// Merges blocks into `outer` in order; a later block with the same
/// namespace replaces an earlier one.
pub fn merge_blocks<'a>(blocks: impl IntoIterator<Item = &'a PropertyBlock>, outer: &mut RawMap) {
    for block in blocks {
        block.merge_into(outer);
    }
}
