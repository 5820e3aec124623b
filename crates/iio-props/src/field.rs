//! Property field descriptors.
//!
//! A [`Property`] couples one external dictionary key with the Rust type
//! stored under it. Records declare one `const` descriptor per field and
//! use it to read their `Option<T>` slot from an inner dictionary and to
//! write it back.
//!
//! ```rust
//! use iio_props::{Property, RawMap};
//!
//! const LOOP_COUNT: Property<i64> = Property::new("LoopCount");
//!
//! let mut raw = RawMap::new();
//! LOOP_COUNT.write(&Some(3), &mut raw);
//! assert_eq!(LOOP_COUNT.read(&raw), Some(3));
//!
//! // Absent values are never written
//! let mut empty = RawMap::new();
//! LOOP_COUNT.write(&None, &mut empty);
//! assert!(empty.is_empty());
//! ```

use crate::{RawMap, RawRepr, RawValue};
use std::marker::PhantomData;

/// Typed key into an inner property dictionary.
pub struct Property<T> {
    key: &'static str,
    _ty: PhantomData<fn() -> T>,
}

impl<T> Property<T> {
    /// Creates a descriptor for `key`.
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            _ty: PhantomData,
        }
    }

    /// External dictionary key.
    #[inline]
    pub const fn key(&self) -> &'static str {
        self.key
    }
}

impl<T: RawRepr> Property<T> {
    /// Assigns the slot from `values`.
    ///
    /// A missing key is a no-op. A value of the wrong shape is skipped and
    /// the slot keeps whatever it held before; partial metadata beats no
    /// metadata.
    pub fn assign(&self, slot: &mut Option<T>, values: &RawMap) {
        let Some(raw) = values.get(self.key) else {
            return;
        };
        match T::from_raw(raw) {
            Some(value) => *slot = Some(value),
            None => tracing::trace!(
                key = self.key,
                found = raw.type_name(),
                "skipping property with unexpected value"
            ),
        }
    }

    /// Returns `(key, encoded value)`, or `None` if the value is absent.
    pub fn emit(&self, value: &Option<T>) -> Option<(&'static str, RawValue)> {
        value.as_ref().map(|v| (self.key, v.to_raw()))
    }

    /// Decodes the field from `values`.
    pub fn read(&self, values: &RawMap) -> Option<T> {
        let mut slot = None;
        self.assign(&mut slot, values);
        slot
    }

    /// Encodes the field into `values` if present.
    pub fn write(&self, value: &Option<T>, values: &mut RawMap) {
        if let Some((key, raw)) = self.emit(value) {
            values.set(key, raw);
        }
    }
}

impl<T> Clone for Property<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Property<T> {}

impl<T> std::fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Property")
            .field("key", &self.key)
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}
