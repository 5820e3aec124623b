//! # iio-props
//!
//! Typed image metadata over untyped property dictionaries.
//!
//! Image I/O engines expose metadata as nested dictionaries of loosely
//! typed values: an outer dictionary keyed by namespace (`{Exif}`, `{GPS}`,
//! `{GIF}`), each holding an inner dictionary keyed by field name. This
//! crate maps those dictionaries to strongly typed records and back.
//!
//! # Architecture
//!
//! - [`RawValue`] / [`RawMap`] - the untyped values and dictionaries
//! - [`RawRepr`] - per-type conversion to and from a [`RawValue`]
//! - [`Property`] - a typed key into an inner dictionary
//! - [`ImageProperties`] - a record stored under one namespace
//! - [`PropertiesContainer`] - typed get / add / mutate over an outer dictionary
//!
//! # Failure model
//!
//! Nothing here returns an error. A missing namespace, a missing field and
//! a field of the wrong shape all surface as `None`; a record with one
//! malformed field still decodes every other field.
//!
//! # Quick Start
//!
//! ```rust
//! use iio_props::{ExifProperties, PropertiesContainer, RawMap};
//!
//! let mut container = PropertiesContainer::new(RawMap::new());
//! container.add(&ExifProperties { exposure_time: Some(10.0) });
//!
//! // Hand `container.into_raw()` to the engine, or read it back:
//! let exif = container.get::<ExifProperties>().unwrap();
//! assert_eq!(exif.exposure_time, Some(10.0));
//! ```
//!
//! # Feature Flags
//!
//! - `serde` - Serialize / deserialize [`RawValue`] and [`RawMap`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod container;
pub mod convert;
mod dict;
mod exif;
mod field;
mod gif;
pub mod gps;
#[allow(missing_docs)]
pub mod keys;
mod record;
mod value;

pub use container::PropertiesContainer;
pub use convert::{IntEnum, RawRepr, StrEnum};
pub use dict::RawMap;
pub use exif::ExifProperties;
pub use field::Property;
pub use gif::{GifFrameProperties, GifProperties};
pub use gps::{
    AltitudeRef, Differential, Direction, DistanceRef, GpsProperties, LatitudeRef, LongitudeRef,
    MeasureMode, SpeedRef, Status,
};
pub use record::{ImageProperties, PropertyBlock, merge_blocks};
pub use value::RawValue;
