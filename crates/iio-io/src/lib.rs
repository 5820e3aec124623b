//! # iio-io
//!
//! Typed wrappers around an image I/O engine.
//!
//! The engine reads and writes image containers and exchanges metadata as
//! untyped dictionaries. This crate wraps its sources and destinations so
//! that options are typed values and metadata comes back as an
//! [`iio_props::PropertiesContainer`]:
//!
//! - [`ImageSource`] / [`IncrementalImageSource`] - read images, thumbnails, properties
//! - [`ImageDestination`] - add images with properties, finalize
//! - [`make_gif`] - assemble an animated GIF from frames
//! - [`TypeIdentifier`] - container type identifiers
//!
//! # Architecture
//!
//! Wrappers are generic over a backend (see [`backend`]). The native engine
//! implements [`SourceBackend`] and [`DestinationBackend`]; the `memory`
//! feature provides an in-process reference backend storing containers as
//! JSON.
//!
//! # Quick Start
//!
//! ```rust
//! use iio_io::{DestinationProperties, ImageDestination, ImageSource, MemoryDestination,
//!     MemoryImage, TypeIdentifier};
//! use iio_props::{GpsProperties, LatitudeRef};
//!
//! let gps = GpsProperties { latitude_ref: Some(LatitudeRef::North), ..Default::default() };
//! let mut dest = ImageDestination::new(MemoryDestination::new(TypeIdentifier::JPEG));
//! dest.add_image(
//!     &MemoryImage::filled(8, 8, [0, 0, 0, 255]),
//!     &DestinationProperties::new().with_image_properties(&gps),
//! )?;
//! dest.finalize()?;
//!
//! let source = ImageSource::from_bytes(dest.backend().bytes())?;
//! let read = source.properties_for_image(0, &[]).and_then(|c| c.get::<GpsProperties>());
//! assert_eq!(read, Some(gps));
//! # Ok::<(), iio_io::IoError>(())
//! ```
//!
//! # Feature Flags
//!
//! - `memory` - Reference backend (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backend;
mod destination;
mod error;
mod gif_maker;
pub mod options;
mod source;
mod uti;

#[cfg(feature = "memory")]
pub mod memory;

pub use backend::{DestinationBackend, IncrementalBackend, SourceBackend, SourceStatus, TypeRegistry};
pub use destination::ImageDestination;
pub use error::{IoError, IoResult};
pub use gif_maker::{MakeGifError, make_gif};
pub use options::{Color, DestinationProperties, DestinationProperty, RawOption, SourceOption, raw_options};
pub use source::{ImageSource, IncrementalImageSource};
pub use uti::TypeIdentifier;

#[cfg(feature = "memory")]
pub use memory::{MemoryCodec, MemoryContainer, MemoryDestination, MemoryFrame, MemoryImage, MemorySource};
