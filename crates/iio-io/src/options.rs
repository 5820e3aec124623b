//! Source options and destination properties.
//!
//! Both are builder-style values that flatten into a [`RawMap`] before
//! being handed to the engine. Keys match the engine's option constants.
//!
//! # Example
//!
//! ```rust
//! use iio_io::{DestinationProperties, SourceOption, raw_options};
//! use iio_props::ExifProperties;
//!
//! let opts = raw_options(&[
//!     SourceOption::ThumbnailMaxPixelSize(256),
//!     SourceOption::CreateThumbnailFromImageAlways(true),
//! ]);
//! assert_eq!(opts.len(), 2);
//!
//! let props = DestinationProperties::new()
//!     .with_lossy_compression_quality(0.8)
//!     .with_image_properties(&ExifProperties { exposure_time: Some(0.01) });
//! assert!(props.to_raw().contains("{Exif}"));
//! ```

use crate::TypeIdentifier;
use iio_props::{ImageProperties, PropertyBlock, RawMap, RawRepr, RawValue, merge_blocks};

// === Engine option keys ===

/// Type identifier hint for a source.
pub const SOURCE_TYPE_IDENTIFIER_HINT: &str = "kCGImageSourceTypeIdentifierHint";
/// Allow floating point images.
pub const SOURCE_SHOULD_ALLOW_FLOAT: &str = "kCGImageSourceShouldAllowFloat";
/// Cache decoded images.
pub const SOURCE_SHOULD_CACHE: &str = "kCGImageSourceShouldCache";
/// Create a thumbnail from the full image if none is embedded.
pub const SOURCE_CREATE_THUMBNAIL_FROM_IMAGE_IF_ABSENT: &str =
    "kCGImageSourceCreateThumbnailFromImageIfAbsent";
/// Always create a thumbnail from the full image.
pub const SOURCE_CREATE_THUMBNAIL_FROM_IMAGE_ALWAYS: &str =
    "kCGImageSourceCreateThumbnailFromImageAlways";
/// Maximum thumbnail width and height.
pub const SOURCE_THUMBNAIL_MAX_PIXEL_SIZE: &str = "kCGImageSourceThumbnailMaxPixelSize";
/// Rotate and scale thumbnails per orientation and pixel aspect ratio.
pub const SOURCE_CREATE_THUMBNAIL_WITH_TRANSFORM: &str = "kCGImageSourceCreateThumbnailWithTransform";
/// Lossy compression quality, 0.0 (max compression) to 1.0 (lossless).
pub const DESTINATION_LOSSY_COMPRESSION_QUALITY: &str = "kCGImageDestinationLossyCompressionQuality";
/// Background color for images with alpha written to opaque formats.
pub const DESTINATION_BACKGROUND_COLOR: &str = "kCGImageDestinationBackgroundColor";

/// Value that flattens into one engine option entry.
pub trait RawOption {
    /// Returns `(key, value)` for the engine dictionary.
    fn raw_option(&self) -> (String, RawValue);
}

/// Flattens options into a dictionary; later entries win on key collision.
pub fn raw_options<'a, O: RawOption + 'a>(options: impl IntoIterator<Item = &'a O>) -> RawMap {
    options.into_iter().map(RawOption::raw_option).collect()
}

/// Option for creating a source or reading images from it.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceOption {
    /// Best guess of the container type.
    TypeIdentifierHint(TypeIdentifier),
    /// Return floating point images when the format supports them.
    ShouldAllowFloat(bool),
    /// Cache images in decoded form.
    ShouldCache(bool),
    /// Create a thumbnail from the full image if none is embedded.
    CreateThumbnailFromImageIfAbsent(bool),
    /// Always create a thumbnail from the full image.
    CreateThumbnailFromImageAlways(bool),
    /// Maximum thumbnail width and height in pixels.
    ThumbnailMaxPixelSize(u32),
    /// Rotate and scale thumbnails to the image orientation.
    CreateThumbnailWithTransform(bool),
}

impl RawOption for SourceOption {
    fn raw_option(&self) -> (String, RawValue) {
        let (key, value) = match self {
            SourceOption::TypeIdentifierHint(uti) => {
                (SOURCE_TYPE_IDENTIFIER_HINT, RawValue::Str(uti.to_string()))
            }
            SourceOption::ShouldAllowFloat(v) => (SOURCE_SHOULD_ALLOW_FLOAT, v.to_raw()),
            SourceOption::ShouldCache(v) => (SOURCE_SHOULD_CACHE, v.to_raw()),
            SourceOption::CreateThumbnailFromImageIfAbsent(v) => {
                (SOURCE_CREATE_THUMBNAIL_FROM_IMAGE_IF_ABSENT, v.to_raw())
            }
            SourceOption::CreateThumbnailFromImageAlways(v) => {
                (SOURCE_CREATE_THUMBNAIL_FROM_IMAGE_ALWAYS, v.to_raw())
            }
            SourceOption::ThumbnailMaxPixelSize(v) => (SOURCE_THUMBNAIL_MAX_PIXEL_SIZE, v.to_raw()),
            SourceOption::CreateThumbnailWithTransform(v) => {
                (SOURCE_CREATE_THUMBNAIL_WITH_TRANSFORM, v.to_raw())
            }
        };
        (key.to_string(), value)
    }
}

/// RGBA color with components in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red.
    pub r: f64,
    /// Green.
    pub g: f64,
    /// Blue.
    pub b: f64,
    /// Alpha.
    pub a: f64,
}

impl Color {
    /// Opaque color.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// Encoded as a four element list of doubles.
impl RawRepr for Color {
    fn to_raw(&self) -> RawValue {
        RawValue::List(vec![
            RawValue::Double(self.r),
            RawValue::Double(self.g),
            RawValue::Double(self.b),
            RawValue::Double(self.a),
        ])
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw.as_list()? {
            [r, g, b, a] => Some(Self {
                r: r.as_f64()?,
                g: g.as_f64()?,
                b: b.as_f64()?,
                a: a.as_f64()?,
            }),
            _ => None,
        }
    }
}

/// Single destination property entry.
#[derive(Debug, Clone, PartialEq)]
pub enum DestinationProperty {
    /// Compression quality, 0.0 to 1.0.
    LossyCompressionQuality(f64),
    /// Quality 0.0.
    MaximumCompression,
    /// Quality 1.0.
    Lossless,
    /// Background color used when flattening alpha.
    BackgroundColor(Color),
    /// Arbitrary engine property.
    ImageProperty {
        /// Engine key.
        key: String,
        /// Untyped value.
        value: RawValue,
    },
}

impl RawOption for DestinationProperty {
    fn raw_option(&self) -> (String, RawValue) {
        match self {
            DestinationProperty::LossyCompressionQuality(q) => {
                (DESTINATION_LOSSY_COMPRESSION_QUALITY.to_string(), q.to_raw())
            }
            DestinationProperty::MaximumCompression => {
                (DESTINATION_LOSSY_COMPRESSION_QUALITY.to_string(), RawValue::Double(0.0))
            }
            DestinationProperty::Lossless => {
                (DESTINATION_LOSSY_COMPRESSION_QUALITY.to_string(), RawValue::Double(1.0))
            }
            DestinationProperty::BackgroundColor(c) => {
                (DESTINATION_BACKGROUND_COLOR.to_string(), c.to_raw())
            }
            DestinationProperty::ImageProperty { key, value } => (key.clone(), value.clone()),
        }
    }
}

/// Properties for a destination container or for one added image.
///
/// Typed metadata records are attached as [`PropertyBlock`]s and merged
/// into the dictionary under their namespace keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DestinationProperties {
    /// Compression quality, 0.0 to 1.0.
    pub lossy_compression_quality: Option<f64>,
    /// Background color used when flattening alpha.
    pub background_color: Option<Color>,
    /// Encoded metadata records.
    pub image_properties: Vec<PropertyBlock>,
    /// Additional raw entries, applied first.
    pub extra: Vec<DestinationProperty>,
}

impl DestinationProperties {
    /// Empty properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the compression quality.
    pub fn with_lossy_compression_quality(mut self, quality: f64) -> Self {
        self.lossy_compression_quality = Some(quality);
        self
    }

    /// Sets the background color.
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Attaches a metadata record.
    pub fn with_image_properties<P: ImageProperties>(mut self, record: &P) -> Self {
        self.image_properties.push(record.to_block());
        self
    }

    /// Adds a raw entry.
    pub fn with_property(mut self, property: DestinationProperty) -> Self {
        self.extra.push(property);
        self
    }

    /// Flattens into the engine dictionary.
    ///
    /// Order of application: `extra`, then the typed fields, then metadata
    /// records; later writes win on key collision.
    pub fn to_raw(&self) -> RawMap {
        let mut raw = raw_options(&self.extra);
        if let Some(q) = self.lossy_compression_quality {
            raw.set(DESTINATION_LOSSY_COMPRESSION_QUALITY, q);
        }
        if let Some(c) = &self.background_color {
            raw.set(DESTINATION_BACKGROUND_COLOR, c.to_raw());
        }
        merge_blocks(&self.image_properties, &mut raw);
        raw
    }
}
