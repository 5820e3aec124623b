//! In-process reference backend.
//!
//! Stands in for a native image I/O engine: containers are JSON documents
//! holding raw RGBA frames and their property dictionaries. There is no
//! pixel codec; the backend exists so the wrappers, metadata round trips
//! and GIF assembly can run anywhere.
//!
//! # Container layout
//!
//! ```text
//! IIOM1\n{"type_identifier":"public.png","properties":{...},"frames":[...]}
//! ```
//!
//! The magic line lets an incremental source tell "not ours" apart from
//! "not there yet".

use crate::backend::{DestinationBackend, IncrementalBackend, SourceBackend, SourceStatus, TypeRegistry};
use crate::options::{
    SOURCE_CREATE_THUMBNAIL_FROM_IMAGE_ALWAYS, SOURCE_CREATE_THUMBNAIL_FROM_IMAGE_IF_ABSENT,
    SOURCE_THUMBNAIL_MAX_PIXEL_SIZE,
};
use crate::source::{ImageSource, IncrementalImageSource};
use crate::{IoError, IoResult, TypeIdentifier};
use iio_props::RawMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Header line of every memory container.
pub const MAGIC: &[u8] = b"IIOM1\n";

// === Images ===

/// Uncompressed RGBA8 image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 samples.
    pub pixels: Vec<u8>,
}

impl MemoryImage {
    /// Creates an image from raw samples.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self { width, height, pixels }
    }

    /// Creates an image filled with one color.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let count = width as usize * height as usize;
        let pixels = rgba.iter().copied().cycle().take(count * 4).collect();
        Self { width, height, pixels }
    }

    /// Nearest-neighbor downscale so neither side exceeds `max`.
    ///
    /// Returns a copy when the image already fits or `max` is zero.
    pub fn fit_within(&self, max: u32) -> MemoryImage {
        let longest = self.width.max(self.height);
        if max == 0 || longest <= max {
            return self.clone();
        }

        let scale = |side: u32| ((side as u64 * max as u64) / longest as u64).max(1) as u32;
        let (w, h) = (scale(self.width), scale(self.height));

        let mut pixels = Vec::with_capacity(w as usize * h as usize * 4);
        for y in 0..h {
            let sy = (y as u64 * self.height as u64 / h as u64) as usize;
            for x in 0..w {
                let sx = (x as u64 * self.width as u64 / w as u64) as usize;
                let at = (sy * self.width as usize + sx) * 4;
                match self.pixels.get(at..at + 4) {
                    Some(px) => pixels.extend_from_slice(px),
                    None => pixels.extend_from_slice(&[0; 4]),
                }
            }
        }
        MemoryImage::new(w, h, pixels)
    }
}

/// One stored image with its property dictionary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryFrame {
    /// Pixels.
    pub image: MemoryImage,
    /// Per-image properties.
    pub properties: RawMap,
}

/// Serialized container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryContainer {
    /// Container type identifier.
    pub type_identifier: String,
    /// Container-level properties.
    pub properties: RawMap,
    /// Stored images.
    pub frames: Vec<MemoryFrame>,
}

impl MemoryContainer {
    /// Empty container of type `uti`.
    pub fn new(uti: &TypeIdentifier) -> Self {
        Self {
            type_identifier: uti.to_string(),
            properties: RawMap::new(),
            frames: Vec::new(),
        }
    }

    /// Serializes with the magic header.
    pub fn to_bytes(&self) -> IoResult<Vec<u8>> {
        let mut out = MAGIC.to_vec();
        serde_json::to_writer(&mut out, self)?;
        Ok(out)
    }

    /// Parses a complete container.
    pub fn from_bytes(data: &[u8]) -> IoResult<Self> {
        let body = data
            .strip_prefix(MAGIC)
            .ok_or_else(|| IoError::InvalidData("missing memory container header".into()))?;
        Ok(serde_json::from_slice(body)?)
    }
}

/// Classifies a possibly partial container.
fn classify(data: &[u8], is_final: bool) -> Result<MemoryContainer, SourceStatus> {
    if data.len() < MAGIC.len() && MAGIC.starts_with(data) {
        return Err(if is_final {
            SourceStatus::UnexpectedEof
        } else {
            SourceStatus::ReadingHeader
        });
    }
    let Some(body) = data.strip_prefix(MAGIC) else {
        return Err(SourceStatus::UnknownType);
    };
    serde_json::from_slice(body).map_err(|e| match (e.is_eof(), is_final) {
        (true, false) => SourceStatus::Incomplete,
        (true, true) => SourceStatus::UnexpectedEof,
        (false, _) => SourceStatus::InvalidData,
    })
}

// === Registry ===

/// Type registry of the memory backend.
///
/// Any identifier can be stored; the registry only limits what
/// [`open_source`](MemoryCodec::open_source) and
/// [`create_destination`](MemoryCodec::create_destination) accept.
#[derive(Debug, Clone)]
pub struct MemoryCodec {
    source_types: Vec<TypeIdentifier>,
    destination_types: Vec<TypeIdentifier>,
}

impl Default for MemoryCodec {
    fn default() -> Self {
        let all = vec![
            TypeIdentifier::PNG,
            TypeIdentifier::JPEG,
            TypeIdentifier::GIF,
            TypeIdentifier::TIFF,
            TypeIdentifier::HEIC,
        ];
        Self {
            source_types: all.clone(),
            destination_types: all,
        }
    }
}

impl MemoryCodec {
    /// Registry with explicit type lists.
    pub fn new(source_types: Vec<TypeIdentifier>, destination_types: Vec<TypeIdentifier>) -> Self {
        Self {
            source_types,
            destination_types,
        }
    }

    /// Opens a source, rejecting container types this registry can't read.
    pub fn open_source(&self, data: &[u8]) -> IoResult<MemorySource> {
        let source = MemorySource::from_bytes(data)?;
        match source.type_identifier() {
            Some(uti) if self.source_types.contains(&uti) => Ok(source),
            Some(uti) => Err(IoError::UnsupportedType(uti.to_string())),
            None => Err(IoError::InvalidData("container has no type".into())),
        }
    }

    /// Creates an in-memory destination for `uti`.
    pub fn create_destination(&self, uti: impl Into<TypeIdentifier>) -> IoResult<MemoryDestination> {
        let uti = uti.into();
        if !self.destination_types.contains(&uti) {
            return Err(IoError::UnsupportedType(uti.to_string()));
        }
        Ok(MemoryDestination::new(uti))
    }
}

impl TypeRegistry for MemoryCodec {
    fn source_types(&self) -> Vec<TypeIdentifier> {
        self.source_types.clone()
    }

    fn destination_types(&self) -> Vec<TypeIdentifier> {
        self.destination_types.clone()
    }
}

// === Source ===

/// Source over a memory container.
#[derive(Debug, Clone)]
pub struct MemorySource {
    data: Vec<u8>,
    container: Option<MemoryContainer>,
    status: SourceStatus,
}

impl MemorySource {
    /// Opens a complete container.
    pub fn from_bytes(data: &[u8]) -> IoResult<Self> {
        let container = MemoryContainer::from_bytes(data)?;
        tracing::debug!(
            uti = %container.type_identifier,
            frames = container.frames.len(),
            "opened memory source"
        );
        Ok(Self {
            data: data.to_vec(),
            container: Some(container),
            status: SourceStatus::Complete,
        })
    }

    /// Reads and opens a container file.
    pub fn open<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "opening memory source");
        Self::from_bytes(&fs::read(path)?)
    }

    /// Empty source for [`IncrementalBackend::update`].
    pub fn incremental() -> Self {
        Self {
            data: Vec::new(),
            container: None,
            status: SourceStatus::ReadingHeader,
        }
    }

    /// Bytes received so far.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn frame(&self, index: usize) -> Option<&MemoryFrame> {
        self.container.as_ref()?.frames.get(index)
    }
}

fn option_flag(options: &RawMap, key: &str) -> bool {
    options.get(key).and_then(|v| v.as_bool()).unwrap_or(false)
}

impl SourceBackend for MemorySource {
    type Image = MemoryImage;

    fn type_identifier(&self) -> Option<TypeIdentifier> {
        self.container
            .as_ref()
            .map(|c| TypeIdentifier::from(c.type_identifier.as_str()))
    }

    fn image_count(&self) -> usize {
        self.container.as_ref().map_or(0, |c| c.frames.len())
    }

    fn status(&self) -> SourceStatus {
        self.status
    }

    fn status_at(&self, index: usize) -> SourceStatus {
        match &self.container {
            Some(c) if index < c.frames.len() => SourceStatus::Complete,
            Some(_) => SourceStatus::InvalidData,
            None => self.status,
        }
    }

    fn create_image(&self, index: usize, _options: &RawMap) -> Option<MemoryImage> {
        self.frame(index).map(|f| f.image.clone())
    }

    /// Containers hold no embedded thumbnails, so one is produced only when
    /// a create-thumbnail option is set.
    fn create_thumbnail(&self, index: usize, options: &RawMap) -> Option<MemoryImage> {
        let create = option_flag(options, SOURCE_CREATE_THUMBNAIL_FROM_IMAGE_ALWAYS)
            || option_flag(options, SOURCE_CREATE_THUMBNAIL_FROM_IMAGE_IF_ABSENT);
        if !create {
            return None;
        }
        let image = &self.frame(index)?.image;
        let max = options
            .get(SOURCE_THUMBNAIL_MAX_PIXEL_SIZE)
            .and_then(|v| v.as_i64())
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(0);
        Some(image.fit_within(max))
    }

    fn properties(&self, _options: &RawMap) -> Option<RawMap> {
        self.container.as_ref().map(|c| c.properties.clone())
    }

    fn properties_at(&self, index: usize, _options: &RawMap) -> Option<RawMap> {
        self.frame(index).map(|f| f.properties.clone())
    }
}

impl IncrementalBackend for MemorySource {
    fn update(&mut self, data: &[u8], is_final: bool) {
        self.data = data.to_vec();
        match classify(&self.data, is_final) {
            Ok(container) => {
                self.container = Some(container);
                self.status = SourceStatus::Complete;
            }
            Err(status) => {
                self.container = None;
                self.status = status;
            }
        }
        tracing::trace!(status = ?self.status, len = self.data.len(), "memory source updated");
    }
}

impl ImageSource<MemorySource> {
    /// Opens a complete memory container.
    pub fn from_bytes(data: &[u8]) -> IoResult<Self> {
        MemorySource::from_bytes(data).map(ImageSource::new)
    }

    /// Opens a memory container file.
    pub fn open<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        MemorySource::open(path).map(ImageSource::new)
    }
}

impl IncrementalImageSource<MemorySource> {
    /// Empty incremental memory source.
    pub fn memory() -> Self {
        IncrementalImageSource::new(MemorySource::incremental())
    }
}

// === Destination ===

#[derive(Debug, Clone)]
enum Target {
    Buffer,
    Path(PathBuf),
}

/// Destination writing a memory container to a buffer or a file.
#[derive(Debug, Clone)]
pub struct MemoryDestination {
    container: MemoryContainer,
    image_count: Option<usize>,
    target: Target,
    bytes: Vec<u8>,
}

impl MemoryDestination {
    /// Destination that writes into an in-memory buffer.
    pub fn new(uti: impl Into<TypeIdentifier>) -> Self {
        Self {
            container: MemoryContainer::new(&uti.into()),
            image_count: None,
            target: Target::Buffer,
            bytes: Vec::new(),
        }
    }

    /// Destination that writes `path` at finalize.
    pub fn to_path<P: Into<PathBuf>>(path: P, uti: impl Into<TypeIdentifier>) -> Self {
        Self {
            target: Target::Path(path.into()),
            ..Self::new(uti)
        }
    }

    /// Requires exactly `count` images at finalize.
    pub fn with_image_count(mut self, count: usize) -> Self {
        self.image_count = Some(count);
        self
    }

    /// Container as assembled so far.
    pub fn container(&self) -> &MemoryContainer {
        &self.container
    }

    /// Serialized container; empty before a successful finalize.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the destination, returning the serialized container.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    fn write(&mut self) -> IoResult<()> {
        if let Some(expected) = self.image_count {
            let added = self.container.frames.len();
            if added != expected {
                return Err(IoError::InvalidData(format!(
                    "expected {} images, got {}",
                    expected, added
                )));
            }
        }
        let bytes = self.container.to_bytes()?;
        if let Target::Path(path) = &self.target {
            fs::write(path, &bytes)?;
        }
        self.bytes = bytes;
        Ok(())
    }
}

impl DestinationBackend for MemoryDestination {
    type Image = MemoryImage;
    type Source = MemorySource;

    fn type_identifier(&self) -> TypeIdentifier {
        TypeIdentifier::from(self.container.type_identifier.as_str())
    }

    fn add_image(&mut self, image: &MemoryImage, properties: &RawMap) {
        self.container.frames.push(MemoryFrame {
            image: image.clone(),
            properties: properties.clone(),
        });
    }

    fn add_image_from_source(&mut self, source: &MemorySource, index: usize, properties: &RawMap) {
        let Some(frame) = source.frame(index) else {
            tracing::warn!(index, "source image missing, skipped");
            return;
        };
        let mut merged = frame.properties.clone();
        merged.extend(properties.clone());
        self.container.frames.push(MemoryFrame {
            image: frame.image.clone(),
            properties: merged,
        });
    }

    fn set_properties(&mut self, properties: &RawMap) {
        self.container.properties = properties.clone();
    }

    fn finalize(&mut self) -> bool {
        match self.write() {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "memory destination not written");
                false
            }
        }
    }
}
