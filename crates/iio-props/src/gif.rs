//! GIF records.
//!
//! GIF metadata lives in one namespace at two levels: [`GifProperties`]
//! describes the whole file (loop count, global color map) and is set on
//! the container, [`GifFrameProperties`] describes a single frame and is
//! attached to each image added.

use crate::keys;
use crate::{ImageProperties, Property, RawMap};

const LOOP_COUNT: Property<i64> = Property::new(keys::GIF_LOOP_COUNT);
const HAS_GLOBAL_COLOR_MAP: Property<bool> = Property::new(keys::GIF_HAS_GLOBAL_COLOR_MAP);
const DELAY_TIME: Property<f64> = Property::new(keys::GIF_DELAY_TIME);
const UNCLAMPED_DELAY_TIME: Property<f64> = Property::new(keys::GIF_UNCLAMPED_DELAY_TIME);
const IMAGE_COLOR_MAP: Property<Vec<u8>> = Property::new(keys::GIF_IMAGE_COLOR_MAP);

/// File-level GIF properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GifProperties {
    /// Number of times the animation plays; 0 loops forever.
    pub loop_count: Option<i64>,
    /// Whether the file carries a global color table.
    pub has_global_color_map: Option<bool>,
}

impl GifProperties {
    /// Properties with only a loop count set.
    pub fn with_loop_count(loop_count: i64) -> Self {
        Self {
            loop_count: Some(loop_count),
            ..Default::default()
        }
    }
}

impl ImageProperties for GifProperties {
    const NAMESPACE: &'static str = keys::GIF_DICTIONARY;

    fn to_raw(&self) -> RawMap {
        let mut raw = RawMap::with_capacity(2);
        LOOP_COUNT.write(&self.loop_count, &mut raw);
        HAS_GLOBAL_COLOR_MAP.write(&self.has_global_color_map, &mut raw);
        raw
    }

    fn from_raw(values: &RawMap) -> Self {
        let mut gif = Self::default();
        LOOP_COUNT.assign(&mut gif.loop_count, values);
        HAS_GLOBAL_COLOR_MAP.assign(&mut gif.has_global_color_map, values);
        gif
    }
}

/// Per-frame GIF properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GifFrameProperties {
    /// Frame delay in seconds, as clamped by decoders.
    pub delay_time: Option<f64>,
    /// Frame delay in seconds, as stored in the file.
    pub unclamped_delay_time: Option<f64>,
    /// Local color table, raw RGB triplets.
    pub image_color_map: Option<Vec<u8>>,
}

impl GifFrameProperties {
    /// Properties with only a delay time set.
    pub fn with_delay_time(delay_time: f64) -> Self {
        Self {
            delay_time: Some(delay_time),
            ..Default::default()
        }
    }
}

impl ImageProperties for GifFrameProperties {
    const NAMESPACE: &'static str = keys::GIF_DICTIONARY;

    fn to_raw(&self) -> RawMap {
        let mut raw = RawMap::with_capacity(3);
        DELAY_TIME.write(&self.delay_time, &mut raw);
        UNCLAMPED_DELAY_TIME.write(&self.unclamped_delay_time, &mut raw);
        IMAGE_COLOR_MAP.write(&self.image_color_map, &mut raw);
        raw
    }

    fn from_raw(values: &RawMap) -> Self {
        let mut frame = Self::default();
        DELAY_TIME.assign(&mut frame.delay_time, values);
        UNCLAMPED_DELAY_TIME.assign(&mut frame.unclamped_delay_time, values);
        IMAGE_COLOR_MAP.assign(&mut frame.image_color_map, values);
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RawValue;

    #[test]
    fn test_global_color_map_from_width_one_number() {
        let mut raw = RawMap::new();
        raw.set("HasGlobalColorMap", RawValue::Int(1));
        raw.set("LoopCount", RawValue::Int(0));

        let gif = GifProperties::from_raw(&raw);
        assert_eq!(gif.has_global_color_map, Some(true));
        assert_eq!(gif.loop_count, Some(0));
    }

    #[test]
    fn test_frame_decodes_all_fields() {
        let frame = GifFrameProperties {
            delay_time: Some(0.1),
            unclamped_delay_time: Some(0.02),
            image_color_map: Some(vec![0, 0, 0, 255, 255, 255]),
        };
        assert_eq!(GifFrameProperties::from_raw(&frame.to_raw()), frame);
    }

    #[test]
    fn test_file_and_frame_share_namespace() {
        assert_eq!(GifProperties::NAMESPACE, GifFrameProperties::NAMESPACE);

        // Each record only sees its own keys
        let frame = GifFrameProperties::with_delay_time(0.5);
        assert_eq!(GifProperties::from_raw(&frame.to_raw()), GifProperties::default());
    }
}
