//! EXIF record.

use crate::keys;
use crate::{ImageProperties, Property, RawMap};

const EXPOSURE_TIME: Property<f64> = Property::new(keys::EXIF_EXPOSURE_TIME);

/// EXIF properties of one image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExifProperties {
    /// Exposure time in seconds.
    pub exposure_time: Option<f64>,
}

impl ImageProperties for ExifProperties {
    const NAMESPACE: &'static str = keys::EXIF_DICTIONARY;

    fn to_raw(&self) -> RawMap {
        let mut raw = RawMap::with_capacity(1);
        EXPOSURE_TIME.write(&self.exposure_time, &mut raw);
        raw
    }

    fn from_raw(values: &RawMap) -> Self {
        let mut exif = Self::default();
        EXPOSURE_TIME.assign(&mut exif.exposure_time, values);
        exif
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RawValue;

    #[test]
    fn test_exposure_time_from_integer() {
        let mut raw = RawMap::new();
        raw.set("ExposureTime", RawValue::Int(10));
        assert_eq!(ExifProperties::from_raw(&raw).exposure_time, Some(10.0));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut raw = RawMap::new();
        raw.set("ExposureTime", 0.004);
        raw.set("FNumber", 2.8);
        raw.set("LensModel", "50mm");

        let exif = ExifProperties::from_raw(&raw);
        assert_eq!(exif, ExifProperties { exposure_time: Some(0.004) });
        assert_eq!(exif.to_raw().len(), 1);
    }
}
