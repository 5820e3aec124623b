//! GPS record.
//!
//! Reference fields (latitude/longitude hemisphere, speed unit, bearing
//! reference, ...) are closed enumerations. A reference string outside the
//! defined set decodes as absent rather than as a guess.
//!
//! Processing method and area information are not mapped.

use crate::convert::{IntEnum, StrEnum};
use crate::keys;
use crate::{ImageProperties, Property, RawMap, RawRepr, RawValue};

/// GPS receiver status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// "A": measurement in progress.
    MeasurementInProgress,
    /// "V": measurement interoperability.
    MeasurementInteroperability,
}

impl StrEnum for Status {
    const MEMBERS: &'static [Self] = &[Self::MeasurementInProgress, Self::MeasurementInteroperability];

    fn as_str(&self) -> &'static str {
        match self {
            Self::MeasurementInProgress => "A",
            Self::MeasurementInteroperability => "V",
        }
    }
}

/// Latitude hemisphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LatitudeRef {
    /// "N"
    North,
    /// "S"
    South,
}

impl StrEnum for LatitudeRef {
    const MEMBERS: &'static [Self] = &[Self::North, Self::South];

    fn as_str(&self) -> &'static str {
        match self {
            Self::North => "N",
            Self::South => "S",
        }
    }
}

/// Longitude hemisphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LongitudeRef {
    /// "E"
    East,
    /// "W"
    West,
}

impl StrEnum for LongitudeRef {
    const MEMBERS: &'static [Self] = &[Self::East, Self::West];

    fn as_str(&self) -> &'static str {
        match self {
            Self::East => "E",
            Self::West => "W",
        }
    }
}

/// Altitude reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AltitudeRef {
    /// 0
    AboveSeaLevel,
    /// 1
    BelowSeaLevel,
}

impl IntEnum for AltitudeRef {
    const MEMBERS: &'static [Self] = &[Self::AboveSeaLevel, Self::BelowSeaLevel];

    fn as_i64(&self) -> i64 {
        match self {
            Self::AboveSeaLevel => 0,
            Self::BelowSeaLevel => 1,
        }
    }
}

/// Measurement mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureMode {
    /// "2"
    TwoDimensional,
    /// "3"
    ThreeDimensional,
}

impl StrEnum for MeasureMode {
    const MEMBERS: &'static [Self] = &[Self::TwoDimensional, Self::ThreeDimensional];

    fn as_str(&self) -> &'static str {
        match self {
            Self::TwoDimensional => "2",
            Self::ThreeDimensional => "3",
        }
    }
}

/// Speed unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeedRef {
    /// "K"
    KmPerHour,
    /// "M"
    MilesPerHour,
    /// "N"
    Knots,
}

impl StrEnum for SpeedRef {
    const MEMBERS: &'static [Self] = &[Self::KmPerHour, Self::MilesPerHour, Self::Knots];

    fn as_str(&self) -> &'static str {
        match self {
            Self::KmPerHour => "K",
            Self::MilesPerHour => "M",
            Self::Knots => "N",
        }
    }
}

/// Reference for track, image direction and bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// "T": true north.
    True,
    /// "M": magnetic north.
    Magnetic,
}

impl StrEnum for Direction {
    const MEMBERS: &'static [Self] = &[Self::True, Self::Magnetic];

    fn as_str(&self) -> &'static str {
        match self {
            Self::True => "T",
            Self::Magnetic => "M",
        }
    }
}

/// Distance unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistanceRef {
    /// "K"
    Km,
    /// "M"
    Miles,
    /// "N"
    Knots,
}

impl StrEnum for DistanceRef {
    const MEMBERS: &'static [Self] = &[Self::Km, Self::Miles, Self::Knots];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Km => "K",
            Self::Miles => "M",
            Self::Knots => "N",
        }
    }
}

/// Differential correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Differential {
    /// 0
    WithoutCorrection,
    /// 1
    CorrectionApplied,
}

impl IntEnum for Differential {
    const MEMBERS: &'static [Self] = &[Self::WithoutCorrection, Self::CorrectionApplied];

    fn as_i64(&self) -> i64 {
        match self {
            Self::WithoutCorrection => 0,
            Self::CorrectionApplied => 1,
        }
    }
}

impl RawRepr for Status {
    fn to_raw(&self) -> RawValue {
        self.to_raw_str()
    }
    fn from_raw(raw: &RawValue) -> Option<Self> {
        Self::from_raw_str(raw)
    }
}

impl RawRepr for LatitudeRef {
    fn to_raw(&self) -> RawValue {
        self.to_raw_str()
    }
    fn from_raw(raw: &RawValue) -> Option<Self> {
        Self::from_raw_str(raw)
    }
}

impl RawRepr for LongitudeRef {
    fn to_raw(&self) -> RawValue {
        self.to_raw_str()
    }
    fn from_raw(raw: &RawValue) -> Option<Self> {
        Self::from_raw_str(raw)
    }
}

impl RawRepr for AltitudeRef {
    fn to_raw(&self) -> RawValue {
        self.to_raw_int()
    }
    fn from_raw(raw: &RawValue) -> Option<Self> {
        Self::from_raw_int(raw)
    }
}

impl RawRepr for MeasureMode {
    fn to_raw(&self) -> RawValue {
        self.to_raw_str()
    }
    fn from_raw(raw: &RawValue) -> Option<Self> {
        Self::from_raw_str(raw)
    }
}

impl RawRepr for SpeedRef {
    fn to_raw(&self) -> RawValue {
        self.to_raw_str()
    }
    fn from_raw(raw: &RawValue) -> Option<Self> {
        Self::from_raw_str(raw)
    }
}

impl RawRepr for Direction {
    fn to_raw(&self) -> RawValue {
        self.to_raw_str()
    }
    fn from_raw(raw: &RawValue) -> Option<Self> {
        Self::from_raw_str(raw)
    }
}

impl RawRepr for DistanceRef {
    fn to_raw(&self) -> RawValue {
        self.to_raw_str()
    }
    fn from_raw(raw: &RawValue) -> Option<Self> {
        Self::from_raw_str(raw)
    }
}

impl RawRepr for Differential {
    fn to_raw(&self) -> RawValue {
        self.to_raw_int()
    }
    fn from_raw(raw: &RawValue) -> Option<Self> {
        Self::from_raw_int(raw)
    }
}

const VERSION: Property<Vec<i64>> = Property::new(keys::GPS_VERSION);
const STATUS: Property<Status> = Property::new(keys::GPS_STATUS);
const LATITUDE_REF: Property<LatitudeRef> = Property::new(keys::GPS_LATITUDE_REF);
const LATITUDE: Property<f64> = Property::new(keys::GPS_LATITUDE);
const LONGITUDE_REF: Property<LongitudeRef> = Property::new(keys::GPS_LONGITUDE_REF);
const LONGITUDE: Property<f64> = Property::new(keys::GPS_LONGITUDE);
const ALTITUDE_REF: Property<AltitudeRef> = Property::new(keys::GPS_ALTITUDE_REF);
const ALTITUDE: Property<f64> = Property::new(keys::GPS_ALTITUDE);
const SATELLITES: Property<String> = Property::new(keys::GPS_SATELLITES);
const TIME_STAMP: Property<String> = Property::new(keys::GPS_TIME_STAMP);
const DATE_STAMP: Property<String> = Property::new(keys::GPS_DATE_STAMP);
const MAP_DATUM: Property<String> = Property::new(keys::GPS_MAP_DATUM);
const MEASURE_MODE: Property<MeasureMode> = Property::new(keys::GPS_MEASURE_MODE);
const DOP: Property<f64> = Property::new(keys::GPS_DOP);
const SPEED_REF: Property<SpeedRef> = Property::new(keys::GPS_SPEED_REF);
const SPEED: Property<f64> = Property::new(keys::GPS_SPEED);
const TRACK_REF: Property<Direction> = Property::new(keys::GPS_TRACK_REF);
const TRACK: Property<f64> = Property::new(keys::GPS_TRACK);
const IMG_DIRECTION_REF: Property<Direction> = Property::new(keys::GPS_IMG_DIRECTION_REF);
const IMG_DIRECTION: Property<f64> = Property::new(keys::GPS_IMG_DIRECTION);
const DEST_LATITUDE_REF: Property<LatitudeRef> = Property::new(keys::GPS_DEST_LATITUDE_REF);
const DEST_LATITUDE: Property<f64> = Property::new(keys::GPS_DEST_LATITUDE);
const DEST_LONGITUDE_REF: Property<LongitudeRef> = Property::new(keys::GPS_DEST_LONGITUDE_REF);
const DEST_LONGITUDE: Property<f64> = Property::new(keys::GPS_DEST_LONGITUDE);
const DEST_BEARING_REF: Property<Direction> = Property::new(keys::GPS_DEST_BEARING_REF);
const DEST_BEARING: Property<f64> = Property::new(keys::GPS_DEST_BEARING);
const DEST_DISTANCE_REF: Property<DistanceRef> = Property::new(keys::GPS_DEST_DISTANCE_REF);
const DEST_DISTANCE: Property<f64> = Property::new(keys::GPS_DEST_DISTANCE);
const DIFFERENTIAL: Property<Differential> = Property::new(keys::GPS_DIFFERENTIAL);

/// GPS properties of one image.
///
/// Coordinates are unsigned degrees; the hemisphere lives in the matching
/// `*_ref` field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GpsProperties {
    /// Tag version, e.g. `[2, 2, 0, 0]`.
    pub version: Option<Vec<i64>>,
    /// Receiver status.
    pub status: Option<Status>,
    /// Latitude hemisphere.
    pub latitude_ref: Option<LatitudeRef>,
    /// Latitude in degrees.
    pub latitude: Option<f64>,
    /// Longitude hemisphere.
    pub longitude_ref: Option<LongitudeRef>,
    /// Longitude in degrees.
    pub longitude: Option<f64>,
    /// Altitude reference.
    pub altitude_ref: Option<AltitudeRef>,
    /// Altitude in meters.
    pub altitude: Option<f64>,
    /// Satellites used for the measurement.
    pub satellites: Option<String>,
    /// UTC time, "HH:MM:SS.ss".
    pub time_stamp: Option<String>,
    /// UTC date, "YYYY:MM:DD".
    pub date_stamp: Option<String>,
    /// Geodetic survey datum.
    pub map_datum: Option<String>,
    /// Measurement mode.
    pub measure_mode: Option<MeasureMode>,
    /// Degree of precision (DOP).
    pub dop: Option<f64>,
    /// Speed unit.
    pub speed_ref: Option<SpeedRef>,
    /// Receiver speed.
    pub speed: Option<f64>,
    /// Reference for `track`.
    pub track_ref: Option<Direction>,
    /// Direction of movement in degrees.
    pub track: Option<f64>,
    /// Reference for `image_direction`.
    pub image_direction_ref: Option<Direction>,
    /// Direction of the image when captured, in degrees.
    pub image_direction: Option<f64>,
    /// Destination latitude hemisphere.
    pub destination_latitude_ref: Option<LatitudeRef>,
    /// Destination latitude in degrees.
    pub destination_latitude: Option<f64>,
    /// Destination longitude hemisphere.
    pub destination_longitude_ref: Option<LongitudeRef>,
    /// Destination longitude in degrees.
    pub destination_longitude: Option<f64>,
    /// Reference for `destination_bearing`.
    pub destination_bearing_ref: Option<Direction>,
    /// Bearing to the destination in degrees.
    pub destination_bearing: Option<f64>,
    /// Unit of `destination_distance`.
    pub destination_distance_ref: Option<DistanceRef>,
    /// Distance to the destination.
    pub destination_distance: Option<f64>,
    /// Differential correction.
    pub differential: Option<Differential>,
}

impl ImageProperties for GpsProperties {
    const NAMESPACE: &'static str = keys::GPS_DICTIONARY;

    fn to_raw(&self) -> RawMap {
        let mut raw = RawMap::new();
        VERSION.write(&self.version, &mut raw);
        STATUS.write(&self.status, &mut raw);
        LATITUDE_REF.write(&self.latitude_ref, &mut raw);
        LATITUDE.write(&self.latitude, &mut raw);
        LONGITUDE_REF.write(&self.longitude_ref, &mut raw);
        LONGITUDE.write(&self.longitude, &mut raw);
        ALTITUDE_REF.write(&self.altitude_ref, &mut raw);
        ALTITUDE.write(&self.altitude, &mut raw);
        SATELLITES.write(&self.satellites, &mut raw);
        TIME_STAMP.write(&self.time_stamp, &mut raw);
        DATE_STAMP.write(&self.date_stamp, &mut raw);
        MAP_DATUM.write(&self.map_datum, &mut raw);
        MEASURE_MODE.write(&self.measure_mode, &mut raw);
        DOP.write(&self.dop, &mut raw);
        SPEED_REF.write(&self.speed_ref, &mut raw);
        SPEED.write(&self.speed, &mut raw);
        TRACK_REF.write(&self.track_ref, &mut raw);
        TRACK.write(&self.track, &mut raw);
        IMG_DIRECTION_REF.write(&self.image_direction_ref, &mut raw);
        IMG_DIRECTION.write(&self.image_direction, &mut raw);
        DEST_LATITUDE_REF.write(&self.destination_latitude_ref, &mut raw);
        DEST_LATITUDE.write(&self.destination_latitude, &mut raw);
        DEST_LONGITUDE_REF.write(&self.destination_longitude_ref, &mut raw);
        DEST_LONGITUDE.write(&self.destination_longitude, &mut raw);
        DEST_BEARING_REF.write(&self.destination_bearing_ref, &mut raw);
        DEST_BEARING.write(&self.destination_bearing, &mut raw);
        DEST_DISTANCE_REF.write(&self.destination_distance_ref, &mut raw);
        DEST_DISTANCE.write(&self.destination_distance, &mut raw);
        DIFFERENTIAL.write(&self.differential, &mut raw);
        raw
    }

    fn from_raw(values: &RawMap) -> Self {
        let mut gps = Self::default();
        VERSION.assign(&mut gps.version, values);
        STATUS.assign(&mut gps.status, values);
        LATITUDE_REF.assign(&mut gps.latitude_ref, values);
        LATITUDE.assign(&mut gps.latitude, values);
        LONGITUDE_REF.assign(&mut gps.longitude_ref, values);
        LONGITUDE.assign(&mut gps.longitude, values);
        ALTITUDE_REF.assign(&mut gps.altitude_ref, values);
        ALTITUDE.assign(&mut gps.altitude, values);
        SATELLITES.assign(&mut gps.satellites, values);
        TIME_STAMP.assign(&mut gps.time_stamp, values);
        DATE_STAMP.assign(&mut gps.date_stamp, values);
        MAP_DATUM.assign(&mut gps.map_datum, values);
        MEASURE_MODE.assign(&mut gps.measure_mode, values);
        DOP.assign(&mut gps.dop, values);
        SPEED_REF.assign(&mut gps.speed_ref, values);
        SPEED.assign(&mut gps.speed, values);
        TRACK_REF.assign(&mut gps.track_ref, values);
        TRACK.assign(&mut gps.track, values);
        IMG_DIRECTION_REF.assign(&mut gps.image_direction_ref, values);
        IMG_DIRECTION.assign(&mut gps.image_direction, values);
        DEST_LATITUDE_REF.assign(&mut gps.destination_latitude_ref, values);
        DEST_LATITUDE.assign(&mut gps.destination_latitude, values);
        DEST_LONGITUDE_REF.assign(&mut gps.destination_longitude_ref, values);
        DEST_LONGITUDE.assign(&mut gps.destination_longitude, values);
        DEST_BEARING_REF.assign(&mut gps.destination_bearing_ref, values);
        DEST_BEARING.assign(&mut gps.destination_bearing, values);
        DEST_DISTANCE_REF.assign(&mut gps.destination_distance_ref, values);
        DEST_DISTANCE.assign(&mut gps.destination_distance, values);
        DIFFERENTIAL.assign(&mut gps.differential, values);
        gps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_round_trip() {
        for r in LatitudeRef::MEMBERS {
            assert_eq!(LatitudeRef::from_raw(&r.to_raw()), Some(*r));
        }
        for r in SpeedRef::MEMBERS {
            assert_eq!(SpeedRef::from_raw(&r.to_raw()), Some(*r));
        }
        assert_eq!(LatitudeRef::from_raw(&RawValue::Str("E".into())), None);
        assert_eq!(Direction::from_raw(&RawValue::Str("t".into())), None);
    }

    #[test]
    fn test_int_backed_refs() {
        assert_eq!(AltitudeRef::from_raw(&RawValue::Int(1)), Some(AltitudeRef::BelowSeaLevel));
        assert_eq!(AltitudeRef::from_raw(&RawValue::Int(5)), None);
        assert_eq!(Differential::WithoutCorrection.to_raw(), RawValue::Int(0));
    }

    #[test]
    fn test_decode_camera_dictionary() {
        let mut raw = RawMap::new();
        raw.set("LatitudeRef", "N");
        raw.set("Latitude", 52.3702);
        raw.set("LongitudeRef", "E");
        raw.set("Longitude", 4.8952);
        raw.set("Altitude", RawValue::Int(2));
        raw.set("AltitudeRef", RawValue::Int(0));
        raw.set("DateStamp", "2017:05:23");
        raw.set(
            "GPSVersion",
            RawValue::List(vec![2i64.into(), 2i64.into(), 0i64.into(), 0i64.into()]),
        );
        raw.set("HPositioningError", 5.0);

        let gps = GpsProperties::from_raw(&raw);
        assert_eq!(gps.latitude_ref, Some(LatitudeRef::North));
        assert_eq!(gps.longitude_ref, Some(LongitudeRef::East));
        assert_relative_eq!(gps.latitude.unwrap(), 52.3702);
        assert_relative_eq!(gps.altitude.unwrap(), 2.0);
        assert_eq!(gps.altitude_ref, Some(AltitudeRef::AboveSeaLevel));
        assert_eq!(gps.date_stamp.as_deref(), Some("2017:05:23"));
        assert_eq!(gps.version, Some(vec![2, 2, 0, 0]));
        assert_eq!(gps.speed, None);
    }

    #[test]
    fn test_malformed_ref_does_not_poison_record() {
        let mut raw = RawMap::new();
        raw.set("LatitudeRef", "X");
        raw.set("Latitude", 10.0);

        let gps = GpsProperties::from_raw(&raw);
        assert_eq!(gps.latitude_ref, None);
        assert_eq!(gps.latitude, Some(10.0));
    }

    #[test]
    fn test_date_stamp_written_once() {
        let gps = GpsProperties {
            date_stamp: Some("2020:01:01".into()),
            ..Default::default()
        };
        let raw = gps.to_raw();
        assert_eq!(raw.len(), 1);
        assert_eq!(raw.get("DateStamp").and_then(|v| v.as_str()), Some("2020:01:01"));
    }
}
