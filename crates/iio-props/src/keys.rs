//! Namespace and field keys defined by the image I/O engine.
//!
//! Values match the engine's string constants, so dictionaries built here
//! can be handed to it unchanged.

// === Namespaces ===

/// EXIF dictionary.
pub const EXIF_DICTIONARY: &str = "{Exif}";
/// GPS dictionary.
pub const GPS_DICTIONARY: &str = "{GPS}";
/// GIF dictionary (container and frame level).
pub const GIF_DICTIONARY: &str = "{GIF}";

// === EXIF ===

/// Exposure time in seconds.
pub const EXIF_EXPOSURE_TIME: &str = "ExposureTime";

// === GPS ===

pub const GPS_VERSION: &str = "GPSVersion";
pub const GPS_STATUS: &str = "Status";
pub const GPS_LATITUDE_REF: &str = "LatitudeRef";
pub const GPS_LATITUDE: &str = "Latitude";
pub const GPS_LONGITUDE_REF: &str = "LongitudeRef";
pub const GPS_LONGITUDE: &str = "Longitude";
pub const GPS_ALTITUDE_REF: &str = "AltitudeRef";
pub const GPS_ALTITUDE: &str = "Altitude";
pub const GPS_SATELLITES: &str = "Satellites";
pub const GPS_TIME_STAMP: &str = "TimeStamp";
pub const GPS_DATE_STAMP: &str = "DateStamp";
pub const GPS_MAP_DATUM: &str = "MapDatum";
pub const GPS_MEASURE_MODE: &str = "MeasureMode";
pub const GPS_DOP: &str = "DOP";
pub const GPS_SPEED_REF: &str = "SpeedRef";
pub const GPS_SPEED: &str = "Speed";
pub const GPS_TRACK_REF: &str = "TrackRef";
pub const GPS_TRACK: &str = "Track";
pub const GPS_IMG_DIRECTION_REF: &str = "ImgDirectionRef";
pub const GPS_IMG_DIRECTION: &str = "ImgDirection";
pub const GPS_DEST_LATITUDE_REF: &str = "DestLatitudeRef";
pub const GPS_DEST_LATITUDE: &str = "DestLatitude";
pub const GPS_DEST_LONGITUDE_REF: &str = "DestLongitudeRef";
pub const GPS_DEST_LONGITUDE: &str = "DestLongitude";
pub const GPS_DEST_BEARING_REF: &str = "DestBearingRef";
pub const GPS_DEST_BEARING: &str = "DestBearing";
pub const GPS_DEST_DISTANCE_REF: &str = "DestDistanceRef";
pub const GPS_DEST_DISTANCE: &str = "DestDistance";
pub const GPS_DIFFERENTIAL: &str = "Differential";

// === GIF ===

pub const GIF_LOOP_COUNT: &str = "LoopCount";
pub const GIF_HAS_GLOBAL_COLOR_MAP: &str = "HasGlobalColorMap";
pub const GIF_DELAY_TIME: &str = "DelayTime";
pub const GIF_UNCLAMPED_DELAY_TIME: &str = "UnclampedDelayTime";
pub const GIF_IMAGE_COLOR_MAP: &str = "ImageColorMap";
