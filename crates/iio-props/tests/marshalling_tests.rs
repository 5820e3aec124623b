//! Integration tests for record marshalling and the properties container.

use approx::assert_relative_eq;
use iio_props::{
    Direction, ExifProperties, GifFrameProperties, GifProperties, GpsProperties, ImageProperties,
    LatitudeRef, LongitudeRef, MeasureMode, PropertiesContainer, RawMap, RawValue, SpeedRef,
};

/// GPS record with a scattering of fields set.
fn sample_gps() -> GpsProperties {
    GpsProperties {
        version: Some(vec![2, 3, 0, 0]),
        latitude_ref: Some(LatitudeRef::South),
        latitude: Some(33.8688),
        longitude_ref: Some(LongitudeRef::East),
        longitude: Some(151.2093),
        measure_mode: Some(MeasureMode::ThreeDimensional),
        speed_ref: Some(SpeedRef::Knots),
        speed: Some(0.0),
        track_ref: Some(Direction::Magnetic),
        map_datum: Some("WGS-84".into()),
        ..Default::default()
    }
}

#[test]
fn round_trip_keeps_exactly_the_set_fields() {
    let gps = sample_gps();
    let raw = gps.to_raw();

    assert_eq!(raw.len(), 10);
    assert_eq!(GpsProperties::from_raw(&raw), gps);

    let decoded = GpsProperties::from_raw(&raw);
    assert_eq!(decoded.altitude, None);
    assert_eq!(decoded.status, None);
    assert_eq!(decoded.speed, Some(0.0));
}

#[test]
fn partially_malformed_dictionary_decodes_the_rest() {
    let mut raw = RawMap::new();
    raw.set("Latitude", 48.8566);
    raw.set("Longitude", "2.3522 E");

    let gps = GpsProperties::from_raw(&raw);
    assert_relative_eq!(gps.latitude.unwrap(), 48.8566);
    assert_eq!(gps.longitude, None);
}

#[test]
fn unknown_keys_are_ignored() {
    let mut raw = sample_gps().to_raw();
    raw.set("ProcessingMethod", "GPS");
    raw.set("AreaInformation", vec![0u8, 1, 2]);
    raw.set("Unrelated", RawValue::Map(RawMap::new()));

    assert_eq!(GpsProperties::from_raw(&raw), sample_gps());
}

#[test]
fn missing_namespace_differs_from_empty_namespace() {
    let container = PropertiesContainer::new(RawMap::new());
    assert!(container.get::<GpsProperties>().is_none());

    let mut outer = RawMap::new();
    outer.set("{GPS}", RawMap::new());
    let container = PropertiesContainer::new(outer);
    assert_eq!(container.get::<GpsProperties>(), Some(GpsProperties::default()));
}

#[test]
fn mutate_clearing_record_keeps_existing_entry() {
    let mut container = PropertiesContainer::default();
    container.add(&sample_gps());
    let written = container.as_raw().get("{GPS}").cloned();

    container.mutate(|gps: &mut Option<GpsProperties>| {
        assert!(gps.is_some());
        *gps = None;
    });

    assert_eq!(container.as_raw().get("{GPS}").cloned(), written);
}

#[test]
fn string_enumeration_decodes_members_only() {
    for (input, expected) in [
        ("N", Some(LatitudeRef::North)),
        ("S", Some(LatitudeRef::South)),
        ("", None),
        ("n", None),
        ("NORTH", None),
        ("W", None),
    ] {
        let mut raw = RawMap::new();
        raw.set("LatitudeRef", input);
        assert_eq!(GpsProperties::from_raw(&raw).latitude_ref, expected, "input {:?}", input);
    }
}

#[test]
fn exposure_time_scenario() {
    let exif = ExifProperties {
        exposure_time: Some(10.0),
    };

    let mut outer = RawMap::new();
    outer.set(ExifProperties::NAMESPACE, exif.to_raw());

    let container = PropertiesContainer::new(outer);
    let extracted = container.get::<ExifProperties>().expect("EXIF present");
    assert_eq!(extracted.exposure_time, Some(10.0));
    assert_eq!(extracted, exif);
}

#[test]
fn gps_reference_mutation_scenario() {
    let mut gps = RawMap::new();
    gps.set("LatitudeRef", "N");
    gps.set("LongitudeRef", "E");
    let mut outer = RawMap::new();
    outer.set("{GPS}", gps);
    outer.set("PixelWidth", 640i64);

    let mut container = PropertiesContainer::from(outer);
    let gps = container.get::<GpsProperties>().unwrap();
    assert_eq!(gps.longitude_ref, Some(LongitudeRef::East));
    assert_eq!(gps.latitude_ref, Some(LatitudeRef::North));

    container.mutate(|gps: &mut Option<GpsProperties>| {
        if let Some(gps) = gps {
            gps.latitude_ref = Some(LatitudeRef::South);
        }
    });

    let gps = container.get::<GpsProperties>().unwrap();
    assert_eq!(gps.latitude_ref, Some(LatitudeRef::South));
    assert_eq!(gps.longitude_ref, Some(LongitudeRef::East));

    // Non-namespace entries are left alone
    assert_eq!(container.as_raw().get("PixelWidth"), Some(&RawValue::Int(640)));
}

#[test]
fn gif_file_and_frame_records_overwrite_each_other() {
    let mut container = PropertiesContainer::default();
    container.add(&GifProperties::with_loop_count(0));
    container.add(&GifFrameProperties::with_delay_time(0.1));

    assert_eq!(container.get::<GifProperties>(), Some(GifProperties::default()));
    assert_eq!(
        container.get::<GifFrameProperties>().and_then(|f| f.delay_time),
        Some(0.1)
    );
}
