//! Integration tests for iio-rs crates.
//!
//! End-to-end checks that typed records written through `iio-io`
//! destinations come back intact from `iio-io` sources.

use iio_io::{DestinationProperties, ImageDestination, IoResult, MemoryDestination, MemoryImage, TypeIdentifier};
use iio_props::{
    AltitudeRef, Direction, GpsProperties, LatitudeRef, LongitudeRef, MeasureMode, SpeedRef, Status,
};
use std::path::Path;

/// GPS fix with most fields populated.
pub fn sample_gps() -> GpsProperties {
    GpsProperties {
        version: Some(vec![2, 2, 0, 0]),
        status: Some(Status::MeasurementInProgress),
        latitude_ref: Some(LatitudeRef::North),
        latitude: Some(59.9139),
        longitude_ref: Some(LongitudeRef::East),
        longitude: Some(10.7522),
        altitude_ref: Some(AltitudeRef::AboveSeaLevel),
        altitude: Some(23.5),
        time_stamp: Some("12:30:45.00".into()),
        date_stamp: Some("2016:05:04".into()),
        measure_mode: Some(MeasureMode::ThreeDimensional),
        speed_ref: Some(SpeedRef::KmPerHour),
        speed: Some(4.2),
        image_direction_ref: Some(Direction::True),
        image_direction: Some(181.0),
        ..Default::default()
    }
}

/// Writes a single-image container of type `uti` to `path`.
pub fn write_single(path: &Path, uti: TypeIdentifier, props: &DestinationProperties) -> IoResult<()> {
    let mut dest = ImageDestination::new(MemoryDestination::to_path(path, uti));
    dest.add_image(&MemoryImage::filled(16, 16, [128, 128, 128, 255]), props)?;
    dest.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use iio_io::memory::MAGIC;
    use iio_io::{ImageSource, MakeGifError, MemorySource, make_gif};
    use iio_props::{
        ExifProperties, GifFrameProperties, GifProperties, ImageProperties, PropertiesContainer,
    };
    use tempfile::tempdir;

    /// EXIF written at a destination reads back at the source.
    #[test]
    fn test_exif_destination_to_source() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("exif.iiom");

        let exif = ExifProperties {
            exposure_time: Some(1.0 / 125.0),
        };
        write_single(
            &path,
            TypeIdentifier::JPEG,
            &DestinationProperties::new()
                .with_lossy_compression_quality(0.9)
                .with_image_properties(&exif),
        )
        .unwrap();

        let source = ImageSource::open(&path).unwrap();
        let read = source
            .properties_for_image(0, &[])
            .and_then(|c| c.get::<ExifProperties>())
            .unwrap();
        assert_relative_eq!(read.exposure_time.unwrap(), 1.0 / 125.0);
        assert!(source.properties_for_image(0, &[]).unwrap().get::<GpsProperties>().is_none());
    }

    /// Read references, change one, write back, read again.
    #[test]
    fn test_gps_mutate_and_rewrite() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("first.iiom");
        let second = dir.path().join("second.iiom");

        write_single(
            &first,
            TypeIdentifier::HEIC,
            &DestinationProperties::new().with_image_properties(&sample_gps()),
        )
        .unwrap();

        let source = ImageSource::open(&first).unwrap();
        let mut container = source.properties_for_image(0, &[]).unwrap();
        let gps = container.get::<GpsProperties>().unwrap();
        assert_eq!(gps.latitude_ref, Some(LatitudeRef::North));
        assert_eq!(gps.longitude_ref, Some(LongitudeRef::East));

        container.mutate(|gps: &mut Option<GpsProperties>| {
            if let Some(gps) = gps {
                gps.latitude_ref = Some(LatitudeRef::South);
            }
        });
        let updated = container.get::<GpsProperties>().unwrap();

        write_single(
            &second,
            TypeIdentifier::HEIC,
            &DestinationProperties::new().with_image_properties(&updated),
        )
        .unwrap();

        let reread = ImageSource::open(&second)
            .unwrap()
            .properties_for_image(0, &[])
            .and_then(|c| c.get::<GpsProperties>())
            .unwrap();
        assert_eq!(reread.latitude_ref, Some(LatitudeRef::South));
        assert_eq!(
            reread,
            GpsProperties {
                latitude_ref: Some(LatitudeRef::South),
                ..sample_gps()
            }
        );
    }

    /// On-disk layout nests each record under its namespace key.
    #[test]
    fn test_container_layout() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("layout.iiom");
        write_single(
            &path,
            TypeIdentifier::PNG,
            &DestinationProperties::new().with_image_properties(&sample_gps()),
        )
        .unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(MAGIC));
        let doc: serde_json::Value = serde_json::from_slice(&bytes[MAGIC.len()..]).unwrap();

        assert_eq!(doc["type_identifier"], "public.png");
        let gps = &doc["frames"][0]["properties"]["{GPS}"]["Map"];
        assert_eq!(gps["LatitudeRef"]["Str"], "N");
        assert_eq!(gps["MeasureMode"]["Str"], "3");
        assert_eq!(gps["AltitudeRef"]["Int"], 0);
        assert_eq!(gps["DateStamp"]["Str"], "2016:05:04");
        assert!(gps.get("Track").is_none());
    }

    #[test]
    fn test_make_gif() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("anim.gif.iiom");

        let frames: Vec<MemoryImage> = (0..4u8)
            .map(|i| MemoryImage::filled(8, 8, [i * 60, 0, 0, 255]))
            .collect();
        let mut dest = ImageDestination::new(
            MemoryDestination::to_path(&path, TypeIdentifier::GIF).with_image_count(frames.len()),
        );
        make_gif(
            &mut dest,
            &frames,
            Some(&GifProperties::with_loop_count(0)),
            Some(&GifFrameProperties::with_delay_time(0.05)),
        )
        .unwrap();

        let source = ImageSource::<MemorySource>::open(&path).unwrap();
        assert_eq!(source.type_identifier(), Some(TypeIdentifier::GIF));
        assert_eq!(source.image_count(), 4);

        let file_props = source.properties(&[]).unwrap();
        assert_eq!(file_props.get::<GifProperties>().and_then(|g| g.loop_count), Some(0));

        for index in 0..4 {
            let frame = source
                .properties_for_image(index, &[])
                .and_then(|c| c.get::<GifFrameProperties>())
                .unwrap();
            assert_eq!(frame.delay_time, Some(0.05));
            assert_eq!(source.create_image(index, &[]), Some(frames[index].clone()));
        }
    }

    #[test]
    fn test_make_gif_errors() {
        let mut dest = ImageDestination::new(MemoryDestination::new(TypeIdentifier::GIF));
        let err = make_gif(&mut dest, &[], None, None).unwrap_err();
        assert!(matches!(err, MakeGifError::NotAnimated));
        assert!(!dest.is_finalized());

        // Declared count mismatch makes the backend refuse to finalize
        let mut dest =
            ImageDestination::new(MemoryDestination::new(TypeIdentifier::GIF).with_image_count(3));
        let frames = [MemoryImage::filled(1, 1, [0; 4])];
        let err = make_gif(&mut dest, &frames, None, None).unwrap_err();
        assert!(matches!(err, MakeGifError::Backend(iio_io::IoError::FinalizeFailed)));
    }

    #[test]
    fn test_make_gif_requires_gif_destination() {
        let mut dest = ImageDestination::new(MemoryDestination::new(TypeIdentifier::PNG));
        let frames = [MemoryImage::filled(1, 1, [0; 4])];
        let err = make_gif(&mut dest, &frames, Some(&GifProperties::with_loop_count(0)), None)
            .unwrap_err();
        assert!(matches!(err, MakeGifError::NotGif(ref uti) if *uti == TypeIdentifier::PNG));
        assert!(!dest.is_finalized());
        assert!(dest.backend().container().frames.is_empty());
    }

    /// Frames without frame properties carry an empty property map.
    #[test]
    fn test_make_gif_without_frame_properties() {
        let mut dest = ImageDestination::new(MemoryDestination::new(TypeIdentifier::GIF));
        let frames = [MemoryImage::filled(2, 2, [0; 4]), MemoryImage::filled(2, 2, [1; 4])];
        make_gif(&mut dest, &frames, None, None).unwrap();

        let source = ImageSource::from_bytes(dest.backend().bytes()).unwrap();
        let frame = source.properties_for_image(1, &[]).unwrap();
        assert!(!frame.contains::<GifFrameProperties>());
        assert!(source.properties(&[]).unwrap().as_raw().is_empty());
    }

    #[test]
    fn test_container_passthrough() {
        let mut container = PropertiesContainer::default();
        container.add(&sample_gps());
        let raw = container.into_raw();
        assert_eq!(
            GpsProperties::from_raw(raw.sub_map(GpsProperties::NAMESPACE).unwrap()),
            sample_gps()
        );
    }
}
