//! Animated GIF assembly.

use crate::backend::DestinationBackend;
use crate::destination::ImageDestination;
use crate::options::DestinationProperties;
use crate::{IoError, TypeIdentifier};
use iio_props::{GifFrameProperties, GifProperties};
use thiserror::Error;

/// Error from [`make_gif`].
#[derive(Debug, Error)]
pub enum MakeGifError {
    /// No frames were given.
    #[error("image is not animated: no frames")]
    NotAnimated,
    /// The destination writes some other container type.
    #[error("destination type {0} is not GIF")]
    NotGif(TypeIdentifier),
    /// The destination rejected the container.
    #[error("image I/O error: {0}")]
    Backend(#[from] IoError),
}

/// Writes `frames` as an animated GIF.
///
/// `destination` must write [`TypeIdentifier::GIF`]. `properties` (loop
/// count, global color map) is set once on the container;
/// `frame_properties` (delay) is attached to every frame.
///
/// # Example
///
/// ```rust
/// use iio_io::{ImageDestination, MemoryDestination, MemoryImage, TypeIdentifier, make_gif};
/// use iio_props::{GifFrameProperties, GifProperties};
///
/// let frames = vec![
///     MemoryImage::filled(4, 4, [255, 0, 0, 255]),
///     MemoryImage::filled(4, 4, [0, 0, 255, 255]),
/// ];
/// let mut dest = ImageDestination::new(MemoryDestination::new(TypeIdentifier::GIF));
/// make_gif(
///     &mut dest,
///     &frames,
///     Some(&GifProperties::with_loop_count(0)),
///     Some(&GifFrameProperties::with_delay_time(0.1)),
/// )
/// .unwrap();
/// assert!(dest.is_finalized());
/// ```
pub fn make_gif<B: DestinationBackend>(
    destination: &mut ImageDestination<B>,
    frames: &[B::Image],
    properties: Option<&GifProperties>,
    frame_properties: Option<&GifFrameProperties>,
) -> Result<(), MakeGifError> {
    let uti = destination.type_identifier();
    if uti != TypeIdentifier::GIF {
        return Err(MakeGifError::NotGif(uti));
    }
    if frames.is_empty() {
        return Err(MakeGifError::NotAnimated);
    }

    if let Some(properties) = properties {
        destination.set_properties(&DestinationProperties::new().with_image_properties(properties))?;
    }

    let per_frame = match frame_properties {
        Some(fp) => DestinationProperties::new().with_image_properties(fp),
        None => DestinationProperties::new(),
    };
    for frame in frames {
        destination.add_image(frame, &per_frame)?;
    }

    tracing::debug!(frames = frames.len(), "finalizing GIF");
    destination.finalize()?;
    Ok(())
}
