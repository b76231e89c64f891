//! The optional picture of the test specimen shown under the form.

use std::io::ErrorKind;
use std::path::Path;

use image::imageops::FilterType;
use image::ImageError;
use tracing::{error, info, warn};

use crate::config::IllustrationConfig;
use crate::errors::IllustrationError;

/// Text shown in place of the picture when the file is missing.
pub const PLACEHOLDER_TEXT: &str = "Image file not found.";

/// Decoded RGBA pixels already scaled to their display size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Illustration {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major, unpremultiplied RGBA bytes.
    pub rgba: Vec<u8>,
}

/// What the form shows in the illustration slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IllustrationSlot {
    /// The picture, ready to draw.
    Picture(Illustration),
    /// The file is missing; [`PLACEHOLDER_TEXT`] is shown instead.
    Placeholder,
    /// The file could not be decoded; the slot stays empty.
    Empty,
}

impl IllustrationSlot {
    /// Load the configured picture, degrading instead of failing.
    #[must_use]
    pub fn load(config: &IllustrationConfig) -> Self {
        match load_illustration(&config.path, config.max_width, config.max_height) {
            Ok(picture) => {
                info!(
                    path = %config.path.display(),
                    width = picture.width,
                    height = picture.height,
                    "Illustration loaded"
                );
                IllustrationSlot::Picture(picture)
            }
            Err(err @ IllustrationError::NotFound { .. }) => {
                warn!(error = %err, "Showing placeholder instead of illustration");
                IllustrationSlot::Placeholder
            }
            Err(err) => {
                error!(error = %err, "Illustration unavailable");
                IllustrationSlot::Empty
            }
        }
    }
}

/// Largest size with the same aspect ratio that fits in `max_width x max_height`.
///
/// Images are only ever shrunk. Each side is at least one pixel.
///
/// # Examples
/// ```
/// use webcrippling::fit_within;
///
/// assert_eq!(fit_within(1600, 600, 800, 600), (800, 300));
/// assert_eq!(fit_within(400, 1200, 800, 600), (200, 600));
/// assert_eq!(fit_within(320, 240, 800, 600), (320, 240));
/// ```
#[must_use]
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 || (width <= max_width && height <= max_height) {
        return (width, height);
    }
    let (w, h) = (u64::from(width), u64::from(height));
    let (max_w, max_h) = (u64::from(max_width), u64::from(max_height));
    // Integer cross-multiplication keeps the limiting side exact.
    let (new_w, new_h) = if w * max_h >= h * max_w {
        (max_w, h * max_w / w)
    } else {
        (w * max_h / h, max_h)
    };
    let clamp = |side: u64| u32::try_from(side.max(1)).unwrap_or(u32::MAX);
    (clamp(new_w), clamp(new_h))
}

/// Decode an image and shrink it to fit the bounding box.
///
/// # Errors
///
/// Returns [`IllustrationError::NotFound`] when the file does not exist and
/// [`IllustrationError::Decode`] for any other read or decode failure.
pub fn load_illustration<P: AsRef<Path>>(
    path: P,
    max_width: u32,
    max_height: u32,
) -> Result<Illustration, IllustrationError> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|source| match source {
        ImageError::IoError(ref io) if io.kind() == ErrorKind::NotFound => {
            IllustrationError::NotFound {
                path: path.to_path_buf(),
            }
        }
        source => IllustrationError::Decode {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let (width, height) = fit_within(image.width(), image.height(), max_width, max_height);
    let image = if (width, height) == (image.width(), image.height()) {
        image
    } else {
        image.resize_exact(width, height, FilterType::Lanczos3)
    };

    Ok(Illustration {
        width,
        height,
        rgba: image.to_rgba8().into_raw(),
    })
}
