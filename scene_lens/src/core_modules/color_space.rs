// THEORY:
// The `color_space` module is the entry gate of the pipeline. It is the only stage
// that touches the file system and the only stage that can fail. Everything after
// it works on the three read-only views it produces:
//
// - `rgb`:  the decoded pixel grid, alpha discarded
// - `hsv`:  the same grid on the 8-bit HSV convention (see `pixel`)
// - `gray`: Rec. 601 luma, rounded to bytes
//
// The views are owned by a single pipeline run and dropped with it. Nothing here is
// cached between runs.

use crate::core_modules::features::ImageSize;
use crate::core_modules::pixel::pixel::{HsvPixel, Pixel};
use crate::error::{Error, Result};
use image::error::{ParameterError, ParameterErrorKind};
use image::{DynamicImage, GrayImage, ImageError, ImageReader, Luma, RgbImage};
use std::path::Path;

/// A pixel grid in 8-bit HSV form, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct HsvImage {
    width: u32,
    height: u32,
    pixels: Vec<HsvPixel>,
}

impl HsvImage {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[HsvPixel] {
        &self.pixels
    }
}

/// The three derived views every analysis stage reads from.
#[derive(Debug, Clone)]
pub struct ImageViews {
    pub rgb: RgbImage,
    pub hsv: HsvImage,
    pub gray: GrayImage,
}

impl ImageViews {
    /// Builds all views from a decoded image.
    pub fn from_dynamic(image: &DynamicImage) -> Self {
        Self::from_rgb(image.to_rgb8())
    }

    pub fn from_rgb(rgb: RgbImage) -> Self {
        let hsv = to_hsv(&rgb);
        let gray = to_grayscale(&rgb);
        Self { rgb, hsv, gray }
    }

    pub fn size(&self) -> ImageSize {
        ImageSize {
            height: self.rgb.height(),
            width: self.rgb.width(),
        }
    }
}

/// Decodes the file at `path`.
///
/// # Errors
///
/// Returns `Error::ImageLoad` if the file is missing, unreadable, in an unsupported
/// format, or decodes to an image without pixels.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();

    let load_error = |source: ImageError| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    };

    // Format is sniffed from the leading bytes; the extension is only a hint.
    let image = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|err| load_error(ImageError::IoError(err)))?
        .decode()
        .map_err(load_error)?;

    if image.width() == 0 || image.height() == 0 {
        return Err(load_error(ImageError::Parameter(ParameterError::from_kind(
            ParameterErrorKind::DimensionMismatch,
        ))));
    }

    Ok(image)
}

/// Loads `path` and derives all views in one step.
///
/// # Errors
///
/// See [`load_image`].
pub fn load_views<P: AsRef<Path>>(path: P) -> Result<ImageViews> {
    let image = load_image(path)?;
    Ok(ImageViews::from_dynamic(&image))
}

pub fn to_grayscale(rgb: &RgbImage) -> GrayImage {
    let mut gray = GrayImage::new(rgb.width(), rgb.height());
    for (source, target) in rgb.pixels().zip(gray.pixels_mut()) {
        *target = Luma([Pixel::from(*source).luma()]);
    }
    gray
}

pub fn to_hsv(rgb: &RgbImage) -> HsvImage {
    HsvImage {
        width: rgb.width(),
        height: rgb.height(),
        pixels: rgb.pixels().map(|p| Pixel::from(*p).to_hsv()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_views_share_dimensions() {
        let rgb = RgbImage::from_pixel(7, 3, Rgb([10, 200, 30]));
        let views = ImageViews::from_rgb(rgb);

        assert_eq!(views.gray.dimensions(), (7, 3));
        assert_eq!(views.hsv.width(), 7);
        assert_eq!(views.hsv.height(), 3);
        assert_eq!(views.hsv.pixels().len(), 21);
        assert_eq!(views.size(), ImageSize { height: 3, width: 7 });
    }

    #[test]
    fn test_rgba_input_drops_alpha() {
        let rgba = image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 0, 0, 0]));
        let views = ImageViews::from_dynamic(&DynamicImage::ImageRgba8(rgba));

        assert_eq!(views.rgb.get_pixel(0, 0), &Rgb([255, 0, 0]));
    }

    #[test]
    fn test_missing_file_is_image_load_error() {
        let err = load_image("/definitely/not/here.png").unwrap_err();
        assert!(err.is_image_load());
    }
}
