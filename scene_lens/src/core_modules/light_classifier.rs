// THEORY:
// Lighting is read off the grayscale view alone: how bright the frame is on
// average, and how widely the intensities spread around that average. Bright
// frames split on whether the spread is wide (hard, bright light) or narrow (soft,
// even light); darker frames split the other way round between flat dimness and
// harsh, high-contrast light.

use crate::core_modules::channel_stats::{brightness_stats, BrightnessStats};
use crate::core_modules::features::LightType;
use image::GrayImage;

const BRIGHT_MEAN_MIN: f64 = 150.0;
const BRIGHT_CONTRAST_MIN: f64 = 80.0;
const DIM_CONTRAST_MAX: f64 = 50.0;

pub fn classify_light(stats: &BrightnessStats) -> LightType {
    if stats.mean > BRIGHT_MEAN_MIN {
        if stats.contrast > BRIGHT_CONTRAST_MIN {
            LightType::Bright
        } else {
            LightType::Soft
        }
    } else if stats.contrast < DIM_CONTRAST_MAX {
        LightType::Dim
    } else {
        LightType::Harsh
    }
}

/// Classifies the lighting of a grayscale view.
pub fn analyze_light(gray: &GrayImage) -> LightType {
    let stats = brightness_stats(gray);
    let light = classify_light(&stats);
    tracing::debug!(mean = stats.mean, contrast = stats.contrast, %light, "light classified");
    light
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn stats(mean: f64, contrast: f64) -> BrightnessStats {
        BrightnessStats { mean, contrast }
    }

    #[test]
    fn test_each_branch() {
        assert_eq!(classify_light(&stats(200.0, 90.0)), LightType::Bright);
        assert_eq!(classify_light(&stats(200.0, 10.0)), LightType::Soft);
        assert_eq!(classify_light(&stats(100.0, 10.0)), LightType::Dim);
        assert_eq!(classify_light(&stats(100.0, 60.0)), LightType::Harsh);
    }

    #[test]
    fn test_boundaries_are_strict() {
        // mean == 150 is not bright territory.
        assert_eq!(classify_light(&stats(150.0, 0.0)), LightType::Dim);
        assert_eq!(classify_light(&stats(151.0, 80.0)), LightType::Soft);
        assert_eq!(classify_light(&stats(100.0, 50.0)), LightType::Harsh);
    }

    #[test]
    fn test_uniform_white_is_soft() {
        let gray = GrayImage::from_pixel(30, 20, Luma([255]));
        assert_eq!(analyze_light(&gray), LightType::Soft);
    }

    #[test]
    fn test_uniform_black_is_dim() {
        let gray = GrayImage::from_pixel(30, 20, Luma([0]));
        assert_eq!(analyze_light(&gray), LightType::Dim);
    }
}
