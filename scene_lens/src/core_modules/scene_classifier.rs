// THEORY:
// The scene classifier is a fixed decision list over the three RGB channel means.
// It is not learned and not configurable: strong green with some blue reads as
// vegetation under sky, dominant blue reads as sky or water, red without green
// reads as brick and asphalt, and everything else is treated as an interior.
//
// Rules are checked in order and the first match wins. All comparisons are strict,
// so a mean sitting exactly on a threshold takes the "false" branch.

use crate::core_modules::channel_stats::{rgb_means, ChannelMeans};
use crate::core_modules::features::SceneType;
use image::RgbImage;

const NATURE_GREEN_MIN: f64 = 120.0;
const NATURE_BLUE_MIN: f64 = 100.0;
const OPEN_SKY_BLUE_MIN: f64 = 130.0;
const BEACH_GREEN_MIN: f64 = 80.0;
const CITY_RED_MIN: f64 = 100.0;
const CITY_GREEN_MAX: f64 = 100.0;

/// Applies the decision list to precomputed channel means.
pub fn classify_scene(means: &ChannelMeans) -> SceneType {
    if means.green > NATURE_GREEN_MIN && means.blue > NATURE_BLUE_MIN {
        SceneType::Nature
    } else if means.blue > OPEN_SKY_BLUE_MIN {
        if means.green > BEACH_GREEN_MIN {
            SceneType::Beach
        } else {
            SceneType::Outdoor
        }
    } else if means.red > CITY_RED_MIN && means.green < CITY_GREEN_MAX {
        SceneType::City
    } else {
        SceneType::Indoor
    }
}

/// Classifies the scene of an RGB grid.
pub fn analyze_scene(rgb: &RgbImage) -> SceneType {
    let means = rgb_means(rgb);
    let scene = classify_scene(&means);
    tracing::debug!(
        red = means.red,
        green = means.green,
        blue = means.blue,
        %scene,
        "scene classified"
    );
    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn means(red: f64, green: f64, blue: f64) -> ChannelMeans {
        ChannelMeans { red, green, blue }
    }

    #[test]
    fn test_each_branch() {
        assert_eq!(classify_scene(&means(0.0, 121.0, 101.0)), SceneType::Nature);
        assert_eq!(classify_scene(&means(0.0, 81.0, 131.0)), SceneType::Beach);
        assert_eq!(classify_scene(&means(0.0, 80.0, 131.0)), SceneType::Outdoor);
        assert_eq!(classify_scene(&means(101.0, 99.0, 50.0)), SceneType::City);
        assert_eq!(classify_scene(&means(50.0, 50.0, 50.0)), SceneType::Indoor);
    }

    #[test]
    fn test_green_exactly_at_threshold_is_not_nature() {
        // green == 120 fails the strict comparison; blue > 130 then picks beach.
        assert_eq!(classify_scene(&means(0.0, 120.0, 200.0)), SceneType::Beach);
    }

    #[test]
    fn test_blue_exactly_at_thresholds() {
        assert_eq!(classify_scene(&means(0.0, 200.0, 100.0)), SceneType::Indoor);
        assert_eq!(classify_scene(&means(0.0, 90.0, 130.0)), SceneType::Indoor);
    }

    #[test]
    fn test_city_boundaries() {
        assert_eq!(classify_scene(&means(100.0, 50.0, 50.0)), SceneType::Indoor);
        assert_eq!(classify_scene(&means(150.0, 100.0, 50.0)), SceneType::Indoor);
    }

    #[test]
    fn test_white_image_is_nature() {
        let rgb = RgbImage::from_pixel(6, 4, Rgb([255, 255, 255]));
        assert_eq!(analyze_scene(&rgb), SceneType::Nature);
    }
}
