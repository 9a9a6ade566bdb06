// THEORY:
// The color analyzer buckets the mean hue into one of four moods and reports the
// raw HSV means alongside, since the description synthesizer and any downstream
// prompt writer want the numbers as well as the label.
//
// The buckets are linear over the half-degree hue scale: [0,30) warm, [30,90)
// fresh, [90,150) cool, and everything from 150 up is vibrant. The scale really is
// circular, so deep reds near 179 land in `vibrant` rather than next to the reds
// near 0. That asymmetry is kept as is.

use crate::core_modules::channel_stats::hsv_means;
use crate::core_modules::color_space::HsvImage;
use crate::core_modules::features::{ColorFeatures, DominantColor};

const WARM_HUE_MAX: f64 = 30.0;
const FRESH_HUE_MAX: f64 = 90.0;
const COOL_HUE_MAX: f64 = 150.0;

pub fn dominant_color_for_hue(hue_mean: f64) -> DominantColor {
    if hue_mean < WARM_HUE_MAX {
        DominantColor::Warm
    } else if hue_mean < FRESH_HUE_MAX {
        DominantColor::Fresh
    } else if hue_mean < COOL_HUE_MAX {
        DominantColor::Cool
    } else {
        DominantColor::Vibrant
    }
}

pub fn analyze_color(hsv: &HsvImage) -> ColorFeatures {
    let means = hsv_means(hsv);
    let dominant_color = dominant_color_for_hue(means.hue);
    tracing::debug!(
        hue = means.hue,
        saturation = means.saturation,
        value = means.value,
        %dominant_color,
        "color analyzed"
    );

    ColorFeatures {
        dominant_color,
        hue_mean: means.hue,
        saturation_mean: means.saturation,
        brightness_mean: means.value,
    }
}
