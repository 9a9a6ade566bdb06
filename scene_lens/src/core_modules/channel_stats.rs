// THEORY:
// The `channel_stats` module is the aggregation layer between single pixels and the
// classifiers. Every heuristic in the engine is a rule over one of three summaries:
// per-channel RGB means, per-channel HSV means, or the mean and spread of the
// grayscale view.
//
// Key principles:
// 1.  **Exact Accumulation**: Channel sums are accumulated as integers and only
//     divided once, so the means do not depend on iteration order and repeat runs
//     are bit-identical.
// 2.  **Histogram Spread**: Grayscale spread is computed from a 256-bin histogram
//     with the two-pass (value - mean)^2 form. That is the population standard
//     deviation and it is exactly zero for a uniform image.

use crate::core_modules::color_space::HsvImage;
use image::{GrayImage, RgbImage};

const ACCUMULATE_CHUNK: usize = 64;

/// Arithmetic mean of each RGB channel over all pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChannelMeans {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

/// Arithmetic mean of each HSV channel over all pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HsvMeans {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

/// Mean brightness and its standard deviation ("contrast") of a grayscale view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BrightnessStats {
    pub mean: f64,
    pub contrast: f64,
}

fn sum_triples(triples: impl Iterator<Item = [u8; 3]>) -> ([u64; 3], u64) {
    let mut sums = [0u64; 3];
    let mut count = 0u64;
    for [a, b, c] in triples {
        sums[0] += a as u64;
        sums[1] += b as u64;
        sums[2] += c as u64;
        count += 1;
    }
    (sums, count)
}

fn mean(sum: u64, count: u64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    sum as f64 / count as f64
}

/// Per-channel means of an RGB grid.
pub fn rgb_means(rgb: &RgbImage) -> ChannelMeans {
    let mut sums = [0u64; 3];
    let mut count = 0u64;

    // Chunked for cache locality over the raw subpixel buffer.
    for chunk in rgb.as_raw().chunks(3 * ACCUMULATE_CHUNK) {
        let (chunk_sums, chunk_count) =
            sum_triples(chunk.chunks_exact(3).map(|p| [p[0], p[1], p[2]]));
        sums[0] += chunk_sums[0];
        sums[1] += chunk_sums[1];
        sums[2] += chunk_sums[2];
        count += chunk_count;
    }

    ChannelMeans {
        red: mean(sums[0], count),
        green: mean(sums[1], count),
        blue: mean(sums[2], count),
    }
}

/// Per-channel means of an HSV grid.
pub fn hsv_means(hsv: &HsvImage) -> HsvMeans {
    let (sums, count) = sum_triples(
        hsv.pixels()
            .iter()
            .map(|p| [p.hue, p.saturation, p.value]),
    );

    HsvMeans {
        hue: mean(sums[0], count),
        saturation: mean(sums[1], count),
        value: mean(sums[2], count),
    }
}

/// Mean and population standard deviation of the grayscale intensities.
pub fn brightness_stats(gray: &GrayImage) -> BrightnessStats {
    let mut histogram = [0u64; 256];
    for value in gray.as_raw() {
        histogram[*value as usize] += 1;
    }
    stats_for_histogram(&histogram)
}

fn stats_for_histogram(histogram: &[u64; 256]) -> BrightnessStats {
    let count: u64 = histogram.iter().sum();
    if count == 0 {
        return BrightnessStats::default();
    }

    let weighted: u64 = histogram
        .iter()
        .enumerate()
        .map(|(value, bin)| value as u64 * bin)
        .sum();
    let mean = weighted as f64 / count as f64;

    let variance = histogram
        .iter()
        .enumerate()
        .filter(|(_, bin)| **bin > 0)
        .map(|(value, bin)| (value as f64 - mean).powi(2) * *bin as f64)
        .sum::<f64>()
        / count as f64;

    BrightnessStats {
        mean,
        contrast: variance.sqrt(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::color_space::to_hsv;
    use image::{Luma, Rgb};

    #[test]
    fn test_rgb_means_of_uniform_image() {
        let rgb = RgbImage::from_pixel(600, 400, Rgb([10, 20, 30]));
        let means = rgb_means(&rgb);
        assert_eq!(means, ChannelMeans { red: 10.0, green: 20.0, blue: 30.0 });
    }

    #[test]
    fn test_rgb_means_of_split_image() {
        let rgb = RgbImage::from_fn(2, 1, |x, _| {
            if x == 0 { Rgb([0, 100, 255]) } else { Rgb([100, 0, 255]) }
        });
        let means = rgb_means(&rgb);
        assert_eq!(means, ChannelMeans { red: 50.0, green: 50.0, blue: 255.0 });
    }

    #[test]
    fn test_hsv_means() {
        // Pure green (hue 60) and pure blue (hue 120), both fully saturated.
        let rgb = RgbImage::from_fn(2, 1, |x, _| {
            if x == 0 { Rgb([0, 255, 0]) } else { Rgb([0, 0, 255]) }
        });
        let means = hsv_means(&to_hsv(&rgb));
        assert_eq!(means, HsvMeans { hue: 90.0, saturation: 255.0, value: 255.0 });
    }

    #[test]
    fn test_uniform_gray_has_zero_contrast() {
        let gray = GrayImage::from_pixel(40, 40, Luma([255]));
        let stats = brightness_stats(&gray);
        assert_eq!(stats.mean, 255.0);
        assert_eq!(stats.contrast, 0.0);
    }

    #[test]
    fn test_half_black_half_white_contrast() {
        let gray = GrayImage::from_fn(10, 10, |x, _| if x < 5 { Luma([0]) } else { Luma([200]) });
        let stats = brightness_stats(&gray);
        assert!((stats.mean - 100.0).abs() < 1e-9);
        assert!((stats.contrast - 100.0).abs() < 1e-9);
    }
}
