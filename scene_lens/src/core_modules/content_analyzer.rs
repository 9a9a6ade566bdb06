// THEORY:
// Visual complexity is approximated by how much of the frame is edge. A Canny pass
// with a dual threshold turns the grayscale view into a binary edge map, and the
// edge density is simply the share of pixels that survived. Busy scenes (foliage,
// crowds, cluttered rooms) produce dense maps; skies, walls and studio backdrops
// produce sparse ones.
//
// imageproc's Canny smooths the view with a sigma 1.4 Gaussian before taking
// gradients, so textured photos yield sparser maps than an unsmoothed detector.
//
// The raw density is reported next to the bucket because the composition summary
// prints it.

use crate::core_modules::features::{Complexity, ContentFeatures};
use image::GrayImage;
use imageproc::edges::canny;

/// Edge density above which a scene counts as complex.
const HIGH_COMPLEXITY_DENSITY: f64 = 0.1;

/// Fraction of pixels marked as edges by Canny, in [0, 1].
pub fn edge_density(gray: &GrayImage, low_threshold: f32, high_threshold: f32) -> f64 {
    let total = gray.as_raw().len();
    if total == 0 {
        return 0.0;
    }

    let edges = canny(gray, low_threshold, high_threshold);
    let edge_pixels = edges.as_raw().iter().filter(|v| **v > 0).count();
    edge_pixels as f64 / total as f64
}

pub fn complexity_for_density(edge_density: f64) -> Complexity {
    if edge_density > HIGH_COMPLEXITY_DENSITY {
        Complexity::High
    } else {
        Complexity::Low
    }
}

pub fn analyze_content(
    gray: &GrayImage,
    low_threshold: f32,
    high_threshold: f32,
) -> ContentFeatures {
    let edge_density = edge_density(gray, low_threshold, high_threshold);
    let complexity = complexity_for_density(edge_density);
    tracing::debug!(edge_density, %complexity, "content analyzed");

    ContentFeatures {
        complexity,
        edge_density,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_uniform_image_has_no_edges() {
        let gray = GrayImage::from_pixel(64, 64, Luma([255]));
        let content = analyze_content(&gray, 100.0, 200.0);
        assert_eq!(content.edge_density, 0.0);
        assert_eq!(content.complexity, Complexity::Low);
    }

    #[test]
    fn test_checkerboard_is_complex() {
        let gray = GrayImage::from_fn(64, 64, |x, y| {
            if (x / 8 + y / 8) % 2 == 0 { Luma([0]) } else { Luma([255]) }
        });
        let content = analyze_content(&gray, 100.0, 200.0);
        assert!(content.edge_density > 0.1, "density {}", content.edge_density);
        assert!(content.edge_density <= 1.0);
        assert_eq!(content.complexity, Complexity::High);
    }

    #[test]
    fn test_density_threshold_is_strict() {
        assert_eq!(complexity_for_density(0.1), Complexity::Low);
        assert_eq!(complexity_for_density(0.1001), Complexity::High);
    }
}
