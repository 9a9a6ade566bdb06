// THEORY (1D Pixel Heuristics):
// The `Pixel` module is the most fundamental unit of the analysis engine. It is a
// "dumb" data container for a single RGB pixel plus the handful of single-pixel
// transforms the classifiers are built on. Nothing here reads neighbors; anything
// spatial (edges) or aggregate (means, spread) lives in higher modules.
//
// What lives here:
// - Raw channels (RGB, 8 bit each). Alpha is dropped when an image is loaded.
// - Luminance (Rec. 601 luma) and its rounded 8-bit grayscale form.
// - HSV on the 8-bit convention used by the scene heuristics:
//   • hue:        degrees halved, [0, 180)
//   • saturation: chroma / value, scaled to [0, 255]
//   • value:      max channel, [0, 255]
//
// The half-degree hue scale matters: the color buckets (30 / 90 / 150) were tuned
// against it and would mean something else on a 0..360 scale.

pub mod pixel {
    pub type Channel = u8;
    pub type NormalizedChannel = f32;
    pub type Hue = f32;
    pub type Luminance = f64;

    /// Hue range of the 8-bit HSV convention (degrees / 2).
    pub const HUE_RANGE: u16 = 180;

    /// A "dumb" data container representing a single RGB pixel.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Pixel {
        /// The red channel value (0-255).
        pub red: Channel,
        /// The green channel value (0-255).
        pub green: Channel,
        /// The blue channel value (0-255).
        pub blue: Channel,
    }

    /// A pixel in 8-bit HSV form.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct HsvPixel {
        /// Hue in half-degrees (0-179).
        pub hue: Channel,
        /// Saturation (0-255).
        pub saturation: Channel,
        /// Value, i.e. the brightest channel (0-255).
        pub value: Channel,
    }

    impl From<image::Rgb<u8>> for Pixel {
        fn from(rgb: image::Rgb<u8>) -> Self {
            let [red, green, blue] = rgb.0;
            Self::new(red, green, blue)
        }
    }

    impl Pixel {
        pub const fn new(red: Channel, green: Channel, blue: Channel) -> Self {
            Pixel { red, green, blue }
        }

        fn max_channel(&self) -> Channel {
            self.red.max(self.green.max(self.blue))
        }

        fn min_channel(&self) -> Channel {
            self.red.min(self.green.min(self.blue))
        }

        /// Luminance estimate (Rec. 601 luma) on the 0..255 scale.
        pub fn luminance(&self) -> Luminance {
            0.299_f64 * self.red as f64
                + 0.587_f64 * self.green as f64
                + 0.114_f64 * self.blue as f64
        }

        /// Grayscale intensity: luminance rounded to the nearest byte.
        pub fn luma(&self) -> Channel {
            self.luminance().round().clamp(0.0, 255.0) as Channel
        }

        /// Hue angle in degrees [0, 360). Achromatic pixels report 0.
        pub fn hue(&self) -> Hue {
            let maximum_channel = self.max_channel();
            let chroma = (maximum_channel - self.min_channel()) as NormalizedChannel;

            if chroma <= 0.0 {
                return 0.0;
            }

            let (red, green, blue) = (
                self.red as NormalizedChannel,
                self.green as NormalizedChannel,
                self.blue as NormalizedChannel,
            );

            let (base_difference, sector_offset) = if maximum_channel == self.red {
                (green - blue, 0.0)
            } else if maximum_channel == self.green {
                (blue - red, 2.0)
            } else {
                (red - green, 4.0)
            };

            let mut hue_degrees = (base_difference / chroma + sector_offset) * 60.0;
            if hue_degrees < 0.0 {
                hue_degrees += 360.0;
            }
            hue_degrees
        }

        /// HSV value: the brightest channel.
        pub fn value_hsv(&self) -> Channel {
            self.max_channel()
        }

        /// HSV saturation scaled to 0..255; zero for black.
        pub fn saturation_hsv(&self) -> Channel {
            let maximum_channel = self.max_channel();
            if maximum_channel == 0 {
                return 0;
            }
            let chroma = (maximum_channel - self.min_channel()) as NormalizedChannel;
            (chroma * 255.0 / maximum_channel as NormalizedChannel)
                .round()
                .clamp(0.0, 255.0) as Channel
        }

        /// Full 8-bit HSV conversion.
        pub fn to_hsv(&self) -> HsvPixel {
            let half_degrees = (self.hue() / 2.0).round() as u16 % HUE_RANGE;
            HsvPixel {
                hue: half_degrees as Channel,
                saturation: self.saturation_hsv(),
                value: self.value_hsv(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::pixel::*;

    #[test]
    fn test_primary_hues_on_half_degree_scale() {
        assert_eq!(Pixel::new(255, 0, 0).to_hsv().hue, 0);
        assert_eq!(Pixel::new(0, 255, 0).to_hsv().hue, 60);
        assert_eq!(Pixel::new(0, 0, 255).to_hsv().hue, 120);
        assert_eq!(Pixel::new(255, 0, 255).to_hsv().hue, 150);
    }

    #[test]
    fn test_white_is_achromatic() {
        let hsv = Pixel::new(255, 255, 255).to_hsv();
        assert_eq!(hsv, HsvPixel { hue: 0, saturation: 0, value: 255 });
    }

    #[test]
    fn test_black_has_zero_saturation() {
        let hsv = Pixel::new(0, 0, 0).to_hsv();
        assert_eq!(hsv.saturation, 0);
        assert_eq!(hsv.value, 0);
    }

    #[test]
    fn test_hue_near_full_circle_wraps_to_zero() {
        // 359 degrees rounds to 180 half-degrees, which wraps.
        let pixel = Pixel::new(255, 0, 4);
        assert!(pixel.hue() > 359.0);
        assert_eq!(pixel.to_hsv().hue, 0);
    }

    #[test]
    fn test_luma_uses_rec601_weights() {
        assert_eq!(Pixel::new(255, 255, 255).luma(), 255);
        assert_eq!(Pixel::new(255, 0, 0).luma(), 76);
        assert_eq!(Pixel::new(0, 255, 0).luma(), 150);
        assert_eq!(Pixel::new(0, 0, 255).luma(), 29);
    }
}
