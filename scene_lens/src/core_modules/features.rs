// THEORY:
// The `features` module holds the vocabulary of the whole engine: the closed
// category sets each analysis stage classifies into, and the `SceneFeatures`
// record that the pipeline hands back to its caller.
//
// Key architectural principles:
// 1.  **Total Classification**: Every axis is a closed enum with no "unknown"
//     member. A stage can only ever answer with one of these variants, so the
//     downstream lookups never have to defend against a missing category.
// 2.  **Plain Data**: These are "dumb" records (enums plus floats). They know how
//     to name themselves but not how they were computed.
// 3.  **Write Once**: A `SceneFeatures` is assembled exactly once per image at the
//     end of the pipeline and is only read afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse scene category derived from channel means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneType {
    Nature,
    City,
    Beach,
    Indoor,
    Outdoor,
    Mountain,
    Forest,
    Urban,
}

impl SceneType {
    pub const ALL: [SceneType; 8] = [
        SceneType::Indoor,
        SceneType::Outdoor,
        SceneType::Nature,
        SceneType::City,
        SceneType::Beach,
        SceneType::Mountain,
        SceneType::Forest,
        SceneType::Urban,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Nature => "nature",
            Self::City => "city",
            Self::Beach => "beach",
            Self::Indoor => "indoor",
            Self::Outdoor => "outdoor",
            Self::Mountain => "mountain",
            Self::Forest => "forest",
            Self::Urban => "urban",
        }
    }
}

/// Lighting category derived from grayscale brightness and contrast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightType {
    Bright,
    Dim,
    Soft,
    Harsh,
}

impl LightType {
    pub const ALL: [LightType; 4] = [
        LightType::Bright,
        LightType::Dim,
        LightType::Soft,
        LightType::Harsh,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bright => "bright",
            Self::Dim => "dim",
            Self::Soft => "soft",
            Self::Harsh => "harsh",
        }
    }
}

/// Hue bucket derived from the mean HSV hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DominantColor {
    /// Reds, oranges and yellows.
    Warm,
    /// Greens.
    Fresh,
    /// Blues.
    Cool,
    /// Purples and pinks.
    Vibrant,
}

impl DominantColor {
    pub const ALL: [DominantColor; 4] = [
        DominantColor::Warm,
        DominantColor::Fresh,
        DominantColor::Cool,
        DominantColor::Vibrant,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Warm => "warm",
            Self::Fresh => "fresh",
            Self::Cool => "cool",
            Self::Vibrant => "vibrant",
        }
    }
}

/// Visual complexity bucket derived from edge density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    High,
    Low,
}

impl Complexity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Low => "low",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(SceneType, LightType, DominantColor, Complexity);

/// Output of the color analyzer: the hue bucket plus the raw HSV means.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorFeatures {
    pub dominant_color: DominantColor,
    /// Mean hue on the 8-bit half-degree scale, [0, 180).
    pub hue_mean: f64,
    /// Mean HSV saturation, [0, 255].
    pub saturation_mean: f64,
    /// Mean HSV value, [0, 255].
    pub brightness_mean: f64,
}

/// Output of the content analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentFeatures {
    pub complexity: Complexity,
    /// Fraction of pixels marked as edges, [0, 1].
    pub edge_density: f64,
}

/// Pixel dimensions in (height, width) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub height: u32,
    pub width: u32,
}

/// Per-axis natural-language summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedAnalysis {
    pub scene_summary: String,
    pub lighting_summary: String,
    pub color_summary: String,
    pub composition_summary: String,
}

/// The structured scene description produced once per analyzed image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneFeatures {
    pub scene_type: SceneType,
    pub light_type: LightType,
    pub colors: ColorFeatures,
    pub content: ContentFeatures,
    pub image_size: ImageSize,
    /// Never empty.
    pub scene_description: String,
    pub scene_elements: Vec<String>,
    pub detailed_analysis: DetailedAnalysis,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enums_serialize_lowercase() {
        let json = serde_json::to_string(&SceneType::Nature).unwrap();
        assert_eq!(json, "\"nature\"");
        let json = serde_json::to_string(&DominantColor::Vibrant).unwrap();
        assert_eq!(json, "\"vibrant\"");
    }

    #[test]
    fn test_display_matches_as_str() {
        for scene in SceneType::ALL {
            assert_eq!(scene.to_string(), scene.as_str());
        }
        assert_eq!(Complexity::High.to_string(), "high");
    }
}
