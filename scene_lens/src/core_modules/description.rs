// THEORY:
// The description synthesizer is the join point of the pipeline. It takes the four
// independent classifications and turns them into prose: one scene description,
// a fixed list of scene elements, and four per-axis summaries.
//
// Every lookup is a static table with an explicit fallback:
// - descriptions are keyed by (scene, light, color). Only the five scene types the
//   classifier can actually produce have entries; mountain, forest and urban always
//   take the generic sentence.
// - scene elements are keyed by scene type, eight per scene.
// - lighting summaries are keyed by light type.
//
// A miss never raises. It degrades to a templated sentence, so `scene_description`
// is never empty no matter what combination arrives.

use crate::core_modules::features::{
    ColorFeatures, Complexity, ContentFeatures, DetailedAnalysis, DominantColor, LightType,
    SceneType,
};

use DominantColor::{Cool, Fresh, Vibrant, Warm};
use LightType::{Bright, Dim, Harsh, Soft};
use SceneType::{Beach, City, Indoor, Nature, Outdoor};

/// Saturation mean above which colors count as highly saturated.
const HIGH_SATURATION_MIN: f64 = 128.0;
/// HSV value mean above which the frame counts as bright.
const BRIGHT_VALUE_MIN: f64 = 128.0;

type DescriptionEntry = (SceneType, LightType, DominantColor, &'static str);

#[rustfmt::skip]
const DESCRIPTIONS: &[DescriptionEntry] = &[
    (Nature, Bright, Warm, "a bright, warm nature scene, likely green vegetation under warm sunlight"),
    (Nature, Bright, Cool, "a bright, crisp nature scene, likely blue sky, open water or dense greenery"),
    (Nature, Bright, Fresh, "a bright, fresh nature scene full of lively green plants"),
    (Nature, Bright, Vibrant, "a bright, vivid nature scene, rich in color and full of energy"),
    (Nature, Soft, Warm, "a soft, warm nature scene, likely the gentle sun of early morning or evening"),
    (Nature, Soft, Cool, "a soft, cool nature scene, likely an overcast day or deep shade under trees"),
    (Nature, Soft, Fresh, "a soft, fresh nature scene, likely just after rain or in the clean air of dawn"),
    (Nature, Soft, Vibrant, "a soft yet vivid nature scene with gentle but plentiful color"),
    (Nature, Dim, Warm, "a dim, warm nature scene, likely sunset or the depths of a forest"),
    (Nature, Dim, Cool, "a dim, cool nature scene, likely an overcast forest or water at dusk"),
    (Nature, Dim, Fresh, "a dim, fresh nature scene, likely a misty forest in the early morning"),
    (Nature, Dim, Vibrant, "a dim nature scene with striking color, perhaps fireflies or an aurora at night"),
    (Nature, Harsh, Warm, "a harshly lit, warm nature scene, likely direct midday sun"),
    (Nature, Harsh, Cool, "a harshly lit, cool nature scene, likely glare off snow or a sunlit shore"),
    (Nature, Harsh, Fresh, "a harshly lit, fresh nature scene, likely strong sun on high mountains or plateaus"),
    (Nature, Harsh, Vibrant, "a harshly lit, vivid nature scene with strong color contrast"),
    (City, Bright, Warm, "a bright, warm city scene, likely buildings in the setting sun"),
    (City, Bright, Cool, "a bright, cool city scene, likely a modern city in daylight"),
    (City, Bright, Fresh, "a bright, fresh city scene, likely a city park or green belt"),
    (City, Bright, Vibrant, "a bright, vivid city scene with a colorful urban landscape"),
    (City, Soft, Warm, "a soft, warm city scene, likely city lights in the early evening"),
    (City, Soft, Cool, "a soft, cool city scene, likely streets on an overcast day"),
    (City, Soft, Fresh, "a soft, fresh city scene, likely streets just after rain"),
    (City, Soft, Vibrant, "a soft, vivid city scene, likely a gently colored night skyline"),
    (City, Dim, Warm, "a dim, warm city scene, likely a back alley at night"),
    (City, Dim, Cool, "a dim, cool city scene, likely modern architecture at night"),
    (City, Dim, Fresh, "a dim, fresh city scene, likely a city park at daybreak"),
    (City, Dim, Vibrant, "a dim, vivid city scene, likely a street lit by neon at night"),
    (City, Harsh, Warm, "a harshly lit, warm city scene, likely a plaza under the midday sun"),
    (City, Harsh, Cool, "a harshly lit, cool city scene, likely strong sun reflected off glass facades"),
    (City, Harsh, Fresh, "a harshly lit, fresh city scene, likely a fountain or water feature"),
    (City, Harsh, Vibrant, "a harshly lit, vivid city scene with strong color contrast"),
    (Beach, Bright, Warm, "a bright, warm beach scene with sunny sand and sea"),
    (Beach, Bright, Cool, "a bright, cool beach scene with clear blue sky and water"),
    (Beach, Bright, Fresh, "a bright, fresh beach scene with a clean sea breeze and waves"),
    (Beach, Bright, Vibrant, "a bright, vivid beach scene full of colorful beach life"),
    (Beach, Soft, Warm, "a soft, warm beach scene at sunset"),
    (Beach, Soft, Cool, "a soft, cool beach scene on an overcast day"),
    (Beach, Soft, Fresh, "a soft, fresh beach scene in the early morning"),
    (Beach, Soft, Vibrant, "a soft, vivid beach scene under a colorful sunset sky"),
    (Beach, Dim, Warm, "a dim, warm beach scene, likely a bonfire on the sand at night"),
    (Beach, Dim, Cool, "a dim, cool beach scene under the night sky and stars"),
    (Beach, Dim, Fresh, "a dim, fresh beach scene, likely a misty shore at dawn"),
    (Beach, Dim, Vibrant, "a dim, vivid beach scene, likely a beach party at night"),
    (Beach, Harsh, Warm, "a harshly lit, warm beach scene under strong midday sun"),
    (Beach, Harsh, Cool, "a harshly lit, cool beach scene with sunlight glaring off the water"),
    (Beach, Harsh, Fresh, "a harshly lit, fresh beach scene with strong wind and surf"),
    (Beach, Harsh, Vibrant, "a harshly lit, vivid beach scene with brightly colored beach activity"),
    (Indoor, Bright, Warm, "a bright, warm indoor scene, a room full of sunlight"),
    (Indoor, Bright, Cool, "a bright, cool indoor scene, a well-lit modern interior"),
    (Indoor, Bright, Fresh, "a bright, fresh indoor scene, an airy and well-ventilated space"),
    (Indoor, Bright, Vibrant, "a bright, vivid indoor scene with colorful decor"),
    (Indoor, Soft, Warm, "a soft, warm indoor scene, a room under warm lamplight"),
    (Indoor, Soft, Cool, "a soft, cool indoor scene, a modern interior under gentle light"),
    (Indoor, Soft, Fresh, "a soft, fresh indoor scene, a minimal interior under gentle light"),
    (Indoor, Soft, Vibrant, "a soft, vivid indoor scene with colorful decor under gentle light"),
    (Indoor, Dim, Warm, "a dim, warm indoor scene, a room lit by candles or small warm lamps"),
    (Indoor, Dim, Cool, "a dim, cool indoor scene, a dark interior space"),
    (Indoor, Dim, Fresh, "a dim, fresh indoor scene, a minimal interior in low light"),
    (Indoor, Dim, Vibrant, "a dim, vivid indoor scene with colorful decor in low light"),
    (Indoor, Harsh, Warm, "a harshly lit, warm indoor scene under strong lamps"),
    (Indoor, Harsh, Cool, "a harshly lit, cool indoor scene under strong fluorescent light"),
    (Indoor, Harsh, Fresh, "a harshly lit, fresh indoor scene, a minimal interior under strong light"),
    (Indoor, Harsh, Vibrant, "a harshly lit, vivid indoor scene with colorful decor under strong light"),
    (Outdoor, Bright, Warm, "a bright, warm outdoor scene in sunny surroundings"),
    (Outdoor, Bright, Cool, "a bright, cool outdoor scene under clear skies"),
    (Outdoor, Bright, Fresh, "a bright, fresh outdoor scene with clean open air"),
    (Outdoor, Bright, Vibrant, "a bright, vivid outdoor scene with a colorful landscape"),
    (Outdoor, Soft, Warm, "a soft, warm outdoor scene in gentle sunlight"),
    (Outdoor, Soft, Cool, "a soft, cool outdoor scene on an overcast day"),
    (Outdoor, Soft, Fresh, "a soft, fresh outdoor scene in mild weather"),
    (Outdoor, Soft, Vibrant, "a soft, vivid outdoor scene with a colorful landscape in gentle light"),
    (Outdoor, Dim, Warm, "a dim, warm outdoor scene at dusk"),
    (Outdoor, Dim, Cool, "a dim, cool outdoor scene at night"),
    (Outdoor, Dim, Fresh, "a dim, fresh outdoor scene in the cool night air"),
    (Outdoor, Dim, Vibrant, "a dim, vivid outdoor scene lit by colored lights at night"),
    (Outdoor, Harsh, Warm, "a harshly lit, warm outdoor scene in strong sunshine"),
    (Outdoor, Harsh, Cool, "a harshly lit, cool outdoor scene in intense light"),
    (Outdoor, Harsh, Fresh, "a harshly lit, fresh outdoor scene with strong wind or hard light"),
    (Outdoor, Harsh, Vibrant, "a harshly lit, vivid outdoor scene with a colorful landscape in intense light"),
];

#[rustfmt::skip]
const SCENE_ELEMENTS: &[(SceneType, [&str; 8])] = &[
    (SceneType::Nature, ["trees", "grass", "flowers", "mountains", "river", "sky", "animals", "sunlight"]),
    (SceneType::City, ["buildings", "streets", "vehicles", "pedestrians", "lights", "sky", "roads", "bridges"]),
    (SceneType::Beach, ["sand", "sea", "sky", "sunlight", "waves", "shells", "parasols", "boats"]),
    (SceneType::Indoor, ["furniture", "walls", "floor", "windows", "lights", "decorations", "plants", "appliances"]),
    (SceneType::Outdoor, ["sky", "ground", "vegetation", "buildings", "vehicles", "pedestrians", "sunlight", "shadows"]),
    (SceneType::Mountain, ["mountains", "rocks", "trees", "sky", "sunlight", "shadows", "grass", "streams"]),
    (SceneType::Forest, ["trees", "grass", "sunlight", "shadows", "flowers", "streams", "animals", "moss"]),
    (SceneType::Urban, ["buildings", "streets", "vehicles", "pedestrians", "lights", "billboards", "roads", "bridges"]),
];

const OTHER_ELEMENTS: &str = "other elements";

const LIGHTING_SUMMARIES: &[(LightType, &str)] = &[
    (LightType::Bright, "bright light, suited to crisp and energetic photos"),
    (LightType::Soft, "soft light, suited to warm and natural photos"),
    (LightType::Dim, "low light, suited to moody and melancholic photos"),
    (LightType::Harsh, "harsh light, suited to high-contrast, high-impact photos"),
];

const ORDINARY_LIGHTING: &str = "ordinary lighting conditions";

/// Everything the synthesizer derives from the four classifications.
#[derive(Debug, Clone, PartialEq)]
pub struct Synthesis {
    pub scene_description: String,
    pub scene_elements: Vec<String>,
    pub detailed_analysis: DetailedAnalysis,
}

fn lookup_description(
    scene: SceneType,
    light: LightType,
    color: DominantColor,
) -> Option<&'static str> {
    DESCRIPTIONS
        .iter()
        .find(|(s, l, c, _)| *s == scene && *l == light && *c == color)
        .map(|(_, _, _, text)| *text)
}

/// The generic sentence used when the description table has no entry.
pub fn fallback_description(scene: SceneType, light: LightType, color: DominantColor) -> String {
    format!("a {color}-toned {scene} scene, light is {light}")
}

/// Natural-language description for a (scene, light, color) triple. Never empty.
pub fn describe_scene(scene: SceneType, light: LightType, color: DominantColor) -> String {
    match lookup_description(scene, light, color) {
        Some(text) => text.to_string(),
        None => {
            tracing::debug!(%scene, %light, %color, "no description entry, using fallback");
            fallback_description(scene, light, color)
        }
    }
}

/// The eight physical elements typically found in a scene of this type.
pub fn scene_elements(scene: SceneType) -> Vec<String> {
    SCENE_ELEMENTS
        .iter()
        .find(|(s, _)| *s == scene)
        .map(|(_, elements)| elements.iter().map(|e| e.to_string()).collect())
        .unwrap_or_else(|| vec![OTHER_ELEMENTS.to_string()])
}

pub fn lighting_summary(light: LightType) -> String {
    LIGHTING_SUMMARIES
        .iter()
        .find(|(l, _)| *l == light)
        .map_or(ORDINARY_LIGHTING, |(_, text)| *text)
        .to_string()
}

pub fn color_summary(colors: &ColorFeatures) -> String {
    let saturation_level = if colors.saturation_mean > HIGH_SATURATION_MIN {
        "high"
    } else {
        "low"
    };
    let brightness_level = if colors.brightness_mean > BRIGHT_VALUE_MIN {
        "bright"
    } else {
        "dark"
    };
    format!(
        "dominant tone is {}, {saturation_level} saturation, {brightness_level} overall, suited to setting a deliberate mood",
        colors.dominant_color
    )
}

pub fn composition_summary(content: &ContentFeatures) -> String {
    let hint = if content.complexity == Complexity::High {
        "complex"
    } else {
        "simple"
    };
    format!(
        "scene complexity {}, edge density {:.3}, suited to a {hint} composition",
        content.complexity, content.edge_density
    )
}

pub fn scene_summary(
    scene: SceneType,
    light: LightType,
    colors: &ColorFeatures,
    content: &ContentFeatures,
) -> String {
    format!(
        "a {}-toned {scene} photo, light is {light}, scene complexity is {}",
        colors.dominant_color, content.complexity
    )
}

/// Joins the four stage outputs into prose.
pub fn synthesize(
    scene: SceneType,
    light: LightType,
    colors: &ColorFeatures,
    content: &ContentFeatures,
) -> Synthesis {
    Synthesis {
        scene_description: describe_scene(scene, light, colors.dominant_color),
        scene_elements: scene_elements(scene),
        detailed_analysis: DetailedAnalysis {
            scene_summary: scene_summary(scene, light, colors, content),
            lighting_summary: lighting_summary(light),
            color_summary: color_summary(colors),
            composition_summary: composition_summary(content),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn colors(
        dominant_color: DominantColor,
        saturation_mean: f64,
        brightness_mean: f64,
    ) -> ColorFeatures {
        ColorFeatures {
            dominant_color,
            hue_mean: 0.0,
            saturation_mean,
            brightness_mean,
        }
    }

    #[test]
    fn test_table_covers_every_classifiable_triple_once() {
        let classifiable = [Nature, City, Beach, Indoor, Outdoor];
        assert_eq!(DESCRIPTIONS.len(), classifiable.len() * 4 * 4);

        let mut seen = HashSet::new();
        for (scene, light, color, text) in DESCRIPTIONS {
            assert!(classifiable.contains(scene));
            assert!(!text.is_empty());
            assert!(seen.insert((*scene, *light, *color)), "duplicate {scene}/{light}/{color}");
        }
        let texts: HashSet<_> = DESCRIPTIONS.iter().map(|entry| entry.3).collect();
        assert_eq!(texts.len(), DESCRIPTIONS.len());
    }

    #[test]
    fn test_known_triple_uses_table() {
        let text = describe_scene(Beach, Dim, Cool);
        assert_eq!(text, "a dim, cool beach scene under the night sky and stars");
    }

    #[test]
    fn test_unlisted_scenes_fall_back_for_every_combination() {
        for scene in [SceneType::Mountain, SceneType::Forest, SceneType::Urban] {
            for light in LightType::ALL {
                for color in DominantColor::ALL {
                    assert_eq!(
                        describe_scene(scene, light, color),
                        format!("a {color}-toned {scene} scene, light is {light}")
                    );
                }
            }
        }
        assert_eq!(
            describe_scene(SceneType::Forest, Soft, Fresh),
            "a fresh-toned forest scene, light is soft"
        );
    }

    #[test]
    fn test_every_scene_has_eight_elements() {
        for scene in SceneType::ALL {
            let elements = scene_elements(scene);
            assert_eq!(elements.len(), 8, "{scene}");
        }
        assert_eq!(scene_elements(Beach)[0], "sand");
    }

    #[test]
    fn test_lighting_summary_per_type() {
        let summaries: HashSet<_> = LightType::ALL.iter().map(|l| lighting_summary(*l)).collect();
        assert_eq!(summaries.len(), 4);
        assert!(!summaries.contains(ORDINARY_LIGHTING));
    }

    #[test]
    fn test_color_summary_levels() {
        let summary = color_summary(&colors(Cool, 200.0, 50.0));
        assert!(summary.starts_with("dominant tone is cool, high saturation, dark overall"));

        // 128 is not above the threshold on either axis.
        let summary = color_summary(&colors(Warm, 128.0, 128.0));
        assert!(summary.contains("low saturation, dark overall"));

        let summary = color_summary(&colors(Warm, 0.0, 255.0));
        assert!(summary.contains("low saturation, bright overall"));
    }

    #[test]
    fn test_composition_summary_formats_three_decimals() {
        let summary = composition_summary(&ContentFeatures {
            complexity: Complexity::High,
            edge_density: 0.123_456,
        });
        assert_eq!(
            summary,
            "scene complexity high, edge density 0.123, suited to a complex composition"
        );

        let summary = composition_summary(&ContentFeatures {
            complexity: Complexity::Low,
            edge_density: 0.0,
        });
        assert!(summary.contains("edge density 0.000, suited to a simple composition"));
    }

    #[test]
    fn test_synthesize_fills_every_field() {
        let content = ContentFeatures {
            complexity: Complexity::Low,
            edge_density: 0.02,
        };
        let synthesis = synthesize(Nature, Soft, &colors(Warm, 0.0, 255.0), &content);

        assert_eq!(
            synthesis.scene_description,
            "a soft, warm nature scene, likely the gentle sun of early morning or evening"
        );
        assert_eq!(synthesis.scene_elements.len(), 8);
        assert_eq!(
            synthesis.detailed_analysis.scene_summary,
            "a warm-toned nature photo, light is soft, scene complexity is low"
        );
        assert!(!synthesis.detailed_analysis.lighting_summary.is_empty());
    }
}
