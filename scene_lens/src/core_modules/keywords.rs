// THEORY:
// The keyword generator expands a finished `SceneFeatures` record and a style name
// into an ordered list of search terms for reference-photo lookups. The order is
// fixed: the three classifications, the style as given, generic person and pose
// tokens, then the scene-specific and style-specific blocks.
//
// The style is echoed exactly as the caller spelled it, but the style block is
// looked up with surrounding whitespace trimmed and case ignored, so " Fresh "
// still selects the fresh keywords.
//
// Both blocks come from static tables. A scene or style without an entry simply
// contributes nothing; there is no error path.

use crate::core_modules::features::{SceneFeatures, SceneType};
use crate::core_modules::style_matcher::Style;

const PERSON_TOKENS: [&str; 2] = ["person", "people"];
const POSE_TOKENS: [&str; 3] = ["human_pose", "photography_pose", "pose"];

#[rustfmt::skip]
const SCENE_KEYWORDS: &[(SceneType, [&str; 3])] = &[
    (SceneType::Nature, ["outdoor_pose", "nature_photography", "person_in_nature"]),
    (SceneType::City, ["urban_pose", "city_photography", "person_in_city"]),
    (SceneType::Beach, ["beach_pose", "beach_photography", "person_on_beach"]),
    (SceneType::Indoor, ["indoor_pose", "interior_photography", "person_indoor"]),
    (SceneType::Outdoor, ["outdoor_pose", "outdoor_photography", "person_outdoor"]),
    (SceneType::Mountain, ["mountain_pose", "hiking_pose", "person_in_mountains"]),
    (SceneType::Forest, ["forest_pose", "nature_photography", "person_in_forest"]),
    (SceneType::Urban, ["urban_pose", "city_photography", "person_in_urban"]),
];

#[rustfmt::skip]
const STYLE_KEYWORDS: &[(Style, [&str; 3])] = &[
    (Style::Vitality, ["dynamic_pose", "energetic_pose", "lively_pose"]),
    (Style::Melancholy, ["melancholy_pose", "introspective_pose", "calm_pose"]),
    (Style::Atmospheric, ["atmospheric_pose", "moody_pose", "artistic_pose"]),
    (Style::Fresh, ["fresh_pose", "natural_pose", "light_pose"]),
    (Style::Cool, ["cool_pose", "edgy_pose", "stylish_pose"]),
    (Style::Sweet, ["sweet_pose", "cute_pose", "lovely_pose"]),
];

fn scene_block(scene: SceneType) -> &'static [&'static str] {
    SCENE_KEYWORDS
        .iter()
        .find(|(s, _)| *s == scene)
        .map(|(_, words)| words.as_slice())
        .unwrap_or(&[])
}

fn style_block(style_name: &str) -> &'static [&'static str] {
    let Some(style) = Style::from_name(style_name) else {
        tracing::debug!(style = style_name, "style outside vocabulary, no style keywords");
        return &[];
    };
    STYLE_KEYWORDS
        .iter()
        .find(|(s, _)| *s == style)
        .map(|(_, words)| words.as_slice())
        .unwrap_or(&[])
}

/// Ordered search keywords for a scene photographed in the given style.
pub fn generate_search_keywords(features: &SceneFeatures, style_name: &str) -> Vec<String> {
    let scene_words = scene_block(features.scene_type);
    let style_words = style_block(style_name);

    let mut keywords = Vec::with_capacity(
        4 + PERSON_TOKENS.len() + POSE_TOKENS.len() + scene_words.len() + style_words.len(),
    );
    keywords.push(features.scene_type.as_str().to_string());
    keywords.push(features.light_type.as_str().to_string());
    keywords.push(features.colors.dominant_color.as_str().to_string());
    keywords.push(style_name.to_string());
    keywords.extend(
        PERSON_TOKENS
            .iter()
            .chain(POSE_TOKENS.iter())
            .chain(scene_words)
            .chain(style_words)
            .map(|word| word.to_string()),
    );
    keywords
}
