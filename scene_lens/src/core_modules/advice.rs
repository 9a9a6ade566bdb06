// THEORY:
// The advice generator turns a finished `SceneFeatures` record and a style name
// into shooting advice: one sentence per advice category plus a handful of general
// tips. It is the only randomized part of the engine, and the randomness is
// injected by the caller as an `Rng`. Seed it and the advice is reproducible; the
// feature pipeline itself never draws a random number.
//
// Each category has five sentence templates and a generic option list. A
// recognized style swaps the option list for the style's own options, so a
// melancholy shoot never gets told to jump in the air. Unknown styles fall back to
// the generic lists and contribute no style tip.

use crate::core_modules::features::{LightType, SceneFeatures, SceneType};
use crate::core_modules::style_matcher::Style;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;

/// Upper bound on the number of general tips returned.
const MAX_GENERAL_TIPS: usize = 5;

/// A single axis of shooting advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceCategory {
    Angle,
    Position,
    Lighting,
    Pose,
    HandMovements,
    FootMovements,
    Expression,
    Composition,
}

impl AdviceCategory {
    pub const ALL: [AdviceCategory; 8] = [
        AdviceCategory::Angle,
        AdviceCategory::Position,
        AdviceCategory::Lighting,
        AdviceCategory::Pose,
        AdviceCategory::HandMovements,
        AdviceCategory::FootMovements,
        AdviceCategory::Expression,
        AdviceCategory::Composition,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Angle => "angle",
            Self::Position => "position",
            Self::Lighting => "lighting",
            Self::Pose => "pose",
            Self::HandMovements => "hand_movements",
            Self::FootMovements => "foot_movements",
            Self::Expression => "expression",
            Self::Composition => "composition",
        }
    }

    /// Sentence templates; `{}` marks where the chosen option goes.
    fn templates(&self) -> &'static [&'static str; 5] {
        match self {
            Self::Angle => &[
                "try shooting from a {} angle to show how the subject relates to the scene",
                "consider a {} angle to add visual impact",
                "a {} angle brings out the layers of the scene while keeping the subject prominent",
                "shooting from a {} angle gives the subject more presence",
                "a {} angle creates a closer, more engaging mood",
            ],
            Self::Position => &[
                "place the subject at the {} of the frame, following golden-ratio composition",
                "try putting the subject at the {} to balance the frame",
                "mind how subject and background relate; the {} works best here",
                "use the {} to make the subject the visual center",
                "placing the subject at the {} makes better use of the scene",
            ],
            Self::Lighting => &[
                "use {} light to bring out the subject's outline and depth",
                "consider {} light for a soft, natural effect",
                "{} light adds drama and atmosphere",
                "avoid {} light, it casts hard shadows across the face",
                "try {} light to keep skin tones looking healthy",
            ],
            Self::Pose => &[
                "a {} pose fits the overall style",
                "try a {} pose for a more natural look",
                "consider a {} movement to add energy to the shot",
                "a {} pose brings out the subject's character",
                "go for a {} so the subject blends into the scene",
            ],
            Self::HandMovements => &[
                "have the hands {} to make the frame more lively",
                "try hands {} to match the overall style",
                "consider hands {} so they sit naturally in the scene",
                "hands {} help convey the subject's mood",
                "keep the hands {} to balance the frame",
            ],
            Self::FootMovements => &[
                "keep the feet {} to hold a balanced stance",
                "try feet {} to add movement",
                "consider feet {} to match the overall style",
                "a stance with feet {} looks more natural",
                "place the feet {} to sit better in the scene",
            ],
            Self::Expression => &[
                "go for a {} expression that suits the style",
                "try a {} for a more natural look",
                "a {} expression brings out the subject's emotion",
                "a {} makes the photo more engaging",
                "a {} carries the theme of the shot",
            ],
            Self::Composition => &[
                "use {} to add depth to the frame",
                "use {} to lead the eye to the subject",
                "consider {} to keep the frame balanced",
                "try {} to give the photo a story",
                "frame the subject with {} from the scene",
            ],
        }
    }

    /// Options used when no style narrows the choice.
    fn generic_options(&self) -> &'static [&'static str] {
        match self {
            Self::Angle => &["low", "high", "eye-level", "top-down", "upward", "side", "diagonal"],
            Self::Position => &[
                "golden-ratio point",
                "center",
                "left third",
                "right third",
                "foreground",
                "background",
                "edge",
            ],
            Self::Lighting => &["front", "back", "side", "top", "soft", "warm", "diffused"],
            Self::Pose => &[
                "relaxed standing",
                "seated",
                "mid-jump",
                "over-the-shoulder glance",
                "arms-outstretched",
                "slight lean",
                "arms swinging naturally",
            ],
            Self::HandMovements => &[
                "hanging loosely",
                "touching the hair",
                "in the pockets",
                "making a heart",
                "pointing into the distance",
                "resting under the chin",
                "opened wide",
                "lightly resting on something in the scene",
            ],
            Self::FootMovements => &[
                "naturally apart",
                "staggered front and back",
                "on tiptoe",
                "one slightly raised",
                "together",
                "turned sideways",
                "one knee bent",
            ],
            Self::Expression => &[
                "natural smile",
                "head-tilted smile",
                "neutral face",
                "thoughtful look",
                "laugh",
                "far-off gaze",
                "eyes-closed moment",
            ],
            Self::Composition => &[
                "the rule of thirds",
                "leading lines",
                "symmetry",
                "foreground elements",
                "a frame",
                "negative space",
                "diagonals",
            ],
        }
    }

    /// Options narrowed to a style.
    fn style_options(&self, style: Style) -> &'static [&'static str] {
        use AdviceCategory as C;
        use Style as S;
        match (style, self) {
            (S::Vitality, C::Angle) => &["low", "side", "diagonal"],
            (S::Vitality, C::Position) => &["left third", "right third", "foreground"],
            (S::Vitality, C::Lighting) => &["front", "warm", "diffused"],
            (S::Vitality, C::Pose) => &["mid-jump", "arms-outstretched", "slight lean"],
            (S::Vitality, C::HandMovements) => {
                &[
                    "opened wide",
                    "pointing into the distance",
                    "touching the hair",
                    "making a heart",
                ]
            }
            (S::Vitality, C::FootMovements) => {
                &["on tiptoe", "one slightly raised", "staggered front and back", "one knee bent"]
            }
            (S::Vitality, C::Expression) => {
                &["laugh", "natural smile", "far-off gaze", "head-tilted smile"]
            }
            (S::Vitality, C::Composition) => {
                &["the rule of thirds", "leading lines", "negative space"]
            }

            (S::Melancholy, C::Angle) => &["high", "eye-level", "side"],
            (S::Melancholy, C::Position) => &["center", "edge", "background"],
            (S::Melancholy, C::Lighting) => &["side", "soft", "diffused"],
            (S::Melancholy, C::Pose) => {
                &["relaxed standing", "over-the-shoulder glance", "arms swinging naturally"]
            }
            (S::Melancholy, C::HandMovements) => &[
                "hanging loosely",
                "in the pockets",
                "resting under the chin",
                "lightly resting on something in the scene",
            ],
            (S::Melancholy, C::FootMovements) => {
                &["together", "turned sideways", "naturally apart", "one slightly raised"]
            }
            (S::Melancholy, C::Expression) => {
                &["neutral face", "thoughtful look", "eyes-closed moment", "head-tilted smile"]
            }
            (S::Melancholy, C::Composition) => &["symmetry", "a frame", "negative space"],

            (S::Atmospheric, C::Angle) => &["low", "high", "top-down", "upward"],
            (S::Atmospheric, C::Position) => &["golden-ratio point", "foreground", "background"],
            (S::Atmospheric, C::Lighting) => &["back", "side", "warm"],
            (S::Atmospheric, C::Pose) => &["relaxed standing", "seated", "slight lean"],
            (S::Atmospheric, C::HandMovements) => &[
                "touching the hair",
                "lightly resting on something in the scene",
                "resting under the chin",
                "hanging loosely",
            ],
            (S::Atmospheric, C::FootMovements) => {
                &["naturally apart", "staggered front and back", "turned sideways", "one knee bent"]
            }
            (S::Atmospheric, C::Expression) => {
                &["far-off gaze", "thoughtful look", "natural smile", "eyes-closed moment"]
            }
            (S::Atmospheric, C::Composition) => &["the rule of thirds", "leading lines", "a frame"],

            (S::Fresh, C::Angle) => &["eye-level", "side", "diagonal"],
            (S::Fresh, C::Position) => &["left third", "right third", "foreground"],
            (S::Fresh, C::Lighting) => &["front", "soft", "diffused"],
            (S::Fresh, C::Pose) => {
                &["relaxed standing", "arms-outstretched", "arms swinging naturally"]
            }
            (S::Fresh, C::HandMovements) => {
                &["touching the hair", "making a heart", "opened wide", "hanging loosely"]
            }
            (S::Fresh, C::FootMovements) => {
                &["naturally apart", "on tiptoe", "one slightly raised", "staggered front and back"]
            }
            (S::Fresh, C::Expression) => {
                &["natural smile", "head-tilted smile", "laugh", "far-off gaze"]
            }
            (S::Fresh, C::Composition) => &["the rule of thirds", "negative space", "symmetry"],

            (S::Cool, C::Angle) => &["low", "side", "diagonal"],
            (S::Cool, C::Position) => &["left third", "right third", "center"],
            (S::Cool, C::Lighting) => &["side", "top", "back"],
            (S::Cool, C::Pose) => &["relaxed standing", "slight lean", "arms swinging naturally"],
            (S::Cool, C::HandMovements) => &[
                "in the pockets",
                "pointing into the distance",
                "hanging loosely",
                "lightly resting on something in the scene",
            ],
            (S::Cool, C::FootMovements) => {
                &["turned sideways", "staggered front and back", "naturally apart", "one knee bent"]
            }
            (S::Cool, C::Expression) => {
                &["neutral face", "head-tilted smile", "far-off gaze", "thoughtful look"]
            }
            (S::Cool, C::Composition) => &["the rule of thirds", "diagonals", "a frame"],

            (S::Sweet, C::Angle) => &["high", "eye-level", "side"],
            (S::Sweet, C::Position) => &["golden-ratio point", "center", "foreground"],
            (S::Sweet, C::Lighting) => &["front", "soft", "warm"],
            (S::Sweet, C::Pose) => &["seated", "arms-outstretched", "arms swinging naturally"],
            (S::Sweet, C::HandMovements) => {
                &["making a heart", "touching the hair", "resting under the chin", "opened wide"]
            }
            (S::Sweet, C::FootMovements) => {
                &["on tiptoe", "together", "one slightly raised", "staggered front and back"]
            }
            (S::Sweet, C::Expression) => {
                &["natural smile", "head-tilted smile", "laugh", "eyes-closed moment"]
            }
            (S::Sweet, C::Composition) => &["symmetry", "negative space", "a frame"],
        }
    }
}

/// One advice sentence per category plus sampled general tips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub angle: String,
    pub position: String,
    pub lighting: String,
    pub pose: String,
    pub hand_movements: String,
    pub foot_movements: String,
    pub expression: String,
    pub composition: String,
    pub general_tips: Vec<String>,
}

impl Advice {
    pub fn get(&self, category: AdviceCategory) -> &str {
        match category {
            AdviceCategory::Angle => &self.angle,
            AdviceCategory::Position => &self.position,
            AdviceCategory::Lighting => &self.lighting,
            AdviceCategory::Pose => &self.pose,
            AdviceCategory::HandMovements => &self.hand_movements,
            AdviceCategory::FootMovements => &self.foot_movements,
            AdviceCategory::Expression => &self.expression,
            AdviceCategory::Composition => &self.composition,
        }
    }
}

fn scene_tips(scene: SceneType) -> &'static [&'static str] {
    match scene {
        SceneType::Nature => &[
            "use the natural surroundings as a backdrop so the subject blends into nature",
            "watch the lines and shapes in the environment and place the subject among them",
        ],
        SceneType::City => &[
            "use the lines and geometry of the buildings to strengthen the composition",
            "play the subject against the urban surroundings to sharpen the theme",
        ],
        SceneType::Beach => &[
            "use the natural lines of sand and water as leading lines",
            "avoid direct midday sun and pick the time of day carefully",
        ],
        SceneType::Indoor => &[
            "use the room's lights to build atmosphere",
            "keep the background tidy and free of clutter",
        ],
        SceneType::Outdoor | SceneType::Mountain | SceneType::Forest | SceneType::Urban => &[],
    }
}

fn light_tip(light: LightType) -> Option<&'static str> {
    match light {
        LightType::Bright => {
            Some("in bright light, watch expression and posture and avoid overexposure")
        }
        LightType::Dim => Some("in low light, try a silhouette for a touch of mystery"),
        LightType::Harsh => Some("in harsh light, use a reflector or look for open shade"),
        LightType::Soft => None,
    }
}

fn style_tip(style: Style) -> &'static str {
    match style {
        Style::Vitality => "encourage natural, energetic movement and catch the moment",
        Style::Melancholy => "watch the expression and the eyes to carry the inner mood",
        Style::Atmospheric => {
            "focus on the mood of the whole frame and shape it with light and shadow"
        }
        Style::Fresh => "keep the frame clean and simple and skip extra props",
        Style::Cool => "emphasize personality and attitude and experiment with angles",
        Style::Sweet => "catch natural, cute expressions for a cozy feel",
    }
}

/// Produces shooting advice from scene features and a style name.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdviceGenerator;

impl AdviceGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        features: &SceneFeatures,
        style_name: &str,
        rng: &mut R,
    ) -> Advice {
        let style = Style::from_name(style_name);
        if style.is_none() {
            tracing::debug!(style = style_name, "style outside vocabulary, using generic advice");
        }

        let mut sentence = |category: AdviceCategory| -> String {
            let options = match style {
                Some(style) => category.style_options(style),
                None => category.generic_options(),
            };
            let option = options.choose(rng).copied().unwrap_or_default();
            let template = category.templates().choose(rng).copied().unwrap_or("{}");
            template.replacen("{}", option, 1)
        };

        let angle = sentence(AdviceCategory::Angle);
        let position = sentence(AdviceCategory::Position);
        let lighting = sentence(AdviceCategory::Lighting);
        let pose = sentence(AdviceCategory::Pose);
        let hand_movements = sentence(AdviceCategory::HandMovements);
        let foot_movements = sentence(AdviceCategory::FootMovements);
        let expression = sentence(AdviceCategory::Expression);
        let composition = sentence(AdviceCategory::Composition);

        Advice {
            angle,
            position,
            lighting,
            pose,
            hand_movements,
            foot_movements,
            expression,
            composition,
            general_tips: self.general_tips(features, style, rng),
        }
    }

    /// Every tip that applies, before sampling.
    pub fn candidate_tips(
        &self,
        features: &SceneFeatures,
        style: Option<Style>,
    ) -> Vec<&'static str> {
        let mut tips: Vec<&'static str> = scene_tips(features.scene_type).to_vec();
        tips.extend(light_tip(features.light_type));
        tips.extend(style.map(style_tip));
        tips
    }

    fn general_tips<R: Rng + ?Sized>(
        &self,
        features: &SceneFeatures,
        style: Option<Style>,
        rng: &mut R,
    ) -> Vec<String> {
        let tips = self.candidate_tips(features, style);
        let amount = tips.len().min(MAX_GENERAL_TIPS);
        tips.choose_multiple(rng, amount)
            .map(|tip| tip.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::features::{
        ColorFeatures, Complexity, ContentFeatures, DetailedAnalysis, DominantColor, ImageSize,
    };
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn features(scene_type: SceneType, light_type: LightType) -> SceneFeatures {
        SceneFeatures {
            scene_type,
            light_type,
            colors: ColorFeatures {
                dominant_color: DominantColor::Cool,
                hue_mean: 100.0,
                saturation_mean: 90.0,
                brightness_mean: 140.0,
            },
            content: ContentFeatures {
                complexity: Complexity::High,
                edge_density: 0.2,
            },
            image_size: ImageSize { height: 10, width: 10 },
            scene_description: "test".to_string(),
            scene_elements: Vec::new(),
            detailed_analysis: DetailedAnalysis {
                scene_summary: String::new(),
                lighting_summary: String::new(),
                color_summary: String::new(),
                composition_summary: String::new(),
            },
        }
    }

    #[test]
    fn test_seeded_advice_is_reproducible() {
        let generator = AdviceGenerator::new();
        let scene = features(SceneType::Nature, LightType::Bright);

        let first = generator.generate(&scene, "fresh", &mut StdRng::seed_from_u64(7));
        let second = generator.generate(&scene, "fresh", &mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_category_is_filled_from_style_options() {
        let generator = AdviceGenerator::new();
        let scene = features(SceneType::City, LightType::Harsh);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let advice = generator.generate(&scene, "melancholy", &mut rng);
            for category in AdviceCategory::ALL {
                let sentence = advice.get(category);
                assert!(!sentence.contains("{}"), "{sentence}");
                let options = category.style_options(Style::Melancholy);
                assert!(
                    options.iter().any(|option| sentence.contains(option)),
                    "{category:?}: {sentence}"
                );
            }
        }
    }

    #[test]
    fn test_unknown_style_uses_generic_options() {
        let generator = AdviceGenerator::new();
        let scene = features(SceneType::Indoor, LightType::Soft);
        let advice = generator.generate(&scene, "baroque", &mut StdRng::seed_from_u64(1));

        let sentence = advice.get(AdviceCategory::Angle);
        assert!(
            AdviceCategory::Angle
                .generic_options()
                .iter()
                .any(|option| sentence.contains(option))
        );
    }

    #[test]
    fn test_candidate_tips() {
        let generator = AdviceGenerator::new();

        let tips = generator.candidate_tips(
            &features(SceneType::Beach, LightType::Dim),
            Some(Style::Sweet),
        );
        assert_eq!(tips.len(), 4);

        // Soft light has no tip and outdoor scenes have none either.
        let tips = generator.candidate_tips(&features(SceneType::Outdoor, LightType::Soft), None);
        assert!(tips.is_empty());
    }

    #[test]
    fn test_general_tips_are_a_sample_without_repeats() {
        let generator = AdviceGenerator::new();
        let scene = features(SceneType::Nature, LightType::Harsh);
        let candidates = generator.candidate_tips(&scene, Some(Style::Cool));
        assert_eq!(candidates.len(), 4);

        let advice = generator.generate(&scene, "cool", &mut StdRng::seed_from_u64(3));
        assert_eq!(advice.general_tips.len(), 4);
        for tip in &advice.general_tips {
            assert!(candidates.contains(&tip.as_str()));
        }
        let mut unique = advice.general_tips.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 4);

        let empty = generator.generate(
            &features(SceneType::Forest, LightType::Soft),
            "unknown",
            &mut StdRng::seed_from_u64(3),
        );
        assert!(empty.general_tips.is_empty());
    }
}
