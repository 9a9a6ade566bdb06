// THEORY:
// The style matcher owns the fixed vocabulary of shooting styles a user can pick
// from, and the metadata each style carries (how the subject should pose, which
// compositions and light suit it, and the words that describe it). It sits beside
// the feature pipeline rather than inside it: the pipeline never sees a style, and
// the keyword and advice generators only consult this catalog by name.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One of the six stylistic presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Lively, dynamic, full of energy.
    Vitality,
    /// Soft, low contrast, dark tones.
    Melancholy,
    /// Mood, composition and rich light and shadow.
    Atmospheric,
    /// Bright, natural, minimal.
    Fresh,
    /// Fashionable, edgy, full of attitude.
    Cool,
    /// Gentle, cozy, cute.
    Sweet,
}

impl Style {
    pub const ALL: [Style; 6] = [
        Style::Vitality,
        Style::Melancholy,
        Style::Atmospheric,
        Style::Fresh,
        Style::Cool,
        Style::Sweet,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vitality => "vitality",
            Self::Melancholy => "melancholy",
            Self::Atmospheric => "atmospheric",
            Self::Fresh => "fresh",
            Self::Cool => "cool",
            Self::Sweet => "sweet",
        }
    }

    /// Case-insensitive lookup by slug; `None` outside the vocabulary.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::UnknownStyle(s.to_string()))
    }
}

/// The metadata attached to a style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleProfile {
    pub style: Style,
    pub description: &'static str,
    pub pose_characteristics: [&'static str; 4],
    pub composition: [&'static str; 3],
    pub lighting: [&'static str; 3],
    pub keywords: [&'static str; 5],
}

static PROFILES: [StyleProfile; 6] = [
    StyleProfile {
        style: Style::Vitality,
        description: "lively, dynamic and full of energy",
        pose_characteristics: ["dynamic", "energetic", "upright", "open"],
        composition: ["diagonal", "asymmetrical", "active"],
        lighting: ["bright", "natural", "even"],
        keywords: ["vibrant", "active", "dynamic", "lively", "energetic"],
    },
    StyleProfile {
        style: Style::Melancholy,
        description: "soft, low contrast, with deep tones",
        pose_characteristics: ["subtle", "closed", "relaxed", "introverted"],
        composition: ["symmetrical", "centered", "static"],
        lighting: ["soft", "dim", "diffused"],
        keywords: ["melancholy", "soft", "gentle", "introspective", "calm"],
    },
    StyleProfile {
        style: Style::Atmospheric,
        description: "evocative, carefully composed, rich in light and shadow",
        pose_characteristics: ["balanced", "expressive", "contextual", "harmonious"],
        composition: ["rule_of_thirds", "leading_lines", "depth"],
        lighting: ["atmospheric", "directional", "dramatic"],
        keywords: ["atmospheric", "moody", "expressive", "artistic", "cinematic"],
    },
    StyleProfile {
        style: Style::Fresh,
        description: "bright, natural and minimal",
        pose_characteristics: ["light", "natural", "relaxed", "open"],
        composition: ["simple", "clean", "airy"],
        lighting: ["soft", "natural", "even"],
        keywords: ["fresh", "clean", "natural", "light", "simple"],
    },
    StyleProfile {
        style: Style::Cool,
        description: "fashionable, edgy and full of attitude",
        pose_characteristics: ["confident", "sharp", "defined", "strong"],
        composition: ["geometric", "bold", "stylized"],
        lighting: ["contrast", "harsh", "directional"],
        keywords: ["cool", "edgy", "stylish", "confident", "bold"],
    },
    StyleProfile {
        style: Style::Sweet,
        description: "gentle, cozy and cute",
        pose_characteristics: ["playful", "cute", "friendly", "soft"],
        composition: ["symmetrical", "balanced", "charming"],
        lighting: ["warm", "soft", "diffused"],
        keywords: ["sweet", "cute", "lovely", "warm", "charming"],
    },
];

/// Read-only catalog of the style vocabulary.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleMatcher;

impl StyleMatcher {
    pub fn new() -> Self {
        Self
    }

    pub fn available_styles(&self) -> Vec<Style> {
        Style::ALL.to_vec()
    }

    pub fn profile(&self, style: Style) -> &'static StyleProfile {
        // PROFILES is laid out in `Style::ALL` order.
        &PROFILES[style as usize]
    }

    /// Resolves a style name to its profile.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownStyle` when the name is not in the vocabulary.
    pub fn match_style(&self, name: &str) -> Result<&'static StyleProfile> {
        let style: Style = name.parse()?;
        Ok(self.profile(style))
    }

    pub fn style_keywords(&self, name: &str) -> Result<&'static [&'static str]> {
        Ok(&self.match_style(name)?.keywords)
    }

    pub fn pose_characteristics(&self, name: &str) -> Result<&'static [&'static str]> {
        Ok(&self.match_style(name)?.pose_characteristics)
    }

    pub fn composition_tips(&self, name: &str) -> Result<&'static [&'static str]> {
        Ok(&self.match_style(name)?.composition)
    }

    pub fn lighting_tips(&self, name: &str) -> Result<&'static [&'static str]> {
        Ok(&self.match_style(name)?.lighting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_line_up_with_styles() {
        let matcher = StyleMatcher::new();
        for style in Style::ALL {
            assert_eq!(matcher.profile(style).style, style);
        }
    }

    #[test]
    fn test_match_style_is_case_insensitive() {
        let matcher = StyleMatcher::new();
        let profile = matcher.match_style(" Melancholy ").unwrap();
        assert_eq!(profile.style, Style::Melancholy);
        assert_eq!(profile.lighting, ["soft", "dim", "diffused"]);
    }

    #[test]
    fn test_unknown_style_is_an_error() {
        let matcher = StyleMatcher::new();
        let err = matcher.match_style("baroque").unwrap_err();
        assert!(matches!(err, Error::UnknownStyle(ref name) if name == "baroque"));
        assert!(matcher.style_keywords("baroque").is_err());
    }

    #[test]
    fn test_accessors() {
        let matcher = StyleMatcher::new();
        assert_eq!(matcher.style_keywords("cool").unwrap()[0], "cool");
        assert_eq!(matcher.pose_characteristics("sweet").unwrap().len(), 4);
        assert_eq!(matcher.composition_tips("atmospheric").unwrap()[0], "rule_of_thirds");
        assert_eq!(matcher.lighting_tips("vitality").unwrap(), ["bright", "natural", "even"]);
        assert_eq!(matcher.available_styles().len(), 6);
    }
}
