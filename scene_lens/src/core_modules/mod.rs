pub mod advice;
pub mod channel_stats;
pub mod color_analyzer;
pub mod color_space;
pub mod content_analyzer;
pub mod description;
pub mod features;
pub mod keywords;
pub mod light_classifier;
pub mod pixel;
pub mod scene_classifier;
pub mod style_matcher;
