// THEORY:
// This file is the main entry point for the `scene_lens` library crate. It
// defines the public API exposed to callers such as the `scene_probe` driver or a
// web front end that wants structured scene descriptions for uploaded photos.
//
// The primary export is `SceneAnalyzer` (with `PipelineConfig` and the
// `SceneFeatures` record it produces) as the high-level interface to the whole
// feature-extraction engine. `BatchAnalyzer` runs it over many images at once.
// Keyword generation, style matching and advice generation consume a finished
// `SceneFeatures` and live beside the pipeline, not inside it. The individual
// analysis stages stay reachable under `core_modules` for callers who want a
// single axis.
//
// ```no_run
// # fn main() -> scene_lens::Result<()> {
// let features = scene_lens::analyze("photo.jpg")?;
// let keywords = scene_lens::generate_search_keywords(&features, "fresh");
// println!("{}: {keywords:?}", features.scene_description);
// # Ok(())
// # }
// ```

pub mod core_modules;
pub mod error;
pub mod parallel_pipeline;
pub mod pipeline;

pub use core_modules::advice::{Advice, AdviceCategory, AdviceGenerator};
pub use core_modules::keywords::generate_search_keywords;
pub use core_modules::style_matcher::{Style, StyleMatcher, StyleProfile};
pub use error::{Error, Result};
pub use parallel_pipeline::{BatchAnalyzer, BatchConfig, BatchItem};
pub use pipeline::{analyze, PipelineConfig, SceneAnalyzer, SceneFeatures};
