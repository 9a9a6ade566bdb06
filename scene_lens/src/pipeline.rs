// THEORY:
// The `pipeline` module is the top-level API of the feature-extraction engine. It
// wires the stages into a single call: load and convert the image, run the four
// independent analyzers, join their outputs in the description synthesizer, and
// hand back one immutable `SceneFeatures` record.
//
//   color_space ──┬── scene_classifier ──┐
//                 ├── light_classifier ──┤
//                 ├── color_analyzer ────┼── description ── SceneFeatures
//                 └── content_analyzer ──┘
//
// The only fallible step is the load. Once pixels exist every stage is total, so a
// caller either gets a complete record or a single `Error::ImageLoad`, never a
// partial result. The image buffers live for exactly one run and are dropped when
// the call returns.

use crate::core_modules::color_analyzer::analyze_color;
use crate::core_modules::color_space::{load_views, ImageViews};
use crate::core_modules::content_analyzer::analyze_content;
use crate::core_modules::description::synthesize;
use crate::core_modules::light_classifier::analyze_light;
use crate::core_modules::scene_classifier::analyze_scene;
use crate::error::{Error, Result};
use image::DynamicImage;
use std::path::{Path, PathBuf};
use std::sync::Arc;

// Re-export the output vocabulary for the public API.
pub use crate::core_modules::features::{
    ColorFeatures, Complexity, ContentFeatures, DetailedAnalysis, DominantColor, ImageSize,
    LightType, SceneFeatures, SceneType,
};

/// Configuration for the `SceneAnalyzer`.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Lower hysteresis threshold of the Canny edge pass.
    pub canny_low: f32,
    /// Upper hysteresis threshold of the Canny edge pass.
    pub canny_high: f32,
    /// Run the four analysis stages concurrently in `analyze_async`.
    pub parallel_stages: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            canny_low: 100.0,
            canny_high: 200.0,
            parallel_stages: true,
        }
    }
}

impl PipelineConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a Canny threshold is negative or not finite, or if the
    /// low threshold exceeds the high one.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("canny_low", self.canny_low), ("canny_high", self.canny_high)] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::invalid_parameter(name, "must be a finite, non-negative number"));
            }
        }

        if self.canny_low > self.canny_high {
            return Err(Error::invalid_parameter(
                "canny_low",
                "must not be greater than canny_high",
            ));
        }

        Ok(())
    }
}

/// The four independent stage outputs, before the join.
struct StageOutputs {
    scene: SceneType,
    light: LightType,
    colors: ColorFeatures,
    content: ContentFeatures,
}

/// The main entry point of the engine.
#[derive(Debug, Clone)]
pub struct SceneAnalyzer {
    config: PipelineConfig,
}

impl Default for SceneAnalyzer {
    fn default() -> Self {
        Self {
            config: PipelineConfig::default(),
        }
    }
}

impl SceneAnalyzer {
    /// Create an analyzer with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Analyze the image file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `Error::ImageLoad` if the file cannot be decoded into pixels.
    pub fn analyze<P: AsRef<Path>>(&self, path: P) -> Result<SceneFeatures> {
        let path = path.as_ref();
        tracing::info!("Analyzing image: {}", path.display());

        let views = load_views(path)?;
        let features = self.analyze_views(&views);

        tracing::info!(
            scene = %features.scene_type,
            light = %features.light_type,
            color = %features.colors.dominant_color,
            "Analysis complete: {}",
            path.display()
        );
        Ok(features)
    }

    /// Analyze an already decoded image.
    pub fn analyze_image(&self, image: &DynamicImage) -> SceneFeatures {
        self.analyze_views(&ImageViews::from_dynamic(image))
    }

    /// Runs the stages sequentially over prepared views.
    pub fn analyze_views(&self, views: &ImageViews) -> SceneFeatures {
        let outputs = StageOutputs {
            scene: analyze_scene(&views.rgb),
            light: analyze_light(&views.gray),
            colors: analyze_color(&views.hsv),
            content: analyze_content(&views.gray, self.config.canny_low, self.config.canny_high),
        };
        assemble(views, outputs)
    }

    /// Analyze the image file at `path` without blocking the async runtime.
    ///
    /// Decoding happens on a blocking task. With `parallel_stages` set, the four
    /// analysis stages then run as separate blocking tasks and are joined before
    /// the description is synthesized. The result is identical to `analyze`.
    ///
    /// # Errors
    ///
    /// Returns `Error::ImageLoad` if the file cannot be decoded, or `Error::Task`
    /// if a worker task panicked.
    pub async fn analyze_async<P: AsRef<Path>>(&self, path: P) -> Result<SceneFeatures> {
        let path: PathBuf = path.as_ref().to_path_buf();
        tracing::info!("Analyzing image: {}", path.display());

        let load_path = path.clone();
        let views = Arc::new(tokio::task::spawn_blocking(move || load_views(load_path)).await??);

        let features = if self.config.parallel_stages {
            let outputs = self.run_stages_parallel(Arc::clone(&views)).await?;
            assemble(&views, outputs)
        } else {
            let analyzer = self.clone();
            let views = Arc::clone(&views);
            tokio::task::spawn_blocking(move || analyzer.analyze_views(&views)).await?
        };

        tracing::info!(
            scene = %features.scene_type,
            light = %features.light_type,
            color = %features.colors.dominant_color,
            "Analysis complete: {}",
            path.display()
        );
        Ok(features)
    }

    async fn run_stages_parallel(&self, views: Arc<ImageViews>) -> Result<StageOutputs> {
        let (low, high) = (self.config.canny_low, self.config.canny_high);

        let scene_views = Arc::clone(&views);
        let light_views = Arc::clone(&views);
        let color_views = Arc::clone(&views);
        let content_views = views;

        let (scene, light, colors, content) = futures::try_join!(
            tokio::task::spawn_blocking(move || analyze_scene(&scene_views.rgb)),
            tokio::task::spawn_blocking(move || analyze_light(&light_views.gray)),
            tokio::task::spawn_blocking(move || analyze_color(&color_views.hsv)),
            tokio::task::spawn_blocking(move || analyze_content(&content_views.gray, low, high)),
        )?;

        Ok(StageOutputs {
            scene,
            light,
            colors,
            content,
        })
    }
}

/// Joins the stage outputs into the final record.
fn assemble(views: &ImageViews, outputs: StageOutputs) -> SceneFeatures {
    let synthesis = synthesize(outputs.scene, outputs.light, &outputs.colors, &outputs.content);

    SceneFeatures {
        scene_type: outputs.scene,
        light_type: outputs.light,
        colors: outputs.colors,
        content: outputs.content,
        image_size: views.size(),
        scene_description: synthesis.scene_description,
        scene_elements: synthesis.scene_elements,
        detailed_analysis: synthesis.detailed_analysis,
    }
}

/// Analyze the image at `path` with the default configuration.
///
/// # Errors
///
/// Returns `Error::ImageLoad` if the file cannot be decoded into pixels.
pub fn analyze<P: AsRef<Path>>(path: P) -> Result<SceneFeatures> {
    SceneAnalyzer::default().analyze(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_default_config_is_valid() {
        assert!(PipelineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_thresholds_are_rejected() {
        let inverted = PipelineConfig {
            canny_low: 200.0,
            canny_high: 100.0,
            ..PipelineConfig::default()
        };
        assert!(matches!(
            SceneAnalyzer::new(inverted),
            Err(Error::InvalidParameter { ref name, .. }) if name == "canny_low"
        ));

        let negative = PipelineConfig {
            canny_low: -1.0,
            ..PipelineConfig::default()
        };
        assert!(negative.validate().is_err());

        let nan = PipelineConfig {
            canny_high: f32::NAN,
            ..PipelineConfig::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_white_image_features() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(600, 400, Rgb([255, 255, 255])));
        let features = SceneAnalyzer::default().analyze_image(&image);

        assert_eq!(features.scene_type, SceneType::Nature);
        assert_eq!(features.light_type, LightType::Soft);
        assert_eq!(features.colors.dominant_color, DominantColor::Warm);
        assert_eq!(features.content.complexity, Complexity::Low);
        assert_eq!(features.image_size, ImageSize { height: 400, width: 600 });
        assert!(!features.scene_description.is_empty());
    }

    #[test]
    fn test_dark_red_image_is_city() {
        // Red without green; dim because it is uniform and dark.
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(32, 32, Rgb([140, 20, 20])));
        let features = SceneAnalyzer::default().analyze_image(&image);

        assert_eq!(features.scene_type, SceneType::City);
        assert_eq!(features.light_type, LightType::Dim);
        assert_eq!(features.colors.dominant_color, DominantColor::Warm);
        assert_eq!(
            features.scene_description,
            "a dim, warm city scene, likely a back alley at night"
        );
    }

    #[tokio::test]
    async fn test_async_missing_file_is_image_load_error() {
        let err = SceneAnalyzer::default()
            .analyze_async("/no/such/image.png")
            .await
            .unwrap_err();
        assert!(err.is_image_load());
    }
}
