//! `scene_probe` - run the scene_lens feature pipeline on photographs.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scene_lens::{
    generate_search_keywords, Advice, AdviceGenerator, BatchAnalyzer, BatchConfig, PipelineConfig,
    SceneAnalyzer, SceneFeatures, Style, StyleMatcher,
};

/// Extract scene, lighting, color and complexity features from photographs.
#[derive(Parser, Debug)]
#[command(name = "scene_probe")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze one or more images.
    Analyze(AnalyzeArgs),
    /// List the available shooting styles.
    Styles,
}

#[derive(clap::Args, Debug)]
struct AnalyzeArgs {
    /// Input image paths.
    #[arg(value_name = "IMAGE", required = true)]
    images: Vec<PathBuf>,

    /// Shooting style used for search keywords and advice.
    #[arg(short, long, value_name = "NAME")]
    style: Option<String>,

    /// Random seed for reproducible advice.
    #[arg(long, value_name = "INT")]
    seed: Option<u64>,

    /// Maximum number of images analyzed at once. Defaults to the CPU count.
    #[arg(short, long, env = "SCENE_LENS_WORKERS", value_name = "INT")]
    workers: Option<usize>,

    /// Canny low threshold for the edge-density pass.
    #[arg(long, default_value = "100", value_name = "FLOAT")]
    canny_low: f32,

    /// Canny high threshold for the edge-density pass.
    #[arg(long, default_value = "200", value_name = "FLOAT")]
    canny_high: f32,

    /// Analyze the stages of each image one after another instead of concurrently.
    #[arg(long)]
    sequential_stages: bool,

    /// Print one JSON document per image.
    #[arg(long)]
    json: bool,
}

/// Everything printed for one image.
#[derive(Serialize)]
struct Report<'a> {
    path: &'a std::path::Path,
    features: &'a SceneFeatures,
    #[serde(skip_serializing_if = "Option::is_none")]
    keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    advice: Option<Advice>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("scene_lens={log_level},scene_probe={log_level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    let outcome = match cli.command {
        Command::Analyze(args) => run_analyze(args).await,
        Command::Styles => run_styles(),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when at least one image failed to load.
async fn run_analyze(args: AnalyzeArgs) -> Result<bool> {
    let config = PipelineConfig {
        canny_low: args.canny_low,
        canny_high: args.canny_high,
        parallel_stages: !args.sequential_stages,
    };
    let analyzer = SceneAnalyzer::new(config).context("Invalid pipeline configuration")?;

    let batch_config = match args.workers {
        Some(workers) => BatchConfig { workers },
        None => BatchConfig::default(),
    };
    let batch = BatchAnalyzer::new(analyzer, batch_config).context("Invalid batch configuration")?;

    if let Some(style) = args.style.as_deref() {
        if Style::from_name(style).is_none() {
            tracing::warn!("Unknown style '{style}': style keywords and style advice are skipped");
        }
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let advisor = AdviceGenerator::new();

    let items = batch.analyze_all(&args.images).await;
    let mut all_ok = true;

    for item in &items {
        let features = match &item.result {
            Ok(features) => features,
            Err(err) => {
                tracing::error!("{err}");
                all_ok = false;
                continue;
            }
        };

        let report = Report {
            path: &item.path,
            features,
            keywords: args
                .style
                .as_deref()
                .map(|style| generate_search_keywords(features, style)),
            advice: args
                .style
                .as_deref()
                .map(|style| advisor.generate(features, style, &mut rng)),
        };

        if args.json {
            let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
            println!("{json}");
        } else {
            print_report(&report);
        }
    }

    Ok(all_ok)
}

fn print_report(report: &Report<'_>) {
    let features = report.features;
    println!("{}", report.path.display());
    println!("  scene:       {}", features.scene_type);
    println!("  light:       {}", features.light_type);
    println!(
        "  color:       {} (hue {:.1}, saturation {:.1}, brightness {:.1})",
        features.colors.dominant_color,
        features.colors.hue_mean,
        features.colors.saturation_mean,
        features.colors.brightness_mean
    );
    println!(
        "  complexity:  {} (edge density {:.3})",
        features.content.complexity, features.content.edge_density
    );
    println!(
        "  size:        {}x{}",
        features.image_size.width, features.image_size.height
    );
    println!("  description: {}", features.scene_description);
    println!("  elements:    {}", features.scene_elements.join(", "));
    println!("  lighting:    {}", features.detailed_analysis.lighting_summary);
    println!("  colors:      {}", features.detailed_analysis.color_summary);
    println!("  composition: {}", features.detailed_analysis.composition_summary);

    if let Some(keywords) = &report.keywords {
        println!("  keywords:    {}", keywords.join(" "));
    }

    if let Some(advice) = &report.advice {
        println!("  advice:");
        for category in scene_lens::AdviceCategory::ALL {
            println!("    {:<15} {}", category.as_str(), advice.get(category));
        }
        for tip in &advice.general_tips {
            println!("    - {tip}");
        }
    }
    println!();
}

fn run_styles() -> Result<bool> {
    let matcher = StyleMatcher::new();
    for style in matcher.available_styles() {
        let profile = matcher.profile(style);
        println!("{:<12} {}", style.as_str(), profile.description);
        println!("{:<12} keywords: {}", "", profile.keywords.join(", "));
    }
    Ok(true)
}
