// THEORY:
// The `parallel_pipeline` module runs the scene analyzer over many images at once.
// Each image is an independent, stateless invocation with its own buffers, so no
// locking is needed between them; the only shared thing is the read-only analyzer
// configuration.
//
// Concurrency is bounded by a worker count (one per CPU by default). Results come
// back in input order, one `Result` per path, so a corrupt file in the middle of a
// batch fails alone and does not take its neighbours down with it.

use crate::error::{Error, Result};
use crate::pipeline::{SceneAnalyzer, SceneFeatures};
use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};

/// Configuration for the `BatchAnalyzer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Maximum number of images analyzed concurrently.
    pub workers: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `workers` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::invalid_parameter("workers", "must be greater than 0"));
        }
        Ok(())
    }
}

/// The outcome of one image in a batch.
#[derive(Debug)]
pub struct BatchItem {
    pub path: PathBuf,
    pub result: Result<SceneFeatures>,
}

/// Analyzes many images concurrently with a shared `SceneAnalyzer`.
#[derive(Debug, Clone)]
pub struct BatchAnalyzer {
    analyzer: SceneAnalyzer,
    config: BatchConfig,
}

impl BatchAnalyzer {
    /// Create a batch analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch configuration is invalid.
    pub fn new(analyzer: SceneAnalyzer, config: BatchConfig) -> Result<Self> {
        config.validate()?;
        tracing::debug!(workers = config.workers, "batch analyzer ready");
        Ok(Self { analyzer, config })
    }

    pub fn workers(&self) -> usize {
        self.config.workers
    }

    /// Analyze every path, at most `workers` at a time, preserving input order.
    pub async fn analyze_all<I, P>(&self, paths: I) -> Vec<BatchItem>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let paths: Vec<PathBuf> = paths.into_iter().map(|p| p.as_ref().to_path_buf()).collect();
        let total = paths.len();

        let items: Vec<BatchItem> = stream::iter(paths)
            .map(|path| async move {
                let result = self.analyzer.analyze_async(&path).await;
                if let Err(ref err) = result {
                    tracing::warn!("Skipping {}: {err}", path.display());
                }
                BatchItem { path, result }
            })
            .buffered(self.config.workers)
            .collect()
            .await;

        let failed = items.iter().filter(|item| item.result.is_err()).count();
        tracing::info!(total, failed, "Batch complete");
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_workers_is_cpu_count() {
        let config = BatchConfig::default();
        assert_eq!(config.workers, num_cpus::get());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_workers_is_rejected() {
        let err = BatchAnalyzer::new(SceneAnalyzer::default(), BatchConfig { workers: 0 })
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { .. }));
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let batch =
            BatchAnalyzer::new(SceneAnalyzer::default(), BatchConfig { workers: 2 }).unwrap();
        let items = batch.analyze_all(Vec::<PathBuf>::new()).await;
        assert!(items.is_empty());
    }
}
