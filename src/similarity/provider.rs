use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::math::cosine_similarity;
use crate::constants::FALLBACK_SIMILARITY;
use crate::embedding::{EmbeddingError, EncoderConfig, SentenceEncoder};

/// Which implementation is answering similarity queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderMode {
    /// A real sentence-transformer is loaded.
    Model,
    /// Deterministic stub embeddings (tests only).
    Stub,
    /// No encoder; every comparison returns [`FALLBACK_SIMILARITY`].
    Fallback,
}

impl ProviderMode {
    /// Returns the lowercase name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderMode::Model => "model",
            ProviderMode::Stub => "stub",
            ProviderMode::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for ProviderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic similarity between a reference text and a candidate text.
///
/// Implementations are built once at startup and shared read-only across requests.
pub trait SimilarityProvider: Send + Sync {
    /// Returns a similarity, nominally in `[-1, 1]`.
    fn similarity(&self, reference: &str, candidate: &str) -> Result<f32, EmbeddingError>;

    /// Reports the active implementation.
    fn mode(&self) -> ProviderMode;
}

/// Cosine similarity of sentence embeddings.
#[derive(Debug)]
pub struct EmbeddingSimilarity {
    encoder: SentenceEncoder,
}

impl EmbeddingSimilarity {
    /// Wraps a loaded encoder.
    pub fn new(encoder: SentenceEncoder) -> Self {
        Self { encoder }
    }

    /// Returns the underlying encoder.
    pub fn encoder(&self) -> &SentenceEncoder {
        &self.encoder
    }
}

impl SimilarityProvider for EmbeddingSimilarity {
    fn similarity(&self, reference: &str, candidate: &str) -> Result<f32, EmbeddingError> {
        let reference_vec = self.encoder.encode(reference)?;
        let candidate_vec = self.encoder.encode(candidate)?;
        let similarity = cosine_similarity(&reference_vec, &candidate_vec);

        debug!(
            reference_len = reference.len(),
            candidate_len = candidate.len(),
            similarity,
            "Computed embedding similarity"
        );

        Ok(similarity)
    }

    fn mode(&self) -> ProviderMode {
        if self.encoder.is_stub() {
            ProviderMode::Stub
        } else {
            ProviderMode::Model
        }
    }
}

/// Stand-in used when no encoder could be loaded.
#[derive(Debug, Default, Clone, Copy)]
pub struct FallbackSimilarity;

impl SimilarityProvider for FallbackSimilarity {
    fn similarity(&self, _reference: &str, _candidate: &str) -> Result<f32, EmbeddingError> {
        Ok(FALLBACK_SIMILARITY)
    }

    fn mode(&self) -> ProviderMode {
        ProviderMode::Fallback
    }
}

/// Builds the process-wide provider from an optional model directory.
///
/// No directory, or any failure to load the encoder, yields [`FallbackSimilarity`].
pub fn load_provider(model_dir: Option<&Path>, max_seq_len: usize) -> Arc<dyn SimilarityProvider> {
    let Some(model_dir) = model_dir else {
        warn!("No GRADER_MODEL_PATH configured, grading with fallback similarity");
        return Arc::new(FallbackSimilarity);
    };

    let config = EncoderConfig::new(model_dir).with_max_seq_len(max_seq_len);
    match SentenceEncoder::load(config) {
        Ok(encoder) => {
            info!(model_dir = %model_dir.display(), "Grading with sentence embeddings");
            Arc::new(EmbeddingSimilarity::new(encoder))
        }
        Err(e) => {
            warn!(
                model_dir = %model_dir.display(),
                error = %e,
                "Sentence encoder unavailable, grading with fallback similarity"
            );
            Arc::new(FallbackSimilarity)
        }
    }
}
