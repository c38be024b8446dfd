//! Similarity providers.
//!
//! The grader depends only on [`SimilarityProvider`]. At startup [`load_provider`] picks one
//! of two implementations and the choice holds for the life of the process:
//!
//! - [`EmbeddingSimilarity`]: cosine similarity of sentence embeddings.
//! - [`FallbackSimilarity`]: a fixed [`FALLBACK_SIMILARITY`](crate::constants::FALLBACK_SIMILARITY),
//!   used when the encoder could not be loaded.

pub mod math;
pub mod provider;


pub use math::cosine_similarity;
pub use provider::{
    EmbeddingSimilarity, FallbackSimilarity, ProviderMode, SimilarityProvider, load_provider,
};
