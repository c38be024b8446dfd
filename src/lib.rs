//! Answer grader library crate (used by the server binary and integration tests).
//!
//! # Public API Surface
//!
//! ## Grading
//! - [`grade`], [`Grade`], [`Category`] - similarity → score → category
//!
//! ## Similarity
//! - [`SimilarityProvider`] - the one seam the grader depends on
//! - [`EmbeddingSimilarity`], [`FallbackSimilarity`] - real and stand-in providers
//! - [`load_provider`] - startup selection between the two
//!
//! ## Embedding
//! - [`SentenceEncoder`], [`EncoderConfig`] - BERT sentence-transformer encoding
//!
//! ## Server
//! - [`Config`], [`ConfigError`] - environment-backed settings
//! - [`create_router`], [`AppState`] - Axum gateway

pub mod config;
pub mod constants;
pub mod embedding;
pub mod gateway;
pub mod grading;
pub mod similarity;

pub use config::{Config, ConfigError, load_env_file};
pub use constants::{CORRECT_THRESHOLD, FALLBACK_SIMILARITY, PARTIAL_THRESHOLD};
pub use embedding::{EmbeddingError, EncoderConfig, SentenceEncoder};
pub use gateway::{AppState, GatewayError, GradeRequest, GradeResponse, create_router};
pub use grading::{Category, Grade, grade};
pub use similarity::{
    EmbeddingSimilarity, FallbackSimilarity, ProviderMode, SimilarityProvider, cosine_similarity,
    load_provider,
};
