//! Embedding + model utilities.
//!
//! - [`encoder`] turns text into unit-length sentence embeddings.
//! - [`bert`] is the candle BERT wrapper the encoder runs.

/// BERT encoder with mean pooling.
pub mod bert;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
/// Sentence encoder.
pub mod encoder;
mod error;
/// Tokenizer loading and vector helpers.
pub mod utils;

pub use encoder::{EncoderConfig, SentenceEncoder};
pub use error::EmbeddingError;
