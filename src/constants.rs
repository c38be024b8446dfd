//! Cross-cutting, shared constants.
//!
//! Grading thresholds are fixed; they are not exposed through configuration so that
//! the same similarity always maps to the same category across deployments.

/// Output dimension of the default sentence encoder (all-MiniLM-L6-v2).
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Tokenizer truncation length used by sentence-transformers for all-MiniLM-L6-v2.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Upper bound for `max_seq_len` (BERT position embeddings).
pub const MAX_SUPPORTED_SEQ_LEN: usize = 512;

/// Similarity reported when no embedding model could be loaded at startup.
pub const FALLBACK_SIMILARITY: f32 = 0.0;

/// Inclusive lower bound of the `Correct` band.
pub const CORRECT_THRESHOLD: f32 = 0.75;

/// Inclusive lower bound of the `Partially Correct` band.
pub const PARTIAL_THRESHOLD: f32 = 0.45;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8000;

/// Default `KEY=VALUE` file read before configuration is loaded.
pub const DEFAULT_ENV_FILE: &str = "config.env";

/// Response header naming the outcome of a failed gateway request.
pub const GRADER_STATUS_HEADER: &str = "x-grader-status";
