use std::sync::Arc;

use crate::similarity::{FallbackSimilarity, SimilarityProvider};

/// Shared handler state; cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn SimilarityProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn SimilarityProvider>) -> Self {
        Self { provider }
    }

    /// State whose provider always answers with the fallback similarity.
    pub fn fallback() -> Self {
        Self::new(Arc::new(FallbackSimilarity))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("provider_mode", &self.provider.mode())
            .finish()
    }
}
