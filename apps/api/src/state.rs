use std::sync::Arc;

use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable text generator. Production: `GeminiClient`. Tests swap in a
    /// scripted mock to exercise the validation/retry loop without network.
    pub generator: Arc<dyn TextGenerator>,
}
