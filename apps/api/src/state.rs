use std::sync::Arc;

use crate::keywords::config::EngineConfig;
use crate::keywords::fetcher::KeywordSource;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is immutable or a cloneable client; runs share no mutable state.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Pluggable keyword data provider. Default: DataForSeoClient.
    pub keyword_source: Arc<dyn KeywordSource>,
    /// Blocklists, term sets, and caps for the ranking engine.
    pub engine: Arc<EngineConfig>,
}
