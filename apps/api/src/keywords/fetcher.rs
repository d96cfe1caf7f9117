//! Candidate Fetcher — runs the two keyword lookups side by side.
//!
//! `KeywordSource` is the seam to the data provider. `AppState` carries an
//! `Arc<dyn KeywordSource>`; tests plug in fixtures.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::keywords::config::EngineConfig;
use crate::keywords::models::{KeywordCandidate, Seed};

#[derive(Debug, Error)]
pub enum KeywordSourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A provider of keyword search data.
#[async_trait]
pub trait KeywordSource: Send + Sync {
    /// Keyword ideas for the given seeds, targeted at `region` (e.g. "Colorado,United States").
    async fn keyword_ideas(
        &self,
        seeds: &[Seed],
        region: &str,
        limit: usize,
    ) -> Result<Vec<KeywordCandidate>, KeywordSourceError>;

    /// Keywords `domain` is reported to rank for.
    async fn ranked_keywords(
        &self,
        domain: &str,
        region: &str,
        limit: usize,
    ) -> Result<Vec<KeywordCandidate>, KeywordSourceError>;
}

/// Both lookup outcomes, joined.
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    pub ideas: Vec<KeywordCandidate>,
    /// Empty when the domain ranks for nothing or the lookup failed.
    pub ranked: Vec<KeywordCandidate>,
}

/// Issues both lookups concurrently and waits for both.
///
/// An ideas failure is fatal. A ranked failure is logged and becomes an
/// empty list, which downstream reads as "old site ranks for nothing".
pub async fn fetch_candidates(
    source: &dyn KeywordSource,
    seeds: &[Seed],
    domain: &str,
    region: &str,
    config: &EngineConfig,
) -> Result<CandidatePool, AppError> {
    let (ideas, ranked) = tokio::join!(
        source.keyword_ideas(seeds, region, config.ideas_limit),
        source.ranked_keywords(domain, region, config.ranked_limit),
    );

    let mut ideas = ideas.map_err(|e| AppError::KeywordIdeas(e.to_string()))?;
    ideas.truncate(config.ideas_limit);

    let mut ranked = match ranked {
        Ok(ranked) => ranked,
        Err(e) => {
            warn!("Ranked keyword lookup for {domain} failed, treating as empty: {e}");
            Vec::new()
        }
    };
    ranked.truncate(config.ranked_limit);

    info!(
        "Fetched {} keyword ideas and {} ranked keywords for {domain}",
        ideas.len(),
        ranked.len()
    );

    Ok(CandidatePool { ideas, ranked })
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// In-memory `KeywordSource`. `None` makes the corresponding lookup fail.
    pub struct FixtureSource {
        pub ideas: Option<Vec<KeywordCandidate>>,
        pub ranked: Option<Vec<KeywordCandidate>>,
    }

    fn failure() -> KeywordSourceError {
        KeywordSourceError::Api {
            status: 500,
            message: "fixture failure".to_string(),
        }
    }

    #[async_trait]
    impl KeywordSource for FixtureSource {
        async fn keyword_ideas(
            &self,
            _seeds: &[Seed],
            _region: &str,
            _limit: usize,
        ) -> Result<Vec<KeywordCandidate>, KeywordSourceError> {
            self.ideas.clone().ok_or_else(failure)
        }

        async fn ranked_keywords(
            &self,
            _domain: &str,
            _region: &str,
            _limit: usize,
        ) -> Result<Vec<KeywordCandidate>, KeywordSourceError> {
            self.ranked.clone().ok_or_else(failure)
        }
    }
}
