/// DataForSEO client — the production `KeywordSource`.
///
/// Two endpoints are used:
/// - Google Ads keywords-for-keywords (keyword ideas for the seed set)
/// - Labs ranked keywords (what the existing domain already ranks for)
use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use crate::keywords::fetcher::{KeywordSource, KeywordSourceError};
use crate::keywords::models::{KeywordCandidate, Seed};

const API_BASE: &str = "https://api.dataforseo.com/v3";
const KEYWORD_IDEAS_PATH: &str = "/keywords_data/google_ads/keywords_for_keywords/live";
const RANKED_KEYWORDS_PATH: &str = "/dataforseo_labs/google/ranked_keywords/live";
const LANGUAGE: &str = "English";
const REQUEST_TIMEOUT_SECS: u64 = 60;
/// The ideas endpoint rejects larger seed batches.
pub const MAX_SEEDS_PER_REQUEST: usize = 20;

#[derive(Debug, Serialize)]
struct KeywordIdeasTask<'a> {
    keywords: Vec<&'a str>,
    location_name: &'a str,
    language_name: &'a str,
    sort_by: &'a str,
    limit: usize,
}

#[derive(Debug, Serialize)]
struct RankedKeywordsTask<'a> {
    target: &'a str,
    location_name: &'a str,
    language_name: &'a str,
    limit: usize,
}

#[derive(Debug, Deserialize)]
struct TaskResponse<R> {
    #[serde(default = "Vec::new")]
    tasks: Vec<Task<R>>,
}

#[derive(Debug, Deserialize)]
struct Task<R> {
    #[serde(default)]
    status_code: u32,
    #[serde(default)]
    status_message: String,
    result: Option<Vec<R>>,
}

/// One row of the keywords-for-keywords result.
#[derive(Debug, Deserialize)]
struct IdeaItem {
    keyword: Option<String>,
    search_volume: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RankedResult {
    items: Option<Vec<RankedItem>>,
}

#[derive(Debug, Deserialize)]
struct RankedItem {
    keyword_data: Option<KeywordData>,
}

#[derive(Debug, Deserialize)]
struct KeywordData {
    keyword: Option<String>,
    keyword_info: Option<KeywordInfo>,
}

#[derive(Debug, Deserialize)]
struct KeywordInfo {
    search_volume: Option<u64>,
}

/// DataForSEO API task status for success.
const TASK_OK: u32 = 20000;

#[derive(Clone)]
pub struct DataForSeoClient {
    client: Client,
    login: String,
    password: String,
    base_url: String,
}

impl DataForSeoClient {
    pub fn new(login: String, password: String) -> Result<Self, KeywordSourceError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            login,
            password,
            base_url: API_BASE.to_string(),
        })
    }

    /// POSTs a single task and returns the flattened `result` arrays of all tasks.
    async fn post_task<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        task: &B,
    ) -> Result<Vec<R>, KeywordSourceError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .basic_auth(&self.login, Some(&self.password))
            .json(&[task])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(KeywordSourceError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: TaskResponse<R> = serde_json::from_str(&body)?;
        collect_results(parsed)
    }
}

/// A task-level error with no results is surfaced; partial success is not.
fn collect_results<R>(response: TaskResponse<R>) -> Result<Vec<R>, KeywordSourceError> {
    let mut results = Vec::new();
    let mut first_error = None;

    for task in response.tasks {
        match task.result {
            Some(rows) => results.extend(rows),
            None if task.status_code != TASK_OK && first_error.is_none() => {
                first_error = Some(KeywordSourceError::Api {
                    status: u16::try_from(task.status_code / 100).unwrap_or(u16::MAX),
                    message: task.status_message,
                });
            }
            None => {}
        }
    }

    match first_error {
        Some(e) if results.is_empty() => Err(e),
        _ => Ok(results),
    }
}

fn idea_candidates(items: Vec<IdeaItem>) -> Vec<KeywordCandidate> {
    items
        .into_iter()
        .filter_map(|item| {
            let phrase = item.keyword?;
            Some(KeywordCandidate::idea(phrase, item.search_volume.unwrap_or(0)))
        })
        .collect()
}

fn ranked_candidates(results: Vec<RankedResult>) -> Vec<KeywordCandidate> {
    results
        .into_iter()
        .flat_map(|r| r.items.unwrap_or_default())
        .filter_map(|item| {
            let data = item.keyword_data?;
            let phrase = data.keyword?;
            let volume = data.keyword_info.and_then(|i| i.search_volume).unwrap_or(0);
            Some(KeywordCandidate::ranked(phrase, volume))
        })
        .collect()
}

#[async_trait]
impl KeywordSource for DataForSeoClient {
    async fn keyword_ideas(
        &self,
        seeds: &[Seed],
        region: &str,
        limit: usize,
    ) -> Result<Vec<KeywordCandidate>, KeywordSourceError> {
        let task = KeywordIdeasTask {
            keywords: seeds
                .iter()
                .take(MAX_SEEDS_PER_REQUEST)
                .map(|s| s.phrase.as_str())
                .collect(),
            location_name: region,
            language_name: LANGUAGE,
            sort_by: "search_volume",
            limit,
        };

        let items: Vec<IdeaItem> = self.post_task(KEYWORD_IDEAS_PATH, &task).await?;
        let candidates = idea_candidates(items);
        debug!("DataForSEO returned {} keyword ideas", candidates.len());
        Ok(candidates)
    }

    async fn ranked_keywords(
        &self,
        domain: &str,
        region: &str,
        limit: usize,
    ) -> Result<Vec<KeywordCandidate>, KeywordSourceError> {
        let task = RankedKeywordsTask {
            target: domain,
            location_name: region,
            language_name: LANGUAGE,
            limit,
        };

        let results: Vec<RankedResult> = self.post_task(RANKED_KEYWORDS_PATH, &task).await?;
        let candidates = ranked_candidates(results);
        debug!(
            "DataForSEO returned {} ranked keywords for {domain}",
            candidates.len()
        );
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::models::CandidateSource;

    #[test]
    fn test_parse_keyword_ideas_response() {
        let body = r#"{
            "tasks": [{
                "status_code": 20000,
                "status_message": "Ok.",
                "result": [
                    {"keyword": "house painter denver", "search_volume": 500},
                    {"keyword": "painter littleton", "search_volume": null},
                    {"keyword": null, "search_volume": 90}
                ]
            }]
        }"#;
        let parsed: TaskResponse<IdeaItem> = serde_json::from_str(body).unwrap();
        let candidates = idea_candidates(collect_results(parsed).unwrap());
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].monthly_volume, 500);
        assert_eq!(candidates[1].monthly_volume, 0);
        assert_eq!(candidates[0].source, CandidateSource::Ideas);
    }

    #[test]
    fn test_parse_ranked_keywords_response() {
        let body = r#"{
            "tasks": [{
                "status_code": 20000,
                "result": [{
                    "items": [
                        {"keyword_data": {"keyword": "denver house painter", "keyword_info": {"search_volume": 40}}},
                        {"keyword_data": {"keyword": "peak painting"}},
                        {"ranked_serp_element": {}}
                    ]
                }]
            }]
        }"#;
        let parsed: TaskResponse<RankedResult> = serde_json::from_str(body).unwrap();
        let candidates = ranked_candidates(collect_results(parsed).unwrap());
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].phrase, "denver house painter");
        assert_eq!(candidates[0].monthly_volume, 40);
        assert_eq!(candidates[1].monthly_volume, 0);
        assert_eq!(candidates[1].source, CandidateSource::Ranked);
    }

    #[test]
    fn test_task_error_without_results_is_an_error() {
        let body = r#"{
            "tasks": [{"status_code": 40501, "status_message": "Invalid Field", "result": null}]
        }"#;
        let parsed: TaskResponse<IdeaItem> = serde_json::from_str(body).unwrap();
        let err = collect_results(parsed).unwrap_err();
        assert!(matches!(err, KeywordSourceError::Api { status: 405, .. }));
    }

    #[test]
    fn test_missing_tasks_is_empty() {
        let parsed: TaskResponse<IdeaItem> = serde_json::from_str("{}").unwrap();
        assert!(collect_results(parsed).unwrap().is_empty());
    }
}
