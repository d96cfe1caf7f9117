//! Report Pipeline — one end-to-end run of the ranking engine.
//!
//! seeds → fetch (ideas ∥ ranked) → filter → rank → annotate → summarize.
//! Everything after the fetch is pure; only the ideas lookup can fail the run.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::keywords::config::EngineConfig;
use crate::keywords::cross_ref::annotate;
use crate::keywords::fetcher::{fetch_candidates, KeywordSource};
use crate::keywords::filter::{filter_candidates, CandidateFilter};
use crate::keywords::intent::KnownCities;
use crate::keywords::models::{BusinessProfile, OpportunityKeyword};
use crate::keywords::ranker::rank;
use crate::keywords::seeds::generate_seeds;

/// Inputs for one report run.
#[derive(Debug, Clone)]
pub struct ReportInput {
    pub profile: BusinessProfile,
    /// Domain of the existing site, used for the ranked-keyword lookup.
    pub domain: String,
    /// Provider location name, e.g. "Colorado,United States".
    pub region: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpportunityReport {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub business_name: String,
    pub industry: String,
    pub domain: String,
    pub region: String,
    pub opportunities: Vec<OpportunityKeyword>,
    /// Sum of monthly volume across the opportunities.
    pub total_impressions: u64,
    /// Opportunities the existing site already ranks for.
    pub old_site_keywords: usize,
    pub new_site_keywords: usize,
    pub ranked_keywords_checked: usize,
}

impl OpportunityReport {
    fn new(input: ReportInput, opportunities: Vec<OpportunityKeyword>, ranked_checked: usize) -> Self {
        let total_impressions = opportunities
            .iter()
            .fold(0u64, |acc, o| acc.saturating_add(o.monthly_volume));
        let old_site_keywords = opportunities.iter().filter(|o| o.old_site_present).count();
        let new_site_keywords = opportunities.len();

        Self {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            business_name: input.profile.business_name,
            industry: input.profile.industry,
            domain: input.domain,
            region: input.region,
            opportunities,
            total_impressions,
            old_site_keywords,
            new_site_keywords,
            ranked_keywords_checked: ranked_checked,
        }
    }
}

/// Runs the full engine for one business.
///
/// Returns `AppError::Validation` when the profile names no usable city and
/// `AppError::KeywordIdeas` when the ideas lookup fails. Zero surviving
/// candidates is a valid, empty report.
pub async fn generate_report(
    source: &dyn KeywordSource,
    input: ReportInput,
    config: &EngineConfig,
) -> Result<OpportunityReport, AppError> {
    let cities = KnownCities::new(&input.profile.city_list());
    if cities.is_empty() {
        return Err(AppError::Validation(
            "profile must name at least one city (location or service_area_cities)".to_string(),
        ));
    }

    let seeds = generate_seeds(&input.profile, config);
    let seeded_cities: HashSet<&str> = seeds.iter().map(|s| s.city.as_str()).collect();
    info!(
        "Generated {} seeds covering {} of {} cities for {}",
        seeds.len(),
        seeded_cities.len(),
        cities.names().len(),
        input.profile.business_name
    );

    let pool = fetch_candidates(source, &seeds, &input.domain, &input.region, config).await?;

    let filter = CandidateFilter::for_industry(
        config,
        &input.profile.industry,
        &input.profile.services,
        &cities,
    );
    let survivors = filter_candidates(&pool.ideas, &filter);
    info!(
        "{} of {} keyword ideas survived relevance, brand, and city filtering",
        survivors.len(),
        pool.ideas.len()
    );

    let ranked = rank(&survivors, &cities, config.city_cap, config.target_count);
    let opportunities = annotate(ranked, &pool.ranked, &cities);

    let report = OpportunityReport::new(input, opportunities, pool.ranked.len());
    info!(
        "Report {}: {} opportunities, {} already ranking, {} monthly impressions",
        report.report_id,
        report.new_site_keywords,
        report.old_site_keywords,
        report.total_impressions
    );

    Ok(report)
}
