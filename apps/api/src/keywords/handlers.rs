//! Axum route handlers for the Report API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::keywords::models::BusinessProfile;
use crate::keywords::pipeline::{generate_report, OpportunityReport, ReportInput};
use crate::keywords::region::{detect_region, extract_domain};
use crate::profile::extractor::{extract_profile, SitePage};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub profile: BusinessProfile,
    /// Either a bare domain or a URL; `domain` wins when both are given.
    pub domain: Option<String>,
    pub url: Option<String>,
    /// Provider location name. Derived from `profile.location` when absent.
    pub region: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PagesReportRequest {
    pub url: String,
    pub pages: Vec<SitePage>,
    pub region: Option<String>,
}

fn resolve_domain(domain: Option<&str>, url: Option<&str>) -> Result<String, AppError> {
    domain
        .or(url)
        .and_then(extract_domain)
        .ok_or_else(|| AppError::Validation("a valid domain or url is required".to_string()))
}

fn build_input(profile: BusinessProfile, domain: String, region: Option<String>) -> ReportInput {
    let region = region
        .filter(|r| !r.trim().is_empty())
        .unwrap_or_else(|| detect_region(&profile.location));
    ReportInput {
        profile,
        domain,
        region,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/reports
///
/// Runs the ranking engine for an already-extracted business profile.
pub async fn handle_generate_report(
    State(state): State<AppState>,
    Json(request): Json<ReportRequest>,
) -> Result<Json<OpportunityReport>, AppError> {
    if request.profile.industry.trim().is_empty() {
        return Err(AppError::Validation("profile.industry cannot be empty".to_string()));
    }
    let domain = resolve_domain(request.domain.as_deref(), request.url.as_deref())?;
    let input = build_input(request.profile, domain, request.region);

    let report = generate_report(state.keyword_source.as_ref(), input, &state.engine).await?;
    Ok(Json(report))
}

/// POST /api/v1/reports/from-pages
///
/// Extracts the business profile from caller-supplied page text, then runs
/// the ranking engine against the site's domain.
pub async fn handle_generate_report_from_pages(
    State(state): State<AppState>,
    Json(request): Json<PagesReportRequest>,
) -> Result<Json<OpportunityReport>, AppError> {
    let domain = resolve_domain(None, Some(&request.url))?;
    let profile = extract_profile(&request.pages, &state.llm).await?;
    let input = build_input(profile, domain, request.region);

    let report = generate_report(state.keyword_source.as_ref(), input, &state.engine).await?;
    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(location: &str) -> BusinessProfile {
        BusinessProfile {
            business_name: "Peak Painting".to_string(),
            industry: "painting".to_string(),
            location: location.to_string(),
            services: vec![],
            service_area_cities: vec![],
        }
    }

    #[test]
    fn test_resolve_domain_prefers_domain_field() {
        let domain = resolve_domain(Some("peak.com"), Some("https://other.com")).unwrap();
        assert_eq!(domain, "peak.com");
    }

    #[test]
    fn test_resolve_domain_from_url() {
        let domain = resolve_domain(None, Some("https://www.peak.com/about")).unwrap();
        assert_eq!(domain, "peak.com");
    }

    #[test]
    fn test_resolve_domain_missing_is_validation_error() {
        assert!(matches!(
            resolve_domain(None, None),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_region_derived_from_location() {
        let input = build_input(profile("Denver, CO"), "peak.com".to_string(), None);
        assert_eq!(input.region, "Colorado,United States");
    }

    #[test]
    fn test_explicit_region_used_verbatim() {
        let input = build_input(
            profile("Denver, CO"),
            "peak.com".to_string(),
            Some("United States".to_string()),
        );
        assert_eq!(input.region, "United States");
    }
}
