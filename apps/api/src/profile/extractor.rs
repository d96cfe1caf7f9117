//! Profile Extractor — turns scraped page text into a `BusinessProfile`.
//!
//! Pages are supplied by the caller; crawling happens elsewhere.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::keywords::models::{BusinessProfile, MAX_SERVICE_AREA_CITIES};
use crate::llm_client::LlmClient;
use crate::profile::prompts::{PAGE_HEADER_TEMPLATE, PROFILE_EXTRACT_SYSTEM};

const MAX_PAGES: usize = 5;
const MAX_PAGE_CHARS: usize = 1500;

/// One scraped page of the prospect's site.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SitePage {
    pub url: String,
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub h1: Option<String>,
    #[serde(default)]
    pub text_content: String,
}

/// Model output. Every field is optional so a partial answer still yields a profile.
#[derive(Debug, Default, Deserialize)]
struct ExtractedProfile {
    business_name: Option<String>,
    industry: Option<String>,
    location: Option<String>,
    #[serde(default)]
    services: Vec<String>,
    #[serde(default)]
    service_area_cities: Vec<String>,
}

impl From<ExtractedProfile> for BusinessProfile {
    fn from(raw: ExtractedProfile) -> Self {
        let or_default = |value: Option<String>, default: &str| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        BusinessProfile {
            business_name: or_default(raw.business_name, "Unknown Business"),
            industry: or_default(raw.industry, "service"),
            location: or_default(raw.location, "Unknown"),
            services: raw
                .services
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            service_area_cities: raw
                .service_area_cities
                .into_iter()
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .take(MAX_SERVICE_AREA_CITIES)
                .collect(),
        }
    }
}

/// Renders up to five pages into the user prompt. The first page is labelled HOMEPAGE.
pub fn build_page_content(pages: &[SitePage]) -> String {
    let mut content = String::new();

    for (i, page) in pages.iter().take(MAX_PAGES).enumerate() {
        let label = if i == 0 {
            "HOMEPAGE".to_string()
        } else {
            format!("PAGE {} ({})", i + 1, page.url)
        };
        content.push_str(&PAGE_HEADER_TEMPLATE.replace("{label}", &label));

        let fields = [
            ("Title", page.title.as_deref()),
            ("H1", page.h1.as_deref()),
            ("Meta Description", page.meta_description.as_deref()),
        ];
        for (name, value) in fields {
            if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
                content.push_str(&format!("\n{name}: {value}"));
            }
        }

        if !page.text_content.trim().is_empty() {
            let text: String = page.text_content.chars().take(MAX_PAGE_CHARS).collect();
            content.push_str(&format!("\nContent:\n{text}"));
        }
        content.push('\n');
    }

    content
}

/// Extracts the business profile from page content via the LLM.
pub async fn extract_profile(
    pages: &[SitePage],
    llm: &LlmClient,
) -> Result<BusinessProfile, AppError> {
    if pages.is_empty() {
        return Err(AppError::Validation(
            "at least one page is required to extract a business profile".to_string(),
        ));
    }

    let prompt = build_page_content(pages);
    let extracted: ExtractedProfile = llm
        .call_json(&prompt, PROFILE_EXTRACT_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Business profile extraction failed: {e}")))?;

    let profile = BusinessProfile::from(extracted);
    info!(
        "Extracted profile: {} ({} in {}, {} service-area cities)",
        profile.business_name,
        profile.industry,
        profile.location,
        profile.service_area_cities.len()
    );

    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::parse_json_reply;

    fn page(url: &str, title: Option<&str>, text: &str) -> SitePage {
        SitePage {
            url: url.to_string(),
            title: title.map(str::to_string),
            text_content: text.to_string(),
            ..SitePage::default()
        }
    }

    #[test]
    fn test_page_content_labels_and_limits() {
        let pages: Vec<SitePage> = (0..7)
            .map(|i| page(&format!("https://peak.com/p{i}"), Some("Peak"), "x"))
            .collect();
        let content = build_page_content(&pages);
        assert!(content.contains("--- HOMEPAGE ---"));
        assert!(content.contains("--- PAGE 2 (https://peak.com/p1) ---"));
        assert!(content.contains("PAGE 5"));
        assert!(!content.contains("PAGE 6"));
    }

    #[test]
    fn test_page_text_truncated() {
        let long = "a".repeat(5000);
        let content = build_page_content(&[page("https://peak.com", None, &long)]);
        assert_eq!(content.matches('a').count(), MAX_PAGE_CHARS);
        assert!(!content.contains("Title:"));
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let raw: ExtractedProfile = parse_json_reply(r#"{"industry": "roofing"}"#).unwrap();
        let profile = BusinessProfile::from(raw);
        assert_eq!(profile.business_name, "Unknown Business");
        assert_eq!(profile.industry, "roofing");
        assert_eq!(profile.location, "Unknown");
        assert!(profile.services.is_empty());
    }

    #[test]
    fn test_service_area_trimmed_to_eight() {
        let reply = r#"Sure! {"business_name": "Peak", "industry": "painting",
            "location": "Denver, CO", "services": ["interior painting", " "],
            "service_area_cities": ["A","B","C","D","E","F","G","H","I","J"]}"#;
        let raw: ExtractedProfile = parse_json_reply(reply).unwrap();
        let profile = BusinessProfile::from(raw);
        assert_eq!(profile.service_area_cities.len(), MAX_SERVICE_AREA_CITIES);
        assert_eq!(profile.services, vec!["interior painting"]);
    }
}
