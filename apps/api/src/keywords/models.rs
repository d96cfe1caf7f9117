use serde::{Deserialize, Serialize};

/// Maximum number of service-area cities a profile carries.
pub const MAX_SERVICE_AREA_CITIES: usize = 8;

/// Structured description of the prospect's business.
/// Produced once by the profile extractor (or supplied by the caller) and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub business_name: String,
    pub industry: String,
    /// "City, ST" for US locations.
    pub location: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub service_area_cities: Vec<String>,
}

impl BusinessProfile {
    /// The city part of `location` ("Castle Rock, CO" → "Castle Rock").
    pub fn primary_city(&self) -> &str {
        self.location.split(',').next().unwrap_or("").trim()
    }

    /// Primary city followed by the service-area cities, de-duplicated
    /// case-insensitively in order. Only the first `MAX_SERVICE_AREA_CITIES`
    /// service-area entries are read; the primary city never displaces one.
    pub fn city_list(&self) -> Vec<String> {
        let mut cities: Vec<String> = Vec::new();
        let candidates = std::iter::once(self.primary_city()).chain(
            self.service_area_cities
                .iter()
                .take(MAX_SERVICE_AREA_CITIES)
                .map(|c| c.trim()),
        );

        for city in candidates {
            if city.is_empty() || city.eq_ignore_ascii_case("unknown") {
                continue;
            }
            if cities.iter().any(|c| c.eq_ignore_ascii_case(city)) {
                continue;
            }
            cities.push(city.to_string());
        }

        cities
    }
}

/// Which external lookup produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSource {
    Ideas,
    Ranked,
}

/// A raw (phrase, volume) pair as returned by the keyword data provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordCandidate {
    pub phrase: String,
    pub monthly_volume: u64,
    pub source: CandidateSource,
}

impl KeywordCandidate {
    pub fn new(phrase: impl Into<String>, monthly_volume: u64, source: CandidateSource) -> Self {
        Self {
            phrase: phrase.into(),
            monthly_volume,
            source,
        }
    }

    pub fn idea(phrase: impl Into<String>, monthly_volume: u64) -> Self {
        Self::new(phrase, monthly_volume, CandidateSource::Ideas)
    }

    pub fn ranked(phrase: impl Into<String>, monthly_volume: u64) -> Self {
        Self::new(phrase, monthly_volume, CandidateSource::Ranked)
    }
}

/// A search phrase sent to the keyword-ideas lookup, tagged with the city it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    pub phrase: String,
    pub city: String,
}

/// One line of the final report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpportunityKeyword {
    pub phrase: String,
    pub monthly_volume: u64,
    pub city: String,
    pub old_site_present: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(location: &str, cities: &[&str]) -> BusinessProfile {
        BusinessProfile {
            business_name: "Peak Painting".to_string(),
            industry: "painting".to_string(),
            location: location.to_string(),
            services: vec![],
            service_area_cities: cities.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_primary_city_strips_state() {
        assert_eq!(profile("Castle Rock, CO", &[]).primary_city(), "Castle Rock");
    }

    #[test]
    fn test_city_list_puts_primary_first_and_dedups() {
        let p = profile("Denver, CO", &["Littleton", "denver", "Parker", " "]);
        assert_eq!(p.city_list(), vec!["Denver", "Littleton", "Parker"]);
    }

    #[test]
    fn test_city_list_reads_at_most_eight_service_cities() {
        let many = ["A1", "A2", "A3", "A4", "A5", "A6", "A7", "A8", "A9"];
        let p = profile("Denver, CO", &many);
        let cities = p.city_list();
        assert_eq!(cities.len(), MAX_SERVICE_AREA_CITIES + 1);
        assert_eq!(cities[0], "Denver");
        assert_eq!(cities[8], "A8");
    }

    #[test]
    fn test_primary_city_does_not_displace_service_city() {
        let area = ["A1", "A2", "A3", "A4", "A5", "A6", "A7", "Brighton"];
        let p = profile("Denver, CO", &area);
        let cities = p.city_list();
        assert_eq!(cities.len(), 9);
        assert_eq!(cities.last().map(String::as_str), Some("Brighton"));
    }

    #[test]
    fn test_city_list_skips_unknown_location() {
        let p = profile("Unknown", &["Parker"]);
        assert_eq!(p.city_list(), vec!["Parker"]);
    }

    #[test]
    fn test_profile_deserializes_without_optional_lists() {
        let json = r#"{"business_name":"X","industry":"hvac","location":"Austin, TX"}"#;
        let p: BusinessProfile = serde_json::from_str(json).unwrap();
        assert!(p.services.is_empty());
        assert!(p.service_area_cities.is_empty());
    }
}
