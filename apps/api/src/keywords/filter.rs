//! Relevance & Brand Filter.
//!
//! A candidate survives only when it is (a) free of blocklisted brands,
//! (b) service-relevant for the industry, and (c) anchored to a known city.

use crate::keywords::config::EngineConfig;
use crate::keywords::intent::{tokenize, KnownCities};
use crate::keywords::models::KeywordCandidate;

/// Words this short carry no service meaning ("ac" is covered by the full terms).
const MIN_TERM_LEN: usize = 3;

/// A candidate that passed the filter, together with the city it mentions.
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedCandidate {
    pub phrase: String,
    pub monthly_volume: u64,
    pub city: String,
}

/// Filter inputs resolved for one run.
#[derive(Debug, Clone)]
pub struct CandidateFilter<'a> {
    /// Brand names with separators removed ("sherwin-williams" → "sherwinwilliams").
    brands: Vec<String>,
    relevance_terms: Vec<String>,
    cities: &'a KnownCities,
}

impl<'a> CandidateFilter<'a> {
    pub fn new(
        brand_blocklist: &[String],
        relevance_terms: Vec<String>,
        cities: &'a KnownCities,
    ) -> Self {
        let brands = brand_blocklist
            .iter()
            .map(|b| tokenize(b).concat())
            .filter(|b| !b.is_empty())
            .collect();
        Self {
            brands,
            relevance_terms,
            cities,
        }
    }

    /// Builds the filter for an industry: base service signals, plus every
    /// meaningful word from the industry's seed terms and the profile's services.
    pub fn for_industry(
        config: &EngineConfig,
        industry: &str,
        services: &[String],
        cities: &'a KnownCities,
    ) -> Self {
        let mut terms: Vec<String> = config
            .service_signals
            .iter()
            .map(|s| s.to_lowercase())
            .collect();

        let words = config
            .terms_for(industry)
            .iter()
            .chain(services.iter())
            .flat_map(|phrase| tokenize(phrase));

        for word in words {
            let stopword = matches!(word.as_str(), "the" | "and" | "for" | "near");
            if word.len() >= MIN_TERM_LEN && !stopword && !terms.contains(&word) {
                terms.push(word);
            }
        }

        Self::new(&config.brand_blocklist, terms, cities)
    }

    /// Brand match over the phrase with separators removed. A match starts at
    /// a word start and ends at a word end, optionally after a plural or
    /// possessive "s": "angi" blocks "angis plumbers" but not "hanging", and
    /// "lowes" does not block "lowest".
    pub fn is_blocked_brand(&self, phrase: &str) -> bool {
        let tokens = tokenize(phrase);
        let joined = tokens.concat();

        // Byte offsets where a word starts or ends in `joined`.
        let mut boundaries = Vec::with_capacity(tokens.len() + 1);
        let mut offset = 0;
        boundaries.push(offset);
        for token in &tokens {
            offset += token.len();
            boundaries.push(offset);
        }
        let is_boundary = |pos: usize| boundaries.binary_search(&pos).is_ok();

        self.brands.iter().any(|brand| {
            boundaries[..boundaries.len() - 1].iter().any(|&start| {
                if !joined[start..].starts_with(brand.as_str()) {
                    return false;
                }
                let end = start + brand.len();
                is_boundary(end) || (joined[end..].starts_with('s') && is_boundary(end + 1))
            })
        })
    }

    pub fn is_service_relevant(&self, phrase: &str) -> bool {
        let lower = phrase.to_lowercase();
        self.relevance_terms.iter().any(|term| lower.contains(term.as_str()))
    }

    /// Applies all three checks; returns the matched city for survivors.
    pub fn check(&self, candidate: &KeywordCandidate) -> Option<LocatedCandidate> {
        let phrase = candidate.phrase.trim();
        if phrase.is_empty() || self.is_blocked_brand(phrase) || !self.is_service_relevant(phrase)
        {
            return None;
        }
        let city = self.cities.find_city(phrase)?;
        Some(LocatedCandidate {
            phrase: phrase.to_lowercase(),
            monthly_volume: candidate.monthly_volume,
            city: city.to_string(),
        })
    }
}

/// Filters candidates, preserving input order.
pub fn filter_candidates(
    candidates: &[KeywordCandidate],
    filter: &CandidateFilter<'_>,
) -> Vec<LocatedCandidate> {
    candidates.iter().filter_map(|c| filter.check(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cities() -> KnownCities {
        KnownCities::new(&["Denver", "Littleton", "Parker"])
    }

    #[test]
    fn test_brand_phrase_dropped() {
        let c = cities();
        let filter = CandidateFilter::for_industry(&EngineConfig::default(), "painting", &[], &c);
        let candidates = vec![
            KeywordCandidate::idea("benjamin moore paint colors denver", 900),
            KeywordCandidate::idea("Sherwin-Williams painter Denver", 400),
            KeywordCandidate::idea("house painter denver", 500),
        ];
        let kept = filter_candidates(&candidates, &filter);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].phrase, "house painter denver");
    }

    #[test]
    fn test_brand_matching_respects_word_boundaries() {
        let c = cities();
        let filter = CandidateFilter::new(
            &["angi".to_string()],
            vec!["hanging".to_string(), "plumber".to_string()],
            &c,
        );
        assert!(!filter.is_blocked_brand("wallpaper hanging denver"));
        assert!(filter.is_blocked_brand("angi plumber denver"));
        assert!(filter.is_blocked_brand("ANGI plumber"));
    }

    #[test]
    fn test_brand_plural_and_joined_forms_dropped() {
        let c = cities();
        let filter = CandidateFilter::for_industry(&EngineConfig::default(), "painting", &[], &c);
        for phrase in [
            "angies list painter denver",
            "sherwinwilliams painter denver",
            "behrs paint contractor denver",
            "Benjamin-Moore's painter denver",
        ] {
            assert!(
                filter.check(&KeywordCandidate::idea(phrase, 100)).is_none(),
                "{phrase} should be blocked"
            );
        }
    }

    #[test]
    fn test_brand_prefix_of_ordinary_word_kept() {
        let c = cities();
        let filter = CandidateFilter::for_industry(&EngineConfig::default(), "painting", &[], &c);
        assert!(!filter.is_blocked_brand("lowest price painter denver"));
        assert!(!filter.is_blocked_brand("painting company denver"));
        assert!(filter
            .check(&KeywordCandidate::idea("lowest price painter denver", 100))
            .is_some());
    }

    #[test]
    fn test_every_default_brand_is_blocked() {
        let c = cities();
        let config = EngineConfig::default();
        let filter = CandidateFilter::for_industry(&config, "painting", &[], &c);
        for brand in &config.brand_blocklist {
            for phrase in [
                format!("{brand} painter denver"),
                format!("{brand}s painter denver"),
                format!("painter denver {}", brand.to_uppercase()),
            ] {
                assert!(
                    filter.check(&KeywordCandidate::idea(phrase.as_str(), 100)).is_none(),
                    "{phrase} should be blocked"
                );
            }
        }
    }

    #[test]
    fn test_irrelevant_phrase_dropped() {
        let c = cities();
        let filter = CandidateFilter::for_industry(&EngineConfig::default(), "painting", &[], &c);
        assert!(filter
            .check(&KeywordCandidate::idea("denver art museum", 5000))
            .is_none());
    }

    #[test]
    fn test_profile_services_extend_relevance() {
        let c = cities();
        let services = vec!["Drywall patching".to_string()];
        let filter =
            CandidateFilter::for_industry(&EngineConfig::default(), "painting", &services, &c);
        assert!(filter.is_service_relevant("drywall denver"));
    }

    #[test]
    fn test_unlocated_phrase_dropped() {
        let c = cities();
        let filter = CandidateFilter::for_industry(&EngineConfig::default(), "plumbing", &[], &c);
        assert!(filter
            .check(&KeywordCandidate::idea("emergency plumber near me", 8000))
            .is_none());
        assert!(filter
            .check(&KeywordCandidate::idea("emergency plumber boulder", 300))
            .is_none());
    }

    #[test]
    fn test_survivor_carries_city_and_lowercase_phrase() {
        let c = cities();
        let filter = CandidateFilter::for_industry(&EngineConfig::default(), "plumbing", &[], &c);
        let kept = filter
            .check(&KeywordCandidate::idea("Drain Cleaning LITTLETON", 70))
            .unwrap();
        assert_eq!(kept.phrase, "drain cleaning littleton");
        assert_eq!(kept.city, "Littleton");
        assert_eq!(kept.monthly_volume, 70);
    }

    #[test]
    fn test_empty_phrase_dropped() {
        let c = cities();
        let filter = CandidateFilter::for_industry(&EngineConfig::default(), "plumbing", &[], &c);
        assert!(filter.check(&KeywordCandidate::idea("   ", 10)).is_none());
    }
}
