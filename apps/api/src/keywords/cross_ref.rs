//! Old-Site Cross-Referencer — flags opportunities the existing domain already ranks for.

use std::collections::HashSet;

use crate::keywords::intent::{normalize, KnownCities, NormalizedIntent};
use crate::keywords::models::{KeywordCandidate, OpportunityKeyword};

/// Intents and raw phrases the existing domain ranks for.
#[derive(Debug, Clone, Default)]
pub struct RankedKeywordSet {
    intents: HashSet<NormalizedIntent>,
    phrases: HashSet<String>,
}

impl RankedKeywordSet {
    pub fn from_candidates(ranked: &[KeywordCandidate], known_cities: &KnownCities) -> Self {
        let mut set = Self::default();
        for candidate in ranked {
            let phrase = candidate.phrase.trim().to_lowercase();
            if phrase.is_empty() {
                continue;
            }
            let intent = normalize(&phrase, known_cities);
            if !intent.is_empty() {
                set.intents.insert(intent);
            }
            set.phrases.insert(phrase);
        }
        set
    }

    /// Nothing to match against: the lookup failed or the domain ranks for nothing.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Intent match first; exact phrase match as fallback.
    pub fn contains(&self, phrase: &str, known_cities: &KnownCities) -> bool {
        let intent = normalize(phrase, known_cities);
        if !intent.is_empty() && self.intents.contains(&intent) {
            return true;
        }
        self.phrases.contains(&phrase.trim().to_lowercase())
    }
}

/// Sets `old_site_present` on every opportunity. An empty ranked input
/// reads as "ranks for nothing" and forces every flag to false.
pub fn annotate(
    opportunities: Vec<OpportunityKeyword>,
    ranked: &[KeywordCandidate],
    known_cities: &KnownCities,
) -> Vec<OpportunityKeyword> {
    let ranked_set = RankedKeywordSet::from_candidates(ranked, known_cities);

    opportunities
        .into_iter()
        .map(|mut opportunity| {
            opportunity.old_site_present =
                !ranked_set.is_empty() && ranked_set.contains(&opportunity.phrase, known_cities);
            opportunity
        })
        .collect()
}
