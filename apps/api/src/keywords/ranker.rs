//! Diversity Ranker — semantic dedup, volume sort, per-city cap.
//!
//! Order matters: dedup runs before the cap, otherwise two spellings of the
//! same intent would each consume a slot for their city.

use std::collections::HashMap;

use crate::keywords::filter::LocatedCandidate;
use crate::keywords::intent::{normalize, KnownCities, NormalizedIntent};
use crate::keywords::models::OpportunityKeyword;

/// Keeps the highest-volume candidate per intent. Equal volumes keep the
/// first one seen. Empty intents (city-only phrases) are dropped outright.
pub fn dedup_by_intent(
    candidates: &[LocatedCandidate],
    known_cities: &KnownCities,
) -> Vec<LocatedCandidate> {
    let mut slots: HashMap<NormalizedIntent, usize> = HashMap::new();
    let mut kept: Vec<LocatedCandidate> = Vec::new();

    for candidate in candidates {
        let intent = normalize(&candidate.phrase, known_cities);
        if intent.is_empty() {
            continue;
        }
        match slots.get(&intent) {
            Some(&slot) => {
                if candidate.monthly_volume > kept[slot].monthly_volume {
                    kept[slot] = candidate.clone();
                }
            }
            None => {
                slots.insert(intent, kept.len());
                kept.push(candidate.clone());
            }
        }
    }

    kept
}

/// Selects up to `target_count` opportunities by descending volume, skipping
/// any candidate whose city already holds `city_cap` slots.
pub fn rank(
    candidates: &[LocatedCandidate],
    known_cities: &KnownCities,
    city_cap: usize,
    target_count: usize,
) -> Vec<OpportunityKeyword> {
    let mut deduped = dedup_by_intent(candidates, known_cities);
    // sort_by is stable, so equal volumes stay in first-seen order.
    deduped.sort_by(|a, b| b.monthly_volume.cmp(&a.monthly_volume));

    let mut per_city: HashMap<String, usize> = HashMap::new();
    let mut selected = Vec::with_capacity(target_count);

    for candidate in deduped {
        if selected.len() >= target_count {
            break;
        }
        let used = per_city.entry(candidate.city.to_lowercase()).or_insert(0);
        if *used >= city_cap {
            continue;
        }
        *used += 1;
        selected.push(OpportunityKeyword {
            phrase: candidate.phrase,
            monthly_volume: candidate.monthly_volume,
            city: candidate.city,
            old_site_present: false,
        });
    }

    selected
}
