//! Seed Generator — expands a business profile into location-anchored search phrases.
//!
//! Every seed is "{service phrase} {city}". Two shapes are never produced:
//! a bare "{industry} {city}" (generic nouns pull in unrelated results) and
//! anything containing "near me" (national results with no local anchor).

use crate::keywords::config::{industry_label, EngineConfig};
use crate::keywords::models::{BusinessProfile, Seed};

/// Only the first few extracted services become templates.
const MAX_PROFILE_SERVICES: usize = 5;

/// Builds the ordered, de-duplicated list of service templates (without a city).
fn build_templates(profile: &BusinessProfile, config: &EngineConfig) -> Vec<String> {
    let industry = industry_label(&profile.industry);
    let mut templates: Vec<String> = Vec::new();

    if !industry.is_empty() {
        templates.push(format!("{industry} services"));
        templates.push(format!("{industry} contractor"));
        templates.push(format!("{industry} company"));
    }

    templates.extend(config.terms_for(&profile.industry).iter().cloned());

    templates.extend(
        profile
            .services
            .iter()
            .take(MAX_PROFILE_SERVICES)
            .map(|s| s.trim().to_string()),
    );

    let mut unique: Vec<String> = Vec::with_capacity(templates.len());
    for template in templates {
        let lower = template.to_lowercase();
        if lower.is_empty() || lower == industry || lower.contains("near me") {
            continue;
        }
        if unique.iter().any(|t| t.to_lowercase() == lower) {
            continue;
        }
        unique.push(template);
    }
    unique
}

/// Generates up to `config.seed_cap` seeds, assigning cities round-robin
/// across templates so no city gets a disproportionate share.
pub fn generate_seeds(profile: &BusinessProfile, config: &EngineConfig) -> Vec<Seed> {
    let cities = profile.city_list();
    if cities.is_empty() {
        return Vec::new();
    }

    build_templates(profile, config)
        .into_iter()
        .take(config.seed_cap)
        .enumerate()
        .map(|(i, template)| {
            let city = &cities[i % cities.len()];
            Seed {
                phrase: format!("{template} {city}"),
                city: city.clone(),
            }
        })
        .collect()
}
