//! Static inputs for the ranking engine.
//!
//! Everything here is passed into the engine explicitly via `EngineConfig`,
//! so tests build their own fixtures instead of touching shared state.

use std::collections::HashMap;

pub const DEFAULT_CITY_CAP: usize = 3;
pub const DEFAULT_TARGET_COUNT: usize = 10;
pub const DEFAULT_SEED_CAP: usize = 20;
pub const IDEAS_LIMIT: usize = 200;
pub const RANKED_LIMIT: usize = 1000;

/// Brand names that must never surface as an opportunity.
const BRAND_BLOCKLIST: &[&str] = &[
    "benjamin moore", "sherwin williams", "sherwin-williams", "behr",
    "valspar", "ppg", "dulux", "farrow", "rust-oleum", "rustoleum",
    "home depot", "lowes", "lowe's", "menards", "ace hardware",
    "angi", "angie", "thumbtack", "yelp", "houzz", "nextdoor",
    "trane", "carrier", "lennox", "goodman", "rheem", "daikin",
    "kohler", "moen", "delta faucet",
    "scotts", "trugreen", "john deere",
    "orkin", "terminix", "rentokil",
];

/// Words that mark a phrase as service-seeking regardless of industry.
const SERVICE_SIGNALS: &[&str] = &[
    "service", "services", "contractor", "company", "repair",
    "install", "installation", "removal", "maintenance",
    "cost", "price", "quote", "estimate", "emergency",
    "residential", "commercial", "licensed", "professional",
];

/// Per-industry service terms. Used both as seed templates and as a source of relevance words.
const INDUSTRY_TERMS: &[(&str, &[&str])] = &[
    (
        "plumbing",
        &[
            "plumber", "plumbing services", "drain cleaning",
            "water heater repair", "leak repair", "emergency plumber",
            "pipe repair", "sewer repair", "toilet repair",
        ],
    ),
    (
        "hvac",
        &[
            "hvac repair", "air conditioning repair", "ac repair",
            "furnace repair", "heating repair", "ac installation",
            "hvac company", "heat pump installation", "duct cleaning",
        ],
    ),
    (
        "roofing",
        &[
            "roofing contractor", "roof repair", "roofer",
            "roof replacement", "roof inspection", "roof leak repair",
            "shingle repair", "metal roofing", "emergency roof repair",
        ],
    ),
    (
        "electrical",
        &[
            "electrician", "electrical contractor", "electrical repair",
            "outlet installation", "lighting installation",
            "panel upgrade", "emergency electrician", "wiring repair",
        ],
    ),
    (
        "painting",
        &[
            "painter", "house painter", "painting contractor",
            "interior painting", "exterior painting", "house painting",
            "residential painter", "commercial painter",
            "cabinet painting", "deck staining",
        ],
    ),
    (
        "landscaping",
        &[
            "landscaping company", "landscaper", "lawn care service",
            "tree trimming", "tree removal", "landscape design",
            "lawn mowing service", "irrigation installation",
        ],
    ),
    (
        "cleaning",
        &[
            "house cleaning service", "cleaning service", "maid service",
            "deep cleaning", "office cleaning", "commercial cleaning",
            "carpet cleaning", "move out cleaning",
        ],
    ),
    (
        "pest_control",
        &[
            "pest control", "exterminator", "termite treatment",
            "bed bug treatment", "rodent control", "ant exterminator",
            "mosquito control", "wildlife removal",
        ],
    ),
];

/// Lookup key for an industry: lowercase, spaces as underscores.
pub fn industry_key(industry: &str) -> String {
    industry.trim().to_lowercase().replace(' ', "_")
}

/// Human form of an industry for use inside search phrases.
pub fn industry_label(industry: &str) -> String {
    industry.trim().to_lowercase().replace('_', " ")
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub brand_blocklist: Vec<String>,
    pub service_signals: Vec<String>,
    /// Keyed by `industry_key`.
    pub industry_terms: HashMap<String, Vec<String>>,
    pub city_cap: usize,
    pub target_count: usize,
    pub seed_cap: usize,
    pub ideas_limit: usize,
    pub ranked_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            brand_blocklist: to_strings(BRAND_BLOCKLIST),
            service_signals: to_strings(SERVICE_SIGNALS),
            industry_terms: INDUSTRY_TERMS
                .iter()
                .map(|(industry, terms)| (industry.to_string(), to_strings(terms)))
                .collect(),
            city_cap: DEFAULT_CITY_CAP,
            target_count: DEFAULT_TARGET_COUNT,
            seed_cap: DEFAULT_SEED_CAP,
            ideas_limit: IDEAS_LIMIT,
            ranked_limit: RANKED_LIMIT,
        }
    }
}

impl EngineConfig {
    /// Seed terms configured for the industry, or an empty slice for free-text industries.
    pub fn terms_for(&self, industry: &str) -> &[String] {
        self.industry_terms
            .get(&industry_key(industry))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
