// LLM prompt constants for business profile extraction.

/// System prompt — local service business framing, JSON-only output.
pub const PROFILE_EXTRACT_SYSTEM: &str = r#"You are analyzing a LOCAL SERVICE BUSINESS website. These are businesses like plumbers, painters, roofers, electricians, etc. that serve customers in a specific geographic area.

Extract the following. Respond with JSON only, no other text.

Format:
{
  "business_name": "...",
  "industry": "...",
  "location": "City, ST",
  "services": ["service1", "service2", ...],
  "service_area_cities": ["City1", "City2", ...]
}

INDUSTRY must be one of: plumbing, hvac, roofing, electrical, painting, landscaping, cleaning, pest_control. If none fit, use a short descriptor.
IMPORTANT: These are SERVICE businesses. Painting = house painting, NOT art.

SERVICES: List 3-5 specific services (e.g., interior painting, deck staining).

LOCATION: Primary city in City, ST format (e.g., Castle Rock, CO).

SERVICE_AREA_CITIES: List ALL cities/towns mentioned on the site that this business serves. Look for 'Areas We Serve', 'Service Areas', city names in page URLs, location pages, etc. Include nearby major cities and suburbs. If the site doesn't list specific cities, infer 5-8 nearby cities/suburbs based on the primary location. These should be real cities within reasonable driving distance. Return at least 5 cities."#;

/// Header placed before each page block. Replace `{label}`.
pub const PAGE_HEADER_TEMPLATE: &str = "\n--- {label} ---";
