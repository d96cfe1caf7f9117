//! Location targeting and domain helpers for the keyword lookups.

use url::Url;

const DEFAULT_REGION: &str = "United States";

/// Substrings of a location that pin it to a non-US market.
const INTERNATIONAL: &[(&str, &str)] = &[
    ("australia", "Australia"),
    ("sydney", "Australia"),
    ("melbourne", "Australia"),
    ("brisbane", "Australia"),
    ("perth", "Australia"),
    ("adelaide", "Australia"),
    ("united kingdom", "United Kingdom"),
    ("london", "United Kingdom"),
    ("england", "United Kingdom"),
    ("canada", "Canada"),
    ("toronto", "Canada"),
    ("vancouver", "Canada"),
    ("new zealand", "New Zealand"),
    ("auckland", "New Zealand"),
];

const US_STATES: &[(&str, &str)] = &[
    ("AL", "Alabama"), ("AK", "Alaska"), ("AZ", "Arizona"), ("AR", "Arkansas"),
    ("CA", "California"), ("CO", "Colorado"), ("CT", "Connecticut"), ("DE", "Delaware"),
    ("FL", "Florida"), ("GA", "Georgia"), ("HI", "Hawaii"), ("ID", "Idaho"),
    ("IL", "Illinois"), ("IN", "Indiana"), ("IA", "Iowa"), ("KS", "Kansas"),
    ("KY", "Kentucky"), ("LA", "Louisiana"), ("ME", "Maine"), ("MD", "Maryland"),
    ("MA", "Massachusetts"), ("MI", "Michigan"), ("MN", "Minnesota"), ("MS", "Mississippi"),
    ("MO", "Missouri"), ("MT", "Montana"), ("NE", "Nebraska"), ("NV", "Nevada"),
    ("NH", "New Hampshire"), ("NJ", "New Jersey"), ("NM", "New Mexico"), ("NY", "New York"),
    ("NC", "North Carolina"), ("ND", "North Dakota"), ("OH", "Ohio"), ("OK", "Oklahoma"),
    ("OR", "Oregon"), ("PA", "Pennsylvania"), ("RI", "Rhode Island"), ("SC", "South Carolina"),
    ("SD", "South Dakota"), ("TN", "Tennessee"), ("TX", "Texas"), ("UT", "Utah"),
    ("VT", "Vermont"), ("VA", "Virginia"), ("WA", "Washington"), ("WV", "West Virginia"),
    ("WI", "Wisconsin"), ("WY", "Wyoming"),
];

/// Picks the provider location name for a "City, ST" style location.
///
/// International markets are matched first; "Austin, TX" resolves to
/// state-level targeting ("Texas,United States"); anything else falls back
/// to the whole US.
pub fn detect_region(location: &str) -> String {
    let lower = location.to_lowercase();
    let words: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    if words.iter().any(|w| *w == "uk") {
        return "United Kingdom".to_string();
    }
    if let Some((_, country)) = INTERNATIONAL.iter().find(|(needle, _)| lower.contains(needle)) {
        return country.to_string();
    }

    if let Some(abbrev) = state_abbreviation(location) {
        if let Some((_, state)) = US_STATES.iter().find(|(code, _)| *code == abbrev) {
            return format!("{state},United States");
        }
    }

    DEFAULT_REGION.to_string()
}

/// The two-letter uppercase code following the first comma, if any.
fn state_abbreviation(location: &str) -> Option<&str> {
    let (_, rest) = location.split_once(',')?;
    let code = rest.trim_start().get(..2)?;
    let boundary = rest.trim_start()[2..]
        .chars()
        .next()
        .map_or(true, |c| !c.is_alphanumeric());
    (code.chars().all(|c| c.is_ascii_uppercase()) && boundary).then_some(code)
}

/// Host of a URL without "www.", lowercased. Bare domains are accepted too.
pub fn extract_domain(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let url = Url::parse(&with_scheme).ok()?;
    let host = url.host_str()?.to_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host).to_string();
    (!host.is_empty()).then_some(host)
}
