//! Supported Countries
//!
//! Closed set of billable countries. Validated at the data layer, not just
//! by the selection control, so a directly constructed address cannot slip
//! an arbitrary value through.

/// Countries available in the billing address selector
pub const SUPPORTED_COUNTRIES: &[&str] = &[
    "Pakistan",
    "United States",
    "United Kingdom",
    "Canada",
    "Australia",
    "India",
    "Germany",
    "France",
    "UAE",
    "Saudi Arabia",
];

/// Check whether a country is in the supported set (exact match, trimmed)
pub fn is_supported(country: &str) -> bool {
    let country = country.trim();
    SUPPORTED_COUNTRIES.iter().any(|c| *c == country)
}
