//! Guard against names that FruityVice routes as sub-resources.
//!
//! `GET /api/fruit/all` or `/api/fruit/sugar` return lists or filter results
//! rather than a single fruit, so these are rejected before any request.

const RESERVED_KEYWORDS: [&str; 10] = [
    "all",
    "family",
    "genus",
    "order",
    "nutritions",
    "carbohydrates",
    "protein",
    "fat",
    "calories",
    "sugar",
];

/// Case-insensitive exact match against the reserved path segments.
pub fn is_reserved_keyword(name: &str) -> bool {
    RESERVED_KEYWORDS
        .iter()
        .any(|keyword| keyword.eq_ignore_ascii_case(name))
}
