//! Decoding of FruityVice response bodies.
//!
//! A `null` or blank body means "nothing there" and decodes to `None` / an
//! empty list. A body that is present but cannot fill every required field is
//! an error, which the lookup service reports as a malformed payload.

use crate::fruit::Fruit;

fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}

/// Decode a single-fruit response.
pub fn fruit(body: &[u8]) -> serde_json::Result<Option<Fruit>> {
    if is_blank(body) {
        return Ok(None);
    }
    serde_json::from_slice(body)
}

/// Decode a list response (`/all`, `/family/<name>`).
pub fn fruits(body: &[u8]) -> serde_json::Result<Vec<Fruit>> {
    if is_blank(body) {
        return Ok(Vec::new());
    }
    let fruits: Option<Vec<Fruit>> = serde_json::from_slice(body)?;
    Ok(fruits.unwrap_or_default())
}
