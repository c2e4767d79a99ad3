//! FruityVice data model.
//!
//! Field names and declaration order follow the FruityVice JSON schema, which
//! keeps the machine-readable rendering byte-compatible with the API.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Write integral values without a fractional part (`22`, not `22.0`), as
/// FruityVice does.
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53

    if value.is_finite() && value.fract() == 0.0 && value.abs() <= EXACT_INTEGER_LIMIT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Nutrition facts per 100g
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    #[serde(default)]
    pub calories: Option<u32>,
    #[serde(serialize_with = "serialize_number")]
    pub fat: f64,
    #[serde(serialize_with = "serialize_number")]
    pub sugar: f64,
    #[serde(serialize_with = "serialize_number")]
    pub carbohydrates: f64,
    #[serde(serialize_with = "serialize_number")]
    pub protein: f64,
}

/// A fruit record with its taxonomy and nutrition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fruit {
    pub name: String,
    pub id: u32,
    pub family: String,
    pub order: String,
    pub genus: String,
    #[serde(rename = "nutritions")]
    pub nutrition: Nutrition,
}

impl Fruit {
    /// Human-readable summary: name, id, family, sugar and carbohydrates.
    pub fn to_user_string(&self) -> String {
        format!(
            "Name: {}\nID: {}\nFamily: {}\nSugar: {}g\nCarbohydrates: {}g\n",
            self.name, self.id, self.family, self.nutrition.sugar, self.nutrition.carbohydrates
        )
    }

    /// Compact JSON with every field.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Fruit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_user_string())
    }
}
