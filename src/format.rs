//! Output renderings of a fruit record.

use crate::error::{FruityError, Result};
use crate::fruit::Fruit;
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human readable summary: name, id, family, sugar and carbohydrates
    #[default]
    User,
    /// Compact JSON with every field
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => f.write_str("user"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = FruityError;

    /// Accepts `user`/`json` in any case, plus the short tags `us`, `g` and `js`.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "user" | "us" | "g" => Ok(Self::User),
            "json" | "js" => Ok(Self::Json),
            _ => Err(FruityError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Render `fruit` in the requested format.
pub fn format_fruit(fruit: &Fruit, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::User => Ok(fruit.to_user_string()),
        OutputFormat::Json => Ok(fruit.to_json_string()?),
    }
}
