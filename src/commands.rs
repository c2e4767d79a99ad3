//! Command implementations for the fruity CLI.
//!
//! Handlers write rendered records (and inline "not in database" notices) to
//! any [`Write`] sink, so the binary can target stdout or a file and tests can
//! target a buffer. Diagnostics for skipped lookups are returned in a
//! [`Report`] and left to the caller.

use crate::api::FruitApi;
use crate::error::{LookupError, Result};
use crate::format::{OutputFormat, format_fruit};
use crate::fruit::Fruit;
use crate::transport::Transport;
use std::io::Write;

/// What a command wrote and what it had to skip.
#[derive(Debug, Default)]
pub struct Report {
    pub written: usize,
    pub not_found: Vec<String>,
    pub unavailable: Vec<(String, LookupError)>,
}

/// Look up each name and write it, or a not-found line, in input order.
pub async fn lookup<T: Transport, W: Write>(
    api: &FruitApi<T>,
    names: &[String],
    format: OutputFormat,
    out: &mut W,
) -> Result<Report> {
    let mut report = Report::default();

    for (name, result) in api.lookup_many(names).await {
        match result {
            Ok(fruit) => {
                write_fruit(&fruit, format, out)?;
                report.written += 1;
            }
            Err(e) if e.is_not_found() => {
                if let LookupError::MalformedPayload(detail) = &e {
                    tracing::warn!(name = %name, %detail, "treating undecodable response as not found");
                }
                writeln!(out, "{}", LookupError::NotFound(name.clone()))?;
                report.not_found.push(name);
            }
            Err(e) => {
                tracing::warn!(name = %name, error = %e, "skipping lookup");
                report.unavailable.push((name, e));
            }
        }
    }

    Ok(report)
}

/// Write every fruit of `family`.
pub async fn family<T: Transport, W: Write>(
    api: &FruitApi<T>,
    family: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<Report> {
    let fruits = api.fetch_family(family).await;
    write_fruits(&fruits, format, out)
}

/// Write the whole catalog.
pub async fn all<T: Transport, W: Write>(
    api: &FruitApi<T>,
    format: OutputFormat,
    out: &mut W,
) -> Result<Report> {
    let fruits = api.fetch_all().await;
    write_fruits(&fruits, format, out)
}

fn write_fruits<W: Write>(fruits: &[Fruit], format: OutputFormat, out: &mut W) -> Result<Report> {
    for fruit in fruits {
        write_fruit(fruit, format, out)?;
    }
    Ok(Report {
        written: fruits.len(),
        ..Report::default()
    })
}

fn write_fruit<W: Write>(fruit: &Fruit, format: OutputFormat, out: &mut W) -> Result<()> {
    // The user block already ends in a newline, leaving a blank separator line
    writeln!(out, "{}", format_fruit(fruit, format)?)?;
    Ok(())
}
