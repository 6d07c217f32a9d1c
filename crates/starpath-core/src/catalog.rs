//! Star catalogue parsing
//!
//! Turns comma separated catalogue text into [`StarRecord`]s, or straight
//! into a [`Galaxy`] with [`load_catalog`]. Attribute validation is done by
//! [`Galaxy::add_star`].

use crate::error::{Error, Result};
use crate::galaxy::Galaxy;
use crate::star::StarRecord;
use serde::{Deserialize, Serialize};

/// Which columns of the catalogue hold which attribute (0-based)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogLayout {
    /// Skip the first non-blank line
    #[serde(default = "default_has_header")]
    pub has_header: bool,

    #[serde(default = "default_name_column")]
    pub name: usize,

    #[serde(default = "default_distance_column")]
    pub distance: usize,

    #[serde(default = "default_mass_column")]
    pub mass: usize,

    #[serde(default = "default_radius_column")]
    pub radius: usize,
}

fn default_has_header() -> bool {
    true
}

fn default_name_column() -> usize {
    2
}

fn default_distance_column() -> usize {
    3
}

fn default_mass_column() -> usize {
    4
}

fn default_radius_column() -> usize {
    5
}

impl Default for CatalogLayout {
    fn default() -> Self {
        Self {
            has_header: default_has_header(),
            name: default_name_column(),
            distance: default_distance_column(),
            mass: default_mass_column(),
            radius: default_radius_column(),
        }
    }
}

impl CatalogLayout {
    fn widest_column(&self) -> usize {
        self.name.max(self.distance).max(self.mass).max(self.radius)
    }
}

/// Parse catalogue text into star records, in file order
pub fn parse_catalog(input: &str, layout: &CatalogLayout) -> Result<Vec<StarRecord>> {
    let rows = parse_rows(input, layout)?;
    Ok(rows.into_iter().map(|(_, record)| record).collect())
}

/// Parse catalogue text and add every row to a new galaxy
///
/// Unlike [`Galaxy::from_records`], a star rejected by validation is
/// reported as [`Error::Catalog`] with the line it came from.
pub fn load_catalog(input: &str, layout: &CatalogLayout) -> Result<Galaxy> {
    let mut galaxy = Galaxy::new();

    for (line_no, record) in parse_rows(input, layout)? {
        galaxy
            .add_record(&record)
            .map_err(|e| Error::catalog(line_no, e.to_string()))?;
    }

    Ok(galaxy)
}

/// Records paired with their 1-based line number
fn parse_rows(input: &str, layout: &CatalogLayout) -> Result<Vec<(usize, StarRecord)>> {
    let mut rows = Vec::new();
    let mut header_pending = layout.has_header;

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }
        if header_pending {
            header_pending = false;
            continue;
        }

        let fields = split_fields(line).map_err(|message| Error::catalog(line_no, message))?;
        if fields.len() <= layout.widest_column() {
            return Err(Error::catalog(
                line_no,
                format!(
                    "expected at least {} columns, found {}",
                    layout.widest_column() + 1,
                    fields.len()
                ),
            ));
        }

        let record = StarRecord {
            name: fields[layout.name].trim().to_string(),
            distance: parse_number(&fields, layout.distance, "distance", line_no)?,
            mass: parse_number(&fields, layout.mass, "mass", line_no)?,
            radius: parse_number(&fields, layout.radius, "radius", line_no)?,
        };
        rows.push((line_no, record));
    }

    tracing::debug!("Parsed {} catalog records", rows.len());
    Ok(rows)
}

fn parse_number(fields: &[String], column: usize, label: &str, line: usize) -> Result<f64> {
    let raw = fields[column].trim();
    raw.parse::<f64>()
        .map_err(|_| Error::catalog(line, format!("{} '{}' is not a number", label, raw)))
}

/// Split one line on commas, honouring double quotes and `""` escapes
fn split_fields(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.trim().is_empty() => {
                field.clear();
                in_quotes = true;
            }
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err("unterminated quoted field".to_string());
    }
    fields.push(field);
    Ok(fields)
}
