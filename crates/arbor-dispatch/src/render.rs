//! Rendering reference listings as JSON or as an aligned text table.

use std::fmt;

use colored::Colorize;

use arbor_refs::{CommitHash, RefError, Reference, ReferenceKind, Result};

/// Marker prefixed to the default branch's row.
const DEFAULT_MARKER: &str = "* ";
/// Prefix for every other row, same width as the marker.
const PLAIN_MARKER: &str = "  ";
/// Annotation column shown in verbose tables.
const ANNOTATION: &str = "comment";

/// A rendered listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Listing {
    /// JSON array of reference objects.
    Json(String),
    /// Aligned text table.
    Table(Table),
}

impl Listing {
    /// The listing as plain text, without colour.
    pub fn into_payload(self) -> String {
        match self {
            Listing::Json(json) => json,
            Listing::Table(table) => table.to_plain_string(),
        }
    }
}

/// One row of a reference table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub name: String,
    pub hash: CommitHash,
    /// Set on the store's default branch only.
    pub is_default: bool,
}

/// A reference table: one row per reference, names padded to a shared width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    rows: Vec<TableRow>,
    name_width: usize,
    verbose: bool,
}

impl Table {
    /// Build a table from already-filtered references.
    ///
    /// The name column is one wider than the longest name. An empty row set
    /// has no width to compute and is rejected with `InvalidState`.
    pub fn new(references: &[Reference], default_branch: &str, verbose: bool) -> Result<Self> {
        let longest = references
            .iter()
            .map(|r| r.name.chars().count())
            .max()
            .ok_or_else(|| RefError::InvalidState("no references to display".into()))?;

        let rows = references
            .iter()
            .map(|r| TableRow {
                name: r.name.clone(),
                hash: r.hash.clone(),
                is_default: r.kind == ReferenceKind::Branch && r.name == default_branch,
            })
            .collect();

        Ok(Self {
            rows,
            name_width: longest + 1,
            verbose,
        })
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Width the name column is padded to.
    pub fn name_width(&self) -> usize {
        self.name_width
    }

    fn line(&self, row: &TableRow) -> String {
        let marker = if row.is_default {
            DEFAULT_MARKER
        } else {
            PLAIN_MARKER
        };
        let mut line = format!("{marker}{:<width$}", row.name, width = self.name_width);
        if self.verbose {
            line.push_str(&format!(" {} {ANNOTATION}", row.hash));
        }
        line
    }

    /// Newline-terminated plain text.
    pub fn to_plain_string(&self) -> String {
        self.rows
            .iter()
            .map(|row| format!("{}\n", self.line(row)))
            .collect()
    }

    /// Like [`Table::to_plain_string`], with the default branch in yellow.
    pub fn to_colored_string(&self) -> String {
        self.rows
            .iter()
            .map(|row| {
                let line = self.line(row);
                if row.is_default {
                    format!("{}\n", line.yellow())
                } else {
                    format!("{line}\n")
                }
            })
            .collect()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain_string())
    }
}

/// Keep references of `kind`, narrowed to an exact `name` when given,
/// sorted by name.
pub fn filter_references(
    references: Vec<Reference>,
    kind: ReferenceKind,
    name: Option<&str>,
) -> Vec<Reference> {
    let mut kept: Vec<Reference> = references
        .into_iter()
        .filter(|r| r.kind == kind)
        .filter(|r| name.map_or(true, |n| r.name == n))
        .collect();
    kept.sort_by(|a, b| a.name.cmp(&b.name));
    kept
}

/// Serialize references as a JSON array.
pub fn to_json(references: &[Reference]) -> Result<String> {
    Ok(serde_json::to_string(references)?)
}
