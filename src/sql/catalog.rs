//! Literal Catalog
//!
//! The allow-lists consulted by the validators: permitted data type
//! declarations, permitted column constraints, and the reserved words that
//! must be quoted when used as identifiers.
//!
//! The bundled catalog covers MySQL 8.1 and is embedded at compile time. A
//! catalog never changes after construction; to reload, build a new one and
//! swap the handle (usually an `Arc<Catalog>`).

use std::collections::HashSet;
use std::path::Path;

use regex::Regex;
use serde::Deserialize;

use crate::error::{Result, TableCreatorError};

const BUNDLED_LITERALS: &str = include_str!("sql_literals.json");

/// On-disk shape of a literal catalog
#[derive(Debug, Deserialize)]
struct CatalogDefinition {
    datatypes: Vec<String>,
    constraints: Vec<String>,
    reserved_words: Vec<String>,
}

/// Compiled allow-lists for data types, constraints and reserved words
#[derive(Debug, Clone)]
pub struct Catalog {
    datatypes: Vec<Regex>,
    constraints: Vec<Regex>,
    reserved_words: HashSet<String>,
}

impl Catalog {
    /// Load the catalog bundled with the crate
    pub fn load() -> Result<Self> {
        Self::from_json(BUNDLED_LITERALS)
    }

    /// Load a catalog from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            TableCreatorError::config(format!(
                "Cannot read literal catalog '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&contents)
    }

    /// Parse a catalog from its JSON definition
    ///
    /// Expects an object with `datatypes`, `constraints` and `reserved_words`
    /// arrays of strings.
    pub fn from_json(json: &str) -> Result<Self> {
        let definition: CatalogDefinition = serde_json::from_str(json).map_err(|e| {
            TableCreatorError::config(format!("Malformed literal catalog: {}", e))
        })?;
        Self::new(
            definition.datatypes,
            definition.constraints,
            definition.reserved_words,
        )
    }

    /// Build a catalog from pattern and word lists
    ///
    /// Patterns match at the start of the (uppercased) input only. A pattern
    /// that should cover the whole declaration ends in `$`: `INT$` allows
    /// `INT` but not `INT; DROP TABLE Person`, while `INT` allows both.
    pub fn new<D, C, W>(datatypes: D, constraints: C, reserved_words: W) -> Result<Self>
    where
        D: IntoIterator,
        D::Item: AsRef<str>,
        C: IntoIterator,
        C::Item: AsRef<str>,
        W: IntoIterator,
        W::Item: AsRef<str>,
    {
        Ok(Self {
            datatypes: compile_patterns(datatypes)?,
            constraints: compile_patterns(constraints)?,
            reserved_words: reserved_words
                .into_iter()
                .map(|w| w.as_ref().to_uppercase())
                .collect(),
        })
    }

    /// Whether `word` (any case) must be quoted when used as an identifier
    pub fn is_reserved(&self, word: &str) -> bool {
        self.reserved_words.contains(&word.to_uppercase())
    }

    /// Whether an uppercased data type declaration matches any allowed pattern
    pub fn allows_datatype(&self, declaration: &str) -> bool {
        self.datatypes.iter().any(|re| re.is_match(declaration))
    }

    /// Whether an uppercased constraint matches any allowed pattern
    pub fn allows_constraint(&self, constraint: &str) -> bool {
        self.constraints.iter().any(|re| re.is_match(constraint))
    }

    pub fn datatype_count(&self) -> usize {
        self.datatypes.len()
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    pub fn reserved_word_count(&self) -> usize {
        self.reserved_words.len()
    }
}

fn compile_patterns<I>(patterns: I) -> Result<Vec<Regex>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    patterns
        .into_iter()
        .map(|pattern| {
            let pattern = pattern.as_ref();
            Regex::new(&format!("^(?:{})", pattern)).map_err(|e| {
                TableCreatorError::config(format!(
                    "Invalid catalog pattern '{}': {}",
                    pattern, e
                ))
            })
        })
        .collect()
}
