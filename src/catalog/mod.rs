//! Pattern catalog
//!
//! The catalog is an immutable lookup table from pattern id to
//! [`PatternRecord`]. It is built once at startup, either from the built-in
//! content ([`PatternCatalog::builtin`]) or from a JSON catalog file, and is
//! then only read.
//!
//! # Lookup policy
//!
//! [`PatternCatalog::lookup`] never fails: an unknown id resolves to the
//! catalog's default record. Callers that need to know whether an id exists
//! use [`PatternCatalog::get`], which applies the same matching rules without
//! the fallback.
//!
//! # Catalog file format
//!
//! ```text
//! {
//!   "default": "triangle-grid",
//!   "patterns": [
//!     { "id": "...", "name": "...", "difficulty": "Beginner",
//!       "description": "...", "steps": ["..."], "materials": "...", "tips": [] }
//!   ]
//! }
//! ```

mod builtin;
pub mod errors;

pub use builtin::DEFAULT_PATTERN_ID;
pub use errors::CatalogError;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// How hard a pattern is to fold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authoring form of a pattern, as written in a catalog file.
///
/// A spec becomes a [`PatternRecord`] only after validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSpec {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub summary: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub steps: Vec<String>,
    #[serde(default)]
    pub materials: String,
    #[serde(default)]
    pub tips: Vec<String>,
}

/// A validated, immutable pattern.
///
/// `steps` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternRecord {
    id: String,
    name: String,
    summary: String,
    description: String,
    difficulty: Difficulty,
    steps: Vec<String>,
    materials: String,
    tips: Vec<String>,
}

impl PatternRecord {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short one-line blurb shown in the catalog list
    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Number of steps, always at least 1
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Instruction text for `index`, if it is in range
    pub fn step(&self, index: usize) -> Option<&str> {
        self.steps.get(index).map(String::as_str)
    }

    pub fn materials(&self) -> &str {
        &self.materials
    }

    pub fn tips(&self) -> &[String] {
        &self.tips
    }
}

impl TryFrom<PatternSpec> for PatternRecord {
    type Error = CatalogError;

    fn try_from(spec: PatternSpec) -> Result<Self, Self::Error> {
        let id = spec.id.trim().to_string();
        if id.is_empty() {
            return Err(CatalogError::EmptyId);
        }
        if spec.steps.is_empty() {
            return Err(CatalogError::EmptySteps { id });
        }

        Ok(PatternRecord {
            id,
            name: spec.name,
            summary: spec.summary,
            description: spec.description,
            difficulty: spec.difficulty,
            steps: spec.steps,
            materials: spec.materials,
            tips: spec.tips,
        })
    }
}

/// On-disk catalog layout
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    default: Option<String>,
    patterns: Vec<PatternSpec>,
}

/// Read-only table of patterns with a designated default record
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    records: Vec<PatternRecord>,
    index: FxHashMap<String, usize>,
    default_index: usize,
}

impl PatternCatalog {
    /// Build a catalog from validated records.
    ///
    /// Records keep their given order for display. When `default_id` is
    /// `None` the first record is the default.
    pub fn new(
        records: Vec<PatternRecord>,
        default_id: Option<&str>,
    ) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut index = FxHashMap::default();
        for (position, record) in records.iter().enumerate() {
            if index.insert(index_key(&record.id), position).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: record.id.clone(),
                });
            }
        }

        let default_index = match default_id {
            Some(id) => *index
                .get(&index_key(id))
                .ok_or_else(|| CatalogError::UnknownDefault { id: id.to_string() })?,
            None => 0,
        };

        info!(
            patterns = records.len(),
            default = %records[default_index].id,
            "pattern catalog ready"
        );

        Ok(PatternCatalog {
            records,
            index,
            default_index,
        })
    }

    /// Validate specs and build a catalog from them
    pub fn from_specs(
        specs: Vec<PatternSpec>,
        default_id: Option<&str>,
    ) -> Result<Self, CatalogError> {
        let records = specs
            .into_iter()
            .map(PatternRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(records, default_id)
    }

    /// The catalog shipped with the application
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_specs(builtin::specs(), Some(DEFAULT_PATTERN_ID))
    }

    /// Parse a catalog from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_specs(file.patterns, file.default.as_deref())
    }

    /// Load a catalog from a JSON file
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Resolve `id` to a record, falling back to the default record.
    ///
    /// Matching trims whitespace and ignores ASCII case.
    pub fn lookup(&self, id: &str) -> &PatternRecord {
        match self.get(id) {
            Some(record) => record,
            None => {
                debug!(requested = id, fallback = %self.default_record().id, "unknown pattern id");
                self.default_record()
            }
        }
    }

    /// Resolve `id` without falling back
    pub fn get(&self, id: &str) -> Option<&PatternRecord> {
        self.position(id).map(|position| &self.records[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn default_record(&self) -> &PatternRecord {
        &self.records[self.default_index]
    }

    /// Records in display order
    pub fn iter(&self) -> impl Iterator<Item = &PatternRecord> {
        self.records.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.id.as_str())
    }

    /// Position of `id` in display order
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(&index_key(id)).copied()
    }

    /// Record at a display position
    pub fn get_index(&self, position: usize) -> Option<&PatternRecord> {
        self.records.get(position)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`; an empty catalog cannot be constructed
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Ids are unique up to ASCII case, so the index stores them folded
fn index_key(id: &str) -> String {
    id.trim().to_ascii_lowercase()
}
