//! Extraction Result Types
//!
//! Normalized records produced by the log parsers and the SQL feature
//! extractor. All types are transient values: constructed by a parse call,
//! handed to the caller (persistence, suggestion generation, indexing), and
//! never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A SQL statement whose recorded execution time met the slow-query threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlowQueryRecord {
    /// Execution duration in milliseconds, unit-converted from the log
    pub duration_ms: f64,
    /// The statement text, trimmed, with the trailing `;` stripped
    pub statement: String,
}

impl SlowQueryRecord {
    /// Creates a new slow query record
    pub fn new(duration_ms: f64, statement: impl Into<String>) -> Self {
        Self {
            duration_ms,
            statement: statement.into(),
        }
    }
}

/// A SQL statement the server logged as failing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorQueryRecord {
    /// The statement text, trimmed, with the trailing `;` stripped
    pub statement: String,
}

impl ErrorQueryRecord {
    /// Creates a new error query record
    pub fn new(statement: impl Into<String>) -> Self {
        Self {
            statement: statement.into(),
        }
    }
}

/// Structural shape tag for a SQL statement
///
/// The closed vocabulary used for search filtering and suggestion context.
/// Tags are always emitted in the fixed evaluation order of the extractor,
/// which matches the declaration order here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryTag {
    /// SELECT ... FROM
    Select,
    /// INSERT INTO
    Insert,
    /// UPDATE ... SET
    Update,
    /// DELETE FROM
    Delete,
    /// Any JOIN clause
    Join,
    /// GROUP BY clause
    GroupBy,
    /// ORDER BY clause
    OrderBy,
    /// HAVING clause
    Having,
    /// Nested `(SELECT` subquery
    Subquery,
}

impl QueryTag {
    /// Returns the tag as its display/storage string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Join => "JOIN",
            Self::GroupBy => "GROUP_BY",
            Self::OrderBy => "ORDER_BY",
            Self::Having => "HAVING",
            Self::Subquery => "SUBQUERY",
        }
    }
}

/// Heuristic features extracted from a single SQL statement
///
/// Advisory metadata only: the extractor is pattern-based, so clauses inside
/// comments or string literals are not distinguished from real SQL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlFeatures {
    /// Referenced table names, deduplicated, case preserved as found
    pub tables: BTreeSet<String>,
    /// Shape tags in the extractor's fixed evaluation order
    pub tags: Vec<QueryTag>,
}

impl SqlFeatures {
    /// Creates an empty feature set
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the statement carries the given tag
    pub fn has_tag(&self, tag: QueryTag) -> bool {
        self.tags.contains(&tag)
    }

    /// Returns true if the statement references the given table
    pub fn references_table(&self, table: &str) -> bool {
        self.tables.contains(table)
    }

    /// Returns true if no tables and no tags were found
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.tags.is_empty()
    }
}
