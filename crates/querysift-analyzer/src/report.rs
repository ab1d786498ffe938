//! Log Analysis Report
//!
//! Ties the per-dialect extraction and the SQL feature extractor together
//! for one uploaded log file: extract slow queries against a threshold,
//! extract error queries, and annotate each slow statement with its
//! heuristic features for downstream filtering and suggestion lookup.
//!
//! Everything here stays pure and synchronous; persistence, suggestion
//! generation, and indexing are the caller's collaborators.

use crate::features;
use crate::slowlog::{LogParser, parser_for};
use querysift_core::{DbmsKind, ErrorQueryRecord, SlowQueryRecord, SqlFeatures};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Statement preview length used in summaries and listings
const PREVIEW_LEN: usize = 70;

/// Configuration for log analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Slow-query threshold in milliseconds (inclusive boundary)
    pub threshold_ms: f64,
    /// Whether to extract SQL features for each slow statement
    pub extract_features: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            threshold_ms: 2000.0,
            extract_features: true,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the slow-query threshold in milliseconds
    pub fn with_threshold_ms(mut self, threshold_ms: f64) -> Self {
        self.threshold_ms = threshold_ms;
        self
    }

    /// Sets whether features are extracted per slow statement
    pub fn with_extract_features(mut self, extract: bool) -> Self {
        self.extract_features = extract;
        self
    }
}

/// A slow query annotated with its extracted features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedQuery {
    /// The extracted slow-query record
    pub record: SlowQueryRecord,
    /// Heuristic features of the statement (empty when extraction is off)
    pub features: SqlFeatures,
}

impl AnalyzedQuery {
    /// Returns a truncated single-line preview of the statement
    pub fn preview(&self) -> String {
        truncate_sql(&self.record.statement, PREVIEW_LEN)
    }
}

/// Result of analyzing one log file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogAnalysis {
    /// The dialect the log was parsed as
    pub dbms: DbmsKind,
    /// The threshold the slow queries were filtered against
    pub threshold_ms: f64,
    /// Slow queries in order of first appearance
    pub slow_queries: Vec<AnalyzedQuery>,
    /// Error queries in order of first appearance
    pub error_queries: Vec<ErrorQueryRecord>,
    /// Human-readable summary of the analysis
    pub summary: String,
}

impl LogAnalysis {
    /// Returns the number of slow queries found
    pub fn slow_count(&self) -> usize {
        self.slow_queries.len()
    }

    /// Returns the number of error queries found
    pub fn error_count(&self) -> usize {
        self.error_queries.len()
    }

    /// Returns true if neither slow nor error queries were found
    pub fn is_clean(&self) -> bool {
        self.slow_queries.is_empty() && self.error_queries.is_empty()
    }

    /// Returns the union of tables referenced by the slow queries
    pub fn referenced_tables(&self) -> BTreeSet<String> {
        self.slow_queries
            .iter()
            .flat_map(|q| q.features.tables.iter().cloned())
            .collect()
    }
}

/// Analyzer that runs all extraction steps for one dialect
#[derive(Debug, Clone)]
pub struct LogAnalyzer {
    kind: DbmsKind,
    config: AnalysisConfig,
}

impl LogAnalyzer {
    /// Creates an analyzer for a dialect with the default config
    pub fn new(kind: DbmsKind) -> Self {
        Self {
            kind,
            config: AnalysisConfig::default(),
        }
    }

    /// Creates an analyzer with a custom config
    pub fn with_config(kind: DbmsKind, config: AnalysisConfig) -> Self {
        Self { kind, config }
    }

    /// Returns the analyzer config
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyzes one log file's text
    pub fn analyze(&self, log_text: &str) -> LogAnalysis {
        let parser = parser_for(self.kind);

        let slow_queries = parser
            .extract_slow_queries(log_text, self.config.threshold_ms)
            .into_iter()
            .map(|record| {
                let features = if self.config.extract_features {
                    features::extract(&record.statement)
                } else {
                    SqlFeatures::new()
                };
                AnalyzedQuery { record, features }
            })
            .collect::<Vec<_>>();

        let error_queries = parser.extract_error_queries(log_text);

        let summary = generate_summary(
            parser.as_ref(),
            self.config.threshold_ms,
            &slow_queries,
            &error_queries,
        );

        LogAnalysis {
            dbms: self.kind,
            threshold_ms: self.config.threshold_ms,
            slow_queries,
            error_queries,
            summary,
        }
    }
}

fn generate_summary(
    parser: &dyn LogParser,
    threshold_ms: f64,
    slow: &[AnalyzedQuery],
    errors: &[ErrorQueryRecord],
) -> String {
    if slow.is_empty() && errors.is_empty() {
        format!(
            "No slow queries (>= {} ms) or error queries found in the {} log.",
            threshold_ms,
            parser.dbms_name()
        )
    } else {
        format!(
            "Found {} slow query(ies) (>= {} ms) and {} error query(ies) in the {} log.",
            slow.len(),
            threshold_ms,
            errors.len(),
            parser.dbms_name()
        )
    }
}

/// Truncates a SQL statement for display, appending an ellipsis
pub fn truncate_sql(sql: &str, max_len: usize) -> String {
    if sql.chars().count() > max_len {
        let truncated: String = sql.chars().take(max_len).collect();
        format!("{truncated}...")
    } else {
        sql.to_string()
    }
}
