//! DBMS Log Parsers
//!
//! This module provides slow-query and error-query extraction from server
//! log text for the supported dialects:
//! - PostgreSQL (single-line `duration: ... ms  statement: ...` entries)
//! - MySQL (block-oriented `# Query_time:` slow-log entries)
//! - MariaDB (MySQL-style slow log plus `[ERROR]` / `Query:` error pairs)
//!
//! Each dialect emits structurally different log text, so extraction rules
//! live in one module per dialect behind the shared [`LogParser`] trait.
//! Parsers hold no state beyond their dialect identity; every call is a pure
//! scan over the supplied text.
//!
//! # Example
//!
//! ```
//! use querysift_analyzer::slowlog::{LogParser, select_parser};
//!
//! let parser = select_parser("postgresql").unwrap();
//! let log = "2024-05-01 10:00:00 UTC LOG:  duration: 2512.45 ms  statement: SELECT * FROM orders;";
//!
//! let slow = parser.extract_slow_queries(log, 2000.0);
//! assert_eq!(slow.len(), 1);
//! assert_eq!(slow[0].statement, "SELECT * FROM orders");
//! ```

pub mod mariadb;
pub mod mysql;
pub mod postgres;

pub use mariadb::MariadbLogParser;
pub use mysql::MysqlLogParser;
pub use postgres::PostgresLogParser;

use querysift_core::{
    DbmsKind, ErrorQueryRecord, SlowQueryRecord, SqlFeatures, UnsupportedDbmsError,
};
use regex::Regex;

/// Extraction interface implemented by each DBMS dialect
///
/// All operations are deterministic and side-effect-free. Malformed or empty
/// log text never errors; it yields an empty result sequence.
pub trait LogParser: Send + Sync {
    /// Returns the dialect this parser handles
    fn dbms(&self) -> DbmsKind;

    /// Returns the fixed display name for the dialect
    fn dbms_name(&self) -> &'static str {
        self.dbms().display_name()
    }

    /// Extracts statements whose recorded duration meets the threshold
    ///
    /// Durations are unit-converted to milliseconds before the comparison,
    /// which is inclusive (`duration_ms >= threshold_ms`). Results preserve
    /// the order of first appearance in the log text.
    fn extract_slow_queries(&self, log_text: &str, threshold_ms: f64) -> Vec<SlowQueryRecord>;

    /// Extracts statements the server logged as failing
    fn extract_error_queries(&self, log_text: &str) -> Vec<ErrorQueryRecord>;

    /// Extracts heuristic SQL features from a single statement
    ///
    /// Identical across dialects; delegates to [`crate::features::extract`].
    fn extract_sql_features(&self, statement: &str) -> SqlFeatures {
        crate::features::extract(statement)
    }
}

impl std::fmt::Debug for dyn LogParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogParser")
            .field("dbms", &self.dbms())
            .finish()
    }
}

/// Returns the parser for a dialect
pub fn parser_for(kind: DbmsKind) -> Box<dyn LogParser> {
    match kind {
        DbmsKind::Postgresql => Box::new(PostgresLogParser),
        DbmsKind::Mysql => Box::new(MysqlLogParser),
        DbmsKind::Mariadb => Box::new(MariadbLogParser),
    }
}

/// Maps a caller-supplied dbms_type tag to its parser
///
/// The composition seam used by upload/analysis workflows. Fails with
/// [`UnsupportedDbmsError`] for any tag other than `"postgresql"`,
/// `"mysql"`, or `"mariadb"`; callers should treat that as a configuration
/// error and abort the analysis request.
pub fn select_parser(tag: &str) -> Result<Box<dyn LogParser>, UnsupportedDbmsError> {
    Ok(parser_for(DbmsKind::from_tag(tag)?))
}

/// Trims a captured statement and strips the terminating `;`
pub(crate) fn normalize_statement(raw: &str) -> String {
    let trimmed = raw.trim();
    let stripped = trimmed.strip_suffix(';').unwrap_or(trimmed);
    stripped.trim_end().to_string()
}

/// Scans MySQL-family slow-log blocks: a `# Query_time:` marker line
/// followed, possibly after other annotation lines, by a `;`-terminated
/// statement line.
///
/// Two-phase scan: locate the marker, then walk forward for the first line
/// ending in `;`. Query_time is in seconds and is converted to milliseconds
/// before the inclusive threshold comparison. The forward walk consumes any
/// intervening lines, including further marker lines, so a block without a
/// terminated statement swallows the entry that follows it. This mirrors the
/// non-greedy multiline capture the extraction rules were derived from;
/// tightening it needs fixtures from real server output first.
pub(crate) fn scan_query_time_blocks(
    log_text: &str,
    threshold_ms: f64,
    marker: &Regex,
) -> Vec<SlowQueryRecord> {
    let lines: Vec<&str> = log_text.lines().collect();
    let mut records = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let Some(caps) = marker.captures(lines[i]) else {
            i += 1;
            continue;
        };

        let token = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let Ok(seconds) = token.parse::<f64>() else {
            // Marker matched but the duration token is not a number
            // (e.g. a bare run of dots). Drop the entry, keep scanning.
            tracing::debug!(line = i + 1, token, "skipping slow-log entry: unparseable Query_time");
            i += 1;
            continue;
        };
        let duration_ms = seconds * 1000.0;

        let mut j = i + 1;
        let mut statement = None;
        while j < lines.len() {
            let candidate = lines[j].trim();
            if candidate.len() > 1 && candidate.ends_with(';') {
                statement = Some(normalize_statement(candidate));
                break;
            }
            j += 1;
        }

        match statement {
            Some(statement) => {
                if duration_ms >= threshold_ms {
                    records.push(SlowQueryRecord::new(duration_ms, statement));
                }
                i = j + 1;
            }
            // No terminated statement before end of input
            None => i = j,
        }
    }

    records
}
