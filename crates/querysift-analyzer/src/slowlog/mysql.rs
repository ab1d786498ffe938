//! MySQL Slow Query Log Parser
//!
//! MySQL writes slow-log entries as annotated blocks:
//!
//! ```text
//! # Time: 2024-05-01T10:00:00.123456Z
//! # User@Host: app[app] @ localhost []  Id:    42
//! # Query_time: 2.512  Lock_time: 0.000 Rows_sent: 1  Rows_examined: 50000
//! SELECT * FROM orders WHERE status = 'open';
//! ```
//!
//! `Query_time` is in seconds and is converted to milliseconds before the
//! threshold comparison. The first `;`-terminated line after the marker is
//! taken as the statement, so a `SET timestamp=...;` prologue line is
//! captured in its place when present (approximate-match behavior carried
//! over from the extraction rules this parser was derived from).
//!
//! The MySQL *error* log uses a separate format that this extractor does
//! not handle; error extraction always returns an empty sequence for this
//! dialect.

use crate::slowlog::{LogParser, scan_query_time_blocks};
use once_cell::sync::Lazy;
use querysift_core::{DbmsKind, ErrorQueryRecord, SlowQueryRecord};
use regex::Regex;

/// `# Query_time: <float>` block marker, literal prefix as the server
/// writes it
static QUERY_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^# Query_time: ([0-9.]+)").expect("valid Query_time pattern")
});

/// Parser for MySQL slow query logs
#[derive(Debug, Clone, Copy, Default)]
pub struct MysqlLogParser;

impl LogParser for MysqlLogParser {
    fn dbms(&self) -> DbmsKind {
        DbmsKind::Mysql
    }

    fn extract_slow_queries(&self, log_text: &str, threshold_ms: f64) -> Vec<SlowQueryRecord> {
        scan_query_time_blocks(log_text, threshold_ms, &QUERY_TIME_RE)
    }

    /// Always empty: the MySQL error log is a different format from the
    /// slow-query log and is not handled here. Known scope limitation.
    fn extract_error_queries(&self, _log_text: &str) -> Vec<ErrorQueryRecord> {
        Vec::new()
    }
}
