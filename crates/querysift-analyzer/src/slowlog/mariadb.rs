//! MariaDB Log Parser
//!
//! MariaDB's slow query log uses the same block format as MySQL:
//!
//! ```text
//! # Time: 2024-05-01T10:00:00.123456Z
//! # User@Host: root[root] @ localhost []
//! # Query_time: 1.234  Lock_time: 0.000 Rows_sent: 1  Rows_examined: 0
//! SELECT * FROM users WHERE id = 1;
//! ```
//!
//! Its error log pairs an `[ERROR]`-bearing line with a `Query:` line:
//!
//! ```text
//! 2024-05-01T10:00:01.000000Z 123 [ERROR] Table 'shop.invalid_table' doesn't exist
//! Query: SELECT * FROM invalid_table;
//! ```

use crate::slowlog::{LogParser, normalize_statement, scan_query_time_blocks};
use once_cell::sync::Lazy;
use querysift_core::{DbmsKind, ErrorQueryRecord, SlowQueryRecord};
use regex::Regex;

/// `# Query_time: <float>` block marker, literal prefix with the keyword
/// matched case-insensitively
static QUERY_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^# Query_time: ([0-9.]+)").expect("valid Query_time pattern")
});

/// `ERROR`-bearing line immediately followed by a `Query: <stmt>;` line
static ERROR_QUERY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)ERROR.*\nQuery:\s+(.+;)").expect("valid error-query pattern")
});

/// Parser for MariaDB slow query and error logs
#[derive(Debug, Clone, Copy, Default)]
pub struct MariadbLogParser;

impl LogParser for MariadbLogParser {
    fn dbms(&self) -> DbmsKind {
        DbmsKind::Mariadb
    }

    fn extract_slow_queries(&self, log_text: &str, threshold_ms: f64) -> Vec<SlowQueryRecord> {
        scan_query_time_blocks(log_text, threshold_ms, &QUERY_TIME_RE)
    }

    fn extract_error_queries(&self, log_text: &str) -> Vec<ErrorQueryRecord> {
        ERROR_QUERY_RE
            .captures_iter(log_text)
            .map(|caps| ErrorQueryRecord::new(normalize_statement(&caps[1])))
            .collect()
    }
}
