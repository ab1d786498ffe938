//! PostgreSQL Log Parser
//!
//! PostgreSQL logs slow statements on a single line when
//! `log_min_duration_statement` is set:
//!
//! ```text
//! 2024-05-01 10:00:00 UTC LOG:  duration: 2512.45 ms  statement: SELECT * FROM orders;
//! ```
//!
//! The duration is already in milliseconds. Failing statements appear as an
//! `ERROR:` line followed by a `STATEMENT:` line:
//!
//! ```text
//! 2024-05-01 10:00:01 UTC ERROR:  relation "missing" does not exist
//! 2024-05-01 10:00:01 UTC STATEMENT: SELECT * FROM missing;
//! ```

use crate::slowlog::{LogParser, normalize_statement};
use once_cell::sync::Lazy;
use querysift_core::{DbmsKind, ErrorQueryRecord, SlowQueryRecord};
use regex::Regex;

/// `duration: <float> ms  statement: <stmt>` on one line
static SLOW_QUERY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"duration: ([0-9.]+) ms\s+statement: (.+)").expect("valid slow-query pattern")
});

/// `ERROR:` line immediately followed by a `STATEMENT:` line
static ERROR_QUERY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"ERROR:.*\n.*STATEMENT:\s+(.+)").expect("valid error-query pattern")
});

/// Parser for PostgreSQL server logs
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresLogParser;

impl LogParser for PostgresLogParser {
    fn dbms(&self) -> DbmsKind {
        DbmsKind::Postgresql
    }

    fn extract_slow_queries(&self, log_text: &str, threshold_ms: f64) -> Vec<SlowQueryRecord> {
        let mut records = Vec::new();

        for caps in SLOW_QUERY_RE.captures_iter(log_text) {
            let token = &caps[1];
            let Ok(duration_ms) = token.parse::<f64>() else {
                tracing::debug!(token, "skipping duration entry: unparseable value");
                continue;
            };
            if duration_ms >= threshold_ms {
                records.push(SlowQueryRecord::new(
                    duration_ms,
                    normalize_statement(&caps[2]),
                ));
            }
        }

        records
    }

    fn extract_error_queries(&self, log_text: &str) -> Vec<ErrorQueryRecord> {
        ERROR_QUERY_RE
            .captures_iter(log_text)
            .map(|caps| ErrorQueryRecord::new(normalize_statement(&caps[1])))
            .collect()
    }
}

#[cfg(test)]
mod tests;
