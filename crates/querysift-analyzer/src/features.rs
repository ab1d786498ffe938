//! SQL Feature Extraction
//!
//! Heuristic, pattern-based identification of referenced tables and
//! query-shape tags from a single SQL statement. This is advisory input for
//! suggestion generation and search filtering, not a query planner: clauses
//! inside comments or string literals are not distinguished from real SQL,
//! and repeated clauses are not counted.
//!
//! # Example
//!
//! ```
//! use querysift_analyzer::features::extract;
//! use querysift_core::QueryTag;
//!
//! let features = extract("SELECT * FROM orders o JOIN customers c ON o.cid = c.id");
//! assert!(features.references_table("orders"));
//! assert!(features.references_table("customers"));
//! assert_eq!(features.tags, vec![QueryTag::Select, QueryTag::Join]);
//! ```

use once_cell::sync::Lazy;
use querysift_core::{QueryTag, SqlFeatures};
use regex::Regex;

/// Identifier following a table-introducing keyword, optionally backtick
/// quoted (the quoting shared by the MySQL-family dialects; unquoted names
/// cover PostgreSQL)
static TABLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:FROM|JOIN|UPDATE|INSERT INTO|DELETE FROM)\s+`?([a-zA-Z_][a-zA-Z0-9_]*)")
        .expect("valid table pattern")
});

/// Presence tests for the shape tags, in fixed evaluation order
static TAG_RULES: Lazy<Vec<(QueryTag, Regex)>> = Lazy::new(|| {
    let rule = |tag, pattern: &str| {
        (
            tag,
            Regex::new(&format!("(?i){pattern}")).expect("valid tag pattern"),
        )
    };
    vec![
        rule(QueryTag::Select, r"SELECT.*FROM"),
        rule(QueryTag::Insert, r"INSERT INTO"),
        rule(QueryTag::Update, r"UPDATE.*SET"),
        rule(QueryTag::Delete, r"DELETE FROM"),
        rule(QueryTag::Join, r"JOIN"),
        rule(QueryTag::GroupBy, r"GROUP BY"),
        rule(QueryTag::OrderBy, r"ORDER BY"),
        rule(QueryTag::Having, r"HAVING"),
        rule(QueryTag::Subquery, r"SUBQUERY|\(SELECT"),
    ]
});

/// Extracts referenced tables and shape tags from a SQL statement
///
/// Never fails: any input, however malformed, yields a (possibly empty)
/// feature set.
pub fn extract(statement: &str) -> SqlFeatures {
    let tables = TABLE_RE
        .captures_iter(statement)
        .map(|caps| caps[1].to_string())
        .collect();

    let tags = TAG_RULES
        .iter()
        .filter(|(_, re)| re.is_match(statement))
        .map(|(tag, _)| *tag)
        .collect();

    SqlFeatures { tables, tags }
}
