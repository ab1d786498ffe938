//! QuerySift Analyzer - DBMS log parsing and SQL feature extraction
//!
//! This crate provides functionality for:
//! - Extracting slow and erroneous SQL statements from PostgreSQL, MySQL,
//!   and MariaDB server logs
//! - Heuristic SQL feature extraction (referenced tables, query-shape tags)
//! - Per-upload log analysis combining both

pub mod features;
pub mod report;
pub mod slowlog;

pub use features::*;
pub use report::*;
pub use slowlog::*;
