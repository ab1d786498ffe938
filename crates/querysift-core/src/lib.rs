//! QuerySift Core - Shared data model for DBMS log analysis
//!
//! This crate provides the types that all other QuerySift crates depend on.
//! It defines:
//!
//! - `DbmsKind` - The supported DBMS log dialects (PostgreSQL, MySQL, MariaDB)
//! - `SlowQueryRecord` / `ErrorQueryRecord` - Normalized extraction results
//! - `SqlFeatures` / `QueryTag` - Heuristic query-shape metadata

mod dialect;
mod records;

pub use dialect::*;
pub use records::*;
