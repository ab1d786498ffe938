//! DBMS Dialect Tags
//!
//! Identifies which server produced a log file. The kind is fixed for the
//! lifetime of an analysis session and selects the extraction rules; it
//! carries no connection or driver state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a DBMS type tag is not one of the supported dialects
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported DBMS type: '{0}' (expected one of: postgresql, mysql, mariadb)")]
pub struct UnsupportedDbmsError(pub String);

/// The supported DBMS log dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbmsKind {
    /// PostgreSQL server logs (single-line duration/statement entries)
    Postgresql,
    /// MySQL slow query logs (block-oriented `# Query_time:` entries)
    Mysql,
    /// MariaDB slow query and error logs
    Mariadb,
}

impl DbmsKind {
    /// All supported dialects, in selection-menu order
    pub const ALL: [DbmsKind; 3] = [Self::Postgresql, Self::Mariadb, Self::Mysql];

    /// Parses a lowercase dbms_type tag as supplied by callers
    ///
    /// Accepts exactly `"postgresql"`, `"mysql"`, and `"mariadb"`.
    pub fn from_tag(tag: &str) -> Result<Self, UnsupportedDbmsError> {
        match tag {
            "postgresql" => Ok(Self::Postgresql),
            "mysql" => Ok(Self::Mysql),
            "mariadb" => Ok(Self::Mariadb),
            other => Err(UnsupportedDbmsError(other.to_string())),
        }
    }

    /// Returns the lowercase tag used by callers and stored metadata
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Postgresql => "postgresql",
            Self::Mysql => "mysql",
            Self::Mariadb => "mariadb",
        }
    }

    /// Returns the fixed display name for the dialect
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Postgresql => "PostgreSQL",
            Self::Mysql => "MySQL",
            Self::Mariadb => "MariaDB",
        }
    }
}

impl FromStr for DbmsKind {
    type Err = UnsupportedDbmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

impl fmt::Display for DbmsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_tag_supported() {
        assert_eq!(DbmsKind::from_tag("postgresql"), Ok(DbmsKind::Postgresql));
        assert_eq!(DbmsKind::from_tag("mysql"), Ok(DbmsKind::Mysql));
        assert_eq!(DbmsKind::from_tag("mariadb"), Ok(DbmsKind::Mariadb));
    }

    #[test]
    fn test_from_tag_unsupported() {
        let err = DbmsKind::from_tag("oracle").unwrap_err();
        assert_eq!(err, UnsupportedDbmsError("oracle".to_string()));
        assert!(err.to_string().contains("oracle"));
    }

    #[test]
    fn test_from_tag_is_case_sensitive() {
        // Tags arrive pre-normalized from the caller's selection UI
        assert!(DbmsKind::from_tag("PostgreSQL").is_err());
        assert!(DbmsKind::from_tag("MYSQL").is_err());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(DbmsKind::Postgresql.display_name(), "PostgreSQL");
        assert_eq!(DbmsKind::Mysql.display_name(), "MySQL");
        assert_eq!(DbmsKind::Mariadb.display_name(), "MariaDB");
    }

    #[test]
    fn test_tag_round_trip() {
        for kind in DbmsKind::ALL {
            assert_eq!(DbmsKind::from_tag(kind.tag()), Ok(kind));
        }
    }

    #[test]
    fn test_from_str() {
        let kind: DbmsKind = "mariadb".parse().unwrap();
        assert_eq!(kind, DbmsKind::Mariadb);
        assert!("sqlite".parse::<DbmsKind>().is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&DbmsKind::Postgresql).unwrap();
        assert_eq!(json, "\"postgresql\"");

        let parsed: DbmsKind = serde_json::from_str("\"mariadb\"").unwrap();
        assert_eq!(parsed, DbmsKind::Mariadb);
    }
}
