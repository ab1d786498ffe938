//! Tests for the PostgreSQL log parser

use super::*;
use indoc::indoc;
use pretty_assertions::assert_eq;

// ============================================================================
// Slow Query Extraction
// ============================================================================

mod slow_queries {
    use super::*;
    use pretty_assertions::assert_eq;

    const LOG: &str = indoc! {r#"
        2024-05-01 10:00:00 UTC LOG:  connection received: host=10.0.0.5
        2024-05-01 10:00:01 UTC LOG:  duration: 2512.45 ms  statement: SELECT * FROM orders WHERE status = 'open';
        2024-05-01 10:00:02 UTC LOG:  duration: 130.02 ms  statement: SELECT 1;
        2024-05-01 10:00:03 UTC LOG:  checkpoint starting: time
        2024-05-01 10:00:04 UTC LOG:  duration: 4100.00 ms  statement: UPDATE orders SET status = 'done' WHERE id = 7;
    "#};

    #[test]
    fn test_extracts_entries_above_threshold() {
        let parser = PostgresLogParser;
        let slow = parser.extract_slow_queries(LOG, 2000.0);

        assert_eq!(slow.len(), 2);
        assert_eq!(slow[0].duration_ms, 2512.45);
        assert_eq!(slow[0].statement, "SELECT * FROM orders WHERE status = 'open'");
        assert_eq!(slow[1].duration_ms, 4100.0);
        assert_eq!(slow[1].statement, "UPDATE orders SET status = 'done' WHERE id = 7");
    }

    #[test]
    fn test_preserves_log_order_not_duration_order() {
        let parser = PostgresLogParser;
        let slow = parser.extract_slow_queries(LOG, 100.0);

        let durations: Vec<f64> = slow.iter().map(|r| r.duration_ms).collect();
        assert_eq!(durations, vec![2512.45, 130.02, 4100.0]);
    }

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        let parser = PostgresLogParser;
        let log = "duration: 2000.00 ms  statement: SELECT 1;";

        let slow = parser.extract_slow_queries(log, 2000.0);
        assert_eq!(slow.len(), 1);
        assert_eq!(slow[0].duration_ms, 2000.0);
        assert_eq!(slow[0].statement, "SELECT 1");
    }

    #[test]
    fn test_below_threshold_excluded() {
        let parser = PostgresLogParser;
        let log = "duration: 1999.99 ms  statement: SELECT 1;";

        assert!(parser.extract_slow_queries(log, 2000.0).is_empty());
    }

    #[test]
    fn test_statement_without_semicolon_kept_as_is() {
        let parser = PostgresLogParser;
        let log = "duration: 3000.0 ms  statement: SELECT * FROM users";

        let slow = parser.extract_slow_queries(log, 2000.0);
        assert_eq!(slow[0].statement, "SELECT * FROM users");
    }

    #[test]
    fn test_empty_input_yields_empty_sequence() {
        let parser = PostgresLogParser;
        assert!(parser.extract_slow_queries("", 2000.0).is_empty());
    }

    #[test]
    fn test_unrelated_text_yields_empty_sequence() {
        let parser = PostgresLogParser;
        let log = "checkpoint complete: wrote 321 buffers (2.0%)";
        assert!(parser.extract_slow_queries(log, 0.0).is_empty());
    }

    #[test]
    fn test_mysql_format_input_yields_empty_sequence() {
        let parser = PostgresLogParser;
        let log = indoc! {"
            # Query_time: 2.512  Lock_time: 0.000
            SELECT * FROM orders;
        "};
        assert!(parser.extract_slow_queries(log, 0.0).is_empty());
    }
}

// ============================================================================
// Error Query Extraction
// ============================================================================

mod error_queries {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extracts_error_statement_pairs() {
        let parser = PostgresLogParser;
        let log = indoc! {r#"
            2024-05-01 10:00:01 UTC ERROR:  relation "missing" does not exist at character 15
            2024-05-01 10:00:01 UTC STATEMENT: SELECT * FROM missing;
            2024-05-01 10:00:05 UTC LOG:  duration: 10.0 ms  statement: SELECT 1;
            2024-05-01 10:00:09 UTC ERROR:  division by zero
            2024-05-01 10:00:09 UTC STATEMENT: SELECT 1 / 0;
        "#};

        let errors = parser.extract_error_queries(log);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].statement, "SELECT * FROM missing");
        assert_eq!(errors[1].statement, "SELECT 1 / 0");
    }

    #[test]
    fn test_error_without_following_statement_ignored() {
        let parser = PostgresLogParser;
        let log = indoc! {r#"
            2024-05-01 10:00:01 UTC ERROR:  canceling statement due to user request
            2024-05-01 10:00:02 UTC LOG:  checkpoint starting: time
        "#};

        assert!(parser.extract_error_queries(log).is_empty());
    }

    #[test]
    fn test_empty_input_yields_empty_sequence() {
        let parser = PostgresLogParser;
        assert!(parser.extract_error_queries("").is_empty());
    }
}

// ============================================================================
// Variant Identity
// ============================================================================

#[test]
fn test_dbms_identity() {
    let parser = PostgresLogParser;
    assert_eq!(parser.dbms(), DbmsKind::Postgresql);
    assert_eq!(parser.dbms_name(), "PostgreSQL");
}
