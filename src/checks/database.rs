//! Embedded database check.
//!
//! Round-trips one row through a transient in-memory SQLite store: create a
//! table, insert, select by primary key, compare. The store is dropped when
//! the check completes.

use rusqlite::{Connection, OptionalExtension};

use crate::report::CheckResult;

/// The value written and expected back.
const SENTINEL: &str = "ok";

/// Check that SQLite works at all.
pub fn check_sqlite() -> CheckResult {
    check_sqlite_with(Connection::open_in_memory)
}

/// Round-trip check against a store produced by `open`. Split out so tests
/// can simulate open failures.
pub(crate) fn check_sqlite_with<F>(open: F) -> CheckResult
where
    F: FnOnce() -> rusqlite::Result<Connection>,
{
    match round_trip(open) {
        Ok(true) => CheckResult::ok("sqlite", "In-memory DB create/insert/select OK"),
        Ok(false) => CheckResult::error("sqlite", "Unexpected query result"),
        Err(err) => CheckResult::error("sqlite", format!("SQLite error: {}", err)),
    }
}

fn round_trip<F>(open: F) -> rusqlite::Result<bool>
where
    F: FnOnce() -> rusqlite::Result<Connection>,
{
    let conn = open()?;
    conn.execute(
        "CREATE TABLE healthcheck(id INTEGER PRIMARY KEY, label TEXT)",
        [],
    )?;
    conn.execute("INSERT INTO healthcheck(label) VALUES (?1)", [SENTINEL])?;

    let label: Option<String> = conn
        .query_row("SELECT label FROM healthcheck WHERE id = 1", [], |row| {
            row.get(0)
        })
        .optional()?;

    Ok(label.as_deref() == Some(SENTINEL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_round_trip_passes() {
        let result = check_sqlite();
        assert!(result.is_ok());
        assert_eq!(result.name, "sqlite");
        assert_eq!(result.details, "In-memory DB create/insert/select OK");
    }

    #[test]
    fn open_failure_is_caught_with_underlying_error() {
        let result = check_sqlite_with(|| {
            Connection::open_with_flags(
                "/nonexistent/dir/healthcheck.db",
                rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY,
            )
        });
        assert!(!result.is_ok());
        assert!(result.details.starts_with("SQLite error:"));
    }

    #[test]
    fn query_failure_is_caught() {
        // A connection whose table already exists with a conflicting schema
        // makes the CREATE TABLE fail.
        let result = check_sqlite_with(|| {
            let conn = Connection::open_in_memory()?;
            conn.execute("CREATE TABLE healthcheck(other TEXT)", [])?;
            Ok(conn)
        });
        assert!(!result.is_ok());
        assert!(result.details.contains("SQLite error:"));
    }

    #[test]
    fn prior_activity_on_connection_does_not_break_check() {
        let result = check_sqlite_with(|| {
            let conn = Connection::open_in_memory()?;
            conn.execute("CREATE TABLE unrelated(x INTEGER)", [])?;
            Ok(conn)
        });
        assert!(result.is_ok());
    }

    #[test]
    fn run_twice_is_idempotent() {
        let first = check_sqlite();
        let second = check_sqlite();
        assert_eq!(first, second);
    }
}
