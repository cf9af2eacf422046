//! `tracing` emission of built statements.
//!
//! Every terminal render reports the produced SQL at `DEBUG` level under the
//! `querybaker.sql` target. Enable via the crate feature (on by default):
//! `querybaker = { features = ["tracing"] }`.

use crate::config::TraceConfig;
use crate::qb::StatementKind;

/// Report a freshly built statement.
#[cfg(feature = "tracing")]
pub(crate) fn emit(kind: StatementKind, sql: &str, config: &TraceConfig) {
    if !config.enabled {
        return;
    }
    let sql = truncate_sql(sql, config.max_sql_length);
    tracing::debug!(target: "querybaker.sql", kind = %kind, sql = %sql, "built statement");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn emit(_kind: StatementKind, _sql: &str, _config: &TraceConfig) {}

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
fn truncate_sql(sql: &str, max: Option<usize>) -> String {
    match max {
        Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
        _ => sql.to_string(),
    }
}

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_sql_untouched() {
        assert_eq!(truncate_sql("SELECT * FROM t", Some(200)), "SELECT * FROM t");
        assert_eq!(truncate_sql("SELECT * FROM t", None), "SELECT * FROM t");
    }

    #[test]
    fn test_long_sql_truncated() {
        assert_eq!(truncate_sql("SELECT * FROM t", Some(6)), "SELECT...");
    }

    #[test]
    fn test_truncation_respects_char_boundary() {
        // 'é' is two bytes; cutting at byte 2 would split it.
        assert_eq!(truncate_sql_bytes("aé", 2), "a");
    }

    #[test]
    fn test_emit_disabled_is_noop() {
        emit(
            StatementKind::Select,
            "SELECT * FROM t",
            &TraceConfig::new().disable(),
        );
    }
}
