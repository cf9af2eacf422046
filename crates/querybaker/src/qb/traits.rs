//! Trait definitions for statement builders.

use crate::config::Config;
use crate::dialect::Dialect;
use crate::error::QbResult;
use crate::trace;
use std::fmt;

/// The kind of statement a builder produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
    CreateTable,
    DropTable,
    TruncateTable,
}

impl StatementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StatementKind::Select => "SELECT",
            StatementKind::Insert => "INSERT",
            StatementKind::Update => "UPDATE",
            StatementKind::Delete => "DELETE",
            StatementKind::CreateTable => "CREATE TABLE",
            StatementKind::DropTable => "DROP TABLE",
            StatementKind::TruncateTable => "TRUNCATE TABLE",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base trait for everything that renders one complete SQL statement.
///
/// Implementors only provide [`kind`](Statement::kind) and
/// [`render`](Statement::render). Rendering never mutates the builder, so
/// every `build*` call on the same value yields the same string.
pub trait Statement {
    /// What kind of statement this is.
    fn kind(&self) -> StatementKind;

    /// Render the SQL text for `dialect`.
    fn render(&self, dialect: Dialect) -> String;

    /// Check builder state before rendering.
    fn validate(&self) -> QbResult<()> {
        Ok(())
    }

    /// Render with the default configuration.
    fn build(&self) -> String {
        self.build_with(&Config::default())
    }

    /// Render for a specific dialect with default tracing.
    fn build_for(&self, dialect: Dialect) -> String {
        self.build_with(&Config::new().with_dialect(dialect))
    }

    /// Render with `config` and emit the statement to the trace log.
    fn build_with(&self, config: &Config) -> String {
        let sql = self.render(config.dialect);
        trace::emit(self.kind(), &sql, &config.trace);
        sql
    }

    /// Validate, then render with the default configuration.
    fn try_build(&self) -> QbResult<String> {
        self.validate()?;
        Ok(self.build())
    }

    /// Validate, then render with `config`.
    fn try_build_with(&self, config: &Config) -> QbResult<String> {
        self.validate()?;
        Ok(self.build_with(config))
    }

    /// Debug helper: render for the default dialect without tracing.
    fn to_sql(&self) -> String {
        self.render(Dialect::default())
    }
}
