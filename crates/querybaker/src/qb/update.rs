//! UPDATE builder.

use crate::cond::Condition;
use crate::dialect::Dialect;
use crate::error::{QbError, QbResult};
use crate::qb::pair::Pair;
use crate::qb::traits::{Statement, StatementKind};
use crate::schema::Table;
use std::borrow::Cow;

/// UPDATE builder.
#[derive(Clone, Debug)]
pub struct Update<'a> {
    table: Cow<'a, Table>,
    pairs: Vec<Pair>,
    where_: Option<Condition>,
}

impl<'a> Update<'a> {
    /// Start an UPDATE of `table`.
    pub fn table(table: &'a Table) -> Self {
        Self::with_table(Cow::Borrowed(table))
    }

    fn with_table(table: Cow<'a, Table>) -> Self {
        Self {
            table,
            pairs: Vec::new(),
            where_: None,
        }
    }

    /// Start an UPDATE of a table known only by name.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self::with_table(Cow::Owned(Table::new(name)))
    }

    /// Append `SET` assignments.
    pub fn values(mut self, pairs: impl IntoIterator<Item = Pair>) -> Self {
        self.pairs.extend(pairs);
        self
    }

    /// Append a single `SET` assignment.
    pub fn set(mut self, pair: Pair) -> Self {
        self.pairs.push(pair);
        self
    }

    /// Set the WHERE condition, replacing any previous one.
    pub fn where_(mut self, cond: Condition) -> Self {
        self.where_ = Some(cond);
        self
    }
}

impl Statement for Update<'_> {
    fn kind(&self) -> StatementKind {
        StatementKind::Update
    }

    fn render(&self, _dialect: Dialect) -> String {
        let mut sql = format!("UPDATE {} SET ", self.table.name());
        for (i, p) in self.pairs.iter().enumerate() {
            if i > 0 {
                sql.push_str(", ");
            }
            sql.push_str(p.column());
            sql.push_str(" = ");
            sql.push_str(&p.value().render());
        }
        if let Some(cond) = &self.where_ {
            sql.push_str(" WHERE ");
            cond.write_to(&mut sql);
        }
        sql
    }

    fn validate(&self) -> QbResult<()> {
        if self.pairs.is_empty() {
            return Err(QbError::empty_statement(format!(
                "UPDATE {} has no SET assignments",
                self.table.name()
            )));
        }
        if let Some(p) = self.pairs.iter().find(|p| p.has_embedded_quote()) {
            return Err(QbError::invalid_argument(format!(
                "value for column '{}' contains an unescaped double quote",
                p.column()
            )));
        }
        Ok(())
    }
}
