//! INSERT builder.

use crate::dialect::Dialect;
use crate::error::{QbError, QbResult};
use crate::qb::pair::Pair;
use crate::qb::traits::{Statement, StatementKind};
use crate::schema::Table;
use std::borrow::Cow;

/// INSERT INTO builder.
///
/// Column and value lists are paired positionally in the order the pairs
/// were added.
#[derive(Clone, Debug)]
pub struct Insert<'a> {
    table: Cow<'a, Table>,
    pairs: Vec<Pair>,
}

impl<'a> Insert<'a> {
    /// Start an INSERT into `table`.
    pub fn into(table: &'a Table) -> Self {
        Self::with_table(Cow::Borrowed(table))
    }

    fn with_table(table: Cow<'a, Table>) -> Self {
        Self {
            table,
            pairs: Vec::new(),
        }
    }

    /// Start an INSERT into a table known only by name.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self::with_table(Cow::Owned(Table::new(name)))
    }

    /// Append column/value pairs.
    pub fn values(mut self, pairs: impl IntoIterator<Item = Pair>) -> Self {
        self.pairs.extend(pairs);
        self
    }

    /// Append a single column/value pair.
    pub fn value(mut self, pair: Pair) -> Self {
        self.pairs.push(pair);
        self
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }
}

impl Statement for Insert<'_> {
    fn kind(&self) -> StatementKind {
        StatementKind::Insert
    }

    fn render(&self, _dialect: Dialect) -> String {
        let columns: Vec<&str> = self.pairs.iter().map(Pair::column).collect();
        let values: Vec<String> = self.pairs.iter().map(|p| p.value().render()).collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table.name(),
            columns.join(", "),
            values.join(", ")
        )
    }

    fn validate(&self) -> QbResult<()> {
        if self.pairs.is_empty() {
            return Err(QbError::empty_statement(format!(
                "INSERT INTO {} has no values",
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qb::pair;
    use crate::schema::{Column, DataType};

    #[test]
    fn test_insert() {
        let t = Table::new("test_table");
        let c1 = Column::new("column_1", DataType::Integer, 1);
        let c2 = Column::new("column_2", DataType::Varchar, 255);
        let sql = Insert::into(&t)
            .values([pair(&c1, 24), pair(&c2, "test")])
            .build();
        assert_eq!(
            sql,
            "INSERT INTO test_table (column_1, column_2) VALUES (24, \"test\")"
        );
    }

    #[test]
    fn test_empty_insert_rejected() {
        let t = Table::new("t");
        let insert = Insert::into(&t);
        assert_eq!(insert.build(), "INSERT INTO t () VALUES ()");
        assert!(insert.try_build().unwrap_err().is_empty_statement());
    }

    #[test]
    fn test_embedded_quote_rejected() {
        let t = Table::new("t");
        let c = Column::new("c", DataType::Varchar, 10);
        let err = Insert::into(&t)
            .value(pair(&c, "say \"hi\""))
            .try_build()
            .unwrap_err();
        assert!(matches!(err, QbError::InvalidArgument(_)));
    }
}
