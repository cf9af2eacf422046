//! DELETE builder.

use crate::cond::Condition;
use crate::dialect::Dialect;
use crate::qb::traits::{Statement, StatementKind};
use crate::schema::Table;
use std::borrow::Cow;

/// DELETE FROM builder.
///
/// Without a WHERE condition the statement deletes every row.
#[derive(Clone, Debug)]
pub struct Delete<'a> {
    table: Cow<'a, Table>,
    where_: Option<Condition>,
}

impl<'a> Delete<'a> {
    /// Start a DELETE from `table`.
    pub fn from(table: &'a Table) -> Self {
        Self::with_table(Cow::Borrowed(table))
    }

    fn with_table(table: Cow<'a, Table>) -> Self {
        Self {
            table,
            where_: None,
        }
    }

    /// Start a DELETE from a table known only by name.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self::with_table(Cow::Owned(Table::new(name)))
    }

    /// Set the WHERE condition, replacing any previous one.
    pub fn where_(mut self, cond: Condition) -> Self {
        self.where_ = Some(cond);
        self
    }
}

impl Statement for Delete<'_> {
    fn kind(&self) -> StatementKind {
        StatementKind::Delete
    }

    fn render(&self, _dialect: Dialect) -> String {
        let mut sql = format!("DELETE FROM {}", self.table.from_clause());
        if let Some(cond) = &self.where_ {
            sql.push_str(" WHERE ");
            cond.write_to(&mut sql);
        }
        sql
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cond::{and, equal, less_than};
    use crate::schema::{Column, DataType};

    #[test]
    fn test_delete_all() {
        let t = Table::new("test_table");
        assert_eq!(Delete::from(&t).build(), "DELETE FROM test_table");
    }

    #[test]
    fn test_delete_aliased_with_where() {
        let t = Table::new("test_table")
            .with_alias("tt")
            .with_columns([
                Column::new("column_1", DataType::Integer, 1),
                Column::new("column_2", DataType::Integer, 1),
            ]);
        let c1 = t.column("column_1").unwrap();
        let c2 = t.column("column_2").unwrap();
        let sql = t
            .delete()
            .where_(and(equal(c1, 1), less_than(c2, 5)))
            .build();
        assert_eq!(
            sql,
            "DELETE FROM test_table tt WHERE (tt.column_1 = 1 AND tt.column_2 < 5)"
        );
    }
}
