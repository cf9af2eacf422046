//! SELECT builder.

use crate::cond::Condition;
use crate::dialect::Dialect;
use crate::qb::join::{Join, JoinType};
use crate::qb::traits::{Statement, StatementKind};
use crate::schema::{Column, Table};
use std::borrow::Cow;

/// SELECT builder bound to its FROM table.
///
/// Projection, join, and ORDER BY columns are borrowed, so every table they
/// belong to stays frozen (alias included) for as long as the builder lives.
#[derive(Clone, Debug)]
pub struct Select<'a> {
    table: Cow<'a, Table>,
    all: bool,
    columns: Vec<&'a Column>,
    joins: Vec<Join<'a>>,
    where_: Option<Condition>,
    order: Vec<&'a Column>,
}

impl<'a> Select<'a> {
    /// Start a SELECT over `table`.
    pub fn from(table: &'a Table) -> Self {
        Self::with_table(Cow::Borrowed(table))
    }

    fn with_table(table: Cow<'a, Table>) -> Self {
        Self {
            table,
            all: false,
            columns: Vec::new(),
            joins: Vec::new(),
            where_: None,
            order: Vec::new(),
        }
    }

    /// Start a SELECT over a table known only by name.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self::with_table(Cow::Owned(Table::new(name)))
    }

    // ==================== Projection ====================

    /// Project every column: `*`, or `<alias>.*` when the table is aliased.
    ///
    /// Takes precedence over any explicit column list.
    pub fn all(mut self) -> Self {
        self.all = true;
        self
    }

    /// Append columns to the projection.
    pub fn columns(mut self, columns: impl IntoIterator<Item = &'a Column>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Append one column to the projection.
    pub fn column(mut self, column: &'a Column) -> Self {
        self.columns.push(column);
        self
    }

    // ==================== Joins ====================

    /// Append a pre-built join.
    pub fn join(mut self, join: Join<'a>) -> Self {
        self.joins.push(join);
        self
    }

    pub fn inner_join(self, table: &'a Table, on: Condition) -> Self {
        self.join(Join::new(JoinType::Inner, table, on))
    }

    pub fn left_join(self, table: &'a Table, on: Condition) -> Self {
        self.join(Join::new(JoinType::Left, table, on))
    }

    pub fn right_join(self, table: &'a Table, on: Condition) -> Self {
        self.join(Join::new(JoinType::Right, table, on))
    }

    pub fn full_join(self, table: &'a Table, on: Condition) -> Self {
        self.join(Join::new(JoinType::Full, table, on))
    }

    // ==================== WHERE / ORDER BY ====================

    /// Set the WHERE condition, replacing any previous one.
    pub fn where_(mut self, cond: Condition) -> Self {
        self.where_ = Some(cond);
        self
    }

    /// Append ORDER BY columns.
    pub fn order(mut self, columns: impl IntoIterator<Item = &'a Column>) -> Self {
        self.order.extend(columns);
        self
    }

    /// Append one ORDER BY column.
    pub fn order_by(mut self, column: &'a Column) -> Self {
        self.order.push(column);
        self
    }

    // ==================== Build ====================

    fn write_projection(&self, out: &mut String) {
        if self.all || self.columns.is_empty() {
            if let Some(alias) = self.table.alias() {
                out.push_str(alias);
                out.push('.');
            }
            out.push('*');
            return;
        }
        push_column_list(out, &self.columns);
    }
}

fn push_column_list(out: &mut String, columns: &[&Column]) {
    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(column.qualified_name());
    }
}

impl Statement for Select<'_> {
    fn kind(&self) -> StatementKind {
        StatementKind::Select
    }

    fn render(&self, _dialect: Dialect) -> String {
        let mut sql = String::from("SELECT ");
        self.write_projection(&mut sql);

        sql.push_str(" FROM ");
        sql.push_str(&self.table.from_clause());

        for join in &self.joins {
            sql.push(' ');
            join.write_to(&mut sql);
        }

        if let Some(cond) = &self.where_ {
            sql.push_str(" WHERE ");
            cond.write_to(&mut sql);
        }

        if !self.order.is_empty() {
            sql.push_str(" ORDER BY ");
            push_column_list(&mut sql, &self.order);
        }

        sql
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cond::{equal, greater_than};
    use crate::schema::DataType;

    fn table() -> Table {
        Table::new("t").with_columns([
            Column::new("a", DataType::Integer, 1),
            Column::new("b", DataType::Varchar, 20),
        ])
    }

    #[test]
    fn test_all() {
        let t = table();
        assert_eq!(t.select().all().build(), "SELECT * FROM t");
        assert_eq!(t.select().build(), "SELECT * FROM t");
    }

    #[test]
    fn test_all_aliased() {
        let t = table().with_alias("x");
        assert_eq!(Select::from(&t).all().build(), "SELECT x.* FROM t x");
    }

    #[test]
    fn test_all_overrides_columns() {
        let t = table();
        let sql = t.select().column(t.column("a").unwrap()).all().build();
        assert_eq!(sql, "SELECT * FROM t");
    }

    #[test]
    fn test_columns_where_order() {
        let t = table();
        let a = t.column("a").unwrap();
        let b = t.column("b").unwrap();
        let sql = t
            .select()
            .columns([a, b])
            .where_(greater_than(a, 3))
            .order([b, a])
            .build();
        assert_eq!(sql, "SELECT a, b FROM t WHERE a > 3 ORDER BY b, a");
    }

    #[test]
    fn test_where_replaced() {
        let t = table();
        let a = t.column("a").unwrap();
        let sql = t.select().where_(equal(a, 1)).where_(equal(a, 2)).to_sql();
        assert_eq!(sql, "SELECT * FROM t WHERE a = 2");
    }

    #[test]
    fn test_joins_in_order() {
        let t = table().with_alias("x");
        let u = Table::new("u")
            .with_alias("y")
            .with_columns([Column::new("a", DataType::Integer, 1)]);
        let v = Table::new("v").with_columns([Column::new("b", DataType::Varchar, 20)]);

        let sql = t
            .select()
            .column(t.column("a").unwrap())
            .left_join(&u, equal(t.column("a").unwrap(), u.column("a").unwrap()))
            .full_join(&v, equal(t.column("b").unwrap(), v.column("b").unwrap()))
            .order_by(u.column("a").unwrap())
            .build();
        assert_eq!(
            sql,
            "SELECT x.a FROM t x LEFT OUTER JOIN u y ON x.a = y.a FULL OUTER JOIN v ON x.b = b ORDER BY y.a"
        );
    }
}
