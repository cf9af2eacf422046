//! JOIN fragments for SELECT.

use crate::cond::Condition;
use crate::schema::Table;
use std::fmt;

/// Join type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JoinType {
    #[default]
    Inner,
    Left,
    Right,
    Full,
}

impl JoinType {
    /// Keyword sequence that opens the join clause.
    pub fn keyword(self) -> &'static str {
        match self {
            JoinType::Inner => "INNER JOIN",
            JoinType::Left => "LEFT OUTER JOIN",
            JoinType::Right => "RIGHT OUTER JOIN",
            JoinType::Full => "FULL OUTER JOIN",
        }
    }
}

/// One `<KEYWORD> <table>[ <alias>] ON <condition>` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Join<'a> {
    kind: JoinType,
    table: &'a Table,
    on: Condition,
}

impl<'a> Join<'a> {
    pub fn new(kind: JoinType, table: &'a Table, on: Condition) -> Self {
        Self { kind, table, on }
    }

    pub fn inner(table: &'a Table, on: Condition) -> Self {
        Self::new(JoinType::Inner, table, on)
    }

    pub fn left(table: &'a Table, on: Condition) -> Self {
        Self::new(JoinType::Left, table, on)
    }

    pub fn right(table: &'a Table, on: Condition) -> Self {
        Self::new(JoinType::Right, table, on)
    }

    pub fn full(table: &'a Table, on: Condition) -> Self {
        Self::new(JoinType::Full, table, on)
    }

    pub fn kind(&self) -> JoinType {
        self.kind
    }

    pub fn table(&self) -> &'a Table {
        self.table
    }

    pub fn on(&self) -> &Condition {
        &self.on
    }

    pub(crate) fn write_to(&self, out: &mut String) {
        out.push_str(self.kind.keyword());
        out.push(' ');
        out.push_str(&self.table.from_clause());
        out.push_str(" ON ");
        self.on.write_to(out);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }
}

impl fmt::Display for Join<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cond::equal;
    use crate::schema::{Column, DataType};

    fn tables() -> (Table, Table) {
        let a = Table::new("a").with_columns([Column::new("id", DataType::Integer, 1)]);
        let b = Table::new("b")
            .with_alias("bb")
            .with_columns([Column::new("a_id", DataType::Integer, 1)]);
        (a, b)
    }

    #[test]
    fn test_keywords() {
        let (a, b) = tables();
        let on = || equal(a.column("id").unwrap(), b.column("a_id").unwrap());

        assert_eq!(Join::inner(&b, on()).render(), "INNER JOIN b bb ON id = bb.a_id");
        assert_eq!(Join::left(&b, on()).render(), "LEFT OUTER JOIN b bb ON id = bb.a_id");
        assert_eq!(Join::right(&b, on()).render(), "RIGHT OUTER JOIN b bb ON id = bb.a_id");
        assert_eq!(Join::full(&b, on()).render(), "FULL OUTER JOIN b bb ON id = bb.a_id");
    }

    #[test]
    fn test_unaliased_target() {
        let (a, b) = tables();
        let join = Join::new(
            JoinType::default(),
            &a,
            equal(b.column("a_id").unwrap(), a.column("id").unwrap()),
        );
        assert_eq!(join.to_string(), "INNER JOIN a ON bb.a_id = id");
        assert_eq!(join.kind(), JoinType::Inner);
        assert_eq!(join.table().name(), "a");
    }
}
