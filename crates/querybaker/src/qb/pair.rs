use crate::cond::{Literal, Operand};
use crate::schema::Column;

/// A column/value assignment used by INSERT and UPDATE.
///
/// Only the plain column name is kept; assignment targets are never
/// alias-qualified.
#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    column: String,
    value: Operand,
}

impl Pair {
    pub fn new(column: &Column, value: impl Into<Operand>) -> Self {
        Self {
            column: column.name().to_string(),
            value: value.into(),
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn value(&self) -> &Operand {
        &self.value
    }

    /// True if the value is a string literal that would render unbalanced quotes.
    pub fn has_embedded_quote(&self) -> bool {
        match &self.value {
            Operand::Literal(l) => l.has_embedded_quote(),
            Operand::SubExpression(c) => {
                c.any_operand(&mut |o| o.as_literal().is_some_and(Literal::has_embedded_quote))
            }
            _ => false,
        }
    }
}

/// Pair `column` with `value`.
pub fn pair(column: &Column, value: impl Into<Operand>) -> Pair {
    Pair::new(column, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{DataType, Table};

    #[test]
    fn test_pair_drops_alias() {
        let t = Table::new("t")
            .with_alias("x")
            .with_columns([Column::new("c", DataType::Integer, 1)]);
        let p = pair(t.column("c").unwrap(), 3);
        assert_eq!(p.column(), "c");
        assert_eq!(p.value().render(), "3");
    }

    #[test]
    fn test_embedded_quote() {
        let c = Column::new("c", DataType::Varchar, 10);
        assert!(pair(&c, "a\"b").has_embedded_quote());
        assert!(!pair(&c, "ab").has_embedded_quote());
        assert!(!pair(&c, 1).has_embedded_quote());
    }
}
