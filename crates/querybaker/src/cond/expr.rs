//! Condition expression tree for WHERE and JOIN ... ON clauses.
//!
//! Combinators take their inputs by value and return a new node, so a
//! condition can never be changed behind the back of a builder that holds it.
//! Rendering happens in a single recursive pass.

use crate::cond::{Operand, Symbol};
use std::fmt;
use std::ops;

/// Expression node for building WHERE/ON clauses.
///
/// Grouping is explicit: every AND/OR group renders inside its own
/// parentheses, and NOT wraps its operand in parentheses.
#[derive(Clone, Debug, PartialEq)]
pub enum Condition {
    /// Binary comparison: `left op right`.
    Comparison {
        left: Operand,
        op: Symbol,
        right: Operand,
    },

    /// AND group of two or more conditions: `(a AND b ...)`.
    And(Vec<Condition>),

    /// OR group of two or more conditions: `(a OR b ...)`.
    Or(Vec<Condition>),

    /// Negation: ` NOT (inner)`.
    Not(Box<Condition>),

    /// Raw SQL fragment, rendered verbatim.
    Raw(String),
}

impl Condition {
    fn compare(left: impl Into<Operand>, op: Symbol, right: impl Into<Operand>) -> Self {
        debug_assert!(op.is_comparison());
        Condition::Comparison {
            left: left.into(),
            op,
            right: right.into(),
        }
    }

    /// `left = right`
    pub fn equal(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::compare(left, Symbol::Eq, right)
    }

    /// `left < right`
    pub fn less_than(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::compare(left, Symbol::Lt, right)
    }

    /// `left <= right`
    pub fn less_than_or_equal(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::compare(left, Symbol::Lte, right)
    }

    /// `left > right`
    pub fn greater_than(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::compare(left, Symbol::Gt, right)
    }

    /// `left >= right`
    pub fn greater_than_or_equal(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::compare(left, Symbol::Gte, right)
    }

    /// Group `self` and `other` with AND.
    pub fn and(self, other: Condition) -> Self {
        Condition::And(vec![self, other])
    }

    /// Group `self`, `second` and every extra condition with AND.
    pub fn and_all(self, second: Condition, more: impl IntoIterator<Item = Condition>) -> Self {
        let mut group = vec![self, second];
        group.extend(more);
        Condition::And(group)
    }

    /// Group `self` and `other` with OR.
    pub fn or(self, other: Condition) -> Self {
        Condition::Or(vec![self, other])
    }

    /// Group `self`, `second` and every extra condition with OR.
    pub fn or_all(self, second: Condition, more: impl IntoIterator<Item = Condition>) -> Self {
        let mut group = vec![self, second];
        group.extend(more);
        Condition::Or(group)
    }

    /// Negate this condition.
    pub fn negate(self) -> Self {
        Condition::Not(Box::new(self))
    }

    /// A raw SQL fragment.
    pub fn raw(sql: impl Into<String>) -> Self {
        Condition::Raw(sql.into())
    }

    /// Number of comparison and raw leaves in the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Condition::Comparison { .. } | Condition::Raw(_) => 1,
            Condition::And(group) | Condition::Or(group) => {
                group.iter().map(Condition::leaf_count).sum()
            }
            Condition::Not(inner) => inner.leaf_count(),
        }
    }

    /// True if `pred` holds for any leaf operand, searching sub-expressions too.
    pub(crate) fn any_operand(&self, pred: &mut dyn FnMut(&Operand) -> bool) -> bool {
        match self {
            Condition::Comparison { left, right, .. } => {
                [left, right].into_iter().any(|o| match o {
                    Operand::SubExpression(c) => c.any_operand(pred),
                    other => pred(other),
                })
            }
            Condition::And(group) | Condition::Or(group) => {
                group.iter().any(|c| c.any_operand(pred))
            }
            Condition::Not(inner) => inner.any_operand(pred),
            Condition::Raw(_) => false,
        }
    }

    /// Append the SQL text of this condition.
    pub(crate) fn write_to(&self, out: &mut String) {
        match self {
            Condition::Comparison { left, op, right } => {
                left.write_to(out);
                out.push_str(op.as_str());
                right.write_to(out);
            }
            Condition::And(group) => write_group(out, group, Symbol::And),
            Condition::Or(group) => write_group(out, group, Symbol::Or),
            Condition::Not(inner) => {
                out.push_str(Symbol::Not.as_str());
                out.push_str(Symbol::Lp.as_str());
                inner.write_to(out);
                out.push_str(Symbol::Rp.as_str());
            }
            Condition::Raw(sql) => out.push_str(sql),
        }
    }

    /// Render the condition to SQL text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }
}

fn write_group(out: &mut String, group: &[Condition], joiner: Symbol) {
    out.push_str(Symbol::Lp.as_str());
    for (i, cond) in group.iter().enumerate() {
        if i > 0 {
            out.push_str(joiner.as_str());
        }
        cond.write_to(out);
    }
    out.push_str(Symbol::Rp.as_str());
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl ops::Not for Condition {
    type Output = Condition;

    fn not(self) -> Condition {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Column, DataType};

    fn cols() -> (Column, Column, Column) {
        (
            Column::new("column_1", DataType::Integer, 1),
            Column::new("column_2", DataType::Integer, 1),
            Column::new("column_3", DataType::Integer, 1),
        )
    }

    #[test]
    fn test_comparisons() {
        let (c1, c2, _) = cols();
        assert_eq!(Condition::equal(&c1, 1).render(), "column_1 = 1");
        assert_eq!(Condition::less_than(&c1, 2).render(), "column_1 < 2");
        assert_eq!(Condition::less_than_or_equal(&c1, 3).render(), "column_1 <= 3");
        assert_eq!(Condition::greater_than(&c1, 4).render(), "column_1 > 4");
        assert_eq!(Condition::greater_than_or_equal(&c1, 5).render(), "column_1 >= 5");
        assert_eq!(Condition::equal(&c1, &c2).render(), "column_1 = column_2");
    }

    #[test]
    fn test_not_inside_and() {
        let (c1, c2, _) = cols();
        let cond = Condition::equal(&c1, 24)
            .negate()
            .and(Condition::less_than(&c2, 45));
        assert_eq!(cond.render(), "( NOT (column_1 = 24) AND column_2 < 45)");
    }

    #[test]
    fn test_not_alone() {
        let (c1, _, _) = cols();
        assert_eq!((!Condition::equal(&c1, 1)).render(), " NOT (column_1 = 1)");
    }

    #[test]
    fn test_multiple() {
        let (c1, c2, c3) = cols();
        let cond = Condition::equal(&c1, 24).negate().and_all(
            Condition::less_than(&c2, 45),
            [Condition::equal(&c3, 56).or(Condition::equal(&c3, 89))],
        );
        assert_eq!(
            cond.render(),
            "( NOT (column_1 = 24) AND column_2 < 45 AND (column_3 = 56 OR column_3 = 89))"
        );
        assert_eq!(cond.leaf_count(), 4);
    }

    #[test]
    fn test_nested_groups_are_not_flattened() {
        let (c1, c2, c3) = cols();
        let cond = Condition::equal(&c1, 1)
            .and(Condition::equal(&c2, 2))
            .and(Condition::equal(&c3, 3));
        assert_eq!(
            cond.render(),
            "((column_1 = 1 AND column_2 = 2) AND column_3 = 3)"
        );
    }

    #[test]
    fn test_reuse_after_combination_is_safe() {
        let (c1, c2, _) = cols();
        let base = Condition::equal(&c1, 1);
        let combined = base.clone().or(Condition::equal(&c2, 2));
        assert_eq!(base.render(), "column_1 = 1");
        assert_eq!(combined.render(), "(column_1 = 1 OR column_2 = 2)");
    }

    #[test]
    fn test_raw_and_subexpression() {
        let (c1, _, _) = cols();
        let inner = Condition::raw("1 = 1");
        let cond = Condition::equal(inner, Condition::greater_than(&c1, 0));
        assert_eq!(cond.render(), "1 = 1 = column_1 > 0");
    }

    #[test]
    fn test_alias_snapshot() {
        let mut c = Column::new("id", DataType::Integer, 1);
        c.set_alias(Some("o"));
        let cond = Condition::equal(&c, 7);
        c.set_alias(None);
        assert_eq!(cond.to_string(), "o.id = 7");
    }

    #[test]
    fn test_any_operand_sees_nested_literals() {
        let (c1, _, _) = cols();
        let cond = Condition::equal(&c1, 1).negate().or(Condition::equal(
            Condition::equal(&c1, "x\"y"),
            true,
        ));
        assert!(cond.any_operand(&mut |o| o
            .as_literal()
            .is_some_and(|l| l.has_embedded_quote())));
    }
}
