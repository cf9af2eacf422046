//! Conditions for WHERE and JOIN ... ON clauses.
//!
//! The free functions here mirror the [`Condition`] constructors so call
//! sites can read like SQL:
//!
//! ```
//! use querybaker::cond::*;
//! use querybaker::schema::{Column, DataType};
//!
//! let age = Column::new("age", DataType::Integer, 1);
//! let c = and(not(equal(&age, 1)), less_than(&age, 65));
//! assert_eq!(c.to_string(), "( NOT (age = 1) AND age < 65)");
//! ```

mod expr;
mod operand;
mod symbol;

pub use expr::Condition;
pub use operand::{ColumnRef, Literal, Operand, format};
pub use symbol::Symbol;

/// `left = right`
pub fn equal(left: impl Into<Operand>, right: impl Into<Operand>) -> Condition {
    Condition::equal(left, right)
}

/// `left < right`
pub fn less_than(left: impl Into<Operand>, right: impl Into<Operand>) -> Condition {
    Condition::less_than(left, right)
}

/// `left <= right`
pub fn less_than_or_equal(left: impl Into<Operand>, right: impl Into<Operand>) -> Condition {
    Condition::less_than_or_equal(left, right)
}

/// `left > right`
pub fn greater_than(left: impl Into<Operand>, right: impl Into<Operand>) -> Condition {
    Condition::greater_than(left, right)
}

/// `left >= right`
pub fn greater_than_or_equal(left: impl Into<Operand>, right: impl Into<Operand>) -> Condition {
    Condition::greater_than_or_equal(left, right)
}

/// `(a AND b)`
pub fn and(a: Condition, b: Condition) -> Condition {
    a.and(b)
}

/// `(a AND b AND ...)`
pub fn and_all(a: Condition, b: Condition, more: impl IntoIterator<Item = Condition>) -> Condition {
    a.and_all(b, more)
}

/// `(a OR b)`
pub fn or(a: Condition, b: Condition) -> Condition {
    a.or(b)
}

/// `(a OR b OR ...)`
pub fn or_all(a: Condition, b: Condition, more: impl IntoIterator<Item = Condition>) -> Condition {
    a.or_all(b, more)
}

/// ` NOT (c)`
pub fn not(c: Condition) -> Condition {
    c.negate()
}

/// Raw SQL fragment.
pub fn raw(sql: impl Into<String>) -> Condition {
    Condition::raw(sql)
}
