//! Operands and their SQL text.
//!
//! Anything that can appear on either side of a comparison, or as a value in
//! INSERT/UPDATE, converts into an [`Operand`] via `From`. Rendering is an
//! exhaustive match; there is no runtime type inspection.

use crate::cond::{Condition, Symbol};
use crate::schema::Column;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

/// A column as seen by a condition: its name and, if the owning table was
/// aliased when the condition was built, its qualified alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub name: String,
    pub alias: Option<String>,
}

impl ColumnRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    /// The alias when present, else the plain name.
    pub fn qualified_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

impl From<&Column> for ColumnRef {
    fn from(column: &Column) -> Self {
        Self {
            name: column.name().to_string(),
            alias: column.alias().map(str::to_string),
        }
    }
}

/// A literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Rendered in double quotes, verbatim.
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Date(NaiveDate),
    Time(NaiveTime),
    Timestamp(NaiveDateTime),
}

impl Literal {
    /// True for a string literal containing `"`.
    ///
    /// Quoting performs no escaping, so such a literal renders broken SQL.
    pub fn has_embedded_quote(&self) -> bool {
        matches!(self, Literal::String(s) if s.contains('"'))
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // TODO: escape embedded quotes once a quoting rule per dialect exists
            Literal::String(s) => write!(f, "\"{}\"", s),
            Literal::Integer(i) => write!(f, "{}", i),
            // Whole floats render with one fractional digit: `1.0`.
            Literal::Float(n) if n.is_finite() && n.fract() == 0.0 => write!(f, "{:.1}", n),
            Literal::Float(n) => write!(f, "{}", n),
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Date(d) => write!(f, "{}", d),
            Literal::Time(t) => write!(f, "{}", t),
            Literal::Timestamp(ts) => write!(f, "{}", ts),
        }
    }
}

/// Anything that can be formatted into a condition or a value list.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Column(ColumnRef),
    Literal(Literal),
    SubExpression(Box<Condition>),
    Operator(Symbol),
}

impl Operand {
    /// Append the SQL text of this operand.
    pub(crate) fn write_to(&self, out: &mut String) {
        match self {
            Operand::Column(c) => out.push_str(c.qualified_name()),
            Operand::Literal(l) => out.push_str(&l.to_string()),
            Operand::SubExpression(c) => c.write_to(out),
            Operand::Operator(s) => out.push_str(s.as_str()),
        }
    }

    /// SQL text of this operand.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Operand::Literal(l) => Some(l),
            _ => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Format any operand the way conditions and value lists do.
pub fn format(operand: impl Into<Operand>) -> String {
    operand.into().render()
}

impl From<&Column> for Operand {
    fn from(column: &Column) -> Self {
        Operand::Column(column.into())
    }
}

impl From<ColumnRef> for Operand {
    fn from(column: ColumnRef) -> Self {
        Operand::Column(column)
    }
}

impl From<Literal> for Operand {
    fn from(literal: Literal) -> Self {
        Operand::Literal(literal)
    }
}

impl From<Condition> for Operand {
    fn from(cond: Condition) -> Self {
        Operand::SubExpression(Box::new(cond))
    }
}

impl From<Symbol> for Operand {
    fn from(symbol: Symbol) -> Self {
        Operand::Operator(symbol)
    }
}

impl From<&str> for Operand {
    fn from(val: &str) -> Self {
        Operand::Literal(Literal::String(val.to_string()))
    }
}

impl From<String> for Operand {
    fn from(val: String) -> Self {
        Operand::Literal(Literal::String(val))
    }
}

impl From<&String> for Operand {
    fn from(val: &String) -> Self {
        Operand::Literal(Literal::String(val.clone()))
    }
}

impl From<bool> for Operand {
    fn from(val: bool) -> Self {
        Operand::Literal(Literal::Bool(val))
    }
}

impl From<f32> for Operand {
    fn from(val: f32) -> Self {
        Operand::Literal(Literal::Float(val as f64))
    }
}

impl From<f64> for Operand {
    fn from(val: f64) -> Self {
        Operand::Literal(Literal::Float(val))
    }
}

impl From<NaiveDate> for Operand {
    fn from(val: NaiveDate) -> Self {
        Operand::Literal(Literal::Date(val))
    }
}

impl From<NaiveTime> for Operand {
    fn from(val: NaiveTime) -> Self {
        Operand::Literal(Literal::Time(val))
    }
}

impl From<NaiveDateTime> for Operand {
    fn from(val: NaiveDateTime) -> Self {
        Operand::Literal(Literal::Timestamp(val))
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(val: $ty) -> Self {
                    Operand::Literal(Literal::Integer(val as i64))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);
