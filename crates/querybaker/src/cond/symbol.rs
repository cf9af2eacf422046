use std::fmt;

/// Operator tokens used inside conditions.
///
/// Each token renders to a fixed string, including its surrounding spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Eq,
    Lt,
    Lte,
    Gt,
    Gte,
    Lp,
    Rp,
    Space,
    And,
    Or,
    Not,
}

impl Symbol {
    pub fn as_str(self) -> &'static str {
        match self {
            Symbol::Eq => " = ",
            Symbol::Lt => " < ",
            Symbol::Lte => " <= ",
            Symbol::Gt => " > ",
            Symbol::Gte => " >= ",
            Symbol::Lp => "(",
            Symbol::Rp => ")",
            Symbol::Space => " ",
            Symbol::And => " AND ",
            Symbol::Or => " OR ",
            Symbol::Not => " NOT ",
        }
    }

    /// Whether this token compares two operands.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            Symbol::Eq | Symbol::Lt | Symbol::Lte | Symbol::Gt | Symbol::Gte
        )
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_renderings() {
        assert_eq!(Symbol::Eq.as_str(), " = ");
        assert_eq!(Symbol::Gte.as_str(), " >= ");
        assert_eq!(Symbol::And.to_string(), " AND ");
        assert_eq!(Symbol::Not.to_string(), " NOT ");
        assert_eq!(Symbol::Lp.to_string(), "(");
    }

    #[test]
    fn test_is_comparison() {
        assert!(Symbol::Lte.is_comparison());
        assert!(!Symbol::Or.is_comparison());
        assert!(!Symbol::Space.is_comparison());
    }
}
