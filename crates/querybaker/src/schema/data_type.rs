//! Logical column types.

use crate::dialect::Dialect;
use crate::error::QbError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Logical type of a column.
///
/// The dialect-specific DDL spelling comes from [`Dialect::type_clause`];
/// [`DataType::clause`] is the shortcut for the default dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    // Text
    Char,
    Varchar,
    LongVarchar,
    CharForBitData,
    VarcharForBitData,
    LongVarcharForBitData,
    Clob,
    Blob,
    Xml,

    // Numeric
    Boolean,
    Smallint,
    Integer,
    Bigint,
    Decimal,
    Real,
    Double,
    Float,

    // Temporal
    Date,
    Time,
    Timestamp,
}

impl DataType {
    /// Every variant, in declaration order.
    pub const ALL: [DataType; 20] = [
        DataType::Char,
        DataType::Varchar,
        DataType::LongVarchar,
        DataType::CharForBitData,
        DataType::VarcharForBitData,
        DataType::LongVarcharForBitData,
        DataType::Clob,
        DataType::Blob,
        DataType::Xml,
        DataType::Boolean,
        DataType::Smallint,
        DataType::Integer,
        DataType::Bigint,
        DataType::Decimal,
        DataType::Real,
        DataType::Double,
        DataType::Float,
        DataType::Date,
        DataType::Time,
        DataType::Timestamp,
    ];

    /// DDL type clause in the default dialect, e.g. `VARCHAR(255)`.
    pub fn clause(self, size: u32) -> String {
        Dialect::default().type_clause(self, size)
    }

    /// Whether the rendered clause carries the size parameter.
    pub fn is_sized(self) -> bool {
        matches!(
            self,
            DataType::Char
                | DataType::Varchar
                | DataType::CharForBitData
                | DataType::VarcharForBitData
                | DataType::Clob
                | DataType::Blob
        )
    }

    pub fn is_text(self) -> bool {
        matches!(
            self,
            DataType::Char
                | DataType::Varchar
                | DataType::LongVarchar
                | DataType::CharForBitData
                | DataType::VarcharForBitData
                | DataType::LongVarcharForBitData
                | DataType::Clob
                | DataType::Blob
                | DataType::Xml
        )
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            DataType::Boolean
                | DataType::Smallint
                | DataType::Integer
                | DataType::Bigint
                | DataType::Decimal
                | DataType::Real
                | DataType::Double
                | DataType::Float
        )
    }

    pub fn is_temporal(self) -> bool {
        matches!(self, DataType::Date | DataType::Time | DataType::Timestamp)
    }

    /// Variant name as written in config files, e.g. `LONG_VARCHAR`.
    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Char => "CHAR",
            DataType::Varchar => "VARCHAR",
            DataType::LongVarchar => "LONG_VARCHAR",
            DataType::CharForBitData => "CHAR_FOR_BIT_DATA",
            DataType::VarcharForBitData => "VARCHAR_FOR_BIT_DATA",
            DataType::LongVarcharForBitData => "LONG_VARCHAR_FOR_BIT_DATA",
            DataType::Clob => "CLOB",
            DataType::Blob => "BLOB",
            DataType::Xml => "XML",
            DataType::Boolean => "BOOLEAN",
            DataType::Smallint => "SMALLINT",
            DataType::Integer => "INTEGER",
            DataType::Bigint => "BIGINT",
            DataType::Decimal => "DECIMAL",
            DataType::Real => "REAL",
            DataType::Double => "DOUBLE",
            DataType::Float => "FLOAT",
            DataType::Date => "DATE",
            DataType::Time => "TIME",
            DataType::Timestamp => "TIMESTAMP",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = QbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace([' ', '-'], "_");
        DataType::ALL
            .into_iter()
            .find(|dt| dt.as_str() == normalized)
            .ok_or_else(|| QbError::invalid_argument(format!("Unsupported data type: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_clause() {
        assert_eq!(DataType::Varchar.clause(255), "VARCHAR(255)");
        assert_eq!(DataType::Integer.clause(1), "INT");
        assert_eq!(DataType::CharForBitData.clause(16), "CHAR(16) FOR BIT DATA");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("varchar".parse::<DataType>().unwrap(), DataType::Varchar);
        assert_eq!(
            "long varchar for bit data".parse::<DataType>().unwrap(),
            DataType::LongVarcharForBitData
        );
        assert!("uuid".parse::<DataType>().is_err());
    }

    #[test]
    fn test_display_matches_from_str() {
        for dt in DataType::ALL {
            assert_eq!(dt.to_string().parse::<DataType>().unwrap(), dt);
        }
    }

    #[test]
    fn test_categories() {
        assert!(DataType::Clob.is_sized());
        assert!(!DataType::LongVarchar.is_sized());
        assert!(DataType::Xml.is_text());
        assert!(DataType::Decimal.is_numeric());
        assert!(DataType::Timestamp.is_temporal());
    }
}
