//! SQL dialects targeted by DDL rendering.
//!
//! Statements (SELECT/INSERT/UPDATE/DELETE) render the same text in every
//! dialect. Only `CREATE TABLE` output differs: type clauses and the
//! auto-increment clause are looked up here.

use crate::schema::DataType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Target database product for DDL fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// Apache Derby (the historical default).
    #[default]
    Derby,
    /// PostgreSQL
    Postgres,
    /// MySQL
    #[serde(rename = "mysql")]
    MySql,
}

impl Dialect {
    /// Render the type clause for `data_type`, e.g. `VARCHAR(255)`.
    ///
    /// `size` is ignored for types without a length parameter.
    pub fn type_clause(self, data_type: DataType, size: u32) -> String {
        match self {
            Dialect::Derby => derby_type(data_type, size),
            Dialect::Postgres => postgres_type(data_type, size),
            Dialect::MySql => mysql_type(data_type, size),
        }
    }

    /// Column suffix that makes the database generate ascending ids.
    pub fn auto_increment_clause(self) -> &'static str {
        match self {
            Dialect::Derby => "GENERATED ALWAYS AS IDENTITY (START WITH 1, INCREMENT BY 1)",
            Dialect::Postgres => "GENERATED ALWAYS AS IDENTITY",
            Dialect::MySql => "AUTO_INCREMENT",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Dialect::Derby => "derby",
            Dialect::Postgres => "postgres",
            Dialect::MySql => "mysql",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn derby_type(data_type: DataType, size: u32) -> String {
    match data_type {
        DataType::Char => format!("CHAR({size})"),
        DataType::Varchar => format!("VARCHAR({size})"),
        DataType::LongVarchar => "LONG VARCHAR".to_string(),
        DataType::CharForBitData => format!("CHAR({size}) FOR BIT DATA"),
        DataType::VarcharForBitData => format!("VARCHAR({size}) FOR BIT DATA"),
        DataType::LongVarcharForBitData => "LONG VARCHAR FOR BIT DATA".to_string(),
        DataType::Clob => format!("CLOB({size})"),
        DataType::Blob => format!("BLOB({size})"),
        DataType::Xml => "XML".to_string(),
        DataType::Boolean => "BOOLEAN".to_string(),
        DataType::Smallint => "SMALLINT".to_string(),
        DataType::Integer => "INT".to_string(),
        DataType::Bigint => "BIGINT".to_string(),
        // TODO: carry precision and scale for DECIMAL and precision for FLOAT
        DataType::Decimal => "DECIMAL".to_string(),
        DataType::Real => "REAL".to_string(),
        DataType::Double => "DOUBLE".to_string(),
        DataType::Float => "FLOAT".to_string(),
        DataType::Date => "DATE".to_string(),
        DataType::Time => "TIME".to_string(),
        DataType::Timestamp => "TIMESTAMP".to_string(),
    }
}

fn postgres_type(data_type: DataType, size: u32) -> String {
    match data_type {
        DataType::Char => format!("CHAR({size})"),
        DataType::Varchar => format!("VARCHAR({size})"),
        DataType::LongVarchar | DataType::Clob => "TEXT".to_string(),
        // Postgres has a single binary string type.
        DataType::CharForBitData
        | DataType::VarcharForBitData
        | DataType::LongVarcharForBitData
        | DataType::Blob => "BYTEA".to_string(),
        DataType::Xml => "XML".to_string(),
        DataType::Boolean => "BOOLEAN".to_string(),
        DataType::Smallint => "SMALLINT".to_string(),
        DataType::Integer => "INTEGER".to_string(),
        DataType::Bigint => "BIGINT".to_string(),
        DataType::Decimal => "DECIMAL".to_string(),
        DataType::Real => "REAL".to_string(),
        DataType::Double => "DOUBLE PRECISION".to_string(),
        DataType::Float => "FLOAT".to_string(),
        DataType::Date => "DATE".to_string(),
        DataType::Time => "TIME".to_string(),
        DataType::Timestamp => "TIMESTAMP".to_string(),
    }
}

fn mysql_type(data_type: DataType, size: u32) -> String {
    match data_type {
        DataType::Char => format!("CHAR({size})"),
        DataType::Varchar => format!("VARCHAR({size})"),
        DataType::LongVarchar | DataType::Xml => "LONGTEXT".to_string(),
        DataType::CharForBitData => format!("BINARY({size})"),
        DataType::VarcharForBitData => format!("VARBINARY({size})"),
        DataType::LongVarcharForBitData => "LONGBLOB".to_string(),
        DataType::Clob => "LONGTEXT".to_string(),
        DataType::Blob => format!("BLOB({size})"),
        DataType::Boolean => "BOOLEAN".to_string(),
        DataType::Smallint => "SMALLINT".to_string(),
        DataType::Integer => "INT".to_string(),
        DataType::Bigint => "BIGINT".to_string(),
        DataType::Decimal => "DECIMAL".to_string(),
        DataType::Real => "REAL".to_string(),
        DataType::Double => "DOUBLE".to_string(),
        DataType::Float => "FLOAT".to_string(),
        DataType::Date => "DATE".to_string(),
        DataType::Time => "TIME".to_string(),
        DataType::Timestamp => "TIMESTAMP".to_string(),
    }
}
