//! # querybaker
//!
//! A fluent builder for SQL statement strings.
//!
//! ## Features
//!
//! - **Schema in memory**: `Table` owns its `Column`s; aliasing a table re-qualifies every column
//! - **Composable conditions**: immutable `Condition` trees with explicit parenthesization
//! - **Statement builders**: SELECT (with joins and ORDER BY), INSERT, UPDATE, DELETE, CREATE TABLE
//! - **Dialect-aware DDL**: type and auto-increment clauses for Derby, Postgres, and MySQL
//! - **Tracing**: every built statement is emitted at DEBUG under `querybaker.sql`
//!
//! No SQL is parsed or executed; the output is text for a database driver.
//!
//! ## Quick start
//!
//! ```
//! use querybaker::prelude::*;
//!
//! let t = Table::create("test_table").with_alias("tt").with_columns([
//!     Column::new("column_1", DataType::Integer, 1).not_null().primary_key(),
//!     Column::new("column_2", DataType::Varchar, 255),
//! ]);
//! let c1 = t.column("column_1")?;
//!
//! assert_eq!(
//!     t.build(),
//!     "CREATE TABLE test_table (column_1 INT NOT NULL PRIMARY KEY, column_2 VARCHAR(255));"
//! );
//! assert_eq!(
//!     t.select().all().where_(greater_than(c1, 24)).build(),
//!     "SELECT tt.* FROM test_table tt WHERE tt.column_1 > 24"
//! );
//! # Ok::<(), querybaker::QbError>(())
//! ```

pub mod cond;
pub mod config;
pub mod dialect;
pub mod error;
pub mod prelude;
pub mod qb;
pub mod schema;

mod trace;

pub use cond::{ColumnRef, Condition, Literal, Operand, Symbol};
pub use config::{Config, TraceConfig};
pub use dialect::Dialect;
pub use error::{QbError, QbResult};
pub use schema::{Column, DataType, Table};

// Re-export qb module for easy access
pub use qb::{
    Delete, Insert, Join, JoinType, Pair, Select, Statement, StatementKind, Update, delete_from,
    insert_into, pair, select_from, update_table,
};
