//! Statement builders.
//!
//! Every builder borrows the [`Table`] it renders from, is configured with
//! chained calls, and renders through the [`Statement`] trait. When only a
//! table name is at hand, `Select::by_name`, `Insert::by_name`,
//! `Update::by_name` and `Delete::by_name` build over an unaliased table of
//! that name.
//!
//! # Usage
//!
//! ```
//! use querybaker::prelude::*;
//!
//! let users = Table::new("users").with_columns([
//!     Column::new("id", DataType::Integer, 1).primary_key(),
//!     Column::new("name", DataType::Varchar, 64),
//! ]);
//! let id = users.column("id")?;
//! let name = users.column("name")?;
//!
//! // SELECT
//! let sql = select_from(&users).columns([id, name]).where_(equal(id, 1)).build();
//! assert_eq!(sql, "SELECT id, name FROM users WHERE id = 1");
//!
//! // INSERT
//! let sql = insert_into(&users).values([pair(id, 2), pair(name, "bo")]).build();
//! assert_eq!(sql, "INSERT INTO users (id, name) VALUES (2, \"bo\")");
//!
//! // UPDATE
//! let sql = update_table(&users).set(pair(name, "al")).where_(equal(id, 1)).build();
//! assert_eq!(sql, "UPDATE users SET name = \"al\" WHERE id = 1");
//!
//! // DELETE
//! let sql = delete_from(&users).where_(equal(id, 1)).build();
//! assert_eq!(sql, "DELETE FROM users WHERE id = 1");
//! # Ok::<(), querybaker::QbError>(())
//! ```

mod delete;
mod insert;
mod join;
mod pair;
mod select;
mod traits;
mod update;

pub use delete::Delete;
pub use insert::Insert;
pub use join::{Join, JoinType};
pub use pair::{Pair, pair};
pub use select::Select;
pub use traits::{Statement, StatementKind};
pub use update::Update;

use crate::schema::Table;

/// Create a SELECT builder over `table`.
pub fn select_from(table: &Table) -> Select<'_> {
    Select::from(table)
}

/// Create an INSERT builder for `table`.
pub fn insert_into(table: &Table) -> Insert<'_> {
    Insert::into(table)
}

/// Create an UPDATE builder for `table`.
pub fn update_table(table: &Table) -> Update<'_> {
    Update::table(table)
}

/// Create a DELETE builder for `table`.
pub fn delete_from(table: &Table) -> Delete<'_> {
    Delete::from(table)
}
