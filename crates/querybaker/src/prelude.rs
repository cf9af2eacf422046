//! Convenient imports for typical `querybaker` usage.
//!
//! ```
//! use querybaker::prelude::*;
//! ```

pub use crate::{Column, DataType, Table};
pub use crate::{Config, Dialect, QbError, QbResult, TraceConfig};
pub use crate::{
    Delete, Insert, Join, JoinType, Pair, Select, Statement, Update, delete_from, insert_into,
    pair, select_from, update_table,
};

pub use crate::cond::{
    Condition, and, and_all, equal, greater_than, greater_than_or_equal, less_than,
    less_than_or_equal, not, or, or_all, raw,
};
