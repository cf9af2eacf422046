//! Table and column definitions.

mod column;
mod data_type;
mod table;

pub use column::Column;
pub use data_type::DataType;
pub use table::Table;
