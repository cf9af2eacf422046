use crate::dialect::Dialect;
use crate::schema::DataType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A table column: name, type and DDL flags.
///
/// The alias (`<table alias>.<name>`) is managed by the owning
/// [`Table`](crate::schema::Table); a free-standing column has none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    #[serde(skip)]
    alias: Option<String>,
    data_type: DataType,
    size: u32,
    #[serde(default)]
    not_null: bool,
    #[serde(default)]
    primary_key: bool,
    #[serde(default)]
    auto_increment: bool,
}

impl Column {
    /// Create a nullable, non-key column.
    pub fn new(name: impl Into<String>, data_type: DataType, size: u32) -> Self {
        Self {
            name: name.into(),
            alias: None,
            data_type,
            size,
            not_null: false,
            primary_key: false,
            auto_increment: false,
        }
    }

    /// Add a `NOT NULL` constraint.
    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    /// Mark the column as the `PRIMARY KEY`.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Let the database generate values for this column.
    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        if let Some(alias) = self.alias.as_mut() {
            // Keep the table prefix, swap the column part.
            let prefix_len = alias.rfind('.').map_or(0, |i| i + 1);
            alias.truncate(prefix_len);
            alias.push_str(&self.name);
        }
    }

    /// Qualified name (`t.col`) while the owning table is aliased.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Qualify the column with a table alias, or clear it with `None`.
    ///
    /// A blank alias clears it too.
    pub fn set_alias(&mut self, table_alias: Option<&str>) {
        self.alias = table_alias
            .filter(|a| !a.trim().is_empty())
            .map(|a| format!("{}.{}", a, self.name));
    }

    /// The alias when present, else the plain name.
    pub fn qualified_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn set_data_type(&mut self, data_type: DataType, size: u32) {
        self.data_type = data_type;
        self.size = size;
    }

    pub fn is_not_null(&self) -> bool {
        self.not_null
    }

    pub fn set_not_null(&mut self, value: bool) {
        self.not_null = value;
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    pub fn set_primary_key(&mut self, value: bool) {
        self.primary_key = value;
    }

    pub fn is_auto_increment(&self) -> bool {
        self.auto_increment
    }

    pub fn set_auto_increment(&mut self, value: bool) {
        self.auto_increment = value;
    }

    /// Column definition for `CREATE TABLE` in the given dialect.
    pub fn ddl(&self, dialect: Dialect) -> String {
        let mut sql = format!(
            "{} {}",
            self.name,
            dialect.type_clause(self.data_type, self.size)
        );
        if self.not_null {
            sql.push_str(" NOT NULL");
        }
        if self.primary_key {
            sql.push_str(" PRIMARY KEY");
        }
        if self.auto_increment {
            sql.push(' ');
            sql.push_str(dialect.auto_increment_clause());
        }
        sql
    }
}

/// Formats as the default-dialect column definition.
impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ddl(Dialect::default()))
    }
}
