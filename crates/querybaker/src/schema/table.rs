use crate::dialect::Dialect;
use crate::error::{QbError, QbResult};
use crate::qb::{Delete, Insert, Select, Statement, StatementKind, Update};
use crate::schema::Column;
use crate::trace;
use serde::{Deserialize, Serialize};

/// A table definition that owns its columns.
///
/// Column order is insertion order and is the order used by `CREATE TABLE`.
/// Changing the table alias re-qualifies every owned column.
///
/// # Example
/// ```
/// use querybaker::prelude::*;
///
/// let orders = Table::new("orders")
///     .with_alias("o")
///     .with_columns([
///         Column::new("id", DataType::Integer, 1).not_null().primary_key(),
///         Column::new("total", DataType::Decimal, 1),
///     ]);
///
/// let id = orders.column("id")?;
/// let sql = orders.delete().where_(equal(id, 7)).build();
/// assert_eq!(sql, "DELETE FROM orders o WHERE o.id = 7");
/// # Ok::<(), querybaker::QbError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TableDef")]
pub struct Table {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alias: Option<String>,
    #[serde(default)]
    columns: Vec<Column>,
}

/// Serialized form of [`Table`]. Column aliases are not stored; they are
/// derived again from the table alias on load.
#[derive(Deserialize)]
struct TableDef {
    name: String,
    #[serde(default)]
    alias: Option<String>,
    #[serde(default)]
    columns: Vec<Column>,
}

impl From<TableDef> for Table {
    fn from(def: TableDef) -> Self {
        let mut table = Table::new(def.name);
        table.set_alias(def.alias.as_deref());
        table.add_columns(def.columns);
        table
    }
}

impl Table {
    /// Create an empty, unaliased table.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            columns: Vec::new(),
        }
    }

    /// Alias for `new`.
    pub fn create(name: impl Into<String>) -> Self {
        Self::new(name)
    }

    /// Create an unaliased table owning `columns`.
    pub fn create_with(name: impl Into<String>, columns: Vec<Column>) -> Self {
        let mut table = Self::new(name);
        table.add_columns(columns);
        table
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn is_aliased(&self) -> bool {
        self.alias.is_some()
    }

    /// Set or clear the alias, re-qualifying every owned column.
    ///
    /// A blank alias clears it.
    pub fn set_alias(&mut self, alias: Option<&str>) {
        let alias = alias.filter(|a| !a.trim().is_empty());
        for column in &mut self.columns {
            column.set_alias(alias);
        }
        self.alias = alias.map(str::to_string);
    }

    /// Builder form of [`set_alias`](Self::set_alias).
    pub fn with_alias(mut self, alias: &str) -> Self {
        self.set_alias(Some(alias));
        self
    }

    /// Builder form that drops any alias.
    pub fn without_alias(mut self) -> Self {
        self.set_alias(None);
        self
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Append columns in argument order, qualifying them if the table is aliased.
    pub fn add_columns(&mut self, columns: impl IntoIterator<Item = Column>) {
        for mut column in columns {
            column.set_alias(self.alias.as_deref());
            self.columns.push(column);
        }
    }

    /// Builder form of [`add_columns`](Self::add_columns).
    pub fn with_columns(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
        self.add_columns(columns);
        self
    }

    /// Append a column, rejecting a name the table already owns.
    pub fn add_column(&mut self, column: Column) -> QbResult<()> {
        if self.has_column(column.name()) {
            return Err(QbError::duplicate_column(&self.name, column.name()));
        }
        self.add_columns([column]);
        Ok(())
    }

    /// Builder form of [`add_column`](Self::add_column) for several columns.
    pub fn try_columns(mut self, columns: impl IntoIterator<Item = Column>) -> QbResult<Self> {
        for column in columns {
            self.add_column(column)?;
        }
        Ok(self)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name() == name)
    }

    /// Look up an owned column by its unqualified name.
    pub fn column(&self, name: &str) -> QbResult<&Column> {
        self.columns
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| QbError::unknown_column(&self.name, name))
    }

    pub fn column_mut(&mut self, name: &str) -> QbResult<&mut Column> {
        let table = &self.name;
        self.columns
            .iter_mut()
            .find(|c| c.name() == name)
            .ok_or_else(|| QbError::unknown_column(table, name))
    }

    /// `FROM`-clause form: `name` or `name alias`.
    pub(crate) fn from_clause(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{} {}", self.name, alias),
            None => self.name.clone(),
        }
    }

    // ==================== Statement factories ====================

    /// SELECT on this table.
    pub fn select(&self) -> Select<'_> {
        Select::from(self)
    }

    /// INSERT INTO this table.
    pub fn insert(&self) -> Insert<'_> {
        Insert::into(self)
    }

    /// UPDATE this table.
    pub fn update(&self) -> Update<'_> {
        Update::table(self)
    }

    /// DELETE FROM this table.
    pub fn delete(&self) -> Delete<'_> {
        Delete::from(self)
    }

    /// `DROP TABLE <name>`
    pub fn drop(&self) -> String {
        let sql = format!("DROP TABLE {}", self.name);
        trace::emit(StatementKind::DropTable, &sql, &Default::default());
        sql
    }

    /// `TRUNCATE TABLE <name>`
    pub fn truncate(&self) -> String {
        let sql = format!("TRUNCATE TABLE {}", self.name);
        trace::emit(StatementKind::TruncateTable, &sql, &Default::default());
        sql
    }
}

/// `CREATE TABLE` rendering.
impl Statement for Table {
    fn kind(&self) -> StatementKind {
        StatementKind::CreateTable
    }

    fn render(&self, dialect: Dialect) -> String {
        let defs: Vec<String> = self.columns.iter().map(|c| c.ddl(dialect)).collect();
        format!("CREATE TABLE {} ({});", self.name, defs.join(", "))
    }

    fn validate(&self) -> QbResult<()> {
        if self.name.trim().is_empty() {
            return Err(QbError::invalid_argument("Table name cannot be empty"));
        }
        if let Some(i) = self.columns.iter().position(|c| c.name().trim().is_empty()) {
            return Err(QbError::invalid_argument(format!(
                "Column {} of table {} has an empty name",
                i + 1,
                self.name
            )));
        }
        if self.columns.is_empty() {
            return Err(QbError::empty_statement(format!(
                "CREATE TABLE {} has no columns",
                self.name
            )));
        }
        Ok(())
    }
}
