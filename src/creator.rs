//! TableCreator - main entry point
//!
//! Validates schemas and rows, builds the statements, then runs each one on
//! the caller's connection followed by a commit.

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::CreatorOptions;
use crate::connection::Connection;
use crate::error::{Result, TableCreatorError};
use crate::sql::catalog::Catalog;
use crate::sql::coerce::RawValue;
use crate::sql::ddl::DdlGenerator;
use crate::sql::dml::DmlGenerator;
use crate::types::{Statement, TableSchema, Value};

/// Creates tables and appends rows through a [`Connection`]
///
/// Holds the literal catalog and generation options. The catalog is shared,
/// so clones of a creator (and other threads) read the same allow-lists.
#[derive(Debug, Clone)]
pub struct TableCreator {
    catalog: Arc<Catalog>,
    options: CreatorOptions,
}

impl TableCreator {
    /// Create a creator using the bundled literal catalog
    pub fn new() -> Result<Self> {
        Ok(Self::with_catalog(Arc::new(Catalog::load()?)))
    }

    /// Create a creator over an already loaded catalog
    pub fn with_catalog(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            options: CreatorOptions::default(),
        }
    }

    /// Replace the generation options
    pub fn options(mut self, options: CreatorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn creator_options(&self) -> &CreatorOptions {
        &self.options
    }

    /// Build the CREATE TABLE statement without executing it
    pub fn build_create_table(&self, schema: &TableSchema) -> Result<Statement> {
        DdlGenerator::new(&self.catalog, &self.options).generate_create_table(schema)
    }

    /// Build the INSERT statement for one row without executing it
    pub fn build_insert_row<C, V>(
        &self,
        table_name: &str,
        column_names: &[C],
        row: &[V],
    ) -> Result<Statement>
    where
        C: AsRef<str>,
        V: RawValue,
    {
        DmlGenerator::new(&self.catalog, &self.options).generate_insert(
            table_name,
            column_names,
            row,
        )
    }

    /// Create a table from its schema
    ///
    /// Runs `CREATE TABLE IF NOT EXISTS`, so an existing table is left as it
    /// is, even when its definition differs from `schema`.
    pub fn create_table<C: Connection>(&self, schema: &TableSchema, conn: &mut C) -> Result<()> {
        let statement = self.build_create_table(schema)?;
        Self::run(&statement, conn)?;
        info!("Table {} ensured", schema.name);
        Ok(())
    }

    /// Append one row to a table
    ///
    /// Values are coerced to native types and bound as parameters.
    pub fn append_row<C, V, Conn>(
        &self,
        table_name: &str,
        column_names: &[C],
        row: &[V],
        conn: &mut Conn,
    ) -> Result<()>
    where
        C: AsRef<str>,
        V: RawValue,
        Conn: Connection,
    {
        let statement = self.build_insert_row(table_name, column_names, row)?;
        Self::run(&statement, conn)?;
        info!("Row appended to {}", table_name);
        Ok(())
    }

    fn run<C: Connection>(statement: &Statement, conn: &mut C) -> Result<()> {
        let params: Vec<String> = statement.params.iter().map(Value::to_string).collect();
        debug!("Executing {} with parameters [{}]", statement.sql, params.join(", "));
        conn.execute(&statement.sql, &statement.params)
            .map_err(TableCreatorError::execution)?;
        conn.commit().map_err(TableCreatorError::execution)?;
        Ok(())
    }
}
