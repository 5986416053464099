//! DDL Generation
//!
//! Builds `CREATE TABLE IF NOT EXISTS` statements from a [`TableSchema`].
//! Every name, type and constraint is validated against the catalog before
//! any text is assembled; the statement carries no bound parameters.

use crate::config::CreatorOptions;
use crate::error::{Result, TableCreatorError};
use crate::sql::catalog::Catalog;
use crate::sql::sanitize::{
    checked_column_name, validate_constraint, validate_datatype, validate_table_name,
};
use crate::types::{ColumnDefinition, ForeignKey, Statement, TableSchema};

/// DDL Generator for table creation
pub struct DdlGenerator<'a> {
    catalog: &'a Catalog,
    options: &'a CreatorOptions,
}

impl<'a> DdlGenerator<'a> {
    pub fn new(catalog: &'a Catalog, options: &'a CreatorOptions) -> Self {
        Self { catalog, options }
    }

    /// Generate the CREATE TABLE statement for a schema
    ///
    /// Column definitions come first, in schema order, followed by the
    /// foreign key clauses. Constraints keep their input order.
    pub fn generate_create_table(&self, schema: &TableSchema) -> Result<Statement> {
        let table = validate_table_name(&schema.name, self.catalog)?;

        if schema.columns.is_empty() {
            return Err(TableCreatorError::EmptySchema {
                table: schema.name.clone(),
            });
        }

        let mut definitions = Vec::with_capacity(schema.columns.len() + schema.foreign_keys.len());
        for column in &schema.columns {
            definitions.push(self.format_column_definition(column)?);
        }
        for foreign_key in &schema.foreign_keys {
            definitions.push(self.format_foreign_key(foreign_key)?);
        }

        Ok(Statement::new(format!(
            "CREATE TABLE IF NOT EXISTS {} ({});",
            table,
            definitions.join(", ")
        )))
    }

    /// Format a single column definition, e.g. `id int NOT NULL PRIMARY KEY `
    pub fn format_column_definition(&self, column: &ColumnDefinition) -> Result<String> {
        let mut definition = format!(
            "{} {} ",
            checked_column_name(&column.name, self.catalog, self.options)?,
            validate_datatype(&column.datatype, self.catalog)?
        );
        for constraint in &column.constraints {
            definition.push_str(&validate_constraint(constraint, self.catalog)?);
            definition.push(' ');
        }
        Ok(definition)
    }

    /// Format a foreign key clause, e.g. `FOREIGN KEY (owner_id) REFERENCES Person(id) `
    pub fn format_foreign_key(&self, foreign_key: &ForeignKey) -> Result<String> {
        Ok(format!(
            "FOREIGN KEY ({}) REFERENCES {}({}) ",
            checked_column_name(&foreign_key.name, self.catalog, self.options)?,
            validate_table_name(&foreign_key.references_table, self.catalog)?,
            checked_column_name(&foreign_key.references_column, self.catalog, self.options)?
        ))
    }
}
