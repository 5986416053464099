//! SQL Identifier and Literal Validation
//!
//! Allow-list checks for every fragment that is interpolated into statement
//! text: table names, column names, data types and constraints. Values never
//! go through here; they are always bound as parameters.

use std::sync::LazyLock;

use regex::Regex;
use tracing::error;

use crate::config::CreatorOptions;
use crate::error::{IdentifierKind, Result, TableCreatorError};
use crate::sql::catalog::Catalog;

static TABLE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-zA-Z_]*$").expect("table name pattern compiles"));

static COLUMN_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z_]*$").expect("column name pattern compiles"));

/// Quote a MySQL identifier with backticks
///
/// Embedded backticks are escaped by doubling them.
///
/// # Example
/// ```
/// use mysql_table_creator::sql::quote_identifier;
///
/// assert_eq!(quote_identifier("order"), "`order`");
/// ```
pub fn quote_identifier(identifier: &str) -> String {
    let escaped = identifier.replace('`', "``");
    format!("`{}`", escaped)
}

fn quote_if_reserved(identifier: &str, catalog: &Catalog) -> String {
    if catalog.is_reserved(identifier) {
        quote_identifier(identifier)
    } else {
        identifier.to_string()
    }
}

/// Validate a table name
///
/// Table names start with an uppercase letter followed by letters and
/// underscores only, e.g. `Person` or `Order_Item`. Reserved words are
/// returned quoted.
///
/// # Example
/// ```
/// use mysql_table_creator::sql::{Catalog, validate_table_name};
///
/// let catalog = Catalog::load().unwrap();
/// assert_eq!(validate_table_name("Person", &catalog).unwrap(), "Person");
/// assert_eq!(validate_table_name("Order", &catalog).unwrap(), "`Order`");
/// assert!(validate_table_name("person", &catalog).is_err());
/// ```
pub fn validate_table_name(name: &str, catalog: &Catalog) -> Result<String> {
    if TABLE_NAME.is_match(name) {
        Ok(quote_if_reserved(name, catalog))
    } else {
        error!("Table name {} not allowed", name);
        Err(TableCreatorError::invalid_identifier(
            IdentifierKind::Table,
            name,
        ))
    }
}

/// Validate a column name
///
/// Column names contain only lowercase letters and underscores, e.g.
/// `is_active`. The empty string passes this check. Reserved words are
/// returned quoted.
pub fn validate_column_name(name: &str, catalog: &Catalog) -> Result<String> {
    if COLUMN_NAME.is_match(name) {
        Ok(quote_if_reserved(name, catalog))
    } else {
        error!("Column name {} not allowed", name);
        Err(TableCreatorError::invalid_identifier(
            IdentifierKind::Column,
            name,
        ))
    }
}

/// Column name check used by the statement generators
///
/// Applies [`validate_column_name`] and, when the options ask for it, also
/// rejects the empty name.
pub(crate) fn checked_column_name(
    name: &str,
    catalog: &Catalog,
    options: &CreatorOptions,
) -> Result<String> {
    if name.is_empty() && options.reject_empty_column_names {
        error!("Empty column name not allowed");
        return Err(TableCreatorError::invalid_identifier(
            IdentifierKind::Column,
            name,
        ));
    }
    validate_column_name(name, catalog)
}

/// Validate a data type declaration against the catalog
///
/// Returns the declaration lowercased, e.g. `VARCHAR(255)` becomes
/// `varchar(255)`.
pub fn validate_datatype(datatype: &str, catalog: &Catalog) -> Result<String> {
    if catalog.allows_datatype(&datatype.to_uppercase()) {
        Ok(datatype.to_lowercase())
    } else {
        error!("Type {} not allowed", datatype);
        Err(TableCreatorError::InvalidDataType {
            value: datatype.to_string(),
        })
    }
}

/// Validate a column constraint against the catalog
///
/// Returns the constraint uppercased, e.g. `not null` becomes `NOT NULL`.
pub fn validate_constraint(constraint: &str, catalog: &Catalog) -> Result<String> {
    let upper = constraint.to_uppercase();
    if catalog.allows_constraint(&upper) {
        Ok(upper)
    } else {
        error!("Constraint {} not allowed", constraint);
        Err(TableCreatorError::InvalidConstraint {
            value: constraint.to_string(),
        })
    }
}
