//! # mysql-table-creator
//!
//! Create MySQL tables and append rows from plain schema data.
//!
//! Table schemas and rows are described as data (structs, or JSON in the
//! same shape) and turned into SQL by this crate. Everything that must be
//! interpolated into statement text (table names, column names, data types,
//! constraints) is checked against an allow-list first; row values are always
//! bound as parameters.
//!
//! ## Features
//!
//! - **Allow-list validation**: table names like `Person`, column names like
//!   `is_active`, data types and constraints from a versionable literal catalog
//! - **Reserved word quoting**: `Order` becomes `` `Order` ``
//! - **Parameterized inserts**: values are coerced to integers, floats,
//!   booleans or null and bound to `?` placeholders
//! - **Pluggable connections**: anything implementing [`Connection`], with a
//!   blocking `sqlx` MySQL session included
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mysql_table_creator::{
//!     ColumnDefinition, ConnectionConfig, MySqlSession, TableCreator, TableSchema,
//! };
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creator = TableCreator::new()?;
//!     let mut conn = MySqlSession::connect(&ConnectionConfig::from_env()?)?;
//!
//!     let schema = TableSchema::new(
//!         "Person",
//!         vec![
//!             ColumnDefinition::new("id", "INT").not_null().auto_increment().primary_key(),
//!             ColumnDefinition::new("name", "VARCHAR(255)").not_null(),
//!         ],
//!     );
//!     creator.create_table(&schema, &mut conn)?;
//!
//!     creator.append_row("Person", &["id", "name"], &["1", "Alice"], &mut conn)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Building statements only
//!
//! ```rust
//! use mysql_table_creator::{TableCreator, Value};
//!
//! let creator = TableCreator::new().unwrap();
//! let stmt = creator.build_insert_row("Person", &["id", "name"], &["1", "Alice"]).unwrap();
//!
//! assert_eq!(stmt.sql, "INSERT INTO Person (id, name) VALUES (?, ?);");
//! assert_eq!(stmt.params, vec![Value::Integer(1), Value::Text("Alice".into())]);
//! ```

pub mod config;
pub mod connection;
pub mod creator;
pub mod error;
pub mod mysql;
pub mod sql;
pub mod types;

// Re-export main types for convenience
pub use config::{ConnectionConfig, ConnectionConfigBuilder, CreatorOptions};
pub use connection::Connection;
pub use creator::TableCreator;
pub use error::{IdentifierKind, Result, TableCreatorError};
pub use mysql::MySqlSession;
pub use sql::{Catalog, RawValue};
pub use types::{ColumnDefinition, ForeignKey, Statement, TableSchema, Value};
