//! SQL utilities
//!
//! Literal catalog, validation, value coercion and statement generation.

pub mod catalog;
pub mod coerce;
pub mod ddl;
pub mod dml;
pub mod sanitize;

pub use catalog::Catalog;
pub use coerce::{RawValue, coerce};
pub use ddl::DdlGenerator;
pub use dml::DmlGenerator;
pub use sanitize::{
    quote_identifier, validate_column_name, validate_constraint, validate_datatype,
    validate_table_name,
};
