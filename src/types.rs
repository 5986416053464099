//! Core type definitions
//!
//! Table schemas as supplied by the application, the scalar values bound to
//! statements, and the statements themselves.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Table Schema (input)
// ============================================================================

/// Description of a table to create
///
/// Deserializes from the plain JSON shape:
///
/// ```json
/// {
///     "name": "Person",
///     "columns": [
///         {"name": "id", "datatype": "INT", "constraints": ["NOT NULL", "PRIMARY KEY"]}
///     ],
///     "foreign_keys": [
///         {"name": "parent_id", "references_table": "Person", "references_column": "id"}
///     ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableSchema {
    /// Table name, e.g. `Person`
    pub name: String,

    /// Column definitions, in table order
    pub columns: Vec<ColumnDefinition>,

    /// Optional foreign key clauses, appended after the columns
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub foreign_keys: Vec<ForeignKey>,
}

impl TableSchema {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnDefinition>) -> Self {
        Self {
            name: name.into(),
            columns,
            foreign_keys: Vec::new(),
        }
    }

    /// Add a foreign key clause
    pub fn foreign_key(mut self, foreign_key: ForeignKey) -> Self {
        self.foreign_keys.push(foreign_key);
        self
    }
}

/// A single column of a [`TableSchema`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnDefinition {
    /// Column name, e.g. `is_active`
    pub name: String,

    /// Data type declaration, e.g. `VARCHAR(255)`
    pub datatype: String,

    /// Constraint keywords, emitted in the given order
    #[serde(default)]
    pub constraints: Vec<String>,
}

impl ColumnDefinition {
    pub fn new(name: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            datatype: datatype.into(),
            constraints: Vec::new(),
        }
    }

    /// Append a constraint keyword
    pub fn constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraints.push(constraint.into());
        self
    }

    pub fn not_null(self) -> Self {
        self.constraint("NOT NULL")
    }

    pub fn primary_key(self) -> Self {
        self.constraint("PRIMARY KEY")
    }

    pub fn auto_increment(self) -> Self {
        self.constraint("AUTO_INCREMENT")
    }

    pub fn unique(self) -> Self {
        self.constraint("UNIQUE")
    }
}

/// `FOREIGN KEY (name) REFERENCES references_table(references_column)`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForeignKey {
    /// Referencing column in the table being created
    pub name: String,
    pub references_table: String,
    pub references_column: String,
}

impl ForeignKey {
    pub fn new(
        name: impl Into<String>,
        references_table: impl Into<String>,
        references_column: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            references_table: references_table.into(),
            references_column: references_column.into(),
        }
    }
}

// ============================================================================
// Bound values and statements (output)
// ============================================================================

/// A native scalar bound to a statement placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => write!(f, "{:?}", s),
        }
    }
}

/// Generated SQL text with its positional `?` parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<Value>,
}

impl Statement {
    /// A statement with no bound parameters
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    pub fn with_params(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Schema Deserialization Tests
    // =========================================================================

    #[test]
    fn test_schema_from_json() {
        let schema: TableSchema = serde_json::from_value(serde_json::json!({
            "name": "Person",
            "columns": [
                {"name": "id", "datatype": "INT", "constraints": ["NOT NULL", "AUTO_INCREMENT", "PRIMARY KEY"]},
                {"name": "name", "datatype": "VARCHAR(255)", "constraints": ["NOT NULL"]}
            ],
            "foreign_keys": [
                {"name": "person_id", "references_table": "Person", "references_column": "id"}
            ]
        }))
        .unwrap();

        assert_eq!(schema.name, "Person");
        assert_eq!(schema.columns.len(), 2);
        assert_eq!(
            schema.columns[0].constraints,
            vec!["NOT NULL", "AUTO_INCREMENT", "PRIMARY KEY"]
        );
        assert_eq!(
            schema.foreign_keys,
            vec![ForeignKey::new("person_id", "Person", "id")]
        );
    }

    #[test]
    fn test_schema_optional_fields_default() {
        let schema: TableSchema = serde_json::from_str(
            r#"{"name": "Tag", "columns": [{"name": "label", "datatype": "TEXT"}]}"#,
        )
        .unwrap();

        assert!(schema.foreign_keys.is_empty());
        assert!(schema.columns[0].constraints.is_empty());
    }

    #[test]
    fn test_schema_missing_columns_fails() {
        let result: std::result::Result<TableSchema, _> =
            serde_json::from_str(r#"{"name": "Tag"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_schema_serialization_skips_empty_foreign_keys() {
        let schema = TableSchema::new("Tag", vec![ColumnDefinition::new("label", "TEXT")]);
        let json = serde_json::to_value(&schema).unwrap();
        assert!(json.get("foreign_keys").is_none());
    }

    // =========================================================================
    // Builder Tests
    // =========================================================================

    #[test]
    fn test_column_builder_keeps_order() {
        let col = ColumnDefinition::new("id", "INT")
            .not_null()
            .auto_increment()
            .primary_key();
        assert_eq!(
            col.constraints,
            vec!["NOT NULL", "AUTO_INCREMENT", "PRIMARY KEY"]
        );
    }

    #[test]
    fn test_schema_builder_foreign_keys() {
        let schema = TableSchema::new("Pet", vec![ColumnDefinition::new("owner_id", "INT")])
            .foreign_key(ForeignKey::new("owner_id", "Person", "id"));
        assert_eq!(schema.foreign_keys.len(), 1);
        assert_eq!(schema.foreign_keys[0].references_table, "Person");
    }

    // =========================================================================
    // Value / Statement Tests
    // =========================================================================

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Integer(42).to_string(), "42");
        assert_eq!(Value::Float(3.5).to_string(), "3.5");
        assert_eq!(Value::Text("Alice".into()).to_string(), "\"Alice\"");
    }

    #[test]
    fn test_statement_constructors() {
        let stmt = Statement::new("SELECT 1;");
        assert!(stmt.params.is_empty());

        let stmt = Statement::with_params("INSERT", vec![Value::Null]);
        assert_eq!(stmt.params, vec![Value::Null]);
    }
}
