//! DML Generation
//!
//! Builds parameterized `INSERT` statements. Only the table and column names
//! are interpolated (after validation); row values are coerced and bound to
//! `?` placeholders.

use crate::config::CreatorOptions;
use crate::error::{Result, TableCreatorError};
use crate::sql::catalog::Catalog;
use crate::sql::coerce::{RawValue, coerce};
use crate::sql::sanitize::{checked_column_name, validate_table_name};
use crate::types::Statement;

/// DML Generator for row insertion
pub struct DmlGenerator<'a> {
    catalog: &'a Catalog,
    options: &'a CreatorOptions,
}

impl<'a> DmlGenerator<'a> {
    pub fn new(catalog: &'a Catalog, options: &'a CreatorOptions) -> Self {
        Self { catalog, options }
    }

    /// Generate an INSERT statement for one row
    ///
    /// `column_names` and `row` must have the same length.
    pub fn generate_insert<C, V>(
        &self,
        table_name: &str,
        column_names: &[C],
        row: &[V],
    ) -> Result<Statement>
    where
        C: AsRef<str>,
        V: RawValue,
    {
        if column_names.len() != row.len() {
            return Err(TableCreatorError::ArityMismatch {
                columns: column_names.len(),
                values: row.len(),
            });
        }

        let table = validate_table_name(table_name, self.catalog)?;
        let columns = column_names
            .iter()
            .map(|name| checked_column_name(name.as_ref(), self.catalog, self.options))
            .collect::<Result<Vec<_>>>()?;

        let params = row.iter().map(coerce).collect();
        let placeholders = vec!["?"; row.len()];

        Ok(Statement::with_params(
            format!(
                "INSERT INTO {} ({}) VALUES ({});",
                table,
                columns.join(", "),
                placeholders.join(", ")
            ),
            params,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IdentifierKind;
    use crate::types::Value;

    fn catalog() -> Catalog {
        Catalog::load().unwrap()
    }

    // ==================== INSERT Tests ====================

    #[test]
    fn test_generate_insert() {
        let catalog = catalog();
        let options = CreatorOptions::default();
        let generator = DmlGenerator::new(&catalog, &options);

        let stmt = generator
            .generate_insert("Person", &["id", "name"], &["1", "Alice"])
            .unwrap();

        assert_eq!(stmt.sql, "INSERT INTO Person (id, name) VALUES (?, ?);");
        assert_eq!(
            stmt.params,
            vec![Value::Integer(1), Value::Text("Alice".to_string())]
        );
    }

    #[test]
    fn test_generate_insert_coerces_every_value() {
        let catalog = catalog();
        let options = CreatorOptions::default();
        let generator = DmlGenerator::new(&catalog, &options);

        let stmt = generator
            .generate_insert(
                "Person",
                &["age", "score", "is_active", "nickname", "name"],
                &["30", "9.5", "false", "null", "Bob"],
            )
            .unwrap();

        assert_eq!(
            stmt.sql,
            "INSERT INTO Person (age, score, is_active, nickname, name) VALUES (?, ?, ?, ?, ?);"
        );
        assert_eq!(
            stmt.params,
            vec![
                Value::Integer(30),
                Value::Float(9.5),
                Value::Bool(true),
                Value::Null,
                Value::Text("Bob".to_string()),
            ]
        );
    }

    #[test]
    fn test_generate_insert_values_never_interpolated() {
        let catalog = catalog();
        let options = CreatorOptions::default();
        let generator = DmlGenerator::new(&catalog, &options);

        let payload = "'); DROP TABLE Person; --";
        let stmt = generator
            .generate_insert("Person", &["name"], &[payload])
            .unwrap();

        assert_eq!(stmt.sql, "INSERT INTO Person (name) VALUES (?);");
        assert!(!stmt.sql.contains("DROP"));
        assert_eq!(stmt.params, vec![Value::Text(payload.to_string())]);
    }

    #[test]
    fn test_generate_insert_json_row() {
        let catalog = catalog();
        let options = CreatorOptions::default();
        let generator = DmlGenerator::new(&catalog, &options);

        let row = [
            serde_json::json!(5),
            serde_json::json!("Carol"),
            serde_json::json!(null),
        ];
        let stmt = generator
            .generate_insert("Person", &["id", "name", "age"], &row)
            .unwrap();

        assert_eq!(
            stmt.params,
            vec![Value::Integer(5), Value::Text("Carol".into()), Value::Null]
        );
    }

    #[test]
    fn test_generate_insert_reserved_words_quoted() {
        let catalog = catalog();
        let options = CreatorOptions::default();
        let generator = DmlGenerator::new(&catalog, &options);

        let stmt = generator
            .generate_insert("Order", &["key", "order"], &[1, 2])
            .unwrap();

        assert_eq!(
            stmt.sql,
            "INSERT INTO `Order` (`key`, `order`) VALUES (?, ?);"
        );
    }

    #[test]
    fn test_generate_insert_empty_row() {
        let catalog = catalog();
        let options = CreatorOptions::default();
        let generator = DmlGenerator::new(&catalog, &options);

        let stmt = generator
            .generate_insert::<&str, &str>("Person", &[], &[])
            .unwrap();

        assert_eq!(stmt.sql, "INSERT INTO Person () VALUES ();");
        assert!(stmt.params.is_empty());
    }

    // ==================== Validation Failure Tests ====================

    #[test]
    fn test_arity_mismatch() {
        let catalog = catalog();
        let options = CreatorOptions::default();
        let generator = DmlGenerator::new(&catalog, &options);

        let err = generator
            .generate_insert("Person", &["id", "name"], &["1"])
            .unwrap_err();
        assert!(matches!(
            err,
            TableCreatorError::ArityMismatch {
                columns: 2,
                values: 1
            }
        ));
    }

    #[test]
    fn test_arity_checked_before_names() {
        let catalog = catalog();
        let options = CreatorOptions::default();
        let generator = DmlGenerator::new(&catalog, &options);

        let err = generator
            .generate_insert("bad table", &["id"], &["1", "2"])
            .unwrap_err();
        assert!(matches!(err, TableCreatorError::ArityMismatch { .. }));
    }

    #[test]
    fn test_invalid_table_name() {
        let catalog = catalog();
        let options = CreatorOptions::default();
        let generator = DmlGenerator::new(&catalog, &options);

        let err = generator
            .generate_insert("Person; DROP TABLE Person;", &["id"], &["1"])
            .unwrap_err();
        assert!(matches!(
            err,
            TableCreatorError::InvalidIdentifier {
                kind: IdentifierKind::Table,
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_column_name() {
        let catalog = catalog();
        let options = CreatorOptions::default();
        let generator = DmlGenerator::new(&catalog, &options);

        let err = generator
            .generate_insert("Person", &["id", "name) VALUES (1); --"], &["1", "x"])
            .unwrap_err();
        assert!(matches!(
            err,
            TableCreatorError::InvalidIdentifier {
                kind: IdentifierKind::Column,
                ref value,
            } if value == "name) VALUES (1); --"
        ));
    }

    #[test]
    fn test_empty_column_name_option() {
        let catalog = catalog();

        let permissive = CreatorOptions::default();
        let stmt = DmlGenerator::new(&catalog, &permissive)
            .generate_insert("Person", &[""], &["1"])
            .unwrap();
        assert_eq!(stmt.sql, "INSERT INTO Person () VALUES (?);");

        let strict = CreatorOptions::default().reject_empty_column_names(true);
        let err = DmlGenerator::new(&catalog, &strict)
            .generate_insert("Person", &[""], &["1"])
            .unwrap_err();
        assert!(matches!(err, TableCreatorError::InvalidIdentifier { .. }));
    }
}
