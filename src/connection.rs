//! The connection seam
//!
//! Statement generation never talks to a database directly. Generated
//! statements are handed to a [`Connection`], which the caller opens and
//! owns.

use crate::types::Value;

/// An open database connection that can run one statement at a time
///
/// `execute` receives SQL text with positional `?` placeholders and the
/// values to bind, in placeholder order. `commit` makes everything executed
/// since the last commit durable.
pub trait Connection {
    type Error: std::error::Error + Send + Sync + 'static;

    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<(), Self::Error>;

    fn commit(&mut self) -> Result<(), Self::Error>;
}

impl<C: Connection + ?Sized> Connection for &mut C {
    type Error = C::Error;

    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<(), Self::Error> {
        (**self).execute(sql, params)
    }

    fn commit(&mut self) -> Result<(), Self::Error> {
        (**self).commit()
    }
}
