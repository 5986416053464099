//! MySQL-backed [`Connection`]
//!
//! Drives `sqlx` from synchronous code through a current-thread tokio
//! runtime owned by the session.

use std::str::FromStr;

use sqlx::Transaction;
use sqlx::mysql::{MySql, MySqlArguments, MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::query::Query;
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, info};

use crate::config::ConnectionConfig;
use crate::connection::Connection;
use crate::error::{Result, TableCreatorError};
use crate::types::Value;

/// A single blocking MySQL connection
///
/// Statements run inside a transaction that is opened by the first
/// `execute` and finished by `commit`. Dropping the session with an open
/// transaction rolls it back.
pub struct MySqlSession {
    pending: Option<Transaction<'static, MySql>>,
    pool: MySqlPool,
    runtime: Runtime,
}

impl MySqlSession {
    /// Connect using the given configuration
    pub fn connect(config: &ConnectionConfig) -> Result<Self> {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.username)
            .password(&config.password)
            .database(&config.database);
        info!(
            "Connecting to database {} at {}:{}",
            config.database, config.host, config.port
        );
        Self::connect_with(options)
    }

    /// Connect using a `mysql://` URL
    pub fn connect_url(url: &str) -> Result<Self> {
        let options = MySqlConnectOptions::from_str(url)
            .map_err(|e| TableCreatorError::config(format!("Invalid database URL: {}", e)))?;
        Self::connect_with(options)
    }

    fn connect_with(options: MySqlConnectOptions) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| TableCreatorError::connection(format!("Cannot start runtime: {}", e)))?;

        // One connection only; the pool just owns it across transactions
        let pool = runtime
            .block_on(
                MySqlPoolOptions::new()
                    .max_connections(1)
                    .connect_with(options),
            )
            .map_err(|e| {
                TableCreatorError::connection(format!("Database connection failed: {}", e))
            })?;

        info!("Connected to database");
        Ok(Self {
            pending: None,
            pool,
            runtime,
        })
    }

    /// Whether statements have been executed since the last commit
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

fn bind_value<'q>(
    query: Query<'q, MySql, MySqlArguments>,
    value: &'q Value,
) -> Query<'q, MySql, MySqlArguments> {
    match value {
        Value::Null => query.bind(None::<String>),
        Value::Bool(b) => query.bind(*b),
        Value::Integer(i) => query.bind(*i),
        Value::Float(x) => query.bind(*x),
        Value::Text(s) => query.bind(s.as_str()),
    }
}

impl Connection for MySqlSession {
    type Error = sqlx::Error;

    fn execute(&mut self, sql: &str, params: &[Value]) -> std::result::Result<(), sqlx::Error> {
        let mut tx = match self.pending.take() {
            Some(tx) => tx,
            None => self.runtime.block_on(self.pool.begin())?,
        };

        let query = params.iter().fold(sqlx::query(sql), bind_value);
        let result = self.runtime.block_on(query.execute(&mut *tx));
        self.pending = Some(tx);

        let done = result?;
        debug!("{} row(s) affected", done.rows_affected());
        Ok(())
    }

    fn commit(&mut self) -> std::result::Result<(), sqlx::Error> {
        if let Some(tx) = self.pending.take() {
            self.runtime.block_on(tx.commit())?;
        }
        Ok(())
    }
}

impl Drop for MySqlSession {
    // The pooled connection must be released inside the session's runtime
    fn drop(&mut self) {
        if let Some(tx) = self.pending.take() {
            if let Err(e) = self.runtime.block_on(tx.rollback()) {
                debug!("Rollback on drop failed: {}", e);
            } else {
                debug!("Rolled back uncommitted statements");
            }
        }
        self.runtime.block_on(self.pool.close());
    }
}
