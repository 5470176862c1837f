//! Access to the attendance graph.
//!
//! Callers build a [`Statement`] and hand it to a [`GraphStore`]; each call is
//! one auto-committed unit of work and yields the returned rows, keyed by
//! column name.

use async_trait::async_trait;
use derive_more::Display;
use serde_json::{Map, Value};

#[cfg(test)]
pub mod memory;
pub mod neo4j;
pub mod statement;

pub use statement::Statement;

/// One result row: column name -> value. Node columns hold the node's
/// property map as a JSON object.
pub type Row = Map<String, Value>;

/// Failure talking to the store or decoding what it returned.
#[derive(Debug, Display)]
#[display(fmt = "graph store error: {}", _0)]
pub struct StoreError(pub String);

impl std::error::Error for StoreError {}

impl From<neo4rs::Error> for StoreError {
    fn from(e: neo4rs::Error) -> Self {
        StoreError(e.to_string())
    }
}

impl From<neo4rs::DeError> for StoreError {
    fn from(e: neo4rs::DeError) -> Self {
        StoreError(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError(format!("row decoding failed: {}", e))
    }
}

#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Run a single statement. No retries.
    async fn execute(&self, statement: Statement) -> Result<Vec<Row>, StoreError>;
}
