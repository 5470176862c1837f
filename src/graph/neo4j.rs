use super::statement::Column;
use super::{GraphStore, Row, Statement, StoreError};
use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use neo4rs::{ConfigBuilder, Graph, Node};
use serde_json::{Map, Value};
use tracing::debug;

/// Neo4j-backed store. `Graph` pools its bolt connections, so every
/// statement borrows one for its own duration.
#[derive(Clone)]
pub struct Neo4jStore {
    graph: Graph,
}

impl Neo4jStore {
    pub async fn connect(config: &Config) -> Result<Self> {
        let graph_config = ConfigBuilder::default()
            .uri(config.neo4j_uri.as_str())
            .user(config.neo4j_user.as_str())
            .password(config.neo4j_password.as_str())
            .db(config.neo4j_database.as_str())
            .max_connections(config.neo4j_max_connections)
            .build()
            .context("Invalid Neo4j configuration")?;

        let graph = Graph::connect(graph_config)
            .await
            .context("Failed to connect to Neo4j")?;

        Ok(Self { graph })
    }
}

#[async_trait]
impl GraphStore for Neo4jStore {
    async fn execute(&self, statement: Statement) -> Result<Vec<Row>, StoreError> {
        debug!(cypher = statement.cypher(), "Running statement");

        let mut result = self.graph.execute(statement.to_query()).await?;

        let mut rows = Vec::new();
        while let Some(row) = result.next().await? {
            rows.push(decode_row(&row, statement.columns())?);
        }

        Ok(rows)
    }
}

/// Read the returned columns of one bolt row into a [`Row`]. Node columns
/// become their property map, scalar columns keep whatever the store holds
/// (null included).
fn decode_row(row: &neo4rs::Row, columns: &[Column]) -> Result<Row, StoreError> {
    let mut out = Row::new();
    for column in columns {
        match *column {
            Column::Node(name) => {
                let node: Node = row.get(name)?;
                out.insert(name.to_string(), Value::Object(node_properties(&node)?));
            }
            Column::Scalar(name) => {
                let value: Value = row.get(name)?;
                out.insert(name.to_string(), value);
            }
        }
    }
    Ok(out)
}

fn node_properties(node: &Node) -> Result<Map<String, Value>, StoreError> {
    let mut props = Map::new();
    for key in node.keys() {
        let value: Value = node.get(key)?;
        props.insert(key.to_string(), value);
    }
    Ok(props)
}
