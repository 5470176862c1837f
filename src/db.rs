use crate::{
    config::Config,
    graph::{GraphStore, neo4j::Neo4jStore},
};
use anyhow::Result;
use std::sync::Arc;

pub async fn init_graph(config: &Config) -> Result<Arc<dyn GraphStore>> {
    let store = Neo4jStore::connect(config).await?;
    Ok(Arc::new(store))
}
