use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use cluster_core::Cluster;
use cluster_logging::{cluster_debug, cluster_warn};
use thiserror::Error;

use crate::wire::WireCluster;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to read cluster file: {0}")]
    Io(#[from] io::Error),
    #[error("malformed cluster json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cluster {cluster:?} lists article {id:?} more than once")]
    DuplicateArticleId { cluster: String, id: String },
}

/// Decode a single cluster from its JSON representation.
pub fn decode_cluster(json: &str) -> Result<Cluster, DecodeError> {
    let wire: WireCluster = serde_json::from_str(json)?;
    into_cluster(wire)
}

/// Decode a JSON array of clusters.
pub fn decode_clusters(json: &str) -> Result<Vec<Cluster>, DecodeError> {
    let wire: Vec<WireCluster> = serde_json::from_str(json)?;
    wire.into_iter().map(into_cluster).collect()
}

/// Read and decode a single cluster from a JSON file.
pub fn load_cluster(path: &Path) -> Result<Cluster, DecodeError> {
    let content = fs::read_to_string(path).inspect_err(|err| {
        cluster_warn!("Failed to read cluster from {:?}: {}", path, err);
    })?;
    decode_cluster(&content)
}

fn into_cluster(wire: WireCluster) -> Result<Cluster, DecodeError> {
    let mut seen = HashSet::with_capacity(wire.articles.len());
    if let Some(duplicate) = wire
        .articles
        .iter()
        .find(|article| !seen.insert(article.id.as_str()))
    {
        return Err(DecodeError::DuplicateArticleId {
            cluster: wire.id.clone(),
            id: duplicate.id.clone(),
        });
    }

    let cluster = Cluster::from(wire);
    cluster_debug!(
        "decoded cluster {:?} with {} articles",
        cluster.id,
        cluster.articles.len()
    );
    Ok(cluster)
}
