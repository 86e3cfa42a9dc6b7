use cluster_core::Groups;
use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

use crate::wire::WireArticle;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to serialize groups: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize a grouping snapshot as a JSON object, keeping group order.
pub fn encode_groups(groups: &Groups) -> Result<String, EncodeError> {
    Ok(serde_json::to_string(&WireGroups(groups))?)
}

struct WireGroups<'a>(&'a Groups);

impl Serialize for WireGroups<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, articles) in self.0.iter() {
            let wire: Vec<WireArticle> = articles.iter().map(WireArticle::from).collect();
            map.serialize_entry(name, &wire)?;
        }
        map.end()
    }
}
