//! Cluster IO: JSON boundary between upstream cluster data and the grouping core.
mod decode;
mod encode;
mod wire;

pub use decode::{decode_cluster, decode_clusters, load_cluster, DecodeError};
pub use encode::{encode_groups, EncodeError};
