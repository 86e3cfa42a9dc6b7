use std::fmt;

use cluster_logging::cluster_warn;

use crate::Cluster;

/// Transformation over a list of clusters, e.g. hiding resolved ones.
pub type Filter = Box<dyn Fn(Vec<Cluster>) -> Vec<Cluster>>;

/// Named collection of cluster filters, kept in insertion order.
#[derive(Default)]
pub struct FilterGroup {
    filters: Vec<(String, Filter)>,
}

impl FilterGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the filter registered under `name`.
    pub fn insert<F>(&mut self, name: impl Into<String>, filter: F)
    where
        F: Fn(Vec<Cluster>) -> Vec<Cluster> + 'static,
    {
        let name = name.into();
        let filter: Filter = Box::new(filter);
        match self.filters.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = filter,
            None => self.filters.push((name, filter)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Filter> {
        self.filters
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, filter)| filter)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.filters.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Runs the named filter; unknown names pass the clusters through untouched.
    pub fn apply(&self, name: &str, clusters: Vec<Cluster>) -> Vec<Cluster> {
        match self.get(name) {
            Some(filter) => filter(clusters),
            None => {
                cluster_warn!("no cluster filter named {:?}", name);
                clusters
            }
        }
    }

    /// Chains every filter in insertion order.
    pub fn apply_all(&self, clusters: Vec<Cluster>) -> Vec<Cluster> {
        self.filters
            .iter()
            .fold(clusters, |clusters, (_, filter)| filter(clusters))
    }
}

impl fmt::Debug for FilterGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterGroup")
            .field("filters", &self.names().collect::<Vec<_>>())
            .finish()
    }
}
