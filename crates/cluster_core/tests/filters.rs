use cluster_core::{Article, ArticleStatus, Cluster, FilterGroup};

fn cluster(id: &str, articles: usize) -> Cluster {
    Cluster {
        id: id.to_string(),
        name: String::new(),
        articles: (0..articles)
            .map(|n| Article::new(n.to_string(), ArticleStatus::Default))
            .collect(),
    }
}

fn ids(clusters: &[Cluster]) -> Vec<&str> {
    clusters.iter().map(|c| c.id.as_str()).collect()
}

fn sample() -> Vec<Cluster> {
    vec![cluster("a", 0), cluster("b", 3), cluster("c", 1)]
}

#[test]
fn named_filter_is_applied() {
    let mut filters = FilterGroup::new();
    filters.insert("non-empty", |clusters: Vec<Cluster>| {
        clusters
            .into_iter()
            .filter(|c| !c.articles.is_empty())
            .collect()
    });

    let filtered = filters.apply("non-empty", sample());
    assert_eq!(ids(&filtered), ["b", "c"]);
}

#[test]
fn unknown_filter_passes_clusters_through() {
    let filters = FilterGroup::new();

    let filtered = filters.apply("missing", sample());
    assert_eq!(ids(&filtered), ["a", "b", "c"]);
}

#[test]
fn insert_replaces_existing_name() {
    let mut filters = FilterGroup::new();
    filters.insert("pick", |clusters: Vec<Cluster>| clusters.into_iter().take(1).collect());
    filters.insert("pick", |clusters: Vec<Cluster>| clusters.into_iter().skip(2).collect());

    assert_eq!(filters.len(), 1);
    assert_eq!(ids(&filters.apply("pick", sample())), ["c"]);
}

#[test]
fn apply_all_chains_in_insertion_order() {
    let mut filters = FilterGroup::new();
    filters.insert("largest-first", |mut clusters: Vec<Cluster>| {
        clusters.sort_by(|x, y| y.articles.len().cmp(&x.articles.len()));
        clusters
    });
    filters.insert("top-two", |clusters: Vec<Cluster>| clusters.into_iter().take(2).collect());

    let names: Vec<&str> = filters.names().collect();
    assert_eq!(names, ["largest-first", "top-two"]);
    assert_eq!(ids(&filters.apply_all(sample())), ["b", "c"]);
}
