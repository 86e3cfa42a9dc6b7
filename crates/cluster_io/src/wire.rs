use cluster_core::{Article, ArticleStatus, Cluster};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct WireArticle {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WireCluster {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub articles: Vec<WireArticle>,
}

impl From<WireArticle> for Article {
    fn from(wire: WireArticle) -> Self {
        Article {
            id: wire.id,
            title: wire.title,
            status: ArticleStatus::from_label(&wire.status),
        }
    }
}

impl From<&Article> for WireArticle {
    fn from(article: &Article) -> Self {
        WireArticle {
            id: article.id.clone(),
            title: article.title.clone(),
            status: article.status.group_name().to_string(),
        }
    }
}

impl From<WireCluster> for Cluster {
    fn from(wire: WireCluster) -> Self {
        Cluster {
            id: wire.id,
            name: wire.name,
            articles: wire.articles.into_iter().map(Article::from).collect(),
        }
    }
}
