use crate::groups::{COMBINE_GROUP, DEFAULT_GROUP, IGNORE_GROUP};

pub type ArticleId = String;

/// Workflow status of an article; also names the group it starts in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ArticleStatus {
    #[default]
    Default,
    Combined,
    Ignored,
    /// Any label outside the canonical three, used verbatim as a group name.
    Custom(String),
}

impl ArticleStatus {
    /// Maps a raw status label onto a status, recognising the canonical group names.
    pub fn from_label(label: &str) -> Self {
        match label {
            DEFAULT_GROUP => ArticleStatus::Default,
            COMBINE_GROUP => ArticleStatus::Combined,
            IGNORE_GROUP => ArticleStatus::Ignored,
            other => ArticleStatus::Custom(other.to_string()),
        }
    }

    /// Name of the group an article with this status is placed in.
    pub fn group_name(&self) -> &str {
        match self {
            ArticleStatus::Default => DEFAULT_GROUP,
            ArticleStatus::Combined => COMBINE_GROUP,
            ArticleStatus::Ignored => IGNORE_GROUP,
            ArticleStatus::Custom(name) => name.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: Option<String>,
    pub status: ArticleStatus,
}

impl Article {
    pub fn new(id: impl Into<ArticleId>, status: ArticleStatus) -> Self {
        Self {
            id: id.into(),
            title: None,
            status,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Ordered set of related articles presented together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cluster {
    pub id: String,
    pub name: String,
    pub articles: Vec<Article>,
}

impl Cluster {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles,
            ..Self::default()
        }
    }
}
