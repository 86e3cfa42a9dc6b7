use crate::ArticleId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupingView {
    pub groups: Vec<GroupRowView>,
    pub total_articles: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRowView {
    pub name: String,
    /// `hsla()` label colour for the group name.
    pub colour: String,
    pub article_ids: Vec<ArticleId>,
}
