#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User dropped an article onto a group.
    AssignArticle { id: crate::ArticleId, group: String },
    /// Fallback for placeholder wiring.
    NoOp,
}
