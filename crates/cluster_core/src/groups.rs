use crate::Article;

pub const DEFAULT_GROUP: &str = "default";
pub const COMBINE_GROUP: &str = "combine";
pub const IGNORE_GROUP: &str = "ignore";

/// Named buckets of articles, iterated in the order the groups were created.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Groups {
    entries: Vec<(String, Vec<Article>)>,
}

impl Groups {
    /// Empty mapping with no groups at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mapping holding the three canonical groups, all empty.
    pub fn canonical() -> Self {
        Self {
            entries: [DEFAULT_GROUP, COMBINE_GROUP, IGNORE_GROUP]
                .into_iter()
                .map(|name| (name.to_string(), Vec::new()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[Article]> {
        self.entries
            .iter()
            .find(|(group, _)| group == name)
            .map(|(_, articles)| articles.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Groups and their articles in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Article])> {
        self.entries
            .iter()
            .map(|(name, articles)| (name.as_str(), articles.as_slice()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Number of groups, empty ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_articles(&self) -> usize {
        self.entries.iter().map(|(_, articles)| articles.len()).sum()
    }

    /// Appends `article` to `group`, creating the group at the end if missing.
    pub fn push(&mut self, group: &str, article: Article) {
        match self.entries.iter_mut().find(|(name, _)| name == group) {
            Some((_, articles)) => articles.push(article),
            None => self.entries.push((group.to_string(), vec![article])),
        }
    }

    /// Removes the first article with `id` from `group`.
    pub fn take_article(&mut self, group: &str, id: &str) -> Option<Article> {
        let (_, articles) = self.entries.iter_mut().find(|(name, _)| name == group)?;
        let index = articles.iter().position(|article| article.id == id)?;
        Some(articles.remove(index))
    }

    /// First group holding an article with `id`, optionally skipping one group.
    pub(crate) fn locate(&self, id: &str, skip: Option<&str>) -> Option<&str> {
        self.iter()
            .filter(|(name, _)| Some(*name) != skip)
            .find(|(_, articles)| articles.iter().any(|article| article.id == id))
            .map(|(name, _)| name)
    }
}

impl FromIterator<Article> for Groups {
    /// Places each article into the group named by its status.
    fn from_iter<I: IntoIterator<Item = Article>>(iter: I) -> Self {
        let mut groups = Groups::canonical();
        for article in iter {
            let group = article.status.group_name().to_string();
            groups.push(&group, article);
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ArticleStatus;

    #[test]
    fn push_creates_missing_group_at_the_end() {
        let mut groups = Groups::canonical();
        groups.push("later", Article::new("1", ArticleStatus::Default));

        let names: Vec<&str> = groups.names().collect();
        assert_eq!(names, ["default", "combine", "ignore", "later"]);
    }

    #[test]
    fn take_article_leaves_other_groups_alone() {
        let mut groups: Groups = vec![
            Article::new("1", ArticleStatus::Default),
            Article::new("2", ArticleStatus::Combined),
        ]
        .into_iter()
        .collect();

        assert!(groups.take_article("combine", "1").is_none());
        let taken = groups.take_article("default", "1").expect("article 1");
        assert_eq!(taken.id, "1");
        assert_eq!(groups.total_articles(), 1);
    }

    #[test]
    fn locate_honours_skip() {
        let groups: Groups = vec![Article::new("1", ArticleStatus::Ignored)]
            .into_iter()
            .collect();

        assert_eq!(groups.locate("1", None), Some("ignore"));
        assert_eq!(groups.locate("1", Some("ignore")), None);
    }
}
