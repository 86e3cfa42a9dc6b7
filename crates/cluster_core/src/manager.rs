use cluster_logging::{cluster_debug, cluster_trace};

use crate::groups::DEFAULT_GROUP;
use crate::view_model::{GroupRowView, GroupingView};
use crate::{Cluster, ColourAssigner, Groups, Subject, SubscriptionId};

/// Owns the partition of one cluster's articles into named groups.
///
/// Every mutation publishes a fresh [`Groups`] snapshot through the
/// underlying [`Subject`]. Articles are moved, never copied, so each article
/// of the originating cluster sits in exactly one group.
#[derive(Debug)]
pub struct GroupManager {
    groups: Subject<Groups>,
}

impl GroupManager {
    pub fn new(cluster: &Cluster) -> Self {
        let groups: Groups = cluster.articles.iter().cloned().collect();
        cluster_debug!(
            "grouped {} articles of cluster {:?} into {} groups",
            groups.total_articles(),
            cluster.id,
            groups.len()
        );
        Self {
            groups: Subject::new(groups),
        }
    }

    pub fn grouping(&self) -> &Subject<Groups> {
        &self.groups
    }

    /// Current grouping snapshot.
    pub fn groups(&self) -> &Groups {
        self.groups.value()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Groups) + 'static,
    {
        self.groups.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.groups.unsubscribe(id)
    }

    /// Moves article `id` into `target`, creating the group if needed.
    ///
    /// The search skips `target` itself, so an article that already lives
    /// there is left alone. Returns whether a new snapshot was published.
    pub fn assign_article(&mut self, id: &str, target: &str) -> bool {
        let current = self.groups.value();
        let Some(source) = current.locate(id, Some(target)) else {
            cluster_trace!("article {:?} not found outside group {:?}", id, target);
            return false;
        };

        let source = source.to_string();
        let mut next = current.clone();
        let Some(article) = next.take_article(&source, id) else {
            return false;
        };
        next.push(target, article);

        cluster_debug!("moved article {:?} from {:?} to {:?}", id, source, target);
        self.groups.next(next);
        true
    }

    /// Name of the first group holding `id`, or the default group if none does.
    pub fn find_article_group(&self, id: &str) -> &str {
        self.groups().locate(id, None).unwrap_or(DEFAULT_GROUP)
    }

    /// Render-ready projection of the current grouping.
    pub fn view(&self, colours: &mut ColourAssigner) -> GroupingView {
        let groups = self
            .groups()
            .iter()
            .map(|(name, articles)| GroupRowView {
                name: name.to_string(),
                colour: colours.create(name),
                article_ids: articles.iter().map(|article| article.id.clone()).collect(),
            })
            .collect();
        GroupingView {
            groups,
            total_articles: self.groups().total_articles(),
        }
    }
}
