use crate::{GroupManager, Msg};

/// Applies a message to the grouping; returns whether a snapshot was published.
pub fn update(manager: &mut GroupManager, msg: Msg) -> bool {
    match msg {
        Msg::AssignArticle { id, group } => manager.assign_article(&id, &group),
        Msg::NoOp => false,
    }
}
