//! Cluster core: article grouping state and label colouring.
mod article;
mod colour;
mod filter;
mod groups;
mod manager;
mod msg;
mod subject;
mod update;
mod view_model;

pub use article::{Article, ArticleId, ArticleStatus, Cluster};
pub use colour::{label_hash, ColourAssigner, Hsla, ALPHA, LIGHTNESS, SATURATION};
pub use filter::{Filter, FilterGroup};
pub use groups::{Groups, COMBINE_GROUP, DEFAULT_GROUP, IGNORE_GROUP};
pub use manager::GroupManager;
pub use msg::Msg;
pub use subject::{Subject, SubscriptionId};
pub use update::update;
pub use view_model::{GroupRowView, GroupingView};
