use cluster_core::{Article, ArticleStatus, Cluster, GroupManager};
use cluster_io::encode_groups;
use pretty_assertions::assert_eq;

#[test]
fn encodes_groups_in_group_order() {
    let cluster = Cluster::new(vec![
        Article::new("1", ArticleStatus::Default).with_title("First"),
        Article::new("2", ArticleStatus::Custom("later".into())),
    ]);
    let mut manager = GroupManager::new(&cluster);
    manager.assign_article("1", "ignore");

    let json = encode_groups(manager.groups()).unwrap();

    assert_eq!(
        json,
        concat!(
            r#"{"default":[],"combine":[],"#,
            r#""ignore":[{"id":"1","title":"First","status":"default"}],"#,
            r#""later":[{"id":"2","status":"later"}]}"#
        )
    );
}
