use cluster_core::{label_hash, ColourAssigner, Hsla};

#[test]
fn hash_weights_characters_by_position() {
    // 'a' sits at index 0 and contributes nothing.
    assert_eq!(label_hash("a"), 1);
    assert_eq!(label_hash("ab"), 99);
    assert_eq!(label_hash(""), 1);
}

#[test]
fn hash_stays_within_hue_range() {
    for label in ["default", "combine", "ignore", "a much longer custom label", "üñï"] {
        let hue = label_hash(label);
        assert!((1..=360).contains(&hue), "{label} -> {hue}");
    }
}

#[test]
fn create_formats_hsla() {
    let mut colours = ColourAssigner::new();

    assert_eq!(colours.create("ab"), "hsla(99, 70%, 45%, 20%)");
    assert_eq!(Hsla::for_label("ab").to_string(), "hsla(99, 70%, 45%, 20%)");
}

#[test]
fn create_is_idempotent_and_memoized() {
    let mut colours = ColourAssigner::new();
    assert!(colours.is_empty());

    let first = colours.create("combine");
    let second = colours.create("combine");

    assert_eq!(first, second);
    assert_eq!(colours.len(), 1);
}

#[test]
fn colliding_labels_share_a_colour() {
    // "ab": 98 * 1 = 98; "ba": 97 * 1 = 97; "xb": 98 * 1 = 98.
    let mut colours = ColourAssigner::new();
    assert_eq!(label_hash("ab"), label_hash("xb"));
    assert_eq!(colours.create("ab"), colours.create("xb"));
    assert_ne!(colours.create("ab"), colours.create("ba"));
    assert_eq!(colours.len(), 3);
}

#[test]
fn hash_counts_utf16_code_units() {
    // U+1F600 is the surrogate pair 0xD83D 0xDE00; only the second unit is weighted.
    assert_eq!(label_hash("😀"), (0xDE00 % 360 + 1) as u16);
    assert_eq!(label_hash("😀"), 313);
}

#[test]
fn hash_handles_very_long_labels() {
    let label = "\u{FFFF}".repeat(1 << 25);

    let hue = label_hash(&label);

    assert!((1..=360).contains(&hue));
}
