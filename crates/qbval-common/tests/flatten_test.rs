use qbval_common::{OptionEntry, RenderableEntry, flatten, is_option_group_array};

fn options(json: &str) -> Vec<OptionEntry> {
    serde_json::from_str(json).expect("valid options json")
}

#[test]
fn test_grouped_options_from_json() {
    let opts = options(
        r#"[
            {"label": "G1", "options": [{"name": "x", "label": "X"}]},
            {"label": "G2", "options": [{"name": "y", "label": "Y"}]}
        ]"#,
    );
    assert!(is_option_group_array(&opts));
    assert_eq!(
        flatten(&opts),
        vec![
            RenderableEntry::header("G1"),
            RenderableEntry::item("x", "X"),
            RenderableEntry::header("G2"),
            RenderableEntry::item("y", "Y"),
        ]
    );
}

#[test]
fn test_flat_options_from_json() {
    let opts = options(r#"[{"name": "x", "label": "X"}, {"name": "y", "label": "Y"}]"#);
    assert!(!is_option_group_array(&opts));
    assert_eq!(
        flatten(&opts),
        vec![RenderableEntry::item("x", "X"), RenderableEntry::item("y", "Y")]
    );
}

#[test]
fn test_group_order_and_item_order_preserved() {
    let opts = options(
        r#"[
            {"label": "B", "options": [{"name": "b2", "label": "B2"}, {"name": "b1", "label": "B1"}]},
            {"label": "A", "options": [{"name": "a1", "label": "A1"}]}
        ]"#,
    );
    let names: Vec<String> = flatten(&opts)
        .into_iter()
        .map(|e| match e {
            RenderableEntry::GroupHeader { label } => format!("#{}", label),
            RenderableEntry::Item { name, .. } => name,
        })
        .collect();
    assert_eq!(names, vec!["#B", "b2", "b1", "#A", "a1"]);
}

#[test]
fn test_mixed_shapes_render_nothing() {
    let opts = options(
        r#"[{"name": "x", "label": "X"}, {"label": "G", "options": []}]"#,
    );
    assert!(flatten(&opts).is_empty());
}

#[test]
fn test_entry_json_shape() {
    let json = serde_json::to_value(flatten(&options(
        r#"[{"label": "G", "options": [{"name": "x", "label": "X"}]}]"#,
    )))
    .unwrap();
    assert_eq!(json[0]["kind"], "group_header");
    assert_eq!(json[1]["kind"], "item");
    assert_eq!(json[1]["name"], "x");
}
