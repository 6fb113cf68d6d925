//! Document-level properties of the conversion.

use crate::common::{collect_types, has_null_holes};
use flowni_adf::rules::{default_rules, DEFAULT_CODE_LANGUAGE};
use flowni_adf::{convert_to_adf, Converter, RuleRegistry};
use proptest::prelude::*;
use serde_json::{json, Value};

#[test]
fn bullet_list_attrs_removed_and_content_transformed() {
    let doc = json!({
        "type": "bulletList",
        "attrs": {"tight": false},
        "content": [{"type": "listItem", "content": [{"type": "horizontalRule"}]}]
    });
    assert_eq!(
        convert_to_adf(doc),
        json!({"type": "bulletList", "content": [{"type": "listItem", "content": [{"type": "rule"}]}]})
    );
}

#[test]
fn ordered_list_start_renamed() {
    let doc = json!({"type": "orderedList", "attrs": {"start": 3, "tight": true}});
    assert_eq!(
        convert_to_adf(doc),
        json!({"type": "orderedList", "attrs": {"order": 3}})
    );
}

#[test]
fn emphasis_marks_renamed() {
    let doc = json!({"type": "text", "text": "hi", "marks": [{"type": "bold"}, {"type": "italic"}]});
    assert_eq!(
        convert_to_adf(doc),
        json!({"type": "text", "text": "hi", "marks": [{"type": "strong"}, {"type": "em"}]})
    );
}

#[test]
fn emptied_marks_field_removed() {
    let doc = json!({"type": "text", "text": "hi", "marks": [{"type": "textColor", "attrs": {}}]});
    let out = convert_to_adf(doc);
    assert_eq!(out, json!({"type": "text", "text": "hi"}));
    assert!(out.get("marks").is_none());
}

#[test]
fn embed_deletion_keeps_parent_paragraph() {
    let doc = json!({"type": "paragraph", "content": [{"type": "image", "attrs": {"src": "a.png"}}]});
    assert_eq!(convert_to_adf(doc), json!({"type": "paragraph", "content": []}));
}

#[test]
fn bare_paragraph_dropped_from_parent() {
    let heading = json!({"type": "heading", "content": [{"type": "text", "text": "Title"}]});
    let doc = json!({"type": "doc", "content": [{"type": "paragraph"}, heading.clone()]});
    assert_eq!(convert_to_adf(doc), json!({"type": "doc", "content": [heading]}));
}

#[test]
fn horizontal_rule_replaced_exactly() {
    let doc = json!({"type": "horizontalRule", "attrs": {"color": "red"}});
    assert_eq!(convert_to_adf(doc), json!({"type": "rule"}));
}

#[test]
fn emoji_gets_short_name() {
    let doc = json!({"type": "emoji", "attrs": {"name": "smile", "id": "1"}});
    assert_eq!(
        convert_to_adf(doc),
        json!({"type": "emoji", "attrs": {"id": "1", "shortName": ":smile:"}})
    );
}

#[test]
fn scalars_and_null_pass_through() {
    assert_eq!(convert_to_adf(json!("plain")), json!("plain"));
    assert_eq!(convert_to_adf(json!(12.5)), json!(12.5));
    assert_eq!(convert_to_adf(Value::Null), Value::Null);
}

#[test]
fn deleted_root_is_null() {
    assert_eq!(convert_to_adf(json!({"type": "figma"})), Value::Null);
}

#[test]
fn top_level_arrays_lose_deleted_nodes() {
    let doc = json!([{"type": "paragraph"}, {"type": "rule"}, {"type": "iframely"}]);
    assert_eq!(convert_to_adf(doc), json!([{"type": "rule"}]));
}

fn mark() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(json!({"type": "bold"})),
        Just(json!({"type": "italic"})),
        Just(json!({"type": "superscript"})),
        Just(json!({"type": "subscript"})),
        Just(json!({"type": "code"})),
        Just(json!({"type": "textColor", "attrs": {}})),
        Just(json!({"type": "textColor", "attrs": {"color": "#00ff00"}})),
        Just(json!({"type": "link", "attrs": {"href": "https://a.b", "rel": "noopener", "target": "_blank"}})),
        Just(json!({"type": "link", "attrs": {"href": "https://a.b"}})),
    ]
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        ("[a-z ]{0,12}", prop::collection::vec(mark(), 0..4))
            .prop_map(|(text, marks)| json!({"type": "text", "text": text, "marks": marks})),
        "[a-z ]{1,12}".prop_map(|text| json!({"type": "text", "text": text})),
        "[a-z]{1,8}".prop_map(|name| json!({"type": "emoji", "attrs": {"name": name}})),
        Just(json!({"type": "horizontalRule"})),
        Just(json!({"type": "paragraph"})),
        Just(json!({"type": "hardBreak"})),
        Just(json!({"type": "image", "attrs": {"src": "a.png"}})),
        Just(json!({"type": "youtube", "attrs": {"src": "https://youtu.be/x"}})),
    ]
}

fn container(children: Vec<Value>, variant: u8) -> Value {
    match variant % 9 {
        0 => json!({"type": "paragraph", "content": children}),
        1 => json!({"type": "bulletList", "attrs": {"tight": true}, "content": children}),
        2 => json!({"type": "orderedList", "attrs": {"start": variant, "tight": false}, "content": children}),
        3 => json!({"type": "listItem", "content": children}),
        4 => json!({"type": "codeBlock", "attrs": {"language": null}, "content": children}),
        5 => json!({"type": "codeBlock", "attrs": {"language": "rust"}, "content": children}),
        6 => json!({"type": "tableCell", "attrs": {"colwidth": null}, "content": children}),
        7 => json!({"type": "tableHeader", "attrs": {"colwidth": [variant]}, "content": children}),
        _ => json!({"type": "heading", "attrs": {"level": 2}, "content": children}),
    }
}

fn document() -> impl Strategy<Value = Value> {
    let node = leaf().prop_recursive(4, 64, 6, |inner| {
        (prop::collection::vec(inner, 0..6), any::<u8>())
            .prop_map(|(children, variant)| container(children, variant))
    });
    prop::collection::vec(node, 0..6).prop_map(|content| json!({"type": "doc", "content": content}))
}

fn reversed_converter() -> Converter {
    let mut registry = RuleRegistry::new();
    for rule in default_rules(DEFAULT_CODE_LANGUAGE).into_iter().rev() {
        registry.register_boxed(rule);
    }
    Converter::new(registry)
}

proptest! {
    #[test]
    fn converted_documents_have_no_null_holes(doc in document()) {
        prop_assert!(!has_null_holes(&convert_to_adf(doc)));
    }

    #[test]
    fn conversion_is_idempotent_on_editor_documents(doc in document()) {
        let once = convert_to_adf(doc);
        let twice = convert_to_adf(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn rule_order_does_not_matter(doc in document()) {
        let forward = convert_to_adf(doc.clone());
        let backward = reversed_converter().convert(doc);
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn editor_only_tags_never_survive(doc in document()) {
        let mut types = Vec::new();
        collect_types(&convert_to_adf(doc), &mut types);
        for tag in ["bold", "italic", "superscript", "subscript", "horizontalRule", "image", "youtube"] {
            prop_assert!(!types.iter().any(|t| t == tag), "{} survived", tag);
        }
    }

    #[test]
    fn string_scalars_pass_through(text in ".*") {
        prop_assert_eq!(convert_to_adf(json!(text.clone())), json!(text));
    }

    #[test]
    fn integer_scalars_pass_through(n in any::<i64>()) {
        prop_assert_eq!(convert_to_adf(json!(n)), json!(n));
    }
}
