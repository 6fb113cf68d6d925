//! Serialized output checks. The envelope and field order are what Jira sees.

use flowni_adf::pipeline::render;
use flowni_adf::{convert_str, convert_to_adf, ConvertOptions};
use insta::assert_snapshot;
use serde_json::json;

#[test]
fn pretty_envelope_output() {
    let doc = json!({
        "type": "doc",
        "content": [
            {"type": "paragraph", "content": [
                {"type": "text", "text": "Hi ", "marks": [{"type": "bold"}]},
                {"type": "emoji", "attrs": {"name": "wave", "id": "1f44b"}}
            ]},
            {"type": "horizontalRule"},
            {"type": "paragraph"}
        ]
    });
    let output = render(convert_to_adf(doc), &ConvertOptions::default()).unwrap();

    assert_snapshot!(output, @r###"
    {
      "version": 1,
      "type": "doc",
      "content": [
        {
          "type": "paragraph",
          "content": [
            {
              "type": "text",
              "text": "Hi ",
              "marks": [
                {
                  "type": "strong"
                }
              ]
            },
            {
              "type": "emoji",
              "attrs": {
                "id": "1f44b",
                "shortName": ":wave:"
              }
            }
          ]
        },
        {
          "type": "rule"
        }
      ]
    }
    "###);
}

#[test]
fn compact_output_keeps_field_order() {
    let options = ConvertOptions {
        pretty: false,
        envelope: false,
        ..ConvertOptions::default()
    };
    let source = r#"{"type":"orderedList","content":[],"attrs":{"start":2,"tight":true,"reversed":false}}"#;
    let output = convert_str(source, &options).unwrap();

    assert_snapshot!(output, @r###"{"type":"orderedList","content":[],"attrs":{"reversed":false,"order":2}}"###);
}
