//! Whole-document conversions against fixture files.

use crate::common::{collect_types, has_null_holes, load_fixture};
use flowni_adf::{convert_to_adf, to_adf_document, Converter};

#[test]
fn kitchensink_converts_to_expected_adf() {
    let input = load_fixture("kitchensink.json");
    let expected = load_fixture("kitchensink.adf.json");

    assert_eq!(convert_to_adf(input), expected);
}

#[test]
fn kitchensink_output_has_no_editor_only_tags() {
    let output = convert_to_adf(load_fixture("kitchensink.json"));
    let mut types = Vec::new();
    collect_types(&output, &mut types);

    for forbidden in [
        "bold",
        "italic",
        "superscript",
        "subscript",
        "horizontalRule",
        "image",
        "youtube",
    ] {
        assert!(
            !types.iter().any(|t| t == forbidden),
            "found '{forbidden}' in converted output"
        );
    }
    assert!(!has_null_holes(&output));
}

#[test]
fn clean_document_is_unchanged() {
    let clean = load_fixture("clean.adf.json");
    assert_eq!(convert_to_adf(clean.clone()), clean);
}

#[test]
fn kitchensink_report_matches_fixture() {
    let (_, report) = Converter::default().convert_with_report(load_fixture("kitchensink.json"));

    assert_eq!(report.count("bullet-list-attrs"), 1);
    assert_eq!(report.count("ordered-list-attrs"), 1);
    // bold+italic, subscript, empty textColor, superscript
    assert_eq!(report.count("text-marks"), 4);
    assert_eq!(report.count("code-block-language"), 1);
    assert_eq!(report.count("incompatible-embeds"), 2);
    assert_eq!(report.count("table-colwidth"), 1);
    assert_eq!(report.count("horizontal-rule"), 1);
    assert_eq!(report.count("empty-paragraph"), 1);
    assert_eq!(report.count("link-mark-attrs"), 1);
    assert_eq!(report.count("emoji-shortname"), 1);
    assert_eq!(report.nodes_deleted, 3);
}

#[test]
fn enveloped_kitchensink_is_version_one() {
    let wrapped = to_adf_document(convert_to_adf(load_fixture("kitchensink.json")));
    assert_eq!(wrapped["version"], 1);
    assert_eq!(wrapped["type"], "doc");
}
