//! SSML format tests (Delta → SSML)

use delta_babel::{delta_to_ssml, Delta, FormatRegistry};
use serde_json::{json, Value};

fn ssml(ops: Value) -> String {
    let delta: Delta = serde_json::from_value(json!({ "ops": ops })).expect("valid delta");
    delta_to_ssml(&delta)
}

#[test]
fn test_plain_text() {
    insta::assert_snapshot!(
        ssml(json!([{"insert": "Hello, world!\n"}])),
        @"<speak><p>Hello, world!</p></speak>"
    );
}

#[test]
fn test_bold_becomes_emphasis() {
    let out = ssml(json!([
        {"insert": "Gandalf", "attributes": {"bold": true}},
        {"insert": " the "},
        {"insert": "Grey", "attributes": {"color": "#cccccc"}},
        {"insert": "\n"}
    ]));
    insta::assert_snapshot!(out, @"<speak><p><emphasis>Gandalf</emphasis> the Grey</p></speak>");
}

#[test]
fn test_image_speaks_alt_text() {
    let out = ssml(json!([
        {
            "insert": {"image": "https://example.com/image.png"},
            "attributes": {"alt": "Alt text goes here.", "link": "https://example.com"}
        },
        {"insert": "\n"}
    ]));
    insta::assert_snapshot!(out, @"<speak><p>Alt text goes here.</p></speak>");
}

#[test]
fn test_paragraphs() {
    let out = ssml(json!([{"insert": "It is a truth.\n\nHowever little known.\n\n"}]));
    insta::assert_snapshot!(out, @"<speak><p>It is a truth.</p><p>However little known.</p></speak>");
}

#[test]
fn test_block_formatting_is_flattened() {
    let out = ssml(json!([
        {"insert": "Sward's Shopping List"},
        {"insert": "\n", "attributes": {"header": 1}},
        {"insert": "Sword"},
        {"insert": "\n", "attributes": {"list": "ordered"}},
        {"insert": "You", "attributes": {"italic": true}},
        {"insert": " want to tell me."},
        {"insert": "\n", "attributes": {"blockquote": true}}
    ]));
    insta::assert_snapshot!(out, @"<speak><p>Sward&#x27;s Shopping List</p><p>Sword</p><p>You want to tell me.</p></speak>");
}

#[test]
fn test_text_is_escaped() {
    let out = ssml(json!([{"insert": "Fish & Chips <3\n"}]));
    insta::assert_snapshot!(out, @"<speak><p>Fish &amp; Chips &lt;3</p></speak>");
}

#[test]
fn test_registry_refuses_to_parse_ssml() {
    let registry = FormatRegistry::with_defaults();
    assert!(registry.parse("<speak></speak>", "ssml").is_err());
    assert_eq!(
        registry.convert("Hi", "text", "ssml").expect("serializes"),
        "<speak><p>Hi</p></speak>"
    );
}
