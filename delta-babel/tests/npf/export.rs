//! Export tests (Delta → NPF, HTML → NPF)

use crate::{delta, to_value};
use delta_babel::{delta_to_npf, html_to_npf};
use rstest::rstest;
use serde_json::{json, Value};

fn export(ops: Value) -> Value {
    to_value(&delta_to_npf(&delta(json!({ "ops": ops }))))
}

#[test]
fn test_empty_document() {
    assert_eq!(export(json!([{"insert": "\n"}])), json!({"content": []}));
}

#[test]
fn test_hello_world() {
    assert_eq!(
        export(json!([{"insert": "Hello, world!\n"}])),
        json!({"content": [{"type": "text", "text": "Hello, world!"}]})
    );
}

#[test]
fn test_image_type_detection() {
    assert_eq!(
        export(json!([
            {"insert": {"image": "https://example.com/image.jpg"}},
            {"insert": {"image": "https://example.com/image.png"}},
            {"insert": {"image": "https://example.com/image.gif"}},
            {"insert": {"image": "https://example.com/image"}}
        ])),
        json!({"content": [
            {"type": "image/jpg", "url": "https://example.com/image.jpg"},
            {"type": "image/png", "url": "https://example.com/image.png"},
            {"type": "image/gif", "url": "https://example.com/image.gif"},
            {"type": "image", "url": "https://example.com/image"}
        ]})
    );
}

#[test]
fn test_heading_and_paragraphs() {
    assert_eq!(
        export(json!([
            {"insert": "New Post Forms Manifesto"},
            {"insert": "\n", "attributes": {"header": 1}},
            {"insert": "There comes a moment in every company's life...\nWe can choose to embrace this moment."}
        ])),
        json!({"content": [
            {"type": "text", "subtype": "heading1", "text": "New Post Forms Manifesto"},
            {"type": "text", "text": "There comes a moment in every company's life..."},
            {"type": "text", "text": "We can choose to embrace this moment."}
        ]})
    );
}

#[test]
fn test_heading_2() {
    assert_eq!(
        export(json!([
            {"insert": "what a great conversation"},
            {"insert": "\n", "attributes": {"header": 2}}
        ])),
        json!({"content": [
            {"type": "text", "subtype": "heading2", "text": "what a great conversation"}
        ]})
    );
}

#[rstest]
#[case(3)]
#[case(4)]
#[case(6)]
fn test_small_headings_become_bold(#[case] level: u64) {
    assert_eq!(
        export(json!([{"insert": "The cake is a lie\n", "attributes": {"header": level}}])),
        json!({"content": [{
            "type": "text",
            "text": "The cake is a lie",
            "formatting": [{"start": 0, "end": 17, "type": "bold"}]
        }]})
    );
}

#[test]
fn test_list() {
    assert_eq!(
        export(json!([
            {"insert": "Sward's Shopping List"},
            {"insert": "\n", "attributes": {"header": 1}},
            {"insert": "Sword"},
            {"insert": "\n", "attributes": {"list": "ordered"}},
            {"insert": "Candy"},
            {"insert": "\n", "attributes": {"list": "ordered"}},
            {"insert": "But especially don't forget:\nDeath, which is uncountable on this list."},
            {"insert": "\n", "attributes": {"list": "bullet"}}
        ])),
        json!({"content": [
            {"type": "text", "subtype": "heading1", "text": "Sward's Shopping List"},
            {"type": "text", "subtype": "ordered-list-item", "text": "Sword"},
            {"type": "text", "subtype": "ordered-list-item", "text": "Candy"},
            {"type": "text", "text": "But especially don't forget:"},
            {"type": "text", "subtype": "unordered-list-item", "text": "Death, which is uncountable on this list."}
        ]})
    );
}

#[test]
fn test_blockquotes() {
    assert_eq!(
        export(json!([
            {"insert": "1: blockquote, not nested"},
            {"insert": "\n", "attributes": {"blockquote": true}},
            {"insert": "2: blockquote, nested"},
            {"insert": "\n", "attributes": {"blockquote": true, "indent": 1}}
        ])),
        json!({"content": [
            {"type": "text", "subtype": "indented", "text": "1: blockquote, not nested"},
            {"type": "text", "subtype": "indented", "text": "2: blockquote, nested", "indent_level": 1}
        ]})
    );
}

#[test]
fn test_overlapping_inline_formatting() {
    assert_eq!(
        export(json!([
            {"insert": "supercali", "attributes": {"bold": true}},
            {"insert": "fragilistic", "attributes": {"bold": true, "italic": true}},
            {"insert": "expialidocious", "attributes": {"italic": true}}
        ])),
        json!({"content": [{
            "type": "text",
            "text": "supercalifragilisticexpialidocious",
            "formatting": [
                {"start": 0, "end": 20, "type": "bold"},
                {"start": 9, "end": 34, "type": "italic"}
            ]
        }]})
    );
}

#[test]
fn test_link() {
    assert_eq!(
        export(json!([
            {"insert": "Found "},
            {"insert": "this", "attributes": {"link": "https://www.nasa.gov"}},
            {"insert": " link for you"}
        ])),
        json!({"content": [{
            "type": "text",
            "text": "Found this link for you",
            "formatting": [{"start": 6, "end": 10, "type": "link", "url": "https://www.nasa.gov"}]
        }]})
    );
}

#[test]
fn test_multiple_colors_stay_apart() {
    assert_eq!(
        export(json!([
            {"insert": "Celebrate ", "attributes": {"color": "#2d70f6"}},
            {"insert": "Pride", "attributes": {"color": "#3bf62d"}},
            {"insert": " Month", "attributes": {"color": "#ff492f"}}
        ])),
        json!({"content": [{
            "type": "text",
            "text": "Celebrate Pride Month",
            "formatting": [
                {"start": 0, "end": 10, "type": "color", "hex": "#2d70f6"},
                {"start": 10, "end": 15, "type": "color", "hex": "#3bf62d"},
                {"start": 15, "end": 21, "type": "color", "hex": "#ff492f"}
            ]
        }]})
    );
}

#[test]
fn test_video_type_detection() {
    assert_eq!(
        export(json!([
            {"insert": {"video": "https://example.com/video.mp4"}},
            {"insert": {"video": "https://example.com/video.webp"}},
            {"insert": {"video": "https://example.com/video.ogg"}},
            {"insert": {"video": "https://example.com/video"}},
            {"insert": "\n"}
        ])),
        json!({"content": [
            {"type": "video", "media": {"type": "video/mp4", "url": "https://example.com/video.mp4"}},
            {"type": "video", "media": {"type": "video/webp", "url": "https://example.com/video.webp"}},
            {"type": "video", "media": {"type": "video/ogg", "url": "https://example.com/video.ogg"}},
            {"type": "video", "url": "https://example.com/video"}
        ]})
    );
}

#[test]
fn test_code_is_painted() {
    assert_eq!(
        export(json!([{"insert": "console.log(\"<3\");\n", "attributes": {"code": true}}])),
        json!({"content": [{
            "type": "text",
            "text": "console.log(\"<3\");",
            "formatting": [{"start": 0, "end": 18, "color": "#e83e8c"}]
        }]})
    );
}

#[test]
fn test_multiline_code() {
    let painted = |text: &str| {
        json!({
            "type": "text",
            "text": text,
            "formatting": [{"start": 0, "end": 6, "color": "#e83e8c"}]
        })
    };
    assert_eq!(
        export(json!([{"insert": "let a;\nlet b;\nlet c;\n", "attributes": {"code": true}}])),
        json!({"content": [painted("let a;"), painted("let b;"), painted("let c;")]})
    );
}

#[test]
fn test_html_inline() {
    assert_eq!(
        to_value(&html_to_npf("some <b>bold</b> and <i>italic</i> text")),
        json!({"content": [{
            "type": "text",
            "text": "some bold and italic text",
            "formatting": [
                {"start": 5, "end": 9, "type": "bold"},
                {"start": 14, "end": 20, "type": "italic"}
            ]
        }]})
    );
}

#[test]
fn test_html_adjacent_links() {
    assert_eq!(
        to_value(&html_to_npf(concat!(
            r#"<a href="https://tumblr.com">to be</a>"#,
            r#"<a href="https://myspace.com"> or not to be</a>"#
        ))),
        json!({"content": [{
            "type": "text",
            "text": "to be or not to be",
            "formatting": [
                {"start": 0, "end": 5, "type": "link", "url": "https://tumblr.com"},
                {"start": 5, "end": 18, "type": "link", "url": "https://myspace.com"}
            ]
        }]})
    );
}

#[test]
fn test_html_nested_blockquotes() {
    assert_eq!(
        to_value(&html_to_npf(
            "<blockquote>1: blockquote, not nested<blockquote>2: blockquote, nested</blockquote></blockquote>"
        )),
        json!({"content": [
            {"type": "text", "subtype": "indented", "text": "1: blockquote, not nested"},
            {"type": "text", "subtype": "indented", "text": "2: blockquote, nested", "indent_level": 1}
        ]})
    );
}

#[test]
fn test_html_image_without_src() {
    assert_eq!(to_value(&html_to_npf("<img>")), json!({"content": []}));
}

#[rstest]
#[case("<p>A truth.</p><p>Little known.</p>")]
#[case("<p>A truth.</p><p><br></p><p>Little known.</p>")]
fn test_html_paragraphs(#[case] html: &str) {
    assert_eq!(
        to_value(&html_to_npf(html)),
        json!({"content": [
            {"type": "text", "text": "A truth."},
            {"type": "text", "text": "Little known."}
        ]})
    );
}

#[test]
fn test_html_head_is_ignored() {
    assert_eq!(
        to_value(&html_to_npf(
            "<head><title>Any old HTML doc</title></head><body><p>Hello</p></body>"
        )),
        json!({"content": [{"type": "text", "text": "Hello"}]})
    );
}
