//! Import tests (HTML → Delta)

use crate::ops;
use delta_babel::html_to_delta;
use rstest::rstest;
use serde_json::{json, Value};

fn import(html: &str) -> Value {
    ops(&html_to_delta(html))
}

#[test]
fn test_empty_string() {
    assert_eq!(import(""), json!([{"insert": "\n"}]));
}

#[test]
fn test_plain_text() {
    assert_eq!(import("Hello, world!"), json!([{"insert": "Hello, world!\n"}]));
}

#[test]
fn test_ignored_elements() {
    assert_eq!(
        import("<head><title>foo</title><style>*{}</style></head>"),
        json!([{"insert": "\n"}])
    );
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
#[case(5)]
#[case(6)]
fn test_header(#[case] level: u64) {
    assert_eq!(
        import(&format!("<h{level}>Hello, world!</h{level}>")),
        json!([
            {"insert": "Hello, world!"},
            {"insert": "\n", "attributes": {"header": level}}
        ])
    );
}

#[rstest]
#[case("<b>Gandalf</b>", json!({"bold": true}))]
#[case("<strong>Gandalf</strong>", json!({"bold": true}))]
#[case("<i>Gandalf</i>", json!({"italic": true}))]
#[case("<em>Gandalf</em>", json!({"italic": true}))]
#[case("<code>Gandalf</code>", json!({"code": true}))]
fn test_formatting_tags(#[case] html: &str, #[case] attributes: Value) {
    assert_eq!(
        import(html),
        json!([
            {"insert": "Gandalf", "attributes": attributes},
            {"insert": "\n"}
        ])
    );
}

#[test]
fn test_nested_element_styles() {
    assert_eq!(
        import("<strong>Gandalf <i>the</i></strong> <i>Grey</i>"),
        json!([
            {"insert": "Gandalf ", "attributes": {"bold": true}},
            {"insert": "the", "attributes": {"bold": true, "italic": true}},
            {"insert": " "},
            {"insert": "Grey", "attributes": {"italic": true}},
            {"insert": "\n"}
        ])
    );
}

#[test]
fn test_inline_styles() {
    assert_eq!(
        import(concat!(
            r#"<span style="font-weight:bold;">Gandalf</span>"#,
            "<span> the </span>",
            r#"<span style="color:#cccccc">Grey</span>"#
        )),
        json!([
            {"insert": "Gandalf", "attributes": {"bold": true}},
            {"insert": " the "},
            {"insert": "Grey", "attributes": {"color": "#cccccc"}},
            {"insert": "\n"}
        ])
    );
}

#[rstest]
#[case("font-weight:bold;", json!({"link": "https://example.com", "bold": true}))]
#[case("font-style:italic;", json!({"link": "https://example.com", "italic": true}))]
#[case(
    "font-weight:bold;font-style:italic;",
    json!({"link": "https://example.com", "bold": true, "italic": true})
)]
fn test_styled_link(#[case] style: &str, #[case] attributes: Value) {
    let html = format!(r#"<p><a href="https://example.com" style="{style}">found this</a> for you</p>"#);
    assert_eq!(
        import(&html),
        json!([
            {"insert": "found this", "attributes": attributes},
            {"insert": " for you\n\n"}
        ])
    );
}

#[test]
fn test_link_without_href() {
    assert_eq!(
        import("<p><a>found nothing</a> for you</p>"),
        json!([{"insert": "found nothing for you\n\n"}])
    );
}

#[test]
fn test_image() {
    assert_eq!(
        import(r#"<img src="https://example.com/image.png" alt="Alt text goes here.">"#),
        json!([
            {"insert": {"image": "https://example.com/image.png"}, "attributes": {"alt": "Alt text goes here."}},
            {"insert": "\n"}
        ])
    );
}

#[test]
fn test_image_without_src() {
    assert_eq!(import("<img alt=\"nothing\">"), json!([{"insert": "\n"}]));
}

#[test]
fn test_image_link() {
    assert_eq!(
        import(concat!(
            r#"<a href="https://example.com">"#,
            r#"<img src="https://example.com/image.png" alt="Alt text goes here.">"#,
            "</a>"
        )),
        json!([
            {
                "insert": {"image": "https://example.com/image.png"},
                "attributes": {"link": "https://example.com", "alt": "Alt text goes here."}
            },
            {"insert": "\n"}
        ])
    );
}

#[test]
fn test_paragraphs() {
    assert_eq!(
        import("<p>It is a truth.</p><p>However little known.</p><p>Mr. Bennet replied.</p>"),
        json!([{"insert": "It is a truth.\n\nHowever little known.\n\nMr. Bennet replied.\n\n"}])
    );
}

#[test]
fn test_paragraphs_with_br_breaks() {
    assert_eq!(
        import("<p>It is a truth.</p><p><br></p><p>However little known.</p><p><br></p><p>Mr. Bennet replied.</p>"),
        json!([{"insert": "It is a truth.\n\nHowever little known.\n\nMr. Bennet replied.\n\n"}])
    );
}

#[test]
fn test_lists() {
    assert_eq!(
        import(concat!(
            "<h1>Sward's Shopping List</h1>",
            "<ol><li>Sword</li><li>Candy</li></ol>",
            "But especially don't forget:",
            "<ul><li>Death, which is uncountable on this list.</li></ul>"
        )),
        json!([
            {"insert": "Sward's Shopping List"},
            {"insert": "\n", "attributes": {"header": 1}},
            {"insert": "Sword"},
            {"insert": "\n", "attributes": {"list": "ordered"}},
            {"insert": "Candy"},
            {"insert": "\n", "attributes": {"list": "ordered"}},
            {"insert": "But especially don't forget:\nDeath, which is uncountable on this list."},
            {"insert": "\n", "attributes": {"list": "bullet"}}
        ])
    );
}

#[test]
fn test_em_inside_paragraph() {
    assert_eq!(
        import("<p><em>Hello</em></p>"),
        json!([
            {"insert": "Hello", "attributes": {"italic": true}},
            {"insert": "\n\n"}
        ])
    );
}

#[test]
fn test_head_is_ignored() {
    let html = concat!(
        "<head>",
        "<title>Any old HTML doc</title>",
        r#"<script src="index.js"></script>"#,
        "<style>body { color: green; }</style>",
        "</head>",
        "<body><p>Hello</p></body>"
    );
    assert_eq!(import(html), json!([{"insert": "Hello\n\n"}]));
}

#[test]
fn test_style_is_ignored() {
    assert_eq!(
        import("<style>body { color: green; }</style><p>Hello</p>"),
        json!([{"insert": "Hello\n\n"}])
    );
}

#[test]
fn test_hr() {
    assert_eq!(
        import("<p>Line 1</p><hr><p>Line 2</p>"),
        json!([
            {"insert": "Line 1\n\n"},
            {"insert": {"divider": true}},
            {"insert": "Line 2\n\n"}
        ])
    );
}

#[test]
fn test_italic_and_oblique_merge() {
    assert_eq!(
        import(concat!(
            r#"<span style="font-style:italic;">Aperture </span>"#,
            r#"<span style="font-style:oblique;">Science</span>"#
        )),
        json!([
            {"insert": "Aperture Science", "attributes": {"italic": true}},
            {"insert": "\n"}
        ])
    );
}

#[test]
fn test_underline_and_line_through() {
    assert_eq!(
        import(concat!(
            r#"<span style="text-decoration:underline;">The cake </span>"#,
            r#"<span style="text-decoration:underline line-through;">is </span>"#,
            r#"<span style="text-decoration:line-through;">a lie</span>"#
        )),
        json!([
            {"insert": "The cake ", "attributes": {"underline": true}},
            {"insert": "is ", "attributes": {"underline": true, "strike": true}},
            {"insert": "a lie", "attributes": {"strike": true}},
            {"insert": "\n"}
        ])
    );
}

#[rstest]
#[case(r#"<video><source src="https://example.com/video.mp4" type="video/mp4"></video>"#)]
#[case(r#"<video src="https://example.com/video.mp4"></video>"#)]
#[case(r#"<iframe class="ql-video" src="https://example.com/video.mp4"></iframe>"#)]
fn test_video(#[case] html: &str) {
    assert_eq!(
        import(html),
        json!([
            {"insert": {"video": "https://example.com/video.mp4"}},
            {"insert": "\n"}
        ])
    );
}

#[test]
fn test_only_first_source_is_used() {
    assert_eq!(
        import(concat!(
            "<video>",
            r#"<source src="https://example.com/video.webm">"#,
            r#"<source src="https://example.com/video.mp4">"#,
            "</video>"
        )),
        json!([
            {"insert": {"video": "https://example.com/video.webm"}},
            {"insert": "\n"}
        ])
    );
}

#[test]
fn test_code() {
    assert_eq!(
        import(r#"<p><code>console.log("<3");</code></p>"#),
        json!([
            {"insert": "console.log(\"<3\");", "attributes": {"code": true}},
            {"insert": "\n\n"}
        ])
    );
}

#[test]
fn test_multiline_code() {
    assert_eq!(
        import("<p><code>let a;\nlet b;\nlet c;</code></p>"),
        json!([
            {"insert": "let a;\nlet b;\nlet c;", "attributes": {"code": true}},
            {"insert": "\n\n"}
        ])
    );
}

#[test]
fn test_html_round_trip() {
    let html = concat!(
        "<h1>Sward&#x27;s Shopping List</h1>",
        "<ol><li>Sword</li><li>Candy</li></ol>",
        r#"<p>Found <a href="https://www.nasa.gov">this</a> for you</p>"#
    );
    let delta = html_to_delta(html);
    assert_eq!(delta_babel::delta_to_html(&delta), html);
}
