//! Serde model of the Neue Post Format (NPF).
//!
//! Only the parts of the format that map onto deltas are typed. Content items
//! of any other `type` are preserved verbatim as [`ContentItem::Unsupported`]
//! so a post read and written back keeps them.

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// An NPF post body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Npf {
    pub content: Vec<ContentItem>,
}

/// One entry of a post's `content` array, discriminated by its `type` field.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentItem {
    Text(TextContent),
    Image(ImageContent),
    Video(VideoContent),
    Unsupported(Value),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<TextSubtype>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent_level: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatting: Option<Vec<FormattingRange>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageContent {
    /// The full type string, e.g. `image/png` or a bare `image`.
    #[serde(rename = "type")]
    pub mime: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_iframe: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub url: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
}

impl VideoContent {
    /// The playable URL, preferring `url`, then `embed_url`, then `media.url`.
    pub fn source(&self) -> Option<&str> {
        self.url
            .as_deref()
            .or(self.embed_url.as_deref())
            .or(self.media.as_ref().map(|media| media.url.as_str()))
    }
}

/// Block-level role of a text item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TextSubtype {
    Heading1,
    Heading2,
    Indented,
    OrderedListItem,
    UnorderedListItem,
    /// Subtypes without a delta equivalent (`quote`, `chat`, ...)
    Other(String),
}

impl From<String> for TextSubtype {
    fn from(value: String) -> Self {
        match value.as_str() {
            "heading1" => TextSubtype::Heading1,
            "heading2" => TextSubtype::Heading2,
            "indented" => TextSubtype::Indented,
            "ordered-list-item" => TextSubtype::OrderedListItem,
            "unordered-list-item" => TextSubtype::UnorderedListItem,
            _ => TextSubtype::Other(value),
        }
    }
}

impl From<TextSubtype> for String {
    fn from(subtype: TextSubtype) -> Self {
        match subtype {
            TextSubtype::Heading1 => "heading1".to_string(),
            TextSubtype::Heading2 => "heading2".to_string(),
            TextSubtype::Indented => "indented".to_string(),
            TextSubtype::OrderedListItem => "ordered-list-item".to_string(),
            TextSubtype::UnorderedListItem => "unordered-list-item".to_string(),
            TextSubtype::Other(value) => value,
        }
    }
}

/// An inline formatting annotation over `[start, end)` of a text item.
///
/// Offsets count Unicode scalar values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattingRange {
    pub start: usize,
    pub end: usize,
    /// Absent on the colour-only ranges used to emulate inline code.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<FormattingType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog: Option<MentionedBlog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FormattingType {
    Bold,
    Italic,
    Color,
    Link,
    Mention,
    Other(String),
}

impl From<String> for FormattingType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "bold" => FormattingType::Bold,
            "italic" => FormattingType::Italic,
            "color" => FormattingType::Color,
            "link" => FormattingType::Link,
            "mention" => FormattingType::Mention,
            _ => FormattingType::Other(value),
        }
    }
}

impl From<FormattingType> for String {
    fn from(kind: FormattingType) -> Self {
        match kind {
            FormattingType::Bold => "bold".to_string(),
            FormattingType::Italic => "italic".to_string(),
            FormattingType::Color => "color".to_string(),
            FormattingType::Link => "link".to_string(),
            FormattingType::Mention => "mention".to_string(),
            FormattingType::Other(value) => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentionedBlog {
    pub uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl FormattingRange {
    pub fn new(start: usize, end: usize, kind: FormattingType) -> Self {
        FormattingRange {
            start,
            end,
            kind: Some(kind),
            url: None,
            hex: None,
            blog: None,
            color: None,
        }
    }

    pub fn bold(start: usize, end: usize) -> Self {
        Self::new(start, end, FormattingType::Bold)
    }

    pub fn italic(start: usize, end: usize) -> Self {
        Self::new(start, end, FormattingType::Italic)
    }

    pub fn link(start: usize, end: usize, url: impl Into<String>) -> Self {
        FormattingRange {
            url: Some(url.into()),
            ..Self::new(start, end, FormattingType::Link)
        }
    }

    pub fn color(start: usize, end: usize, hex: impl Into<String>) -> Self {
        FormattingRange {
            hex: Some(hex.into()),
            ..Self::new(start, end, FormattingType::Color)
        }
    }

    /// A type-less range that only paints the text, used for inline code.
    pub fn painted(start: usize, end: usize, color: impl Into<String>) -> Self {
        FormattingRange {
            kind: None,
            color: Some(color.into()),
            ..Self::new(start, end, FormattingType::Color)
        }
    }
}

impl Npf {
    pub fn from_json(source: &str) -> Result<Self, crate::error::FormatError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, crate::error::FormatError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

impl<'de> Deserialize<'de> for ContentItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| D::Error::missing_field("type"))?;

        if kind == "text" {
            serde_json::from_value(value)
                .map(ContentItem::Text)
                .map_err(D::Error::custom)
        } else if kind.starts_with("image") {
            serde_json::from_value(value)
                .map(ContentItem::Image)
                .map_err(D::Error::custom)
        } else if kind.starts_with("video") {
            serde_json::from_value(value)
                .map(ContentItem::Video)
                .map_err(D::Error::custom)
        } else {
            Ok(ContentItem::Unsupported(value))
        }
    }
}

impl Serialize for ContentItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ContentItem::Text(text) => {
                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry("type", "text")?;
                if let Some(subtype) = &text.subtype {
                    map.serialize_entry("subtype", subtype)?;
                }
                map.serialize_entry("text", &text.text)?;
                if let Some(indent_level) = text.indent_level {
                    map.serialize_entry("indent_level", &indent_level)?;
                }
                if let Some(formatting) = &text.formatting {
                    map.serialize_entry("formatting", formatting)?;
                }
                map.end()
            }
            ContentItem::Image(image) => image.serialize(serializer),
            ContentItem::Video(video) => {
                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry("type", "video")?;
                if let Some(url) = &video.url {
                    map.serialize_entry("url", url)?;
                }
                if let Some(media) = &video.media {
                    map.serialize_entry("media", media)?;
                }
                if let Some(embed_url) = &video.embed_url {
                    map.serialize_entry("embed_url", embed_url)?;
                }
                if let Some(embed_iframe) = &video.embed_iframe {
                    map.serialize_entry("embed_iframe", embed_iframe)?;
                }
                map.end()
            }
            ContentItem::Unsupported(value) => value.serialize(serializer),
        }
    }
}
