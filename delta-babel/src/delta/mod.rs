//! The delta document model.
//!
//! A delta is an ordered list of insert operations. Inline formatting lives on
//! the operation that carries the text; block formatting (headers, lists,
//! quotes, code blocks) lives on the newline that ends the line.
//!
//! ```text
//! {"ops": [
//!     {"insert": "Shopping List"},
//!     {"insert": "\n", "attributes": {"header": 1}},
//!     {"insert": {"image": "https://example.com/cart.png"}},
//!     {"insert": "\n"}
//! ]}
//! ```

pub mod attributes;

pub use attributes::{Attributes, ListKind};

use crate::error::FormatError;
use serde::{Deserialize, Serialize};

/// A rich-text document as a flat list of insert operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    pub ops: Vec<Op>,
}

/// A single insert operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Op {
    pub insert: Insert,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

/// What an operation inserts: a run of text or an embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInsert", into = "RawInsert")]
pub enum Insert {
    Text(String),
    Image(String),
    Video(String),
    Divider,
}

impl Insert {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Insert::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for Insert {
    fn from(text: &str) -> Self {
        Insert::Text(text.to_string())
    }
}

impl From<String> for Insert {
    fn from(text: String) -> Self {
        Insert::Text(text)
    }
}

/// Wire shape of an insert: a bare string or a single-key embed object.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawInsert {
    Text(String),
    Embed(RawEmbed),
}

#[derive(Default, Serialize, Deserialize)]
struct RawEmbed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    video: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    divider: Option<bool>,
}

impl TryFrom<RawInsert> for Insert {
    type Error = String;

    fn try_from(raw: RawInsert) -> Result<Self, Self::Error> {
        match raw {
            RawInsert::Text(text) => Ok(Insert::Text(text)),
            RawInsert::Embed(RawEmbed {
                image: Some(url), ..
            }) => Ok(Insert::Image(url)),
            RawInsert::Embed(RawEmbed {
                video: Some(url), ..
            }) => Ok(Insert::Video(url)),
            RawInsert::Embed(RawEmbed {
                divider: Some(_), ..
            }) => Ok(Insert::Divider),
            RawInsert::Embed(_) => {
                Err("embed must carry one of `image`, `video` or `divider`".to_string())
            }
        }
    }
}

impl From<Insert> for RawInsert {
    fn from(insert: Insert) -> Self {
        match insert {
            Insert::Text(text) => RawInsert::Text(text),
            Insert::Image(url) => RawInsert::Embed(RawEmbed {
                image: Some(url),
                ..Default::default()
            }),
            Insert::Video(url) => RawInsert::Embed(RawEmbed {
                video: Some(url),
                ..Default::default()
            }),
            Insert::Divider => RawInsert::Embed(RawEmbed {
                divider: Some(true),
                ..Default::default()
            }),
        }
    }
}

impl Delta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the JSON form `{"ops": [...]}`.
    pub fn from_json(source: &str) -> Result<Self, FormatError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, FormatError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Append an insert.
    ///
    /// Text joins the previous operation when both are text with equal
    /// attributes, and empty text is dropped, so the result stays in the
    /// compact form editors produce.
    pub fn insert(&mut self, insert: impl Into<Insert>, attributes: Attributes) -> &mut Self {
        let insert = insert.into();
        if let Insert::Text(text) = &insert {
            if text.is_empty() {
                return self;
            }
            if let Some(Op {
                insert: Insert::Text(previous),
                attributes: previous_attributes,
            }) = self.ops.last_mut()
            {
                if *previous_attributes == attributes {
                    previous.push_str(text);
                    return self;
                }
            }
        }
        self.ops.push(Op { insert, attributes });
        self
    }

    pub fn last_text(&self) -> Option<&str> {
        self.ops.last().and_then(|op| op.insert.as_text())
    }

    pub fn ends_with_newline(&self) -> bool {
        self.last_text().is_some_and(|text| text.ends_with('\n'))
    }

    pub fn ends_with_double_newline(&self) -> bool {
        self.last_text().is_some_and(|text| text.ends_with("\n\n"))
    }

    /// Append a newline carrying `attributes` unless the delta already ends with one.
    pub fn ensure_newline(&mut self, attributes: Attributes) -> &mut Self {
        if !self.ends_with_newline() {
            self.insert("\n", attributes);
        }
        self
    }

    /// Make sure the delta ends with a paragraph break (two newlines).
    pub fn ensure_double_newline(&mut self, attributes: Attributes) -> &mut Self {
        self.ensure_newline(attributes.clone());
        if !self.ends_with_double_newline() {
            self.insert("\n", attributes);
        }
        self
    }
}
