//! Formatting attributes carried by delta operations and intermediate nodes.
//!
//! Attributes are an insertion-ordered JSON object. Order matters only when the
//! object is written back out; equality ignores it. Values are read with the
//! editor's truthiness rules, so `false`, `null`, `0` and `""` all mean "unset".

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const BOLD: &str = "bold";
pub const ITALIC: &str = "italic";
pub const UNDERLINE: &str = "underline";
pub const STRIKE: &str = "strike";
pub const COLOR: &str = "color";
pub const LINK: &str = "link";
pub const CODE: &str = "code";
pub const ALT: &str = "alt";
pub const HEADER: &str = "header";
pub const LIST: &str = "list";
pub const BLOCKQUOTE: &str = "blockquote";
pub const CODE_BLOCK: &str = "code-block";
pub const INDENT: &str = "indent";

/// The two list flavours a block can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Bullet,
}

impl ListKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ordered" => Some(ListKind::Ordered),
            "bullet" => Some(ListKind::Bullet),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Ordered => "ordered",
            ListKind::Bullet => "bullet",
        }
    }
}

/// An ordered attribute mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(Map<String, Value>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Set `key`, keeping its original position if it was already present.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder form of [`Attributes::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Overlay `other` on top of `self`; values from `other` win.
    pub fn merge(&mut self, other: &Attributes) {
        for (key, value) in other.iter() {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Fold a sequence of layers into one mapping, later layers winning.
    pub fn merged<'a>(layers: impl IntoIterator<Item = &'a Attributes>) -> Attributes {
        layers
            .into_iter()
            .fold(Attributes::new(), |mut acc, layer| {
                acc.merge(layer);
                acc
            })
    }

    /// Whether `key` holds a truthy value.
    pub fn flag(&self, key: &str) -> bool {
        match self.0.get(key) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }

    /// The value of `key` when it is a non-empty string.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// The value of `key` when it is a positive integer.
    pub fn number(&self, key: &str) -> Option<u64> {
        self.0
            .get(key)
            .and_then(Value::as_u64)
            .filter(|n| *n > 0)
    }

    pub fn bold(&self) -> bool {
        self.flag(BOLD)
    }

    pub fn italic(&self) -> bool {
        self.flag(ITALIC)
    }

    pub fn underline(&self) -> bool {
        self.flag(UNDERLINE)
    }

    pub fn strike(&self) -> bool {
        self.flag(STRIKE)
    }

    pub fn code(&self) -> bool {
        self.flag(CODE)
    }

    pub fn blockquote(&self) -> bool {
        self.flag(BLOCKQUOTE)
    }

    pub fn code_block(&self) -> bool {
        self.flag(CODE_BLOCK)
    }

    pub fn color(&self) -> Option<&str> {
        self.text(COLOR)
    }

    pub fn link(&self) -> Option<&str> {
        self.text(LINK)
    }

    pub fn alt(&self) -> Option<&str> {
        self.0.get(ALT).and_then(Value::as_str)
    }

    pub fn header(&self) -> Option<u64> {
        self.number(HEADER)
    }

    pub fn indent(&self) -> Option<u64> {
        self.number(INDENT)
    }

    /// The list kind, ignoring values this crate does not know about.
    pub fn list(&self) -> Option<ListKind> {
        self.0.get(LIST).and_then(Value::as_str).and_then(ListKind::parse)
    }
}

impl From<Map<String, Value>> for Attributes {
    fn from(map: Map<String, Value>) -> Self {
        Attributes(map)
    }
}
