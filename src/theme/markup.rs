//! Renderable markup fragments.
//!
//! Logo and footer content are stored as a small tree instead of markup
//! syntax, so the host renderer decides how to emit them.
//!
//! In `theme.toml` (and the exported JSON) a text node is a plain string and
//! an element is a table:
//!
//! ```toml
//! logo = { tag = "h1", children = ["TurboCore Docs"] }
//! ```
//!
//! Keys other than `tag`, `attrs` and `children` are rejected at parse time.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::html;

/// A markup fragment: either text or an element with children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Markup {
    Text(String),
    Element(Element),
}

/// An element node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Markup>,
}

const ELEMENT_FIELDS: &[&str] = &["tag", "attrs", "children"];

impl<'de> Deserialize<'de> for Markup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MarkupVisitor)
    }
}

struct MarkupVisitor;

impl<'de> Visitor<'de> for MarkupVisitor {
    type Value = Markup;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or a { tag, attrs, children } table")
    }

    fn visit_str<E: de::Error>(self, text: &str) -> Result<Markup, E> {
        Ok(Markup::text(text))
    }

    fn visit_string<E: de::Error>(self, text: String) -> Result<Markup, E> {
        Ok(Markup::Text(text))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Markup, A::Error> {
        let mut tag: Option<String> = None;
        let mut attrs: Option<BTreeMap<String, String>> = None;
        let mut children: Option<Vec<Markup>> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "tag" if tag.is_some() => return Err(de::Error::duplicate_field("tag")),
                "attrs" if attrs.is_some() => return Err(de::Error::duplicate_field("attrs")),
                "children" if children.is_some() => {
                    return Err(de::Error::duplicate_field("children"));
                }
                "tag" => tag = Some(map.next_value()?),
                "attrs" => attrs = Some(map.next_value()?),
                "children" => children = Some(map.next_value()?),
                other => return Err(de::Error::unknown_field(other, ELEMENT_FIELDS)),
            }
        }

        Ok(Markup::Element(Element {
            tag: tag.ok_or_else(|| de::Error::missing_field("tag"))?,
            attrs: attrs.unwrap_or_default(),
            children: children.unwrap_or_default(),
        }))
    }
}

impl Default for Markup {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for Markup {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl Markup {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn element(tag: impl Into<String>, children: Vec<Markup>) -> Self {
        Self::Element(Element {
            tag: tag.into(),
            attrs: BTreeMap::new(),
            children,
        })
    }

    /// Add an attribute. No-op on text nodes.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Self::Element(el) = &mut self {
            el.attrs.insert(name.into(), value.into());
        }
        self
    }

    /// Concatenated text content of the fragment.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
        }
    }

    /// True when nothing visible would be rendered.
    ///
    /// Void elements (e.g. an `img` logo) count as content.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Element(el) => {
                !html::is_void_element(&el.tag) && el.children.iter().all(Self::is_empty)
            }
        }
    }

    /// Return a copy with `from` replaced by `to` in every text node.
    ///
    /// Tags and attributes are left untouched.
    pub fn replace_text(&self, from: &str, to: &str) -> Self {
        match self {
            Self::Text(text) => Self::Text(text.replace(from, to)),
            Self::Element(el) => Self::Element(Element {
                tag: el.tag.clone(),
                attrs: el.attrs.clone(),
                children: el.children.iter().map(|c| c.replace_text(from, to)).collect(),
            }),
        }
    }

    /// Serialize as an HTML fragment.
    pub fn render_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(&html::escape(text)),
            Self::Element(el) => {
                out.push('<');
                out.push_str(&el.tag);
                for (name, value) in &el.attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&html::escape_attr(value));
                    out.push('"');
                }
                out.push('>');
                if html::is_void_element(&el.tag) {
                    return;
                }
                el.children.iter().for_each(|c| c.write_html(out));
                out.push_str("</");
                out.push_str(&el.tag);
                out.push('>');
            }
        }
    }

    /// Validate a fragment that must render visible content.
    pub fn validate(&self, field: FieldPath, diag: &mut ConfigDiagnostics) {
        if self.is_empty() {
            diag.error_with_hint(
                field,
                "must not be empty",
                format!(
                    "set {}, e.g.: \"My Docs\" or {{ tag = \"h1\", children = [\"My Docs\"] }}",
                    field
                ),
            );
        }
        self.validate_nodes(field, diag);
    }

    fn validate_nodes(&self, field: FieldPath, diag: &mut ConfigDiagnostics) {
        let Self::Element(el) = self else {
            return;
        };

        if !html::is_valid_name(&el.tag) {
            diag.error(field, format!("invalid tag name '{}'", el.tag));
        } else if html::is_raw_text_element(&el.tag) {
            diag.error_with_hint(
                field,
                format!("<{}> is not allowed in theme markup", el.tag),
                "scripts and styles belong to the host renderer",
            );
        }

        for name in el.attrs.keys() {
            if !html::is_valid_name(name) {
                diag.error(field, format!("invalid attribute name '{}' on <{}>", name, el.tag));
            }
        }

        if html::is_void_element(&el.tag) && !el.children.is_empty() {
            diag.error(field, format!("<{}> cannot have children", el.tag));
        }

        el.children.iter().for_each(|c| c.validate_nodes(field, diag));
    }
}

// ============================================================================
// tests
// ============================================================================
