//! Emoji decoration: matched emoji become `<img>` references with the emoji as alt text.
//!
//! The decorator never loses text. A match whose key cannot be resolved stays
//! exactly as it was, and so does everything between matches in plain strings.

use std::fmt::Write;

use indexmap::IndexMap;
use moji_core::codepoints::chars::VS16;

use crate::document::{Element, Node};
use crate::escape::{escape_html, is_attribute_name};
use crate::{Matcher, Result, ScannerError, canonical_key};

pub const DEFAULT_BASE_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/twemoji/14.0.2/";
pub const DEFAULT_SIZE: &str = "72x72";
pub const DEFAULT_IMAGE_TYPE: &str = ".png";
pub const DEFAULT_CLASS_NAME: &str = "emoji";

/// Subtrees never decorated.
const SKIPPED_ELEMENTS: &[&str] = &[
    "iframe", "noframes", "noscript", "script", "select", "style", "textarea", "svg", "img",
];

/// Where images live and how they are tagged.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct DecoratorOptions {
    pub base_url: String,
    pub size: String,
    pub image_type: String,
    pub class_name: String,
}

impl Default for DecoratorOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            size: DEFAULT_SIZE.to_string(),
            image_type: DEFAULT_IMAGE_TYPE.to_string(),
            class_name: DEFAULT_CLASS_NAME.to_string(),
        }
    }
}

impl DecoratorOptions {
    /// Parse from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ScannerError::Options(e.to_string()))
    }

    /// `{base_url}{size}/{key}{image_type}`
    pub fn image_src(&self, key: &str) -> String {
        format!("{}{}/{}{}", self.base_url, self.size, key, self.image_type)
    }
}

/// Maps a canonical key to an image locator. `None` leaves the emoji as text.
pub type ImageResolver = Box<dyn Fn(&str, &DecoratorOptions) -> Option<String> + Send + Sync>;

/// Extra attributes for an image, given the matched text and its key.
pub type AttributeDecorator =
    Box<dyn Fn(&str, &str) -> Option<Vec<(String, String)>> + Send + Sync>;

pub struct Decorator {
    matcher: Matcher,
    options: DecoratorOptions,
    resolve_image: ImageResolver,
    decorate_attributes: Option<AttributeDecorator>,
}

impl Decorator {
    pub fn new(matcher: Matcher) -> Self {
        Self {
            matcher,
            options: DecoratorOptions::default(),
            resolve_image: Box::new(|key, options| Some(options.image_src(key))),
            decorate_attributes: None,
        }
    }

    pub fn options(mut self, options: DecoratorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn resolve_image<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&str, &DecoratorOptions) -> Option<String> + Send + Sync + 'static,
    {
        self.resolve_image = Box::new(resolver);
        self
    }

    pub fn decorate_attributes<F>(mut self, decorate: F) -> Self
    where
        F: Fn(&str, &str) -> Option<Vec<(String, String)>> + Send + Sync + 'static,
    {
        self.decorate_attributes = Some(Box::new(decorate));
        self
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn get_options(&self) -> &DecoratorOptions {
        &self.options
    }

    /// Canonical key and image locator for a match, if it resolves.
    pub fn resolve(&self, raw: &str) -> Option<(String, String)> {
        let key = canonical_key(raw);
        if key.is_empty() {
            return None;
        }
        let src = (self.resolve_image)(&key, &self.options).filter(|s| !s.is_empty())?;
        Some((key, src))
    }

    /// Image attributes in output order. Malformed names and names starting
    /// with `on` are dropped.
    pub fn image_attributes(&self, raw: &str, key: &str, src: String) -> Vec<(String, String)> {
        let mut attrs: IndexMap<String, String> = IndexMap::new();
        attrs.insert("class".to_string(), self.options.class_name.clone());
        attrs.insert("draggable".to_string(), "false".to_string());
        attrs.insert("alt".to_string(), raw.to_string());
        attrs.insert("src".to_string(), src);

        if let Some(extra) = self.decorate_attributes.as_ref().and_then(|f| f(raw, key)) {
            attrs.extend(extra);
        }

        attrs
            .into_iter()
            .filter(|(name, _)| is_attribute_name(name) && !is_event_handler(name))
            .collect()
    }

    /// Replace every resolvable emoji in `text` with an `<img/>` tag.
    pub fn parse_string(&self, text: &str) -> String {
        self.matcher
            .replace(text, |m| {
                let Some((key, src)) = self.resolve(m.text) else {
                    return m.text.to_string();
                };
                let mut tag = String::from("<img");
                for (name, value) in self.image_attributes(m.text, &key, src) {
                    // writing to a String cannot fail
                    let _ = write!(tag, " {}=\"{}\"", name, escape_html(&value));
                }
                tag.push_str("/>");
                tag
            })
            .into_owned()
    }

    /// Decorate the text nodes under `element` in place.
    ///
    /// Returns whether anything changed. Text nodes without a resolvable emoji are
    /// left untouched; in the others, text around images loses its VS16 selectors.
    pub fn decorate_element(&self, element: &mut Element) -> bool {
        let mut modified = false;
        let children = std::mem::take(&mut element.children);
        for child in children {
            match child {
                Node::Element(mut el) => {
                    if !is_skipped(&el.name) {
                        modified |= self.decorate_element(&mut el);
                    }
                    element.children.push(Node::Element(el));
                }
                Node::Text(text) => match self.decorate_text(&text) {
                    Some(fragment) => {
                        element.children.extend(fragment);
                        modified = true;
                    }
                    None => element.children.push(Node::Text(text)),
                },
            }
        }
        modified
    }

    /// Split one text node into text and images. `None` if no image was produced.
    fn decorate_text(&self, text: &str) -> Option<Vec<Node>> {
        let mut fragment = Vec::new();
        let mut offset = 0;
        let mut modified = false;

        for m in self.matcher.find_iter(text) {
            if m.start > offset {
                fragment.push(Node::Text(strip_vs16(&text[offset..m.start])));
            }
            offset = m.end();

            match self.resolve(m.text) {
                Some((key, src)) => {
                    let mut img = Element::new("img");
                    img.attributes = self.image_attributes(m.text, &key, src);
                    fragment.push(Node::Element(img));
                    modified = true;
                }
                None => fragment.push(Node::Text(m.text.to_string())),
            }
        }

        if !modified {
            return None;
        }
        if offset < text.len() {
            fragment.push(Node::Text(strip_vs16(&text[offset..])));
        }
        Some(fragment)
    }
}

fn strip_vs16(text: &str) -> String {
    text.chars().filter(|&c| c != VS16).collect()
}

fn is_event_handler(name: &str) -> bool {
    name.get(..2)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("on"))
}

fn is_skipped(name: &str) -> bool {
    SKIPPED_ELEMENTS
        .iter()
        .any(|skipped| skipped.eq_ignore_ascii_case(name))
}
