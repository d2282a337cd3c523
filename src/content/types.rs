//! Content data model and schema validation.
//!
//! JSON documents are deserialized into loose `Raw*` structs first, then
//! validated into the immutable types below. Validation is where field-level
//! errors come from: a missing `title` names the offending item key, a
//! non-string `line2` names both key and field.
//!
//! Document shape:
//! ```json
//! {
//!   "title": "Game Development",
//!   "image_folder": "games",
//!   "image_width": "150",
//!   "items": {
//!     "space_miner": { "title": "Space Miner", "line1": "Unity", "line2": "C#" }
//!   }
//! }
//! ```
//! Two-column pages use `main_title`/`main` and `other_title`/`other` instead
//! of `title`/`items`.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ContentError, Result};

/// Smallest unit of content: a title plus detail lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    pub key: String,
    pub title: String,
    pub subtitle: Option<String>,
    /// `line1..lineN` in order, contiguous from 1.
    pub detail_lines: Vec<String>,
    /// Overrides `key` for image lookup.
    pub image: Option<String>,
    /// Wraps the item's image in a hyperlink.
    pub link: Option<String>,
}

impl ContentItem {
    pub fn image_key(&self) -> &str {
        self.image.as_deref().unwrap_or(&self.key)
    }
}

/// Items in document order. Order drives left/right pairing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentSection {
    items: Vec<ContentItem>,
}

impl ContentSection {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn get(&self, key: &str) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.key == key)
    }

    #[cfg(test)]
    pub(crate) fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.key.as_str())
    }
}

/// One page's JSON document, validated.
#[derive(Debug, Clone, Default)]
pub struct PageDescriptor {
    /// Document name the descriptor was loaded from (e.g. `games`).
    pub document: String,
    pub title: Option<String>,
    pub image_folder: Option<String>,
    pub image_width: Option<u32>,
    pub image_extension: Option<String>,
    pub items: ContentSection,
    pub main_title: Option<String>,
    pub other_title: Option<String>,
    pub main: ContentSection,
    pub other: ContentSection,
}

impl PageDescriptor {
    /// Parse and validate a JSON document read from `path`.
    pub fn from_slice(document: &str, path: &Path, bytes: &[u8]) -> Result<Self> {
        let raw: RawPage = serde_json::from_slice(bytes).map_err(|source| ContentError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_raw(document, raw)
    }

    /// Parse and validate an in-memory JSON document.
    pub fn from_json(document: &str, json: &str) -> Result<Self> {
        let path = format!("{}.json", document);
        Self::from_slice(document, Path::new(&path), json.as_bytes())
    }

    fn from_raw(document: &str, raw: RawPage) -> Result<Self> {
        let image_width = raw
            .image_width
            .map(|w| w.into_pixels(document))
            .transpose()?;

        Ok(Self {
            document: document.to_string(),
            title: raw.title,
            image_folder: raw.image_folder,
            image_width,
            image_extension: raw.image_extension,
            items: validate_section(raw.items)?,
            main_title: raw.main_title,
            other_title: raw.other_title,
            main: validate_section(raw.main)?,
            other: validate_section(raw.other)?,
        })
    }

    pub fn require_title(&self) -> Result<&str> {
        self.require("title", self.title.as_deref())
    }

    pub fn require_main_title(&self) -> Result<&str> {
        self.require("main_title", self.main_title.as_deref())
    }

    pub fn require_other_title(&self) -> Result<&str> {
        self.require("other_title", self.other_title.as_deref())
    }

    pub fn require_image_folder(&self) -> Result<&str> {
        self.require("image_folder", self.image_folder.as_deref())
    }

    fn require<'a>(&self, field: &'static str, value: Option<&'a str>) -> Result<&'a str> {
        value.ok_or_else(|| ContentError::MissingField {
            key: self.document.clone(),
            field,
        })
    }
}

// ============================================================================
// Raw (unvalidated) shapes
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawPage {
    title: Option<String>,
    image_folder: Option<String>,
    image_width: Option<RawWidth>,
    image_extension: Option<String>,
    #[serde(default)]
    items: IndexMap<String, RawItem>,
    main_title: Option<String>,
    other_title: Option<String>,
    #[serde(default)]
    main: IndexMap<String, RawItem>,
    #[serde(default)]
    other: IndexMap<String, RawItem>,
}

/// `image_width` shows up both as `150` and `"150"` in existing content.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawWidth {
    Number(u64),
    Text(String),
}

impl RawWidth {
    fn into_pixels(self, document: &str) -> Result<u32> {
        let invalid = |reason: String| ContentError::InvalidField {
            key: document.to_string(),
            field: "image_width".to_string(),
            reason,
        };
        match self {
            RawWidth::Number(n) => {
                u32::try_from(n).map_err(|_| invalid(format!("{} is out of range", n)))
            }
            RawWidth::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| invalid(format!("'{}' is not a pixel width", s))),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawItem {
    title: Option<String>,
    subtitle: Option<String>,
    image: Option<String>,
    link: Option<String>,
    lines: Option<Vec<String>>,
    #[serde(flatten)]
    extra: IndexMap<String, Value>,
}

fn validate_section(raw: IndexMap<String, RawItem>) -> Result<ContentSection> {
    let items = raw
        .into_iter()
        .map(|(key, item)| validate_item(key, item))
        .collect::<Result<Vec<_>>>()?;
    Ok(ContentSection::new(items))
}

fn validate_item(key: String, raw: RawItem) -> Result<ContentItem> {
    let title = match raw.title {
        Some(title) => title,
        None => {
            return Err(ContentError::MissingField { key, field: "title" });
        }
    };

    let detail_lines = detail_lines(&key, raw.lines, &raw.extra)?;

    Ok(ContentItem {
        key,
        title,
        subtitle: raw.subtitle,
        detail_lines,
        image: raw.image,
        link: raw.link,
    })
}

/// Collect `line1`, `line2`, ... stopping at the first missing number.
///
/// An explicit `lines` array takes precedence over numbered fields.
fn detail_lines(key: &str, lines: Option<Vec<String>>, extra: &IndexMap<String, Value>) -> Result<Vec<String>> {
    let numbered: Vec<u32> = extra.keys().filter_map(|field| line_number(field)).collect();

    if let Some(lines) = lines {
        if !numbered.is_empty() {
            tracing::warn!(key, "item has both `lines` and numbered line fields, using `lines`");
        }
        return Ok(lines);
    }

    let mut collected = Vec::new();
    loop {
        let field = format!("line{}", collected.len() + 1);
        match extra.get(&field) {
            Some(Value::String(line)) => collected.push(line.clone()),
            Some(other) => {
                return Err(ContentError::InvalidField {
                    key: key.to_string(),
                    field,
                    reason: format!("expected a string, found {}", json_kind(other)),
                });
            }
            None => break,
        }
    }

    let orphaned: Vec<u32> = numbered
        .into_iter()
        .filter(|n| *n as usize > collected.len())
        .collect();
    if !orphaned.is_empty() {
        tracing::warn!(key, ?orphaned, "ignoring detail lines after a gap");
    }

    Ok(collected)
}

fn line_number(field: &str) -> Option<u32> {
    field.strip_prefix("line")?.parse().ok()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines_of(json: &str) -> Vec<String> {
        let page = PageDescriptor::from_json("test", json).unwrap();
        page.items.items()[0].detail_lines.clone()
    }

    #[test]
    fn test_three_contiguous_lines() {
        let lines = lines_of(r#"{"items": {"a": {"title": "A", "line1": "one", "line2": "two", "line3": "three"}}}"#);
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_gap_stops_at_first_missing_line() {
        let lines = lines_of(r#"{"items": {"a": {"title": "A", "line1": "one", "line3": "three"}}}"#);
        assert_eq!(lines, vec!["one"]);
    }

    #[test]
    fn test_no_lines_is_empty() {
        let lines = lines_of(r#"{"items": {"a": {"title": "A"}}}"#);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_lines_array_wins_over_numbered() {
        let lines = lines_of(r#"{"items": {"a": {"title": "A", "lines": ["x", "y"], "line1": "ignored"}}}"#);
        assert_eq!(lines, vec!["x", "y"]);
    }

    #[test]
    fn test_missing_title_names_item_key() {
        let err = PageDescriptor::from_json(
            "education",
            r#"{"title": "Education", "items": {"msc": {"title": "MSc"}, "bsc": {"line1": "no title"}}}"#,
        )
        .unwrap_err();
        match err {
            ContentError::MissingField { key, field } => {
                assert_eq!(key, "bsc");
                assert_eq!(field, "title");
            }
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_null_title_is_missing() {
        let err = PageDescriptor::from_json("t", r#"{"items": {"a": {"title": null}}}"#).unwrap_err();
        assert!(matches!(err, ContentError::MissingField { ref key, .. } if key == "a"));
    }

    #[test]
    fn test_non_string_line_is_invalid() {
        let err = PageDescriptor::from_json("t", r#"{"items": {"a": {"title": "A", "line1": "ok", "line2": 7}}}"#)
            .unwrap_err();
        match err {
            ContentError::InvalidField { key, field, .. } => {
                assert_eq!(key, "a");
                assert_eq!(field, "line2");
            }
            other => panic!("expected InvalidField, got {:?}", other),
        }
    }

    #[test]
    fn test_items_keep_document_order() {
        let page = PageDescriptor::from_json(
            "t",
            r#"{"items": {"zeta": {"title": "Z"}, "alpha": {"title": "A"}, "mid": {"title": "M"}}}"#,
        )
        .unwrap();
        let keys: Vec<&str> = page.items.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_image_width_string_or_number() {
        let page = PageDescriptor::from_json("t", r#"{"image_width": "200", "items": {}}"#).unwrap();
        assert_eq!(page.image_width, Some(200));

        let page = PageDescriptor::from_json("t", r#"{"image_width": 120}"#).unwrap();
        assert_eq!(page.image_width, Some(120));
    }

    #[test]
    fn test_image_width_garbage_is_invalid() {
        let err = PageDescriptor::from_json("games", r#"{"image_width": "wide"}"#).unwrap_err();
        assert!(matches!(err, ContentError::InvalidField { ref key, .. } if key == "games"));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = PageDescriptor::from_json("t", r#"{"items": {"#).unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
    }

    #[test]
    fn test_require_title_names_document() {
        let page = PageDescriptor::from_json("work_history", r#"{"main_title": "Jobs"}"#).unwrap();
        assert_eq!(page.require_main_title().unwrap(), "Jobs");
        let err = page.require_other_title().unwrap_err();
        assert!(matches!(err, ContentError::MissingField { ref key, field: "other_title" } if key == "work_history"));
    }

    #[test]
    fn test_image_key_defaults_to_item_key() {
        let page = PageDescriptor::from_json(
            "t",
            r#"{"items": {"a": {"title": "A"}, "b": {"title": "B", "image": "shared"}}}"#,
        )
        .unwrap();
        assert_eq!(page.items.get("a").unwrap().image_key(), "a");
        assert_eq!(page.items.get("b").unwrap().image_key(), "shared");
    }
}
