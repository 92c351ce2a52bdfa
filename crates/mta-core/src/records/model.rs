//! Typed views of node export entries and metatag payloads.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// One node from the primary (JSON) export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaRecord {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub nid: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub node_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub view_node: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub field_search_summary_text: Option<String>,
}

impl MetaRecord {
    /// Join key: the trimmed nid, or `None` when missing or blank.
    pub fn key(&self) -> Option<&str> {
        self.nid.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    pub fn nid(&self) -> &str {
        text(&self.nid)
    }

    pub fn lang(&self) -> &str {
        text(&self.lang)
    }

    pub fn title(&self) -> &str {
        text(&self.title)
    }

    pub fn node_type(&self) -> &str {
        text(&self.node_type)
    }

    pub fn view_node(&self) -> &str {
        text(&self.view_node)
    }

    /// Raw summary text as exported.
    pub fn summary_text(&self) -> &str {
        text(&self.field_search_summary_text)
    }

    /// Summary text with embedded line breaks folded into spaces, trimmed.
    pub fn summary_text_flat(&self) -> String {
        flatten_newlines(self.summary_text())
    }
}

/// Metatag payload for one node from the secondary (tab-delimited) export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetatagRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub og_description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub og_image: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub og_image_secure_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub og_image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub twitter_cards_description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub twitter_cards_image: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub twitter_cards_type: Option<String>,
    /// Tags outside the report columns (`title`, `canonical_url`, ...).
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

impl MetatagRecord {
    /// Description with CR/LF sequences folded into spaces, trimmed.
    pub fn description_flat(&self) -> String {
        flatten_newlines(text(&self.description))
    }

    fn known_tags(&self) -> [(&'static str, &Option<String>); 8] {
        [
            ("description", &self.description),
            ("og_description", &self.og_description),
            ("og_image", &self.og_image),
            ("og_image_secure_url", &self.og_image_secure_url),
            ("og_image_url", &self.og_image_url),
            ("twitter_cards_description", &self.twitter_cards_description),
            ("twitter_cards_image", &self.twitter_cards_image),
            ("twitter_cards_type", &self.twitter_cards_type),
        ]
    }

    /// Sorted names of every tag that carries a non-empty value.
    pub fn tag_names(&self) -> Vec<String> {
        let mut names: BTreeSet<String> = self
            .known_tags()
            .into_iter()
            .filter(|(_, v)| v.as_deref().is_some_and(|s| !s.trim().is_empty()))
            .map(|(name, _)| name.to_string())
            .collect();
        for (name, value) in &self.other {
            let present = match value {
                Value::Null => false,
                Value::String(s) => !s.trim().is_empty(),
                Value::Array(a) => !a.is_empty(),
                Value::Object(o) => !o.is_empty(),
                Value::Bool(_) | Value::Number(_) => true,
            };
            if present {
                names.insert(name.clone());
            }
        }
        names.into_iter().collect()
    }
}

/// Replaces CRLF, CR and LF with a single space each, then trims.
pub fn flatten_newlines(s: &str) -> String {
    s.replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
        .trim()
        .to_string()
}

pub(crate) fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// Accepts strings, numbers and booleans; exports are not consistent about
/// quoting ids. Nested values are kept as their JSON text.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(other) => Some(other.to_string()),
    })
}
