//! Parsing raw source bytes into a flat string map.
//!
//! Responsibilities:
//! - Parse YAML bytes and enforce the top-level shape.
//! - Flatten first-level values to strings.
//!
//! Invariants:
//! - The document must be a non-empty mapping; lists, scalars, empty, null and
//!   tagged documents are `MalformedConfig`.
//! - Keys must be scalars (string, number, bool).
//! - Scalar keys and values keep the exact text written in the file, so
//!   `1.10`, `0x1F` and `True` stay as written. An empty value is the empty
//!   string; `~` and `null` keep their text.
//! - Nested values become compact JSON.
//! - A repeated top-level key keeps its last value.
//!
//! The document is read twice: once into `Value` to check shapes and render
//! nested values, once into `String` targets, which keep plain-scalar text.

use std::fmt;

use serde::de::{
    self, DeserializeSeed, Deserializer, EnumAccess, IgnoredAny, MapAccess, SeqAccess,
    VariantAccess, Visitor,
};
use serde::Deserialize;
use serde_yaml::Value;

use super::error::ConfigLoaderError;
use crate::RawConfig;

/// Parse `bytes` read from `origin` into a raw config map.
pub fn parse_raw_config(bytes: &[u8], origin: &str) -> Result<RawConfig, ConfigLoaderError> {
    let malformed = |reason: String| ConfigLoaderError::MalformedConfig {
        origin: origin.to_string(),
        reason,
    };

    let document: Document =
        serde_yaml::from_slice(bytes).map_err(|e| malformed(format!("invalid YAML: {}", e)))?;

    let entries = match document {
        Document::Entries(entries) => entries,
        Document::Empty => return Err(malformed("document is empty".to_string())),
        Document::Other(kind) => {
            return Err(malformed(format!(
                "top level must be a mapping, found {}",
                kind
            )));
        }
    };

    if entries.is_empty() {
        return Err(malformed("mapping has no keys".to_string()));
    }

    let mut nested = Vec::with_capacity(entries.len());
    for (key, value) in &entries {
        match untag(key) {
            Value::String(_) | Value::Number(_) | Value::Bool(_) => {}
            other => {
                return Err(malformed(format!(
                    "keys must be scalars, found {}",
                    kind_name(other)
                )));
            }
        }
        nested.push(matches!(
            untag(value),
            Value::Sequence(_) | Value::Mapping(_)
        ));
    }

    let literals = LiteralEntries { nested: &nested }
        .deserialize(serde_yaml::Deserializer::from_slice(bytes))
        .map_err(|e| malformed(format!("invalid YAML: {}", e)))?;

    let mut config = RawConfig::new();
    for ((key, literal), (_, value)) in literals.into_iter().zip(entries) {
        let text = match literal {
            Some(text) => text,
            None => serde_json::to_string(untag(&value)).map_err(|e| {
                malformed(format!("value for {} cannot be rendered: {}", key, e))
            })?,
        };
        config.insert(key, text);
    }

    Ok(config)
}

/// Top-level shape of a document, with mapping entries kept in file order.
enum Document {
    Entries(Vec<(Value, Value)>),
    Empty,
    Other(&'static str),
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DocumentVisitor)
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = Document;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a YAML document")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Document, E> {
        Ok(Document::Empty)
    }

    fn visit_none<E: de::Error>(self) -> Result<Document, E> {
        Ok(Document::Empty)
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Document, E> {
        Ok(Document::Other("a boolean"))
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Document, E> {
        Ok(Document::Other("a number"))
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Document, E> {
        Ok(Document::Other("a number"))
    }

    fn visit_i128<E: de::Error>(self, _: i128) -> Result<Document, E> {
        Ok(Document::Other("a number"))
    }

    fn visit_u128<E: de::Error>(self, _: u128) -> Result<Document, E> {
        Ok(Document::Other("a number"))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Document, E> {
        Ok(Document::Other("a number"))
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<Document, E> {
        Ok(Document::Other("a string"))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Document, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Document::Other("a list"))
    }

    fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> Result<Document, A::Error> {
        let (IgnoredAny, variant) = data.variant::<IgnoredAny>()?;
        variant.newtype_variant::<IgnoredAny>()?;
        Ok(Document::Other("a tagged value"))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Document, A::Error> {
        let mut entries = Vec::new();
        while let Some(entry) = map.next_entry::<Value, Value>()? {
            entries.push(entry);
        }
        Ok(Document::Entries(entries))
    }
}

/// Second read of a mapping: literal key text, and literal value text for
/// every entry not flagged as nested.
struct LiteralEntries<'a> {
    nested: &'a [bool],
}

impl<'de> DeserializeSeed<'de> for LiteralEntries<'_> {
    type Value = Vec<(String, Option<String>)>;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_map(self)
    }
}

impl<'de> Visitor<'de> for LiteralEntries<'_> {
    type Value = Vec<(String, Option<String>)>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a mapping with scalar keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(self.nested.len());
        while let Some(key) = map.next_key::<String>()? {
            let value = if self.nested.get(entries.len()).copied().unwrap_or(false) {
                map.next_value::<IgnoredAny>()?;
                None
            } else {
                Some(map.next_value::<String>()?)
            };
            entries.push((key, value));
        }
        Ok(entries)
    }
}

fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
