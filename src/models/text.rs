use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Name of the text field. It can never be a metadata key.
pub(crate) const VALUE_KEY: &str = "value";

/// A styled text value: the literal text plus whatever rendering metadata
/// the presentation layer attached to it (label, icon, inline style...).
///
/// Metadata keys are opaque to the model and survive a save/load cycle
/// untouched. A `value` entry in `meta` would shadow the text itself, so it
/// is refused by the builders and never written out.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TextProps {
    pub value: String,
    #[serde(flatten)]
    pub meta: Map<String, Value>,
}

impl TextProps {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            meta: Map::new(),
        }
    }

    /// Adds a metadata entry. A `value` key is ignored.
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != VALUE_KEY {
            self.meta.insert(key, value.into());
        }
        self
    }

    pub fn meta(&self, key: &str) -> Option<&Value> {
        self.meta.get(key)
    }

    /// Removes metadata entries whose key is in `keys`.
    pub(crate) fn strip_meta(&mut self, keys: &[&str]) {
        self.meta.retain(|key, _| !keys.contains(&key.as_str()));
    }

    /// Writes `value` and the metadata into an open map, skipping `value` and
    /// any key in `reserved` so the output never holds a duplicate field.
    pub(crate) fn serialize_entries<M>(
        &self,
        map: &mut M,
        reserved: &[&str],
    ) -> Result<(), M::Error>
    where
        M: SerializeMap,
    {
        map.serialize_entry(VALUE_KEY, &self.value)?;
        for (key, value) in &self.meta {
            if key != VALUE_KEY && !reserved.contains(&key.as_str()) {
                map.serialize_entry(key, value)?;
            }
        }
        Ok(())
    }
}

impl Serialize for TextProps {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        self.serialize_entries(&mut map, &[])?;
        map.end()
    }
}

impl From<&str> for TextProps {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TextProps {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for TextProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Partial update of a [`TextProps`].
///
/// `value` replaces the text when set; each metadata key replaces the key of
/// the same name and leaves the others alone. A `value` metadata key is
/// dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(flatten)]
    pub meta: Map<String, Value>,
}

impl TextPatch {
    pub fn value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            meta: Map::new(),
        }
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != VALUE_KEY {
            self.meta.insert(key, value.into());
        }
        self
    }

    pub fn apply(self, target: &mut TextProps) {
        if let Some(value) = self.value {
            target.value = value;
        }
        target
            .meta
            .extend(self.meta.into_iter().filter(|(key, _)| key != VALUE_KEY));
    }
}
