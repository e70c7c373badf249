use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::text::{TextPatch, TextProps};

const ID_KEY: &str = "id";

/// One contact line of the info block (phone, email, site...).
///
/// The text fields sit beside `id` in the same JSON object, so an `id`
/// metadata key is dropped on construction and never serialized.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InfoItem {
    pub id: String,
    #[serde(flatten)]
    pub text: TextProps,
}

impl InfoItem {
    pub fn new(id: impl Into<String>, mut text: TextProps) -> Self {
        text.strip_meta(&[ID_KEY]);
        Self {
            id: id.into(),
            text,
        }
    }

    /// Merges `patch` into the text; the id is never touched.
    pub fn apply(&mut self, patch: InfoItemPatch) {
        patch.apply(&mut self.text);
        self.text.strip_meta(&[ID_KEY]);
    }
}

impl Serialize for InfoItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(ID_KEY, &self.id)?;
        self.text.serialize_entries(&mut map, &[ID_KEY])?;
        map.end()
    }
}

/// Partial update of an [`InfoItem`]. The id is never touched.
pub type InfoItemPatch = TextPatch;

/// One entry of a content block, e.g. a single job or degree.
///
/// Items handed to the store for insertion get their `id` assigned there;
/// whatever the caller put in it is discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub title: TextProps,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<TextProps>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<TextProps>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<TextProps>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<TextProps>,
}

impl ContentItem {
    pub fn new(title: impl Into<TextProps>) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            subtitle: None,
            note: None,
            description: None,
            detail: None,
        }
    }

    /// Item filled with placeholder text derived from `seed`.
    pub fn placeholder(id: impl Into<String>, seed: &str) -> Self {
        Self {
            id: id.into(),
            title: TextProps::new(format!("Experience-{}", seed)),
            subtitle: Some(TextProps::new(format!("SubTitle-{}", seed))),
            note: Some(TextProps::new(format!("Note-{}", seed))),
            description: Some(TextProps::new(format!("description-{}", seed))),
            detail: Some(TextProps::new(format!("detail-{}", seed))),
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<TextProps>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<TextProps>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<TextProps>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<TextProps>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Partial update of a [`ContentItem`].
///
/// Each field that is set replaces the whole text field; unset fields keep
/// their current value. The optional fields take `Some(None)` to clear them,
/// which is `null` in JSON; an absent key leaves the field alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<TextProps>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub subtitle: Option<Option<TextProps>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub note: Option<Option<TextProps>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<TextProps>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub detail: Option<Option<TextProps>>,
}

/// A key that is present deserializes to `Some`, even when it holds `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<TextProps>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<TextProps>::deserialize(deserializer).map(Some)
}

impl ContentItemPatch {
    pub fn title(title: impl Into<TextProps>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_subtitle(mut self, subtitle: Option<TextProps>) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    pub fn with_note(mut self, note: Option<TextProps>) -> Self {
        self.note = Some(note);
        self
    }

    pub fn with_description(mut self, description: Option<TextProps>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_detail(mut self, detail: Option<TextProps>) -> Self {
        self.detail = Some(detail);
        self
    }

    pub fn apply(self, item: &mut ContentItem) {
        if let Some(title) = self.title {
            item.title = title;
        }
        if let Some(subtitle) = self.subtitle {
            item.subtitle = subtitle;
        }
        if let Some(note) = self.note {
            item.note = note;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
        if let Some(detail) = self.detail {
            item.detail = detail;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_info_item_flattens_text_fields() {
        let raw = json!({ "id": "abcdefghi", "value": "+1 555 0100", "label": "phone" });
        let item: InfoItem = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(item.id, "abcdefghi");
        assert_eq!(item.text.value, "+1 555 0100");
        assert!(!item.text.meta.contains_key("id"));
        assert_eq!(serde_json::to_value(&item).unwrap(), raw);
    }

    #[test]
    fn test_content_item_optional_fields_omitted() {
        let item = ContentItem::new("Engineer");
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value, json!({ "id": "", "title": { "value": "Engineer" } }));
    }

    #[test]
    fn test_placeholder_item() {
        let item = ContentItem::placeholder("item123456", "blk12345");
        assert_eq!(item.id, "item123456");
        assert_eq!(item.title.value, "Experience-blk12345");
        assert_eq!(item.subtitle.unwrap().value, "SubTitle-blk12345");
        assert_eq!(item.detail.unwrap().value, "detail-blk12345");
    }

    #[test]
    fn test_content_item_patch_keeps_unset_fields() {
        let mut item = ContentItem::new("Engineer")
            .with_subtitle("Acme")
            .with_note("2019 - 2023");

        ContentItemPatch::title("Staff Engineer")
            .with_detail(Some(TextProps::new("Led the storage team")))
            .apply(&mut item);

        assert_eq!(item.title.value, "Staff Engineer");
        assert_eq!(item.subtitle.as_ref().unwrap().value, "Acme");
        assert_eq!(item.note.as_ref().unwrap().value, "2019 - 2023");
        assert_eq!(item.detail.as_ref().unwrap().value, "Led the storage team");
        assert!(item.description.is_none());
    }

    #[test]
    fn test_content_item_patch_clears_optional_field() {
        let mut item = ContentItem::new("Engineer")
            .with_subtitle("Acme")
            .with_note("2019 - 2023");

        ContentItemPatch::default().with_note(None).apply(&mut item);

        assert!(item.note.is_none());
        assert_eq!(item.subtitle.as_ref().unwrap().value, "Acme");
    }

    #[test]
    fn test_content_item_patch_null_differs_from_absent() {
        let patch: ContentItemPatch =
            serde_json::from_value(json!({ "note": null, "detail": { "value": "x" } })).unwrap();
        assert_eq!(patch.note, Some(None));
        assert_eq!(patch.subtitle, None);
        assert_eq!(patch.detail, Some(Some(TextProps::new("x"))));

        let encoded = serde_json::to_value(&patch).unwrap();
        assert_eq!(encoded, json!({ "note": null, "detail": { "value": "x" } }));
    }

    #[test]
    fn test_info_item_id_key_never_becomes_metadata() {
        let mut item = InfoItem::new("abcdefghi", TextProps::new("x").with_meta("id", "foo"));
        assert!(item.text.meta("id").is_none());

        item.apply(TextPatch::default().with_meta("id", "bar").with_meta("label", "site"));
        assert_eq!(item.id, "abcdefghi");
        assert!(item.text.meta("id").is_none());
        assert_eq!(item.text.meta("label"), Some(&json!("site")));
    }

    #[test]
    fn test_info_item_serialize_skips_reserved_meta() {
        let mut item = InfoItem::new("abcdefghi", TextProps::new("x"));
        item.text.meta.insert("id".into(), json!("foo"));
        item.text.meta.insert("value".into(), json!("dup"));

        let encoded = serde_json::to_string(&item).unwrap();
        let decoded: InfoItem = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded.id, "abcdefghi");
        assert_eq!(decoded.text, TextProps::new("x"));
    }
}
