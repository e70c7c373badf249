use serde::{Deserialize, Serialize};

use super::item::{ContentItem, InfoItem};
use super::template_type::TemplateType;
use super::text::TextProps;

/// A top-level resume section.
///
/// Serialized with a `type` discriminator: `"info"` for the personal info
/// block, `"block"` for an ordinary content section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Block {
    #[serde(rename = "info")]
    Info(InfoBlock),
    #[serde(rename = "block")]
    Content(ContentBlock),
}

impl Block {
    pub fn id(&self) -> &str {
        match self {
            Block::Info(b) => &b.id,
            Block::Content(b) => &b.id,
        }
    }

    pub fn is_info(&self) -> bool {
        matches!(self, Block::Info(_))
    }

    pub fn as_info(&self) -> Option<&InfoBlock> {
        match self {
            Block::Info(b) => Some(b),
            Block::Content(_) => None,
        }
    }

    pub fn as_info_mut(&mut self) -> Option<&mut InfoBlock> {
        match self {
            Block::Info(b) => Some(b),
            Block::Content(_) => None,
        }
    }

    pub fn as_content(&self) -> Option<&ContentBlock> {
        match self {
            Block::Content(b) => Some(b),
            Block::Info(_) => None,
        }
    }

    pub fn as_content_mut(&mut self) -> Option<&mut ContentBlock> {
        match self {
            Block::Content(b) => Some(b),
            Block::Info(_) => None,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Block::Info(b) => &b.data.block_title.value,
            Block::Content(b) => &b.data.block_title.value,
        }
    }

    pub fn item_ids(&self) -> Vec<&str> {
        match self {
            Block::Info(b) => b.data.items.iter().map(|i| i.id.as_str()).collect(),
            Block::Content(b) => b.data.items.iter().map(|i| i.id.as_str()).collect(),
        }
    }

    pub fn item_count(&self) -> usize {
        match self {
            Block::Info(b) => b.data.items.len(),
            Block::Content(b) => b.data.items.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoBlock {
    pub id: String,
    #[serde(default)]
    pub template: TemplateType,
    pub data: InfoData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoData {
    pub block_title: TextProps,
    pub name: String,
    /// Image URL or data URI.
    pub avatar: String,
    #[serde(default)]
    pub items: Vec<InfoItem>,
}

impl InfoData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            block_title: TextProps::new("Info"),
            name: name.into(),
            avatar: String::new(),
            items: Vec::new(),
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    pub fn with_items(mut self, items: Vec<InfoItem>) -> Self {
        self.items = items;
        self
    }
}

/// Top-level partial update of [`InfoData`]; set fields replace, unset
/// fields are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoDataPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_title: Option<TextProps>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<InfoItem>>,
}

impl InfoDataPatch {
    pub fn apply(self, data: &mut InfoData) {
        if let Some(block_title) = self.block_title {
            data.block_title = block_title;
        }
        if let Some(name) = self.name {
            data.name = name;
        }
        if let Some(avatar) = self.avatar {
            data.avatar = avatar;
        }
        if let Some(items) = self.items {
            data.items = items;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub id: String,
    #[serde(default)]
    pub template: TemplateType,
    pub data: BlockData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockData {
    pub block_title: TextProps,
    #[serde(default)]
    pub items: Vec<ContentItem>,
}

impl BlockData {
    pub fn new(title: impl Into<TextProps>) -> Self {
        Self {
            block_title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn with_items(mut self, items: Vec<ContentItem>) -> Self {
        self.items = items;
        self
    }
}

/// Top-level partial update of [`BlockData`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockDataPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_title: Option<TextProps>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ContentItem>>,
}

impl BlockDataPatch {
    pub fn title(title: impl Into<TextProps>) -> Self {
        Self {
            block_title: Some(title.into()),
            items: None,
        }
    }

    pub fn apply(self, data: &mut BlockData) {
        if let Some(block_title) = self.block_title {
            data.block_title = block_title;
        }
        if let Some(items) = self.items {
            data.items = items;
        }
    }
}
