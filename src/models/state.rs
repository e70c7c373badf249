use serde::{Deserialize, Serialize};

use super::block::{Block, ContentBlock, InfoBlock};
use super::style::ResumeStyle;

/// The full persisted state of a resume: its style and its block sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeState {
    pub resume_style: ResumeStyle,
    pub resume_data: Vec<Block>,
}

impl ResumeState {
    pub fn new(resume_style: ResumeStyle, resume_data: Vec<Block>) -> Self {
        Self {
            resume_style,
            resume_data,
        }
    }

    pub fn block_index(&self, id: &str) -> Option<usize> {
        self.resume_data.iter().position(|b| b.id() == id)
    }

    pub fn block(&self, id: &str) -> Option<&Block> {
        self.resume_data.iter().find(|b| b.id() == id)
    }

    pub fn block_mut(&mut self, id: &str) -> Option<&mut Block> {
        self.resume_data.iter_mut().find(|b| b.id() == id)
    }

    pub fn content_block_mut(&mut self, id: &str) -> Option<&mut ContentBlock> {
        self.block_mut(id).and_then(Block::as_content_mut)
    }

    pub fn info_index(&self) -> Option<usize> {
        self.resume_data.iter().position(Block::is_info)
    }

    pub fn info_block(&self) -> Option<&InfoBlock> {
        self.resume_data.iter().find_map(Block::as_info)
    }

    pub fn info_block_mut(&mut self) -> Option<&mut InfoBlock> {
        self.resume_data.iter_mut().find_map(Block::as_info_mut)
    }

    /// Whether any block or item in the document already uses `id`.
    pub fn contains_id(&self, id: &str) -> bool {
        self.resume_data
            .iter()
            .any(|b| b.id() == id || b.item_ids().contains(&id))
    }

    pub fn info_block_count(&self) -> usize {
        self.resume_data.iter().filter(|b| b.is_info()).count()
    }
}
