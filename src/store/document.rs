//! The document store: sole writer of the resume document and its style.
//!
//! Every operation works on a private copy of the current state and swaps it
//! in only once it has been applied, so a [`ResumeState`] snapshot obtained
//! from [`DocumentStore::snapshot`] never changes underneath its holder.
//! Applied changes are written to storage immediately; a failed write is
//! logged and the in-memory state is kept.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::id::{fresh_id, BLOCK_ID_LEN, BLOCK_ITEM_ID_LEN, INFO_ITEM_ID_LEN};
use crate::models::{
    Block, BlockData, BlockDataPatch, ContentBlock, ContentItem, ContentItemPatch, InfoBlock,
    InfoData, InfoDataPatch, InfoItem, InfoItemPatch, ResumeState, ResumeStyle, TemplateType,
    TextProps,
};
use crate::persist::{self, PersistError, STORAGE_KEY};
use crate::storage::{FileStorage, KeyValueStorage, StorageError};
use crate::template::template_state;

use super::advisory::{Advisory, LogNotifier, Notifier};

/// Result of applying an operation to a working copy.
enum Outcome {
    Applied,
    Unchanged,
    Rejected(Advisory),
}

trait Identified {
    fn id(&self) -> &str;
}

impl Identified for InfoItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for ContentItem {
    fn id(&self) -> &str {
        &self.id
    }
}

fn position<T: Identified>(items: &[T], id: &str) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

/// Moves `items[from]` by `delta` positions (remove + insert, not a swap).
///
/// Targets below `min_index` or past the end are refused, including ones
/// too far away to be represented.
fn relocate<T>(items: &mut Vec<T>, from: usize, delta: isize, min_index: usize) -> Outcome {
    let Some(target) = (from as isize).checked_add(delta) else {
        return Outcome::Rejected(if delta < 0 {
            Advisory::NoMoreUp
        } else {
            Advisory::NoMoreBottom
        });
    };
    if target < min_index as isize {
        return Outcome::Rejected(Advisory::NoMoreUp);
    }
    if target >= items.len() as isize {
        return Outcome::Rejected(Advisory::NoMoreBottom);
    }

    let target = target as usize;
    if target == from {
        return Outcome::Unchanged;
    }

    let item = items.remove(from);
    items.insert(target, item);
    Outcome::Applied
}

/// Owns the resume state and exposes the documented mutation set.
pub struct DocumentStore<S: KeyValueStorage, N: Notifier = LogNotifier> {
    storage: S,
    key: String,
    notifier: N,
    state: Arc<ResumeState>,
}

impl<N: Notifier> DocumentStore<FileStorage, N> {
    /// Opens the file-backed store described by `config`.
    pub fn open_with_config(config: &Config, notifier: N) -> Result<Self, StorageError> {
        Self::open_with_key(config.file_storage(), config.storage_key.value.clone(), notifier)
    }
}

impl<S: KeyValueStorage, N: Notifier> DocumentStore<S, N> {
    /// Opens the store persisted under [`STORAGE_KEY`].
    pub fn open(storage: S, notifier: N) -> Result<Self, StorageError> {
        Self::open_with_key(storage, STORAGE_KEY, notifier)
    }

    /// Rehydrates from `key`, or seeds from the bundled template when nothing
    /// usable is stored there.
    ///
    /// Only a storage medium that cannot be read is an error; unparseable
    /// content is replaced by the template.
    pub fn open_with_key(
        storage: S,
        key: impl Into<String>,
        notifier: N,
    ) -> Result<Self, StorageError> {
        let key = key.into();

        let state = match persist::load_state(&storage, &key) {
            Ok(Some(state)) => {
                info!(
                    key = %key,
                    blocks = state.resume_data.len(),
                    "Rehydrated resume state"
                );
                state
            }
            Ok(None) => {
                info!(key = %key, "No persisted resume state, seeding from template");
                template_state()
            }
            Err(PersistError::Storage(e)) => return Err(e),
            Err(e) => {
                warn!(key = %key, error = %e, "Discarding unreadable resume state");
                template_state()
            }
        };

        Ok(Self {
            storage,
            key,
            notifier,
            state: Arc::new(state),
        })
    }

    // ==================== Reads ====================

    /// Current state. The returned snapshot is never mutated by the store.
    pub fn snapshot(&self) -> Arc<ResumeState> {
        Arc::clone(&self.state)
    }

    pub fn resume_data(&self) -> &[Block] {
        &self.state.resume_data
    }

    pub fn resume_style(&self) -> &ResumeStyle {
        &self.state.resume_style
    }

    pub fn info_block(&self) -> Option<&InfoBlock> {
        self.state.info_block()
    }

    pub fn block(&self, id: &str) -> Option<&Block> {
        self.state.block(id)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// The advisory a renderer should show before deleting block `id`:
    /// [`Advisory::DeleteBlockTip`] for a content block, [`Advisory::Warning`]
    /// for the info block, which cannot be deleted, and `None` for an
    /// unknown id.
    pub fn delete_confirmation(&self, id: &str) -> Option<Advisory> {
        self.block(id).map(|block| {
            if block.is_info() {
                Advisory::Warning
            } else {
                Advisory::DeleteBlockTip
            }
        })
    }

    /// Writes the current state, reporting failure to the caller.
    ///
    /// Mutations persist on their own; this is for callers that want to
    /// confirm the state made it to storage.
    pub fn persist_now(&self) -> Result<(), PersistError> {
        persist::save_state(&self.storage, &self.key, &self.state)
    }

    // ==================== Document ====================

    /// Replaces the whole block sequence.
    pub fn set_resume_data(&mut self, blocks: Vec<Block>) {
        self.apply("set_resume_data", |s| {
            s.resume_data = blocks;
            Outcome::Applied
        });
    }

    /// Replaces the whole style map.
    pub fn set_resume_style(&mut self, style: ResumeStyle) {
        self.apply("set_resume_style", |s| {
            s.resume_style = style;
            Outcome::Applied
        });
    }

    /// Discards all edits and restores the bundled template.
    pub fn reset_resume_settings(&mut self) {
        self.apply("reset_resume_settings", |s| {
            *s = template_state();
            Outcome::Applied
        });
    }

    /// Moves a content block by `delta` positions.
    ///
    /// Index 0 belongs to the info block, so no block may be moved there; the
    /// info block itself is never moved.
    pub fn move_resume_block(&mut self, id: &str, delta: isize) {
        self.apply("move_resume_block", |s| {
            let Some(index) = s.block_index(id) else {
                return Outcome::Unchanged;
            };
            if s.resume_data[index].is_info() {
                return Outcome::Rejected(Advisory::Warning);
            }
            relocate(&mut s.resume_data, index, delta, 1)
        });
    }

    /// Moves an item within its block by `delta` positions.
    pub fn move_resume_block_item(&mut self, block_id: &str, item_id: &str, delta: isize) {
        self.apply("move_resume_block_item", |s| match s.block_mut(block_id) {
            Some(Block::Info(block)) => match position(&block.data.items, item_id) {
                Some(index) => relocate(&mut block.data.items, index, delta, 0),
                None => Outcome::Unchanged,
            },
            Some(Block::Content(block)) => match position(&block.data.items, item_id) {
                Some(index) => relocate(&mut block.data.items, index, delta, 0),
                None => Outcome::Unchanged,
            },
            None => Outcome::Unchanged,
        });
    }

    // ==================== Info block ====================

    /// Replaces the info block with a freshly identified one at the front.
    pub fn set_resume_info_data(&mut self, data: InfoData) {
        self.apply("set_resume_info_data", |s| {
            s.resume_data.retain(|b| !b.is_info());
            let id = fresh_id(s, BLOCK_ID_LEN);
            s.resume_data.insert(
                0,
                Block::Info(InfoBlock {
                    id,
                    template: TemplateType::default(),
                    data,
                }),
            );
            Outcome::Applied
        });
    }

    /// Merges `patch` into the info block's data if `id` names the info block.
    pub fn update_resume_info_data(&mut self, id: &str, patch: InfoDataPatch) {
        self.apply("update_resume_info_data", |s| match s.block_mut(id) {
            Some(Block::Info(block)) => {
                patch.apply(&mut block.data);
                Outcome::Applied
            }
            _ => Outcome::Unchanged,
        });
    }

    pub fn add_resume_info_item(&mut self, item: TextProps) {
        self.apply("add_resume_info_item", |s| {
            let id = fresh_id(s, INFO_ITEM_ID_LEN);
            let Some(info) = s.info_block_mut() else {
                return Outcome::Unchanged;
            };
            info.data.items.push(InfoItem::new(id, item));
            Outcome::Applied
        });
    }

    pub fn delete_resume_info_item(&mut self, item_id: &str) {
        self.update_resume_info_item(item_id, None);
    }

    /// Merges `item` into the info item, or deletes the item when `item` is
    /// `None`, the same as [`Self::update_resume_block_item`].
    pub fn update_resume_info_item(&mut self, item_id: &str, item: Option<InfoItemPatch>) {
        self.apply("update_resume_info_item", |s| {
            let Some(info) = s.info_block_mut() else {
                return Outcome::Unchanged;
            };
            let Some(index) = position(&info.data.items, item_id) else {
                return Outcome::Unchanged;
            };
            match item {
                Some(patch) => info.data.items[index].apply(patch),
                None => {
                    info.data.items.remove(index);
                }
            }
            Outcome::Applied
        });
    }

    // ==================== Content blocks ====================

    /// Appends a content block with placeholder title and one placeholder item.
    pub fn add_resume_block(&mut self, template: TemplateType) {
        self.apply("add_resume_block", |s| {
            let id = fresh_id(s, BLOCK_ID_LEN);
            let item_id = fresh_id(s, BLOCK_ITEM_ID_LEN);
            let data = BlockData::new(format!("Item-{}", id))
                .with_items(vec![ContentItem::placeholder(item_id, &id)]);
            s.resume_data
                .push(Block::Content(ContentBlock { id, template, data }));
            Outcome::Applied
        });
    }

    /// Removes a content block. The info block cannot be deleted.
    pub fn delete_resume_block(&mut self, id: &str) {
        self.apply("delete_resume_block", |s| match s.block_index(id) {
            Some(index) if s.resume_data[index].is_info() => Outcome::Rejected(Advisory::Warning),
            Some(index) => {
                s.resume_data.remove(index);
                Outcome::Applied
            }
            None => Outcome::Unchanged,
        });
    }

    /// Replaces a content block's data. No-op for the info block.
    pub fn set_resume_block_data(&mut self, id: &str, data: BlockData) {
        self.apply("set_resume_block_data", |s| match s.content_block_mut(id) {
            Some(block) => {
                block.data = data;
                Outcome::Applied
            }
            None => Outcome::Unchanged,
        });
    }

    /// Merges `patch` into a content block's data. No-op for the info block.
    pub fn update_resume_block_data(&mut self, id: &str, patch: BlockDataPatch) {
        self.apply("update_resume_block_data", |s| match s.content_block_mut(id) {
            Some(block) => {
                patch.apply(&mut block.data);
                Outcome::Applied
            }
            None => Outcome::Unchanged,
        });
    }

    /// Appends an item to a content block.
    ///
    /// The item always gets a new id. Without an item, one is synthesized
    /// with placeholder text keyed by that id.
    pub fn add_resume_block_item(&mut self, block_id: &str, item: Option<ContentItem>) {
        self.apply("add_resume_block_item", |s| {
            let item_id = fresh_id(s, BLOCK_ITEM_ID_LEN);
            let Some(block) = s.content_block_mut(block_id) else {
                return Outcome::Unchanged;
            };
            let item = match item {
                Some(mut item) => {
                    item.id = item_id;
                    item
                }
                None => ContentItem::placeholder(item_id.clone(), &item_id),
            };
            block.data.items.push(item);
            Outcome::Applied
        });
    }

    /// Merges `item` into the existing item, or deletes it when `item` is `None`.
    pub fn update_resume_block_item(
        &mut self,
        block_id: &str,
        item_id: &str,
        item: Option<ContentItemPatch>,
    ) {
        self.apply("update_resume_block_item", |s| {
            let Some(block) = s.content_block_mut(block_id) else {
                return Outcome::Unchanged;
            };
            let Some(index) = position(&block.data.items, item_id) else {
                return Outcome::Unchanged;
            };
            match item {
                Some(patch) => patch.apply(&mut block.data.items[index]),
                None => {
                    block.data.items.remove(index);
                }
            }
            Outcome::Applied
        });
    }

    pub fn delete_resume_block_item(&mut self, block_id: &str, item_id: &str) {
        self.update_resume_block_item(block_id, item_id, None);
    }

    // ==================== Internal Helpers ====================

    fn apply<F>(&mut self, op: &'static str, f: F)
    where
        F: FnOnce(&mut ResumeState) -> Outcome,
    {
        let mut next = ResumeState::clone(&self.state);
        match f(&mut next) {
            Outcome::Applied => {
                debug!(op, "Applied");
                self.state = Arc::new(next);
                self.persist();
            }
            Outcome::Unchanged => {
                debug!(op, "Nothing to change");
            }
            Outcome::Rejected(advisory) => {
                debug!(op, advisory = advisory.key(), "Rejected");
                self.notifier.notify(advisory);
            }
        }
    }

    fn persist(&self) {
        if let Err(e) = persist::save_state(&self.storage, &self.key, &self.state) {
            warn!(
                key = %self.key,
                error = %e,
                "Failed to persist resume state; keeping in-memory state"
            );
        }
    }
}
