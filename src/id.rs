//! Random identifiers for blocks and items.
//!
//! Ids are short alphanumeric strings. Each kind of node has its own length
//! so ids read back from a persisted document hint at what they name.

use rand::distr::Alphanumeric;
use rand::Rng;

use crate::models::ResumeState;

/// Length of a block id.
pub const BLOCK_ID_LEN: usize = 8;

/// Length of a content item id.
pub const BLOCK_ITEM_ID_LEN: usize = 10;

/// Length of an info item id.
pub const INFO_ITEM_ID_LEN: usize = 9;

/// Generates a random alphanumeric string of `len` characters.
pub fn generate_random_id(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Generates an id of `len` characters not used anywhere in `state`.
pub fn fresh_id(state: &ResumeState, len: usize) -> String {
    loop {
        let id = generate_random_id(len);
        if !state.contains_id(&id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_random_id_length_and_charset() {
        for len in [BLOCK_ID_LEN, BLOCK_ITEM_ID_LEN, INFO_ITEM_ID_LEN] {
            let id = generate_random_id(len);
            assert_eq!(id.len(), len);
            assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_random_id_returns_unique() {
        let ids: HashSet<String> = (0..500).map(|_| generate_random_id(BLOCK_ID_LEN)).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn test_fresh_id_avoids_existing() {
        let state = crate::template::template_state();
        let id = fresh_id(&state, BLOCK_ID_LEN);
        assert!(!state.contains_id(&id));
    }
}
