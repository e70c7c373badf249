//! The bundled seed document used on first run and by "reset to defaults".

use std::sync::OnceLock;

use crate::models::ResumeState;
use crate::persist::PersistedState;

const TEMPLATE_JSON: &str = include_str!("../assets/template.json");

static TEMPLATE: OnceLock<ResumeState> = OnceLock::new();

/// Returns a fresh copy of the bundled template state.
pub fn template_state() -> ResumeState {
    TEMPLATE
        .get_or_init(|| {
            serde_json::from_str::<PersistedState>(TEMPLATE_JSON)
                .expect("template.json is compiled in and checked by the tests in this module")
                .state
        })
        .clone()
}
