//! Theme toggle handler

use tracing::debug;

use crate::state::PageState;

use super::{UpdateAction, UpdateResult};

/// Flip the theme; the runtime applies and persists it
pub fn handle_toggle_theme(state: &mut PageState) -> UpdateResult {
    state.dark_mode = !state.dark_mode;
    debug!("Theme toggled to {:?}", state.theme());

    UpdateResult::action(UpdateAction::SyncTheme {
        dark_mode: state.dark_mode,
    })
}
