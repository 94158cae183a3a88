//! Project catalog loading
//!
//! The catalog is compiled in, so the load resolves inside the same update
//! that starts it. The `loading` flag still brackets the assignment so the
//! view's placeholder path stays wired for a future remote source.

use portfolio_core::catalog;
use tracing::debug;

use crate::state::PageState;

use super::{UpdateAction, UpdateResult};

/// Handle the page mounting: assign projects and sync the restored theme
pub fn handle_mounted(state: &mut PageState) -> UpdateResult {
    if state.projects.is_empty() {
        state.loading = true;
        state.projects = catalog::builtin();
        state.loading = false;
        debug!(
            "Loaded {} featured and {} other projects",
            state.projects.featured().len(),
            state.projects.other().len()
        );
    }

    UpdateResult::action(UpdateAction::SyncTheme {
        dark_mode: state.dark_mode,
    })
}
