//! Scroll message handlers
//!
//! Tracks the scrolled-nav flag and which section is in view.

use portfolio_core::{Section, ViewportSnapshot};
use tracing::debug;

use crate::state::PageState;

use super::{UpdateAction, UpdateResult};

/// Handle a window scroll event
///
/// When no section spans the probe line the previous active section is kept.
pub fn handle_scrolled(state: &mut PageState, snapshot: &ViewportSnapshot) -> UpdateResult {
    state.is_scrolled = snapshot.is_scrolled_past(state.scroll_settings.threshold_px);

    if let Some(section) = snapshot.section_in_view(state.scroll_settings.section_probe_px) {
        state.active_section = section;
    }

    UpdateResult::none()
}

/// Handle a navigation click
///
/// The section becomes active immediately; the next scroll event may
/// override it once the smooth scroll moves the viewport.
pub fn handle_navigate_to(state: &mut PageState, section: Section) -> UpdateResult {
    debug!("Navigating to #{}", section);
    state.active_section = section;
    UpdateResult::action(UpdateAction::ScrollIntoView(section))
}
