//! Main update function - handles state transitions (TEA pattern)

use tracing::trace;

use crate::message::Message;
use crate::state::PageState;

use super::{catalog, contact, scroll, theme, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut PageState, message: Message) -> UpdateResult {
    trace!("update: {:?}", message);

    match message {
        Message::Mounted => catalog::handle_mounted(state),

        Message::ToggleTheme => theme::handle_toggle_theme(state),

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::Scrolled(snapshot) => scroll::handle_scrolled(state, &snapshot),
        Message::NavigateTo(section) => scroll::handle_navigate_to(state, section),

        // ─────────────────────────────────────────────────────────
        // Contact Form Messages
        // ─────────────────────────────────────────────────────────
        Message::FieldChanged { field, value } => {
            contact::handle_field_changed(state, field, value)
        }
        Message::SubmitContact => contact::handle_submit(state),
        Message::CloseModal => contact::handle_close_modal(state),
    }
}
