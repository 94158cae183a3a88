//! Contact form handlers
//!
//! Submission is simulated: nothing leaves the page. An accepted submit
//! shows a fixed acknowledgment and resets the form.

use portfolio_core::Field;
use tracing::debug;

use crate::state::{PagePhase, PageState};

use super::UpdateResult;

/// Acknowledgment shown after every accepted submission
pub const SUBMISSION_SUCCESS: &str = "Message sent successfully! I'll get back to you soon.";

/// Handle a keystroke in one of the form inputs
pub fn handle_field_changed(state: &mut PageState, field: Field, value: String) -> UpdateResult {
    state.form.set(field, value);
    if state.phase == PagePhase::Browsing {
        state.phase = PagePhase::Editing;
    }
    UpdateResult::none()
}

/// Handle form submission
///
/// Required-field checks belong to the browser; whatever submit reaches
/// here is acknowledged.
pub fn handle_submit(state: &mut PageState) -> UpdateResult {
    debug!("Contact form submitted (simulated)");
    state.form.clear();
    state.modal.show(SUBMISSION_SUCCESS);
    state.phase = PagePhase::Acknowledging;
    UpdateResult::none()
}

/// Handle dismissal of the acknowledgment modal
pub fn handle_close_modal(state: &mut PageState) -> UpdateResult {
    state.modal.close();
    if state.phase == PagePhase::Acknowledging {
        // Typing behind the overlay is possible; keep that draft in Editing.
        state.phase = if state.form.is_blank() {
            PagePhase::Browsing
        } else {
            PagePhase::Editing
        };
    }
    UpdateResult::none()
}
