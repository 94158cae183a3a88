//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `catalog`: Project catalog loading
//! - `theme`: Theme toggling
//! - `scroll`: Scroll tracking and navigation
//! - `contact`: Contact form and acknowledgment modal

pub(crate) mod catalog;
pub(crate) mod contact;
pub(crate) mod scroll;
pub(crate) mod theme;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use portfolio_core::Section;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Side effects the browser runtime performs after update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateAction {
    /// Apply the theme class to the document and persist the preference
    SyncTheme { dark_mode: bool },

    /// Smoothly scroll the section's element into view
    ScrollIntoView(Section),
}

/// Result of processing a message
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the runtime to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
