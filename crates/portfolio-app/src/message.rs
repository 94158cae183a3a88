//! Message types for the page (TEA pattern)

use portfolio_core::{Field, Section, ViewportSnapshot};

/// All possible messages/events on the page
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The page has mounted; assign the project catalog
    Mounted,

    /// Theme toggle button clicked
    ToggleTheme,

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    /// Window scrolled; carries the geometry measured for this event
    Scrolled(ViewportSnapshot),

    /// Navigation link (or in-page button) clicked
    NavigateTo(Section),

    // ─────────────────────────────────────────────────────────
    // Contact Form Messages
    // ─────────────────────────────────────────────────────────
    /// A form input changed
    FieldChanged { field: Field, value: String },

    /// Form submitted (default navigation already prevented)
    SubmitContact,

    /// Acknowledgment modal dismissed (button or overlay click)
    CloseModal,
}
