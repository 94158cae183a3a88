//! Page state (Model in TEA pattern)

use portfolio_core::{ContactForm, ProjectLists, Section, Theme};

use crate::config::ScrollSettings;

/// Where the visitor is in the contact flow
///
/// Theme and scroll tracking run independently of this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PagePhase {
    /// Reading the page; the form is untouched
    #[default]
    Browsing,
    /// At least one keystroke has gone into the form
    Editing,
    /// The post-submission modal is showing
    Acknowledging,
}

/// Post-submission acknowledgment modal
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalState {
    pub open: bool,
    pub status: String,
}

impl ModalState {
    pub fn show(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.status.clear();
    }
}

/// Complete view state of the page
#[derive(Debug, Clone)]
pub struct PageState {
    /// Scroll tracking thresholds
    pub scroll_settings: ScrollSettings,

    pub dark_mode: bool,

    /// Section highlighted in the navigation
    pub active_section: Section,

    /// Past the scroll threshold (compact nav, hidden scroll hint)
    pub is_scrolled: bool,

    pub modal: ModalState,

    pub form: ContactForm,

    /// Featured and other projects; empty until the page mounts
    pub projects: ProjectLists,

    /// Project load in flight. Always resolved within the same update today.
    pub loading: bool,

    pub phase: PagePhase,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

impl PageState {
    pub fn new() -> Self {
        Self::with_settings(ScrollSettings::default(), false)
    }

    /// Create page state from config and the restored theme preference
    pub fn with_settings(scroll_settings: ScrollSettings, dark_mode: bool) -> Self {
        Self {
            scroll_settings,
            dark_mode,
            active_section: Section::default(),
            is_scrolled: false,
            modal: ModalState::default(),
            form: ContactForm::default(),
            projects: ProjectLists::empty(),
            loading: false,
            phase: PagePhase::default(),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.dark_mode)
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active_section == section
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.open
    }
}
