//! portfolio-app - Page state and orchestration for the portfolio page
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! page's view state, the site configuration layer, and the storage seam for
//! the persisted theme preference. The browser front end owns a [`PageState`],
//! feeds it [`Message`]s, and performs the returned [`UpdateAction`]s.

pub mod config;
pub mod handler;
pub mod message;
pub mod state;
pub mod storage;

// Re-export primary types
pub use config::SiteConfig;
pub use handler::contact::SUBMISSION_SUCCESS;
pub use handler::{update, UpdateAction, UpdateResult};
pub use message::Message;
pub use state::{ModalState, PagePhase, PageState};
pub use storage::{MemoryStore, PreferenceStore};
