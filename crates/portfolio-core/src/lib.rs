//! # portfolio-core - Core Domain Types
//!
//! Foundation crate for the portfolio page. Provides the page's domain types,
//! static content and error handling. Nothing here touches the browser, so
//! every type is testable on the host.
//!
//! ## Public API
//!
//! ### Sections (`section`)
//! - [`Section`] - The four fixed page sections, in document order
//! - [`SectionBounds`], [`ViewportSnapshot`] - Element geometry captured on scroll,
//!   and the pure active-section lookup over it
//!
//! ### Projects (`project`, `catalog`)
//! - [`ProjectEntry`] - Immutable project card metadata
//! - [`ProjectLists`] - The featured and other collections
//! - [`catalog::builtin()`] - The catalog compiled into the page
//!
//! ### Contact form (`form`)
//! - [`ContactForm`], [`Field`] - Controlled form values
//!
//! ### Theme (`theme`)
//! - [`Theme`] - Light/dark scheme
//! - [`theme::parse_preference()`] - Lenient decoding of the stored preference
//!
//! ### Content (`profile`)
//! - [`PROFILE`] - Biography, skills, contact details and resume link
//!
//! ### Error Handling (`error`)
//! - [`Error`], [`Result`]

pub mod catalog;
pub mod error;
pub mod form;
pub mod profile;
pub mod project;
pub mod section;
pub mod theme;

pub use error::{Error, Result};
pub use form::{ContactForm, Field};
pub use profile::{ContactDetail, ContactKind, Download, Profile, PROFILE};
pub use project::{ProjectEntry, ProjectLists};
pub use section::{Section, SectionBounds, ViewportSnapshot};
pub use theme::Theme;
