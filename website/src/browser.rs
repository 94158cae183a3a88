//! Browser glue: `localStorage`, document theme class, element geometry and
//! smooth scrolling. Every failure here is logged and absorbed.

use portfolio_app::storage::{persist_dark_mode, PreferenceStore};
use portfolio_app::UpdateAction;
use portfolio_core::{Error, Result, Section, SectionBounds, ViewportSnapshot};
use wasm_bindgen::JsValue;
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, Storage};

/// Class toggled on `<body>` for dark mode
const DARK_CLASS: &str = "dark";

/// [`PreferenceStore`] over `window.localStorage`
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<Storage> {
        let window = web_sys::window().ok_or_else(|| Error::storage("no window"))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| Error::storage("localStorage is disabled"))
    }
}

impl PreferenceStore for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }
}

fn js_error(value: JsValue) -> Error {
    Error::storage(format!("{:?}", value))
}

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Perform an [`UpdateAction`] returned by `update()`
pub fn perform(action: UpdateAction, storage_key: &str) {
    match action {
        UpdateAction::SyncTheme { dark_mode } => {
            apply_theme(dark_mode);
            persist_dark_mode(&LocalStorage, storage_key, dark_mode);
        }
        UpdateAction::ScrollIntoView(section) => scroll_into_view(section),
    }
}

/// Add or remove the dark class on the document body
pub fn apply_theme(dark_mode: bool) {
    let Some(body) = document().and_then(|d| d.body()) else {
        log::debug!("No document body; theme class not applied");
        return;
    };

    let classes = body.class_list();
    let result = if dark_mode {
        classes.add_1(DARK_CLASS)
    } else {
        classes.remove_1(DARK_CLASS)
    };
    if let Err(e) = result {
        log::warn!("Failed to apply theme class: {:?}", e);
    }
}

/// Measure scroll offset and every section's bounding box
pub fn measure_viewport() -> Option<ViewportSnapshot> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let scroll_y = window.scroll_y().unwrap_or(0.0);

    let snapshot = Section::ALL
        .into_iter()
        .fold(ViewportSnapshot::new(scroll_y), |snap, section| {
            let bounds = document.get_element_by_id(section.id()).map(|element| {
                let rect = element.get_bounding_client_rect();
                SectionBounds::new(rect.top(), rect.bottom())
            });
            snap.with_section(section, bounds)
        });
    Some(snapshot)
}

/// Smoothly scroll a section into view; missing elements are skipped
pub fn scroll_into_view(section: Section) {
    let Some(element) = document().and_then(|d| d.get_element_by_id(section.id())) else {
        log::debug!("No element #{}; skipping scroll", section);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
