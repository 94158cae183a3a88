//! Tests for handler module

use super::*;
use crate::config::ScrollSettings;
use crate::message::Message;
use crate::state::{PagePhase, PageState};
use portfolio_core::{catalog, Field, Section, SectionBounds, ViewportSnapshot};

/// Helper to build a snapshot where only `section` spans the probe line
fn snapshot_with_active(scroll_y: f64, active: Option<Section>) -> ViewportSnapshot {
    let mut top = -1000.0;
    Section::ALL
        .into_iter()
        .fold(ViewportSnapshot::new(scroll_y), |snap, section| {
            let bounds = if Some(section) == active {
                SectionBounds::new(0.0, 600.0)
            } else {
                top -= 700.0;
                SectionBounds::new(top, top + 600.0)
            };
            snap.with_section(section, Some(bounds))
        })
}

fn fill_form(state: &mut PageState, name: &str, email: &str, message: &str) {
    update(state, Message::FieldChanged { field: Field::Name, value: name.into() });
    update(state, Message::FieldChanged { field: Field::Email, value: email.into() });
    update(state, Message::FieldChanged { field: Field::Message, value: message.into() });
}

// ─────────────────────────────────────────────────────────
// Mount / catalog
// ─────────────────────────────────────────────────────────

#[test]
fn test_mounted_assigns_builtin_catalog() {
    let mut state = PageState::new();
    assert!(state.projects.is_empty());

    update(&mut state, Message::Mounted);

    assert_eq!(state.projects, catalog::builtin());
    assert!(!state.loading);
}

#[test]
fn test_mounted_syncs_restored_theme() {
    let mut state = PageState::with_settings(ScrollSettings::default(), true);

    let result = update(&mut state, Message::Mounted);

    assert_eq!(
        result.action,
        Some(UpdateAction::SyncTheme { dark_mode: true })
    );
    assert!(result.message.is_none());
}

#[test]
fn test_second_mount_does_not_reassign() {
    let mut state = PageState::new();
    update(&mut state, Message::Mounted);
    let featured = state.projects.featured().as_ptr();

    update(&mut state, Message::Mounted);

    assert_eq!(state.projects.featured().as_ptr(), featured);
}

// ─────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────

#[test]
fn test_toggle_theme_flips_and_requests_sync() {
    let mut state = PageState::new();

    let result = update(&mut state, Message::ToggleTheme);

    assert!(state.dark_mode);
    assert_eq!(
        result.action,
        Some(UpdateAction::SyncTheme { dark_mode: true })
    );
}

#[test]
fn test_toggle_theme_twice_restores_original() {
    let mut state = PageState::new();
    update(&mut state, Message::ToggleTheme);
    let result = update(&mut state, Message::ToggleTheme);

    assert!(!state.dark_mode);
    assert_eq!(
        result.action,
        Some(UpdateAction::SyncTheme { dark_mode: false })
    );
}

// ─────────────────────────────────────────────────────────
// Scroll tracking
// ─────────────────────────────────────────────────────────

#[test]
fn test_scroll_sets_active_section() {
    let mut state = PageState::new();

    let result = update(
        &mut state,
        Message::Scrolled(snapshot_with_active(1200.0, Some(Section::Projects))),
    );

    assert_eq!(state.active_section, Section::Projects);
    assert!(state.is_scrolled);
    assert_eq!(result, UpdateResult::none());
}

#[test]
fn test_scroll_without_match_keeps_previous_section() {
    let mut state = PageState::new();
    state.active_section = Section::About;

    update(&mut state, Message::Scrolled(snapshot_with_active(900.0, None)));

    assert_eq!(state.active_section, Section::About);
}

#[test]
fn test_scroll_threshold_is_strict() {
    let mut state = PageState::new();

    update(&mut state, Message::Scrolled(snapshot_with_active(50.0, Some(Section::Home))));
    assert!(!state.is_scrolled);

    update(&mut state, Message::Scrolled(snapshot_with_active(51.0, Some(Section::Home))));
    assert!(state.is_scrolled);

    update(&mut state, Message::Scrolled(snapshot_with_active(0.0, Some(Section::Home))));
    assert!(!state.is_scrolled);
}

#[test]
fn test_scroll_uses_configured_threshold_and_probe() {
    let settings = ScrollSettings {
        threshold_px: 200.0,
        section_probe_px: 10.0,
    };
    let mut state = PageState::with_settings(settings, false);
    let snap = ViewportSnapshot::new(150.0)
        .with_section(Section::Home, Some(SectionBounds::new(-500.0, 50.0)))
        .with_section(Section::About, Some(SectionBounds::new(50.0, 700.0)));

    update(&mut state, Message::Scrolled(snap));

    assert!(!state.is_scrolled);
    // Probe at 10px hits home; the default 100px probe would have hit about.
    assert_eq!(state.active_section, Section::Home);
}

#[test]
fn test_navigate_sets_active_immediately_and_scrolls() {
    let mut state = PageState::new();

    let result = update(&mut state, Message::NavigateTo(Section::Contact));

    assert_eq!(state.active_section, Section::Contact);
    assert_eq!(
        result.action,
        Some(UpdateAction::ScrollIntoView(Section::Contact))
    );
}

#[test]
fn test_scroll_after_navigate_overrides() {
    let mut state = PageState::new();
    update(&mut state, Message::NavigateTo(Section::Contact));

    // Smooth scroll still passing through projects
    update(
        &mut state,
        Message::Scrolled(snapshot_with_active(1500.0, Some(Section::Projects))),
    );

    assert_eq!(state.active_section, Section::Projects);
}

// ─────────────────────────────────────────────────────────
// Contact form
// ─────────────────────────────────────────────────────────

#[test]
fn test_field_change_enters_editing() {
    let mut state = PageState::new();

    update(
        &mut state,
        Message::FieldChanged {
            field: Field::Name,
            value: "A".into(),
        },
    );

    assert_eq!(state.form.name, "A");
    assert_eq!(state.phase, PagePhase::Editing);
}

#[test]
fn test_submit_clears_form_and_opens_modal() {
    let mut state = PageState::new();
    fill_form(&mut state, "Ana", "a@x.com", "Hi");

    let result = update(&mut state, Message::SubmitContact);

    assert_eq!(state.form.name, "");
    assert_eq!(state.form.email, "");
    assert_eq!(state.form.message, "");
    assert!(state.modal.open);
    assert_eq!(state.modal.status, contact::SUBMISSION_SUCCESS);
    assert_eq!(state.phase, PagePhase::Acknowledging);
    assert_eq!(result, UpdateResult::none());
}

#[test]
fn test_submit_does_not_touch_catalog() {
    let mut state = PageState::new();
    update(&mut state, Message::Mounted);
    let before = state.projects;
    fill_form(&mut state, "Ana", "a@x.com", "Hi");

    update(&mut state, Message::SubmitContact);

    assert_eq!(state.projects, before);
}

#[test]
fn test_whitespace_only_field_still_submits() {
    let mut state = PageState::new();
    fill_form(&mut state, "   ", "a@x.com", "Hi");

    update(&mut state, Message::SubmitContact);

    assert!(state.modal.open);
    assert_eq!(state.modal.status, contact::SUBMISSION_SUCCESS);
    assert!(state.form.is_blank());
    assert_eq!(state.phase, PagePhase::Acknowledging);
}

#[test]
fn test_submit_is_unconditional() {
    let mut state = PageState::new();
    fill_form(&mut state, "Ana", "", "Hi");

    update(&mut state, Message::SubmitContact);

    assert!(state.modal.open);
    assert_eq!(state.modal.status, contact::SUBMISSION_SUCCESS);
    assert!(state.form.is_blank());
}

#[test]
fn test_close_modal_clears_status() {
    let mut state = PageState::new();
    fill_form(&mut state, "Ana", "a@x.com", "Hi");
    update(&mut state, Message::SubmitContact);

    update(&mut state, Message::CloseModal);

    assert!(!state.modal.open);
    assert!(state.modal.status.is_empty());
    assert_eq!(state.phase, PagePhase::Browsing);
}

#[test]
fn test_close_modal_when_opened_directly() {
    let mut state = PageState::new();
    state.modal.show("something else");

    update(&mut state, Message::CloseModal);

    assert!(!state.modal.open);
    assert!(state.modal.status.is_empty());
}

#[test]
fn test_close_modal_while_closed_is_noop() {
    let mut state = PageState::new();

    update(&mut state, Message::CloseModal);

    assert!(!state.modal.open);
    assert_eq!(state.phase, PagePhase::Browsing);
}

#[test]
fn test_typing_behind_modal_stays_acknowledging_then_editing() {
    let mut state = PageState::new();
    fill_form(&mut state, "Ana", "a@x.com", "Hi");
    update(&mut state, Message::SubmitContact);

    update(
        &mut state,
        Message::FieldChanged {
            field: Field::Message,
            value: "One more".into(),
        },
    );
    assert_eq!(state.phase, PagePhase::Acknowledging);

    update(&mut state, Message::CloseModal);
    assert_eq!(state.phase, PagePhase::Editing);
}

#[test]
fn test_theme_and_scroll_do_not_change_phase() {
    let mut state = PageState::new();
    fill_form(&mut state, "Ana", "a@x.com", "Hi");
    update(&mut state, Message::SubmitContact);

    update(&mut state, Message::ToggleTheme);
    update(&mut state, Message::NavigateTo(Section::About));

    assert_eq!(state.phase, PagePhase::Acknowledging);
    assert!(state.modal.open);
}
