use leptos::prelude::*;
use portfolio_app::Message;
use portfolio_core::{Section, PROFILE};

use super::icons::{Moon, Sun};
use crate::store::PageStore;

#[component]
pub fn Navbar(store: PageStore) -> impl IntoView {
    let active = Memo::new(move |_| store.with(|s| s.active_section));
    let is_scrolled = Memo::new(move |_| store.with(|s| s.is_scrolled));
    let theme = Memo::new(move |_| store.with(|s| s.theme()));

    let header_class = move || {
        if is_scrolled.get() {
            "fixed top-0 left-0 right-0 z-50 nav nav-scrolled bg-white/80 dark:bg-slate-950/80 backdrop-blur-md border-b border-slate-200 dark:border-slate-800 shadow-sm transition-all"
        } else {
            "fixed top-0 left-0 right-0 z-50 nav bg-transparent border-b border-transparent transition-all"
        }
    };

    view! {
        <nav class=header_class>
            <div class="max-w-7xl mx-auto px-6 h-16 flex items-center justify-between">
                <a
                    href=Section::Home.href()
                    class="font-bold text-lg tracking-tight"
                    on:click=move |ev| {
                        ev.prevent_default();
                        store.dispatch(Message::NavigateTo(Section::Home));
                    }
                >
                    {PROFILE.brand}
                </a>

                <div class="flex items-center space-x-6">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <a
                                    href=section.href()
                                    class=move || {
                                        if active.get() == section {
                                            "nav-link active text-sm font-medium transition-colors text-blue-600 dark:text-blue-400"
                                        } else {
                                            "nav-link text-sm font-medium transition-colors text-slate-500 hover:text-slate-900 dark:text-slate-400 dark:hover:text-white"
                                        }
                                    }
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        store.dispatch(Message::NavigateTo(section));
                                    }
                                >
                                    {section.label()}
                                </a>
                            }
                        })
                        .collect_view()}

                    <button
                        class="theme-toggle p-2 rounded-full text-slate-500 hover:text-slate-900 dark:text-slate-400 dark:hover:text-white transition-colors"
                        aria-label=move || theme.get().toggle_label()
                        on:click=move |_| store.dispatch(Message::ToggleTheme)
                    >
                        {move || {
                            if theme.get().is_dark() {
                                view! { <Sun class="w-5 h-5" /> }.into_any()
                            } else {
                                view! { <Moon class="w-5 h-5" /> }.into_any()
                            }
                        }}
                    </button>
                </div>
            </div>
        </nav>
    }
}
