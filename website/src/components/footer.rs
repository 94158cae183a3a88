use leptos::prelude::*;
use portfolio_core::PROFILE;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-slate-200 dark:border-slate-900 py-12 mt-auto">
            <div class="max-w-7xl mx-auto px-6 flex flex-col md:flex-row justify-between items-center text-slate-500 text-sm">
                <p>{PROFILE.copyright}</p>
                <p class="mt-4 md:mt-0">{PROFILE.built_with}</p>
            </div>
        </footer>
    }
}
