use leptos::prelude::*;
use portfolio_app::Message;
use portfolio_core::{Section, PROFILE};

use crate::components::icons::{ChevronsDown, Download};
use crate::store::PageStore;

#[component]
pub fn Hero(store: PageStore) -> impl IntoView {
    let indicator_class = move || {
        if store.with(|s| s.is_scrolled) {
            "scroll-indicator hidden"
        } else {
            "scroll-indicator absolute bottom-10 left-1/2 -translate-x-1/2 animate-bounce text-slate-400"
        }
    };

    view! {
        <section id=Section::Home.id() class="relative min-h-screen flex flex-col items-center justify-center px-6 text-center overflow-hidden">
            <div class="absolute top-0 left-1/2 -translate-x-1/2 w-[800px] h-[500px] bg-blue-600/10 blur-[120px] rounded-full pointer-events-none"></div>

            <div class="relative z-10 flex flex-col items-center">
                <h1 class="text-5xl md:text-7xl font-black tracking-tight mb-6">
                    "Hello, I'm "
                    <span class="text-transparent bg-clip-text bg-gradient-to-r from-blue-400 to-purple-400">
                        {PROFILE.name}
                    </span>
                    "."
                </h1>

                <p class="text-xl text-slate-500 dark:text-slate-400 max-w-2xl mx-auto mb-8 font-light leading-relaxed">
                    {PROFILE.headline}
                </p>

                <div class="flex flex-wrap justify-center gap-4">
                    <a
                        href=PROFILE.resume.href
                        download=PROFILE.resume.filename
                        class="px-8 py-3 bg-blue-600 text-white font-bold rounded-full hover:bg-blue-500 transition-colors flex items-center"
                    >
                        <Download class="w-5 h-5 mr-2" />
                        <span>"Download Resume"</span>
                    </a>
                    <button
                        class="px-8 py-3 font-bold rounded-full border border-slate-300 dark:border-slate-700 hover:bg-slate-100 dark:hover:bg-slate-800 transition-colors"
                        on:click=move |_| store.dispatch(Message::NavigateTo(Section::Projects))
                    >
                        "View My Work"
                    </button>
                </div>
            </div>

            <div class=indicator_class>
                <ChevronsDown class="w-7 h-7" />
            </div>
        </section>
    }
}
