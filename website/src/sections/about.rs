use leptos::prelude::*;
use portfolio_core::{Section, PROFILE};

use crate::components::tech_stack::{PillStyle, TechStack};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="py-24 px-6">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl font-bold text-center mb-16">"About Me"</h2>
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div class="space-y-8">
                        <p class="text-lg text-slate-600 dark:text-slate-400 leading-relaxed">
                            {PROFILE.about}
                        </p>
                        <div>
                            <h3 class="text-lg font-semibold mb-4">"Technologies I Work With:"</h3>
                            <TechStack tags=PROFILE.skills style=PillStyle::Skill />
                        </div>
                    </div>
                    <div class="relative mx-auto w-64 h-64 md:w-80 md:h-80">
                        <img
                            src="/profile.jpg"
                            alt=PROFILE.name
                            class="w-full h-full object-cover rounded-2xl shadow-lg shadow-blue-500/20"
                        />
                        <div class="absolute inset-0 rounded-2xl ring-1 ring-inset ring-slate-900/10 dark:ring-white/10"></div>
                    </div>
                </div>
            </div>
        </section>
    }
}
