use leptos::prelude::*;
use portfolio_core::{ProjectEntry, Section};

use crate::components::icons::ExternalLink;
use crate::components::tech_stack::TechStack;
use crate::store::PageStore;

#[component]
pub fn Projects(store: PageStore) -> impl IntoView {
    let projects = move || store.with(|s| s.projects);

    view! {
        <section id=Section::Projects.id() class="py-24 px-6 bg-slate-100/60 dark:bg-slate-900/30">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl font-bold text-center mb-16">"Latest Projects"</h2>

                {move || {
                    if store.with(|s| s.loading) {
                        view! {
                            <div class="loading text-center text-slate-500">"Loading projects..."</div>
                        }
                            .into_any()
                    } else {
                        let lists = projects();
                        view! {
                            <div class="grid md:grid-cols-2 gap-8 mb-20">
                                {lists
                                    .featured()
                                    .iter()
                                    .map(|project| view! { <FeaturedCard project=project /> })
                                    .collect_view()}
                            </div>

                            <h3 class="text-2xl font-bold mb-8">"Other Projects"</h3>
                            <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6">
                                {lists
                                    .other()
                                    .iter()
                                    .map(|project| view! { <OtherCard project=project /> })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}

#[component]
fn FeaturedCard(project: &'static ProjectEntry) -> impl IntoView {
    view! {
        <div class="project-card featured flex flex-col bg-white dark:bg-slate-900/50 border border-slate-200 dark:border-slate-800 p-8 rounded-2xl hover:border-slate-300 dark:hover:border-slate-700 transition-colors">
            <h3 class="text-xl font-bold mb-3">{project.title}</h3>
            <p class="text-slate-600 dark:text-slate-400 leading-relaxed mb-4">{project.description}</p>

            <TechStack tags=project.technologies />

            <ul class="list-disc pl-5 my-6 space-y-1 text-sm text-slate-600 dark:text-slate-400">
                {project
                    .features
                    .iter()
                    .map(|feature| view! { <li>{*feature}</li> })
                    .collect_view()}
            </ul>

            <div class="mt-auto">
                <a
                    href=project.github_url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-flex items-center text-sm font-medium text-blue-600 dark:text-blue-400 hover:underline"
                >
                    <span>"View on GitHub"</span>
                    <ExternalLink class="w-4 h-4 ml-1" />
                </a>
            </div>
        </div>
    }
}

#[component]
fn OtherCard(project: &'static ProjectEntry) -> impl IntoView {
    view! {
        <a
            href=project.github_url
            target="_blank"
            rel="noopener noreferrer"
            class="project-card other group relative flex flex-col bg-white dark:bg-slate-900/50 border border-slate-200 dark:border-slate-800 p-6 rounded-xl hover:border-blue-400 dark:hover:border-blue-700 transition-colors"
        >
            <h4 class="font-bold mb-2 pr-6">{project.title}</h4>
            <p class="text-sm text-slate-600 dark:text-slate-400 mb-4">{project.description}</p>
            <div class="mt-auto">
                <TechStack tags=project.technologies />
            </div>
            <ExternalLink class="absolute top-6 right-6 w-4 h-4 text-slate-400 group-hover:text-blue-500" />
        </a>
    }
}
