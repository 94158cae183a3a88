use leptos::prelude::*;

#[derive(Clone, Copy, Default)]
pub enum PillStyle {
    /// Small tag on project cards
    #[default]
    Tech,
    /// Larger tag in the about section
    Skill,
}

impl PillStyle {
    fn class(self) -> &'static str {
        match self {
            PillStyle::Tech => "px-2 py-0.5 text-xs font-medium rounded-full border bg-blue-50 text-blue-700 border-blue-200 dark:bg-blue-900/30 dark:text-blue-300 dark:border-blue-800",
            PillStyle::Skill => "px-3 py-1 text-sm font-medium rounded-lg border bg-slate-100 text-slate-700 border-slate-200 dark:bg-slate-800 dark:text-slate-200 dark:border-slate-700",
        }
    }
}

#[component]
pub fn TechStack(
    tags: &'static [&'static str],
    #[prop(optional)] style: PillStyle,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {tags
                .iter()
                .map(|tag| view! { <span class=style.class()>{*tag}</span> })
                .collect_view()}
        </div>
    }
}
