//! Lucide icons used on the page, inlined as SVG

use leptos::prelude::*;

#[component]
fn Icon(class: &'static str, children: Children) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {children()}
        </svg>
    }
}

#[component]
pub fn ChevronsDown(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Icon class=class>
            <path d="m7 6 5 5 5-5" />
            <path d="m7 13 5 5 5-5" />
        </Icon>
    }
}

#[component]
pub fn Download(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Icon class=class>
            <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" />
            <polyline points="7 10 12 15 17 10" />
            <line x1="12" x2="12" y1="15" y2="3" />
        </Icon>
    }
}

#[component]
pub fn ExternalLink(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Icon class=class>
            <path d="M15 3h6v6" />
            <path d="M10 14 21 3" />
            <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" />
        </Icon>
    }
}

#[component]
pub fn Mail(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Icon class=class>
            <rect width="20" height="16" x="2" y="4" rx="2" />
            <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
        </Icon>
    }
}

#[component]
pub fn MapPin(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Icon class=class>
            <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" />
            <circle cx="12" cy="10" r="3" />
        </Icon>
    }
}

#[component]
pub fn Moon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Icon class=class>
            <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" />
        </Icon>
    }
}

#[component]
pub fn Phone(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Icon class=class>
            <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" />
        </Icon>
    }
}

#[component]
pub fn Send(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Icon class=class>
            <path d="M14.536 21.686a.5.5 0 0 0 .937-.024l6.5-19a.496.496 0 0 0-.635-.635l-19 6.5a.5.5 0 0 0-.024.937l7.93 3.18a2 2 0 0 1 1.112 1.11z" />
            <path d="m21.854 2.147-10.94 10.939" />
        </Icon>
    }
}

#[component]
pub fn Sun(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Icon class=class>
            <circle cx="12" cy="12" r="4" />
            <path d="M12 2v2" />
            <path d="M12 20v2" />
            <path d="m4.93 4.93 1.41 1.41" />
            <path d="m17.66 17.66 1.41 1.41" />
            <path d="M2 12h2" />
            <path d="M20 12h2" />
            <path d="m6.34 17.66-1.41 1.41" />
            <path d="m19.07 4.93-1.41 1.41" />
        </Icon>
    }
}
