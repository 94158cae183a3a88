pub mod browser;
pub mod components;
pub mod sections;
pub mod store;

use components::footer::Footer;
use components::modal::AcknowledgmentModal;
use components::navbar::Navbar;
use leptos::ev;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use portfolio_app::config::load_config;
use portfolio_app::Message;
use sections::about::About;
use sections::contact::Contact;
use sections::hero::Hero;
use sections::projects::Projects;
use store::PageStore;

const SITE_CONFIG: &str = include_str!("../site.toml");

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = load_config(SITE_CONFIG);
    let store = PageStore::new(&config);
    store.dispatch(Message::Mounted);

    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        if let Some(snapshot) = browser::measure_viewport() {
            store.dispatch(Message::Scrolled(snapshot));
        }
    });
    on_cleanup(move || scroll_listener.remove());

    let container_class = move || {
        format!(
            "app-container min-h-screen font-sans transition-colors bg-slate-50 text-slate-800 \
             dark:bg-slate-950 dark:text-slate-200 {}",
            store.with(|s| s.theme().class())
        )
    };

    view! {
        <Title text=config.site.title />
        <div class=container_class>
            <Navbar store=store />
            <main>
                <Hero store=store />
                <About />
                <Projects store=store />
                <Contact store=store />
            </main>
            <AcknowledgmentModal store=store />
            <Footer />
        </div>
    }
}
