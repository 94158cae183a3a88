use leptos::prelude::*;
use portfolio_app::Message;
use portfolio_core::{ContactKind, Field, Section, PROFILE};

use crate::components::icons::{Mail, MapPin, Phone, Send};
use crate::store::PageStore;

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg bg-white dark:bg-slate-900 border border-slate-300 dark:border-slate-700 focus:outline-none focus:border-blue-500";
const LABEL_CLASS: &str = "block text-sm font-medium mb-2";

#[component]
pub fn Contact(store: PageStore) -> impl IntoView {
    let value = move |field: Field| store.with(|s| s.form.get(field).to_string());
    let changed = move |field: Field, value: String| {
        store.dispatch(Message::FieldChanged { field, value });
    };

    view! {
        <section id=Section::Contact.id() class="py-24 px-6">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl font-bold text-center mb-16">"Ready to Collaborate?"</h2>

                <div class="grid md:grid-cols-2 gap-12">
                    <div>
                        <h3 class="text-2xl font-bold mb-4">"Get In Touch"</h3>
                        <p class="text-slate-600 dark:text-slate-400 leading-relaxed mb-8">
                            {PROFILE.contact_intro}
                        </p>
                        <div class="space-y-6">
                            {PROFILE
                                .contact_details
                                .iter()
                                .map(|detail| {
                                    view! {
                                        <div class="flex items-center space-x-4">
                                            <div class="w-10 h-10 rounded-lg bg-blue-600/10 text-blue-600 dark:text-blue-400 flex items-center justify-center">
                                                {contact_icon(detail.kind)}
                                            </div>
                                            <div class="flex flex-col">
                                                <strong>{detail.kind.label()}</strong>
                                                <span class="text-slate-600 dark:text-slate-400">{detail.value}</span>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="bg-white dark:bg-slate-900/50 border border-slate-200 dark:border-slate-800 p-8 rounded-2xl">
                        <h3 class="text-2xl font-bold mb-6">"Send a Message"</h3>
                        <form
                            class="space-y-5"
                            on:submit=move |ev| {
                                ev.prevent_default();
                                store.dispatch(Message::SubmitContact);
                            }
                        >
                            <div>
                                <label for=Field::Name.input_name() class=LABEL_CLASS>"Name *"</label>
                                <input
                                    type="text"
                                    id=Field::Name.input_name()
                                    name=Field::Name.input_name()
                                    placeholder="Your name"
                                    class=INPUT_CLASS
                                    required
                                    prop:value=move || value(Field::Name)
                                    on:input=move |ev| changed(Field::Name, event_target_value(&ev))
                                />
                            </div>

                            <div>
                                <label for=Field::Email.input_name() class=LABEL_CLASS>"Email *"</label>
                                <input
                                    type="email"
                                    id=Field::Email.input_name()
                                    name=Field::Email.input_name()
                                    placeholder="your.email@example.com"
                                    class=INPUT_CLASS
                                    required
                                    prop:value=move || value(Field::Email)
                                    on:input=move |ev| changed(Field::Email, event_target_value(&ev))
                                />
                            </div>

                            <div>
                                <label for=Field::Message.input_name() class=LABEL_CLASS>"Message *"</label>
                                <textarea
                                    id=Field::Message.input_name()
                                    name=Field::Message.input_name()
                                    rows="3"
                                    placeholder="Tell me about your project or just say hello..."
                                    class=INPUT_CLASS
                                    required
                                    prop:value=move || value(Field::Message)
                                    on:input=move |ev| changed(Field::Message, event_target_value(&ev))
                                ></textarea>
                            </div>

                            <button
                                type="submit"
                                class="w-full px-8 py-3 bg-blue-600 text-white font-bold rounded-full hover:bg-blue-500 transition-colors flex items-center justify-center"
                            >
                                <span>"Send Message"</span>
                                <Send class="w-5 h-5 ml-2" />
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn contact_icon(kind: ContactKind) -> AnyView {
    match kind {
        ContactKind::Email => view! { <Mail class="w-5 h-5" /> }.into_any(),
        ContactKind::Phone => view! { <Phone class="w-5 h-5" /> }.into_any(),
        ContactKind::Location => view! { <MapPin class="w-5 h-5" /> }.into_any(),
    }
}
