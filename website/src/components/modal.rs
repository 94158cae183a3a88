use leptos::prelude::*;
use portfolio_app::Message;

use crate::store::PageStore;

/// Post-submission acknowledgment
///
/// Clicking the overlay closes it; clicks inside the content box stop
/// propagating so they never reach the overlay's handler.
#[component]
pub fn AcknowledgmentModal(store: PageStore) -> impl IntoView {
    view! {
        <Show when=move || store.with(|s| s.is_modal_open())>
            <div
                class="modal-overlay fixed inset-0 z-[60] flex items-center justify-center bg-black/60 backdrop-blur-sm"
                on:click=move |_| store.dispatch(Message::CloseModal)
            >
                <div
                    class="modal-content max-w-md w-full mx-6 p-8 rounded-2xl text-center bg-white dark:bg-slate-900 border border-slate-200 dark:border-slate-800 shadow-2xl"
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                >
                    <h3 class="text-2xl font-bold mb-4">"\u{1F389} Success!"</h3>
                    <p class="text-slate-600 dark:text-slate-300 mb-6">
                        {move || store.with(|s| s.modal.status.clone())}
                    </p>
                    <button
                        class="px-8 py-3 bg-blue-600 text-white font-bold rounded-full hover:bg-blue-500 transition-colors"
                        on:click=move |_| store.dispatch(Message::CloseModal)
                    >
                        "Close"
                    </button>
                </div>
            </div>
        </Show>
    }
}
