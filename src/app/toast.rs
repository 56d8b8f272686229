use leptos::prelude::*;

use crate::state::{Acknowledgment, ToastQueue};

/// Handle to the page's notification queue.
#[derive(Debug, Clone, Copy)]
pub struct Toaster(RwSignal<ToastQueue>);

impl Toaster {
    pub fn provide() -> Self {
        let toaster = Self(RwSignal::new(ToastQueue::default()));
        provide_context(toaster);
        toaster
    }

    pub fn show(self, ack: Acknowledgment) {
        let Some(id) = self.0.try_update(|q| q.push(ack)) else {
            return;
        };
        set_timeout(move || self.dismiss(id), ToastQueue::DISMISS_AFTER);
    }

    pub fn dismiss(self, id: u64) {
        self.0.try_update(|q| q.dismiss(id));
    }
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn ToastViewport() -> impl IntoView {
    let toaster = use_toaster();
    let toasts = move || toaster.0.with(|q| q.toasts().to_vec());

    view! {
        <ol class="fixed bottom-4 right-4 z-[100] flex flex-col gap-2 w-full max-w-sm" aria-live="polite">
            <For each=toasts key=|t| t.id let:toast>
                <li class="bg-secondary border border-highlight/30 rounded-lg p-4 shadow-lg flex items-start gap-3">
                    <div class="flex-1">
                        <p class="font-semibold">{toast.title}</p>
                        <p class="text-sm text-lightText/70">{toast.description}</p>
                    </div>
                    <button
                        class="text-lightText/50 hover:text-lightText"
                        aria-label="Dismiss"
                        on:click=move |_| toaster.dismiss(toast.id)
                    >
                        "×"
                    </button>
                </li>
            </For>
        </ol>
    }
}
