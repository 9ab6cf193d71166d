//! Toast overlay rendering the shared [`ToastsState`].

use leptos::prelude::*;

use crate::state::toasts::{ToastLevel, ToastsState};

/// Fixed-position stack of transient notifications.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastsState>>();

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.level {
                        ToastLevel::Success => "toast toast--success",
                        ToastLevel::Error => "toast toast--error",
                        ToastLevel::Info => "toast toast--info",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class>
                            <span class="toast__message">{toast.message.clone()}</span>
                            <button
                                class="toast__dismiss"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
