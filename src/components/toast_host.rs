//! Renders the transient toast stack.

use leptos::prelude::*;

use crate::state::notifications::NotificationsState;

/// Fixed-position stack of active toasts with manual dismissal.
#[component]
pub fn ToastHost() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    view! {
        <div class="toast-stack">
            <For
                each=move || notifications.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("notification {} toast-notification", toast.kind.css_class())>
                            <button
                                class="delete"
                                on:click=move |_| notifications.update(|n| n.dismiss(id))
                            ></button>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
