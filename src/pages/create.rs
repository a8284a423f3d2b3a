//! Protected article creation page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::require_session::RequireSession;
use crate::net::types::ArticleDraft;
use crate::state::notifications::{self, NotificationsState};
use crate::state::wiki::{self, WikiState};

/// Article creation at `/create`; requires an active session.
#[component]
pub fn CreatePage() -> impl IntoView {
    view! {
        <RequireSession>
            <CreateForm/>
        </RequireSession>
    }
}

#[component]
fn CreateForm() -> impl IntoView {
    let wiki = expect_context::<RwSignal<WikiState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let on_submit = move |_| {
        if title.get().trim().is_empty() {
            notifications::error(notifications, "Title is required");
            return;
        }
        let draft = ArticleDraft {
            title: title.get().trim().to_owned(),
            content: content.get(),
            slug: None,
        };
        let navigate = navigate.clone();
        saving.set(true);
        leptos::task::spawn_local(async move {
            match wiki::create_article(wiki, &draft).await {
                Ok(article) => {
                    notifications::success(notifications, "Article created");
                    navigate(
                        &format!("/wiki/{}/{}", article.username, article.slug),
                        NavigateOptions::default(),
                    );
                }
                Err(message) => notifications::error(notifications, message),
            }
            saving.set(false);
        });
    };

    view! {
        <div class="editor-page">
            <h1>"New Article"</h1>
            <label class="editor-page__label">
                "Title"
                <input
                    class="editor-page__title"
                    type="text"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </label>
            <label class="editor-page__label">
                "Content"
                <textarea
                    class="editor-page__content"
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
            </label>
            <div class="editor-page__actions">
                <button class="btn btn--primary" disabled=move || saving.get() on:click=on_submit>
                    "Create"
                </button>
            </div>
        </div>
    }
}
