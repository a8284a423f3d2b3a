//! Protected article editing page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::require_session::RequireSession;
use crate::net::types::{Article, ArticleDraft};
use crate::state::notifications::{self, NotificationsState};
use crate::state::wiki::{self, WikiState};

/// Article editor at `/edit/:username/:slug*`; requires an active
/// session.
#[component]
pub fn EditPage() -> impl IntoView {
    view! {
        <RequireSession>
            <EditForm/>
        </RequireSession>
    }
}

#[component]
fn EditForm() -> impl IntoView {
    let wiki = expect_context::<RwSignal<WikiState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    let article_id = move || {
        let p = params.get();
        format!(
            "{}/{}",
            p.get("username").unwrap_or_default(),
            p.get("slug").unwrap_or_default()
        )
    };

    let loaded = RwSignal::new(None::<Article>);
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    // Load the article into the form whenever the route params change.
    Effect::new(move || {
        let id = article_id();
        leptos::task::spawn_local(async move {
            match wiki::fetch_article(wiki, &id).await {
                Ok(article) => {
                    title.set(article.title.clone());
                    content.set(article.content.clone());
                    loaded.set(Some(article));
                }
                Err(message) => notifications::error(notifications, message),
            }
        });
    });

    let on_save = move |_| {
        let Some(article) = loaded.get() else {
            return;
        };
        let draft = ArticleDraft {
            title: title.get().trim().to_owned(),
            content: content.get(),
            slug: Some(article.slug.clone()),
        };
        saving.set(true);
        leptos::task::spawn_local(async move {
            match wiki::update_article(wiki, &article.id, &draft).await {
                Ok(_) => notifications::success(notifications, "Article saved"),
                Err(message) => notifications::error(notifications, message),
            }
            saving.set(false);
        });
    };

    let on_delete = move |_| {
        let Some(article) = loaded.get() else {
            return;
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match wiki::delete_article(wiki, &article.id).await {
                Ok(()) => {
                    notifications::success(notifications, "Article deleted");
                    navigate("/", NavigateOptions::default());
                }
                Err(message) => notifications::error(notifications, message),
            }
        });
    };

    view! {
        <div class="editor-page">
            <h1>"Edit Article"</h1>
            <Show when=move || loaded.get().is_some() fallback=|| view! { <p>"Loading article..."</p> }>
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
                    <button class="btn btn--primary" disabled=move || saving.get() on:click=on_save.clone()>
                        "Save"
                    </button>
                    <button class="btn btn--danger" on:click=on_delete.clone()>
                        "Delete"
                    </button>
                </div>
            </Show>
        </div>
    }
}
