//! Shared article views: public read access by share code, plus the
//! share-edit variant.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::state::notifications::{self, NotificationsState};
use crate::state::wiki::{self, WikiState};

fn share_code(params: &leptos_router::params::ParamsMap) -> String {
    params.get("share_code").unwrap_or_default()
}

/// Read-only shared article at `/share/:share_code`.
///
/// Share links are public; no session is required.
#[component]
pub fn SharePage() -> impl IntoView {
    let wiki = expect_context::<RwSignal<WikiState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let params = use_params_map();

    Effect::new(move || {
        let code = share_code(&params.get());
        leptos::task::spawn_local(async move {
            if let Err(message) = wiki::fetch_shared_article(wiki, &code).await {
                notifications::error(notifications, message);
            }
        });
    });

    let edit_href = move || format!("/share/{}/edit", share_code(&params.get()));

    view! {
        <div class="share-page">
            <Show
                when=move || wiki.get().current.is_some()
                fallback=|| view! { <p>"Loading shared article..."</p> }
            >
                {move || {
                    wiki.get()
                        .current
                        .map(|article| {
                            view! {
                                <article class="share-page__article">
                                    <header class="share-page__header">
                                        <h1>{article.title.clone()}</h1>
                                        <a class="btn" href=edit_href()>
                                            "Edit"
                                        </a>
                                    </header>
                                    <div class="share-page__content">{article.content.clone()}</div>
                                </article>
                            }
                        })
                }}
            </Show>
        </div>
    }
}

/// Editable shared article at `/share/:share_code/edit`.
///
/// Loads through the share endpoint, saves through the regular article
/// update endpoint using the id the share endpoint returned.
#[component]
pub fn ShareEditPage() -> impl IntoView {
    let wiki = expect_context::<RwSignal<WikiState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let params = use_params_map();

    let loaded = RwSignal::new(None::<crate::net::types::Article>);
    let content = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    Effect::new(move || {
        let code = share_code(&params.get());
        leptos::task::spawn_local(async move {
            match wiki::fetch_shared_article(wiki, &code).await {
                Ok(article) => {
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
        let draft = crate::net::types::ArticleDraft {
            title: article.title.clone(),
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

    view! {
        <div class="share-page">
            <Show when=move || loaded.get().is_some() fallback=|| view! { <p>"Loading shared article..."</p> }>
                <h1>{move || loaded.get().map(|a| a.title).unwrap_or_default()}</h1>
                <textarea
                    class="share-page__editor"
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
                <div class="share-page__actions">
                    <button class="btn btn--primary" disabled=move || saving.get() on:click=on_save.clone()>
                        "Save"
                    </button>
                </div>
            </Show>
        </div>
    }
}
