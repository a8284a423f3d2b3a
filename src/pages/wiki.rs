//! Read-only wiki article view.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::state::notifications::{self, NotificationsState};
use crate::state::session::SessionState;
use crate::state::wiki::{self, WikiState};

/// Article view at `/wiki/:username/:slug*`.
///
/// The detail endpoint addresses articles as `username/slug`, so the
/// two route params are joined back into one id.
#[component]
pub fn WikiPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let wiki = expect_context::<RwSignal<WikiState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let params = use_params_map();

    let article_id = move || {
        let p = params.get();
        format!(
            "{}/{}",
            p.get("username").unwrap_or_default(),
            p.get("slug").unwrap_or_default()
        )
    };

    // Refetch whenever the route params change.
    Effect::new(move || {
        let id = article_id();
        leptos::task::spawn_local(async move {
            if let Err(message) = wiki::fetch_article(wiki, &id).await {
                notifications::error(notifications, message);
            }
        });
    });

    let edit_href = move || format!("/edit/{}", article_id());

    view! {
        <div class="wiki-page">
            <Show
                when=move || wiki.get().current.is_some()
                fallback=|| view! { <p>"Loading article..."</p> }
            >
                {move || {
                    wiki.get()
                        .current
                        .map(|article| {
                            view! {
                                <article class="wiki-page__article">
                                    <header class="wiki-page__header">
                                        <h1>{article.title.clone()}</h1>
                                        <Show when=move || session.get().authenticated>
                                            <a class="btn" href=edit_href()>
                                                "Edit"
                                            </a>
                                        </Show>
                                    </header>
                                    <div class="wiki-page__content">{article.content.clone()}</div>
                                </article>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
