//! Home page: article list, and the landing point for the external
//! login redirect.

use leptos::prelude::*;

use crate::components::article_card::ArticleCard;
use crate::state::notifications::{self, NotificationsState};
use crate::state::session::{self, SessionState};
use crate::state::wiki::{self, WikiState};
use crate::util::auth_code;

/// Home page with the article list.
///
/// When the URL carries an authorization code (the external login page
/// redirected back here), the code is exchanged once and stripped from
/// the address bar; the follow-up status check fills in the user record.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let wiki = expect_context::<RwSignal<WikiState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    // Code exchange on mount. take_code_from_url cleanses the URL, so a
    // re-run never sees the consumed code.
    Effect::new(move || {
        if let Some(code) = auth_code::take_code_from_url() {
            leptos::task::spawn_local(async move {
                match session::exchange_code(session, &code).await {
                    Ok(()) => notifications::success(notifications, "Signed in"),
                    Err(message) => notifications::error(notifications, message),
                }
            });
        }
    });

    // Article list fetch on mount.
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            if let Err(message) = wiki::fetch_articles(wiki).await {
                notifications::error(notifications, message);
            }
        });
    });

    let articles = move || wiki.get().articles;
    let loading = move || wiki.get().loading;

    view! {
        <div class="home-page">
            <h1>"Articles"</h1>
            <Show when=move || !loading() fallback=|| view! { <p>"Loading articles..."</p> }>
                <div class="home-page__grid">
                    <For each=articles key=|a| a.id.clone() children=|article| view! { <ArticleCard article/> }/>
                </div>
            </Show>
        </div>
    }
}
