//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, ParamSegment, StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::components::{navbar::Navbar, toast_host::ToastHost};
use crate::config;
use crate::net::http;
use crate::pages::{
    create::CreatePage,
    edit::EditPage,
    home::HomePage,
    login::LoginPage,
    share::{ShareEditPage, SharePage},
    signup::SignupPage,
    storage::StoragePage,
    wiki::WikiPage,
};
use crate::state::notifications::NotificationsState;
use crate::state::session::{self, SessionState};
use crate::state::storage::StorageState;
use crate::state::ui::UiState;
use crate::state::wiki::WikiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let session = RwSignal::new(SessionState::default());
    let wiki = RwSignal::new(WikiState::default());
    let storage = RwSignal::new(StorageState::default());
    let ui = RwSignal::new(UiState::default());
    let notifications = RwSignal::new(NotificationsState::default());

    provide_context(session);
    provide_context(wiki);
    provide_context(storage);
    provide_context(ui);
    provide_context(notifications);

    view! {
        <Stylesheet id="leptos" href="/pkg/wiki-client.css"/>
        <Title text=config::APP_NAME/>

        <Router>
            <AppShell/>
        </Router>
    }
}

/// Shell inside the router context: cross-cutting wiring plus routes.
#[component]
fn AppShell() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // The 401 cross-cut: any API response with an unauthorized status
    // clears the session and forces navigation to the login route,
    // whichever call site issued the request.
    Effect::new(move || {
        let navigate = navigate.clone();
        http::install_unauthorized_hook(move || {
            session.update(SessionState::clear);
            navigate(config::LOGIN_ROUTE, NavigateOptions::default());
        });
    });

    // Startup reconciliation: mirror the server session into local
    // state, unless the URL carries an authorization code; then the
    // landing page owns the exchange and the follow-up check.
    let location = use_location();
    Effect::new(move || {
        let search = location.search.get_untracked();
        if !crate::router::guard::has_auth_code(&search) {
            leptos::task::spawn_local(async move {
                session::check_status(session).await;
            });
        }
    });

    view! {
        <Navbar/>
        <ToastHost/>
        <main class="app-main">
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("create") view=CreatePage/>
                <Route
                    path=(StaticSegment("wiki"), ParamSegment("username"), WildcardSegment("slug"))
                    view=WikiPage
                />
                <Route
                    path=(StaticSegment("edit"), ParamSegment("username"), WildcardSegment("slug"))
                    view=EditPage
                />
                <Route
                    path=(StaticSegment("share"), ParamSegment("share_code"), StaticSegment("edit"))
                    view=ShareEditPage
                />
                <Route path=(StaticSegment("share"), ParamSegment("share_code")) view=SharePage/>
                <Route path=StaticSegment("storage") view=StoragePage/>
            </Routes>
        </main>
    }
}
