//! Protected file storage browser.

use leptos::prelude::*;

use crate::components::require_session::RequireSession;
use crate::state::notifications::{self, NotificationsState};
use crate::state::storage::StorageState;

/// Storage browser at `/storage`; requires an active session.
#[component]
pub fn StoragePage() -> impl IntoView {
    view! {
        <RequireSession>
            <StorageBrowser/>
        </RequireSession>
    }
}

#[component]
fn StorageBrowser() -> impl IntoView {
    let storage = expect_context::<RwSignal<StorageState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    let open_path = move |path: String| {
        leptos::task::spawn_local(async move {
            if let Err(message) = crate::state::storage::fetch_items(storage, &path).await {
                notifications::error(notifications, message);
            }
        });
    };

    // Initial listing of the root path.
    Effect::new(move || {
        open_path("/".to_owned());
    });

    let on_upload = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(list) = input.files() else {
                return;
            };
            let files: Vec<web_sys::File> = (0..list.length()).filter_map(|i| list.item(i)).collect();
            input.set_value("");
            if files.is_empty() {
                return;
            }
            let path = storage.get_untracked().current_path.clone();
            leptos::task::spawn_local(async move {
                match crate::state::storage::upload_files(&files, &path).await {
                    Ok(uploaded) => {
                        notifications::success(
                            notifications,
                            format!("Uploaded {} file(s)", uploaded.len()),
                        );
                        let _ = crate::state::storage::fetch_items(storage, &path).await;
                    }
                    Err(message) => notifications::error(notifications, message),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_delete = move |file_id: String| {
        leptos::task::spawn_local(async move {
            match crate::state::storage::delete_file(storage, &file_id).await {
                Ok(()) => notifications::success(notifications, "File deleted"),
                Err(message) => notifications::error(notifications, message),
            }
        });
    };

    view! {
        <div class="storage-page">
            <header class="storage-page__header">
                <h1>"Files"</h1>
                <label class="storage-page__upload btn btn--primary">
                    "Upload"
                    <input type="file" multiple on:change=on_upload style="display: none"/>
                </label>
            </header>

            <nav class="storage-page__breadcrumbs">
                <For
                    each=move || storage.get().breadcrumbs
                    key=|crumb| crumb.path.clone()
                    children=move |crumb| {
                        let path = crumb.path.clone();
                        view! {
                            <button class="storage-page__crumb" on:click=move |_| open_path(path.clone())>
                                {crumb.name}
                            </button>
                        }
                    }
                />
            </nav>

            <ul class="storage-page__items">
                <For
                    each=move || storage.get().items
                    key=|item| item.id.clone()
                    children=move |item| {
                        if item.directory {
                            let path = item.path.clone();
                            view! {
                                <li class="storage-page__item storage-page__item--dir">
                                    <button on:click=move |_| open_path(path.clone())>{item.name}</button>
                                </li>
                            }
                                .into_any()
                        } else {
                            let id = item.id.clone();
                            view! {
                                <li class="storage-page__item">
                                    <span class="storage-page__name">{item.name}</span>
                                    <span class="storage-page__size">{format!("{} bytes", item.size)}</span>
                                    <button class="btn btn--danger" on:click=move |_| on_delete(id.clone())>
                                        "Delete"
                                    </button>
                                </li>
                            }
                                .into_any()
                        }
                    }
                />
            </ul>
        </div>
    }
}
