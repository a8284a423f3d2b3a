//! File storage store: the current directory listing and breadcrumbs.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use leptos::prelude::{RwSignal, Update};

use crate::config;
use crate::net::api;
use crate::net::types::StorageItem;

/// One crumb in the storage browser's path trail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breadcrumb {
    pub name: String,
    pub path: String,
}

/// Storage browser state for the current path.
#[derive(Clone, Debug)]
pub struct StorageState {
    pub current_path: String,
    pub items: Vec<StorageItem>,
    pub breadcrumbs: Vec<Breadcrumb>,
}

impl Default for StorageState {
    fn default() -> Self {
        Self {
            current_path: "/".to_owned(),
            items: Vec::new(),
            breadcrumbs: breadcrumbs_for("/"),
        }
    }
}

impl StorageState {
    /// Replace the listing with the contents of `path`.
    pub fn set_listing(&mut self, path: &str, items: Vec<StorageItem>) {
        self.breadcrumbs = breadcrumbs_for(path);
        self.current_path = path.to_owned();
        self.items = items;
    }

    /// Drop one item from the current listing.
    pub fn remove_item(&mut self, file_id: &str) {
        self.items.retain(|i| i.id != file_id);
    }
}

/// Breadcrumb trail for a storage path: a root crumb plus one per
/// segment, each linking to its cumulative path.
pub fn breadcrumbs_for(path: &str) -> Vec<Breadcrumb> {
    let mut crumbs = vec![Breadcrumb {
        name: "Home".to_owned(),
        path: "/".to_owned(),
    }];

    let mut current = String::new();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        current.push('/');
        current.push_str(segment);
        crumbs.push(Breadcrumb {
            name: segment.to_owned(),
            path: current.clone(),
        });
    }
    crumbs
}

/// Client-side upload constraint check, run before any bytes are sent.
///
/// # Errors
///
/// Returns a display message when the file is too large or of a type
/// the uploader does not accept.
pub fn validate_upload(name: &str, size: f64, content_type: &str) -> Result<(), String> {
    if size > config::MAX_UPLOAD_BYTES {
        return Err(format!("{name}: file exceeds the 10 MB upload limit"));
    }
    if !config::ALLOWED_UPLOAD_TYPES.contains(&content_type) {
        return Err(format!("{name}: file type {content_type} is not allowed"));
    }
    Ok(())
}

/// Fetch the listing for `path` into the store.
///
/// # Errors
///
/// Returns the API error message; the previous listing is kept.
pub async fn fetch_items(storage: RwSignal<StorageState>, path: &str) -> Result<(), String> {
    let listing = api::fetch_storage_items(path).await?;
    storage.update(|s| s.set_listing(path, listing.items));
    Ok(())
}

/// Upload one file to `path` after the client-side constraint check.
///
/// # Errors
///
/// Returns the constraint violation or the API error message.
#[cfg(feature = "hydrate")]
pub async fn upload_file(file: &web_sys::File, path: &str) -> Result<StorageItem, String> {
    validate_upload(&file.name(), file.size(), &file.type_())?;
    api::upload_file(file, path).await
}

/// Upload several files sequentially, stopping at the first failure.
///
/// The original browser client reported per-file progress through an
/// XHR callback; `fetch` exposes no upload progress, so this is a plain
/// sequential convenience.
///
/// # Errors
///
/// Returns the first failing file's message; earlier uploads stand.
#[cfg(feature = "hydrate")]
pub async fn upload_files(
    files: &[web_sys::File],
    path: &str,
) -> Result<Vec<StorageItem>, String> {
    let mut uploaded = Vec::with_capacity(files.len());
    for file in files {
        uploaded.push(upload_file(file, path).await?);
    }
    Ok(uploaded)
}

/// Fetch metadata for one file.
///
/// # Errors
///
/// Returns the API error message.
pub async fn fetch_file_detail(file_id: &str) -> Result<StorageItem, String> {
    api::fetch_file_detail(file_id).await
}

/// Delete a file and drop it from the current listing.
///
/// # Errors
///
/// Returns the API error message without touching the store.
pub async fn delete_file(storage: RwSignal<StorageState>, file_id: &str) -> Result<(), String> {
    api::delete_file(file_id).await?;
    storage.update(|s| s.remove_item(file_id));
    Ok(())
}
