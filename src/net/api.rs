//! REST API helpers, one function per consumed endpoint.
//!
//! Client-side (hydrate): real HTTP calls through `net::http`, which
//! applies credentials, the timeout, and the 401 interceptor.
//! Server-side (SSR): stubs returning errors, since the API is only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every function returns `Result<T, String>`; the `Err` string is the
//! server's `message`/`error` body field when present, or a fallback
//! suitable for inline display. Nothing here panics.

#![allow(clippy::unused_async)]

use super::types::{
    Article, ArticleDraft, ExchangeResponse, StatusResponse, StorageItem, StorageListResponse,
};

#[cfg(feature = "hydrate")]
use super::{endpoints, http, types::ArticlesResponse, types::ErrorBody};
#[cfg(feature = "hydrate")]
use crate::config;

#[cfg(feature = "hydrate")]
async fn failure_message(resp: &gloo_net::http::Response, fallback: &str) -> String {
    match resp.json::<ErrorBody>().await {
        Ok(body) => body.into_message().unwrap_or_else(|| fallback.to_owned()),
        Err(_) => fallback.to_owned(),
    }
}

/// Exchange an authorization code for a cookie session via
/// `POST /api/auth/token`.
///
/// # Errors
///
/// Returns the server's error message, or a generic one, when the
/// exchange is rejected or the request fails. Codes are single-use
/// server-side; callers must not retry with a consumed code.
pub async fn exchange_code(code: &str) -> Result<ExchangeResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct ExchangeRequest<'a> {
            code: &'a str,
        }
        let resp =
            http::post_json(config::endpoints::AUTH_TOKEN_EXCHANGE, &ExchangeRequest { code })
                .await?;
        if !resp.ok() {
            return Err(failure_message(&resp, "authentication failed").await);
        }
        resp.json::<ExchangeResponse>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = code;
        Err("not available on server".to_owned())
    }
}

/// Fetch the current session state from `GET /api/auth/status`.
///
/// # Errors
///
/// Returns an error on transport failure or a non-2xx status. A 2xx
/// response with `authenticated: false` is NOT an error; the session
/// store decides what to do with it.
pub async fn fetch_status() -> Result<StatusResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::get(config::endpoints::AUTH_STATUS).await?;
        if !resp.ok() {
            return Err(failure_message(&resp, "session status check failed").await);
        }
        resp.json::<StatusResponse>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// End the server-side session via `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns an error when the request fails; the response body is
/// ignored either way.
pub async fn logout() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::post(config::endpoints::AUTH_LOGOUT).await?;
        if !resp.ok() {
            return Err(failure_message(&resp, "logout failed").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the article list from `GET /api/wiki/articles`.
///
/// # Errors
///
/// Returns the server's error message or a fallback on failure.
pub async fn fetch_articles() -> Result<Vec<Article>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::get(config::endpoints::WIKI_ARTICLES).await?;
        if !resp.ok() {
            return Err(failure_message(&resp, "failed to fetch articles").await);
        }
        let body: ArticlesResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.articles)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch one article from `GET /api/wiki/articles/:id`.
///
/// # Errors
///
/// Returns "article not found" (or the server's message) on failure.
pub async fn fetch_article(id: &str) -> Result<Article, String> {
    #[cfg(feature = "hydrate")]
    {
        let path = endpoints::resolve(config::endpoints::WIKI_ARTICLE_DETAIL, &[("id", id)]);
        let resp = http::get(&path).await?;
        if !resp.ok() {
            return Err(failure_message(&resp, "article not found").await);
        }
        resp.json::<Article>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

/// Create an article via `POST /api/wiki/articles`.
///
/// # Errors
///
/// Returns the server's validation message or a fallback on failure.
pub async fn create_article(draft: &ArticleDraft) -> Result<Article, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::post_json(config::endpoints::WIKI_ARTICLES, draft).await?;
        if !resp.ok() {
            return Err(failure_message(&resp, "failed to create article").await);
        }
        resp.json::<Article>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err("not available on server".to_owned())
    }
}

/// Update an article via `PUT /api/wiki/articles/:id`.
///
/// # Errors
///
/// Returns the server's validation message or a fallback on failure.
pub async fn update_article(id: &str, draft: &ArticleDraft) -> Result<Article, String> {
    #[cfg(feature = "hydrate")]
    {
        let path = endpoints::resolve(config::endpoints::WIKI_ARTICLE_DETAIL, &[("id", id)]);
        let resp = http::put_json(&path, draft).await?;
        if !resp.ok() {
            return Err(failure_message(&resp, "failed to update article").await);
        }
        resp.json::<Article>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, draft);
        Err("not available on server".to_owned())
    }
}

/// Delete an article via `DELETE /api/wiki/articles/:id`.
///
/// # Errors
///
/// Returns the server's message or a fallback on failure.
pub async fn delete_article(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let path = endpoints::resolve(config::endpoints::WIKI_ARTICLE_DETAIL, &[("id", id)]);
        let resp = http::delete(&path).await?;
        if !resp.ok() {
            return Err(failure_message(&resp, "failed to delete article").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

/// Fetch a shared article from `GET /api/share/:shareId`.
///
/// # Errors
///
/// Returns "shared article not found" (or the server's message) on failure.
pub async fn fetch_shared_article(share_id: &str) -> Result<Article, String> {
    #[cfg(feature = "hydrate")]
    {
        let path = endpoints::resolve(config::endpoints::SHARE_ARTICLE, &[("shareId", share_id)]);
        let resp = http::get(&path).await?;
        if !resp.ok() {
            return Err(failure_message(&resp, "shared article not found").await);
        }
        resp.json::<Article>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = share_id;
        Err("not available on server".to_owned())
    }
}

/// List storage items under `path` from `GET /api/storage/upload?path=...`.
///
/// The path value is URL-encoded here since it travels in a query
/// parameter; the template resolver never encodes.
///
/// # Errors
///
/// Returns the server's message or a fallback on failure.
pub async fn fetch_storage_items(path: &str) -> Result<StorageListResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let encoded = String::from(js_sys::encode_uri_component(path));
        let url = format!("{}?path={encoded}", config::endpoints::STORAGE_UPLOAD);
        let resp = http::get(&url).await?;
        if !resp.ok() {
            return Err(failure_message(&resp, "failed to fetch storage items").await);
        }
        resp.json::<StorageListResponse>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err("not available on server".to_owned())
    }
}

/// Upload one file via multipart `POST /api/storage/upload`.
///
/// # Errors
///
/// Returns the server's message or a fallback on failure.
#[cfg(feature = "hydrate")]
pub async fn upload_file(file: &web_sys::File, path: &str) -> Result<StorageItem, String> {
    let form = web_sys::FormData::new().map_err(|_| "failed to build form data".to_owned())?;
    form.append_with_blob("file", file)
        .map_err(|_| "failed to build form data".to_owned())?;
    form.append_with_str("path", path)
        .map_err(|_| "failed to build form data".to_owned())?;

    let resp = http::post_form(config::endpoints::STORAGE_UPLOAD, &form).await?;
    if !resp.ok() {
        return Err(failure_message(&resp, "file upload failed").await);
    }
    resp.json::<StorageItem>().await.map_err(|e| e.to_string())
}

/// Fetch file metadata from `GET /api/storage/files/:fileId`.
///
/// # Errors
///
/// Returns the server's message or a fallback on failure.
pub async fn fetch_file_detail(file_id: &str) -> Result<StorageItem, String> {
    #[cfg(feature = "hydrate")]
    {
        let path =
            endpoints::resolve(config::endpoints::STORAGE_FILE_DETAIL, &[("fileId", file_id)]);
        let resp = http::get(&path).await?;
        if !resp.ok() {
            return Err(failure_message(&resp, "failed to fetch file details").await);
        }
        resp.json::<StorageItem>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = file_id;
        Err("not available on server".to_owned())
    }
}

/// Delete a file via `DELETE /api/storage/files/:fileId`.
///
/// # Errors
///
/// Returns the server's message or a fallback on failure.
pub async fn delete_file(file_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let path =
            endpoints::resolve(config::endpoints::STORAGE_FILE_DETAIL, &[("fileId", file_id)]);
        let resp = http::delete(&path).await?;
        if !resp.ok() {
            return Err(failure_message(&resp, "failed to delete file").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = file_id;
        Err("not available on server".to_owned())
    }
}
