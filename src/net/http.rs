//! The single HTTP wrapper around browser `fetch`.
//!
//! Every request goes through here so three policies apply uniformly:
//! cookies are always included (the session is cookie-backed, not a
//! bearer token), a fixed timeout bounds each request, and any response
//! with status 401 fires the installed unauthorized hook. The hook is a
//! deliberate cross-cut: a 401 from *any* API call clears the session
//! and forces navigation to the login route.
//!
//! Browser-only; SSR builds never issue requests (`net::api` stubs them).

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::time::Duration;

#[cfg(feature = "hydrate")]
use gloo_net::http::{Request, RequestBuilder, Response};

#[cfg(feature = "hydrate")]
use crate::config;
#[cfg(feature = "hydrate")]
use crate::net::endpoints;

#[cfg(feature = "hydrate")]
thread_local! {
    // One hook, one client instance, one thread (WASM event loop).
    static UNAUTHORIZED_HOOK: RefCell<Option<Box<dyn Fn()>>> = const { RefCell::new(None) };
}

/// Install the side effect run whenever any response comes back 401.
///
/// Called once at application start; later installs replace the hook.
pub fn install_unauthorized_hook(hook: impl Fn() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        UNAUTHORIZED_HOOK.with(|cell| {
            *cell.borrow_mut() = Some(Box::new(hook));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = hook;
    }
}

#[cfg(feature = "hydrate")]
fn fire_unauthorized_hook() {
    UNAUTHORIZED_HOOK.with(|cell| {
        if let Some(hook) = cell.borrow().as_ref() {
            hook();
        }
    });
}

#[cfg(feature = "hydrate")]
fn builder(builder: RequestBuilder) -> RequestBuilder {
    builder.credentials(web_sys::RequestCredentials::Include)
}

/// Send a built request with the configured timeout applied.
#[cfg(feature = "hydrate")]
async fn send_with_timeout(request: Request) -> Result<Response, String> {
    use futures::FutureExt;

    let send = request.send().fuse();
    let timeout =
        gloo_timers::future::sleep(Duration::from_millis(u64::from(config::REQUEST_TIMEOUT_MS)))
            .fuse();
    futures::pin_mut!(send, timeout);

    futures::select! {
        resp = send => resp.map_err(|e| e.to_string()),
        () = timeout => Err(format!(
            "request timed out after {}ms",
            config::REQUEST_TIMEOUT_MS
        )),
    }
}

/// Send and run the 401 interceptor on the response.
#[cfg(feature = "hydrate")]
async fn dispatch(request: Request) -> Result<Response, String> {
    let resp = send_with_timeout(request).await?;
    if resp.status() == 401 {
        leptos::logging::warn!("unauthorized response from {}, forcing logout", resp.url());
        fire_unauthorized_hook();
    }
    Ok(resp)
}

/// `GET` the given endpoint path.
#[cfg(feature = "hydrate")]
pub async fn get(path: &str) -> Result<Response, String> {
    let req = builder(Request::get(&endpoints::absolute(path)))
        .build()
        .map_err(|e| e.to_string())?;
    dispatch(req).await
}

/// `POST` with no body.
#[cfg(feature = "hydrate")]
pub async fn post(path: &str) -> Result<Response, String> {
    let req = builder(Request::post(&endpoints::absolute(path)))
        .build()
        .map_err(|e| e.to_string())?;
    dispatch(req).await
}

/// `POST` a JSON body.
#[cfg(feature = "hydrate")]
pub async fn post_json<T: serde::Serialize>(path: &str, body: &T) -> Result<Response, String> {
    let req = builder(Request::post(&endpoints::absolute(path)))
        .json(body)
        .map_err(|e| e.to_string())?;
    dispatch(req).await
}

/// `PUT` a JSON body.
#[cfg(feature = "hydrate")]
pub async fn put_json<T: serde::Serialize>(path: &str, body: &T) -> Result<Response, String> {
    let req = builder(Request::put(&endpoints::absolute(path)))
        .json(body)
        .map_err(|e| e.to_string())?;
    dispatch(req).await
}

/// `DELETE` the given endpoint path.
#[cfg(feature = "hydrate")]
pub async fn delete(path: &str) -> Result<Response, String> {
    let req = builder(Request::delete(&endpoints::absolute(path)))
        .build()
        .map_err(|e| e.to_string())?;
    dispatch(req).await
}

/// `POST` a multipart form body.
#[cfg(feature = "hydrate")]
pub async fn post_form(path: &str, form: &web_sys::FormData) -> Result<Response, String> {
    let req = builder(Request::post(&endpoints::absolute(path)))
        .body(form.clone())
        .map_err(|e| e.to_string())?;
    dispatch(req).await
}
