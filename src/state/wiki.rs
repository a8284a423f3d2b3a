//! Wiki article store: list and detail records fetched from the API.
//!
//! Independent of the session store; a 401 on any of these calls is
//! handled by the HTTP wrapper's interceptor, not here.

#[cfg(test)]
#[path = "wiki_test.rs"]
mod wiki_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::api;
use crate::net::types::{Article, ArticleDraft};

/// Article list and currently viewed article.
#[derive(Clone, Debug, Default)]
pub struct WikiState {
    pub articles: Vec<Article>,
    pub current: Option<Article>,
    pub loading: bool,
}

impl WikiState {
    /// Replace the article list.
    pub fn set_articles(&mut self, articles: Vec<Article>) {
        self.articles = articles;
    }

    /// Set the article shown in the detail view.
    pub fn set_current(&mut self, article: Article) {
        self.current = Some(article);
    }

    /// Prepend a newly created article to the list.
    pub fn add_article(&mut self, article: Article) {
        self.articles.insert(0, article);
    }

    /// Replace the list entry (and `current`, if it matches) with the
    /// updated record.
    pub fn apply_update(&mut self, updated: &Article) {
        if let Some(entry) = self.articles.iter_mut().find(|a| a.id == updated.id) {
            *entry = updated.clone();
        }
        if self.current.as_ref().is_some_and(|c| c.id == updated.id) {
            self.current = Some(updated.clone());
        }
    }

    /// Remove an article from the list, clearing `current` if it was
    /// the one deleted.
    pub fn remove_article(&mut self, article_id: &str) {
        self.articles.retain(|a| a.id != article_id);
        if self.current.as_ref().is_some_and(|c| c.id == article_id) {
            self.current = None;
        }
    }
}

/// Fetch the article list into the store.
///
/// # Errors
///
/// Returns the API error message; the existing list is left untouched.
pub async fn fetch_articles(wiki: RwSignal<WikiState>) -> Result<(), String> {
    wiki.update(|w| w.loading = true);
    let result = api::fetch_articles().await;
    wiki.update(|w| {
        w.loading = false;
        if let Ok(articles) = &result {
            w.set_articles(articles.clone());
        }
    });
    result.map(|_| ())
}

/// Fetch one article into the detail slot.
///
/// # Errors
///
/// Returns the API error message; `current` is left untouched.
pub async fn fetch_article(wiki: RwSignal<WikiState>, id: &str) -> Result<Article, String> {
    wiki.update(|w| w.loading = true);
    let result = api::fetch_article(id).await;
    wiki.update(|w| {
        w.loading = false;
        if let Ok(article) = &result {
            w.set_current(article.clone());
        }
    });
    result
}

/// Create an article and prepend it to the list.
///
/// # Errors
///
/// Returns the API error message without touching the store.
pub async fn create_article(
    wiki: RwSignal<WikiState>,
    draft: &ArticleDraft,
) -> Result<Article, String> {
    let article = api::create_article(draft).await?;
    wiki.update(|w| w.add_article(article.clone()));
    Ok(article)
}

/// Update an article in place.
///
/// # Errors
///
/// Returns the API error message without touching the store.
pub async fn update_article(
    wiki: RwSignal<WikiState>,
    id: &str,
    draft: &ArticleDraft,
) -> Result<Article, String> {
    let article = api::update_article(id, draft).await?;
    wiki.update(|w| w.apply_update(&article));
    Ok(article)
}

/// Delete an article and drop it from the store.
///
/// # Errors
///
/// Returns the API error message without touching the store.
pub async fn delete_article(wiki: RwSignal<WikiState>, id: &str) -> Result<(), String> {
    api::delete_article(id).await?;
    wiki.update(|w| w.remove_article(id));
    Ok(())
}

/// Fetch a shared article into the detail slot.
///
/// # Errors
///
/// Returns the API error message; `current` is left untouched.
pub async fn fetch_shared_article(
    wiki: RwSignal<WikiState>,
    share_id: &str,
) -> Result<Article, String> {
    wiki.update(|w| w.loading = true);
    let result = api::fetch_shared_article(share_id).await;
    wiki.update(|w| {
        w.loading = false;
        if let Ok(article) = &result {
            w.set_current(article.clone());
        }
    });
    result
}
