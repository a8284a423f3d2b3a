//! Article summary card for the home page list.

use leptos::prelude::*;

use crate::net::types::Article;

/// One article in the home page grid, linking to its wiki view.
#[component]
pub fn ArticleCard(article: Article) -> impl IntoView {
    let href = format!("/wiki/{}/{}", article.username, article.slug);
    view! {
        <a class="article-card" href=href>
            <h3 class="article-card__title">{article.title}</h3>
            <p class="article-card__author">{article.username}</p>
        </a>
    }
}
