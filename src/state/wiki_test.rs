use super::*;

fn article(id: &str, title: &str) -> Article {
    Article {
        id: id.to_owned(),
        title: title.to_owned(),
        ..Article::default()
    }
}

// =============================================================
// WikiState defaults
// =============================================================

#[test]
fn wiki_state_default_is_empty() {
    let state = WikiState::default();
    assert!(state.articles.is_empty());
    assert!(state.current.is_none());
    assert!(!state.loading);
}

// =============================================================
// List mutations
// =============================================================

#[test]
fn set_articles_replaces_list() {
    let mut state = WikiState::default();
    state.set_articles(vec![article("1", "old")]);
    state.set_articles(vec![article("2", "new")]);
    assert_eq!(state.articles.len(), 1);
    assert_eq!(state.articles[0].id, "2");
}

#[test]
fn add_article_prepends() {
    let mut state = WikiState::default();
    state.set_articles(vec![article("1", "first")]);
    state.add_article(article("2", "second"));
    assert_eq!(state.articles[0].id, "2");
    assert_eq!(state.articles[1].id, "1");
}

#[test]
fn apply_update_replaces_matching_entry() {
    let mut state = WikiState::default();
    state.set_articles(vec![article("1", "a"), article("2", "b")]);

    state.apply_update(&article("2", "b updated"));
    assert_eq!(state.articles[1].title, "b updated");
    assert_eq!(state.articles[0].title, "a");
}

#[test]
fn apply_update_refreshes_current_when_same_article() {
    let mut state = WikiState::default();
    state.set_articles(vec![article("1", "a")]);
    state.set_current(article("1", "a"));

    state.apply_update(&article("1", "a updated"));
    assert_eq!(state.current.as_ref().map(|c| c.title.as_str()), Some("a updated"));
}

#[test]
fn apply_update_leaves_unrelated_current_alone() {
    let mut state = WikiState::default();
    state.set_current(article("9", "other"));

    state.apply_update(&article("1", "a updated"));
    assert_eq!(state.current.as_ref().map(|c| c.id.as_str()), Some("9"));
}

#[test]
fn remove_article_drops_entry() {
    let mut state = WikiState::default();
    state.set_articles(vec![article("1", "a"), article("2", "b")]);

    state.remove_article("1");
    assert_eq!(state.articles.len(), 1);
    assert_eq!(state.articles[0].id, "2");
}

#[test]
fn remove_article_clears_matching_current() {
    let mut state = WikiState::default();
    state.set_articles(vec![article("1", "a")]);
    state.set_current(article("1", "a"));

    state.remove_article("1");
    assert!(state.current.is_none());
}

#[test]
fn remove_article_keeps_unrelated_current() {
    let mut state = WikiState::default();
    state.set_articles(vec![article("1", "a")]);
    state.set_current(article("2", "b"));

    state.remove_article("1");
    assert!(state.current.is_some());
}
