use super::*;

fn item(id: &str, name: &str) -> StorageItem {
    StorageItem {
        id: id.to_owned(),
        name: name.to_owned(),
        ..StorageItem::default()
    }
}

// =============================================================
// StorageState defaults
// =============================================================

#[test]
fn storage_state_defaults_to_root() {
    let state = StorageState::default();
    assert_eq!(state.current_path, "/");
    assert!(state.items.is_empty());
    assert_eq!(state.breadcrumbs.len(), 1);
}

// =============================================================
// Listing mutations
// =============================================================

#[test]
fn set_listing_updates_path_items_and_crumbs() {
    let mut state = StorageState::default();
    state.set_listing("/docs/images", vec![item("f1", "a.png")]);

    assert_eq!(state.current_path, "/docs/images");
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.breadcrumbs.len(), 3);
}

#[test]
fn remove_item_drops_matching_entry() {
    let mut state = StorageState::default();
    state.set_listing("/", vec![item("f1", "a.png"), item("f2", "b.png")]);

    state.remove_item("f1");
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "f2");
}

// =============================================================
// breadcrumbs_for
// =============================================================

#[test]
fn breadcrumbs_root_is_single_home_crumb() {
    let crumbs = breadcrumbs_for("/");
    assert_eq!(crumbs.len(), 1);
    assert_eq!(crumbs[0].name, "Home");
    assert_eq!(crumbs[0].path, "/");
}

#[test]
fn breadcrumbs_accumulate_paths() {
    let crumbs = breadcrumbs_for("/docs/images/2024");
    let paths: Vec<&str> = crumbs.iter().map(|c| c.path.as_str()).collect();
    assert_eq!(paths, ["/", "/docs", "/docs/images", "/docs/images/2024"]);
}

#[test]
fn breadcrumbs_skip_empty_segments() {
    let crumbs = breadcrumbs_for("//docs//");
    assert_eq!(crumbs.len(), 2);
    assert_eq!(crumbs[1].name, "docs");
}

// =============================================================
// validate_upload
// =============================================================

#[test]
fn validate_upload_accepts_small_png() {
    assert!(validate_upload("a.png", 1024.0, "image/png").is_ok());
}

#[test]
fn validate_upload_rejects_oversize_file() {
    let result = validate_upload("big.png", 11.0 * 1024.0 * 1024.0, "image/png");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("upload limit"));
}

#[test]
fn validate_upload_rejects_disallowed_type() {
    let result = validate_upload("app.exe", 10.0, "application/x-msdownload");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("not allowed"));
}

#[test]
fn validate_upload_accepts_size_at_limit() {
    assert!(validate_upload("edge.pdf", 10.0 * 1024.0 * 1024.0, "application/pdf").is_ok());
}
