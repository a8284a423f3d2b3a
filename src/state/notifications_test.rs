use super::*;

// =============================================================
// NotificationsState defaults
// =============================================================

#[test]
fn notifications_default_is_empty() {
    let state = NotificationsState::default();
    assert!(state.toasts.is_empty());
}

// =============================================================
// push / dismiss
// =============================================================

#[test]
fn push_appends_and_returns_id() {
    let mut state = NotificationsState::default();
    let id = state.push(ToastKind::Success, "saved".to_owned());
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, id);
    assert_eq!(state.toasts[0].message, "saved");
}

#[test]
fn push_assigns_monotonic_ids() {
    let mut state = NotificationsState::default();
    let a = state.push(ToastKind::Info, "a".to_owned());
    let b = state.push(ToastKind::Info, "b".to_owned());
    assert!(b > a);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = NotificationsState::default();
    let a = state.push(ToastKind::Error, "a".to_owned());
    let b = state.push(ToastKind::Error, "b".to_owned());

    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = NotificationsState::default();
    state.push(ToastKind::Warning, "a".to_owned());
    state.dismiss(99);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = NotificationsState::default();
    let a = state.push(ToastKind::Info, "a".to_owned());
    state.dismiss(a);
    let b = state.push(ToastKind::Info, "b".to_owned());
    assert_ne!(a, b);
}

// =============================================================
// ToastKind classes
// =============================================================

#[test]
fn toast_kind_css_classes_are_distinct() {
    let classes = [
        ToastKind::Success.css_class(),
        ToastKind::Error.css_class(),
        ToastKind::Info.css_class(),
        ToastKind::Warning.css_class(),
    ];
    for (i, a) in classes.iter().enumerate() {
        for (j, b) in classes.iter().enumerate() {
            if i != j {
                assert_ne!(a, b);
            }
        }
    }
}
