use super::*;

#[test]
fn toast_state_default_empty() {
    assert!(ToastState::default().toasts.is_empty());
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "A", "");
    let b = state.push(ToastKind::Success, "B", "second");
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[1].title, "B");
    assert_eq!(state.toasts[1].description, "second");
    assert_eq!(state.toasts[1].kind, ToastKind::Success);
}

#[test]
fn push_drops_oldest_past_limit() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Info, "0", "");
    for i in 1..=TOAST_LIMIT {
        state.push(ToastKind::Info, i.to_string(), "");
    }
    assert_eq!(state.toasts.len(), TOAST_LIMIT);
    assert!(state.toasts.iter().all(|t| t.id != first));
    assert_eq!(state.toasts.last().map(|t| t.title.as_str()), Some("3"));
}

#[test]
fn dismiss_removes_only_matching() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "A", "");
    let b = state.push(ToastKind::Info, "B", "");
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
}

#[test]
fn dismiss_unknown_is_noop() {
    let mut state = ToastState::default();
    state.push(ToastKind::Info, "A", "");
    let before = state.clone();
    state.dismiss(999);
    assert_eq!(state, before);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "A", "");
    state.dismiss(a);
    let b = state.push(ToastKind::Info, "B", "");
    assert_ne!(a, b);
}

#[test]
fn added_to_cart_description_single_item() {
    assert_eq!(added_to_cart_description("Sony Headphones", 1), "Sony Headphones added to your cart.");
}

#[test]
fn added_to_cart_description_shows_multiplier() {
    assert_eq!(added_to_cart_description("Air Fryer", 3), "3 x Air Fryer added to your cart.");
}
