use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "Sent", "Thanks");
    let b = state.push(ToastKind::Error, "Failed", "Try again");
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].title, "Sent");
    assert_eq!(state.toasts[1].kind, ToastKind::Error);
}

#[test]
fn dismiss_removes_only_that_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "A", "");
    let b = state.push(ToastKind::Success, "B", "");
    assert!(state.dismiss(a));
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
}

#[test]
fn dismiss_twice_is_a_no_op() {
    let mut state = ToastState::default();
    let id = state.push(ToastKind::Success, "A", "");
    assert!(state.dismiss(id));
    assert!(!state.dismiss(id));
    assert!(state.is_empty());
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "A", "");
    state.dismiss(a);
    let b = state.push(ToastKind::Success, "B", "");
    assert_ne!(a, b);
}

#[test]
fn kind_classes() {
    assert_eq!(ToastKind::Success.class(), "toast toast-success");
    assert_eq!(ToastKind::Error.class(), "toast toast-error");
}
