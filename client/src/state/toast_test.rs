use super::*;

// =============================================================
// ToastState
// =============================================================

#[test]
fn toast_state_default_is_empty() {
    let state = ToastState::default();
    assert!(state.toasts.is_empty());
    assert!(state.visible().is_empty());
}

#[test]
fn push_assigns_unique_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "uno");
    let b = state.push(ToastKind::Error, "dos");
    state.dismiss(a);
    let c = state.push(ToastKind::Success, "tres");
    assert!(a < b && b < c);
}

#[test]
fn push_keeps_kind_and_message() {
    let mut state = ToastState::default();
    let id = state.push(ToastKind::Error, "Ocurrió un error");
    assert_eq!(
        state.toasts,
        vec![Toast { id, kind: ToastKind::Error, message: "Ocurrió un error".to_owned() }]
    );
}

#[test]
fn dismiss_removes_only_target() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "a");
    let b = state.push(ToastKind::Success, "b");
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.push(ToastKind::Success, "a");
    state.dismiss(99);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn visible_caps_at_most_recent() {
    let mut state = ToastState::default();
    for i in 0..5 {
        state.push(ToastKind::Success, format!("t{i}"));
    }
    let messages: Vec<_> = state.visible().iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, ["t2", "t3", "t4"]);
}

// =============================================================
// Notify default methods
// =============================================================

#[derive(Default)]
struct Recorder(std::cell::RefCell<Vec<(ToastKind, String)>>);

impl Notify for Recorder {
    fn notify(&self, kind: ToastKind, message: &str) {
        self.0.borrow_mut().push((kind, message.to_owned()));
    }
}

#[test]
fn success_and_error_route_through_notify() {
    let recorder = Recorder::default();
    recorder.success("ok");
    recorder.error("mal");
    assert_eq!(
        *recorder.0.borrow(),
        vec![(ToastKind::Success, "ok".to_owned()), (ToastKind::Error, "mal".to_owned())]
    );
}
