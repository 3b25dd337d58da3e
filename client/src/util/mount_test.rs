use super::*;

#[test]
fn new_guard_is_mounted() {
    assert!(MountGuard::new().is_mounted());
}

#[test]
fn release_is_visible_through_clones() {
    let guard = MountGuard::new();
    let task_copy = guard.clone();
    guard.release();
    assert!(!task_copy.is_mounted());
}

#[test]
fn release_is_idempotent() {
    let guard = MountGuard::default();
    guard.release();
    guard.release();
    assert!(!guard.is_mounted());
}
