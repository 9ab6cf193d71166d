use super::*;

// =============================================================
// Queue behavior
// =============================================================

#[test]
fn pushes_assign_unique_ids() {
    let mut state = ToastsState::default();
    state.success("one");
    state.error("two");
    assert_eq!(state.toasts.len(), 2);
    assert_ne!(state.toasts[0].id, state.toasts[1].id);
}

#[test]
fn levels_are_recorded() {
    let mut state = ToastsState::default();
    state.success("s");
    state.error("e");
    state.info("i");
    let levels: Vec<ToastLevel> = state.toasts.iter().map(|t| t.level).collect();
    assert_eq!(levels, vec![ToastLevel::Success, ToastLevel::Error, ToastLevel::Info]);
}

#[test]
fn queue_drops_oldest_past_the_cap() {
    let mut state = ToastsState::default();
    for i in 0..TOAST_CAP + 3 {
        state.info(format!("toast {i}"));
    }
    assert_eq!(state.toasts.len(), TOAST_CAP);
    assert_eq!(state.toasts[0].message, "toast 3");
}

#[test]
fn dismiss_removes_only_the_named_toast() {
    let mut state = ToastsState::default();
    state.success("keep");
    state.error("drop");
    let drop_id = state.toasts[1].id;
    state.dismiss(drop_id);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].message, "keep");
}

#[test]
fn dismissing_unknown_id_is_harmless() {
    let mut state = ToastsState::default();
    state.success("keep");
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}
