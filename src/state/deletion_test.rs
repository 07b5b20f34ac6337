use super::*;

#[test]
fn delete_state_defaults_to_idle() {
    let state = DeleteState::default();
    assert!(!state.is_open());
    assert!(!state.in_flight);
}

#[test]
fn request_opens_dialog_with_label() {
    let mut state = DeleteState::default();
    state.request("7", "Jean Dupont");
    assert_eq!(state.pending, Some(PendingDelete { id: "7".to_owned(), label: "Jean Dupont".to_owned() }));
}

#[test]
fn cancel_clears_pending_without_confirming() {
    let mut state = DeleteState::default();
    state.request("7", "Jean Dupont");
    state.cancel();
    assert_eq!(state, DeleteState::default());
}

#[test]
fn confirm_returns_id_once() {
    let mut state = DeleteState::default();
    state.request("7", "Jean Dupont");
    assert_eq!(state.confirm().as_deref(), Some("7"));
    assert!(state.in_flight);
    assert_eq!(state.confirm(), None);
}

#[test]
fn confirm_without_request_is_noop() {
    let mut state = DeleteState::default();
    assert_eq!(state.confirm(), None);
    assert!(!state.in_flight);
}

#[test]
fn cancel_and_request_are_ignored_while_in_flight() {
    let mut state = DeleteState::default();
    state.request("7", "Jean Dupont");
    let _ = state.confirm();
    state.cancel();
    state.request("8", "Autre");
    assert_eq!(state.pending.as_ref().map(|p| p.id.as_str()), Some("7"));
}

#[test]
fn finish_resets_everything() {
    let mut state = DeleteState::default();
    state.request("7", "Jean Dupont");
    let _ = state.confirm();
    state.finish();
    assert_eq!(state, DeleteState::default());
}
