use super::*;

#[test]
fn only_loading_state_defers_the_load_handler() {
    assert!(is_loading("loading"));
    assert!(!is_loading("interactive"));
    assert!(!is_loading("complete"));
}
