use super::*;

#[test]
fn default_displays_100_percent() {
    assert_eq!(A11yState::default().display(), "100%");
}

#[test]
fn display_tracks_the_scale() {
    let mut state = A11yState::default();
    state.font_scale.increase();
    assert_eq!(state.display(), "110%");
    state.font_scale.decrease();
    state.font_scale.decrease();
    assert_eq!(state.display(), "90%");
}
