use super::*;

#[test]
fn test_initial_state() {
    let state = State::default();
    assert!(!state.is_dark);
    assert_eq!(state.tab, Tab::Projects);
    assert_eq!(state.theme(), Theme::Light);
    assert_eq!(state.colors, Colors::new(Theme::Light, true));
}

#[test]
fn test_initial_state_without_true_color() {
    let state = State::new(false);
    assert!(!state.true_color_enabled);
    assert_eq!(state.colors, Colors::new(Theme::Light, false));
}

#[test]
fn test_tabs() {
    assert_eq!(Tab::all(), vec![Tab::Projects, Tab::Skills]);
    assert_eq!(Tab::Projects.other(), Tab::Skills);
    assert_eq!(Tab::Skills.other(), Tab::Projects);
    assert_eq!(Tab::Projects.to_string(), "Projects");
    assert_eq!(Tab::Skills.to_string(), "Skills");
}
