use ratatui::{Terminal, backend::TestBackend, layout::Rect};

use crate::{store::state::State, ui::plain::buffer_lines};

use super::*;

fn render(active: Tab, state: &State) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(40, TABS_HEIGHT)).unwrap();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                state,
            };

            TabSwitcher::new(active).render(frame.area(), frame.buffer_mut(), &ctx);
        })
        .unwrap();

    terminal
}

#[test]
fn test_button_areas() {
    let areas = TabSwitcher::button_areas(Rect::new(0, 0, 40, TABS_HEIGHT));
    assert_eq!(areas.len(), 2);
    assert_eq!(areas[0].0, Tab::Projects);
    assert_eq!(areas[1].0, Tab::Skills);
    assert_eq!(areas[0].1.width, 12);
    assert_eq!(areas[1].1.width, 10);
    // spacing between the buttons
    assert_eq!(areas[1].1.x, areas[0].1.x + 12 + 2);
    // centered
    assert_eq!(areas[0].1.x, 8);
}

#[test]
fn renders_tab_labels() {
    let state = State::default();
    let terminal = render(Tab::Projects, &state);
    let lines = buffer_lines(terminal.backend().buffer());
    assert!(lines[1].contains("Projects"));
    assert!(lines[1].contains("Skills"));
    assert!(lines[1].find("Projects") < lines[1].find("Skills"));
}

#[test]
fn highlights_active_tab() {
    let state = State::default();
    let areas = TabSwitcher::button_areas(Rect::new(0, 0, 40, TABS_HEIGHT));
    let (_, projects) = areas[0];
    let (_, skills) = areas[1];

    let terminal = render(Tab::Skills, &state);
    let buf = terminal.backend().buffer();

    let skills_cell = buf.cell((skills.x + 1, 1)).unwrap();
    let projects_cell = buf.cell((projects.x + 1, 1)).unwrap();
    assert_eq!(skills_cell.bg, state.colors.accent);
    assert_eq!(projects_cell.bg, state.colors.inactive_tab_bg);
}
