use itertools::Itertools;
use ratatui::{buffer::Buffer, layout::Rect};

use crate::{
    config::MIN_PRINT_WIDTH,
    content::CONTENT,
    store::{
        Dispatcher, StateGetter, Store,
        action::Action,
        reducer::StoreReducer,
        state::{State, Tab},
    },
    ui::{
        app::App,
        components::theme_toggle::{MOON, SUN},
    },
};

use super::*;

#[test]
fn test_buffer_lines() {
    let mut buf = Buffer::empty(Rect::new(0, 0, 5, 2));
    buf.set_string(0, 0, "ab", ratatui::style::Style::new());
    buf.set_string(1, 1, "xyz", ratatui::style::Style::new());

    assert_eq!(buffer_lines(&buf), vec!["ab", " xyz"]);
}

#[test]
fn test_render_page_fits_everything() {
    let app = App::new();
    let state = State::default();
    let lines = render_page(&app, &state, 100).unwrap();

    assert_eq!(lines.len(), app.natural_height(&state, 100) as usize);
    assert!(lines.iter().any(|l| l.contains("Analytics Dashboard")));
    assert!(lines.iter().any(|l| l.contains("https://linkedin.com")));
    assert!(lines.last().unwrap().contains("(q) quit"));
}

#[test]
fn test_render_page_skills() {
    let app = App::new();
    let state = State {
        tab: Tab::Skills,
        ..State::default()
    };
    let lines = render_page(&app, &state, 80).unwrap();

    assert!(lines.iter().any(|l| l.contains("CI/CD")));
    assert!(!lines.iter().any(|l| l.contains("E-commerce Platform")));
}

#[test]
fn test_render_page_is_deterministic() {
    let app = App::new();
    let state = State::default();
    assert_eq!(
        render_page(&app, &state, 100).unwrap(),
        render_page(&app, &state, 100).unwrap()
    );
}

/// Page text with card gutters removed and wrapped rows rejoined.
fn page_text(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| line.trim().trim_start_matches('▌').trim())
        .filter(|line| !line.is_empty())
        .join(" ")
}

fn assert_page_complete(lines: &[String], state: &State) {
    let text = page_text(lines);
    let profile = &CONTENT.profile;
    let contact = &CONTENT.contact;

    for expected in [profile.name, profile.title, profile.tagline] {
        assert!(text.contains(expected), "missing {expected:?}");
    }
    for expected in [contact.email, contact.github, contact.linkedin] {
        assert!(text.contains(expected), "missing {expected:?}");
    }
    assert!(text.contains("(j/k) scroll"));
    assert!(text.contains("(q) quit"));
    assert!(text.contains(if state.is_dark { SUN } else { MOON }));

    match state.tab {
        Tab::Projects => {
            for project in CONTENT.projects {
                assert!(text.contains(project.title), "missing {}", project.title);
                assert!(text.contains(project.description), "missing {}", project.description);
                assert!(text.contains(project.link));
                for skill in project.skills {
                    assert!(text.contains(skill), "missing {skill}");
                }
            }
            assert!(!text.contains("Frontend"));
        }
        Tab::Skills => {
            for category in CONTENT.skills {
                assert!(text.contains(category.category));
                for item in category.items {
                    assert!(text.contains(item), "missing {item}");
                }
            }
            assert!(!text.contains(CONTENT.projects[0].title));
        }
    }
}

#[test]
fn test_render_page_at_min_width_shows_everything() {
    let app = App::new();
    let store = Store::new(State::default(), StoreReducer::boxed());

    for _ in 0..2 {
        for tab in Tab::all() {
            store.dispatch(Action::SelectTab(tab));
            let state = store.get_state();
            let lines = render_page(&app, &state, MIN_PRINT_WIDTH).unwrap();

            assert_eq!(lines.len(), app.natural_height(&state, MIN_PRINT_WIDTH) as usize);
            assert!(lines.iter().all(|line| line.chars().count() <= MIN_PRINT_WIDTH as usize));
            assert_page_complete(&lines, &state);
        }
        store.dispatch(Action::ToggleTheme);
    }
}

#[test]
fn test_render_page_at_width_50_shows_everything() {
    let app = App::new();
    let state = State::default();
    let lines = render_page(&app, &state, 50).unwrap();

    assert_page_complete(&lines, &state);
}

#[test]
fn test_narrow_contact_links_are_stacked() {
    let app = App::new();
    let state = State::default();
    let lines = render_page(&app, &state, MIN_PRINT_WIDTH).unwrap();

    let email = lines.iter().position(|l| l.contains(CONTENT.contact.email)).unwrap();
    let github = lines.iter().position(|l| l.contains("GitHub https://github.com")).unwrap();
    let linkedin = lines.iter().position(|l| l.contains(CONTENT.contact.linkedin)).unwrap();

    assert_eq!(github, email + 1);
    assert_eq!(linkedin, github + 1);
}

#[test]
fn test_narrow_project_tags_keep_declared_order() {
    let app = App::new();
    let state = State::default();
    let lines = render_page(&app, &state, MIN_PRINT_WIDTH).unwrap();

    assert!(lines.iter().any(|l| l.contains(" React   Node.js   PostgreSQL ")));
    assert!(lines.iter().any(|l| l.contains(" Vue.js   Python   AWS ")));
}
