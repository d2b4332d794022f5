use crate::{content::CONTENT, ui::colors::Colors};

use super::*;

fn line_text(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[test]
fn test_categories_in_store_order() {
    let lines = SkillList::new(CONTENT.skills).lines(80, &Colors::default());
    let texts = lines.iter().map(line_text).collect::<Vec<_>>();

    assert_eq!(texts, vec![
        "Frontend",
        " React   Vue   TypeScript   Tailwind ",
        "",
        "Backend",
        " Node.js   Python   PostgreSQL   AWS ",
        "",
        "Tools",
        " Git   Docker   Jest   CI/CD ",
    ]);
}

#[test]
fn test_tags_wrap_in_narrow_panel() {
    let lines = SkillList::new(&CONTENT.skills[..1]).lines(20, &Colors::default());
    let texts = lines.iter().map(line_text).collect::<Vec<_>>();

    assert_eq!(texts[0], "Frontend");
    assert_eq!(texts[1], " React   Vue ");
    assert_eq!(texts[2], " TypeScript ");
    assert_eq!(texts[3], " Tailwind ");
}
