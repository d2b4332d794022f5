use super::*;

#[test]
fn test_project_order_is_preserved() {
    let titles = CONTENT.projects.iter().map(|p| p.title).collect::<Vec<_>>();
    assert_eq!(titles, vec!["E-commerce Platform", "Analytics Dashboard"]);
}

#[test]
fn test_project_skill_order_is_preserved() {
    assert_eq!(
        CONTENT.projects[0].skills,
        &["React", "Node.js", "PostgreSQL"]
    );
    assert_eq!(CONTENT.projects[1].skills, &["Vue.js", "Python", "AWS"]);
}

#[test]
fn test_skill_categories() {
    let categories = CONTENT
        .skills
        .iter()
        .map(|c| c.category)
        .collect::<Vec<_>>();
    assert_eq!(categories, vec!["Frontend", "Backend", "Tools"]);
    assert_eq!(
        CONTENT.skills[2].items,
        &["Git", "Docker", "Jest", "CI/CD"]
    );
}

#[test]
fn test_profile_and_contact() {
    assert_eq!(CONTENT.profile.name, "John Doe");
    assert_eq!(CONTENT.profile.title, "Full Stack Developer");
    assert_eq!(
        CONTENT.profile.tagline,
        "Building elegant solutions to complex problems. Focused on web technologies and user experience."
    );
    assert_eq!(CONTENT.contact.email, "mailto:john@example.com");
    assert_eq!(CONTENT.contact.github, "https://github.com");
    assert_eq!(CONTENT.contact.linkedin, "https://linkedin.com");
}
