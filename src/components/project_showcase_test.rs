use super::*;

#[test]
fn project_ids_are_unique() {
    for (i, a) in PROJECTS.iter().enumerate() {
        for b in &PROJECTS[i + 1..] {
            assert_ne!(a.id, b.id, "duplicate project id {}", a.id);
        }
    }
}

#[test]
fn lookup_finds_every_project() {
    for project in PROJECTS {
        let found = project_by_id(project.id);
        assert_eq!(found.map(|p| p.title), Some(project.title));
    }
}

#[test]
fn lookup_misses_unknown_ids() {
    assert!(project_by_id("not-a-project").is_none());
    assert!(project_by_id("").is_none());
}

#[test]
fn every_project_has_card_and_dialog_content() {
    for project in PROJECTS {
        assert!(!project.title.is_empty());
        assert!(!project.description.is_empty());
        assert!(!project.detailed_description.is_empty());
        assert!(!project.categories.is_empty());
        assert!(!project.tech_stack.is_empty());
        assert!(project.image.starts_with("https://"));
    }
}
