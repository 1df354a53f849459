use super::*;

#[test]
fn experience_ids_are_unique() {
    for (i, a) in EXPERIENCES.iter().enumerate() {
        for b in &EXPERIENCES[i + 1..] {
            assert_ne!(a.id, b.id, "duplicate experience id {}", a.id);
        }
    }
}

#[test]
fn every_experience_is_fully_described() {
    for exp in EXPERIENCES {
        assert!(!exp.role.is_empty());
        assert!(!exp.company.is_empty());
        assert!(!exp.duration.is_empty());
        assert!(!exp.description.is_empty());
        assert!(!exp.responsibilities.is_empty());
        assert!(!exp.achievements.is_empty());
        assert!(!exp.skills.is_empty());
    }
}

#[test]
fn newest_role_comes_first() {
    assert!(EXPERIENCES[0].duration.ends_with("Present"));
}
