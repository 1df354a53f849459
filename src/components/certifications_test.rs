use super::*;

#[test]
fn initials_take_the_first_two_characters() {
    assert_eq!(provider_initials("HashiCorp"), "Ha");
    assert_eq!(provider_initials("X"), "X");
    assert_eq!(provider_initials(""), "");
}

#[test]
fn every_certification_links_out() {
    for cert in CERTIFICATIONS {
        assert!(cert.url.starts_with("https://"), "{} has no link", cert.title);
        assert!(!cert.provider.is_empty());
        assert!(!cert.date.is_empty());
    }
}
