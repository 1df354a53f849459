use super::*;

#[test]
fn monogram_takes_leading_letters() {
    assert_eq!(monogram("Casey Morgan"), "CM");
    assert_eq!(monogram("Ada"), "A");
}

#[test]
fn monogram_of_empty_name_is_empty() {
    assert_eq!(monogram(""), "");
    assert_eq!(monogram("   "), "");
}

#[test]
fn profile_links_are_absolute() {
    assert!(PROFILE.github_url.starts_with("https://"));
    assert!(PROFILE.linkedin_url.starts_with("https://"));
    assert!(PROFILE.email.contains('@'));
}

#[test]
fn asset_paths_are_site_relative() {
    assert!(PROFILE.avatar_url.starts_with('/'));
    assert!(PROFILE.resume_url.starts_with('/'));
}
