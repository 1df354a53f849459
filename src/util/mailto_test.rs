use super::*;

#[test]
fn link_targets_the_given_address() {
    let href = build_contact_mailto("hello@example.dev", "Ada", "ada@example.com", "Hi");
    assert!(href.starts_with("mailto:hello@example.dev?subject="));
}

#[test]
fn subject_names_the_sender() {
    let href = build_contact_mailto("hello@example.dev", "Ada Lovelace", "a@b.c", "Hi");
    assert!(href.contains("subject=Portfolio%20Contact%20from%20Ada%20Lovelace"));
}

#[test]
fn body_carries_message_then_reply_address() {
    let href = build_contact_mailto("hello@example.dev", "Ada", "ada@example.com", "Nice site");
    assert!(href.ends_with("&body=Nice%20site%0A%0AFrom%3A%20ada%40example.com"));
}

#[test]
fn multiline_messages_encode_each_newline() {
    let href = build_contact_mailto("hello@example.dev", "Ada", "a@b.c", "line one\nline two");
    assert!(href.contains("line%20one%0Aline%20two"));
}

#[test]
fn unreserved_characters_pass_through() {
    let href = build_contact_mailto("hello@example.dev", "A-b_c.d~e", "a@b.c", "ok");
    assert!(href.contains("from%20A-b_c.d~e"));
}

#[test]
fn reserved_characters_cannot_escape_their_field() {
    // An ampersand in the message must not start a new query parameter.
    let href = build_contact_mailto("hello@example.dev", "Ada", "a@b.c", "salt & pepper");
    assert!(href.contains("salt%20%26%20pepper"));
    assert_eq!(href.matches('&').count(), 1);
}

#[test]
fn non_ascii_encodes_per_utf8_byte() {
    let href = build_contact_mailto("hello@example.dev", "Åsa", "a@b.c", "héllo");
    assert!(href.contains("from%20%C3%85sa"));
    assert!(href.contains("h%C3%A9llo"));
}

#[test]
fn open_mail_client_is_noop_off_browser() {
    open_mail_client("mailto:hello@example.dev");
}
