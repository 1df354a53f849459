//! Contact-form `mailto:` deep links.
//!
//! The form never talks to a server: submitting builds a prefilled
//! `mailto:` URL and hands it to the browser, which opens the visitor's
//! mail client. Building the link is pure string work and tested natively;
//! only the final hand-off touches the DOM.

#[cfg(test)]
#[path = "mailto_test.rs"]
mod mailto_test;

/// Build the prefilled `mailto:` link for a contact-form submission.
///
/// Subject and body values are percent-encoded; `to` is embedded verbatim
/// since it is one of our own addresses, not visitor input.
#[must_use]
pub fn build_contact_mailto(to: &str, name: &str, email: &str, message: &str) -> String {
    let subject = format!("Portfolio Contact from {name}");
    let body = format!("{message}\n\nFrom: {email}");
    format!(
        "mailto:{to}?subject={}&body={}",
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

/// Navigate to a `mailto:` link, opening the visitor's mail client.
pub fn open_mail_client(href: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = href;
    }
}
