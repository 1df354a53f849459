//! Contact section: outbound links plus a message form that opens the
//! visitor's mail client with a prefilled draft.

use leptos::prelude::*;

use crate::components::icons::{IconGithub, IconLinkedin, IconMail};
use crate::components::profile::PROFILE;
use crate::util::mailto::{build_contact_mailto, open_mail_client};

#[component]
pub fn ContactSection() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let email_href = format!("mailto:{}", PROFILE.email);

    // Field presence is enforced by the browser via `required`; by the time
    // submit fires the values are non-empty.
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let href = build_contact_mailto(PROFILE.email, &name.get(), &email.get(), &message.get());
        open_mail_client(&href);
    };

    view! {
        <div class="contact">
            <header class="section__header">
                <h2 class="section__title">"Contact Me"</h2>
            </header>

            <div class="card contact__card">
                <div class="contact__links">
                    <a class="contact__link" href=email_href>
                        <IconMail />
                        {PROFILE.email}
                    </a>
                    <a
                        class="contact__link"
                        href=PROFILE.github_url
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <IconGithub />
                        {PROFILE.github_handle}
                    </a>
                    <a
                        class="contact__link"
                        href=PROFILE.linkedin_url
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <IconLinkedin />
                        {PROFILE.linkedin_handle}
                    </a>
                </div>

                <h3 class="contact__form-heading">"Send me a message"</h3>
                <form class="contact__form" on:submit=on_submit>
                    <div class="contact__field">
                        <label class="contact__label" for="contact-name">
                            "Name"
                        </label>
                        <input
                            id="contact-name"
                            class="contact__input"
                            type="text"
                            placeholder="Your name"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="contact__field">
                        <label class="contact__label" for="contact-email">
                            "Email"
                        </label>
                        <input
                            id="contact-email"
                            class="contact__input"
                            type="email"
                            placeholder="Your email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="contact__field">
                        <label class="contact__label" for="contact-message">
                            "Message"
                        </label>
                        <textarea
                            id="contact-message"
                            class="contact__input contact__textarea"
                            rows="4"
                            placeholder="Your message"
                            required
                            prop:value=move || message.get()
                            on:input=move |ev| message.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <button class="btn btn--primary contact__submit" type="submit">
                        "Send Message"
                    </button>
                </form>
            </div>
        </div>
    }
}
