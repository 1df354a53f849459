//! Root application component and shared context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::home::HomePage;
use crate::state::theme::Theme;
use crate::state::tracker::SectionTracker;

/// Root component.
///
/// Provides the section tracker and theme as contexts, then resolves the
/// startup theme once the app is running in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let tracker = RwSignal::new(SectionTracker::new());
    let theme = RwSignal::new(Theme::default());

    provide_context(tracker);
    provide_context(theme);

    // Reading localStorage and prefers-color-scheme needs the browser, so
    // resolution happens in an effect. It never writes the preference back;
    // only the toggle persists.
    Effect::new(move || {
        let initial = crate::util::theme::read_preference();
        crate::util::theme::apply(initial);
        theme.set(initial);
    });

    view! {
        <Title text="Casey Morgan | Systems Engineer" />
        <HomePage />
    }
}
