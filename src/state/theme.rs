//! Light/dark theme preference model.
//!
//! DESIGN
//! ======
//! The preference is a two-state machine: transitions happen only through
//! [`Theme::toggled`], and the initial state is resolved once at startup from
//! the stored value, then the system color-scheme hint, then the light
//! default. Browser persistence lives in `util::theme`; this module stays
//! pure so the resolution chain and toggle semantics are natively testable.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// localStorage key holding the persisted preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Display mode preference. Persisted as `"light"` / `"dark"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other mode. Calling twice returns the starting value.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Canonical storage form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything but the two canonical strings is `None`
    /// so a corrupt entry falls through to the system hint.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Resolve the startup theme: stored value first, then the system
    /// `prefers-color-scheme: dark` hint, then light. Resolution never
    /// writes anything back; only an explicit toggle persists.
    #[must_use]
    pub fn initial(stored: Option<&str>, system_prefers_dark: bool) -> Self {
        if let Some(theme) = stored.and_then(Self::parse) {
            return theme;
        }
        if system_prefers_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}
