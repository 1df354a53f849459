//! Selection state for the project gallery's detail dialog.

#[cfg(test)]
#[path = "showcase_test.rs"]
mod showcase_test;

/// Which project, if any, has its detail dialog open.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShowcaseState {
    selected: Option<String>,
}

impl ShowcaseState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the dialog for one project, replacing any previous selection.
    pub fn open(&mut self, id: &str) {
        self.selected = Some(id.to_owned());
    }

    /// Close the dialog. Idempotent.
    pub fn close(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}
