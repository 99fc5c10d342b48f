//! Which modal overlays are open.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use canvas::render::DetailView;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlays {
    create_form: bool,
    detail: Option<DetailView>,
}

impl Overlays {
    pub fn open_create_form(&mut self) {
        self.create_form = true;
    }

    pub fn close_create_form(&mut self) {
        self.create_form = false;
    }

    pub fn show_detail(&mut self, detail: DetailView) {
        self.detail = Some(detail);
    }

    pub fn close_detail(&mut self) -> Option<DetailView> {
        self.detail.take()
    }

    /// Escape: close everything.
    pub fn close_all(&mut self) {
        self.create_form = false;
        self.detail = None;
    }

    #[must_use]
    pub fn create_form_open(&self) -> bool {
        self.create_form
    }

    #[must_use]
    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    #[must_use]
    pub fn any_open(&self) -> bool {
        self.create_form || self.detail.is_some()
    }
}
