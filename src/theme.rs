use crate::constants::DARK_CLASS;
use backdrop_core::ThemeSource;
use web_sys as web;

/// Reads the `dark` class on `<html>`; the page's theme toggle owns it.
pub struct DocumentTheme {
    root: web::Element,
}

impl DocumentTheme {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let root = document
            .document_element()
            .ok_or_else(|| anyhow::anyhow!("no document element"))?;
        Ok(Self { root })
    }
}

impl ThemeSource for DocumentTheme {
    fn is_dark(&self) -> bool {
        self.root.class_list().contains(DARK_CLASS)
    }
}
