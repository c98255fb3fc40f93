//! Light/dark flag sampled once per frame.

use std::cell::Cell;
use std::rc::Rc;

pub trait ThemeSource {
    fn is_dark(&self) -> bool;
}

/// Constant theme, mostly for tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedTheme(pub bool);

impl ThemeSource for FixedTheme {
    fn is_dark(&self) -> bool {
        self.0
    }
}

/// Theme flag owned by the host and flipped from outside the frame loop.
#[derive(Clone, Debug, Default)]
pub struct SharedTheme(Rc<Cell<bool>>);

impl SharedTheme {
    pub fn new(dark: bool) -> Self {
        Self(Rc::new(Cell::new(dark)))
    }

    pub fn set_dark(&self, dark: bool) {
        self.0.set(dark);
    }
}

impl ThemeSource for SharedTheme {
    fn is_dark(&self) -> bool {
        self.0.get()
    }
}
