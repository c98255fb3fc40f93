//! Pointer state shared between event handlers and the frame loop.

use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

/// What effects see of the pointer during one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorState {
    /// Last known position; `None` until the first pointer event.
    pub position: Option<Vec2>,
    pub pressed: bool,
    /// Click delivered since the previous frame (last one wins).
    pub click: Option<Vec2>,
}

impl CursorState {
    /// Distance and offset (`position - from`) from `from` to the cursor, if
    /// the cursor is known and within `radius`.
    #[inline]
    pub fn within(&self, from: Vec2, radius: f32) -> Option<(Vec2, f32)> {
        let p = self.position?;
        let delta = p - from;
        let d = delta.length();
        (d < radius).then_some((delta, d))
    }
}

/// Cheap cloneable handle: event listeners write, the scheduler reads.
#[derive(Clone, Debug, Default)]
pub struct InputBridge {
    cursor: Rc<RefCell<CursorState>>,
}

impl InputBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_move(&self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.cursor.borrow_mut().position = Some(Vec2::new(x, y));
        }
    }

    pub fn pointer_down(&self) {
        self.cursor.borrow_mut().pressed = true;
    }

    pub fn pointer_up(&self) {
        self.cursor.borrow_mut().pressed = false;
    }

    /// Pointer left the page; keep pressed state but forget the position.
    pub fn pointer_leave(&self) {
        self.cursor.borrow_mut().position = None;
    }

    pub fn click(&self, x: f32, y: f32) {
        if !(x.is_finite() && y.is_finite()) {
            return;
        }
        let mut c = self.cursor.borrow_mut();
        c.position = Some(Vec2::new(x, y));
        c.click = Some(Vec2::new(x, y));
    }

    /// Copy of the state for one frame. The pending click is consumed so it
    /// reaches exactly one `step`.
    pub fn snapshot(&self) -> CursorState {
        let mut c = self.cursor.borrow_mut();
        let snap = *c;
        c.click = None;
        snap
    }

    /// Current state without consuming the click.
    pub fn peek(&self) -> CursorState {
        *self.cursor.borrow()
    }
}
