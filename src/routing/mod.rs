// SPDX-License-Identifier: MPL-2.0
//! Screen routing.
//!
//! The router owns which screen is currently displayed. Components receive it
//! through the [`Navigator`] trait so tests can substitute a recording fake.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Notes,
    Trash,
}

impl Screen {
    /// All screens, in drawer order.
    pub const ALL: [Screen; 2] = [Screen::Notes, Screen::Trash];

    /// Translation key for the screen title.
    pub fn title_key(self) -> &'static str {
        match self {
            Screen::Notes => "screen-notes-title",
            Screen::Trash => "screen-trash-title",
        }
    }

    /// Translation key for the placeholder shown when the screen has no notes.
    pub fn empty_key(self) -> &'static str {
        match self {
            Screen::Notes => "screen-notes-empty",
            Screen::Trash => "screen-trash-empty",
        }
    }
}

/// Navigation state shared by the drawer and the screen host.
pub trait Navigator {
    /// Screen currently displayed.
    fn current(&self) -> Screen;

    /// Makes `screen` current. Navigating to the current screen is allowed and
    /// is not short-circuited.
    fn navigate_to(&mut self, screen: Screen);
}

/// Default in-memory router.
#[derive(Debug, Clone, Default)]
pub struct Router {
    current: Screen,
}

impl Router {
    pub fn new(initial: Screen) -> Self {
        Self { current: initial }
    }
}

impl Navigator for Router {
    fn current(&self) -> Screen {
        self.current
    }

    fn navigate_to(&mut self, screen: Screen) {
        tracing::debug!(from = ?self.current, to = ?screen, "navigate");
        self.current = screen;
    }
}
