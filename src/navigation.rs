//! Navigation Controller
//!
//! Finite-state machine over the five site views. Every view is reachable
//! from every other; there is no history and no terminal state.

/// The single active screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewState {
    /// Full-bleed hero image
    #[default]
    Home,
    News,
    Concept,
    Menu,
    Contact,
}

impl ViewState {
    #[cfg(test)]
    pub const ALL: [ViewState; 5] = [
        ViewState::Home,
        ViewState::News,
        ViewState::Concept,
        ViewState::Menu,
        ViewState::Contact,
    ];

    /// Navigation targets shown in chrome, in display order (home excluded)
    pub fn destinations() -> [ViewState; 4] {
        [ViewState::News, ViewState::Concept, ViewState::Menu, ViewState::Contact]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewState::Home => "home",
            ViewState::News => "news",
            ViewState::Concept => "concept",
            ViewState::Menu => "menu",
            ViewState::Contact => "contact",
        }
    }

    /// Button / heading text
    pub fn label(&self) -> &'static str {
        match self {
            ViewState::Home => "ホーム",
            ViewState::News => "お知らせ",
            ViewState::Concept => "こだわり",
            ViewState::Menu => "お品書き",
            ViewState::Contact => "問合せ",
        }
    }
}

/// Owns the current view. `goto` is the only mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationController {
    current: ViewState,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ViewState {
        self.current
    }

    /// Unconditional transition; never rejected
    pub fn goto(&mut self, view: ViewState) {
        if self.current != view {
            tracing::debug!(from = self.current.as_str(), to = view.as_str(), "view transition");
        }
        self.current = view;
    }

    /// Always lands on home, regardless of where the user came from
    pub fn back(&mut self) {
        self.goto(ViewState::Home);
    }
}
