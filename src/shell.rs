//! Responsive Shell
//!
//! Chooses the navigation chrome for the current viewport class. Both
//! variants are plain descriptors; the Leptos layer wires every button to
//! the same `goto`.

use crate::content::ContentModel;
use crate::navigation::ViewState;
use crate::presenter::{self, Action};

/// Side panel width; the main column reserves the same left gutter
pub const SIDE_PANEL_WIDTH_PX: u32 = 240;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Wide,
    Narrow,
}

impl ViewportClass {
    pub fn classify(width_px: f64, breakpoint_px: f64) -> Self {
        if leptos_viewport::is_at_least(width_px, breakpoint_px) {
            ViewportClass::Wide
        } else {
            ViewportClass::Narrow
        }
    }
}

/// A destination button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavButton {
    pub target: ViewState,
    pub label: &'static str,
    pub emphasized: bool,
}

impl NavButton {
    fn new(target: ViewState, emphasized: bool) -> Self {
        Self {
            target,
            label: target.label(),
            emphasized,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopBar {
    pub title: String,
    pub call: Option<Action>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAffordance {
    SidePanel {
        title: String,
        tagline_lines: Vec<String>,
        destinations: Vec<NavButton>,
        primary_action: Action,
        width_px: u32,
    },
    Bars {
        top: TopBar,
        bottom: Vec<NavButton>,
    },
}

impl NavigationAffordance {
    /// Left margin the main content must reserve
    pub fn content_gutter_px(&self) -> u32 {
        match self {
            NavigationAffordance::SidePanel { width_px, .. } => *width_px,
            NavigationAffordance::Bars { .. } => 0,
        }
    }

    /// Every destination this chrome can navigate to
    #[cfg(test)]
    pub fn buttons(&self) -> &[NavButton] {
        match self {
            NavigationAffordance::SidePanel { destinations, .. } => destinations,
            NavigationAffordance::Bars { bottom, .. } => bottom,
        }
    }
}

pub fn chrome(class: ViewportClass, content: &ContentModel) -> NavigationAffordance {
    let shop = content.shop();
    let title = presenter::shop_name(shop)
        .into_option()
        .unwrap_or(presenter::DEFAULT_SHOP_NAME)
        .to_string();

    match class {
        ViewportClass::Wide => NavigationAffordance::SidePanel {
            title,
            tagline_lines: presenter::tagline_lines(shop),
            destinations: ViewState::destinations()
                .into_iter()
                .map(|view| NavButton::new(view, false))
                .collect(),
            primary_action: presenter::reserve_action(shop),
            width_px: SIDE_PANEL_WIDTH_PX,
        },
        ViewportClass::Narrow => NavigationAffordance::Bars {
            top: TopBar {
                title,
                call: presenter::contact_action(shop).into_option(),
            },
            bottom: ViewState::destinations()
                .into_iter()
                .map(|view| NavButton::new(view, view == ViewState::Contact))
                .collect(),
        },
    }
}
