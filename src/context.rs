//! Application Context
//!
//! Immutable content plus the navigation signal, provided via Leptos Context API.

use leptos::prelude::*;

use crate::assets::AssetPaths;
use crate::composer::{self, DisplayBlock};
use crate::content::ContentModel;
use crate::navigation::{NavigationController, ViewState};
use crate::shell::{self, NavigationAffordance, ViewportClass};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Loaded once at startup, never written again
    content: StoredValue<ContentModel>,
    assets: StoredValue<AssetPaths>,
    /// Navigation state - read
    pub nav: ReadSignal<NavigationController>,
    /// Navigation state - write, only through `goto`
    set_nav: WriteSignal<NavigationController>,
    /// Current viewport class
    pub viewport: Memo<ViewportClass>,
}

impl AppContext {
    pub fn new(
        content: ContentModel,
        assets: AssetPaths,
        nav: (ReadSignal<NavigationController>, WriteSignal<NavigationController>),
        viewport: Memo<ViewportClass>,
    ) -> Self {
        Self {
            content: StoredValue::new(content),
            assets: StoredValue::new(assets),
            nav: nav.0,
            set_nav: nav.1,
            viewport,
        }
    }

    /// Current view (tracked)
    pub fn view(&self) -> ViewState {
        self.nav.get().current()
    }

    /// The single navigation entry point for every affordance
    pub fn goto(&self, view: ViewState) {
        self.set_nav.update(|nav| nav.goto(view));
    }

    pub fn back(&self) {
        self.set_nav.update(|nav| nav.back());
    }

    pub fn compose(&self, view: ViewState) -> Vec<DisplayBlock> {
        self.content
            .with_value(|content| self.assets.with_value(|assets| composer::compose(content, view, assets)))
    }

    pub fn footer(&self) -> Option<DisplayBlock> {
        self.content.with_value(composer::compose_footer)
    }

    pub fn chrome(&self, class: ViewportClass) -> NavigationAffordance {
        self.content.with_value(|content| shell::chrome(class, content))
    }
}
