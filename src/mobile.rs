//! Narrow-viewport chrome
//!
//! Fixed top bar (shop name + call button) and a four-button bottom nav with
//! the contact button emphasized.

use leptos::prelude::*;

use crate::components::ActionLink;
use crate::context::AppContext;
use crate::navigation::ViewState;
use crate::shell::{NavButton, TopBar};

pub const TOP_BAR_HEIGHT_PX: u32 = 56;
pub const BOTTOM_NAV_HEIGHT_PX: u32 = 70;

fn nav_icon(view: ViewState) -> &'static str {
    match view {
        ViewState::Home => "🏠",
        ViewState::News => "📰",
        ViewState::Concept => "🌾",
        ViewState::Menu => "🍜",
        ViewState::Contact => "📞",
    }
}

/// Narrow-viewport chrome: top bar with name + call, bottom destination bar
#[component]
pub fn MobileChrome(top: TopBar, bottom: Vec<NavButton>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <header
            class="mobile-top-bar"
            style=format!("position: fixed; top: 0; left: 0; right: 0; height: {}px; display: flex; align-items: center; justify-content: space-between; padding: 0 16px;", TOP_BAR_HEIGHT_PX)
        >
            <button class="mobile-title" on:click=move |_| ctx.back()>
                {top.title}
            </button>
            {top.call.map(|call| view! { <ActionLink action=call /> })}
        </header>

        // Bottom navigation
        <nav
            class="mobile-bottom-nav"
            style=format!("position: fixed; left: 0; right: 0; bottom: 0; height: {}px; display: flex;", BOTTOM_NAV_HEIGHT_PX)
        >
            {bottom
                .into_iter()
                .map(|button| {
                    let target = button.target;
                    let emphasized = button.emphasized;
                    let class = move || {
                        let mut class = String::from("mobile-nav-item");
                        if ctx.view() == target {
                            class.push_str(" active");
                        }
                        if emphasized {
                            class.push_str(" emphasized");
                        }
                        class
                    };
                    view! {
                        <button class=class on:click=move |_| ctx.goto(target)>
                            <div class="mobile-nav-icon">{nav_icon(target)}</div>
                            <div class="mobile-nav-label">{button.label}</div>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
