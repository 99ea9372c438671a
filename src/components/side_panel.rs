//! Side Panel Component
//!
//! Persistent left navigation for wide viewports.

use leptos::prelude::*;

use crate::components::ActionLink;
use crate::context::AppContext;
use crate::presenter::Action;
use crate::shell::NavButton;

#[component]
pub fn SidePanel(
    title: String,
    tagline_lines: Vec<String>,
    destinations: Vec<NavButton>,
    primary_action: Action,
    width_px: u32,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <aside
            class="side-panel"
            style=format!("position: fixed; top: 0; left: 0; bottom: 0; width: {}px;", width_px)
        >
            <button class="side-panel-title" on:click=move |_| ctx.back()>
                {title}
            </button>
            <p class="side-panel-tagline">
                {tagline_lines.into_iter().map(|line| view! { <span>{line}<br /></span> }).collect_view()}
            </p>

            <nav class="side-panel-nav">
                {destinations
                    .into_iter()
                    .map(|button| {
                        let target = button.target;
                        view! {
                            <button
                                class=move || if ctx.view() == target { "side-nav-item active" } else { "side-nav-item" }
                                on:click=move |_| ctx.goto(target)
                            >
                                {button.label}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <ActionLink action=primary_action primary=true />
        </aside>
    }
}
