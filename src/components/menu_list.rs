//! Menu List Component

use leptos::prelude::*;

use crate::composer::MenuLine;

/// One menu section: heading plus name / price rows
#[component]
pub fn MenuList(heading: &'static str, lines: Vec<MenuLine>) -> impl IntoView {
    view! {
        <section class="menu-section">
            <h4 class="menu-heading">{heading}</h4>
            <ul class="menu-list">
                {lines
                    .into_iter()
                    .map(|line| match line {
                        MenuLine::Item { name, price } => view! {
                            <li class="menu-row">
                                <span class="menu-name">{name}</span>
                                <span class="menu-price">{price}</span>
                            </li>
                        }
                        .into_any(),
                        MenuLine::Placeholder { text } => view! {
                            <li class="menu-row placeholder">{text}</li>
                        }
                        .into_any(),
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
