//! Display Block Component
//!
//! Renders one composed block. All content decisions were made upstream.

use leptos::prelude::*;

use crate::assets::Asset;
use crate::components::MenuList;
use crate::composer::DisplayBlock;
use crate::markdown::parse_markdown_inline;
use crate::presenter::Action;

#[component]
pub fn DisplayBlockView(block: DisplayBlock) -> impl IntoView {
    match block {
        DisplayBlock::Image { src, alt, full_bleed } => {
            let class = if full_bleed { "block-image full-bleed" } else { "block-image" };
            view! { <img class=class src=src alt=alt loading="lazy" /> }.into_any()
        }
        DisplayBlock::BulletList { items } => view! {
            <ul class="bullet-list">
                {items
                    .into_iter()
                    .map(|item| view! { <li inner_html=parse_markdown_inline(&item)></li> })
                    .collect_view()}
            </ul>
        }
        .into_any(),
        DisplayBlock::Placeholder { text } => view! { <p class="placeholder">{text}</p> }.into_any(),
        DisplayBlock::Card { title, body } => view! {
            <section class="card">
                <h3 class="card-title">{title}</h3>
                <p class="card-body">{body}</p>
            </section>
        }
        .into_any(),
        DisplayBlock::MenuList { heading, lines } => {
            view! { <MenuList heading=heading lines=lines /> }.into_any()
        }
        DisplayBlock::Disclaimer { text } => view! { <p class="disclaimer">{text}</p> }.into_any(),
        DisplayBlock::InfoCard { title, image, rows, notes } => view! {
            <section class="info-card">
                <img class="info-card-image" src=image alt=Asset::Exterior.alt() loading="lazy" />
                <h3 class="info-card-title">{title}</h3>
                <dl class="info-rows">
                    {rows
                        .into_iter()
                        .map(|row| view! {
                            <div class="info-row">
                                <dt>{row.label}</dt>
                                <dd>{row.value}</dd>
                            </div>
                        })
                        .collect_view()}
                </dl>
                {(!notes.is_empty()).then(|| view! {
                    <ul class="notes">
                        {notes
                            .into_iter()
                            .map(|note| view! { <li inner_html=parse_markdown_inline(&note)></li> })
                            .collect_view()}
                    </ul>
                })}
            </section>
        }
        .into_any(),
        DisplayBlock::MapEmbed { src } => view! {
            <iframe
                class="map-embed"
                src=src
                title="地図"
                referrerpolicy="no-referrer-when-downgrade"
            ></iframe>
        }
        .attr("loading", "lazy")
        .into_any(),
        DisplayBlock::ActionLinks { links } => view! {
            <div class="action-links">
                {links.into_iter().map(|action| view! { <ActionLink action=action /> }).collect_view()}
            </div>
        }
        .into_any(),
        DisplayBlock::Footer { credits, text } => view! {
            <footer class="site-footer">
                {credits.into_iter().map(|credit| view! { <p class="photo-credit">{credit}</p> }).collect_view()}
                {text.map(|text| view! { <p class="footer-text">{text}</p> })}
            </footer>
        }
        .into_any(),
    }
}

/// Outbound link; web links open in a new tab, `tel:` and anchors do not
#[component]
pub fn ActionLink(action: Action, #[prop(optional)] primary: bool) -> impl IntoView {
    let external = action.href.starts_with("http://") || action.href.starts_with("https://");
    let class = if primary { "action-link primary" } else { "action-link" };
    view! {
        <a
            class=class
            href=action.href
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
        >
            {action.label}
        </a>
    }
}
