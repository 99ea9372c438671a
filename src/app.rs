//! Site App
//!
//! Root component: provides the context, picks chrome for the viewport
//! class and renders the composed blocks of the current view.

use leptos::prelude::*;
use leptos_viewport::use_viewport;

use crate::assets::AssetPaths;
use crate::components::{DisplayBlockView, SidePanel};
use crate::config::SiteConfig;
use crate::content::ContentModel;
use crate::context::AppContext;
use crate::mobile::{MobileChrome, BOTTOM_NAV_HEIGHT_PX, TOP_BAR_HEIGHT_PX};
use crate::navigation::NavigationController;
use crate::shell::{NavigationAffordance, ViewportClass};

#[component]
pub fn App(content: ContentModel, config: SiteConfig) -> impl IntoView {
    // State
    let nav = signal(NavigationController::new());
    let viewport = use_viewport();
    let breakpoint_px = config.breakpoint_px;
    let viewport_class = Memo::new(move |_| ViewportClass::classify(viewport.width_read.get(), breakpoint_px));

    let ctx = AppContext::new(content, AssetPaths::new(&config.base_path), nav, viewport_class);
    provide_context(ctx);

    Effect::new(move |_| {
        tracing::debug!(class = ?ctx.viewport.get(), "viewport class");
    });

    let affordance = Memo::new(move |_| ctx.chrome(ctx.viewport.get()));

    let main_style = move || match ctx.viewport.get() {
        ViewportClass::Wide => format!("margin-left: {}px;", affordance.with(|a| a.content_gutter_px())),
        ViewportClass::Narrow => format!(
            "padding-top: {}px; padding-bottom: {}px;",
            TOP_BAR_HEIGHT_PX, BOTTOM_NAV_HEIGHT_PX
        ),
    };

    view! {
        <div class="site-layout">
            {move || match affordance.get() {
                NavigationAffordance::SidePanel { title, tagline_lines, destinations, primary_action, width_px } => view! {
                    <SidePanel
                        title=title
                        tagline_lines=tagline_lines
                        destinations=destinations
                        primary_action=primary_action
                        width_px=width_px
                    />
                }
                .into_any(),
                NavigationAffordance::Bars { top, bottom } => view! {
                    <MobileChrome top=top bottom=bottom />
                }
                .into_any(),
            }}

            <main class="site-main" style=main_style>
                {move || {
                    let current = ctx.view();
                    view! {
                        <div class=format!("view view-{}", current.as_str())>
                            {ctx
                                .compose(current)
                                .into_iter()
                                .map(|block| view! { <DisplayBlockView block=block /> })
                                .collect_view()}
                        </div>
                    }
                }}
                {ctx.footer().map(|block| view! { <DisplayBlockView block=block /> })}
            </main>
        </div>
    }
}
