//! Yabuzuki Site Entry Point

mod models;
mod content;
mod assets;
mod presenter;
mod navigation;
mod composer;
mod shell;
mod config;
mod context;
mod markdown;
mod components;
mod mobile;
mod app;

use app::App;
use config::SiteConfig;
use content::ContentModel;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = SiteConfig::from_build_env();
    console_logger::init(config.log_level);

    // Malformed content: log and mount nothing
    let content = match ContentModel::bundled() {
        Ok(content) => content,
        Err(err) => {
            tracing::error!(error = %err, "content failed to load");
            return;
        }
    };

    tracing::info!(
        base_path = %config.base_path,
        lunch = content.menu().lunch.len(),
        dinner = content.menu().dinner.len(),
        "mounting site"
    );
    mount_to_body(move || view! { <App content=content config=config /> });
}
