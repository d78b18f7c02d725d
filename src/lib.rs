use leptos::*;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::application::DashboardConfig;
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::config_source;
use crate::infrastructure::services::{BrowserTimeProvider, ConsoleLogger};

pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;

/// Install logging, read the page config and mount the dashboard
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();
    domain::logging::init_time_provider(Box::new(BrowserTimeProvider::new()));

    let loaded = config_source::read_from_document();
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => DashboardConfig::default(),
    };

    domain::logging::init_logger(Box::new(ConsoleLogger::new(config.log_level)));

    match loaded {
        Ok(Some(_)) => {
            log_info!(LogComponent::Presentation("Initialize"), "Loaded page configuration");
        }
        Ok(None) => {
            log_info!(LogComponent::Presentation("Initialize"), "No page configuration, using defaults");
        }
        Err(e) => {
            log_warn!(LogComponent::Presentation("Initialize"), "{}; using defaults", e);
        }
    }

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        &format!(
            "🚀 Dashboard starting: mode={} ticker={} theme={}",
            config.control_mode.as_ref(),
            config.default_ticker,
            if config.dark_by_default { "dark" } else { "light" }
        ),
    );

    mount_to_body(move || view! { <App config=config /> });
}
