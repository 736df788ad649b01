//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use crate::controller::DEFAULT_SCROLL_OFFSET;
use crate::state::NavigationContext;
use std::env;

/// Default catalog endpoint
pub const DEFAULT_CATALOG_URL: &str = "https://menuapp.ru/api/v1";

/// Default launch route (no category selected)
pub const DEFAULT_ROUTE: &str = "/services";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog configuration
    pub catalog: CatalogConfig,
    /// View configuration
    pub view: ViewConfig,
}

/// Catalog configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Endpoint the service list is posted to
    pub url: String,
}

/// View configuration
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Launch route the navigation context is read from
    pub route: String,
    /// Distance kept above a section when scrolling to it (logical points)
    pub scroll_offset: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig {
                url: DEFAULT_CATALOG_URL.to_string(),
            },
            view: ViewConfig {
                route: DEFAULT_ROUTE.to_string(),
                scroll_offset: DEFAULT_SCROLL_OFFSET,
            },
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            catalog: CatalogConfig {
                url: env::var("CATALOG_URL")
                    .ok()
                    .filter(|u| !u.trim().is_empty())
                    .unwrap_or(defaults.catalog.url),
            },
            view: ViewConfig {
                route: env::var("MENU_ROUTE").unwrap_or(defaults.view.route),
                scroll_offset: env::var("SCROLL_OFFSET")
                    .ok()
                    .and_then(|o| o.parse::<f32>().ok())
                    .filter(|o| o.is_finite() && *o >= 0.0)
                    .unwrap_or(defaults.view.scroll_offset),
            },
        }
    }

    /// Navigation context parsed from the launch route
    pub fn navigation(&self) -> NavigationContext {
        NavigationContext::from_route(&self.view.route)
    }
}
