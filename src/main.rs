//! Service Menu GUI - Main Entry Point
//! Native Rust GUI for browsing a remote service catalog by category

use eframe::egui;
use service_menu_gui::catalog::{HttpCatalog, ServiceCatalog};
use service_menu_gui::config::Config;
use service_menu_gui::controller::ViewController;
use service_menu_gui::ui::{render_app_layout, SectionScroller};
use std::sync::Arc;
use tracing::info;

const WINDOW_TITLE: &str = "Service Menu";

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);

    // The UI thread stays synchronous; the catalog fetch runs here
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    let http_catalog = HttpCatalog::new(reqwest::Client::new(), config.catalog.url.clone());
    info!(url = %http_catalog.url(), "Using service catalog");
    let catalog: Arc<dyn ServiceCatalog> = Arc::new(http_catalog);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([480.0, 800.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            let ctx = cc.egui_ctx.clone();
            let mut controller = ViewController::new(config.navigation(), SectionScroller::default())
                .with_scroll_offset(config.view.scroll_offset);
            controller.mount(catalog, runtime.handle(), move || ctx.request_repaint());
            Box::new(ServiceMenuApp {
                controller,
                _runtime: runtime,
            })
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run the service menu window: {}", e))
}

/// Main application struct
/// Owns the view controller and the runtime its fetch runs on
struct ServiceMenuApp {
    controller: ViewController<SectionScroller>,
    /// Kept alive for as long as the window is open
    _runtime: tokio::runtime::Runtime,
}

impl eframe::App for ServiceMenuApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.poll();
        render_app_layout(ctx, &mut self.controller);
    }
}
