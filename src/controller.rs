//! View controller
//!
//! Owns the service menu's [`ViewState`] and drives its lifecycle: one
//! catalog fetch per mount, category sync from the navigation context, and
//! the user interactions (card click, modal close, category selection).
//!
//! The fetch runs on a tokio runtime while the UI thread keeps rendering.
//! Its result comes back over a oneshot channel that [`ViewController::poll`]
//! drains once per frame, so all state mutation stays on the UI thread.

use crate::catalog::{CatalogError, ServiceCatalog, ServiceRecord};
use crate::state::{NavigationContext, ViewState};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::oneshot;

/// Default distance kept between the top of the viewport and a section
pub const DEFAULT_SCROLL_OFFSET: f32 = 45.0;

/// Result delivered by the fetch task
pub type FetchOutcome = Result<Vec<ServiceRecord>, CatalogError>;

/// Capability to bring a category section into view
///
/// Best-effort: implementations silently ignore ids they cannot find.
pub trait ScrollTarget {
    /// Scroll so the section `section_id` sits `offset` points below the top
    fn scroll_into_view(&mut self, section_id: &str, offset: f32);
}

/// Scroll target for views without a scrollable surface
#[derive(Debug, Default, Clone, Copy)]
pub struct NoScroll;

impl ScrollTarget for NoScroll {
    fn scroll_into_view(&mut self, _section_id: &str, _offset: f32) {}
}

/// Controller for one mounted service menu view
pub struct ViewController<S: ScrollTarget> {
    state: ViewState,
    navigation: NavigationContext,
    scroll: S,
    scroll_offset: f32,
    pending: Option<oneshot::Receiver<FetchOutcome>>,
    fetch_started: bool,
    /// Cleared on drop so a late fetch result is discarded
    alive: Arc<AtomicBool>,
}

impl<S: ScrollTarget> ViewController<S> {
    /// Create an unmounted controller
    pub fn new(navigation: NavigationContext, scroll: S) -> Self {
        Self {
            state: ViewState::new(),
            navigation,
            scroll,
            scroll_offset: DEFAULT_SCROLL_OFFSET,
            pending: None,
            fetch_started: false,
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Override the scroll margin
    pub fn with_scroll_offset(mut self, offset: f32) -> Self {
        self.scroll_offset = offset;
        self
    }

    /// Mount the view: start the catalog fetch and sync the category
    ///
    /// `on_ready` runs on the runtime once the result is ready to be polled,
    /// typically to request a repaint. Calling this more than once is a no-op.
    pub fn mount<F>(&mut self, catalog: Arc<dyn ServiceCatalog>, runtime: &Handle, on_ready: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if self.fetch_started {
            tracing::warn!("View already mounted; not fetching the catalog again");
            return;
        }
        self.fetch_started = true;

        let (tx, rx) = oneshot::channel();
        let alive = Arc::clone(&self.alive);
        runtime.spawn(async move {
            let outcome = catalog.fetch_services().await;
            if !alive.load(Ordering::Acquire) {
                tracing::debug!("View unmounted before the catalog fetch resolved; discarding result");
                return;
            }
            if tx.send(outcome).is_ok() {
                on_ready();
            }
        });
        self.pending = Some(rx);

        tracing::info!(
            category = %self.navigation.selected_category(),
            "Service menu mounted"
        );
        self.state.sync_navigation(&self.navigation);
    }

    /// Apply the fetch result if it has arrived
    ///
    /// Returns true if the state changed.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.pending.as_mut() else {
            return false;
        };
        match rx.try_recv() {
            Ok(outcome) => {
                self.pending = None;
                self.apply_outcome(outcome);
                true
            }
            Err(oneshot::error::TryRecvError::Empty) => false,
            Err(oneshot::error::TryRecvError::Closed) => {
                self.pending = None;
                self.apply_outcome(Err(CatalogError::Interrupted));
                true
            }
        }
    }

    /// Wait for the fetch result and apply it
    ///
    /// For headless callers; the UI uses [`ViewController::poll`].
    pub async fn settle(&mut self) {
        let Some(rx) = self.pending.take() else {
            return;
        };
        let outcome = rx.await.unwrap_or(Err(CatalogError::Interrupted));
        self.apply_outcome(outcome);
    }

    fn apply_outcome(&mut self, outcome: FetchOutcome) {
        match outcome {
            Ok(services) => {
                let count = services.len();
                if self.state.load_succeeded(services) {
                    tracing::info!(
                        services = count,
                        categories = self.state.categories().len(),
                        "Service catalog loaded"
                    );
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load service catalog");
                self.state.load_failed();
            }
        }
    }

    /// Replace the navigation context, re-syncing if the selector changed
    pub fn set_navigation(&mut self, navigation: NavigationContext) {
        if navigation.selected_category() == self.navigation.selected_category() {
            return;
        }
        self.navigation = navigation;
        if self.fetch_started {
            self.state.sync_navigation(&self.navigation);
        }
    }

    /// Open the detail modal for a clicked card
    pub fn handle_card_click(&mut self, service: ServiceRecord) {
        tracing::debug!(service_id = %service.id, "Service card clicked");
        self.state.open_service(service);
    }

    /// Close the detail modal
    pub fn close_modal(&mut self) {
        self.state.close_modal();
    }

    /// Make `category` active and scroll its section into view
    pub fn scroll_to_category(&mut self, category: &str) {
        self.state.set_active_category(category);
        self.scroll.scroll_into_view(category, self.scroll_offset);
    }

    /// Current view state
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Injected scroll target
    pub fn scroll_target(&self) -> &S {
        &self.scroll
    }

    /// Borrow the state and the scroll target at the same time
    pub fn parts_mut(&mut self) -> (&ViewState, &mut S) {
        (&self.state, &mut self.scroll)
    }
}

impl<S: ScrollTarget> Drop for ViewController<S> {
    fn drop(&mut self) {
        self.alive.store(false, Ordering::Release);
    }
}
