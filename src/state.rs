//! Application state management
//!
//! Contains shared state accessible across all handlers.

use crate::catalog::{Catalog, CATALOG};
use crate::config::AdminConfig;
use crate::error::AppError;
use crate::render::PageRenderer;
use crate::store::ReservationStore;
use std::sync::Arc;

/// Application state shared across all handlers
pub struct AppState {
    /// Reservation record mapper (swappable storage engine)
    pub store: Arc<dyn ReservationStore>,

    /// Static bilingual restaurant content
    pub catalog: &'static Catalog,

    /// Template environment
    pub renderer: PageRenderer,

    /// Operator credentials for the admin console
    pub admin: AdminConfig,
}

impl AppState {
    /// Create new application state around a reservation store
    pub fn new(store: Arc<dyn ReservationStore>, admin: AdminConfig) -> Result<Self, AppError> {
        Ok(Self {
            store,
            catalog: &CATALOG,
            renderer: PageRenderer::new()?,
            admin,
        })
    }
}

/// Type alias for shared state
pub type SharedState = Arc<AppState>;
