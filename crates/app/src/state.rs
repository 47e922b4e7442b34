//! Application state owned by the controller.

use storefront_cart::CartLedger;
use storefront_catalog::CatalogStore;
use storefront_core::{ProductId, SessionId};
use storefront_listing::FilterCriteria;

/// Everything a browsing session holds. Constructed once at startup and owned
/// by [`crate::Storefront`]; the view layer only sees view models.
#[derive(Debug)]
pub struct AppState {
    pub(crate) session_id: SessionId,
    pub(crate) catalog: CatalogStore,
    /// Filter controls as currently edited.
    pub(crate) draft: FilterCriteria,
    /// Criteria the listing is rendered with.
    pub(crate) applied: FilterCriteria,
    /// Requested page; clamped against the listing on every read.
    pub(crate) current_page: usize,
    pub(crate) cart: CartLedger,
    /// Product shown in the detail view.
    pub(crate) selected: Option<ProductId>,
}

impl AppState {
    pub fn new(session_id: SessionId, catalog: CatalogStore) -> Self {
        Self {
            session_id,
            catalog,
            draft: FilterCriteria::default(),
            applied: FilterCriteria::default(),
            current_page: 1,
            cart: CartLedger::new(),
            selected: None,
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }
}
