//! The storefront controller: single owner of application state.
//!
//! The view layer talks to the core only through this type: it dispatches
//! [`Intent`]s, calls the listing / cart entry points, and reads view models.

use storefront_catalog::{Catalog, CatalogSource, CatalogStatus, CatalogStore, Product};
use storefront_core::{DomainError, DomainResult, Price, ProductId, SessionId};
use storefront_listing::{
    CategorySelector, FilterCriteria, apply, page_window, paginate, paginate::total_pages,
};

use crate::config::{FilterMode, StorefrontConfig};
use crate::intent::{Intent, Outcome};
use crate::state::AppState;
use crate::view::{
    CartLineView, CartSummary, FilterPanel, ListingView, ProductCard, ProductDetail,
    SelectOption, sort_options,
};

/// One page of the current listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPage<'a> {
    pub items: Vec<&'a Product>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

#[derive(Debug)]
pub struct Storefront {
    config: StorefrontConfig,
    state: AppState,
}

impl Storefront {
    /// A controller whose catalog still has to be loaded with [`Storefront::start`].
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            config,
            state: AppState::new(SessionId::new(), CatalogStore::new()),
        }
    }

    /// A controller over an already available catalog.
    pub fn with_catalog(config: StorefrontConfig, catalog: Catalog) -> Self {
        Self {
            config,
            state: AppState::new(SessionId::new(), CatalogStore::preloaded(catalog)),
        }
    }

    /// Load the catalog from `source`; returns the number of products.
    ///
    /// Once a catalog is loaded, later calls return immediately. After a
    /// failure the listing renders [`ListingView::Unavailable`] and `start`
    /// may be called again to retry.
    pub async fn start<S>(&mut self, source: &S) -> DomainResult<usize>
    where
        S: CatalogSource + ?Sized,
    {
        let catalog = self.state.catalog.load(source).await?;
        tracing::info!(
            session_id = %self.state.session_id,
            products = catalog.len(),
            "storefront ready"
        );
        Ok(catalog.len())
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn session_id(&self) -> SessionId {
        self.state.session_id()
    }

    pub fn catalog_status(&self) -> CatalogStatus {
        self.state.catalog.status()
    }

    /// Distinct categories of the loaded catalog, sorted.
    pub fn categories(&self) -> Vec<String> {
        self.state
            .catalog
            .catalog()
            .map(|c| c.categories().into_iter().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Criteria the listing is currently rendered with.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.state.applied
    }

    /// Filter controls as currently edited (equal to [`Storefront::criteria`]
    /// in live mode).
    pub fn draft(&self) -> &FilterCriteria {
        &self.state.draft
    }

    pub fn current_page(&self) -> usize {
        self.clamp_page(self.state.current_page)
    }

    /// Catalog filtered and ordered by the applied criteria.
    pub fn apply_filters_and_sort(&self) -> Vec<&Product> {
        match self.state.catalog.catalog() {
            Some(catalog) => apply(catalog.products(), &self.state.applied),
            None => Vec::new(),
        }
    }

    /// The current page of [`Storefront::apply_filters_and_sort`].
    pub fn paginate(&self) -> ListingPage<'_> {
        let ordered = self.apply_filters_and_sort();
        let page = paginate(&ordered, self.config.page_size, self.state.current_page);
        ListingPage {
            items: page.items.to_vec(),
            page: page.page,
            total_pages: page.total_pages,
            total_items: page.total_items,
        }
    }

    /// Add one unit of `product_id` to the cart; returns its new quantity.
    pub fn add(&mut self, product_id: ProductId) -> DomainResult<u32> {
        let catalog = self
            .state
            .catalog
            .catalog()
            .ok_or(DomainError::unknown_product(product_id))?;
        self.state.cart.add(catalog, product_id)
    }

    /// Remove one unit of `product_id` from the cart; returns what is left.
    pub fn remove(&mut self, product_id: ProductId) -> DomainResult<u32> {
        let catalog = self
            .state
            .catalog
            .catalog()
            .ok_or(DomainError::unknown_product(product_id))?;
        self.state.cart.remove(catalog, product_id)
    }

    /// Cart total at current catalog prices.
    pub fn total(&self) -> DomainResult<Price> {
        match self.state.catalog.catalog() {
            Some(catalog) => self.state.cart.total(catalog),
            None => Ok(Price::ZERO),
        }
    }

    /// Number of units in the cart.
    pub fn count(&self) -> u64 {
        self.state.cart.count()
    }

    pub fn dispatch(&mut self, intent: Intent) -> DomainResult<Outcome> {
        tracing::debug!(session_id = %self.state.session_id, ?intent, "dispatching intent");

        let outcome = match intent {
            Intent::SetSearch { text } => self.edit_criteria(|c| c.search = text),
            Intent::SetCategory { category } => self.edit_criteria(|c| c.category = category),
            Intent::SetPriceRange { min, max } => self.edit_criteria(|c| {
                c.min_price = min;
                c.max_price = max;
            }),
            Intent::SetSort { sort } => self.edit_criteria(|c| c.sort = sort),
            Intent::ApplyFilters => {
                let outcome = self.commit_criteria(self.state.draft.clone());
                if self.state.current_page != 1 {
                    self.state.current_page = 1;
                    Outcome::ListingChanged
                } else {
                    outcome
                }
            }
            Intent::ResetFilters => {
                self.state.draft = FilterCriteria::default();
                let outcome = self.commit_criteria(FilterCriteria::default());
                if self.state.current_page != 1 {
                    self.state.current_page = 1;
                    Outcome::ListingChanged
                } else {
                    outcome
                }
            }
            Intent::GoToPage { page } => {
                let page = self.clamp_page(page);
                if page == self.current_page() {
                    Outcome::Unchanged
                } else {
                    self.state.current_page = page;
                    Outcome::ListingChanged
                }
            }
            Intent::AddToCart { product_id } => Outcome::CartChanged {
                product_id: Some(product_id),
                quantity: self.add(product_id)?,
            },
            Intent::AddSelectedToCart => match self.state.selected {
                Some(product_id) => {
                    let quantity = self.add(product_id)?;
                    self.state.selected = None;
                    Outcome::CartChanged {
                        product_id: Some(product_id),
                        quantity,
                    }
                }
                None => Outcome::Unchanged,
            },
            Intent::RemoveFromCart { product_id } => Outcome::CartChanged {
                product_id: Some(product_id),
                quantity: self.remove(product_id)?,
            },
            Intent::ClearCart => {
                if self.state.cart.is_empty() {
                    Outcome::Unchanged
                } else {
                    self.state.cart.clear();
                    Outcome::CartChanged {
                        product_id: None,
                        quantity: 0,
                    }
                }
            }
            Intent::ViewProduct { product_id } => {
                self.require_product(product_id)?;
                self.state.selected = Some(product_id);
                Outcome::DetailChanged
            }
            Intent::CloseProduct => match self.state.selected.take() {
                Some(_) => Outcome::DetailChanged,
                None => Outcome::Unchanged,
            },
            Intent::Checkout => {
                tracing::info!(
                    session_id = %self.state.session_id,
                    items = self.state.cart.count(),
                    "checkout requested; not available"
                );
                Outcome::CheckoutUnavailable
            }
        };

        Ok(outcome)
    }

    /// State of the product grid for the current criteria and page.
    pub fn listing_view(&self) -> ListingView {
        let catalog = match self.state.catalog.status() {
            CatalogStatus::NotLoaded => return ListingView::Loading,
            CatalogStatus::Unavailable(message) => return ListingView::Unavailable { message },
            CatalogStatus::Ready => self.state.catalog.catalog(),
        };
        if catalog.is_none_or(Catalog::is_empty) {
            return ListingView::Empty;
        }

        let page = self.paginate();
        if page.items.is_empty() {
            return ListingView::NoMatches;
        }

        let cards = page
            .items
            .iter()
            .map(|p| ProductCard::new(p, self.state.cart.quantity_of(p.id_typed())))
            .collect();

        ListingView::Products {
            cards,
            page: page.page,
            total_pages: page.total_pages,
            total_items: page.total_items,
            pagination: page_window(page.page, page.total_pages, self.config.page_window),
        }
    }

    /// Cart panel contents.
    pub fn cart_summary(&self) -> DomainResult<CartSummary> {
        let (lines, total) = match self.state.catalog.catalog() {
            Some(catalog) => {
                let lines = self.state.cart.lines(catalog)?;
                let total = self.state.cart.total(catalog)?;
                (lines.iter().map(CartLineView::from).collect(), total)
            }
            None => (Vec::new(), Price::ZERO),
        };

        Ok(CartSummary {
            lines,
            count: self.state.cart.count(),
            total_label: total.to_string(),
            checkout_enabled: false,
        })
    }

    /// Detail view of the selected product, if one is open.
    pub fn product_detail(&self) -> Option<ProductDetail> {
        let id = self.state.selected?;
        self.state
            .catalog
            .catalog()
            .and_then(|c| c.get(id))
            .map(ProductDetail::new)
    }

    /// Values of the filter controls.
    pub fn filter_panel(&self) -> FilterPanel {
        let draft = &self.state.draft;

        let mut categories = vec![SelectOption {
            value: CategorySelector::All.as_str().to_string(),
            label: "All Categories".to_string(),
            selected: draft.category == CategorySelector::All,
        }];
        categories.extend(self.categories().into_iter().map(|name| SelectOption {
            selected: draft.category.as_str() == name && draft.category != CategorySelector::All,
            label: name.clone(),
            value: name,
        }));

        FilterPanel {
            search: draft.search.clone(),
            categories,
            sorts: sort_options(draft.sort),
            min_price: price_input(draft.min_price),
            max_price: price_input(draft.max_price),
            show_apply: self.config.filter_mode == FilterMode::OnApply,
            has_pending_changes: self.state.draft != self.state.applied,
        }
    }

    fn edit_criteria(&mut self, edit: impl FnOnce(&mut FilterCriteria)) -> Outcome {
        edit(&mut self.state.draft);
        match self.config.filter_mode {
            FilterMode::Live => self.commit_criteria(self.state.draft.clone()),
            FilterMode::OnApply => Outcome::DraftChanged,
        }
    }

    /// Make `criteria` the applied criteria; a change returns to page 1.
    fn commit_criteria(&mut self, criteria: FilterCriteria) -> Outcome {
        if criteria == self.state.applied {
            return Outcome::Unchanged;
        }
        self.state.applied = criteria;
        self.state.current_page = 1;
        Outcome::ListingChanged
    }

    fn clamp_page(&self, page: usize) -> usize {
        let len = self.apply_filters_and_sort().len();
        page.clamp(1, total_pages(len, self.config.page_size))
    }

    fn require_product(&self, product_id: ProductId) -> DomainResult<&Product> {
        self.state
            .catalog
            .catalog()
            .ok_or(DomainError::unknown_product(product_id))?
            .require(product_id)
    }
}

fn price_input(price: Option<Price>) -> String {
    price
        .map(|p| format!("{:.2}", p.as_decimal()))
        .unwrap_or_default()
}
