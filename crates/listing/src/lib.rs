//! Filter/Sort Engine and Paginator.
//!
//! Pure functions over a catalog snapshot: no IO, no state. The controller
//! calls [`apply`] then [`paginate`] on every render pass, and
//! [`page_window`] to enumerate the page controls.

pub mod criteria;
pub mod engine;
pub mod paginate;
pub mod window;

pub use criteria::{CategorySelector, FilterCriteria, SortKey, parse_price_bound};
pub use engine::apply;
pub use paginate::{DEFAULT_PAGE_SIZE, Page, paginate};
pub use window::{DEFAULT_WINDOW_WIDTH, PageControl, PageLink, PageWindow, page_window};
