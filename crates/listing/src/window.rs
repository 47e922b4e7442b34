//! Page window: which page controls to show.

use core::num::NonZeroUsize;

use serde::Serialize;

/// Maximum number of numbered page links shown at once.
pub const DEFAULT_WINDOW_WIDTH: usize = 7;

/// A numbered page link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub number: usize,
    pub active: bool,
}

/// Previous / next control. Always present; disabled at its boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageControl {
    pub target: usize,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub previous: PageControl,
    pub pages: Vec<PageLink>,
    pub next: PageControl,
}

/// Enumerate the page controls for `current` of `total_pages`.
///
/// Shows exactly `min(total_pages, width)` consecutive links, centred on the
/// current page and shifted so the window never runs past either end.
pub fn page_window(current: usize, total_pages: usize, width: NonZeroUsize) -> PageWindow {
    let total = total_pages.max(1);
    let current = current.clamp(1, total);
    let shown = total.min(width.get());

    let mut start = current.saturating_sub(width.get() / 2).max(1);
    let mut end = start + shown - 1;
    if end > total {
        end = total;
        start = end + 1 - shown;
    }

    let pages = (start..=end)
        .map(|number| PageLink {
            number,
            active: number == current,
        })
        .collect();

    PageWindow {
        previous: PageControl {
            target: current.saturating_sub(1).max(1),
            disabled: current == 1,
        },
        pages,
        next: PageControl {
            target: (current + 1).min(total),
            disabled: current == total,
        },
    }
}
