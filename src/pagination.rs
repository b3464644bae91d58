//! Page navigation helpers for catalog views.

use std::ops::Range;

/// Number of page buttons shown at once.
pub const MAX_VISIBLE_PAGES: u32 = 5;

/// Whether `page` is a valid target given `total_pages`.
pub fn can_navigate(page: i64, total_pages: u32) -> bool {
    page >= 0 && page < i64::from(total_pages)
}

/// Zero-based index of the one-based page `number`, if it is in range.
pub fn page_index(number: i64, total_pages: u32) -> Option<u32> {
    let index = number.saturating_sub(1);
    if !can_navigate(index, total_pages) {
        return None;
    }
    u32::try_from(index).ok()
}

/// Pagination is only offered when there is more than one page.
pub fn is_visible(total_pages: u32) -> bool {
    total_pages > 1
}

/// Window of page indices around `current`, at most [`MAX_VISIBLE_PAGES`]
/// wide. The window slides left near the last page so it stays full.
pub fn visible_pages(current: u32, total_pages: u32) -> Range<u32> {
    let half = MAX_VISIBLE_PAGES / 2;
    let mut start = current.saturating_sub(half);
    let end = total_pages.min(start + MAX_VISIBLE_PAGES);

    if end.saturating_sub(start) < MAX_VISIBLE_PAGES && start > 0 {
        start = end.saturating_sub(MAX_VISIBLE_PAGES);
    }

    start..end.max(start)
}
