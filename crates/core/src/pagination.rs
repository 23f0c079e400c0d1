//! Paging of the filtered bookmark list.
//!
//! Every data row in the table is followed by a divider line, so a page
//! holds roughly half the available lines. The row count is kept odd so the
//! last row is never left with a dangling divider.

use crate::bookmarks::{BookmarkEntry, BookmarkSet};
use crate::matching::{Classification, MatchClass};

/// One bookmark visible on the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleEntry<'a> {
    /// 1-based position in the full, stable bookmark order
    pub position: usize,
    pub entry: &'a BookmarkEntry,
    pub class: MatchClass,
}

/// Result of paging the visible set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    pub entries: Vec<VisibleEntry<'a>>,
    pub current_page: usize,
    pub page_count: usize,
    pub rows_per_page: usize,
    /// Size of the whole visible set, across all pages
    pub visible_count: usize,
}

/// Number of data rows a page can hold.
///
/// Always odd and at least 1, however small the viewport.
#[must_use]
pub fn rows_per_page(viewport_height: u16, overhead: u16) -> usize {
    let available = usize::from(viewport_height.saturating_sub(overhead));
    let mut rows = (available / 2).saturating_sub(1);
    if rows % 2 == 0 {
        rows = rows.saturating_sub(1);
    }
    rows.max(1)
}

/// Number of pages needed for `visible_count` rows, never less than 1.
#[must_use]
pub fn page_count(visible_count: usize, rows_per_page: usize) -> usize {
    visible_count.div_ceil(rows_per_page.max(1)).max(1)
}

/// Moves `page` into `[1, page_count]`.
#[must_use]
pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.clamp(1, page_count.max(1))
}

/// The following page, staying on the last one.
#[must_use]
pub fn next_page(current_page: usize, page_count: usize) -> usize {
    clamp_page(current_page.saturating_add(1), page_count)
}

/// The preceding page, staying on the first one.
#[must_use]
pub fn previous_page(current_page: usize, page_count: usize) -> usize {
    clamp_page(current_page.saturating_sub(1), page_count)
}

/// Slices the visible set down to `current_page`.
///
/// With an empty query every bookmark is visible; otherwise only prefix and
/// exact matches are. The returned page number is clamped.
#[must_use]
pub fn paginate<'a>(
    bookmarks: &'a BookmarkSet,
    classification: &Classification,
    query: &str,
    rows_per_page: usize,
    current_page: usize,
) -> Page<'a> {
    let rows_per_page = rows_per_page.max(1);

    let visible: Vec<VisibleEntry<'a>> = bookmarks
        .iter()
        .enumerate()
        .map(|(index, entry)| VisibleEntry {
            position: index + 1,
            entry,
            class: classification.class_of(&entry.name),
        })
        .filter(|visible| query.is_empty() || visible.class != MatchClass::NoMatch)
        .collect();

    let visible_count = visible.len();
    let page_count = page_count(visible_count, rows_per_page);
    let current_page = clamp_page(current_page, page_count);

    let entries = visible
        .into_iter()
        .skip((current_page - 1) * rows_per_page)
        .take(rows_per_page)
        .collect();

    Page {
        entries,
        current_page,
        page_count,
        rows_per_page,
        visible_count,
    }
}
