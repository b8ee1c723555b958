//! Page-window computation for the catalog listing.
//!
//! Page size is fixed at 20. Zero matches means zero pages (the view renders
//! an empty state, not a lonely page 1). Nothing here clamps an out-of-range
//! page: the slice just comes back empty and the view decides what to offer.

/// Fixed number of products per listing page.
pub const PAGE_SIZE: usize = 20;

/// Total page count for a match count: `ceil(n / 20)`, zero iff `n == 0`.
#[must_use]
pub const fn total_pages(match_count: usize) -> u32 {
    (match_count.div_ceil(PAGE_SIZE)) as u32
}

/// The slice of `items` visible on 1-based page `page`.
///
/// An out-of-range page (including page 0) yields an empty slice.
#[must_use]
pub fn page_slice<T>(items: &[T], page: u32) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page as usize - 1).saturating_mul(PAGE_SIZE);
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    items.get(start..end).unwrap_or(&[])
}

/// Pagination metadata for the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: usize,
    /// 1-based index of the first visible item, 0 when the page is empty.
    pub first_item: usize,
    /// 1-based index of the last visible item, 0 when the page is empty.
    pub last_item: usize,
}

impl PageWindow {
    /// Compute the window for `match_count` items viewed at `page`.
    #[must_use]
    pub fn new(match_count: usize, page: u32) -> Self {
        let total = total_pages(match_count);
        let (first_item, last_item) = if page == 0 {
            (0, 0)
        } else {
            let start = (page as usize - 1).saturating_mul(PAGE_SIZE);
            if start >= match_count {
                (0, 0)
            } else {
                (start + 1, (start + PAGE_SIZE).min(match_count))
            }
        };

        Self {
            current_page: page,
            total_pages: total,
            total_items: match_count,
            first_item,
            last_item,
        }
    }

    /// Whether the requested page holds no items while matches exist
    /// (an out-of-range request the view should redirect away from).
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        self.total_items > 0 && self.first_item == 0
    }
}

/// One entry in the rendered page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    Page(u32),
    Ellipsis,
}

/// The bounded-width page selector.
///
/// Up to 5 pages are shown verbatim. Beyond that: page 1 and the last page
/// always appear, a window of up to 3 consecutive pages tracks the current
/// page (shifted to stay within `[2, total - 1]` near either edge), and an
/// ellipsis stands in for each gap.
#[must_use]
pub fn page_entries(current: u32, total: u32) -> Vec<PageEntry> {
    let mut entries = Vec::new();

    if total <= 5 {
        for page in 1..=total {
            entries.push(PageEntry::Page(page));
        }
        return entries;
    }

    entries.push(PageEntry::Page(1));

    if current > 3 {
        entries.push(PageEntry::Ellipsis);
    }

    let mut start = current.saturating_sub(1).max(2);
    let mut end = (current + 1).min(total - 1);
    if current <= 3 {
        end = 4.min(total - 1);
    } else if current >= total - 2 {
        start = total.saturating_sub(3).max(2);
    }

    for page in start..=end {
        entries.push(PageEntry::Page(page));
    }

    if current < total - 2 {
        entries.push(PageEntry::Ellipsis);
    }

    entries.push(PageEntry::Page(total));
    entries
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn pages(entries: &[PageEntry]) -> Vec<i64> {
        // Ellipsis rendered as -1 for compact assertions.
        entries
            .iter()
            .map(|e| match e {
                PageEntry::Page(p) => i64::from(*p),
                PageEntry::Ellipsis => -1,
            })
            .collect()
    }

    #[test]
    fn test_total_pages_law() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(20), 1);
        assert_eq!(total_pages(21), 2);
        assert_eq!(total_pages(45), 3);
    }

    #[test]
    fn test_forty_five_items_three_pages() {
        let items: Vec<u32> = (1..=45).collect();
        assert_eq!(page_slice(&items, 1), (1..=20).collect::<Vec<_>>());
        assert_eq!(page_slice(&items, 2), (21..=40).collect::<Vec<_>>());
        assert_eq!(page_slice(&items, 3), (41..=45).collect::<Vec<_>>());
        assert_eq!(total_pages(items.len()), 3);
    }

    #[test]
    fn test_seven_matches_fit_one_page() {
        let items: Vec<u32> = (1..=7).collect();
        assert_eq!(page_slice(&items, 1).len(), 7);
        assert_eq!(total_pages(items.len()), 1);
    }

    #[test]
    fn test_out_of_range_page_yields_empty_slice() {
        let items: Vec<u32> = (1..=7).collect();
        assert!(page_slice(&items, 0).is_empty());
        assert!(page_slice(&items, 2).is_empty());
        assert!(page_slice(&items, 99).is_empty());
    }

    #[test]
    fn test_concatenated_pages_cover_exactly_once() {
        let items: Vec<u32> = (1..=53).collect();
        let total = total_pages(items.len());
        let mut seen = Vec::new();
        for page in 1..=total {
            seen.extend_from_slice(page_slice(&items, page));
        }
        assert_eq!(seen, items);
    }

    #[test]
    fn test_window_indices() {
        let window = PageWindow::new(45, 3);
        assert_eq!(window.total_pages, 3);
        assert_eq!(window.first_item, 41);
        assert_eq!(window.last_item, 45);
        assert!(!window.is_out_of_range());

        let empty = PageWindow::new(0, 1);
        assert_eq!(empty.total_pages, 0);
        assert_eq!(empty.first_item, 0);
        assert!(!empty.is_out_of_range());

        let beyond = PageWindow::new(45, 9);
        assert!(beyond.is_out_of_range());
    }

    #[test]
    fn test_selector_shows_all_pages_up_to_five() {
        assert_eq!(pages(&page_entries(1, 1)), vec![1]);
        assert_eq!(pages(&page_entries(2, 3)), vec![1, 2, 3]);
        assert_eq!(pages(&page_entries(5, 5)), vec![1, 2, 3, 4, 5]);
        assert!(page_entries(1, 0).is_empty());
    }

    #[test]
    fn test_selector_near_left_edge() {
        // No leading ellipsis until the window detaches from page 1.
        assert_eq!(pages(&page_entries(1, 10)), vec![1, 2, 3, 4, -1, 10]);
        assert_eq!(pages(&page_entries(3, 10)), vec![1, 2, 3, 4, -1, 10]);
    }

    #[test]
    fn test_selector_in_the_middle() {
        assert_eq!(pages(&page_entries(5, 10)), vec![1, -1, 4, 5, 6, -1, 10]);
    }

    #[test]
    fn test_selector_near_right_edge() {
        assert_eq!(pages(&page_entries(8, 10)), vec![1, -1, 7, 8, 9, 10]);
        assert_eq!(pages(&page_entries(10, 10)), vec![1, -1, 7, 8, 9, 10]);
    }

    #[test]
    fn test_selector_width_is_bounded() {
        for total in [6u32, 20, 100, 10_000] {
            for current in 1..=total.min(60) {
                let entries = page_entries(current, total);
                assert!(entries.len() <= 7, "pager too wide at {current}/{total}");
            }
        }
    }
}
