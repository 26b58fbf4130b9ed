//! Listing pagination: window arithmetic and canonical page URLs.
//!
//! Pagination state is never persisted; it is recomputed from the `page`
//! query parameter on every request. The canonical URL for page 1 carries no
//! `page` parameter at all.

use serde::{Deserialize, Serialize};

/// Items shown per listing page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 12;

/// Maximum number of page buttons shown without an ellipsis.
const FULL_WINDOW_LIMIT: usize = 5;

/// Offset/limit request parameters for a repository listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// 1-indexed page number.
    pub page: usize,
    pub per_page: usize,
}

/// One button in the rendered pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageItem {
    Page { number: usize },
    Ellipsis,
}

/// A single page of results plus everything the template needs to render the
/// pagination control.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub window: Vec<PageItem>,
}

impl<T> Paginated<T> {
    /// Clamps the current page into `1..=total_pages` and derives the window.
    pub fn new(items: Vec<T>, page: usize, total_pages: usize) -> Self {
        let total_pages = total_pages.max(1);
        let page = page.clamp(1, total_pages);
        Self {
            items,
            page,
            total_pages,
            window: page_window(page, total_pages),
        }
    }
}

/// Produces the ordered page-button sequence for the control.
///
/// Expects `1 <= current_page <= total_pages`; out-of-range input is clamped
/// rather than rejected since both values originate from URL parameters.
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<PageItem> {
    let total_pages = total_pages.max(1);
    let current_page = current_page.clamp(1, total_pages);

    let page = |number| PageItem::Page { number };

    if total_pages <= FULL_WINDOW_LIMIT {
        return (1..=total_pages).map(page).collect();
    }

    if current_page <= 3 {
        let mut window: Vec<PageItem> = (1..=4).map(page).collect();
        window.push(PageItem::Ellipsis);
        window.push(page(total_pages));
        return window;
    }

    if current_page >= total_pages - 2 {
        let mut window = vec![page(1), PageItem::Ellipsis];
        window.extend((total_pages - 3..=total_pages).map(page));
        return window;
    }

    vec![
        page(1),
        PageItem::Ellipsis,
        page(current_page - 1),
        page(current_page),
        page(current_page + 1),
        PageItem::Ellipsis,
        page(total_pages),
    ]
}

/// Builds the navigation href for a listing page.
///
/// The `page` parameter is omitted for page 1 and the `category` parameter is
/// kept across page changes. Both slug and page number are URL-safe by
/// construction, so no percent-encoding is involved.
pub fn page_href(base_path: &str, category: Option<&str>, page: usize) -> String {
    let mut href = base_path.to_string();
    let mut separator = '?';
    if let Some(category) = category {
        href.push(separator);
        href.push_str("category=");
        href.push_str(category);
        separator = '&';
    }
    if page > 1 {
        href.push(separator);
        href.push_str("page=");
        href.push_str(&page.to_string());
    }
    href
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(window: &[PageItem]) -> Vec<Option<usize>> {
        window
            .iter()
            .map(|item| match item {
                PageItem::Page { number } => Some(*number),
                PageItem::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn small_totals_show_every_page() {
        for current in 1..=3 {
            assert_eq!(
                numbers(&page_window(current, 3)),
                vec![Some(1), Some(2), Some(3)]
            );
        }
    }

    #[test]
    fn five_pages_is_still_a_full_window() {
        assert_eq!(
            numbers(&page_window(4, 5)),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
    }

    #[test]
    fn head_window_for_early_pages() {
        assert_eq!(
            numbers(&page_window(1, 10)),
            vec![Some(1), Some(2), Some(3), Some(4), None, Some(10)]
        );
        assert_eq!(numbers(&page_window(3, 10)), numbers(&page_window(1, 10)));
    }

    #[test]
    fn centered_window_for_middle_pages() {
        assert_eq!(
            numbers(&page_window(5, 10)),
            vec![Some(1), None, Some(4), Some(5), Some(6), None, Some(10)]
        );
    }

    #[test]
    fn tail_window_for_late_pages() {
        assert_eq!(
            numbers(&page_window(9, 10)),
            vec![Some(1), None, Some(7), Some(8), Some(9), Some(10)]
        );
        assert_eq!(numbers(&page_window(10, 10)), numbers(&page_window(9, 10)));
    }

    #[test]
    fn clamps_out_of_range_input() {
        assert_eq!(numbers(&page_window(99, 3)), vec![Some(1), Some(2), Some(3)]);
        assert_eq!(numbers(&page_window(0, 1)), vec![Some(1)]);
    }

    #[test]
    fn page_one_href_has_no_page_parameter() {
        assert_eq!(page_href("/blog", None, 1), "/blog");
        assert_eq!(page_href("/blog", Some("engineering"), 1), "/blog?category=engineering");
    }

    #[test]
    fn later_pages_carry_the_page_parameter() {
        assert_eq!(page_href("/blog", None, 2), "/blog?page=2");
        assert_eq!(
            page_href("/blog", Some("engineering"), 2),
            "/blog?category=engineering&page=2"
        );
    }

    #[test]
    fn paginated_clamps_and_windows() {
        let paginated = Paginated::new(vec![1, 2, 3], 7, 5);
        assert_eq!(paginated.page, 5);
        assert_eq!(paginated.total_pages, 5);
        assert_eq!(paginated.window.len(), 5);
    }
}
