use serde::Serialize;

use crate::pagination::{PageItem, Paginated, page_href};

/// One rendered pagination button.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PageLinkDto {
    pub label: String,
    /// Absent for the ellipsis separator.
    pub href: Option<String>,
    pub current: bool,
}

/// Template-facing pagination control with canonical hrefs resolved.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PaginationDto {
    pub page: usize,
    pub total_pages: usize,
    /// Absent on the first page.
    pub prev_href: Option<String>,
    /// Absent on the last page.
    pub next_href: Option<String>,
    pub links: Vec<PageLinkDto>,
}

impl PaginationDto {
    pub fn new<T>(paginated: &Paginated<T>, base_path: &str, category: Option<&str>) -> Self {
        let links = paginated
            .window
            .iter()
            .map(|item| match item {
                PageItem::Page { number } => PageLinkDto {
                    label: number.to_string(),
                    href: Some(page_href(base_path, category, *number)),
                    current: *number == paginated.page,
                },
                PageItem::Ellipsis => PageLinkDto {
                    label: "…".to_string(),
                    href: None,
                    current: false,
                },
            })
            .collect();

        Self {
            page: paginated.page,
            total_pages: paginated.total_pages,
            prev_href: (paginated.page > 1)
                .then(|| page_href(base_path, category, paginated.page - 1)),
            next_href: (paginated.page < paginated.total_pages)
                .then(|| page_href(base_path, category, paginated.page + 1)),
            links,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_has_no_prev_and_canonical_hrefs() {
        let paginated = Paginated::new(vec![0; 12], 1, 10);
        let dto = PaginationDto::new(&paginated, "/blog", None);

        assert!(dto.prev_href.is_none());
        assert_eq!(dto.next_href.as_deref(), Some("/blog?page=2"));
        assert_eq!(dto.links[0].href.as_deref(), Some("/blog"));
        assert!(dto.links[0].current);
    }

    #[test]
    fn last_page_has_no_next() {
        let paginated = Paginated::new(vec![0; 4], 10, 10);
        let dto = PaginationDto::new(&paginated, "/blog", None);

        assert!(dto.next_href.is_none());
        assert_eq!(dto.prev_href.as_deref(), Some("/blog?page=9"));
    }

    #[test]
    fn category_is_preserved_across_page_links() {
        let paginated = Paginated::new(vec![0; 12], 2, 3);
        let dto = PaginationDto::new(&paginated, "/blog", Some("engineering"));

        assert_eq!(dto.prev_href.as_deref(), Some("/blog?category=engineering"));
        assert_eq!(
            dto.next_href.as_deref(),
            Some("/blog?category=engineering&page=3")
        );
    }

    #[test]
    fn ellipsis_links_are_inert() {
        let paginated = Paginated::new(vec![0; 12], 1, 10);
        let dto = PaginationDto::new(&paginated, "/blog", None);

        let ellipsis = dto.links.iter().find(|l| l.label == "…").unwrap();
        assert!(ellipsis.href.is_none());
        assert!(!ellipsis.current);
    }
}
