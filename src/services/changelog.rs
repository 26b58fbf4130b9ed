use crate::dto::changelog::EntryDto;
use crate::dto::pagination::PaginationDto;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{ChangelogListQuery, ChangelogReader};

use super::{ServiceError, ServiceResult};

/// Everything the changelog template needs for one request.
pub struct ChangelogPage {
    pub entries: Vec<EntryDto>,
    pub pagination: Option<PaginationDto>,
}

/// Core business logic for rendering the changelog: one page of entries,
/// newest first, with bodies rendered to HTML.
pub fn show_changelog<R>(page: usize, repo: &R) -> ServiceResult<ChangelogPage>
where
    R: ChangelogReader,
{
    let paginated = match repo.list_entries(
        ChangelogListQuery::default().paginate(page, DEFAULT_ITEMS_PER_PAGE),
    ) {
        Ok((total, entries)) => {
            Paginated::new(entries, page, total.div_ceil(DEFAULT_ITEMS_PER_PAGE))
        }
        Err(e) => {
            log::error!("Failed to list changelog entries: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let pagination = (paginated.total_pages > 1)
        .then(|| PaginationDto::new(&paginated, "/changelog", None));

    Ok(ChangelogPage {
        entries: paginated.items.into_iter().map(EntryDto::from).collect(),
        pagination,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::changelog::ChangelogEntry;
    use crate::domain::richtext::RichTextDocument;
    use crate::domain::types::{EntryId, EntryTag, EntryTitle, Slug};
    use crate::repository::test::TestRepository;
    use chrono::DateTime;

    fn sample_entry(id: i32, slug: &str) -> ChangelogEntry {
        ChangelogEntry {
            id: EntryId::new(id).unwrap(),
            slug: Slug::new(slug).unwrap(),
            title: EntryTitle::new("Faster exports").unwrap(),
            tag: Some(EntryTag::new("Improvement").unwrap()),
            published_at: DateTime::from_timestamp(id as i64, 0).unwrap().naive_utc(),
            body: RichTextDocument::from_json(
                r#"[{"_type":"block","style":"normal","children":[{"_type":"span","text":"CSV exports are 4x faster."}]}]"#,
            )
            .unwrap(),
        }
    }

    #[test]
    fn renders_entries_newest_first() {
        let repo = TestRepository::default()
            .with_entries(vec![sample_entry(1, "one"), sample_entry(2, "two")]);

        let page = show_changelog(1, &repo).unwrap();
        assert_eq!(page.entries.len(), 2);
        assert_eq!(page.entries[0].slug, "two");
        assert!(page.entries[0].body_html.contains("4x faster"));
    }

    #[test]
    fn single_page_shows_no_pagination() {
        let repo = TestRepository::default().with_entries(vec![sample_entry(1, "one")]);

        let page = show_changelog(1, &repo).unwrap();
        assert!(page.pagination.is_none());
    }
}
