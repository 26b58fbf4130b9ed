use chrono::Utc;
use diesel::prelude::*;

use crate::domain::changelog::{ChangelogEntry, NewChangelogEntry};
use crate::domain::types::EntryId;
use crate::models::changelog::{
    ChangelogEntry as DbEntry, NewChangelogEntry as DbNewEntry,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ChangelogListQuery, ChangelogReader, ChangelogWriter, DieselRepository};

impl ChangelogReader for DieselRepository {
    fn list_entries(
        &self,
        query: ChangelogListQuery,
    ) -> RepositoryResult<(usize, Vec<ChangelogEntry>)> {
        use crate::schema::changelog_entries;

        let mut conn = self.conn()?;

        let total = changelog_entries::table
            .count()
            .get_result::<i64>(&mut conn)? as usize;

        let mut items = changelog_entries::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let items = items
            .order((
                changelog_entries::published_at.desc(),
                changelog_entries::id.desc(),
            ))
            .load::<DbEntry>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<ChangelogEntry>, _>>()?;

        Ok((total, items))
    }
}

impl ChangelogWriter for DieselRepository {
    fn create_entry(&self, entry: &NewChangelogEntry) -> RepositoryResult<EntryId> {
        use crate::schema::changelog_entries;

        let mut conn = self.conn()?;
        let db_entry = DbNewEntry::from_domain(entry.clone(), Utc::now().naive_utc());

        let id: i32 = diesel::insert_into(changelog_entries::table)
            .values(db_entry)
            .returning(changelog_entries::id)
            .get_result(&mut conn)?;

        Ok(EntryId::new(id)?)
    }
}
