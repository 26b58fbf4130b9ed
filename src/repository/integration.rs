use chrono::Utc;
use diesel::prelude::*;

use crate::domain::integration::{Integration, NewIntegration};
use crate::domain::types::IntegrationId;
use crate::models::integration::{
    Integration as DbIntegration, NewIntegration as DbNewIntegration,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    DieselRepository, IntegrationListQuery, IntegrationReader, IntegrationWriter,
};

impl IntegrationReader for DieselRepository {
    fn list_integrations(&self, query: IntegrationListQuery) -> RepositoryResult<Vec<Integration>> {
        use crate::schema::integrations;

        let mut conn = self.conn()?;

        let mut items = integrations::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(category) = &query.category {
            items = items.filter(integrations::category.eq(category));
        }

        let items = items
            .order(integrations::name.asc())
            .load::<DbIntegration>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Integration>, _>>()?;

        Ok(items)
    }
}

impl IntegrationWriter for DieselRepository {
    fn create_integration(&self, integration: &NewIntegration) -> RepositoryResult<IntegrationId> {
        use crate::schema::integrations;

        let mut conn = self.conn()?;
        let db_integration =
            DbNewIntegration::from_domain(integration.clone(), Utc::now().naive_utc());

        let id: i32 = diesel::insert_into(integrations::table)
            .values(db_integration)
            .returning(integrations::id)
            .get_result(&mut conn)?;

        Ok(IntegrationId::new(id)?)
    }
}
