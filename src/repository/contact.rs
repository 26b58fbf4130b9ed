use diesel::prelude::*;

use crate::domain::contact::NewContactRequest;
use crate::models::contact::NewContactRequest as DbNewContactRequest;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ContactWriter, DieselRepository};

impl ContactWriter for DieselRepository {
    fn create_contact_request(&self, request: &NewContactRequest) -> RepositoryResult<usize> {
        use crate::schema::contact_requests;

        let mut conn = self.conn()?;
        let db_request: DbNewContactRequest = request.clone().into();

        let affected = diesel::insert_into(contact_requests::table)
            .values(db_request)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
