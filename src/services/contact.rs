use crate::forms::contact::ContactFormPayload;
use crate::repository::ContactWriter;

use super::ServiceResult;

/// Persists a validated contact-sales request.
///
/// Returns `Ok(true)` on success and `Ok(false)` when the store rejected the
/// insert; the route translates both into flash messages.
pub fn submit_contact_request<R>(payload: ContactFormPayload, repo: &R) -> ServiceResult<bool>
where
    R: ContactWriter,
{
    let request = payload.into_new_request();
    match repo.create_contact_request(&request) {
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to store contact request: {e}");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::contact::ContactForm;
    use crate::repository::test::TestRepository;

    #[test]
    fn stores_valid_request() {
        let repo = TestRepository::default();
        let form = ContactForm {
            name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
            company: Some("Acme".to_string()),
            team_size: Some("11-50".to_string()),
            message: "Tell me about pricing.".to_string(),
        };
        let payload = form.try_into().unwrap();

        assert!(submit_contact_request(payload, &repo).unwrap());
    }
}
