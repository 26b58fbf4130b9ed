//! Error conversion glue between layer-specific error types.
//!
//! The domain layer must not depend on service error types, so the
//! conversions servicing the web layer live here instead.

use crate::domain::types::TypeConstraintError;
use crate::forms::contact::ContactFormError;
use crate::services::errors::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<ContactFormError> for ServiceError {
    fn from(val: ContactFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
