//! HTTP routes of the registration slice.

mod catalog;
pub mod models;
mod pets;
mod wizard;

use crate::RegistrationError;
use paw_kernel::server::{ApiError, ApiState};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Every route of the slice; expects a [`Registration`](crate::Registration)
/// slice in the state.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(wizard::begin))
        .routes(routes!(wizard::options))
        .routes(routes!(wizard::show, wizard::cancel))
        .routes(routes!(wizard::enter_step))
        .routes(routes!(wizard::submit_step1))
        .routes(routes!(wizard::submit_step2))
        .routes(routes!(wizard::submit_step3))
        .routes(routes!(catalog::list_pet_types))
        .routes(routes!(catalog::list_breeds))
        .routes(routes!(catalog::breed_danger))
        .routes(routes!(pets::list_pets))
        .routes(routes!(pets::show_pet))
}

impl From<RegistrationError> for ApiError {
    fn from(err: RegistrationError) -> Self {
        match err {
            RegistrationError::Validation { report } => {
                let details = serde_json::json!({ "violations": report.violations() });
                Self::validation(report.to_string()).with_details(details)
            },
            err if err.is_not_found() => Self::not_found(err.to_string()),
            err => Self::internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::ValidationReport;
    use axum::http::StatusCode;
    use paw_domain::models::{BreedId, PetId};

    #[test]
    fn errors_map_to_statuses() {
        let mut report = ValidationReport::default();
        report.push("name", "Name is required");

        let err = ApiError::from(RegistrationError::from(report));
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.code(), "VALIDATION_ERROR");

        let err = ApiError::from(RegistrationError::PetNotFound { id: PetId(4) });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "NOT_FOUND (404): Pet with ID 4 not found");

        let err = ApiError::from(RegistrationError::BreedNotFound { id: BreedId(4) });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err = ApiError::from(RegistrationError::from("lost the draft"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
