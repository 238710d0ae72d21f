use crate::validate::ValidationReport;
use paw_domain::models::{BreedId, PetId, PetTypeId};
use paw_store::StoreError;
use std::borrow::Cow;

/// A specialized [`RegistrationError`] enum of this crate.
#[paw_derive::paw_error]
pub enum RegistrationError {
    /// Submitted values were rejected; the report lists each field.
    #[error("Validation failed: {report}")]
    Validation { report: ValidationReport },

    #[error("Pet type with ID {id} not found")]
    TypeNotFound { id: PetTypeId },

    #[error("Breed with ID {id} not found")]
    BreedNotFound { id: BreedId },

    #[error("Pet with ID {id} not found")]
    PetNotFound { id: PetId },

    #[error("Storage error{}: {source}", format_context(.context))]
    Store { source: StoreError, context: Option<Cow<'static, str>> },

    /// The catalog seed could not be read or parsed.
    #[error("Catalog seed error{}: {message}", format_context(.context))]
    Seed { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal registration error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl RegistrationError {
    /// Whether the error points at a record that does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::TypeNotFound { .. } | Self::BreedNotFound { .. } | Self::PetNotFound { .. }
        )
    }
}

impl From<ValidationReport> for RegistrationError {
    fn from(report: ValidationReport) -> Self {
        Self::Validation { report }
    }
}
