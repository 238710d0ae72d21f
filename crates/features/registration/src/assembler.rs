use crate::clock::Clock;
use crate::error::RegistrationError;
use crate::ports::CatalogStore;
use paw_domain::models::{Breed, NewPet, RegistrationDraft, Sex};

/// A pet is dangerous exactly when its catalog breed is.
#[must_use]
pub fn derive_dangerous(breed: Option<&Breed>) -> bool {
    breed.is_some_and(|breed| breed.is_dangerous)
}

/// Builds the final pet from a completed draft.
///
/// Assembly happens entirely in memory; nothing is written until the caller
/// stores the returned [`NewPet`].
#[derive(Debug)]
pub struct PetAssembler<'a> {
    catalog: &'a dyn CatalogStore,
    clock: &'a dyn Clock,
}

impl<'a> PetAssembler<'a> {
    #[must_use]
    pub fn new(catalog: &'a dyn CatalogStore, clock: &'a dyn Clock) -> Self {
        Self { catalog, clock }
    }

    /// # Errors
    ///
    /// * [`RegistrationError::Internal`] when the draft lacks step-1 data.
    /// * [`RegistrationError::TypeNotFound`] / [`RegistrationError::BreedNotFound`]
    ///   when the draft references catalog entries that do not exist.
    pub fn assemble(
        &self,
        draft: &RegistrationDraft,
        sex: Sex,
    ) -> Result<NewPet, RegistrationError> {
        let (Some(name), Some(type_id)) = (draft.name.as_ref(), draft.type_id) else {
            return Err("draft is missing its name or pet type".into());
        };

        let pet_type =
            self.catalog.find_type(type_id).ok_or(RegistrationError::TypeNotFound { id: type_id })?;

        let breed = draft
            .breed_id
            .map(|id| self.catalog.find_breed(id).ok_or(RegistrationError::BreedNotFound { id }))
            .transpose()?;

        let custom_breed_label =
            if breed.is_some() { None } else { draft.custom_breed_label.clone() };
        let approximate_age =
            if draft.date_of_birth.is_some() { None } else { draft.approximate_age };

        Ok(NewPet {
            name: name.clone(),
            type_id: pet_type.id,
            breed_id: breed.as_ref().map(|breed| breed.id),
            custom_breed_label,
            date_of_birth: draft.date_of_birth,
            approximate_age,
            sex,
            is_dangerous_animal: derive_dangerous(breed.as_ref()),
            created_at: self.clock.now(),
        })
    }
}
