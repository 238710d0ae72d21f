use crate::error::RegistrationError;
use crate::ports::CatalogStore;
use paw_domain::models::{Breed, BreedId, PetType, PetTypeId};
use std::sync::Arc;

/// Read side of the pet type and breed catalog.
#[derive(Debug, Clone)]
pub struct CatalogQueries {
    catalog: Arc<dyn CatalogStore>,
}

impl CatalogQueries {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogStore>) -> Self {
        Self { catalog }
    }

    /// Every pet type, ordered by name.
    #[must_use]
    pub fn list_types(&self) -> Vec<PetType> {
        self.catalog.list_types_ordered()
    }

    /// # Errors
    /// [`RegistrationError::TypeNotFound`] for an unknown id.
    pub fn find_type(&self, id: PetTypeId) -> Result<PetType, RegistrationError> {
        self.catalog.find_type(id).ok_or(RegistrationError::TypeNotFound { id })
    }

    #[must_use]
    pub fn find_type_by_name(&self, name: &str) -> Option<PetType> {
        self.catalog.find_type_by_name(name)
    }

    /// Breeds of one type, ordered by name. Unknown types have no breeds.
    #[must_use]
    pub fn breeds_for_type(&self, type_id: PetTypeId) -> Vec<Breed> {
        self.catalog.list_breeds_by_type(type_id)
    }

    #[must_use]
    pub fn dangerous_breeds_for_type(&self, type_id: PetTypeId) -> Vec<Breed> {
        let mut breeds = self.catalog.list_breeds_by_type(type_id);
        breeds.retain(|breed| breed.is_dangerous);
        breeds
    }

    /// # Errors
    /// [`RegistrationError::BreedNotFound`] for an unknown id.
    pub fn find_breed(&self, id: BreedId) -> Result<Breed, RegistrationError> {
        self.catalog.find_breed(id).ok_or(RegistrationError::BreedNotFound { id })
    }

    #[must_use]
    pub fn find_breed_by_name(&self, name: &str, type_id: PetTypeId) -> Option<Breed> {
        self.catalog.find_breed_by_name(name, type_id)
    }

    /// `false` for breeds the catalog does not know.
    #[must_use]
    pub fn is_breed_dangerous(&self, id: BreedId) -> bool {
        self.catalog.find_breed(id).is_some_and(|breed| breed.is_dangerous)
    }
}
