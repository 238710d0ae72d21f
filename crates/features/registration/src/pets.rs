use crate::clock::Clock;
use crate::error::RegistrationError;
use crate::ports::{CatalogStore, PetStore};
use paw_domain::models::{Breed, Pet, PetId, PetType};
use std::cmp::Reverse;
use std::sync::Arc;

/// A registered pet together with what is needed to show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetSummary {
    pub pet: Pet,
    pub pet_type: Option<PetType>,
    pub breed: Option<Breed>,
    /// Whole years on the clock's current date.
    pub age: Option<u32>,
}

impl PetSummary {
    #[must_use]
    pub fn breed_label(&self) -> Option<&str> {
        self.pet.breed_label(self.breed.as_ref())
    }
}

/// Read side of the registered pets.
#[derive(Debug, Clone)]
pub struct PetQueries {
    pets: Arc<dyn PetStore>,
    catalog: Arc<dyn CatalogStore>,
    clock: Arc<dyn Clock>,
}

impl PetQueries {
    #[must_use]
    pub fn new(
        pets: Arc<dyn PetStore>,
        catalog: Arc<dyn CatalogStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { pets, catalog, clock }
    }

    /// Every pet, newest first.
    #[must_use]
    pub fn list_pets(&self) -> Vec<Pet> {
        newest_first(self.pets.list())
    }

    /// Pets of a dangerous breed, newest first.
    #[must_use]
    pub fn list_dangerous_pets(&self) -> Vec<Pet> {
        let mut pets = self.pets.list();
        pets.retain(|pet| pet.is_dangerous_animal);
        newest_first(pets)
    }

    /// Pets of the named type (any case), newest first. Unknown names match nothing.
    #[must_use]
    pub fn list_pets_by_type_name(&self, name: &str) -> Vec<Pet> {
        let Some(pet_type) = self.catalog.find_type_by_name(name) else {
            return Vec::new();
        };
        let mut pets = self.pets.list();
        pets.retain(|pet| pet.type_id == pet_type.id);
        newest_first(pets)
    }

    /// # Errors
    /// [`RegistrationError::PetNotFound`] for an unknown id.
    pub fn find_pet(&self, id: PetId) -> Result<Pet, RegistrationError> {
        self.pets.find(id).ok_or(RegistrationError::PetNotFound { id })
    }

    /// The pet with its type, breed and current age resolved.
    ///
    /// # Errors
    /// [`RegistrationError::PetNotFound`] for an unknown id.
    pub fn summary(&self, id: PetId) -> Result<PetSummary, RegistrationError> {
        let pet = self.find_pet(id)?;
        let pet_type = self.catalog.find_type(pet.type_id);
        let breed = pet.breed_id.and_then(|id| self.catalog.find_breed(id));
        let age = pet.age_on(self.clock.today());
        Ok(PetSummary { pet, pet_type, breed, age })
    }
}

fn newest_first(mut pets: Vec<Pet>) -> Vec<Pet> {
    pets.sort_by_key(|pet| Reverse((pet.created_at, pet.id)));
    pets
}
