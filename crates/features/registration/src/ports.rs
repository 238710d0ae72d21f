//! Collaborators the registration core talks to.
//!
//! Every method is synchronous and scoped to a single call; implementations
//! provide their own atomicity per key or per insert.

use paw_domain::models::{Breed, BreedId, NewPet, Pet, PetId, PetType, PetTypeId, RegistrationDraft};
use paw_store::StoreError;
use std::fmt::Debug;

/// Read-only pet type and breed reference data.
pub trait CatalogStore: Debug + Send + Sync {
    fn find_type(&self, id: PetTypeId) -> Option<PetType>;

    fn find_breed(&self, id: BreedId) -> Option<Breed>;

    /// All pet types ordered by name.
    fn list_types_ordered(&self) -> Vec<PetType>;

    /// Breeds of one type ordered by name; empty for an unknown type.
    fn list_breeds_by_type(&self, type_id: PetTypeId) -> Vec<Breed>;

    /// Case-insensitive lookup by name.
    fn find_type_by_name(&self, name: &str) -> Option<PetType> {
        let name = name.trim();
        self.list_types_ordered().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Case-insensitive lookup of a breed within one type.
    fn find_breed_by_name(&self, name: &str, type_id: PetTypeId) -> Option<Breed> {
        let name = name.trim();
        self.list_breeds_by_type(type_id).into_iter().find(|b| b.name.eq_ignore_ascii_case(name))
    }
}

/// Durable pet records.
pub trait PetStore: Debug + Send + Sync {
    /// Stores the pet and returns its generated identifier.
    ///
    /// # Errors
    /// Returns a [`StoreError`] when the backend refuses the write.
    fn insert(&self, pet: NewPet) -> Result<PetId, StoreError>;

    fn find(&self, id: PetId) -> Option<Pet>;

    /// Every stored pet, in no particular order.
    fn list(&self) -> Vec<Pet>;
}

/// Draft storage keyed by an opaque session key.
pub trait SessionStore: Debug + Send + Sync {
    fn get(&self, key: &str) -> Option<RegistrationDraft>;

    fn set(&self, key: &str, draft: RegistrationDraft);

    fn clear(&self, key: &str);
}
