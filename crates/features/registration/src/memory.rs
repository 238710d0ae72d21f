//! In-process adapters for the collaborator ports, backed by `paw-store`.

use crate::error::{RegistrationError, RegistrationErrorExt};
use crate::ports::{CatalogStore, PetStore, SessionStore};
use paw_domain::config::RegistrationConfig;
use paw_domain::models::{
    Breed, BreedId, NewPet, Pet, PetId, PetType, PetTypeId, RegistrationDraft,
};
use paw_store::{Record, SessionCache, StoreError, Table};
use std::time::Duration;

#[derive(Debug, Clone)]
struct TypeRow(PetType);

impl Record for TypeRow {
    fn unique_key(&self) -> Option<String> {
        Some(type_key(&self.0.name))
    }
}

#[derive(Debug, Clone)]
struct BreedRow(Breed);

impl Record for BreedRow {
    fn unique_key(&self) -> Option<String> {
        Some(breed_key(self.0.pet_type_id, &self.0.name))
    }
}

#[derive(Debug, Clone)]
struct PetRow(Pet);

impl Record for PetRow {}

fn type_key(name: &str) -> String {
    name.trim().to_lowercase()
}

fn breed_key(type_id: PetTypeId, name: &str) -> String {
    format!("{type_id}/{}", name.trim().to_lowercase())
}

/// Pet types and breeds held in memory.
#[derive(Debug)]
pub struct MemoryCatalog {
    types: Table<TypeRow>,
    breeds: Table<BreedRow>,
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self { types: Table::new("pet_types"), breeds: Table::new("breeds") }
    }

    /// Adds a pet type. Names are unique, ignoring case.
    ///
    /// # Errors
    /// Returns [`RegistrationError::Store`] wrapping [`StoreError::Conflict`]
    /// when the name is already taken, or [`RegistrationError::Seed`] for a
    /// blank name.
    pub fn add_type(&self, name: &str, description: &str) -> Result<PetType, RegistrationError> {
        let name = non_blank(name, "Pet type")?;
        let row = self
            .types
            .insert_with(|id| {
                TypeRow(PetType {
                    id: PetTypeId(id),
                    name: name.to_owned(),
                    description: description.to_owned(),
                })
            })
            .context(format!("Adding pet type '{name}'"))?;
        Ok(row.0)
    }

    /// Adds a breed to an existing type. Names are unique per type, ignoring case.
    ///
    /// # Errors
    /// [`RegistrationError::TypeNotFound`] for an unknown type, otherwise as
    /// [`MemoryCatalog::add_type`].
    pub fn add_breed(
        &self,
        type_id: PetTypeId,
        name: &str,
        is_dangerous: bool,
        description: &str,
    ) -> Result<Breed, RegistrationError> {
        if !self.types.contains(type_id.get()) {
            return Err(RegistrationError::TypeNotFound { id: type_id });
        }
        let name = non_blank(name, "Breed")?;
        let row = self
            .breeds
            .insert_with(|id| {
                BreedRow(Breed {
                    id: BreedId(id),
                    name: name.to_owned(),
                    is_dangerous,
                    description: description.to_owned(),
                    pet_type_id: type_id,
                })
            })
            .context(format!("Adding breed '{name}'"))?;
        Ok(row.0)
    }
}

fn non_blank<'a>(name: &'a str, what: &str) -> Result<&'a str, RegistrationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RegistrationError::Seed {
            message: format!("{what} name cannot be empty").into(),
            context: None,
        });
    }
    Ok(name)
}

impl CatalogStore for MemoryCatalog {
    fn find_type(&self, id: PetTypeId) -> Option<PetType> {
        self.types.get(id.get()).map(|row| row.0)
    }

    fn find_breed(&self, id: BreedId) -> Option<Breed> {
        self.breeds.get(id.get()).map(|row| row.0)
    }

    fn list_types_ordered(&self) -> Vec<PetType> {
        self.types
            .select(|_| true, |a, b| a.0.name.cmp(&b.0.name).then(a.0.id.cmp(&b.0.id)))
            .into_iter()
            .map(|row| row.0)
            .collect()
    }

    fn list_breeds_by_type(&self, type_id: PetTypeId) -> Vec<Breed> {
        self.breeds
            .select(
                |row| row.0.pet_type_id == type_id,
                |a, b| a.0.name.cmp(&b.0.name).then(a.0.id.cmp(&b.0.id)),
            )
            .into_iter()
            .map(|row| row.0)
            .collect()
    }

    fn find_type_by_name(&self, name: &str) -> Option<PetType> {
        self.types.get_unique(&type_key(name)).map(|row| row.0)
    }

    fn find_breed_by_name(&self, name: &str, type_id: PetTypeId) -> Option<Breed> {
        self.breeds.get_unique(&breed_key(type_id, name)).map(|row| row.0)
    }
}

/// Registered pets held in memory.
#[derive(Debug)]
pub struct MemoryPets {
    pets: Table<PetRow>,
}

impl Default for MemoryPets {
    fn default() -> Self {
        Self { pets: Table::new("pets") }
    }
}

impl PetStore for MemoryPets {
    fn insert(&self, pet: NewPet) -> Result<PetId, StoreError> {
        let row = self.pets.insert_with(|id| PetRow(pet.with_id(PetId(id))))?;
        Ok(row.0.id)
    }

    fn find(&self, id: PetId) -> Option<Pet> {
        self.pets.get(id.get()).map(|row| row.0)
    }

    fn list(&self) -> Vec<Pet> {
        let rows = self.pets.select(|_| true, |a, b| a.0.id.cmp(&b.0.id));
        rows.into_iter().map(|row| row.0).collect()
    }
}

/// Drafts kept in a bounded cache that forgets idle sessions.
#[derive(Debug)]
pub struct MemorySessions {
    cache: SessionCache<RegistrationDraft>,
}

impl MemorySessions {
    /// # Errors
    /// Returns [`RegistrationError::Store`] for a zero TTL or capacity.
    pub fn new(config: &RegistrationConfig) -> Result<Self, RegistrationError> {
        let cache = SessionCache::<RegistrationDraft>::builder()
            .max_capacity(config.session_capacity)
            .time_to_idle(Duration::from_secs(config.session_ttl_seconds))
            .build()
            .context("Creating the registration session cache")?;
        Ok(Self { cache })
    }
}

impl SessionStore for MemorySessions {
    fn get(&self, key: &str) -> Option<RegistrationDraft> {
        self.cache.get(key)
    }

    fn set(&self, key: &str, draft: RegistrationDraft) {
        self.cache.insert(key, draft);
    }

    fn clear(&self, key: &str) {
        self.cache.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names_are_unique_ignoring_case() {
        let catalog = MemoryCatalog::new();
        catalog.add_type("Dog", "Domestic dog breeds").unwrap();

        let err = catalog.add_type(" dog ", "again").unwrap_err();
        assert!(matches!(
            err,
            RegistrationError::Store { source: StoreError::Conflict { .. }, .. }
        ));
        assert_eq!(catalog.list_types_ordered().len(), 1);
    }

    #[test]
    fn breeds_are_listed_by_name_within_their_type() {
        let catalog = MemoryCatalog::new();
        let dog = catalog.add_type("Dog", "").unwrap();
        let cat = catalog.add_type("Cat", "").unwrap();
        catalog.add_breed(dog.id, "Poodle", false, "").unwrap();
        catalog.add_breed(dog.id, "Beagle", false, "").unwrap();
        catalog.add_breed(cat.id, "Persian", false, "").unwrap();

        let names: Vec<_> =
            catalog.list_breeds_by_type(dog.id).into_iter().map(|b| b.name).collect();
        assert_eq!(names, ["Beagle", "Poodle"]);

        let types: Vec<_> = catalog.list_types_ordered().into_iter().map(|t| t.name).collect();
        assert_eq!(types, ["Cat", "Dog"]);
        assert!(catalog.list_breeds_by_type(PetTypeId(42)).is_empty());
    }

    #[test]
    fn same_breed_name_may_exist_under_two_types() {
        let catalog = MemoryCatalog::new();
        let dog = catalog.add_type("Dog", "").unwrap();
        let cat = catalog.add_type("Cat", "").unwrap();
        catalog.add_breed(dog.id, "Mixed", false, "").unwrap();
        catalog.add_breed(cat.id, "Mixed", false, "").unwrap();

        assert!(catalog.add_breed(dog.id, "MIXED", false, "").is_err());
        let mixed = catalog.find_breed_by_name("mixed", cat.id);
        assert_eq!(mixed.map(|b| b.pet_type_id), Some(cat.id));
    }

    #[test]
    fn breeds_need_an_existing_type() {
        let catalog = MemoryCatalog::new();
        let err = catalog.add_breed(PetTypeId(3), "Beagle", false, "").unwrap_err();
        assert!(matches!(err, RegistrationError::TypeNotFound { id } if id == PetTypeId(3)));
    }

    #[test]
    fn sessions_get_set_clear() {
        let sessions = MemorySessions::new(&RegistrationConfig::default()).unwrap();
        assert!(sessions.get("k").is_none());

        let draft = RegistrationDraft { name: Some("Rex".to_owned()), ..Default::default() };
        sessions.set("k", draft.clone());
        assert_eq!(sessions.get("k"), Some(draft));

        sessions.clear("k");
        assert!(sessions.get("k").is_none());
    }

    #[test]
    fn zero_ttl_is_rejected() {
        let config = RegistrationConfig { session_ttl_seconds: 0, ..Default::default() };
        assert!(matches!(MemorySessions::new(&config), Err(RegistrationError::Store { .. })));
    }
}
