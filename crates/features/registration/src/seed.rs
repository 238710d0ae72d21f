//! Catalog reference data: the built-in set or a JSON seed file.

use crate::error::RegistrationError;
use crate::memory::MemoryCatalog;
use paw_domain::config::CatalogSeed;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Seed file layout:
///
/// ```json
/// { "types": [{ "name": "Dog", "description": "...",
///               "breeds": [{ "name": "Beagle", "dangerous": false }] }] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedCatalog {
    pub types: Vec<SeedType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedType {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub breeds: Vec<SeedBreed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedBreed {
    pub name: String,
    #[serde(default)]
    pub dangerous: bool,
    #[serde(default)]
    pub description: Option<String>,
}

const DOG_BREEDS: &[(&str, bool)] = &[
    ("Labrador Retriever", false),
    ("Golden Retriever", false),
    ("German Shepherd", false),
    ("Bulldog", false),
    ("Poodle", false),
    ("Beagle", false),
    ("Rottweiler", false),
    ("Yorkshire Terrier", false),
    ("Dachshund", false),
    ("Siberian Husky", false),
    ("Boxer", false),
    ("Border Collie", false),
    ("Pitbull", true),
    ("Mastiff", true),
    ("American Staffordshire Terrier", true),
    ("Doberman Pinscher", true),
];

const CAT_BREEDS: &[&str] = &[
    "Persian",
    "Maine Coon",
    "British Shorthair",
    "Ragdoll",
    "Bengal",
    "Abyssinian",
    "Birman",
    "Oriental Shorthair",
    "American Shorthair",
    "Scottish Fold",
    "Sphynx",
    "Russian Blue",
    "Siamese",
    "Norwegian Forest Cat",
    "Exotic Shorthair",
];

impl SeedCatalog {
    /// Dogs (four dangerous breeds) and cats.
    #[must_use]
    pub fn builtin() -> Self {
        let breed = |name: &str, dangerous| SeedBreed {
            name: name.to_owned(),
            dangerous,
            description: None,
        };
        Self {
            types: vec![
                SeedType {
                    name: "Dog".to_owned(),
                    description: "Domestic dog breeds".to_owned(),
                    breeds: DOG_BREEDS.iter().map(|&(name, d)| breed(name, d)).collect(),
                },
                SeedType {
                    name: "Cat".to_owned(),
                    description: "Domestic cat breeds".to_owned(),
                    breeds: CAT_BREEDS.iter().map(|&name| breed(name, false)).collect(),
                },
            ],
        }
    }

    /// # Errors
    /// Returns [`RegistrationError::Seed`] when the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, RegistrationError> {
        let raw = fs::read_to_string(path).map_err(|e| RegistrationError::Seed {
            message: e.to_string().into(),
            context: Some(format!("Reading {}", path.display()).into()),
        })?;
        serde_json::from_str(&raw).map_err(|e| RegistrationError::Seed {
            message: e.to_string().into(),
            context: Some(format!("Parsing {}", path.display()).into()),
        })
    }

    /// Resolves the configured seed source.
    ///
    /// # Errors
    /// See [`SeedCatalog::from_file`].
    pub fn load(seed: &CatalogSeed) -> Result<Self, RegistrationError> {
        match seed {
            CatalogSeed::Builtin => Ok(Self::builtin()),
            CatalogSeed::Empty => Ok(Self::default()),
            CatalogSeed::File(path) => Self::from_file(path),
        }
    }

    /// Inserts every type and breed, in file order.
    ///
    /// # Errors
    /// Fails on the first duplicate or blank name.
    pub fn apply(&self, catalog: &MemoryCatalog) -> Result<(), RegistrationError> {
        let mut breeds = 0_usize;
        for seed_type in &self.types {
            let pet_type = catalog.add_type(&seed_type.name, &seed_type.description)?;
            for seed_breed in &seed_type.breeds {
                catalog.add_breed(
                    pet_type.id,
                    &seed_breed.name,
                    seed_breed.dangerous,
                    seed_breed.description.as_deref().unwrap_or_default(),
                )?;
                breeds += 1;
            }
        }

        info!(types = self.types.len(), breeds, "Catalog seeded");
        Ok(())
    }
}
