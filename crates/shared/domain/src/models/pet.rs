use super::{Breed, BreedId, PetId, PetTypeId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Sex {
    Male,
    Female,
    Unknown,
}

impl Sex {
    /// Human-readable label for pickers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Unknown => "Unknown",
        }
    }
}

/// A fully assembled pet that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPet {
    pub name: String,
    pub type_id: PetTypeId,
    pub breed_id: Option<BreedId>,
    pub custom_breed_label: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub approximate_age: Option<u32>,
    pub sex: Sex,
    pub is_dangerous_animal: bool,
    pub created_at: DateTime<Utc>,
}

impl NewPet {
    #[must_use]
    pub fn with_id(self, id: PetId) -> Pet {
        Pet {
            id,
            name: self.name,
            type_id: self.type_id,
            breed_id: self.breed_id,
            custom_breed_label: self.custom_breed_label,
            date_of_birth: self.date_of_birth,
            approximate_age: self.approximate_age,
            sex: self.sex,
            is_dangerous_animal: self.is_dangerous_animal,
            created_at: self.created_at,
        }
    }
}

/// A registered pet.
///
/// At most one of `breed_id`/`custom_breed_label` and at most one of
/// `date_of_birth`/`approximate_age` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    pub type_id: PetTypeId,
    pub breed_id: Option<BreedId>,
    pub custom_breed_label: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub approximate_age: Option<u32>,
    pub sex: Sex,
    pub is_dangerous_animal: bool,
    pub created_at: DateTime<Utc>,
}

impl Pet {
    /// Age in whole years on `today`.
    ///
    /// Computed from the birth date when known (a birth date after `today`
    /// counts as `0`), otherwise the approximate age as entered.
    #[must_use]
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        match self.date_of_birth {
            Some(born) => Some(today.years_since(born).unwrap_or(0)),
            None => self.approximate_age,
        }
    }

    /// Breed shown to people: the custom label, else the catalog breed name.
    #[must_use]
    pub fn breed_label<'a>(&'a self, breed: Option<&'a Breed>) -> Option<&'a str> {
        self.custom_breed_label
            .as_deref()
            .or_else(|| breed.filter(|b| Some(b.id) == self.breed_id).map(|b| b.name.as_str()))
    }
}
