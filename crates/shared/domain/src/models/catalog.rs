use super::{BreedId, PetTypeId};
use serde::{Deserialize, Serialize};

/// A kind of animal (`Dog`, `Cat`, ...). Names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetType {
    pub id: PetTypeId,
    pub name: String,
    pub description: String,
}

/// A catalog breed of one [`PetType`].
///
/// `is_dangerous` is the only source of the danger classification of a pet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breed {
    pub id: BreedId,
    pub name: String,
    pub is_dangerous: bool,
    pub description: String,
    pub pet_type_id: PetTypeId,
}
