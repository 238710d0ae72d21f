//! Raw step submissions, exactly as the caller sent them.
//!
//! Text stays unparsed here; validators and resolvers decide what it means.

use paw_domain::models::{BreedId, PetTypeId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Step1Form {
    pub name: Option<String>,
    pub type_id: Option<PetTypeId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Step2Form {
    /// `knowsBreed`, `dontKnow`, `mix`, `custom` or `cantFind` (snake_case accepted).
    pub breed_choice: Option<String>,
    pub breed_id: Option<BreedId>,
    pub custom_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Step3Form {
    pub sex: Option<String>,
    /// `yes` or `no`, any case.
    pub knows_birth_date: Option<String>,
    /// `YYYY-MM-DD`.
    pub date_of_birth: Option<String>,
    pub approximate_age: Option<String>,
}
