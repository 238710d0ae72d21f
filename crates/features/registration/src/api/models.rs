//! Wire shapes of the registration routes.

use crate::forms::{Step1Form, Step2Form, Step3Form};
use crate::machine::StepOutcome;
use crate::options::FormOptions;
use crate::pets::PetSummary;
use chrono::{DateTime, NaiveDate, Utc};
use paw_derive::api_model;
use paw_domain::models::{Breed, BreedId, Pet, PetType, PetTypeId, RegistrationDraft, Step};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[api_model]
pub struct BeginResponse {
    pub session_key: String,
    #[schema(value_type = String, example = "step1")]
    pub step: Step,
}

#[api_model]
pub struct StepResponse {
    /// `advanced` or `redirect`.
    pub outcome: String,
    #[schema(value_type = String, example = "step2")]
    pub step: Step,
}

impl StepResponse {
    pub(super) fn from_outcome(outcome: &StepOutcome) -> Self {
        let label = match outcome {
            StepOutcome::Redirect { .. } => "redirect",
            _ => "advanced",
        };
        Self { outcome: label.to_owned(), step: outcome.step() }
    }
}

#[api_model]
pub struct EnterStepResponse {
    #[schema(value_type = String, example = "step1")]
    pub step: Step,
}

#[api_model]
pub struct DraftResponse {
    #[schema(value_type = String, example = "step2")]
    pub step: Step,
    #[schema(value_type = Object)]
    pub draft: RegistrationDraft,
}

#[api_model]
pub struct CompletedResponse {
    pub pet_id: u64,
}

#[api_model]
pub struct Step1Request {
    pub name: Option<String>,
    pub type_id: Option<u64>,
}

impl From<Step1Request> for Step1Form {
    fn from(req: Step1Request) -> Self {
        Self { name: req.name, type_id: req.type_id.map(PetTypeId) }
    }
}

#[api_model]
pub struct Step2Request {
    /// `knowsBreed`, `dontKnow`, `mix`, `custom` or `cantFind`.
    pub breed_choice: Option<String>,
    pub breed_id: Option<u64>,
    pub custom_text: Option<String>,
}

impl From<Step2Request> for Step2Form {
    fn from(req: Step2Request) -> Self {
        Self {
            breed_choice: req.breed_choice,
            breed_id: req.breed_id.map(BreedId),
            custom_text: req.custom_text,
        }
    }
}

/// Picker values arrive as numbers, hand-typed ones as text.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum AgeInput {
    Number(i64),
    Text(String),
}

#[api_model]
pub struct Step3Request {
    /// `male`, `female` or `unknown`.
    pub sex: Option<String>,
    /// `yes` or `no`.
    pub knows_birth_date: Option<String>,
    /// `YYYY-MM-DD`.
    pub date_of_birth: Option<String>,
    pub approximate_age: Option<AgeInput>,
}

impl From<Step3Request> for Step3Form {
    fn from(req: Step3Request) -> Self {
        Self {
            sex: req.sex,
            knows_birth_date: req.knows_birth_date,
            date_of_birth: req.date_of_birth,
            approximate_age: req.approximate_age.map(|age| match age {
                AgeInput::Number(n) => n.to_string(),
                AgeInput::Text(text) => text,
            }),
        }
    }
}

#[api_model]
pub struct SexOption {
    pub value: String,
    pub label: String,
}

#[api_model]
pub struct OptionsResponse {
    pub ages: Vec<u32>,
    pub sexes: Vec<SexOption>,
}

impl From<FormOptions> for OptionsResponse {
    fn from(options: FormOptions) -> Self {
        Self {
            ages: options.age_choices().collect(),
            sexes: options
                .sex_choices()
                .into_iter()
                .map(|c| SexOption { value: c.value.to_string(), label: c.label.to_owned() })
                .collect(),
        }
    }
}

#[api_model]
pub struct PetTypeView {
    pub id: u64,
    pub name: String,
    pub description: String,
}

impl From<PetType> for PetTypeView {
    fn from(t: PetType) -> Self {
        Self { id: t.id.get(), name: t.name, description: t.description }
    }
}

#[api_model]
pub struct BreedView {
    pub id: u64,
    pub name: String,
    pub is_dangerous: bool,
}

impl From<Breed> for BreedView {
    fn from(b: Breed) -> Self {
        Self { id: b.id.get(), name: b.name, is_dangerous: b.is_dangerous }
    }
}

#[api_model]
pub struct DangerResponse {
    pub is_dangerous: bool,
}

#[api_model]
pub struct PetView {
    pub id: u64,
    pub name: String,
    pub type_id: u64,
    pub breed_id: Option<u64>,
    pub custom_breed_label: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub approximate_age: Option<u32>,
    /// `male`, `female` or `unknown`.
    pub sex: String,
    pub is_dangerous_animal: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Pet> for PetView {
    fn from(pet: Pet) -> Self {
        Self {
            id: pet.id.get(),
            name: pet.name,
            type_id: pet.type_id.get(),
            breed_id: pet.breed_id.map(BreedId::get),
            custom_breed_label: pet.custom_breed_label,
            date_of_birth: pet.date_of_birth,
            approximate_age: pet.approximate_age,
            sex: pet.sex.to_string(),
            is_dangerous_animal: pet.is_dangerous_animal,
            created_at: pet.created_at,
        }
    }
}

#[api_model]
pub struct PetSummaryView {
    pub pet: PetView,
    pub type_name: Option<String>,
    pub breed_label: Option<String>,
    /// Whole years today.
    pub age: Option<u32>,
}

impl From<PetSummary> for PetSummaryView {
    fn from(summary: PetSummary) -> Self {
        let breed_label = summary.breed_label().map(str::to_owned);
        Self {
            type_name: summary.pet_type.map(|t| t.name),
            breed_label,
            age: summary.age,
            pet: summary.pet.into(),
        }
    }
}

/// Filters of the pet list.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PetsQuery {
    /// Only pets of a dangerous breed.
    pub dangerous: Option<bool>,
    /// Pet type name, any case.
    #[serde(rename = "type")]
    pub pet_type: Option<String>,
}
