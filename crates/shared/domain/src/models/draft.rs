use super::{BreedId, PetTypeId, Sex};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Position of a registration in the wizard.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Step {
    #[default]
    Step1,
    Step2,
    Step3,
    Completed,
}

/// What the owner said about the breed at step 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BreedChoice {
    #[serde(alias = "know_breed")]
    #[strum(to_string = "knowsBreed", serialize = "know_breed")]
    KnowsBreed,
    #[serde(alias = "dont_know")]
    #[strum(to_string = "dontKnow", serialize = "dont_know")]
    DontKnow,
    #[strum(to_string = "mix")]
    Mix,
    #[strum(to_string = "custom")]
    Custom,
    #[serde(alias = "cant_find")]
    #[strum(to_string = "cantFind", serialize = "cant_find")]
    CantFind,
}

/// The partially filled registration carried between steps.
///
/// Lives only in the session store; it is discarded on completion or restart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDraft {
    pub step: Step,
    pub name: Option<String>,
    pub type_id: Option<PetTypeId>,
    pub breed_choice: Option<BreedChoice>,
    pub breed_id: Option<BreedId>,
    pub custom_breed_label: Option<String>,
    pub knows_birth_date: Option<bool>,
    pub date_of_birth: Option<NaiveDate>,
    pub approximate_age: Option<u32>,
    pub sex: Option<Sex>,
}

impl RegistrationDraft {
    /// Whether step 1 has been filled in (a non-empty name and a type).
    #[must_use]
    pub fn has_identity(&self) -> bool {
        self.name.as_deref().is_some_and(|name| !name.is_empty()) && self.type_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn breed_choice_accepts_both_spellings() {
        assert_eq!(BreedChoice::from_str("knowsBreed").unwrap(), BreedChoice::KnowsBreed);
        assert_eq!(BreedChoice::from_str("know_breed").unwrap(), BreedChoice::KnowsBreed);
        assert_eq!(BreedChoice::from_str("dont_know").unwrap(), BreedChoice::DontKnow);
        assert_eq!(BreedChoice::from_str("cant_find").unwrap(), BreedChoice::CantFind);
        assert!(BreedChoice::from_str("labrador").is_err());
        assert_eq!(BreedChoice::DontKnow.to_string(), "dontKnow");
    }

    #[test]
    fn step_round_trips_through_text() {
        assert_eq!(Step::from_str("Step2").unwrap(), Step::Step2);
        assert_eq!(Step::Completed.to_string(), "completed");
        assert_eq!(serde_json::to_value(Step::Step3).unwrap(), "step3");
    }

    #[test]
    fn identity_requires_name_and_type() {
        let mut draft = RegistrationDraft::default();
        assert!(!draft.has_identity());

        draft.name = Some(String::new());
        draft.type_id = Some(PetTypeId(1));
        assert!(!draft.has_identity());

        draft.name = Some("Fluffy".to_owned());
        assert!(draft.has_identity());
    }
}
