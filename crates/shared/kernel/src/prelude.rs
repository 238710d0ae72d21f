//! Common imports for slice crates.

pub use crate::config::{ConfigError, ConfigErrorExt, load_config};
pub use crate::{safe_nanoid, session_key};
pub use paw_domain::config::ApiConfig;
pub use paw_domain::models::{
    Breed, BreedChoice, BreedId, NewPet, Pet, PetId, PetType, PetTypeId, RegistrationDraft, Sex,
    Step,
};
pub use paw_domain::registry::{FeatureSlice, InitializedSlice};

#[cfg(feature = "server")]
pub use crate::server::{ApiError, ApiResult, ApiState, ErrorBody, ErrorDetail, extract_json};
