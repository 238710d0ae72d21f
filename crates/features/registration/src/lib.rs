//! # Pet registration
//!
//! A three-step wizard that turns an owner's answers into a registered pet:
//!
//! 1. name and pet type,
//! 2. breed (a catalog breed, or a free-text label such as "It's a mix"),
//! 3. sex and age (a birth date, or an approximate age in years).
//!
//! The partially filled [`RegistrationDraft`](paw_domain::models::RegistrationDraft)
//! lives in a [`SessionStore`](ports::SessionStore) between steps. Each step is
//! validated and resolved on submission; the final step assembles the pet,
//! derives its danger flag from the catalog breed and stores it.
//!
//! Storage, sessions and time are reached through the traits in [`ports`] and
//! [`clock`]; [`memory`] provides the in-process implementations used by
//! [`init`].
//!
//! ```rust
//! use paw_domain::config::ApiConfig;
//! use paw_registration::forms::Step1Form;
//! use paw_registration::machine::StepOutcome;
//! use paw_domain::models::{PetTypeId, Step};
//!
//! let registration = paw_registration::build(&ApiConfig::default())?;
//! let key = registration.service.begin_registration(None);
//!
//! let form = Step1Form { name: Some("fluffy".into()), type_id: Some(PetTypeId(1)) };
//! let outcome = registration.service.submit_step1(&key, form);
//!
//! assert_eq!(outcome, StepOutcome::Advanced { next: Step::Step2 });
//! assert_eq!(registration.service.draft(&key).name.as_deref(), Some("Fluffy"));
//! # Ok::<(), paw_registration::RegistrationError>(())
//! ```

pub mod age;
pub mod assembler;
pub mod breed;
pub mod catalog;
pub mod clock;
mod error;
pub mod forms;
pub mod machine;
pub mod memory;
pub mod options;
pub mod pets;
pub mod ports;
pub mod seed;
pub mod validate;

#[cfg(feature = "server")]
pub mod api;

pub use error::{RegistrationError, RegistrationErrorExt};

use crate::catalog::CatalogQueries;
use crate::clock::{Clock, SystemClock};
use crate::machine::RegistrationService;
use crate::memory::{MemoryCatalog, MemoryPets, MemorySessions};
use crate::options::FormOptions;
use crate::pets::PetQueries;
use crate::ports::{CatalogStore, PetStore, SessionStore};
use crate::seed::SeedCatalog;
use paw_domain::config::ApiConfig;
use paw_domain::registry::InitializedSlice;
use std::sync::Arc;

/// Registration feature state.
#[paw_derive::paw_slice]
pub struct Registration {
    pub service: RegistrationService,
    pub catalog: CatalogQueries,
    pub pets: PetQueries,
    pub options: FormOptions,
}

impl Registration {
    /// Wires the slice around the given collaborators.
    #[must_use]
    pub fn from_parts(
        catalog: Arc<dyn CatalogStore>,
        pets: Arc<dyn PetStore>,
        sessions: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
        options: FormOptions,
    ) -> Self {
        Self::new(RegistrationInner {
            service: RegistrationService::new(
                Arc::clone(&catalog),
                Arc::clone(&pets),
                sessions,
                Arc::clone(&clock),
            ),
            catalog: CatalogQueries::new(Arc::clone(&catalog)),
            pets: PetQueries::new(pets, catalog, clock),
            options,
        })
    }
}

/// Builds the slice with in-memory stores and the system clock.
///
/// # Errors
///
/// * [`RegistrationError::Seed`] when the configured catalog seed cannot be read.
/// * [`RegistrationError::Store`] when the seed holds duplicates or the
///   session settings are zero.
pub fn build(config: &ApiConfig) -> Result<Registration, RegistrationError> {
    build_with_clock(config, Arc::new(SystemClock))
}

/// Same as [`build`] with an explicit clock.
///
/// # Errors
///
/// See [`build`].
pub fn build_with_clock(
    config: &ApiConfig,
    clock: Arc<dyn Clock>,
) -> Result<Registration, RegistrationError> {
    let catalog = MemoryCatalog::new();
    SeedCatalog::load(&config.catalog.seed)?.apply(&catalog)?;

    let sessions = MemorySessions::new(&config.registration)?;

    Ok(Registration::from_parts(
        Arc::new(catalog),
        Arc::new(MemoryPets::default()),
        Arc::new(sessions),
        clock,
        FormOptions::new(config.registration.max_approximate_age),
    ))
}

/// Initialize the registration feature.
///
/// # Errors
///
/// See [`build`].
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, RegistrationError> {
    let slice = build(config)?;
    tracing::info!(
        pet_types = slice.catalog.list_types().len(),
        "Registration slice initialized"
    );

    Ok(InitializedSlice::new(slice))
}
