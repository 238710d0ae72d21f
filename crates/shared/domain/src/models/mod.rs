//! Pet registration models.

mod catalog;
mod draft;
mod pet;

pub use catalog::{Breed, PetType};
pub use draft::{BreedChoice, RegistrationDraft, Step};
pub use pet::{NewPet, Pet, Sex};

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! record_id {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {$(
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    )+};
}

record_id! {
    /// Identifier of a [`PetType`].
    PetTypeId,
    /// Identifier of a [`Breed`].
    BreedId,
    /// Identifier of a registered [`Pet`].
    PetId,
}
