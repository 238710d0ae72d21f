//! Turns a step-2 answer into either a catalog breed or a free-text label.

use paw_domain::constants::{MIXED_BREED_LABEL, UNKNOWN_BREED_LABEL};
use paw_domain::models::{BreedChoice, BreedId};
use std::str::FromStr;
use tracing::warn;

/// Outcome of breed resolution. At most one of the two fields is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedResolution {
    pub choice: BreedChoice,
    pub breed_id: Option<BreedId>,
    pub custom_label: Option<String>,
}

/// Reads a breed choice, falling back to [`BreedChoice::CantFind`].
///
/// Missing and unrecognised values never fail; unrecognised ones are logged.
#[must_use]
pub fn parse_choice(raw: Option<&str>) -> BreedChoice {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return BreedChoice::CantFind;
    };

    BreedChoice::from_str(raw).unwrap_or_else(|_| {
        warn!(choice = raw, "Unrecognised breed choice, treating it as cantFind");
        BreedChoice::CantFind
    })
}

/// Applies the breed decision table.
///
/// | choice | breed id | label |
/// |---|---|---|
/// | `knowsBreed` | the given id | none |
/// | `dontKnow` | none | "I don't know" |
/// | `mix` | none | "It's a mix" |
/// | `custom` | none | the custom text, verbatim |
/// | `cantFind` | none | none |
#[must_use]
pub fn resolve(
    choice: BreedChoice,
    breed_id: Option<BreedId>,
    custom_text: Option<&str>,
) -> BreedResolution {
    let (breed_id, custom_label) = match choice {
        BreedChoice::KnowsBreed => (breed_id, None),
        BreedChoice::DontKnow => (None, Some(UNKNOWN_BREED_LABEL.to_owned())),
        BreedChoice::Mix => (None, Some(MIXED_BREED_LABEL.to_owned())),
        BreedChoice::Custom => (None, Some(custom_text.unwrap_or_default().to_owned())),
        BreedChoice::CantFind => (None, None),
    };

    BreedResolution { choice, breed_id, custom_label }
}
