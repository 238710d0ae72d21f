//! Shared string constants.

/// `OpenAPI` tag of the system routes (health).
pub const SYSTEM_TAG: &str = "System";
/// `OpenAPI` tag of the registration wizard routes.
pub const REGISTRATION_TAG: &str = "Registration";
/// `OpenAPI` tag of the pet type and breed routes.
pub const CATALOG_TAG: &str = "Catalog";
/// `OpenAPI` tag of the registered pet routes.
pub const PETS_TAG: &str = "Pets";

/// Breed label stored when the owner does not know the breed.
pub const UNKNOWN_BREED_LABEL: &str = "I don't know";
/// Breed label stored for mixed-breed pets.
pub const MIXED_BREED_LABEL: &str = "It's a mix";

/// Calendar format of birth dates on the wire.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of generated registration session keys.
pub const SESSION_KEY_LENGTH: usize = 16;
