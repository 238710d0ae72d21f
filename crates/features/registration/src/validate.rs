use paw_domain::models::{PetTypeId, Sex};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// One rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Wire name of the field (`name`, `typeId`, `sex`).
    pub field: Cow<'static, str>,
    pub message: Cow<'static, str>,
}

/// Every problem found in one step submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    violations: Vec<FieldViolation>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        field: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) {
        self.violations.push(FieldViolation { field: field.into(), message: message.into() });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", violation.field, violation.message)?;
        }
        Ok(())
    }
}

/// Trims the name and upper-cases its first character.
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}

/// Step 1 needs a non-empty (normalized) name and an existing pet type.
pub fn validate_step1(
    name: Option<&str>,
    type_id: Option<PetTypeId>,
    type_exists: impl Fn(PetTypeId) -> bool,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    if name.is_none_or(str::is_empty) {
        report.push("name", "Name is required");
    }

    match type_id {
        None => report.push("typeId", "Pet type is required"),
        Some(id) if !type_exists(id) => {
            report.push("typeId", format!("Pet type with ID {id} not found"));
        },
        Some(_) => {},
    }

    report
}

/// Step 3 needs a sex of `male`, `female` or `unknown` (any case).
///
/// # Errors
/// Returns the report naming `sex` when it is missing or not one of the three.
pub fn validate_step3(sex: Option<&str>) -> Result<Sex, ValidationReport> {
    let mut report = ValidationReport::default();
    match sex.map(str::trim) {
        None | Some("") => report.push("sex", "Sex is required"),
        Some(raw) => match Sex::from_str(raw) {
            Ok(sex) => return Ok(sex),
            Err(_) => report.push("sex", "Sex must be one of male, female or unknown"),
        },
    }
    Err(report)
}
