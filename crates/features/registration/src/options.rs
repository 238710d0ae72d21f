use paw_domain::models::Sex;
use std::ops::RangeInclusive;
use strum::IntoEnumIterator;

/// A selectable sex with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SexChoice {
    pub value: Sex,
    pub label: &'static str,
}

/// Choices offered by the step-3 pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormOptions {
    max_approximate_age: u16,
}

impl FormOptions {
    #[must_use]
    pub const fn new(max_approximate_age: u16) -> Self {
        Self { max_approximate_age }
    }

    /// `1..=max_approximate_age`.
    #[must_use]
    pub fn age_choices(&self) -> RangeInclusive<u32> {
        1..=u32::from(self.max_approximate_age)
    }

    #[must_use]
    pub fn sex_choices(&self) -> Vec<SexChoice> {
        Sex::iter().map(|value| SexChoice { value, label: value.label() }).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ages_start_at_one() {
        let options = FormOptions::new(20);
        assert_eq!(options.age_choices().count(), 20);
        assert_eq!(options.age_choices().next(), Some(1));
        assert_eq!(options.age_choices().last(), Some(20));
        assert_eq!(FormOptions::new(0).age_choices().count(), 0);
    }

    #[test]
    fn sexes_are_labelled_in_order() {
        let choices = FormOptions::new(20).sex_choices();
        let pairs: Vec<_> = choices.iter().map(|c| (c.label, c.value.to_string())).collect();
        assert_eq!(
            pairs,
            [
                ("Male", "male".to_owned()),
                ("Female", "female".to_owned()),
                ("Unknown", "unknown".to_owned()),
            ]
        );
    }
}
