use chrono::{TimeZone, Utc};
use paw_domain::models::{BreedChoice, BreedId, PetTypeId, RegistrationDraft, Sex, Step};
use paw_registration::assembler::PetAssembler;
use paw_registration::clock::FixedClock;
use paw_registration::memory::MemoryCatalog;
use paw_registration::ports::CatalogStore;
use paw_registration::seed::SeedCatalog;
use paw_registration::{age, breed};
use proptest::prelude::*;

fn choice() -> impl Strategy<Value = BreedChoice> {
    prop_oneof![
        Just(BreedChoice::KnowsBreed),
        Just(BreedChoice::DontKnow),
        Just(BreedChoice::Mix),
        Just(BreedChoice::Custom),
        Just(BreedChoice::CantFind),
    ]
}

fn raw_text() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(prop_oneof![
        Just("2020-05-15".to_owned()),
        Just("12".to_owned()),
        Just(String::new()),
        "\\PC{0,12}",
    ])
}

proptest! {
    #[test]
    fn breed_resolution_sets_at_most_one_field(
        choice in choice(),
        breed_id in proptest::option::of(1_u64..64),
        custom in proptest::option::of("\\PC{0,16}"),
    ) {
        let res = breed::resolve(choice, breed_id.map(BreedId), custom.as_deref());
        prop_assert!(res.breed_id.is_none() || res.custom_label.is_none());
        prop_assert_eq!(res.choice, choice);
    }

    #[test]
    fn unparseable_choices_fall_back_to_cant_find(raw in "[a-z_]{0,12}") {
        let parsed = breed::parse_choice(Some(&raw));
        let known = [
            "knowsbreed", "know_breed", "dontknow", "dont_know", "mix", "custom", "cantfind",
            "cant_find",
        ];
        if !known.contains(&raw.as_str()) {
            prop_assert_eq!(parsed, BreedChoice::CantFind);
        }
    }

    #[test]
    fn age_resolution_sets_at_most_one_field(
        knows in proptest::option::of(any::<bool>()),
        date in raw_text(),
        approx in raw_text(),
    ) {
        let res = age::resolve(knows, date.as_deref(), approx.as_deref());
        prop_assert!(res.date_of_birth.is_none() || res.approximate_age.is_none());
        if knows != Some(true) {
            prop_assert!(res.date_of_birth.is_none());
        }
    }

    #[test]
    fn danger_matches_the_catalog_breed(
        breed_id in proptest::option::of(1_u64..40),
        custom in proptest::option::of("[A-Za-z ]{1,12}"),
    ) {
        let catalog = MemoryCatalog::new();
        SeedCatalog::builtin().apply(&catalog).unwrap();
        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());

        // Only ids that belong to the catalog can be assembled.
        let breed_id = breed_id.map(BreedId).filter(|id| catalog.find_breed(*id).is_some());
        let draft = RegistrationDraft {
            step: Step::Step3,
            name: Some("Rex".to_owned()),
            type_id: Some(PetTypeId(1)),
            breed_id,
            custom_breed_label: custom,
            ..RegistrationDraft::default()
        };

        let pet = PetAssembler::new(&catalog, &clock).assemble(&draft, Sex::Unknown).unwrap();
        let expected =
            pet.breed_id.and_then(|id| catalog.find_breed(id)).is_some_and(|b| b.is_dangerous);
        prop_assert_eq!(pet.is_dangerous_animal, expected);
        prop_assert!(pet.breed_id.is_none() || pet.custom_breed_label.is_none());
        if pet.breed_id.is_none() {
            prop_assert!(!pet.is_dangerous_animal);
        }
    }
}
