use chrono::{NaiveDate, TimeZone, Utc};
use paw_domain::config::ApiConfig;
use paw_domain::constants::UNKNOWN_BREED_LABEL;
use paw_domain::models::{BreedChoice, PetTypeId, RegistrationDraft, Sex, Step};
use paw_registration::clock::FixedClock;
use paw_registration::forms::{Step1Form, Step2Form, Step3Form};
use paw_registration::machine::StepOutcome;
use paw_registration::{Registration, RegistrationError, build_with_clock};
use std::sync::Arc;

const DOG: PetTypeId = PetTypeId(1);

fn registration() -> Registration {
    let clock = FixedClock(Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap());
    build_with_clock(&ApiConfig::default(), Arc::new(clock)).unwrap()
}

fn step1(name: &str, type_id: Option<PetTypeId>) -> Step1Form {
    Step1Form { name: Some(name.to_owned()), type_id }
}

fn step2(choice: &str) -> Step2Form {
    Step2Form { breed_choice: Some(choice.to_owned()), ..Step2Form::default() }
}

fn step3(sex: &str, knows: &str) -> Step3Form {
    Step3Form {
        sex: Some(sex.to_owned()),
        knows_birth_date: Some(knows.to_owned()),
        ..Step3Form::default()
    }
}

fn rejects_field(outcome: &StepOutcome, field: &str) -> bool {
    matches!(outcome, StepOutcome::Invalid { report, .. } if report.has_field(field))
}

/// Runs the first step and returns the session key.
fn started(reg: &Registration, name: &str) -> String {
    let key = reg.service.begin_registration(None);
    let outcome = reg.service.submit_step1(&key, step1(name, Some(DOG)));
    assert_eq!(outcome, StepOutcome::Advanced { next: Step::Step2 });
    key
}

#[test]
fn unknown_breed_registration() {
    let reg = registration();
    let key = started(&reg, "Fluffy");
    assert_eq!(reg.service.draft(&key).step, Step::Step2);

    let outcome = reg.service.submit_step2(&key, step2("dontKnow"));
    assert_eq!(outcome, StepOutcome::Advanced { next: Step::Step3 });
    let draft = reg.service.draft(&key);
    assert_eq!(draft.custom_breed_label.as_deref(), Some(UNKNOWN_BREED_LABEL));
    assert_eq!(draft.breed_id, None);

    let outcome = reg.service.submit_step3(&key, step3("female", "no")).unwrap();
    let StepOutcome::Completed { pet_id } = outcome else {
        panic!("expected completion, got {outcome:?}")
    };

    let pet = reg.pets.find_pet(pet_id).unwrap();
    assert_eq!(pet.name, "Fluffy");
    assert_eq!(pet.sex, Sex::Female);
    assert!(!pet.is_dangerous_animal);
    assert_eq!(pet.created_at, Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap());

    // The draft is gone once the pet exists.
    assert_eq!(reg.service.draft(&key), RegistrationDraft::default());
}

#[test]
fn dangerous_breed_registration() {
    let reg = registration();
    let pitbull = reg.catalog.find_breed_by_name("Pitbull", DOG).unwrap();
    assert!(pitbull.is_dangerous);

    let key = started(&reg, "Bruno");
    reg.service.submit_step2(
        &key,
        Step2Form { breed_id: Some(pitbull.id), ..step2("knowsBreed") },
    );
    let outcome = reg.service.submit_step3(&key, step3("male", "no")).unwrap();
    let StepOutcome::Completed { pet_id } = outcome else { panic!("expected completion") };

    let pet = reg.pets.find_pet(pet_id).unwrap();
    assert!(pet.is_dangerous_animal);
    assert_eq!(pet.breed_id, Some(pitbull.id));
    assert_eq!(reg.pets.list_dangerous_pets().len(), 1);
}

#[test]
fn known_birth_date_registration() {
    let reg = registration();
    let key = started(&reg, "Milo");
    reg.service.submit_step2(&key, step2("mix"));

    let form = Step3Form {
        date_of_birth: Some("2020-05-15".to_owned()),
        approximate_age: Some("7".to_owned()),
        ..step3("male", "yes")
    };
    let StepOutcome::Completed { pet_id } = reg.service.submit_step3(&key, form).unwrap() else {
        panic!("expected completion")
    };

    let summary = reg.pets.summary(pet_id).unwrap();
    assert_eq!(summary.pet.date_of_birth, NaiveDate::from_ymd_opt(2020, 5, 15));
    assert_eq!(summary.pet.approximate_age, None);
    assert_eq!(summary.age, Some(4));
    assert_eq!(summary.breed_label(), Some("It's a mix"));
    assert_eq!(summary.pet_type.map(|t| t.name).as_deref(), Some("Dog"));
}

#[test]
fn malformed_birth_date_is_dropped() {
    let reg = registration();
    let key = started(&reg, "Luna");
    reg.service.submit_step2(&key, step2("cantFind"));

    let form = Step3Form { date_of_birth: Some("not-a-date".to_owned()), ..step3("female", "yes") };
    let StepOutcome::Completed { pet_id } = reg.service.submit_step3(&key, form).unwrap() else {
        panic!("expected completion")
    };

    let pet = reg.pets.find_pet(pet_id).unwrap();
    assert_eq!(pet.date_of_birth, None);
    assert_eq!(pet.approximate_age, None);
    assert_eq!(pet.breed_id, None);
    assert_eq!(pet.custom_breed_label, None);
}

#[test]
fn step1_rejections_keep_the_attempt() {
    let reg = registration();
    let key = reg.service.begin_registration(None);

    let outcome = reg.service.submit_step1(&key, step1("   ", Some(DOG)));
    let StepOutcome::Invalid { step, report } = outcome else { panic!("expected rejection") };
    assert_eq!(step, Step::Step1);
    assert!(report.has_field("name"));
    assert_eq!(reg.service.draft(&key).type_id, Some(DOG));

    let outcome = reg.service.submit_step1(&key, step1("rex", None));
    assert!(rejects_field(&outcome, "typeId"));
    assert_eq!(reg.service.draft(&key).name.as_deref(), Some("Rex"));

    let outcome = reg.service.submit_step1(&key, step1("rex", Some(PetTypeId(77))));
    assert!(rejects_field(&outcome, "typeId"));
    assert_eq!(reg.service.draft(&key).step, Step::Step1);
}

#[test]
fn later_steps_redirect_without_identity() {
    let reg = registration();
    let key = reg.service.begin_registration(None);

    assert_eq!(reg.service.enter_step(&key, Step::Step2), Step::Step1);
    assert_eq!(reg.service.enter_step(&key, Step::Step3), Step::Step1);
    assert_eq!(reg.service.enter_step("never-issued", Step::Step3), Step::Step1);

    let outcome = reg.service.submit_step2(&key, step2("mix"));
    assert_eq!(outcome, StepOutcome::Redirect { to: Step::Step1 });
    assert_eq!(reg.service.draft(&key), RegistrationDraft::default());

    let outcome = reg.service.submit_step3(&key, step3("male", "no")).unwrap();
    assert_eq!(outcome, StepOutcome::Redirect { to: Step::Step1 });
    assert!(reg.pets.list_pets().is_empty());
}

#[test]
fn rejected_step1_keeps_later_steps_closed() {
    let reg = registration();
    let key = reg.service.begin_registration(None);

    let outcome = reg.service.submit_step1(&key, step1("Rex", Some(PetTypeId(99))));
    assert!(rejects_field(&outcome, "typeId"));
    assert!(reg.service.draft(&key).has_identity());

    assert_eq!(reg.service.enter_step(&key, Step::Step2), Step::Step1);
    assert_eq!(reg.service.enter_step(&key, Step::Step3), Step::Step1);

    let outcome = reg.service.submit_step2(&key, step2("mix"));
    assert_eq!(outcome, StepOutcome::Redirect { to: Step::Step1 });
    assert_eq!(reg.service.draft(&key).breed_choice, None);

    let outcome = reg.service.submit_step3(&key, step3("male", "no")).unwrap();
    assert_eq!(outcome, StepOutcome::Redirect { to: Step::Step1 });
    assert!(reg.pets.list_pets().is_empty());
}

#[test]
fn failed_resubmission_closes_step2_again() {
    let reg = registration();
    let key = started(&reg, "Rex");
    assert_eq!(reg.service.enter_step(&key, Step::Step2), Step::Step2);

    let outcome = reg.service.submit_step1(&key, step1("", Some(DOG)));
    assert!(matches!(outcome, StepOutcome::Invalid { step: Step::Step1, .. }));
    assert_eq!(reg.service.enter_step(&key, Step::Step2), Step::Step1);

    reg.service.submit_step1(&key, step1("Rex", Some(DOG)));
    assert_eq!(reg.service.enter_step(&key, Step::Step2), Step::Step2);
}

#[test]
fn steps_open_once_identity_exists() {
    let reg = registration();
    let key = started(&reg, "Rex");

    assert_eq!(reg.service.enter_step(&key, Step::Step1), Step::Step1);
    assert_eq!(reg.service.enter_step(&key, Step::Step2), Step::Step2);
    assert_eq!(reg.service.enter_step(&key, Step::Step3), Step::Step3);
    assert_eq!(reg.service.enter_step(&key, Step::Completed), Step::Step2);
}

#[test]
fn missing_sex_keeps_step3_answers() {
    let reg = registration();
    let key = started(&reg, "Rex");
    reg.service.submit_step2(&key, step2("dont_know"));

    let form = Step3Form {
        sex: None,
        knows_birth_date: Some("NO".to_owned()),
        approximate_age: Some("5".to_owned()),
        ..Step3Form::default()
    };
    let outcome = reg.service.submit_step3(&key, form).unwrap();
    let StepOutcome::Invalid { step, report } = outcome else { panic!("expected rejection") };
    assert_eq!(step, Step::Step3);
    assert!(report.has_field("sex"));

    let draft = reg.service.draft(&key);
    assert_eq!(draft.approximate_age, Some(5));
    assert_eq!(draft.knows_birth_date, Some(false));
    assert_eq!(draft.breed_choice, Some(BreedChoice::DontKnow));
    assert!(reg.pets.list_pets().is_empty());
}

#[test]
fn resubmitting_a_step_is_idempotent() {
    let reg = registration();
    let key = started(&reg, "Rex");
    let first = reg.service.draft(&key);
    reg.service.submit_step1(&key, step1("Rex", Some(DOG)));
    assert_eq!(reg.service.draft(&key), first);

    let form = Step2Form { custom_text: Some("Wolfdog".to_owned()), ..step2("custom") };
    reg.service.submit_step2(&key, form.clone());
    let second = reg.service.draft(&key);
    reg.service.submit_step2(&key, form);
    assert_eq!(reg.service.draft(&key), second);
    assert_eq!(second.custom_breed_label.as_deref(), Some("Wolfdog"));
}

#[test]
fn switching_breed_answers_leaves_one_value() {
    let reg = registration();
    let key = started(&reg, "Rex");
    let beagle = reg.catalog.find_breed_by_name("beagle", DOG).unwrap();

    reg.service.submit_step2(&key, step2("mix"));
    reg.service.submit_step2(&key, Step2Form { breed_id: Some(beagle.id), ..step2("knowsBreed") });
    let draft = reg.service.draft(&key);
    assert_eq!(draft.breed_id, Some(beagle.id));
    assert_eq!(draft.custom_breed_label, None);

    reg.service.submit_step2(&key, step2("something-else"));
    let draft = reg.service.draft(&key);
    assert_eq!(draft.breed_choice, Some(BreedChoice::CantFind));
    assert_eq!(draft.breed_id, None);
    assert_eq!(draft.custom_breed_label, None);
}

#[test]
fn restart_discards_the_draft() {
    let reg = registration();
    let key = started(&reg, "Rex");

    assert_eq!(reg.service.begin_registration(Some(&key)), key);
    assert_eq!(reg.service.draft(&key), RegistrationDraft::default());

    let key = started(&reg, "Rex");
    reg.service.cancel_registration(&key);
    assert_eq!(reg.service.enter_step(&key, Step::Step2), Step::Step1);
}

#[test]
fn fresh_keys_are_distinct() {
    let reg = registration();
    let a = reg.service.begin_registration(None);
    let b = reg.service.begin_registration(None);
    assert_ne!(a, b);
    assert_eq!(a.len(), 16);
}

#[test]
fn unknown_breed_id_fails_at_assembly() {
    let reg = registration();
    let key = started(&reg, "Rex");
    reg.service.submit_step2(
        &key,
        Step2Form { breed_id: Some(paw_domain::models::BreedId(999)), ..step2("knowsBreed") },
    );

    let err = reg.service.submit_step3(&key, step3("male", "no")).unwrap_err();
    assert!(matches!(err, RegistrationError::BreedNotFound { .. }));
    // The draft survives so the owner can pick another breed.
    assert_eq!(reg.service.draft(&key).step, Step::Step3);
}

#[test]
fn pets_are_listed_newest_first() {
    let reg = registration();
    for name in ["Ace", "Bo", "Cy"] {
        let key = started(&reg, name);
        reg.service.submit_step2(&key, step2("mix"));
        reg.service.submit_step3(&key, step3("unknown", "no")).unwrap();
    }

    // Same instant on a fixed clock: ties break by id, highest first.
    let names: Vec<_> = reg.pets.list_pets().into_iter().map(|p| p.name).collect();
    assert_eq!(names, ["Cy", "Bo", "Ace"]);
    assert_eq!(reg.pets.list_pets_by_type_name("DOG").len(), 3);
    assert!(reg.pets.list_pets_by_type_name("cat").is_empty());
    assert!(reg.pets.list_pets_by_type_name("Hamster").is_empty());
}
