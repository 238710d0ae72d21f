use crate::age::{self, AgeResolution};
use crate::assembler::PetAssembler;
use crate::breed;
use crate::clock::Clock;
use crate::error::{RegistrationError, RegistrationErrorExt};
use crate::forms::{Step1Form, Step2Form, Step3Form};
use crate::ports::{CatalogStore, PetStore, SessionStore};
use crate::validate::{self, ValidationReport};
use paw_domain::models::{PetId, RegistrationDraft, Step};
use std::sync::Arc;
use tracing::{debug, info};

/// What happened to a step submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Accepted; the wizard moved on.
    Advanced { next: Step },
    /// Rejected; the same step must be shown again with the report.
    Invalid { step: Step, report: ValidationReport },
    /// Step-1 data is missing, so the caller is sent back there.
    Redirect { to: Step },
    /// The pet was stored and the draft discarded.
    Completed { pet_id: PetId },
}

impl StepOutcome {
    /// The step the caller has to display next.
    #[must_use]
    pub const fn step(&self) -> Step {
        match self {
            Self::Advanced { next } => *next,
            Self::Invalid { step, .. } => *step,
            Self::Redirect { to } => *to,
            Self::Completed { .. } => Step::Completed,
        }
    }
}

/// The three-step registration wizard.
///
/// Each call loads the draft of one session, applies a single transition and
/// writes the draft back; nothing else is shared between sessions.
#[derive(Debug, Clone)]
pub struct RegistrationService {
    catalog: Arc<dyn CatalogStore>,
    pets: Arc<dyn PetStore>,
    sessions: Arc<dyn SessionStore>,
    clock: Arc<dyn Clock>,
}

impl RegistrationService {
    #[must_use]
    pub fn new(
        catalog: Arc<dyn CatalogStore>,
        pets: Arc<dyn PetStore>,
        sessions: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { catalog, pets, sessions, clock }
    }

    /// Starts over with an empty draft and returns the session key.
    ///
    /// A fresh key is minted when none is given.
    pub fn begin_registration(&self, session_key: Option<&str>) -> String {
        let key = session_key.map_or_else(paw_kernel::session_key, str::to_owned);
        self.sessions.set(&key, RegistrationDraft::default());
        debug!(session = %key, "Registration started");
        key
    }

    /// Throws the draft away.
    pub fn cancel_registration(&self, session_key: &str) {
        self.sessions.clear(session_key);
        debug!(session = %session_key, "Registration cancelled");
    }

    /// The current draft; empty when the session is unknown or expired.
    #[must_use]
    pub fn draft(&self, session_key: &str) -> RegistrationDraft {
        self.sessions.get(session_key).unwrap_or_default()
    }

    /// The step to display when the caller asks for `requested`.
    ///
    /// Steps 2 and 3 fall back to step 1 until step 1 has been accepted.
    #[must_use]
    pub fn enter_step(&self, session_key: &str, requested: Step) -> Step {
        let draft = self.draft(session_key);
        let step = match requested {
            Step::Step1 => Step::Step1,
            _ if !self.passed_step1(&draft) => Step::Step1,
            Step::Step2 | Step::Step3 => requested,
            Step::Completed => draft.step,
        };

        if step != requested {
            debug!(session = %session_key, ?requested, ?step, "Step entry redirected");
        }
        step
    }

    /// Name and pet type. The attempted values are kept even when rejected.
    pub fn submit_step1(&self, session_key: &str, form: Step1Form) -> StepOutcome {
        let mut draft = self.draft(session_key);
        draft.name = form.name.as_deref().map(validate::normalize_name);
        draft.type_id = form.type_id;

        let report = validate::validate_step1(draft.name.as_deref(), draft.type_id, |id| {
            self.catalog.find_type(id).is_some()
        });

        let outcome = if report.is_empty() {
            draft.step = Step::Step2;
            StepOutcome::Advanced { next: Step::Step2 }
        } else {
            debug!(session = %session_key, %report, "Step 1 rejected");
            draft.step = Step::Step1;
            StepOutcome::Invalid { step: Step::Step1, report }
        };

        self.sessions.set(session_key, draft);
        log_transition(session_key, Step::Step1, &outcome);
        outcome
    }

    /// Breed. Always advances once step 1 is done.
    pub fn submit_step2(&self, session_key: &str, form: Step2Form) -> StepOutcome {
        let mut draft = self.draft(session_key);
        if !self.passed_step1(&draft) {
            return redirect(session_key, Step::Step2);
        }

        let choice = breed::parse_choice(form.breed_choice.as_deref());
        let resolution = breed::resolve(choice, form.breed_id, form.custom_text.as_deref());
        draft.breed_choice = Some(resolution.choice);
        draft.breed_id = resolution.breed_id;
        draft.custom_breed_label = resolution.custom_label;
        draft.step = Step::Step3;

        self.sessions.set(session_key, draft);
        let outcome = StepOutcome::Advanced { next: Step::Step3 };
        log_transition(session_key, Step::Step2, &outcome);
        outcome
    }

    /// Sex and age. On success the pet is assembled, stored, and the draft cleared.
    ///
    /// # Errors
    ///
    /// Only for conditions the wizard cannot recover from on its own: catalog
    /// entries referenced by the draft that no longer exist, or a failed write.
    /// The draft is kept in both cases.
    pub fn submit_step3(
        &self,
        session_key: &str,
        form: Step3Form,
    ) -> Result<StepOutcome, RegistrationError> {
        let mut draft = self.draft(session_key);
        if !self.passed_step1(&draft) {
            return Ok(redirect(session_key, Step::Step3));
        }

        let knows_birth_date = age::parse_knows_birth_date(form.knows_birth_date.as_deref());
        let AgeResolution { date_of_birth, approximate_age } = age::resolve(
            knows_birth_date,
            form.date_of_birth.as_deref(),
            form.approximate_age.as_deref(),
        );
        let sex = validate::validate_step3(form.sex.as_deref());

        draft.knows_birth_date = knows_birth_date;
        draft.date_of_birth = date_of_birth;
        draft.approximate_age = approximate_age;
        draft.sex = sex.as_ref().ok().copied();
        draft.step = Step::Step3;

        let sex = match sex {
            Ok(sex) => sex,
            Err(report) => {
                debug!(session = %session_key, %report, "Step 3 rejected");
                self.sessions.set(session_key, draft);
                return Ok(StepOutcome::Invalid { step: Step::Step3, report });
            },
        };

        let assembler = PetAssembler::new(self.catalog.as_ref(), self.clock.as_ref());
        let assembled = assembler.assemble(&draft, sex);
        let pet = match assembled {
            Ok(pet) => pet,
            Err(err) => {
                self.sessions.set(session_key, draft);
                return Err(err);
            },
        };

        let dangerous = pet.is_dangerous_animal;
        let pet_id = match self.pets.insert(pet).context("Storing the registered pet") {
            Ok(id) => id,
            Err(err) => {
                self.sessions.set(session_key, draft);
                return Err(err);
            },
        };

        self.sessions.clear(session_key);
        info!(pet_id = %pet_id, dangerous, "Pet registered");
        Ok(StepOutcome::Completed { pet_id })
    }

    /// Step 1 was accepted and its pet type is still in the catalog.
    fn passed_step1(&self, draft: &RegistrationDraft) -> bool {
        draft.step != Step::Step1
            && draft.has_identity()
            && draft.type_id.is_some_and(|id| self.catalog.find_type(id).is_some())
    }
}

fn redirect(session_key: &str, from: Step) -> StepOutcome {
    let outcome = StepOutcome::Redirect { to: Step::Step1 };
    log_transition(session_key, from, &outcome);
    outcome
}

fn log_transition(session_key: &str, from: Step, outcome: &StepOutcome) {
    debug!(session = %session_key, ?from, to = ?outcome.step(), "Registration transition");
}
