use super::models::{
    BeginResponse, CompletedResponse, DraftResponse, EnterStepResponse, OptionsResponse,
    Step1Request, Step2Request, Step3Request, StepResponse,
};
use crate::machine::StepOutcome;
use crate::{Registration, RegistrationError};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use paw_derive::api_handler;
use paw_domain::constants::REGISTRATION_TAG;
use paw_domain::models::Step;
use paw_kernel::server::{ApiError, ApiResult, ApiState, ErrorBody, extract_json};
use std::str::FromStr;

#[api_handler(
    post,
    path = "/registrations",
    responses(
        (status = CREATED, description = "A new registration was started", body = BeginResponse),
    ),
    tag = REGISTRATION_TAG,
)]
pub(super) async fn begin(State(state): State<ApiState>) -> ApiResult<impl IntoResponse> {
    let registration = state.try_get_slice::<Registration>()?;
    let session_key = registration.service.begin_registration(None);

    Ok((StatusCode::CREATED, Json(BeginResponse { session_key, step: Step::Step1 })))
}

#[api_handler(
    get,
    path = "/registrations/options",
    responses((status = OK, description = "Age and sex picker values", body = OptionsResponse)),
    tag = REGISTRATION_TAG,
)]
pub(super) async fn options(State(state): State<ApiState>) -> ApiResult<Json<OptionsResponse>> {
    let registration = state.try_get_slice::<Registration>()?;
    Ok(Json(registration.options.into()))
}

#[api_handler(
    get,
    path = "/registrations/{key}",
    params(("key" = String, Path, description = "Session key")),
    responses((status = OK, description = "Current draft", body = DraftResponse)),
    tag = REGISTRATION_TAG,
)]
pub(super) async fn show(
    State(state): State<ApiState>,
    Path(key): Path<String>,
) -> ApiResult<Json<DraftResponse>> {
    let registration = state.try_get_slice::<Registration>()?;
    let draft = registration.service.draft(&key);

    Ok(Json(DraftResponse { step: draft.step, draft }))
}

#[api_handler(
    delete,
    path = "/registrations/{key}",
    params(("key" = String, Path, description = "Session key")),
    responses((status = NO_CONTENT, description = "Draft discarded")),
    tag = REGISTRATION_TAG,
)]
pub(super) async fn cancel(
    State(state): State<ApiState>,
    Path(key): Path<String>,
) -> ApiResult<StatusCode> {
    let registration = state.try_get_slice::<Registration>()?;
    registration.service.cancel_registration(&key);

    Ok(StatusCode::NO_CONTENT)
}

#[api_handler(
    get,
    path = "/registrations/{key}/steps/{step}",
    params(
        ("key" = String, Path, description = "Session key"),
        ("step" = String, Path, description = "`step1`, `step2` or `step3`"),
    ),
    responses(
        (status = OK, description = "Step to display", body = EnterStepResponse),
        (status = NOT_FOUND, description = "Unknown step", body = ErrorBody),
    ),
    tag = REGISTRATION_TAG,
)]
pub(super) async fn enter_step(
    State(state): State<ApiState>,
    Path((key, step)): Path<(String, String)>,
) -> ApiResult<Json<EnterStepResponse>> {
    let registration = state.try_get_slice::<Registration>()?;
    let requested =
        Step::from_str(&step).map_err(|_| ApiError::not_found(format!("Unknown step '{step}'")))?;

    Ok(Json(EnterStepResponse { step: registration.service.enter_step(&key, requested) }))
}

#[api_handler(
    post,
    path = "/registrations/{key}/step1",
    params(("key" = String, Path, description = "Session key")),
    request_body = Step1Request,
    responses(
        (status = OK, description = "Step accepted", body = StepResponse),
        (
            status = UNPROCESSABLE_ENTITY,
            description = "Missing or unknown values",
            body = ErrorBody,
        ),
    ),
    tag = REGISTRATION_TAG,
)]
pub(super) async fn submit_step1(
    State(state): State<ApiState>,
    Path(key): Path<String>,
    body: Result<Json<Step1Request>, JsonRejection>,
) -> ApiResult<Json<StepResponse>> {
    let form = extract_json(body)?;
    let registration = state.try_get_slice::<Registration>()?;

    step_response(&registration.service.submit_step1(&key, form.into()))
}

#[api_handler(
    post,
    path = "/registrations/{key}/step2",
    params(("key" = String, Path, description = "Session key")),
    request_body = Step2Request,
    responses((status = OK, description = "Step accepted or redirected", body = StepResponse)),
    tag = REGISTRATION_TAG,
)]
pub(super) async fn submit_step2(
    State(state): State<ApiState>,
    Path(key): Path<String>,
    body: Result<Json<Step2Request>, JsonRejection>,
) -> ApiResult<Json<StepResponse>> {
    let form = extract_json(body)?;
    let registration = state.try_get_slice::<Registration>()?;

    step_response(&registration.service.submit_step2(&key, form.into()))
}

#[api_handler(
    post,
    path = "/registrations/{key}/step3",
    params(("key" = String, Path, description = "Session key")),
    request_body = Step3Request,
    responses(
        (status = CREATED, description = "Pet registered", body = CompletedResponse),
        (status = OK, description = "Redirected to step 1", body = StepResponse),
        (status = UNPROCESSABLE_ENTITY, description = "Missing or invalid sex", body = ErrorBody),
        (
            status = NOT_FOUND,
            description = "Draft references a missing type or breed",
            body = ErrorBody,
        ),
    ),
    tag = REGISTRATION_TAG,
)]
pub(super) async fn submit_step3(
    State(state): State<ApiState>,
    Path(key): Path<String>,
    body: Result<Json<Step3Request>, JsonRejection>,
) -> ApiResult<Response> {
    let form = extract_json(body)?;
    let registration = state.try_get_slice::<Registration>()?;

    match registration.service.submit_step3(&key, form.into())? {
        StepOutcome::Completed { pet_id } => {
            let body = Json(CompletedResponse { pet_id: pet_id.get() });
            Ok((StatusCode::CREATED, body).into_response())
        },
        outcome => step_response(&outcome).map(IntoResponse::into_response),
    }
}

fn step_response(outcome: &StepOutcome) -> ApiResult<Json<StepResponse>> {
    match outcome {
        StepOutcome::Invalid { report, .. } => {
            Err(RegistrationError::from(report.clone()).into())
        },
        outcome => Ok(Json(StepResponse::from_outcome(outcome))),
    }
}
