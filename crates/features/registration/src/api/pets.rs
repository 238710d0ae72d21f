use super::models::{PetSummaryView, PetView, PetsQuery};
use crate::Registration;
use axum::Json;
use axum::extract::{Path, Query, State};
use paw_derive::api_handler;
use paw_domain::constants::PETS_TAG;
use paw_domain::models::PetId;
use paw_kernel::server::{ApiResult, ApiState, ErrorBody};

#[api_handler(
    get,
    path = "/pets",
    params(PetsQuery),
    responses((status = OK, description = "Registered pets, newest first", body = [PetView])),
    tag = PETS_TAG,
)]
pub(super) async fn list_pets(
    State(state): State<ApiState>,
    Query(query): Query<PetsQuery>,
) -> ApiResult<Json<Vec<PetView>>> {
    let registration = state.try_get_slice::<Registration>()?;

    let dangerous_only = query.dangerous.unwrap_or_default();
    let pets = match query.pet_type.as_deref() {
        Some(name) => {
            let mut pets = registration.pets.list_pets_by_type_name(name);
            pets.retain(|pet| !dangerous_only || pet.is_dangerous_animal);
            pets
        },
        None if dangerous_only => registration.pets.list_dangerous_pets(),
        None => registration.pets.list_pets(),
    };

    Ok(Json(pets.into_iter().map(Into::into).collect()))
}

#[api_handler(
    get,
    path = "/pets/{id}",
    params(("id" = u64, Path, description = "Pet ID")),
    responses(
        (status = OK, description = "Pet with breed label and current age", body = PetSummaryView),
        (status = NOT_FOUND, description = "Unknown pet", body = ErrorBody),
    ),
    tag = PETS_TAG,
)]
pub(super) async fn show_pet(
    State(state): State<ApiState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<PetSummaryView>> {
    let registration = state.try_get_slice::<Registration>()?;
    Ok(Json(registration.pets.summary(PetId(id))?.into()))
}
