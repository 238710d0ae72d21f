use super::models::{BreedView, DangerResponse, PetTypeView};
use crate::Registration;
use axum::Json;
use axum::extract::{Path, State};
use paw_derive::api_handler;
use paw_domain::constants::CATALOG_TAG;
use paw_domain::models::{BreedId, PetTypeId};
use paw_kernel::server::{ApiResult, ApiState};

#[api_handler(
    get,
    path = "/pet-types",
    responses((status = OK, description = "Pet types ordered by name", body = [PetTypeView])),
    tag = CATALOG_TAG,
)]
pub(super) async fn list_pet_types(
    State(state): State<ApiState>,
) -> ApiResult<Json<Vec<PetTypeView>>> {
    let registration = state.try_get_slice::<Registration>()?;
    Ok(Json(registration.catalog.list_types().into_iter().map(Into::into).collect()))
}

#[api_handler(
    get,
    path = "/pet-types/{id}/breeds",
    params(("id" = u64, Path, description = "Pet type ID")),
    responses(
        (
            status = OK,
            description = "Breeds ordered by name; empty for unknown types",
            body = [BreedView],
        ),
    ),
    tag = CATALOG_TAG,
)]
pub(super) async fn list_breeds(
    State(state): State<ApiState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<Vec<BreedView>>> {
    let registration = state.try_get_slice::<Registration>()?;
    let breeds = registration.catalog.breeds_for_type(PetTypeId(id));

    Ok(Json(breeds.into_iter().map(Into::into).collect()))
}

#[api_handler(
    get,
    path = "/breeds/{id}/danger",
    params(("id" = u64, Path, description = "Breed ID")),
    responses(
        (
            status = OK,
            description = "Danger classification; false for unknown breeds",
            body = DangerResponse,
        ),
    ),
    tag = CATALOG_TAG,
)]
pub(super) async fn breed_danger(
    State(state): State<ApiState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<DangerResponse>> {
    let registration = state.try_get_slice::<Registration>()?;
    Ok(Json(DangerResponse { is_dangerous: registration.catalog.is_breed_dangerous(BreedId(id)) }))
}
