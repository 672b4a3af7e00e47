use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sea_orm::TransactionTrait;
use tracing::info;

use service::dto::RentalDto;
use service::errors::ServiceError;
use service::rental_service;

use crate::errors::ApiError;
use crate::extract::AppJson;
use crate::routes::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<RentalDto>>, ApiError> {
    let rentals = rental_service::list_rentals(&state.db).await?;
    info!(count = rentals.len(), "list rentals");
    Ok(Json(rentals))
}

pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<RentalDto>, ApiError> {
    Ok(Json(rental_service::get_rental(&state.db, id).await?))
}

/// Create a rental inside a request-scoped transaction: a failed reference
/// resolution rolls back without leaving a partial row.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<RentalDto>,
) -> Result<(StatusCode, Json<RentalDto>), ApiError> {
    let created = state
        .db
        .transaction::<_, RentalDto, ServiceError>(|txn| {
            Box::pin(async move { rental_service::create_rental(txn, input).await })
        })
        .await?;
    info!(id = ?created.id, client = ?created.client, bike = ?created.bike, "created rental");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(input): AppJson<RentalDto>,
) -> Result<Json<RentalDto>, ApiError> {
    let updated = state
        .db
        .transaction::<_, RentalDto, ServiceError>(|txn| {
            Box::pin(async move { rental_service::update_rental(txn, id, input).await })
        })
        .await?;
    info!(id, "updated rental");
    Ok(Json(updated))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    state
        .db
        .transaction::<_, (), ServiceError>(|txn| {
            Box::pin(async move { rental_service::delete_rental(txn, id).await })
        })
        .await?;
    info!(id, "deleted rental");
    Ok(StatusCode::NO_CONTENT)
}
