use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sea_orm::TransactionTrait;
use tracing::info;

use service::bike_service;
use service::dto::BikeDto;
use service::errors::ServiceError;

use crate::errors::ApiError;
use crate::extract::AppJson;
use crate::routes::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<BikeDto>>, ApiError> {
    let bikes = bike_service::list_bikes(&state.db).await?;
    info!(count = bikes.len(), "list bikes");
    Ok(Json(bikes))
}

pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<BikeDto>, ApiError> {
    Ok(Json(bike_service::get_bike(&state.db, id).await?))
}

/// HEAD probe: 200 with empty body when the bike exists, 404 otherwise.
pub async fn exists(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    if bike_service::bike_exists(&state.db, id).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::NotFound(format!("Bike not found with id: {}", id)))
    }
}

pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<BikeDto>,
) -> Result<(StatusCode, Json<BikeDto>), ApiError> {
    let created = state
        .db
        .transaction::<_, BikeDto, ServiceError>(|txn| {
            Box::pin(async move { bike_service::create_bike(txn, input).await })
        })
        .await?;
    info!(id = ?created.id, shop = ?created.shop, "created bike");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(input): AppJson<BikeDto>,
) -> Result<Json<BikeDto>, ApiError> {
    let updated = state
        .db
        .transaction::<_, BikeDto, ServiceError>(|txn| {
            Box::pin(async move { bike_service::update_bike(txn, id, input).await })
        })
        .await?;
    info!(id, "updated bike");
    Ok(Json(updated))
}

pub async fn rename(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    new_name: String,
) -> Result<Json<BikeDto>, ApiError> {
    let updated = state
        .db
        .transaction::<_, BikeDto, ServiceError>(|txn| {
            Box::pin(async move { bike_service::rename_bike(txn, id, &new_name).await })
        })
        .await?;
    info!(id, "renamed bike");
    Ok(Json(updated))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    state
        .db
        .transaction::<_, (), ServiceError>(|txn| {
            Box::pin(async move { bike_service::delete_bike(txn, id).await })
        })
        .await?;
    info!(id, "deleted bike");
    Ok(StatusCode::NO_CONTENT)
}
