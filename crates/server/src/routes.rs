use axum::routing::{get, patch};
use axum::{Json, Router};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

use common::types::Health;

pub mod bikes;
pub mod catalogs;
pub mod clients;
pub mod rentals;
pub mod shops;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application route table, constructed once at startup.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/shops", get(shops::list).post(shops::create))
        .route(
            "/shops/:id",
            get(shops::get_by_id).head(shops::exists).put(shops::update).delete(shops::remove),
        )
        .route("/shops/:id/updateName", patch(shops::rename))
        .route("/clients", get(clients::list).post(clients::create))
        .route(
            "/clients/:id",
            get(clients::get_by_id).head(clients::exists).put(clients::update).delete(clients::remove),
        )
        .route("/clients/:id/updateName", patch(clients::rename))
        .route("/bikes", get(bikes::list).post(bikes::create))
        .route(
            "/bikes/:id",
            get(bikes::get_by_id).head(bikes::exists).put(bikes::update).delete(bikes::remove),
        )
        .route("/bikes/:id/updateName", patch(bikes::rename))
        // catalogs keep the trailing slash of the original collection route
        .route("/catalogs/", get(catalogs::list).post(catalogs::create))
        .route(
            "/catalogs/:id",
            get(catalogs::get_by_id).put(catalogs::update).delete(catalogs::remove),
        )
        .route("/catalogs/:id/download", get(catalogs::download))
        .route("/rentals", get(rentals::list).post(rentals::create))
        .route(
            "/rentals/:id",
            get(rentals::get_by_id).put(rentals::update).delete(rentals::remove),
        )
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
