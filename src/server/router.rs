//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

#[derive(OpenApi)]
#[openapi(info(title = "pokerstats", description = "Poker session tracking API"), tags(
    (name = controller::user::USER_TAG, description = "User account API routes"),
    (name = controller::room::ROOM_TAG, description = "Card room API routes"),
    (name = controller::poker_table::POKER_TABLE_TAG, description = "Poker table API routes"),
    (name = controller::calendar::CALENDAR_TAG, description = "Date and time dimension API routes"),
    (name = controller::session::SESSION_TAG, description = "Poker session API routes"),
))]
struct ApiDoc;

/// Registers every endpoint with its OpenAPI specification.
///
/// Handlers serving the same path with different methods share one `routes!`
/// call, axum rejects a path registered twice.
fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::create_user))
        .routes(routes!(
            controller::user::get_user,
            controller::user::update_user
        ))
        .routes(routes!(controller::user::get_user_sessions))
        .routes(routes!(controller::room::create_room))
        .routes(routes!(
            controller::room::get_room,
            controller::room::update_room
        ))
        .routes(routes!(
            controller::room::get_room_tables,
            controller::poker_table::create_poker_table
        ))
        .routes(routes!(
            controller::poker_table::get_poker_table,
            controller::poker_table::update_poker_table
        ))
        .routes(routes!(controller::poker_table::get_table_sessions))
        .routes(routes!(controller::calendar::insert_date))
        .routes(routes!(controller::calendar::get_date))
        .routes(routes!(controller::calendar::insert_time))
        .routes(routes!(controller::calendar::get_time))
        .routes(routes!(controller::session::record_session))
        .routes(routes!(
            controller::session::get_session,
            controller::session::update_session
        ))
}

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and browsable through
/// Swagger UI at `/api/docs`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    let (routes, api) = api_router().split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
