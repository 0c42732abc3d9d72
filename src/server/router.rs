//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered through utoipa's `OpenApiRouter` so that its annotation ends
//! up in the OpenAPI document served next to Swagger UI at `/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /menu` - Create or replace a weekday menu
/// - `GET /menu/{weekday}` - Get a weekday menu
/// - `GET /mealcount/tomorrow` - Meal counts for tomorrow in mess time
/// - `GET /mealcount/{date}` - Meal counts for a `YYYY-MM-DD` date
/// - `GET /health` - Database connectivity check
///
/// The OpenAPI document is available at `/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Messbot", description = "Hostel mess menu and meal count API"), tags(
        (name = controller::menu::MENU_TAG, description = "Weekday menu management"),
        (name = controller::meal_count::MEAL_COUNT_TAG, description = "Meal counts for the kitchen"),
        (name = controller::health::HEALTH_TAG, description = "Service health"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::menu::upsert_menu))
        .routes(routes!(controller::menu::get_menu))
        .routes(routes!(controller::meal_count::get_tomorrow_meal_count))
        .routes(routes!(controller::meal_count::get_meal_count))
        .routes(routes!(controller::health::health))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/docs").url("/docs/openapi.json", api))
}
