use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        menu::MenuDto,
    },
    server::{error::Error, model::app::AppState, service::menu::MenuService},
};

pub static MENU_TAG: &str = "menu";

/// Create or replace the menu of a weekday
#[utoipa::path(
    post,
    path = "/menu",
    tag = MENU_TAG,
    request_body = MenuDto,
    responses(
        (status = 200, description = "Menu stored", body = MessageDto),
        (status = 400, description = "Weekday is not one of Monday to Sunday", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_menu(
    State(state): State<AppState>,
    Json(menu): Json<MenuDto>,
) -> Result<impl IntoResponse, Error> {
    let menu_service = MenuService::new(&state.db);

    let menu = menu_service.upsert_menu(menu).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Menu for {} created/updated successfully.", menu.weekday),
        }),
    ))
}

/// Get the menu of a weekday
#[utoipa::path(
    get,
    path = "/menu/{weekday}",
    tag = MENU_TAG,
    params(
        ("weekday" = String, Path, description = "Weekday name, Monday to Sunday")
    ),
    responses(
        (status = 200, description = "Menu for the weekday", body = MenuDto),
        (status = 400, description = "Weekday is not one of Monday to Sunday", body = ErrorDto),
        (status = 404, description = "No menu stored for the weekday", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_menu(
    State(state): State<AppState>,
    Path(weekday): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let menu_service = MenuService::new(&state.db);

    let menu = menu_service.get_menu(&weekday).await?;

    Ok((StatusCode::OK, Json(menu)))
}
