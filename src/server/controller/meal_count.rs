use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, meal::MealCountDto},
    server::{
        error::Error, model::app::AppState, service::meal::count::MealCountService,
        util::time::parse_date,
    },
};

pub static MEAL_COUNT_TAG: &str = "meal count";

/// Get meal counts for tomorrow in mess time
#[utoipa::path(
    get,
    path = "/mealcount/tomorrow",
    tag = MEAL_COUNT_TAG,
    responses(
        (status = 200, description = "Veg, non-veg and caffeine counts with student names", body = MealCountDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tomorrow_meal_count(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let tomorrow = state.clock.tomorrow()?;

    let counts = MealCountService::new(&state.db)
        .count_for_date(tomorrow)
        .await?;

    Ok((StatusCode::OK, Json(counts)))
}

/// Get meal counts for a specific date
#[utoipa::path(
    get,
    path = "/mealcount/{date}",
    tag = MEAL_COUNT_TAG,
    params(
        ("date" = String, Path, description = "Date formatted YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Veg, non-veg and caffeine counts with student names", body = MealCountDto),
        (status = 400, description = "Date is not formatted YYYY-MM-DD", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_meal_count(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let date = parse_date(&date)?;

    let counts = MealCountService::new(&state.db)
        .count_for_date(date)
        .await?;

    Ok((StatusCode::OK, Json(counts)))
}
