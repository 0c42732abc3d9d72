use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use entity::sea_orm_active_enums::{CaffeineChoice, MealType};
use messbot::{
    model::meal::MealCountDto,
    server::controller::meal_count::{get_meal_count, get_tomorrow_meal_count},
};

use super::*;

/// Expect tomorrow to be Friday 16 May in mess time with preferences resolved for that day
#[tokio::test]
async fn counts_tomorrow_in_mess_time() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mess_tables()
        .with_student(1001, "Asha")
        .with_student(1002, "Bina")
        .build()
        .await?;
    test.preference()
        .insert_weekly_choice(1, "Friday", MealType::Veg, CaffeineChoice::Tea)
        .await?;

    let result = get_tomorrow_meal_count(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let counts: MealCountDto = json_body(resp).await;
    assert_eq!(counts.date, "2025-05-16");
    assert_eq!(counts.veg, 1);
    assert_eq!(counts.veg_students, vec!["Asha"]);
    assert_eq!(counts.non_veg_students, vec!["Bina"]);
    assert_eq!(counts.caffeine["Tea"], 1);
    assert_eq!(counts.caffeine["None"], 1);

    Ok(())
}

/// Expect dated preferences for the requested date to be counted
#[tokio::test]
async fn counts_explicit_date() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mess_tables()
        .with_student(1001, "Asha")
        .build()
        .await?;
    let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
    test.preference()
        .insert_meal_choice(1, date, MealType::Veg, CaffeineChoice::BlackCoffee)
        .await?;

    let result = get_meal_count(State(test.into_app_state()), Path("2025-06-02".to_string())).await;

    assert!(result.is_ok());
    let counts: MealCountDto = json_body(result.unwrap().into_response()).await;
    assert_eq!(counts.veg, 1);
    assert_eq!(counts.caffeine_students["Black Coffee"], vec!["Asha"]);

    Ok(())
}

/// Expect 400 for a date that is not YYYY-MM-DD
#[tokio::test]
async fn rejects_invalid_date() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mess_tables().build().await?;

    let result = get_meal_count(State(test.into_app_state()), Path("02-06-2025".to_string())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
