use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use messbot::{
    model::{api::MessageDto, menu::MenuDto},
    server::controller::menu::{get_menu, upsert_menu},
};

use super::*;

fn monday_menu() -> MenuDto {
    MenuDto {
        weekday: "Monday".to_string(),
        breakfast: Some("Idli".to_string()),
        lunch: Some("Rice".to_string()),
        snacks: None,
        dinner: Some("Soup".to_string()),
    }
}

/// Expect 200 with a confirmation message when storing a menu
#[tokio::test]
async fn upsert_returns_confirmation() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mess_tables().build().await?;

    let result = upsert_menu(State(test.into_app_state()), Json(monday_menu())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: MessageDto = json_body(resp).await;
    assert_eq!(body.message, "Menu for Monday created/updated successfully.");

    Ok(())
}

/// Expect 400 for a weekday that is not a canonical name
#[tokio::test]
async fn upsert_rejects_invalid_weekday() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mess_tables().build().await?;

    let mut menu = monday_menu();
    menu.weekday = "Mon".to_string();
    let result = upsert_menu(State(test.into_app_state()), Json(menu)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect the stored menu back with null for the missing slot
#[tokio::test]
async fn get_returns_stored_menu() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mess_tables()
        .with_menu("Monday", Some("Idli"), Some("Rice"), None, Some("Soup"))
        .build()
        .await?;

    let result = get_menu(State(test.into_app_state()), Path("Monday".to_string())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = json_body(resp).await;
    assert_eq!(
        body,
        serde_json::json!({
            "weekday": "Monday",
            "breakfast": "Idli",
            "lunch": "Rice",
            "snacks": null,
            "dinner": "Soup"
        })
    );

    Ok(())
}

/// Expect 404 for a weekday without a menu
#[tokio::test]
async fn get_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mess_tables()
        .with_menu("Monday", Some("Idli"), Some("Rice"), None, Some("Soup"))
        .build()
        .await?;

    let result = get_menu(State(test.into_app_state()), Path("Tuesday".to_string())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = json_body(resp).await;
    assert_eq!(body["error"], "Menu for Tuesday not found.");

    Ok(())
}

/// Expect 500 when required tables are not present
#[tokio::test]
async fn get_fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_menu(State(test.into_app_state()), Path("Monday".to_string())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
