use axum::{extract::State, http::StatusCode, response::IntoResponse};
use messbot::{
    model::api::HealthDto,
    server::{controller::health::health, model::app::AppState},
};

use super::*;

/// Expect 200 with connected status while the database is reachable
#[tokio::test]
async fn reports_connected() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = health(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: HealthDto = json_body(resp).await;
    assert_eq!(body.status, "connected");
    assert!(body.time.starts_with("2025-05-15T01:30:00"));

    Ok(())
}

/// Expect 500 once the database connection is closed
#[tokio::test]
async fn fails_when_database_closed() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state: AppState = test.to_app_state();
    test.db.close().await?;

    let result = health(State(state)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
