use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use messbot::{model::meal::MealCountDto, server::router::routes};
use tower::ServiceExt;

use super::*;

/// Expect a menu posted as JSON to be readable through the API
#[tokio::test]
async fn posts_and_reads_menu() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mess_tables().build().await?;
    let app = routes().with_state(test.into_app_state());

    let request = Request::post("/menu")
        .header("content-type", "application/json")
        .body(Body::from(
            r#"{"weekday":"Sunday","breakfast":"Puri","dinner":"Khichdi"}"#,
        ))
        .unwrap();
    let resp = app.clone().oneshot(request).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let request = Request::get("/menu/Sunday").body(Body::empty()).unwrap();
    let resp = app.oneshot(request).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = json_body(resp).await;
    assert_eq!(body["breakfast"], "Puri");
    assert_eq!(body["lunch"], serde_json::Value::Null);

    Ok(())
}

/// Expect `/mealcount/tomorrow` to route to tomorrow's counts rather than date parsing
#[tokio::test]
async fn routes_tomorrow_before_date() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mess_tables().build().await?;
    let app = routes().with_state(test.into_app_state());

    let request = Request::get("/mealcount/tomorrow")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(request).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let counts: MealCountDto = json_body(resp).await;
    assert_eq!(counts.date, "2025-05-16");

    let request = Request::get("/mealcount/2025-05-20")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(request).await.unwrap();
    let counts: MealCountDto = json_body(resp).await;
    assert_eq!(counts.date, "2025-05-20");

    Ok(())
}

#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = routes().with_state(test.into_app_state());

    let request = Request::get("/docs/openapi.json")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = json_body(resp).await;
    assert!(doc["paths"]["/menu/{weekday}"].is_object());
    assert!(doc["paths"]["/mealcount/tomorrow"].is_object());

    Ok(())
}
