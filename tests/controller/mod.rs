//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with `State(...)` for status code checks, and through the
//! full router where routing or the JSON body matters.

mod health;
mod meal_count;
mod menu;
mod router;

use axum::{body::Body, http::Response};
use http_body_util::BodyExt;
use messbot_test_utils::prelude::*;
use serde::de::DeserializeOwned;

use crate::util::TestContextExt;

/// Reads a response body as JSON
async fn json_body<T: DeserializeOwned>(resp: Response<Body>) -> T {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
