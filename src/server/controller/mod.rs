//! HTTP controller endpoints for the menu and meal count API.
//!
//! Axum handlers validate path and body input, call the service layer and turn results into
//! JSON responses. Every handler is annotated for utoipa so it appears in the OpenAPI document.

pub mod health;
pub mod meal_count;
pub mod menu;
