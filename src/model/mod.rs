//! Serializable data transfer objects exposed by the HTTP API.

pub mod api;
pub mod meal;
pub mod menu;
