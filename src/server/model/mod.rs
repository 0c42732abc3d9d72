//! Server application models and type definitions.
//!
//! This module contains the application state shared by HTTP handlers, database model type
//! aliases, and the meal preference types produced by the resolver.

pub mod app;
pub mod db;
pub mod meal;
pub mod student;
