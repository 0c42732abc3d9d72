//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for one table each. They are generic over
//! `ConnectionTrait` so they run equally on a pooled connection or inside a transaction.

pub mod meal_choice;
pub mod menu;
pub mod student;
pub mod weekly_choice;
