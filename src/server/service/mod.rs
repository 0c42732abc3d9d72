//! Service layer for business logic.
//!
//! Services sit between the repositories and the two front ends (HTTP controllers and the
//! chat bot). They validate input, translate storage failures into domain errors and hold the
//! rules that must be applied identically everywhere, such as meal preference resolution.

pub mod meal;
pub mod menu;
pub mod student;
pub mod ticket;
