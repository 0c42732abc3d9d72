//! Meal preference services.
//!
//! - [`resolver`] - effective preference of one student for one date
//! - [`count`] - meal counts across every student for one date
//! - [`preference`] - saving dated and weekly preferences

pub mod count;
pub mod preference;
pub mod resolver;

#[cfg(test)]
mod tests;
