//! Hostel mess management: a registration and meal-preference chat bot together with the
//! menu management and meal count HTTP API it shares a database with.

pub mod model;
pub mod server;
