//! Test fixture modules for database record creation.
//!
//! - `student` - registered students
//! - `menu` - weekday menus
//! - `menu_api` - mock endpoints of a remote menu API
//! - `preference` - dated and weekly meal preferences
//! - `factory` - in-memory models that need no database

pub mod factory;
pub mod menu;
pub mod menu_api;
pub mod preference;
pub mod student;
