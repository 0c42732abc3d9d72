pub use super::meal_choice::Entity as MealChoice;
pub use super::menu::Entity as Menu;
pub use super::student::Entity as Student;
pub use super::weekly_choice::Entity as WeeklyChoice;
