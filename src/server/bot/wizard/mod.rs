//! Conversation wizards.
//!
//! A wizard is an enum whose variants are the steps it can wait in, each carrying the answers
//! collected so far. [`step`](registration::Registration::step) consumes the wizard and one
//! input and returns a [`Step`]: the wizard to wait in next (or `None` when finished), the
//! replies to send and at most one [`Action`] to persist. Wizards never touch the database.

pub mod meal_choice;
pub mod registration;
pub mod weekly_choice;

use chrono::Weekday;
use entity::sea_orm_active_enums::{CaffeineChoice, MealType};
use sea_orm::{ActiveEnum, Iterable};

use crate::server::{bot::reply::Reply, model::student::NewStudent};

/// Side effect requested by a wizard step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    RegisterStudent(NewStudent),
    /// Saved for tomorrow, evaluated when the action runs
    SaveMealChoice {
        student_id: i32,
        meal_type: MealType,
        caffeine: CaffeineChoice,
    },
    SaveWeeklyChoice {
        student_id: i32,
        weekday: Weekday,
        meal_type: MealType,
        caffeine: CaffeineChoice,
    },
}

/// Result of feeding one input to a wizard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step<W> {
    pub next: Option<W>,
    pub replies: Vec<Reply>,
    pub action: Option<Action>,
}

impl<W> Step<W> {
    /// Wait in `next` for the following input.
    pub fn wait(next: W, reply: Reply) -> Self {
        Self {
            next: Some(next),
            replies: vec![reply],
            action: None,
        }
    }

    /// End the wizard.
    pub fn done(reply: Reply) -> Self {
        Self {
            next: None,
            replies: vec![reply],
            action: None,
        }
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn with_reply(mut self, reply: Reply) -> Self {
        self.replies.push(reply);
        self
    }

    pub fn map<T>(self, f: impl FnOnce(W) -> T) -> Step<T> {
        Step {
            next: self.next.map(f),
            replies: self.replies,
            action: self.action,
        }
    }
}

pub(crate) fn meal_type_options() -> Vec<String> {
    MealType::iter().map(|meal| meal.to_value()).collect()
}

pub(crate) fn caffeine_options() -> Vec<String> {
    CaffeineChoice::iter().map(|caffeine| caffeine.to_value()).collect()
}

pub(crate) fn parse_meal_type(text: &str) -> Option<MealType> {
    MealType::try_from_value(&text.to_string()).ok()
}

pub(crate) fn parse_caffeine(text: &str) -> Option<CaffeineChoice> {
    CaffeineChoice::try_from_value(&text.to_string()).ok()
}

pub(crate) fn veg_prompt() -> Reply {
    Reply::keyboard("Veg or Non-Veg?", meal_type_options())
}

pub(crate) fn caffeine_prompt() -> Reply {
    Reply::keyboard("Tea, coffee or none?", caffeine_options())
}
