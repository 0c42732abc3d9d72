use entity::sea_orm_active_enums::MealType;
use sea_orm::ActiveEnum;

use crate::server::bot::{
    input::Input,
    reply::Reply,
    wizard::{caffeine_prompt, parse_caffeine, parse_meal_type, veg_prompt, Action, Step},
};

/// Choice of tomorrow's meal for a registered student.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MealChoice {
    AwaitingVegChoice {
        student_id: i32,
    },
    AwaitingCaffeineChoice {
        student_id: i32,
        meal_type: MealType,
    },
}

impl MealChoice {
    pub fn start(student_id: i32) -> Step<Self> {
        Step::wait(Self::AwaitingVegChoice { student_id }, veg_prompt())
    }

    pub fn step(self, input: &Input) -> Step<Self> {
        match self {
            Self::AwaitingVegChoice { student_id } => {
                match input.text().and_then(parse_meal_type) {
                    Some(meal_type) => Step::wait(
                        Self::AwaitingCaffeineChoice {
                            student_id,
                            meal_type,
                        },
                        caffeine_prompt(),
                    ),
                    None => Step::wait(self, veg_prompt()),
                }
            }
            Self::AwaitingCaffeineChoice {
                student_id,
                meal_type,
            } => match input.text().and_then(parse_caffeine) {
                Some(caffeine) => Step::done(Reply::remove_keyboard(format!(
                    "Saved your meal for tomorrow: {}, caffeine: {}.",
                    meal_type.to_value(),
                    caffeine.to_value()
                )))
                .with_action(Action::SaveMealChoice {
                    student_id,
                    meal_type,
                    caffeine,
                }),
                None => Step::wait(self, caffeine_prompt()),
            },
        }
    }
}
