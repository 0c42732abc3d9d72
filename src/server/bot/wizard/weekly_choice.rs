use chrono::Weekday;
use entity::sea_orm_active_enums::MealType;

use crate::server::{
    bot::{
        input::Input,
        reply::Reply,
        wizard::{caffeine_prompt, parse_caffeine, parse_meal_type, veg_prompt, Action, Step},
    },
    util::time::{parse_weekday, weekday_name, WEEKDAYS},
};

const SET: &str = "Set";
const SKIP: &str = "Skip";
const FINISH: &str = "Finish";

/// Weekly plan wizard.
///
/// Starts at a chosen weekday and walks forward to Sunday without wrapping. Every day that is
/// set is saved immediately; skipped days are left untouched. `saved` counts the days set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WeeklyChoice {
    AwaitingStartDay {
        student_id: i32,
    },
    AwaitingDayAction {
        student_id: i32,
        day: Weekday,
        saved: usize,
    },
    AwaitingVeg {
        student_id: i32,
        day: Weekday,
        saved: usize,
    },
    AwaitingCaffeine {
        student_id: i32,
        day: Weekday,
        meal_type: MealType,
        saved: usize,
    },
}

impl WeeklyChoice {
    pub fn start(student_id: i32) -> Step<Self> {
        Step::wait(Self::AwaitingStartDay { student_id }, start_day_prompt())
    }

    pub fn step(self, input: &Input) -> Step<Self> {
        match self {
            Self::AwaitingStartDay { student_id } => {
                match input.text().and_then(|text| parse_weekday(text).ok()) {
                    Some(day) => Step::wait(
                        Self::AwaitingVeg {
                            student_id,
                            day,
                            saved: 0,
                        },
                        Reply::text(format!("{}:", weekday_name(day))),
                    )
                    .with_reply(veg_prompt()),
                    None => Step::wait(self, start_day_prompt()),
                }
            }
            Self::AwaitingDayAction {
                student_id,
                day,
                saved,
            } => match input.text() {
                Some(SET) => Step::wait(
                    Self::AwaitingVeg {
                        student_id,
                        day,
                        saved,
                    },
                    veg_prompt(),
                ),
                Some(SKIP) => advance(student_id, day, saved),
                Some(FINISH) if saved > 0 => finish(saved),
                _ => Step::wait(self, day_action_prompt(day, saved)),
            },
            Self::AwaitingVeg {
                student_id,
                day,
                saved,
            } => match input.text().and_then(parse_meal_type) {
                Some(meal_type) => Step::wait(
                    Self::AwaitingCaffeine {
                        student_id,
                        day,
                        meal_type,
                        saved,
                    },
                    caffeine_prompt(),
                ),
                None => Step::wait(self, veg_prompt()),
            },
            Self::AwaitingCaffeine {
                student_id,
                day,
                meal_type,
                saved,
            } => match input.text().and_then(parse_caffeine) {
                Some(caffeine) => {
                    let mut step = advance(student_id, day, saved + 1);
                    step.replies
                        .insert(0, Reply::text(format!("Saved {}.", weekday_name(day))));

                    step.with_action(Action::SaveWeeklyChoice {
                        student_id,
                        weekday: day,
                        meal_type,
                        caffeine,
                    })
                }
                None => Step::wait(self, caffeine_prompt()),
            },
        }
    }
}

/// Moves past `day`, finishing after Sunday.
fn advance(student_id: i32, day: Weekday, saved: usize) -> Step<WeeklyChoice> {
    match next_day(day) {
        Some(next) => Step::wait(
            WeeklyChoice::AwaitingDayAction {
                student_id,
                day: next,
                saved,
            },
            day_action_prompt(next, saved),
        ),
        None => finish(saved),
    }
}

fn finish(saved: usize) -> Step<WeeklyChoice> {
    let text = match saved {
        0 => "No days were set, your weekly plan is unchanged.".to_string(),
        1 => "Weekly plan saved for 1 day.".to_string(),
        n => format!("Weekly plan saved for {} days.", n),
    };

    Step::done(Reply::remove_keyboard(text))
}

fn next_day(day: Weekday) -> Option<Weekday> {
    match day {
        Weekday::Sun => None,
        day => Some(day.succ()),
    }
}

fn start_day_prompt() -> Reply {
    Reply::keyboard(
        "Which day do you want to start from?",
        WEEKDAYS.iter().map(|day| weekday_name(*day)),
    )
}

fn day_action_prompt(day: Weekday, saved: usize) -> Reply {
    let mut options = vec![SET, SKIP];
    if saved > 0 {
        options.push(FINISH);
    }

    Reply::keyboard(format!("{}: set, skip or finish?", weekday_name(day)), options)
}

#[cfg(test)]
mod tests {
    use entity::sea_orm_active_enums::CaffeineChoice;

    use super::*;

    fn text(text: &str) -> Input {
        Input::Text(text.to_string())
    }

    fn set_day(wizard: WeeklyChoice, meal: &str, caffeine: &str) -> Step<WeeklyChoice> {
        let step = wizard.step(&text(meal));
        step.next.unwrap().step(&text(caffeine))
    }

    #[test]
    fn saves_first_day_then_offers_next() {
        let step = WeeklyChoice::start(3).next.unwrap().step(&text("Saturday"));
        assert_eq!(
            step.next,
            Some(WeeklyChoice::AwaitingVeg {
                student_id: 3,
                day: Weekday::Sat,
                saved: 0
            })
        );

        let step = set_day(step.next.unwrap(), "Veg", "Tea");

        assert_eq!(
            step.action,
            Some(Action::SaveWeeklyChoice {
                student_id: 3,
                weekday: Weekday::Sat,
                meal_type: MealType::Veg,
                caffeine: CaffeineChoice::Tea,
            })
        );
        assert_eq!(
            step.next,
            Some(WeeklyChoice::AwaitingDayAction {
                student_id: 3,
                day: Weekday::Sun,
                saved: 1
            })
        );
    }

    /// Expect Sunday to end the wizard rather than wrapping to Monday
    #[test]
    fn stops_after_sunday() {
        let wizard = WeeklyChoice::AwaitingVeg {
            student_id: 3,
            day: Weekday::Sun,
            saved: 2,
        };

        let step = set_day(wizard, "Non-Veg", "None");

        assert!(step.next.is_none());
        assert!(step.action.is_some());
        assert_eq!(
            step.replies.last(),
            Some(&Reply::remove_keyboard("Weekly plan saved for 3 days."))
        );
    }

    #[test]
    fn skipping_writes_nothing() {
        let wizard = WeeklyChoice::AwaitingDayAction {
            student_id: 3,
            day: Weekday::Tue,
            saved: 1,
        };

        let step = wizard.step(&text("Skip"));

        assert!(step.action.is_none());
        assert_eq!(
            step.next,
            Some(WeeklyChoice::AwaitingDayAction {
                student_id: 3,
                day: Weekday::Wed,
                saved: 1
            })
        );
    }

    #[test]
    fn skipping_sunday_finishes() {
        let wizard = WeeklyChoice::AwaitingDayAction {
            student_id: 3,
            day: Weekday::Sun,
            saved: 1,
        };

        let step = wizard.step(&text("Skip"));

        assert!(step.next.is_none());
        assert!(step.action.is_none());
    }

    #[test]
    fn finishes_early_once_a_day_is_saved() {
        let wizard = WeeklyChoice::AwaitingDayAction {
            student_id: 3,
            day: Weekday::Wed,
            saved: 1,
        };

        let step = wizard.step(&text("Finish"));

        assert!(step.next.is_none());
        assert!(step.action.is_none());
    }

    #[test]
    fn finish_requires_a_saved_day() {
        let wizard = WeeklyChoice::AwaitingDayAction {
            student_id: 3,
            day: Weekday::Wed,
            saved: 0,
        };

        let step = wizard.clone().step(&text("Finish"));

        assert_eq!(step.next, Some(wizard));
        assert_eq!(
            step.replies[0],
            Reply::keyboard("Wednesday: set, skip or finish?", ["Set", "Skip"])
        );
    }

    #[test]
    fn set_goes_to_veg_choice() {
        let wizard = WeeklyChoice::AwaitingDayAction {
            student_id: 3,
            day: Weekday::Thu,
            saved: 1,
        };

        let step = wizard.step(&text("Set"));

        assert_eq!(
            step.next,
            Some(WeeklyChoice::AwaitingVeg {
                student_id: 3,
                day: Weekday::Thu,
                saved: 1
            })
        );
    }

    #[test]
    fn reprompts_for_unknown_start_day() {
        let wizard = WeeklyChoice::AwaitingStartDay { student_id: 3 };

        let step = wizard.clone().step(&text("Someday"));

        assert_eq!(step.next, Some(wizard));
    }
}
