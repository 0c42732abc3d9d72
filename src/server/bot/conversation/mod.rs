//! Command handling and wizard side effects.
//!
//! [`ConversationService::handle`] is the single entry point for an inbound message: it takes
//! the chat's current [`Conversation`] and returns the next one together with the replies to
//! send. Failures never escape; each one is turned into a fixed message by [`user_message`].

#[cfg(test)]
mod tests;

use std::future::Future;

use chrono::{Datelike, Weekday};
use sea_orm::{ActiveEnum, DatabaseConnection};
use teloxide::utils::command::BotCommands;

use crate::{
    model::menu::MenuDto,
    server::{
        bot::{
            input::{Command, Input},
            reply::Reply,
            wizard::{
                meal_choice::MealChoice, registration::Registration, weekly_choice::WeeklyChoice,
                Action, Step,
            },
        },
        error::{mess::MessError, Error, ErrorKind},
        model::{db::WeeklyChoiceModel, meal::ResolvedMeal},
        service::{
            meal::{preference::PreferenceService, resolver::MealResolver},
            menu::source::MenuSource,
            student::StudentService,
            ticket::{TicketDetails, TicketRenderer},
        },
        util::time::{parse_weekday, weekday_name, MessClock},
    },
};

/// Per-chat conversation state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Conversation {
    #[default]
    Idle,
    Registration(Registration),
    MealChoice(MealChoice),
    WeeklyChoice(WeeklyChoice),
}

/// Fetches profile photo bytes by transport file ID.
pub trait ProfilePhotoSource {
    fn download(&self, file_id: &str) -> impl Future<Output = Result<Vec<u8>, Error>> + Send;
}

/// Outcome of handling one message.
#[derive(Debug)]
pub struct Turn {
    pub conversation: Conversation,
    pub replies: Vec<Reply>,
}

impl Turn {
    fn idle(replies: Vec<Reply>) -> Self {
        Self {
            conversation: Conversation::Idle,
            replies,
        }
    }
}

impl From<Step<Conversation>> for Turn {
    fn from(step: Step<Conversation>) -> Self {
        Self {
            conversation: step.next.unwrap_or_default(),
            replies: step.replies,
        }
    }
}

pub struct ConversationService {
    db: DatabaseConnection,
    clock: MessClock,
    menus: MenuSource,
    tickets: TicketRenderer,
}

impl ConversationService {
    pub fn new(
        db: DatabaseConnection,
        clock: MessClock,
        menus: MenuSource,
        tickets: TicketRenderer,
    ) -> Self {
        Self {
            db,
            clock,
            menus,
            tickets,
        }
    }

    /// Handles one message from the Telegram user `telegram_id`.
    ///
    /// A command always abandons the active wizard. Any other input is fed to the active
    /// wizard, and the side effect of a completed step runs before its replies are released.
    pub async fn handle<P>(
        &self,
        photos: &P,
        telegram_id: i64,
        conversation: Conversation,
        input: Input,
    ) -> Turn
    where
        P: ProfilePhotoSource + Sync,
    {
        match input {
            Input::Command(command) => {
                let abandoned = conversation != Conversation::Idle;
                if abandoned {
                    tracing::debug!(
                        "Chat {} abandoned {:?} for {:?}",
                        telegram_id,
                        conversation,
                        command
                    );
                }

                if command == Command::Cancel {
                    let reply = match abandoned {
                        true => Reply::remove_keyboard("Cancelled."),
                        false => Reply::text("Nothing to cancel."),
                    };

                    return Turn::idle(vec![reply]);
                }

                let mut turn = match self.run_command(photos, telegram_id, command).await {
                    Ok(turn) => turn,
                    Err(err) => Turn::idle(vec![failure_reply(&err)]),
                };

                if abandoned {
                    turn.replies
                        .insert(0, Reply::remove_keyboard("Previous step cancelled."));
                }

                turn
            }
            input => self.continue_wizard(telegram_id, conversation, &input).await,
        }
    }

    async fn continue_wizard(
        &self,
        telegram_id: i64,
        conversation: Conversation,
        input: &Input,
    ) -> Turn {
        let step = match conversation {
            Conversation::Idle => {
                return Turn::idle(vec![Reply::text("Send /help to see what I can do.")])
            }
            Conversation::Registration(wizard) => wizard
                .step(telegram_id, input)
                .map(Conversation::Registration),
            Conversation::MealChoice(wizard) => wizard.step(input).map(Conversation::MealChoice),
            Conversation::WeeklyChoice(wizard) => {
                wizard.step(input).map(Conversation::WeeklyChoice)
            }
        };

        if let Some(action) = &step.action {
            if let Err(err) = self.execute(action).await {
                return Turn::idle(vec![failure_reply(&err)]);
            }
        }

        step.into()
    }

    async fn execute(&self, action: &Action) -> Result<(), Error> {
        match action {
            Action::RegisterStudent(student) => {
                StudentService::new(&self.db)
                    .register(student.clone())
                    .await?;
            }
            Action::SaveMealChoice {
                student_id,
                meal_type,
                caffeine,
            } => {
                let tomorrow = self.clock.tomorrow()?;

                PreferenceService::new(&self.db)
                    .save_meal_choice(*student_id, tomorrow, *meal_type, *caffeine)
                    .await?;
            }
            Action::SaveWeeklyChoice {
                student_id,
                weekday,
                meal_type,
                caffeine,
            } => {
                PreferenceService::new(&self.db)
                    .save_weekly_choice(*student_id, *weekday, *meal_type, *caffeine)
                    .await?;
            }
        }

        Ok(())
    }

    async fn run_command<P>(
        &self,
        photos: &P,
        telegram_id: i64,
        command: Command,
    ) -> Result<Turn, Error>
    where
        P: ProfilePhotoSource + Sync,
    {
        let students = StudentService::new(&self.db);

        match command {
            Command::Start => match students.find_by_telegram_id(telegram_id).await? {
                Some(student) => Ok(Turn::idle(vec![Reply::text(format!(
                    "Welcome back, {}! You are already registered. Send /help to see what you can do.",
                    student.name
                ))])),
                None => Ok(Registration::start().map(Conversation::Registration).into()),
            },
            Command::MealChoice => {
                let student = students.require_by_telegram_id(telegram_id).await?;
                let tomorrow = self.clock.tomorrow()?;

                let mut replies = Vec::new();
                match self.menus.get_menu(tomorrow.weekday()).await {
                    Ok(menu) => replies.push(Reply::text(format_menu(&menu))),
                    Err(err) => tracing::warn!("Showing meal choice without a menu: {}", err),
                }

                let step = MealChoice::start(student.id).map(Conversation::MealChoice);
                replies.extend(step.replies);

                Ok(Turn {
                    conversation: step.next.unwrap_or_default(),
                    replies,
                })
            }
            Command::WeeklyChoice => {
                let student = students.require_by_telegram_id(telegram_id).await?;

                Ok(WeeklyChoice::start(student.id)
                    .map(Conversation::WeeklyChoice)
                    .into())
            }
            Command::WeeklyPlan => {
                let student = students.require_by_telegram_id(telegram_id).await?;
                let plan = PreferenceService::new(&self.db)
                    .weekly_plan(student.id)
                    .await?;

                Ok(Turn::idle(vec![Reply::text(format_weekly_plan(&plan))]))
            }
            Command::Menu(weekday) => {
                let weekday = match weekday.trim() {
                    "" => self.clock.tomorrow()?.weekday(),
                    weekday => parse_weekday(weekday)?,
                };
                let menu = self.menus.get_menu(weekday).await?;

                Ok(Turn::idle(vec![Reply::text(format_menu(&menu))]))
            }
            Command::Ticket => {
                let student = students.require_by_telegram_id(telegram_id).await?;
                let tomorrow = self.clock.tomorrow()?;
                let meal = MealResolver::new(&self.db)
                    .resolve(student.id, tomorrow)
                    .await?;

                let photo = match &student.profile_file_id {
                    Some(file_id) => match photos.download(file_id).await {
                        Ok(bytes) => Some(bytes),
                        Err(err) => {
                            tracing::warn!(
                                "Failed to download profile photo of student ID {}: {}",
                                student.id,
                                err
                            );
                            None
                        }
                    },
                    None => None,
                };

                let details = TicketDetails::new(student.name, tomorrow, &meal);
                let bytes = self.tickets.render(&details, photo.as_deref())?;

                Ok(Turn::idle(vec![Reply::Photo {
                    bytes,
                    caption: details.caption(),
                }]))
            }
            Command::Help => Ok(Turn::idle(vec![Reply::text(
                Command::descriptions().to_string(),
            )])),
            Command::Cancel => Ok(Turn::idle(Vec::new())),
        }
    }
}

fn failure_reply(err: &Error) -> Reply {
    Reply::remove_keyboard(user_message(err))
}

/// Fixed user-facing message for an error, by kind.
pub fn user_message(err: &Error) -> String {
    match err.kind() {
        ErrorKind::Unavailable => tracing::error!("{}", err),
        _ => tracing::debug!("{}", err),
    }

    match (err.kind(), err) {
        (ErrorKind::Validation, err) => err.to_string(),
        (ErrorKind::Conflict, _) => "You are already registered.".to_string(),
        (ErrorKind::NotFound, Error::MessError(MessError::MenuNotFound(weekday))) => {
            format!("No menu has been set for {}.", weekday)
        }
        (ErrorKind::NotFound, _) => {
            "You are not registered yet. Send /start to register.".to_string()
        }
        (ErrorKind::Unavailable, _) => "Something went wrong, please try again later.".to_string(),
    }
}

fn format_menu(menu: &MenuDto) -> String {
    let slot = |meal: &Option<String>| meal.clone().unwrap_or_else(|| "-".to_string());

    format!(
        "Menu for {}\nBreakfast: {}\nLunch: {}\nSnacks: {}\nDinner: {}",
        menu.weekday,
        slot(&menu.breakfast),
        slot(&menu.lunch),
        slot(&menu.snacks),
        slot(&menu.dinner)
    )
}

fn format_weekly_plan(plan: &[(Weekday, Option<WeeklyChoiceModel>)]) -> String {
    let fallback = ResolvedMeal::fallback();

    let days = plan
        .iter()
        .map(|(weekday, choice)| match choice {
            Some(choice) => format!(
                "{}: {}, {}",
                weekday_name(*weekday),
                choice.veg_or_nonveg.to_value(),
                choice.caffeine_choice.to_value()
            ),
            None => format!(
                "{}: not set ({}, {})",
                weekday_name(*weekday),
                fallback.meal_label(),
                fallback.caffeine_label()
            ),
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("Your weekly plan\n{}", days)
}
