use crate::server::{
    bot::{
        input::Input,
        reply::Reply,
        wizard::{Action, Step},
    },
    model::student::NewStudent,
};

/// Registration wizard, collecting name, admission number, pass-out year and a photo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Registration {
    AwaitingName,
    AwaitingAdmissionNo {
        name: String,
    },
    AwaitingPassoutYear {
        name: String,
        admission_no: String,
    },
    AwaitingProfilePhoto {
        name: String,
        admission_no: String,
        passout_year: i32,
    },
}

impl Registration {
    pub fn start() -> Step<Self> {
        Step::wait(
            Self::AwaitingName,
            Reply::text("Welcome to the mess! Let's get you registered. What is your name?"),
        )
    }

    /// Advances the wizard by one input from the chat `telegram_id`.
    ///
    /// Invalid input re-prompts and keeps every answer collected so far. The final photo
    /// produces a [`Action::RegisterStudent`].
    pub fn step(self, telegram_id: i64, input: &Input) -> Step<Self> {
        match self {
            Self::AwaitingName => match input.text().filter(|text| !text.is_empty()) {
                Some(name) => Step::wait(
                    Self::AwaitingAdmissionNo {
                        name: name.to_string(),
                    },
                    Reply::text("What is your admission number?"),
                ),
                None => Step::wait(self, Reply::text("Please send your name as text.")),
            },
            Self::AwaitingAdmissionNo { name } => {
                match input.text().filter(|text| !text.is_empty()) {
                    Some(admission_no) => Step::wait(
                        Self::AwaitingPassoutYear {
                            name,
                            admission_no: admission_no.to_string(),
                        },
                        Reply::text("Which year do you pass out?"),
                    ),
                    None => Step::wait(
                        Self::AwaitingAdmissionNo { name },
                        Reply::text("Please send your admission number as text."),
                    ),
                }
            }
            Self::AwaitingPassoutYear { name, admission_no } => {
                match input.text().and_then(|text| text.parse::<i32>().ok()) {
                    Some(passout_year) => Step::wait(
                        Self::AwaitingProfilePhoto {
                            name,
                            admission_no,
                            passout_year,
                        },
                        Reply::text("Finally, send a profile photo for your meal ticket."),
                    ),
                    None => Step::wait(
                        Self::AwaitingPassoutYear { name, admission_no },
                        Reply::text("The pass-out year must be a number, for example 2027."),
                    ),
                }
            }
            Self::AwaitingProfilePhoto {
                name,
                admission_no,
                passout_year,
            } => match input {
                Input::Photo { file_id } => {
                    let reply = Reply::remove_keyboard(format!(
                        "Registration complete. Welcome, {}! Use /mealchoice to choose tomorrow's meal.",
                        name
                    ));

                    Step::done(reply).with_action(Action::RegisterStudent(NewStudent {
                        name,
                        admission_no,
                        passout_year,
                        profile_file_id: file_id.clone(),
                        telegram_id,
                    }))
                }
                _ => Step::wait(
                    Self::AwaitingProfilePhoto {
                        name,
                        admission_no,
                        passout_year,
                    },
                    Reply::text("Please send a photo."),
                ),
            },
        }
    }
}
