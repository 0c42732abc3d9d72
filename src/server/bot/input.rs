use teloxide::utils::command::BotCommands;

/// Commands understood by the bot.
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "register, or check that you are registered")]
    Start,
    #[command(description = "choose your meal for tomorrow")]
    MealChoice,
    #[command(description = "set your meal for each day of the week")]
    WeeklyChoice,
    #[command(description = "show the weekly meal plan you have saved")]
    WeeklyPlan,
    #[command(description = "show a day's menu, e.g. /menu Monday")]
    Menu(String),
    #[command(description = "get your meal ticket for tomorrow")]
    Ticket,
    #[command(description = "show this help")]
    Help,
    #[command(description = "cancel the current step")]
    Cancel,
}

/// One inbound message, classified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Text(String),
    /// Photo attachment, identified by the transport file ID of its largest size
    Photo { file_id: String },
    /// Stickers, voice notes and anything else the bot has no use for
    Other,
}

impl Input {
    /// Classifies a message from its text and photo parts.
    ///
    /// Text starting with `/` that is not a known command is kept as text so that wizards can
    /// re-prompt for it.
    pub fn classify(text: Option<&str>, photo_file_id: Option<String>, bot_username: &str) -> Self {
        if let Some(file_id) = photo_file_id {
            return Self::Photo { file_id };
        }

        match text {
            Some(text) if text.starts_with('/') => match Command::parse(text, bot_username) {
                Ok(command) => Self::Command(command),
                Err(_) => Self::Text(text.to_string()),
            },
            Some(text) => Self::Text(text.to_string()),
            None => Self::Other,
        }
    }

    /// Trimmed text of a text message.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.trim()),
            _ => None,
        }
    }
}

/// Student identity of a message sender.
///
/// Only direct messages from a user carry an identity. Group chats share one dialogue between
/// all members and are ignored, as are anonymous senders and channel posts.
pub fn sender_identity(private_chat: bool, user_id: Option<u64>) -> Option<i64> {
    if !private_chat {
        return None;
    }

    user_id.and_then(|id| i64::try_from(id).ok())
}
