//! Telegram transport.
//!
//! Runs the teloxide dispatcher, keeps each chat's [`Conversation`] in dialogue storage and
//! translates between Telegram messages and [`Input`] / [`Reply`].

use std::{future::Future, sync::Arc};

use teloxide::{
    dispatching::dialogue::InMemStorage,
    net::Download,
    prelude::*,
    types::{FileId, InputFile, KeyboardButton, KeyboardMarkup, KeyboardRemove},
};

use crate::server::{
    bot::{
        conversation::{Conversation, ConversationService, ProfilePhotoSource},
        input::{sender_identity, Input},
        reply::Reply,
    },
    error::Error,
};

type MessDialogue = Dialogue<Conversation, InMemStorage<Conversation>>;

const KEYBOARD_COLUMNS: usize = 3;

/// Bot username used to accept `/command@username`.
#[derive(Clone)]
struct BotUsername(String);

impl ProfilePhotoSource for Bot {
    async fn download(&self, file_id: &str) -> Result<Vec<u8>, Error> {
        let file = self.get_file(FileId(file_id.to_string())).await?;

        let mut bytes = Vec::new();
        self.download_file(&file.path, &mut bytes).await?;

        Ok(bytes)
    }
}

/// Runs the bot until `shutdown` resolves.
pub async fn run<F>(bot: Bot, service: ConversationService, shutdown: F) -> Result<(), Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let me = bot.get_me().await?;
    let username = BotUsername(me.username().to_string());

    tracing::info!("Starting Telegram bot @{}", username.0);

    let handler = Update::filter_message()
        .enter_dialogue::<Message, InMemStorage<Conversation>, Conversation>()
        .endpoint(handle_message);

    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![
            InMemStorage::<Conversation>::new(),
            Arc::new(service),
            username
        ])
        .build();

    let token = dispatcher.shutdown_token();
    tokio::spawn(async move {
        shutdown.await;

        match token.shutdown() {
            Ok(stopped) => stopped.await,
            Err(e) => tracing::debug!("Telegram bot was not running at shutdown: {}", e),
        }
    });

    dispatcher.dispatch().await;

    tracing::info!("Telegram bot stopped");

    Ok(())
}

async fn handle_message(
    bot: Bot,
    dialogue: MessDialogue,
    conversation: Conversation,
    msg: Message,
    service: Arc<ConversationService>,
    username: BotUsername,
) -> Result<(), Error> {
    let sender = msg.from.as_ref().map(|user| user.id.0);
    let Some(telegram_id) = sender_identity(msg.chat.is_private(), sender) else {
        tracing::debug!("Ignoring message outside a private chat in {}", msg.chat.id);
        return Ok(());
    };

    let photo_file_id = msg
        .photo()
        .and_then(|sizes| sizes.last())
        .map(|size| size.file.id.0.clone());
    let input = Input::classify(msg.text(), photo_file_id, &username.0);

    let turn = service
        .handle(&bot, telegram_id, conversation, input)
        .await;

    match turn.conversation {
        Conversation::Idle => dialogue.exit().await?,
        conversation => dialogue.update(conversation).await?,
    }

    for reply in turn.replies {
        send_reply(&bot, msg.chat.id, reply).await?;
    }

    Ok(())
}

async fn send_reply(bot: &Bot, chat_id: ChatId, reply: Reply) -> Result<(), Error> {
    match reply {
        Reply::Text(text) => {
            bot.send_message(chat_id, text).await?;
        }
        Reply::Keyboard { text, options } => {
            let rows = options
                .chunks(KEYBOARD_COLUMNS)
                .map(|row| row.iter().map(KeyboardButton::new).collect::<Vec<_>>())
                .collect::<Vec<_>>();
            let keyboard = KeyboardMarkup::new(rows)
                .resize_keyboard()
                .one_time_keyboard();

            bot.send_message(chat_id, text)
                .reply_markup(keyboard)
                .await?;
        }
        Reply::RemoveKeyboard(text) => {
            bot.send_message(chat_id, text)
                .reply_markup(KeyboardRemove::new())
                .await?;
        }
        Reply::Photo { bytes, caption } => {
            bot.send_photo(chat_id, InputFile::memory(bytes).file_name("ticket.png"))
                .caption(caption)
                .await?;
        }
    }

    Ok(())
}
