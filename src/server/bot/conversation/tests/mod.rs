mod registration;

use chrono::{TimeZone, Utc};
use messbot_test_utils::prelude::*;

use crate::server::{
    bot::{
        conversation::{Conversation, ConversationService, ProfilePhotoSource, Turn},
        input::{Command, Input},
        reply::Reply,
    },
    error::Error,
    service::{menu::source::MenuSource, ticket::TicketRenderer},
    util::time::{MessClock, DEFAULT_OFFSET},
};

/// Photo source returning fixed bytes, or failing when it has none
struct FakePhotos(Option<Vec<u8>>);

impl ProfilePhotoSource for FakePhotos {
    async fn download(&self, file_id: &str) -> Result<Vec<u8>, Error> {
        self.0
            .clone()
            .ok_or_else(|| Error::InternalError(format!("no photo for {}", file_id)))
    }
}

/// Service pinned to 01:30 on Thursday 15 May 2025 mess time, so tomorrow is Friday 16 May
fn conversation_service(test: &TestContext) -> ConversationService {
    let now = Utc.with_ymd_and_hms(2025, 5, 14, 20, 0, 0).unwrap();

    ConversationService::new(
        test.db.clone(),
        MessClock::frozen_at(DEFAULT_OFFSET, now),
        MenuSource::Local(test.db.clone()),
        TicketRenderer::new(None),
    )
}

fn text(text: &str) -> Input {
    Input::Text(text.to_string())
}

fn command(command: Command) -> Input {
    Input::Command(command)
}

/// Text of every reply, in order
fn texts(turn: &Turn) -> Vec<String> {
    turn.replies
        .iter()
        .map(|reply| match reply {
            Reply::Text(text) | Reply::RemoveKeyboard(text) => text.clone(),
            Reply::Keyboard { text, .. } => text.clone(),
            Reply::Photo { caption, .. } => caption.clone(),
        })
        .collect()
}

/// Feeds inputs one after another, threading the conversation state
async fn run(
    service: &ConversationService,
    telegram_id: i64,
    mut conversation: Conversation,
    inputs: Vec<Input>,
) -> Turn {
    let mut last = None;
    for input in inputs {
        let turn = service
            .handle(&FakePhotos(None), telegram_id, conversation, input)
            .await;
        conversation = turn.conversation.clone();
        last = Some(turn);
    }

    last.unwrap()
}
