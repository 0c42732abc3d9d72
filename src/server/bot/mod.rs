//! Telegram chat bot.
//!
//! The bot is split so that almost everything is testable without Telegram:
//!
//! - [`input`] - what a student sent, already classified as command, text or photo
//! - [`reply`] - what the bot answers, independent of the transport
//! - [`wizard`] - pure multi-step conversation state machines
//! - [`conversation`] - runs commands and wizard side effects against the database
//! - [`telegram`] - teloxide dispatcher translating between Telegram and the above

pub mod conversation;
pub mod input;
pub mod reply;
pub mod telegram;
pub mod wizard;
