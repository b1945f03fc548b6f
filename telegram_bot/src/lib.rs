//! ClockBlocker: a Telegram bot that answers `/time` with LLM-generated
//! musings instead of the time.
//!
//! [`TimeCommandListener`] holds the command contract and is independent of
//! Telegram; [`telegram`] adapts it to teloxide.

pub mod command;
pub mod config;
pub mod fallback;
pub mod generator;
pub mod listener;
pub mod persona;
pub mod telegram;

pub use command::{is_time_command, TIME_COMMAND};
pub use config::Args;
pub use fallback::{fallback_message, REAL_CLOCK_URL};
pub use generator::{PersonaGenerator, ResponseGenerator};
pub use listener::{Outcome, Replier, TimeCommandListener};
pub use persona::Persona;
