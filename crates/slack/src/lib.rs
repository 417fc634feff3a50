//! Slack Web API client and types for the interactive modal flow.
//!
//! This crate provides:
//! - Inbound interactivity payload types (`types` module): the envelope Slack
//!   posts to the interactivity endpoint, covering block actions and view
//!   submissions with a catch-all for everything else
//! - A Block Kit subset for building modal views (`blocks` module)
//! - `SlackClient` for calling the Web API (`logic` module): `views.open`,
//!   `views.update` and `chat.postMessage`
//!
//! The client is consumed through the [`SlackSurfaceLike`] trait so callers
//! can substitute a recording double in tests.

pub mod blocks;
pub mod logic;
pub mod types;

// Re-export logic components
pub use logic::{PostMessageRequest, SlackClient, SlackClientError, SlackSurfaceLike};
