//! Slack modal bridge for launching CodePipeline executions across AWS
//! accounts.
//!
//! The crate exposes a single interactivity endpoint that Slack posts to.
//! Each interaction advances a small wizard: pick an account, pick a
//! pipeline in that account, confirm, and submit. Submission starts the
//! pipeline execution and announces it back to the channel.

pub mod cli;
pub mod config;
pub mod error;
pub mod logic;
pub mod router;
pub mod state;
