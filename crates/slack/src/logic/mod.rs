//! Logic module for the Slack client
//!
//! Contains:
//! - SlackClient for making HTTP requests to the Slack Web API
//! - SlackSurfaceLike, the seam the modal flow is written against

mod client;

pub use client::{
    PostMessageRequest, SlackApiResponse, SlackClient, SlackClientError, SlackSurfaceLike,
};
