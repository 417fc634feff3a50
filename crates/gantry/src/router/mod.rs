//! Interactivity endpoint router
//!
//! Provides the single HTTP endpoint Slack posts interaction callbacks to:
//! block actions advance the wizard modal, view submissions start the
//! chosen pipeline.

mod interactions;

pub use interactions::{INTERACTIONS_PATH, create_router};
