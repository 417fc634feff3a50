//! Slack interactivity payload definitions
//!
//! Types for the JSON Slack posts to the interactivity endpoint. Slack wraps
//! the JSON in a form-encoded `payload=` field; the caller decodes that
//! before deserializing into [`InteractionEnvelope`].

use serde::Deserialize;
use serde_json::{Map, Value};

/// Outer envelope of an interactivity callback, discriminated by `type`.
///
/// Only block actions and view submissions drive the modal flow; every other
/// payload type deserializes to `Unknown` and is ignored by consumers.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InteractionEnvelope {
    /// A component interaction inside a message or view (select, button, ...)
    BlockActions(BlockActionsPayload),
    /// A modal submitted via its submit button
    ViewSubmission(ViewSubmissionPayload),
    /// Catch-all for payload types this service does not handle
    #[serde(other)]
    Unknown,
}

/// Payload of a `block_actions` interaction.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockActionsPayload {
    /// User who interacted
    pub user: Option<InteractionUser>,
    /// Short-lived token required to open a new modal
    pub trigger_id: Option<String>,
    /// The view the interaction happened in, if any
    pub view: Option<ViewHandle>,
    /// Interactions in this callback; Slack sends exactly one today
    #[serde(default)]
    pub actions: Vec<BlockAction>,
    /// Additional properties
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload of a `view_submission` interaction.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewSubmissionPayload {
    /// User who submitted
    pub user: Option<InteractionUser>,
    /// The submitted view, carrying `callback_id` and `private_metadata`
    pub view: Option<ViewHandle>,
    /// Additional properties
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The user behind an interaction.
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionUser {
    pub id: Option<String>,
    pub username: Option<String>,
}

/// Identifies one open view instance.
///
/// `id` plus `hash` address the view for in-place updates; the platform
/// rejects an update carrying a stale hash. `private_metadata` is the opaque
/// string this service round-trips between wizard steps.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewHandle {
    pub id: String,
    pub hash: Option<String>,
    pub callback_id: Option<String>,
    pub private_metadata: Option<String>,
}

/// One interaction inside a `block_actions` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockAction {
    /// Identifier the dispatcher routes on
    pub action_id: String,
    pub block_id: Option<String>,
    /// Value of a button-style element
    pub value: Option<String>,
    /// Chosen option of a select-style element
    pub selected_option: Option<SelectedOption>,
}

/// The option chosen in a static select.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectedOption {
    pub text: TextObject,
    pub value: String,
}

/// Minimal text object as received from Slack.
#[derive(Debug, Clone, Deserialize)]
pub struct TextObject {
    pub text: String,
}

impl ViewHandle {
    /// Metadata string, treating an absent field as empty.
    pub fn metadata(&self) -> &str {
        self.private_metadata.as_deref().unwrap_or_default()
    }
}
