//! Block Kit subset for building modal views
//!
//! Only the pieces the pipeline-launch modal needs: sections, action blocks
//! with static selects, and the modal view container itself. All types
//! serialize to the wire shape Slack expects; nothing here is deserialized.

use serde::Serialize;

/// A `plain_text` text object. Used for titles, placeholders, option labels
/// and submit buttons.
#[derive(Debug, Clone, Serialize)]
pub struct PlainText {
    #[serde(rename = "type")]
    text_type: &'static str,
    pub text: String,
    pub emoji: bool,
}

impl PlainText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text_type: "plain_text",
            text: text.into(),
            emoji: true,
        }
    }
}

/// A `mrkdwn` text object, used inside section blocks.
#[derive(Debug, Clone, Serialize)]
pub struct MrkdwnText {
    #[serde(rename = "type")]
    text_type: &'static str,
    pub text: String,
}

impl MrkdwnText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text_type: "mrkdwn",
            text: text.into(),
        }
    }
}

/// Layout blocks used by the modal views.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A text section
    Section { text: MrkdwnText },
    /// A row of interactive elements
    Actions { elements: Vec<StaticSelect> },
    Divider,
}

impl Block {
    pub fn section(text: impl Into<String>) -> Self {
        Block::Section {
            text: MrkdwnText::new(text),
        }
    }

    pub fn actions(elements: Vec<StaticSelect>) -> Self {
        Block::Actions { elements }
    }
}

/// A `static_select` element.
#[derive(Debug, Clone, Serialize)]
pub struct StaticSelect {
    #[serde(rename = "type")]
    element_type: &'static str,
    pub placeholder: PlainText,
    pub action_id: String,
    pub options: Vec<SelectOption>,
}

impl StaticSelect {
    pub fn new(
        action_id: impl Into<String>,
        placeholder: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        Self {
            element_type: "static_select",
            placeholder: PlainText::new(placeholder),
            action_id: action_id.into(),
            options,
        }
    }
}

/// One option of a static select. The label is what the user sees; the value
/// is what the interaction payload carries back.
#[derive(Debug, Clone, Serialize)]
pub struct SelectOption {
    pub text: PlainText,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: PlainText::new(label),
            value: value.into(),
        }
    }
}

/// A modal view for `views.open` / `views.update`.
#[derive(Debug, Clone, Serialize)]
pub struct ModalView {
    #[serde(rename = "type")]
    view_type: &'static str,
    pub title: PlainText,
    pub blocks: Vec<Block>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_metadata: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit: Option<PlainText>,
    pub clear_on_close: bool,
}

impl ModalView {
    /// New modal with the given title. `clear_on_close` is always set so an
    /// abandoned wizard leaves nothing behind.
    pub fn new(title: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            view_type: "modal",
            title: PlainText::new(title),
            blocks,
            callback_id: None,
            private_metadata: None,
            submit: None,
            clear_on_close: true,
        }
    }

    pub fn with_callback_id(mut self, callback_id: impl Into<String>) -> Self {
        self.callback_id = Some(callback_id.into());
        self
    }

    pub fn with_private_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.private_metadata = Some(metadata.into());
        self
    }

    pub fn with_submit(mut self, label: impl Into<String>) -> Self {
        self.submit = Some(PlainText::new(label));
        self
    }
}
