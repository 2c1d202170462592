use serde::{Deserialize, Serialize};

/// A `sendMessage` call, built fresh for every inbound update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub chat_id: String,
    pub text: String,
    pub reply_markup: Option<KeyboardMarkup>,
}

impl OutboundMessage {
    pub fn text(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.to_string(),
            text: text.into(),
            reply_markup: None,
        }
    }

    pub fn with_keyboard(mut self, markup: KeyboardMarkup) -> Self {
        self.reply_markup = Some(markup);
        self
    }

    pub fn has_keyboard(&self) -> bool {
        self.reply_markup.is_some()
    }

    /// Form fields posted to Telegram. `reply_markup` is only present when a
    /// keyboard is attached and is itself a JSON document.
    pub fn form_fields(&self) -> Result<Vec<(&'static str, String)>, serde_json::Error> {
        let mut fields = vec![
            ("chat_id", self.chat_id.clone()),
            ("text", self.text.clone()),
        ];
        if let Some(markup) = &self.reply_markup {
            fields.push(("reply_markup", markup.to_json()?));
        }
        Ok(fields)
    }
}

/// Reply keyboard shown under the input field
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct KeyboardMarkup {
    pub keyboard: Vec<Vec<Button>>,
    #[serde(rename = "resize_keyboard")]
    pub resize: bool,
}

impl KeyboardMarkup {
    pub fn new(rows: Vec<Vec<Button>>) -> Self {
        Self {
            keyboard: rows,
            resize: false,
        }
    }

    pub fn resized(mut self) -> Self {
        self.resize = true;
        self
    }

    pub fn button_count(&self) -> usize {
        self.keyboard.iter().map(Vec::len).sum()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Button {
    pub text: String,
}

impl Button {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
