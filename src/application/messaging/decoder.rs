//! Update decoder - Parses raw webhook bodies into typed updates

use serde_json::error::Category;

use crate::domain::entities::Update;
use crate::application::errors::DecodeError;

/// Decodes webhook request bodies
#[derive(Debug, Default, Clone, Copy)]
pub struct UpdateDecoder;

impl UpdateDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode a JSON body. Unknown fields are ignored, missing required
    /// fields are an error rather than a zero value.
    pub fn decode(&self, body: &[u8]) -> Result<Update, DecodeError> {
        if body.is_empty() {
            return Err(DecodeError::InvalidJson("empty body".to_string()));
        }

        serde_json::from_slice::<Update>(body).map_err(classify)
    }
}

fn classify(err: serde_json::Error) -> DecodeError {
    let msg = err.to_string();
    match err.classify() {
        Category::Data if msg.starts_with("missing field") => DecodeError::MissingField(msg),
        Category::Data => DecodeError::WrongType(msg),
        Category::Syntax | Category::Eof | Category::Io => DecodeError::InvalidJson(msg),
    }
}
