//! Relay global object identification.
//!
//! A global id is `base64("<TypeName>:<pk>")` using the standard padded
//! alphabet, so ids issued for different node types never collide.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GlobalIdError {
    #[error("Invalid global id: {0}")]
    Malformed(String),

    #[error("Must receive a {expected} id")]
    WrongType { expected: &'static str, found: String },
}

/// A decoded Relay global id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalId {
    pub type_name: String,
    pub id: i32,
}

impl GlobalId {
    pub fn new(type_name: impl Into<String>, id: i32) -> Self {
        Self {
            type_name: type_name.into(),
            id,
        }
    }

    pub fn encode(&self) -> String {
        to_global_id(&self.type_name, self.id)
    }

    pub fn decode(global_id: &str) -> Result<Self, GlobalIdError> {
        let malformed = || GlobalIdError::Malformed(global_id.to_string());

        let bytes = STANDARD.decode(global_id).map_err(|_| malformed())?;
        let text = String::from_utf8(bytes).map_err(|_| malformed())?;
        let (type_name, raw_id) = text.split_once(':').ok_or_else(malformed)?;
        if type_name.is_empty() {
            return Err(malformed());
        }
        let id = raw_id.parse::<i32>().map_err(|_| malformed())?;

        Ok(Self::new(type_name, id))
    }

    /// Decode and require a specific node type.
    pub fn decode_as(global_id: &str, expected: &'static str) -> Result<i32, GlobalIdError> {
        let decoded = Self::decode(global_id)?;
        if decoded.type_name != expected {
            return Err(GlobalIdError::WrongType {
                expected,
                found: decoded.type_name,
            });
        }
        Ok(decoded.id)
    }
}

pub fn to_global_id(type_name: &str, id: i32) -> String {
    STANDARD.encode(format!("{}:{}", type_name, id))
}
