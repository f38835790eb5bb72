use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ChatError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("{0}")]
    Auth(String),

    #[error("Invalid import file: {0}")]
    ImportInvalid(String),

    #[error("Failed to get a response. Please try again.")]
    Generation,

    #[error("JS interop error: {0}")]
    JsInterop(String),
}

impl From<serde_json::Error> for ChatError {
    fn from(e: serde_json::Error) -> Self {
        ChatError::Serialization(e.to_string())
    }
}
