use std::fmt;

#[derive(Debug)]
pub enum StoreError {
    Io(String),
    Json(String),
    Number(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(msg) => write!(f, "storage io error: {msg}"),
            StoreError::Json(msg) => write!(f, "json error: {msg}"),
            StoreError::Number(msg) => write!(f, "invalid number: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Json(err.to_string())
    }
}
