//! Error types

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single backend call
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection failure, or a body that could not be read or decoded
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Any non-2xx response; `body` is JSON when the server sent JSON, a string otherwise
    #[error("server responded with {status}")]
    Status {
        status: StatusCode,
        body: serde_json::Value,
    },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Body the server answered with, if a response came back at all
    pub fn response_body(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Startup failures that end the program
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("window system error: {0}")]
    Ui(#[from] eframe::Error),
}
