use std::fmt;
use reqwest::Error as ReqwestError;
use serde_json::Error as SerdeError;

pub struct AppError {
    pub error_type: ErrorType,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    ConfigError,
    UpstreamError,
    ParseError,
    InternalError,
}

impl AppError {
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> AppError {
        AppError { error_type, message: message.into() }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {}", self.error_type, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<ReqwestError> for AppError {
    fn from(error: ReqwestError) -> AppError {
        AppError::new(ErrorType::UpstreamError, format!("Connection error: {}", error))
    }
}

impl From<SerdeError> for AppError {
    fn from(error: SerdeError) -> AppError {
        AppError::new(ErrorType::ParseError, error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> AppError {
        AppError::new(ErrorType::InternalError, format!("io error: {}", error))
    }
}
