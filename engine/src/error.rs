//! Engine Errors
//!
//! A single error type for everything that can fail before or during
//! startup. Geometry queries never fail at runtime: a degenerate triangle
//! or a segment parallel to a triangle's plane is reported as "no hit".

use thiserror::Error;

/// Errors produced by terrain generation, geometry input checks and
/// configuration loading.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A parameter or vector does not satisfy the operation's contract.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Reading a configuration file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// A configuration file is not valid JSON for `FlightConfig`.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl EngineError {
    pub fn invalid<T: ToString>(msg: T) -> Self {
        EngineError::InvalidArgument(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
