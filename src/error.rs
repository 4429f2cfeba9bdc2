use crate::device::DeviceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrabcfgError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] toml::de::Error),

    #[error("Operation {index} ({operation}) failed: {source}")]
    Apply {
        index: usize,
        operation: String,
        #[source]
        source: DeviceError,
    },

    #[error("Profile error: {message}")]
    Profile { message: String },

    #[error("Grabber {index} not available ({available} discovered)")]
    Selection { index: usize, available: usize },
}

impl GrabcfgError {
    pub fn profile<S: Into<String>>(message: S) -> Self {
        Self::Profile {
            message: message.into(),
        }
    }

    /// Index of the operation that aborted a profile, if any
    pub fn failed_index(&self) -> Option<usize> {
        match self {
            Self::Apply { index, .. } => Some(*index),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GrabcfgError>;
