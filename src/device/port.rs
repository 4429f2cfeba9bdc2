use super::value::FeatureValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Named control port of a grabber handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Port {
    /// Camera features, reached through the camera link
    RemotePort,
    /// Frame grabber interface (I/O lines)
    InterfacePort,
    /// Frame grabber device (camera cycle and strobe timing)
    DevicePort,
}

impl Port {
    pub fn name(&self) -> &'static str {
        match self {
            Port::RemotePort => "RemotePort",
            Port::InterfacePort => "InterfacePort",
            Port::DevicePort => "DevicePort",
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors reported by a device control port
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    #[error("Unknown feature {feature} on {port}")]
    UnknownFeature { port: Port, feature: String },

    #[error("{port}.{feature} rejected {value}: {reason}")]
    Rejected {
        port: Port,
        feature: String,
        value: String,
        reason: String,
    },

    #[error("{port}.{feature} is not writable while acquisition is {state}")]
    WrongState {
        port: Port,
        feature: String,
        state: String,
    },
}

/// Control interface of one grabber handle.
///
/// Every call blocks until the device has accepted or refused it. The handle
/// is exclusively borrowed for the duration of a call sequence.
pub trait DeviceControl {
    /// Read the current value of a feature
    fn get(&mut self, port: Port, feature: &str) -> Result<FeatureValue, DeviceError>;

    /// Write a feature
    fn set(&mut self, port: Port, feature: &str, value: &FeatureValue) -> Result<(), DeviceError>;

    /// Run a command feature
    fn execute(&mut self, port: Port, command: &str) -> Result<(), DeviceError>;
}
