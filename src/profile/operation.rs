use crate::device::features::{ACQUISITION_START, ACQUISITION_STOP};
use crate::device::{DeviceControl, DeviceError, FeatureValue, Port};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of a configuration profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// Run a command feature (e.g. `AcquisitionStop`)
    Execute { port: Port, command: String },
    /// Write a feature
    Set {
        port: Port,
        feature: String,
        value: FeatureValue,
    },
}

impl Operation {
    pub fn execute<S: Into<String>>(port: Port, command: S) -> Self {
        Self::Execute {
            port,
            command: command.into(),
        }
    }

    pub fn set<S: Into<String>, V: Into<FeatureValue>>(port: Port, feature: S, value: V) -> Self {
        Self::Set {
            port,
            feature: feature.into(),
            value: value.into(),
        }
    }

    pub fn port(&self) -> Port {
        match self {
            Self::Execute { port, .. } | Self::Set { port, .. } => *port,
        }
    }

    /// Command or feature name addressed by this operation
    pub fn key(&self) -> &str {
        match self {
            Self::Execute { command, .. } => command,
            Self::Set { feature, .. } => feature,
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set { .. })
    }

    pub fn is_acquisition_start(&self) -> bool {
        matches!(self, Self::Execute { port: Port::RemotePort, command } if command == ACQUISITION_START)
    }

    pub fn is_acquisition_stop(&self) -> bool {
        matches!(self, Self::Execute { port: Port::RemotePort, command } if command == ACQUISITION_STOP)
    }

    /// Send this operation to a device
    pub fn send<D: DeviceControl + ?Sized>(&self, device: &mut D) -> Result<(), DeviceError> {
        match self {
            Self::Execute { port, command } => device.execute(*port, command),
            Self::Set {
                port,
                feature,
                value,
            } => device.set(*port, feature, value),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Execute { port, command } => write!(f, "{}.execute({})", port, command),
            Self::Set {
                port,
                feature,
                value,
            } => write!(f, "{}.set({}, {})", port, feature, value),
        }
    }
}
