use super::features::{
    ACQUISITION_START, ACQUISITION_STOP, GEOMETRY_FEATURES, LINE_SELECTED_FEATURES, LINE_SELECTOR,
};
use super::port::{DeviceControl, DeviceError, Port};
use super::value::FeatureValue;
use crate::profile::Operation;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, trace};

/// Register address inside the recording grabber.
///
/// Line features are banked by the `LineSelector` value active when they
/// were written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegisterKey {
    pub port: Port,
    pub feature: String,
    pub selector: Option<String>,
}

impl RegisterKey {
    pub fn new(port: Port, feature: &str) -> Self {
        Self {
            port,
            feature: feature.to_string(),
            selector: None,
        }
    }

    pub fn selected(port: Port, feature: &str, selector: &str) -> Self {
        Self {
            port,
            feature: feature.to_string(),
            selector: Some(selector.to_string()),
        }
    }
}

/// In-memory grabber that records every call it receives.
///
/// Geometry writes are refused while acquisition is running, matching real
/// camera behaviour, and individual features can be configured to reject
/// writes. Calls are recorded whether or not they succeed.
#[derive(Debug, Default)]
pub struct RecordingGrabber {
    calls: Vec<Operation>,
    registers: BTreeMap<RegisterKey, FeatureValue>,
    rejections: HashMap<(Port, String), String>,
    acquiring: bool,
    start_count: u32,
    stop_count: u32,
}

impl RecordingGrabber {
    /// Create a grabber with acquisition stopped
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grabber that is already acquiring, as a live camera would be
    pub fn acquiring() -> Self {
        Self {
            acquiring: true,
            ..Self::default()
        }
    }

    /// Refuse every write to `feature` on `port`
    pub fn reject(mut self, port: Port, feature: &str, reason: &str) -> Self {
        self.rejections
            .insert((port, feature.to_string()), reason.to_string());
        self
    }

    pub fn calls(&self) -> &[Operation] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    pub fn registers(&self) -> &BTreeMap<RegisterKey, FeatureValue> {
        &self.registers
    }

    pub fn register(&self, key: &RegisterKey) -> Option<&FeatureValue> {
        self.registers.get(key)
    }

    pub fn is_acquiring(&self) -> bool {
        self.acquiring
    }

    /// Number of (start, stop) commands executed so far
    pub fn acquisition_toggles(&self) -> (u32, u32) {
        (self.start_count, self.stop_count)
    }

    fn key_for(&self, port: Port, feature: &str) -> RegisterKey {
        if LINE_SELECTED_FEATURES.contains(&feature) {
            let selector = self
                .registers
                .get(&RegisterKey::new(port, LINE_SELECTOR))
                .and_then(FeatureValue::as_str);
            if let Some(selector) = selector {
                return RegisterKey::selected(port, feature, selector);
            }
        }
        RegisterKey::new(port, feature)
    }

    fn state_name(&self) -> &'static str {
        if self.acquiring {
            "running"
        } else {
            "stopped"
        }
    }
}

impl DeviceControl for RecordingGrabber {
    fn get(&mut self, port: Port, feature: &str) -> Result<FeatureValue, DeviceError> {
        let key = self.key_for(port, feature);
        self.registers
            .get(&key)
            .cloned()
            .ok_or_else(|| DeviceError::UnknownFeature {
                port,
                feature: feature.to_string(),
            })
    }

    fn set(&mut self, port: Port, feature: &str, value: &FeatureValue) -> Result<(), DeviceError> {
        self.calls.push(Operation::set(port, feature, value.clone()));

        if let Some(reason) = self.rejections.get(&(port, feature.to_string())) {
            debug!("Recording grabber rejected {}.{} = {}", port, feature, value);
            return Err(DeviceError::Rejected {
                port,
                feature: feature.to_string(),
                value: value.to_string(),
                reason: reason.clone(),
            });
        }

        if self.acquiring && port == Port::RemotePort && GEOMETRY_FEATURES.contains(&feature) {
            return Err(DeviceError::WrongState {
                port,
                feature: feature.to_string(),
                state: self.state_name().to_string(),
            });
        }

        let key = self.key_for(port, feature);
        trace!("Register {:?} <- {}", key, value);
        self.registers.insert(key, value.clone());
        Ok(())
    }

    fn execute(&mut self, port: Port, command: &str) -> Result<(), DeviceError> {
        self.calls.push(Operation::execute(port, command));

        if let Some(reason) = self.rejections.get(&(port, command.to_string())) {
            return Err(DeviceError::Rejected {
                port,
                feature: command.to_string(),
                value: "execute".to_string(),
                reason: reason.clone(),
            });
        }

        match (port, command) {
            (Port::RemotePort, ACQUISITION_START) => {
                self.acquiring = true;
                self.start_count += 1;
            }
            (Port::RemotePort, ACQUISITION_STOP) => {
                self.acquiring = false;
                self.stop_count += 1;
            }
            _ => {}
        }
        Ok(())
    }
}
