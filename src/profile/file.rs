use super::{Operation, Profile};
use crate::device::{FeatureValue, Port};
use crate::error::{GrabcfgError, Result};
use serde::{Deserialize, Serialize};

/// On-disk form of a profile.
///
/// ```toml
/// name = "strobe-roi"
///
/// [[operations]]
/// port = "RemotePort"
/// execute = "AcquisitionStop"
///
/// [[operations]]
/// port = "RemotePort"
/// set = "Width"
/// value = 512
/// ```
#[derive(Debug, Deserialize, Serialize)]
pub(super) struct ProfileDocument {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub operations: Vec<OperationDocument>,
}

#[derive(Debug, Deserialize, Serialize)]
pub(super) struct OperationDocument {
    pub port: Port,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execute: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<FeatureValue>,
}

impl OperationDocument {
    fn into_operation(self, index: usize) -> Result<Operation> {
        match (self.execute, self.set, self.value) {
            (Some(command), None, None) => Ok(Operation::execute(self.port, command)),
            (None, Some(feature), Some(value)) => Ok(Operation::set(self.port, feature, value)),
            (None, Some(feature), None) => Err(GrabcfgError::profile(format!(
                "operation {}: set '{}' has no value",
                index, feature
            ))),
            (Some(_), _, _) => Err(GrabcfgError::profile(format!(
                "operation {}: execute takes no set or value",
                index
            ))),
            (None, None, _) => Err(GrabcfgError::profile(format!(
                "operation {}: expected 'execute' or 'set'",
                index
            ))),
        }
    }
}

impl From<&Operation> for OperationDocument {
    fn from(operation: &Operation) -> Self {
        match operation {
            Operation::Execute { port, command } => Self {
                port: *port,
                execute: Some(command.clone()),
                set: None,
                value: None,
            },
            Operation::Set {
                port,
                feature,
                value,
            } => Self {
                port: *port,
                execute: None,
                set: Some(feature.clone()),
                value: Some(value.clone()),
            },
        }
    }
}

impl ProfileDocument {
    pub fn into_profile(self) -> Result<Profile> {
        let operations = self
            .operations
            .into_iter()
            .enumerate()
            .map(|(index, op)| op.into_operation(index))
            .collect::<Result<Vec<_>>>()?;

        Ok(Profile::new(self.name, self.description, operations))
    }
}

impl From<&Profile> for ProfileDocument {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name().to_string(),
            description: profile.description().to_string(),
            operations: profile.operations().iter().map(Into::into).collect(),
        }
    }
}
