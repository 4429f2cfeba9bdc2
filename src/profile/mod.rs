mod builtin;
mod file;
mod operation;

pub use builtin::{full_hd, strobe_roi, ProfileKind};
pub use operation::Operation;

use crate::error::{GrabcfgError, Result};
use file::ProfileDocument;
use std::path::Path;
use tracing::{debug, info};

/// Ordered list of port operations describing one complete device
/// configuration. Operation order is significant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    name: String,
    description: String,
    operations: Vec<Operation>,
}

impl Profile {
    pub fn new<N: Into<String>, D: Into<String>>(
        name: N,
        description: D,
        operations: Vec<Operation>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            operations,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Check that the profile is bracketed by one acquisition stop and one
    /// acquisition start, with nothing toggling acquisition in between.
    ///
    /// Feature values are not inspected; range checks belong to the device.
    pub fn check_structure(&self) -> Result<()> {
        let (first, last) = match (self.operations.first(), self.operations.last()) {
            (Some(first), Some(last)) if self.operations.len() >= 2 => (first, last),
            _ => {
                return Err(GrabcfgError::profile(format!(
                    "profile '{}' needs at least an acquisition stop and start",
                    self.name
                )))
            }
        };

        if !first.is_acquisition_stop() {
            return Err(GrabcfgError::profile(format!(
                "profile '{}' must begin with RemotePort.execute(AcquisitionStop), found {}",
                self.name, first
            )));
        }

        if !last.is_acquisition_start() {
            return Err(GrabcfgError::profile(format!(
                "profile '{}' must end with RemotePort.execute(AcquisitionStart), found {}",
                self.name, last
            )));
        }

        let inner = &self.operations[1..self.operations.len() - 1];
        for (offset, op) in inner.iter().enumerate() {
            if op.is_acquisition_start() || op.is_acquisition_stop() {
                return Err(GrabcfgError::profile(format!(
                    "profile '{}' toggles acquisition at operation {}",
                    self.name,
                    offset + 1
                )));
            }
        }

        if let Some(index) = self.operations.iter().position(|op| op.key().trim().is_empty()) {
            return Err(GrabcfgError::profile(format!(
                "profile '{}' has an empty feature name at operation {}",
                self.name, index
            )));
        }

        Ok(())
    }

    /// Parse a profile from TOML and check its structure
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let document: ProfileDocument = toml::from_str(contents)?;
        let profile = document.into_profile()?;
        profile.check_structure()?;
        Ok(profile)
    }

    /// Load a profile from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading profile from: {}", path.display());

        let contents = std::fs::read_to_string(path)?;
        let profile = Self::from_toml_str(&contents)?;

        info!(
            "Loaded profile '{}' ({} operations) from {}",
            profile.name,
            profile.len(),
            path.display()
        );
        Ok(profile)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(&ProfileDocument::from(self))?)
    }
}
