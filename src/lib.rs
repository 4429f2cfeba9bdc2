pub mod applier;
pub mod config;
pub mod device;
pub mod error;
pub mod profile;
pub mod simulate;
pub mod trigger;

pub use applier::{apply_profile, ApplyReport};
pub use config::GrabcfgConfig;
pub use device::{select_grabber, DeviceControl, DeviceError, FeatureValue, Port, RecordingGrabber};
pub use error::{GrabcfgError, Result};
pub use profile::{Operation, Profile, ProfileKind};
pub use simulate::{simulate, Simulation};
pub use trigger::{pulse_trigger, PulseTiming};
