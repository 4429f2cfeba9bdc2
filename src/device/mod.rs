pub mod features;
mod port;
mod recording;
mod value;
#[cfg(test)]
mod tests;

pub use port::{DeviceControl, DeviceError, Port};
pub use recording::{RecordingGrabber, RegisterKey};
pub use value::FeatureValue;

use crate::error::{GrabcfgError, Result};

/// Pick one handle out of the discovered grabbers
pub fn select_grabber<G>(grabbers: &mut [G], index: usize) -> Result<&mut G> {
    let available = grabbers.len();
    grabbers
        .get_mut(index)
        .ok_or(GrabcfgError::Selection { index, available })
}
