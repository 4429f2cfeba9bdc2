use super::{Operation, Profile};
use crate::device::features::*;
use crate::device::Port::{DevicePort, InterfacePort, RemotePort};
use crate::error::GrabcfgError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Built-in profiles selectable by name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileKind {
    /// 512x96 region of interest, grabber-controlled cycle with LED strobe
    #[default]
    StrobeRoi,
    /// 1920x1080 at 25 fps, free-running
    FullHd,
}

impl ProfileKind {
    pub const ALL: [ProfileKind; 2] = [ProfileKind::StrobeRoi, ProfileKind::FullHd];

    pub fn name(&self) -> &'static str {
        match self {
            ProfileKind::StrobeRoi => "strobe-roi",
            ProfileKind::FullHd => "full-hd",
        }
    }

    pub fn profile(&self) -> Profile {
        match self {
            ProfileKind::StrobeRoi => strobe_roi(),
            ProfileKind::FullHd => full_hd(),
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProfileKind {
    type Err = GrabcfgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = ProfileKind::ALL.iter().map(|k| k.name()).collect();
                GrabcfgError::profile(format!(
                    "unknown profile '{}' (known: {})",
                    s,
                    known.join(", ")
                ))
            })
    }
}

/// Small region of interest with the LED driven by the grabber strobe.
///
/// Resolution and offsets are lowered before the cycle period is shortened.
pub fn strobe_roi() -> Profile {
    Profile::new(
        ProfileKind::StrobeRoi.name(),
        "512x96 ROI, RC camera control, LED on TTLIO11 strobe, trigger on LinkTrigger0",
        vec![
            Operation::execute(RemotePort, ACQUISITION_STOP),
            // Trigger output
            Operation::set(InterfacePort, LINE_SELECTOR, LINE_TTLIO12),
            Operation::set(InterfacePort, LINE_MODE, LINE_MODE_OUTPUT),
            Operation::set(InterfacePort, LINE_SOURCE, LINE_SOURCE_LOW),
            // LED
            Operation::set(InterfacePort, LINE_SELECTOR, LINE_TTLIO11),
            Operation::set(InterfacePort, LINE_MODE, LINE_MODE_OUTPUT),
            Operation::set(InterfacePort, LINE_INVERTER, true),
            Operation::set(InterfacePort, LINE_SOURCE, LINE_SOURCE_DEVICE0_STROBE),
            Operation::set(RemotePort, WIDTH, 512),
            Operation::set(RemotePort, HEIGHT, 96),
            Operation::set(RemotePort, OFFSET_Y, 500),
            Operation::set(RemotePort, OFFSET_X, 704),
            Operation::set(RemotePort, EXPOSURE_TIME, 3),
            Operation::set(DevicePort, CAMERA_CONTROL_METHOD, CONTROL_METHOD_RC),
            Operation::set(DevicePort, EXPOSURE_RECOVERY_TIME, "200"),
            Operation::set(DevicePort, CYCLE_MINIMUM_PERIOD, "200"),
            Operation::set(DevicePort, STROBE_DELAY, "-4"),
            Operation::set(DevicePort, STROBE_DURATION, "12"),
            Operation::set(RemotePort, TRIGGER_MODE, TRIGGER_MODE_ON),
            Operation::set(RemotePort, TRIGGER_SOURCE, TRIGGER_SOURCE_LINK0),
            Operation::execute(RemotePort, ACQUISITION_START),
        ],
    )
}

/// Full HD at a reduced frame rate.
///
/// The frame rate drops before the sensor is scaled up, and offsets are
/// cleared before the resolution grows.
pub fn full_hd() -> Profile {
    Profile::new(
        ProfileKind::FullHd.name(),
        "1920x1080 at 25 fps, trigger output held low",
        vec![
            Operation::execute(RemotePort, ACQUISITION_STOP),
            Operation::set(InterfacePort, LINE_SELECTOR, LINE_TTLIO12),
            Operation::set(InterfacePort, LINE_MODE, LINE_MODE_OUTPUT),
            Operation::set(InterfacePort, LINE_SOURCE, LINE_SOURCE_LOW),
            Operation::set(RemotePort, ACQUISITION_FRAME_RATE, 25),
            Operation::set(RemotePort, EXPOSURE_TIME, 20),
            Operation::set(RemotePort, OFFSET_Y, 0),
            Operation::set(RemotePort, OFFSET_X, 0),
            Operation::set(RemotePort, WIDTH, 1920),
            Operation::set(RemotePort, HEIGHT, 1080),
            Operation::execute(RemotePort, ACQUISITION_START),
        ],
    )
}
