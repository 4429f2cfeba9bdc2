use crate::applier::{apply_profile, ApplyReport};
use crate::config::{GrabcfgConfig, MAX_SIMULATED_GRABBERS};
use crate::device::{select_grabber, RecordingGrabber};
use crate::error::{GrabcfgError, Result};
use crate::profile::{Operation, Profile};
use crate::trigger::{pulse_trigger, PulseTiming};
use serde::Serialize;
use tracing::info;

/// Outcome of applying a profile to an in-memory grabber
#[derive(Debug, Serialize)]
pub struct Simulation {
    pub grabber: usize,
    pub report: ApplyReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pulse: Option<PulseTiming>,
    pub calls: Vec<Operation>,
}

/// Discover `config.device.discovered` running in-memory grabbers, pick the
/// configured one and apply `profile` to it, optionally followed by a
/// trigger pulse.
pub fn simulate(config: &GrabcfgConfig, profile: &Profile, pulse: bool) -> Result<Simulation> {
    let discovered = config.device.discovered;
    if discovered > MAX_SIMULATED_GRABBERS {
        return Err(GrabcfgError::Config(::config::ConfigError::Message(format!(
            "Cannot simulate {} grabbers (maximum {})",
            discovered, MAX_SIMULATED_GRABBERS
        ))));
    }

    let mut grabbers: Vec<RecordingGrabber> = (0..discovered)
        .map(|_| RecordingGrabber::acquiring())
        .collect();
    info!("Simulating {} discovered grabber(s)", grabbers.len());

    let grabber = select_grabber(&mut grabbers, config.device.index)?;
    let report = apply_profile(grabber, profile)?;

    let pulse = if pulse {
        let timing = pulse_trigger(
            grabber,
            &config.trigger.line,
            config.trigger.hold_duration(),
        )?;
        info!("Trigger onset took {:?}", timing.onset);
        Some(timing)
    } else {
        None
    };

    Ok(Simulation {
        grabber: config.device.index,
        report,
        pulse,
        calls: grabber.calls().to_vec(),
    })
}
