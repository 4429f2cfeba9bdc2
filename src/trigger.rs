use crate::device::features::{
    LINE_MODE, LINE_MODE_OUTPUT, LINE_SELECTOR, LINE_SOURCE, LINE_SOURCE_HIGH, LINE_SOURCE_LOW,
};
use crate::device::{DeviceControl, Port};
use crate::error::{GrabcfgError, Result};
use crate::profile::Operation;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Timing of one trigger pulse
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PulseTiming {
    /// Time the device took to accept the rising edge
    pub onset: Duration,
    /// Time between the rising edge being accepted and the falling edge being sent
    pub width: Duration,
}

/// Drive a grabber output line high, hold it for at least `hold`, then drive
/// it low again.
///
/// The line is selected and switched to output first. The hold is
/// busy-waited.
pub fn pulse_trigger<D: DeviceControl + ?Sized>(
    device: &mut D,
    line: &str,
    hold: Duration,
) -> Result<PulseTiming> {
    let prepare = [
        Operation::set(Port::InterfacePort, LINE_SELECTOR, line),
        Operation::set(Port::InterfacePort, LINE_MODE, LINE_MODE_OUTPUT),
    ];
    for (index, operation) in prepare.iter().enumerate() {
        send(device, index, operation)?;
    }

    let high = Operation::set(Port::InterfacePort, LINE_SOURCE, LINE_SOURCE_HIGH);
    let onset = Instant::now();
    send(device, 2, &high)?;
    let raised = Instant::now();
    let onset = raised - onset;

    while raised.elapsed() < hold {
        std::hint::spin_loop();
    }
    let width = raised.elapsed();

    let low = Operation::set(Port::InterfacePort, LINE_SOURCE, LINE_SOURCE_LOW);
    if let Err(e) = send(device, 3, &low) {
        warn!("Trigger line {} may be stuck high", line);
        return Err(e);
    }

    debug!("Pulsed {} (onset {:?}, width {:?})", line, onset, width);
    Ok(PulseTiming { onset, width })
}

fn send<D: DeviceControl + ?Sized>(device: &mut D, index: usize, operation: &Operation) -> Result<()> {
    operation
        .send(device)
        .map_err(|source| GrabcfgError::Apply {
            index,
            operation: operation.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::features::LINE_TTLIO12;
    use crate::device::{FeatureValue, RecordingGrabber, RegisterKey};

    #[test]
    fn test_pulse_sequence() {
        let mut grabber = RecordingGrabber::new();

        pulse_trigger(&mut grabber, LINE_TTLIO12, Duration::from_micros(1)).unwrap();

        let keys: Vec<String> = grabber.calls().iter().map(|op| op.to_string()).collect();
        assert_eq!(
            keys,
            vec![
                "InterfacePort.set(LineSelector, \"TTLIO12\")",
                "InterfacePort.set(LineMode, \"Output\")",
                "InterfacePort.set(LineSource, \"High\")",
                "InterfacePort.set(LineSource, \"Low\")",
            ]
        );
        assert_eq!(
            grabber.register(&RegisterKey::selected(
                Port::InterfacePort,
                LINE_SOURCE,
                LINE_TTLIO12
            )),
            Some(&FeatureValue::from(LINE_SOURCE_LOW))
        );
    }

    #[test]
    fn test_pulse_holds_line_high() {
        let mut grabber = RecordingGrabber::new();
        let hold = Duration::from_millis(2);

        let timing = pulse_trigger(&mut grabber, LINE_TTLIO12, hold).unwrap();

        assert!(timing.width >= hold);
        assert_eq!(grabber.calls().len(), 4);
    }

    #[test]
    fn test_pulse_stops_when_line_refused() {
        let mut grabber =
            RecordingGrabber::new().reject(Port::InterfacePort, LINE_MODE, "input only");

        let err = pulse_trigger(&mut grabber, "TTLIO01", Duration::ZERO).unwrap_err();

        assert_eq!(err.failed_index(), Some(1));
        assert_eq!(grabber.calls().len(), 2);
    }
}
