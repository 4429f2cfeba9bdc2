use crate::device::DeviceControl;
use crate::error::{GrabcfgError, Result};
use crate::profile::Profile;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Summary of one successful profile application
#[derive(Debug, Clone, Serialize)]
pub struct ApplyReport {
    pub profile: String,
    pub operations_applied: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    #[serde(serialize_with = "serialize_duration_ms")]
    pub elapsed: Duration,
}

fn serialize_duration_ms<S: serde::Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64() * 1000.0)
}

/// Send every operation of `profile` to `device`, in order.
///
/// The first refused operation aborts the run. Nothing is rolled back or
/// retried: the device keeps whatever the last accepted operation left it
/// with.
pub fn apply_profile<D: DeviceControl + ?Sized>(
    device: &mut D,
    profile: &Profile,
) -> Result<ApplyReport> {
    let started_at = Utc::now();
    let start = Instant::now();

    info!(
        "Applying profile '{}' ({} operations)",
        profile.name(),
        profile.len()
    );

    for (index, operation) in profile.operations().iter().enumerate() {
        debug!("[{}/{}] {}", index + 1, profile.len(), operation);

        if let Err(source) = operation.send(device) {
            error!(
                "Profile '{}' aborted at operation {} ({}): {}",
                profile.name(),
                index,
                operation,
                source
            );
            return Err(GrabcfgError::Apply {
                index,
                operation: operation.to_string(),
                source,
            });
        }
    }

    let elapsed = start.elapsed();
    info!("Profile '{}' applied in {:?}", profile.name(), elapsed);

    Ok(ApplyReport {
        profile: profile.name().to_string(),
        operations_applied: profile.len(),
        started_at,
        finished_at: Utc::now(),
        elapsed,
    })
}
