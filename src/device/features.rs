//! Feature, command and value names used by the built-in profiles.
//!
//! Names follow the GenICam Standard Feature Naming Convention where one
//! exists and the grabber vendor's naming otherwise. They are sent to the
//! device verbatim and must match bit for bit.

/// Acquisition start command (`AcquisitionStart`).
pub const ACQUISITION_START: &str = "AcquisitionStart";
/// Acquisition stop command (`AcquisitionStop`).
pub const ACQUISITION_STOP: &str = "AcquisitionStop";

/// I/O line selector enumeration (`LineSelector`).
pub const LINE_SELECTOR: &str = "LineSelector";
/// Direction of the selected line (`LineMode`).
pub const LINE_MODE: &str = "LineMode";
/// Signal driving the selected output line (`LineSource`).
pub const LINE_SOURCE: &str = "LineSource";
/// Output inversion of the selected line (`LineInverter`).
pub const LINE_INVERTER: &str = "LineInverter";

/// Features whose register is banked per `LineSelector` value.
pub const LINE_SELECTED_FEATURES: &[&str] = &[LINE_MODE, LINE_SOURCE, LINE_INVERTER];

pub const WIDTH: &str = "Width";
pub const HEIGHT: &str = "Height";
pub const OFFSET_X: &str = "OffsetX";
pub const OFFSET_Y: &str = "OffsetY";
/// Exposure time feature name (`ExposureTime`).
pub const EXPOSURE_TIME: &str = "ExposureTime";
/// Acquisition frame rate (`AcquisitionFrameRate`).
pub const ACQUISITION_FRAME_RATE: &str = "AcquisitionFrameRate";

/// Region-of-interest features a camera refuses while acquiring.
pub const GEOMETRY_FEATURES: &[&str] = &[WIDTH, HEIGHT, OFFSET_X, OFFSET_Y];

/// Grabber camera control method (`CameraControlMethod`).
pub const CAMERA_CONTROL_METHOD: &str = "CameraControlMethod";
pub const EXPOSURE_RECOVERY_TIME: &str = "ExposureRecoveryTime";
pub const CYCLE_MINIMUM_PERIOD: &str = "CycleMinimumPeriod";
pub const STROBE_DELAY: &str = "StrobeDelay";
pub const STROBE_DURATION: &str = "StrobeDuration";

/// Trigger mode enumeration (`TriggerMode`).
pub const TRIGGER_MODE: &str = "TriggerMode";
/// Trigger source enumeration (`TriggerSource`).
pub const TRIGGER_SOURCE: &str = "TriggerSource";

/// Trigger output line on the grabber I/O connector.
pub const LINE_TTLIO12: &str = "TTLIO12";
/// LED strobe output line on the grabber I/O connector.
pub const LINE_TTLIO11: &str = "TTLIO11";

pub const LINE_MODE_OUTPUT: &str = "Output";
pub const LINE_SOURCE_LOW: &str = "Low";
pub const LINE_SOURCE_HIGH: &str = "High";
pub const LINE_SOURCE_DEVICE0_STROBE: &str = "Device0Strobe";

/// Camera cycle controlled by the grabber (`RC`).
pub const CONTROL_METHOD_RC: &str = "RC";
pub const TRIGGER_MODE_ON: &str = "On";
pub const TRIGGER_SOURCE_LINK0: &str = "LinkTrigger0";
