use super::features::*;
use super::*;
use crate::error::GrabcfgError;

#[test]
fn test_port_names_match_serde() {
    for port in [Port::RemotePort, Port::InterfacePort, Port::DevicePort] {
        assert_eq!(port.to_string(), port.name());
        assert_eq!(
            serde_json::to_value(port).unwrap(),
            serde_json::Value::from(port.name())
        );
    }
}

#[test]
fn test_feature_value_display_keeps_type() {
    assert_eq!(FeatureValue::from("200").to_string(), "\"200\"");
    assert_eq!(FeatureValue::from(200).to_string(), "200");
    assert_eq!(FeatureValue::from(true).to_string(), "true");
    assert_ne!(FeatureValue::from("200"), FeatureValue::from(200));

    assert_eq!(FeatureValue::from("200").as_str(), Some("200"));
    assert_eq!(FeatureValue::from(200).as_str(), None);
}

#[test]
fn test_recording_grabber_stores_registers() {
    let mut grabber = RecordingGrabber::new();

    grabber
        .set(Port::RemotePort, WIDTH, &FeatureValue::from(512))
        .unwrap();

    assert_eq!(
        grabber.get(Port::RemotePort, WIDTH).unwrap(),
        FeatureValue::Integer(512)
    );
    assert_eq!(grabber.calls().len(), 1);
}

#[test]
fn test_get_unknown_feature() {
    let mut grabber = RecordingGrabber::new();

    match grabber.get(Port::DevicePort, STROBE_DELAY) {
        Err(DeviceError::UnknownFeature { port, feature }) => {
            assert_eq!(port, Port::DevicePort);
            assert_eq!(feature, STROBE_DELAY);
        }
        other => panic!("Expected UnknownFeature, got {:?}", other),
    }
}

#[test]
fn test_line_features_are_banked_by_selector() {
    let mut grabber = RecordingGrabber::new();
    let port = Port::InterfacePort;

    grabber.set(port, LINE_SELECTOR, &LINE_TTLIO12.into()).unwrap();
    grabber.set(port, LINE_SOURCE, &LINE_SOURCE_LOW.into()).unwrap();
    grabber.set(port, LINE_SELECTOR, &LINE_TTLIO11.into()).unwrap();
    grabber
        .set(port, LINE_SOURCE, &LINE_SOURCE_DEVICE0_STROBE.into())
        .unwrap();

    assert_eq!(
        grabber.register(&RegisterKey::selected(port, LINE_SOURCE, LINE_TTLIO12)),
        Some(&FeatureValue::from(LINE_SOURCE_LOW))
    );
    assert_eq!(
        grabber.register(&RegisterKey::selected(port, LINE_SOURCE, LINE_TTLIO11)),
        Some(&FeatureValue::from(LINE_SOURCE_DEVICE0_STROBE))
    );

    // Reads follow the current selector
    assert_eq!(
        grabber.get(port, LINE_SOURCE).unwrap(),
        FeatureValue::from(LINE_SOURCE_DEVICE0_STROBE)
    );
}

#[test]
fn test_geometry_refused_while_acquiring() {
    let mut grabber = RecordingGrabber::acquiring();

    let result = grabber.set(Port::RemotePort, HEIGHT, &FeatureValue::from(96));
    assert!(matches!(result, Err(DeviceError::WrongState { .. })));

    grabber.execute(Port::RemotePort, ACQUISITION_STOP).unwrap();
    assert!(!grabber.is_acquiring());
    assert!(grabber
        .set(Port::RemotePort, HEIGHT, &FeatureValue::from(96))
        .is_ok());
}

#[test]
fn test_rejected_feature() {
    let mut grabber =
        RecordingGrabber::new().reject(Port::DevicePort, STROBE_DURATION, "out of range");

    let err = grabber
        .set(Port::DevicePort, STROBE_DURATION, &"12".into())
        .unwrap_err();

    assert!(err.to_string().contains("out of range"));
    // The attempt is still recorded
    assert_eq!(grabber.calls().len(), 1);
    assert!(grabber.get(Port::DevicePort, STROBE_DURATION).is_err());
}

#[test]
fn test_acquisition_toggles_are_counted() {
    let mut grabber = RecordingGrabber::new();

    grabber.execute(Port::RemotePort, ACQUISITION_STOP).unwrap();
    grabber.execute(Port::RemotePort, ACQUISITION_START).unwrap();

    assert!(grabber.is_acquiring());
    assert_eq!(grabber.acquisition_toggles(), (1, 1));
}

#[test]
fn test_select_grabber() {
    let mut grabbers = vec![RecordingGrabber::new(), RecordingGrabber::acquiring()];

    assert!(select_grabber(&mut grabbers, 1).unwrap().is_acquiring());

    match select_grabber(&mut grabbers, 2) {
        Err(GrabcfgError::Selection { index, available }) => {
            assert_eq!(index, 2);
            assert_eq!(available, 2);
        }
        other => panic!("Expected selection error, got {:?}", other.map(|_| ())),
    }

    let mut none: Vec<RecordingGrabber> = Vec::new();
    assert!(select_grabber(&mut none, 0).is_err());
}
