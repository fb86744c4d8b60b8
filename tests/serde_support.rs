#![cfg(feature = "serde")]

use nosc::{OscMessage, OscValue};

#[test]
fn message_serializes_through_json() {
    let msg = OscMessage::builder("/serde")
        .arg(3)
        .arg("three")
        .arg(b"\x03")
        .arg(true)
        .build()
        .unwrap();

    let json = serde_json::to_string(&msg).unwrap();
    let back: OscMessage = serde_json::from_str(&json).unwrap();
    assert_eq!(back, msg);
}

#[test]
fn deserialization_validates_address() {
    let json = r#"{"address":"no-slash","args":[]}"#;
    assert!(serde_json::from_str::<OscMessage>(json).is_err());

    let json = r#"{"address":"/ok","args":[{"Int32":5}]}"#;
    let msg: OscMessage = serde_json::from_str(json).unwrap();
    assert_eq!(msg.args(), &[OscValue::Int32(5)]);
}
