use nosc::{BuildError, Error, OscMessage, OscValue, ParseError};

fn sample() -> OscMessage {
    OscMessage::new(
        "/test/string",
        vec![
            OscValue::from(1),
            OscValue::from("Hello World"),
            OscValue::from(1.23_f32),
            OscValue::from(false),
            OscValue::from(true),
            OscValue::from(b"Hello".to_vec()),
        ],
    )
    .unwrap()
}

#[test]
fn message_inspection_matches_construction_order() {
    let msg = sample();

    assert_eq!(msg.type_tags(), ",isfFTb");
    assert_eq!(msg.arg(0).unwrap(), &OscValue::Int32(1));
    assert_eq!(msg.arg(1).unwrap(), &OscValue::from("Hello World"));
    let f = msg.arg(2).unwrap().as_float().expect("float argument");
    assert!((f - 1.23).abs() < 0.0001);
    assert_eq!(msg.arg(3).unwrap().as_bool(), Some(false));
    assert_eq!(msg.arg(4).unwrap().as_bool(), Some(true));
    assert_eq!(msg.arg(5).unwrap().as_blob().unwrap().as_ref(), b"Hello");
}

#[test]
fn dgram_parse_roundtrip_is_identical() {
    let msg = sample();
    let dgram = msg.encode();
    let msg2 = nosc::decode(dgram.clone().into()).unwrap();

    assert_eq!(msg.to_string(), msg2.to_string());
    assert_eq!(msg.hexdump(), msg2.hexdump());
    assert_eq!(msg2.encode(), dgram);
}

#[test]
fn hexdump_of_sample() {
    let expected = "\
00000000  2f 74 65 73 74 2f 73 74  72 69 6e 67 00 00 00 00  |/test/string....|
00000010  2c 69 73 66 46 54 62 00  00 00 00 01 48 65 6c 6c  |,isfFTb.....Hell|
00000020  6f 20 57 6f 72 6c 64 00  3f 9d 70 a4 00 00 00 05  |o World.?.p.....|
00000030  48 65 6c 6c 6f 00 00 00                           |Hello...        |
00000038";
    assert_eq!(sample().hexdump(), expected);
}

#[test]
fn garbage_is_a_parse_error() {
    let err = OscMessage::decode(b"asdasd").unwrap_err();
    assert_eq!(err.kind(), "MissingAddress");

    let err = Error::from(err);
    assert!(err.is_parse());
    assert!(err.to_string().contains("OscParseError"));
}

#[test]
fn construction_errors_are_not_parse_errors() {
    let err: Error = OscMessage::new("no-slash", [1]).unwrap_err().into();
    assert!(err.is_build());
    assert!(!err.to_string().contains("OscParseError"));

    assert!(matches!(
        OscMessage::new("/ok", ["fine", "not\0fine"]),
        Err(BuildError::InvalidArgument { index: 1, .. })
    ));
}

#[test]
fn minimal_message_is_eight_bytes() {
    let msg = OscMessage::new("/", Vec::<OscValue>::new()).unwrap();
    let dgram = msg.encode();
    assert_eq!(dgram, b"/\0\0\0,\0\0\0");

    let parsed = OscMessage::decode(&dgram).unwrap();
    assert_eq!(parsed.arg_count(), 0);
    assert!(matches!(
        parsed.arg(0),
        Err(Error::IndexOutOfRange { index: 0, len: 0 })
    ));
}

#[test]
fn special_floats_roundtrip() {
    let values = [
        f32::INFINITY,
        f32::NEG_INFINITY,
        -0.0,
        f32::MIN_POSITIVE,
        f32::from_bits(1),
        f32::NAN,
        f32::from_bits(0x7F80_0001),
    ];
    let msg = OscMessage::new("/Shit", values).unwrap();
    let parsed = OscMessage::decode(&msg.encode()).unwrap();

    for (original, decoded) in values.iter().zip(parsed.args()) {
        assert_eq!(decoded.as_float().unwrap().to_bits(), original.to_bits());
    }
}

#[test]
fn malformed_kinds_are_distinguishable() {
    let cases: &[(&[u8], &str)] = &[
        (b"", "MissingAddress"),
        (b"/abcd\0", "TruncatedAddress"),
        (b"/abc\0\0\0\0xyz\0", "MissingTypeTag"),
        (b"/abc\0\0\0\0,ii", "TruncatedTypeTag"),
        (b"/abc\0\0\0\0,x\0\0", "UnknownTypeTag"),
        (b"/abc\0\0\0\0,f\0\0\0", "TruncatedArgument"),
        (b"/abc\0\0\0\0,b\0\0\0\0\0\x09abcd", "InvalidBlobLength"),
        (b"/abc\0\0\0\0,s\0\0abc", "MissingTerminator"),
    ];

    for (bytes, kind) in cases {
        let err: ParseError = OscMessage::decode(bytes).unwrap_err();
        assert_eq!(err.kind(), *kind, "{err}");
        assert!(err.to_string().starts_with("OscParseError:"));
    }
}
