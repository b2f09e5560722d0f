use super::*;
use crate::storyboard::enums::{Origin, ParameterType};

#[test]
fn text_is_quoted_only_with_spaces() {
    assert_eq!(pack_text("bg.png"), ",bg.png");
    assert_eq!(pack_text("my file.png"), ",\"my file.png\"");
    assert_eq!(pack_text("sb/a\"b.png"), ",sb/a\"b.png");
}

#[test]
fn numbers_use_shortest_round_trip_text() {
    assert_eq!(pack_number(1.0).unwrap(), ",1");
    assert_eq!(pack_number(0.333333).unwrap(), ",0.333333");
    assert_eq!(pack_number(-32.0).unwrap(), ",-32");
    assert_eq!(pack_number(0.1 + 0.2).unwrap(), ",0.30000000000000004");
    assert_eq!(pack_number(0.0000001).unwrap(), ",0.0000001");
    assert_eq!(pack_number(1e21).unwrap(), ",1000000000000000000000");
}

#[test]
fn non_finite_numbers_are_rejected() {
    for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = pack_number(v).unwrap_err();
        assert!(matches!(err, OsbError::InvalidValue(_)));
    }
}

#[test]
fn enum_codes_pack_verbatim() {
    assert_eq!(Value::code(Origin::CentreRight).pack().unwrap(), ",7");
    assert_eq!(Value::code(ParameterType::AdditiveBlending).pack().unwrap(), ",A");
    assert_eq!(pack_enum("LoopOnce"), ",LoopOnce");
}

#[test]
fn record_fills_missing_timing_from_defaults() {
    let rec = Record::new("F")
        .field("easing", Value::Enum("0"))
        .start(None)
        .end(Some(TimeMs(900)))
        .field("start_opacity", 0.5);
    let line = rec.to_line(2, TimeMs(100), TimeMs(2000)).unwrap();
    assert_eq!(line, "  F,0,100,900,0.5\n");
}

#[test]
fn record_rejects_unset_payload() {
    let rec = Record::new("X").slot(Role::Payload("width"), None);
    let err = rec.to_line(0, TimeMs::ZERO, TimeMs::ZERO).unwrap_err();
    assert!(matches!(err, OsbError::InvalidOptionalField(_)));
    assert!(err.to_string().contains("width"));
}

#[test]
fn record_propagates_unrepresentable_payload() {
    let rec = Record::new("S").field("start_scale", f64::NAN);
    assert!(rec.to_line(0, TimeMs::ZERO, TimeMs::ZERO).is_err());
}
