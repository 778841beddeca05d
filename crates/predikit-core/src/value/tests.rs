use super::*;
use std::cmp::Ordering;

#[test]
fn float_rejects_non_finite() {
    assert!(Float64::try_new(f64::NAN).is_err());
    assert!(Float64::try_new(f64::INFINITY).is_err());
    assert!(Float64::try_new(f64::NEG_INFINITY).is_err());
}

#[test]
fn float_canonicalizes_negative_zero() {
    let zero = Float64::try_new(0.0).unwrap();
    let neg_zero = Float64::try_new(-0.0).unwrap();
    assert_eq!(zero, neg_zero);
    assert!(neg_zero.get().is_sign_positive());
}

#[test]
fn float_deserialize_rejects_non_finite() {
    assert!(serde_json::from_str::<Float64>("45.5").is_ok());
    // JSON has no literal NaN; a raw token fails at the parser, which is
    // enough to keep non-finite payloads out
    assert!(serde_json::from_str::<Float64>("NaN").is_err());
}

#[test]
fn display_forms() {
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Int(18).to_string(), "18");
    assert_eq!(Value::try_from(45.5).unwrap().to_string(), "45.5");
    assert_eq!(Value::Text("specs".to_string()).to_string(), "specs");
    assert_eq!(Value::None.to_string(), "null");
    assert_eq!(
        Value::List(vec![Value::Int(1), Value::Text("a".to_string())]).to_string(),
        "[1, a]"
    );
}

#[test]
fn canonical_cmp_orders_by_rank_first() {
    let bool_v = Value::Bool(true);
    let int_v = Value::Int(0);
    let text_v = Value::Text("a".to_string());
    assert_eq!(canonical_cmp(&Value::None, &bool_v), Ordering::Less);
    assert_eq!(canonical_cmp(&bool_v, &int_v), Ordering::Less);
    assert_eq!(canonical_cmp(&int_v, &text_v), Ordering::Less);
    assert_eq!(canonical_cmp(&text_v, &text_v), Ordering::Equal);
}

#[test]
fn semantic_cmp_widens_across_numerics() {
    let int = Value::Int(18);
    let big = Value::BigInt(18);
    let float = Value::try_from(18.0).unwrap();
    assert_eq!(semantic_cmp(&int, &big), Some(Ordering::Equal));
    assert_eq!(semantic_cmp(&int, &float), Some(Ordering::Equal));
    assert_eq!(
        semantic_cmp(&Value::Int(17), &float),
        Some(Ordering::Less)
    );
    assert_eq!(
        semantic_cmp(&Value::BigInt(19), &float),
        Some(Ordering::Greater)
    );
}

#[test]
fn semantic_cmp_handles_magnitudes_beyond_f64_precision() {
    let huge_int = Value::BigInt((1_i128 << 60) + 1);
    let float = Value::try_from(2.0_f64.powi(60)).unwrap();
    assert_eq!(semantic_cmp(&huge_int, &float), Some(Ordering::Greater));

    let small_float = Value::try_from(1.5).unwrap();
    let big = Value::BigInt(1_i128 << 60);
    assert_eq!(semantic_cmp(&big, &small_float), Some(Ordering::Greater));
    assert_eq!(semantic_cmp(&small_float, &big), Some(Ordering::Less));
}

#[test]
fn semantic_cmp_refuses_mixed_families() {
    assert_eq!(
        semantic_cmp(&Value::Int(1), &Value::Text("1".to_string())),
        None
    );
    assert_eq!(semantic_cmp(&Value::Bool(true), &Value::Int(1)), None);
    assert_eq!(semantic_cmp(&Value::None, &Value::Int(1)), None);
}

#[test]
fn list_accessors() {
    let list = Value::List(vec![Value::Int(1), Value::Int(2)]);
    assert_eq!(list.list_len(), Some(2));
    assert!(list.is_list());
    assert_eq!(Value::Int(1).list_len(), None);
}

#[test]
fn serde_round_trip() {
    let value = Value::List(vec![
        Value::Bool(false),
        Value::Int(-3),
        Value::BigInt(1_i128 << 80),
        Value::try_from(2.5).unwrap(),
        Value::Text("hello".to_string()),
        Value::None,
    ]);

    let json = serde_json::to_string(&value).unwrap();
    let back: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(back, value);
}
