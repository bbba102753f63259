use super::*;

#[test]
fn primitive_conversions_pick_expected_variant() {
    assert_eq!(Value::from(30), Value::Int(30));
    assert_eq!(Value::from(30u32), Value::Uint(30));
    assert_eq!(Value::from(1.5), Value::Float(1.5));
    assert_eq!(Value::from("al"), Value::Text("al".to_string()));
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some(7)), Value::Int(7));
}

#[test]
fn vec_conversion_builds_list() {
    let value = Value::from(vec!["a", "b"]);

    assert_eq!(
        value.as_list(),
        Some(&[Value::from("a"), Value::from("b")][..])
    );
    assert_eq!(value.kind(), ValueKind::List);
}

#[test]
fn half_open_ranges_use_null_bounds() {
    let lower_only = Value::at_least(18);
    assert_eq!(lower_only.as_range(), Some((&Value::Int(18), &Value::Null)));

    let upper_only = Value::at_most(65);
    assert_eq!(upper_only.as_range(), Some((&Value::Null, &Value::Int(65))));

    let open = Value::between((), ());
    let (lower, upper) = open.as_range().expect("range");
    assert!(lower.is_null() && upper.is_null());
}

#[test]
fn accessors_reject_other_kinds() {
    assert_eq!(Value::Int(1).as_text(), None);
    assert_eq!(Value::from("x").as_bool(), None);
    assert!(Value::from("x").as_range().is_none());
    assert!(Value::Null.as_list().is_none());
}

#[test]
fn scalar_classification() {
    assert!(Value::Null.is_scalar());
    assert!(Value::from("x").is_scalar());
    assert!(!Value::list([1, 2]).is_scalar());
    assert!(!Value::at_least(1).is_scalar());
}

#[test]
fn kind_labels_are_stable() {
    assert_eq!(Value::Null.kind().to_string(), "null");
    assert_eq!(Value::at_most(1).kind().to_string(), "range");
}
