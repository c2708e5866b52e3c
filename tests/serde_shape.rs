//! External JSON shape of values, errors and outcomes
#![cfg(feature = "serde")]

use fieldcheck::{attrs, not_blank, subset_of, FieldErrors, Value};
use serde_json::json;

#[test]
fn test_field_errors_serialize_as_ordered_map() {
    let options = vec![Value::from("a"), Value::from("b"), Value::from("c")];
    let form = attrs! {
        "field" => vec![Value::from("a"), Value::Int(2), Value::from("not there")],
        "name" => "",
    };
    let errors = subset_of(&options, "field", &form)
        .concat(not_blank("name", &form))
        .into_result()
        .unwrap_err();

    let text = serde_json::to_string(&errors).unwrap();
    assert!(text.find("\"field\"").unwrap() < text.find("\"name\"").unwrap());

    assert_eq!(
        serde_json::to_value(&errors).unwrap(),
        json!({
            "field": [{
                "code": "not_all_in",
                "options": ["a", "b", "c"],
                "invalid": [2, "not there"],
                "message": "\"2\" and \"not there\" are not valid options for \"field\" (valid options are \"a\", \"b\", or \"c\")",
            }],
            "name": [{
                "code": "blank",
                "message": "\"name\" must not be blank",
            }],
        })
    );
}

#[test]
fn test_field_errors_round_trip() {
    let form = attrs! {};
    let errors = not_blank("x", &form).into_result().unwrap_err();
    let text = serde_json::to_string(&errors).unwrap();
    let restored: FieldErrors = serde_json::from_str(&text).unwrap();
    assert_eq!(restored, errors);
}

#[test]
fn test_value_untagged() {
    let value: Value = serde_json::from_str(r#"[null, true, 3, "x", ["y"]]"#).unwrap();
    assert_eq!(
        value,
        Value::List(vec![
            Value::Null,
            Value::Bool(true),
            Value::Int(3),
            Value::from("x"),
            Value::from(vec!["y"]),
        ])
    );
}

#[test]
fn test_attrs_from_json_form() {
    let form: fieldcheck::Attrs =
        serde_json::from_str(r#"{"name": "  ", "tags": []}"#).unwrap();
    let result = not_blank("name", &form);
    assert!(result.is_failure());
    assert_eq!(form.get_index(1).map(|(k, _)| k.as_str()), Some("tags"));
}
