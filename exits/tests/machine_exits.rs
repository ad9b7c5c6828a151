use exit_coerce_core::CoercionConfig;
use exit_coerce_exits::{ExitDescriptor, ExitError, ExitSet};
use serde_json::{Value, json};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn success_exit(example: Value) -> ExitSet {
    ExitSet::from_descriptors(
        [
            ("success", ExitDescriptor::with_example(example)),
            ("error", ExitDescriptor::with_example(json!("world"))),
        ],
        CoercionConfig::default(),
    )
    .unwrap()
}

fn find_one_job_exits() -> ExitSet {
    let yaml = r#"
then:
  friendlyName: then
  example:
    title: scott
    description: scott
    votes: 123
    id: 123
error:
  example: null
notFound:
  void: true
"#;
    let declared: Value = serde_yaml::from_str(yaml).unwrap();
    ExitSet::from_json(&declared, CoercionConfig::default())
        .unwrap()
        .with_default_exit("then")
}

// ---------------------------------------------------------------------------
// Success exit coercion
// ---------------------------------------------------------------------------

#[test]
fn test_pass_through_expected_data() {
    let exits = success_exit(json!("hello"));
    assert_eq!(exits.coerce("success", Some(&json!("foo"))).unwrap(), json!("foo"));
}

#[test]
fn test_invalid_exit_data_coerced_to_declared_type() {
    let exits = success_exit(json!(4));
    assert_eq!(exits.coerce_default(Some(&json!("100"))).unwrap(), json!(100));
    assert_eq!(exits.coerce_default(None).unwrap(), json!(0));
    assert_eq!(exits.coerce_default(Some(&json!("whatever"))).unwrap(), json!(0));
    assert_eq!(exits.coerce_default(Some(&json!(true))).unwrap(), json!(1));
}

#[test]
fn test_base_values_for_structured_examples() {
    let cases = [
        (json!({}), json!({})),
        (json!({"foo": "bar"}), json!({"foo": ""})),
        (json!({"foo": ["stuff"], "bar": {}}), json!({"foo": [], "bar": {}})),
        (
            json!({"foo": ["stuff"], "bar": {"baz": 12412}}),
            json!({"foo": [], "bar": {"baz": 0}}),
        ),
        (json!({"foo": ["stuff"], "someArray": ["*"]}), json!({"foo": [], "someArray": []})),
        (json!([]), json!([])),
        (json!([123]), json!([])),
        (json!(["stuff"]), json!([])),
        (json!([true]), json!([])),
    ];

    for (example, expected) in cases {
        let exits = success_exit(example.clone());
        assert_eq!(
            exits.coerce("success", Some(&json!(0))).unwrap(),
            expected,
            "example {example}"
        );
    }
}

#[test]
fn test_wildcard_array_member_kept_verbatim() {
    let exits = success_exit(json!({"foo": ["stuff"], "someArray": ["*"]}));
    let actual = json!({"foo": ["hi"], "someArray": [1234]});
    assert_eq!(exits.coerce("success", Some(&actual)).unwrap(), actual);
}

// ---------------------------------------------------------------------------
// Record-shaped exits
// ---------------------------------------------------------------------------

#[test]
fn test_null_field_coerced_to_zero() {
    let exits = find_one_job_exits();
    let thing = json!({"id": 1, "votes": null, "description": "stuff", "title": "thing"});

    let via_name = exits.coerce("then", Some(&thing)).unwrap();
    let via_default = exits.coerce_default(Some(&thing)).unwrap();

    assert_eq!(via_name["votes"], json!(0));
    assert_eq!(via_name, via_default);
    assert_eq!(exits.default_exit().unwrap().label(), "then");
}

#[test]
fn test_freeform_and_void_exits_pass_through() {
    let exits = find_one_job_exits();
    let err_value = json!({"message": "boom", "code": 500});

    assert_eq!(exits.coerce("error", Some(&err_value)).unwrap(), err_value);
    assert_eq!(exits.coerce("notFound", None).unwrap(), Value::Null);
    assert!(exits.get("notFound").unwrap().is_void());
}

#[test]
fn test_coercion_failure_names_exit() {
    let exits = ExitSet::from_descriptors(
        [("success", ExitDescriptor::with_example(json!({"a": {"b": 1}})))],
        CoercionConfig::default().with_max_depth(1),
    )
    .unwrap();

    let err = exits
        .coerce("success", Some(&json!({"a": {"b": 2}})))
        .unwrap_err();
    match err {
        ExitError::Coercion { exit, source } => {
            assert_eq!(exit, "success");
            assert_eq!(source.path().to_string(), "$.a");
        }
        other => panic!("expected coercion error, got {other:?}"),
    }
}

#[test]
fn test_invalid_example_names_exit() {
    let err = ExitSet::from_json(
        &json!({"success": {"example": {"ids": [1, 2]}}}),
        CoercionConfig::default(),
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "exit `success` declares an invalid example: array example at $.ids has 2 elements, expected at most one"
    );
}
