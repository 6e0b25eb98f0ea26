//! End-to-end masking scenarios: YAML rule declarations through the
//! registry into a live engine.

use veil::config::RuleSet;
use veil::domain::{record_from_json, Record, Value};
use veil::masking::{build_engine, MaskingEngine};

fn engine_from_yaml(yaml: &str, seed: u64) -> MaskingEngine {
    let ruleset: RuleSet = serde_yaml::from_str(yaml).unwrap();
    build_engine(&ruleset.masking, seed).unwrap()
}

fn record(json: serde_json::Value) -> Record {
    record_from_json(json).expect("test input must be an object")
}

#[test]
fn test_hash_mask_is_deterministic_across_engines_and_seeds() {
    let yaml = r#"
masking:
  - selector:
      jsonpath: "name"
    mask:
      hash: ["Michel", "Marc", "Matthias", "Youen", "Alexis"]
"#;
    let input = record(serde_json::json!({"name": "Alexis"}));

    let first = engine_from_yaml(yaml, 1).mask(&input);
    let second = engine_from_yaml(yaml, 99).mask(&input);

    assert!(first.is_complete());
    assert_eq!(first.record.get("name"), second.record.get("name"));

    let candidates = ["Michel", "Marc", "Matthias", "Youen", "Alexis"];
    let chosen = first.record.get("name").unwrap().as_text().unwrap();
    assert!(candidates.contains(&chosen));
}

#[test]
fn test_template_renders_sibling_fields() {
    let yaml = r#"
masking:
  - selector:
      jsonpath: "mail"
    mask:
      template: "{{name}}.{{surname}}@gmail.com"
"#;
    let input = record(serde_json::json!({
        "name": "Jean",
        "surname": "Bonbeur",
        "mail": "old@example.com"
    }));

    let result = engine_from_yaml(yaml, 0).mask(&input);
    assert!(result.is_complete());
    assert_eq!(
        result.record.get("mail"),
        Some(&Value::Text("Jean.Bonbeur@gmail.com".to_string()))
    );
}

#[test]
fn test_template_in_nested_record_sees_root_fields() {
    // The nested engine forwards the caller's context, so a template
    // two levels down still renders against the whole record.
    let yaml = r#"
masking:
  - selector:
      jsonpath: "customer.mail"
    mask:
      template: "{{name}}.{{surname}}@gmail.com"
"#;
    let input = record(serde_json::json!({
        "name": "Jean",
        "surname": "Bonbeur",
        "customer": {"mail": "old@example.com", "tier": "gold"}
    }));

    let result = engine_from_yaml(yaml, 0).mask(&input);
    assert!(result.is_complete());

    let customer = result.record.get("customer").unwrap().as_record().unwrap();
    assert_eq!(
        customer.get("mail"),
        Some(&Value::Text("Jean.Bonbeur@gmail.com".to_string()))
    );
    assert_eq!(customer.get("tier"), Some(&Value::Text("gold".to_string())));
}

#[test]
fn test_dotted_path_masks_one_leaf_only() {
    let yaml = r#"
masking:
  - selector:
      jsonpath: "a.b"
    mask:
      constant: "X"
"#;
    let input = record(serde_json::json!({"a": {"b": "1", "c": "2"}, "d": "3"}));

    let result = engine_from_yaml(yaml, 0).mask(&input);
    assert!(result.is_complete());

    let a = result.record.get("a").unwrap().as_record().unwrap();
    assert_eq!(a.get("b"), Some(&Value::Text("X".to_string())));
    assert_eq!(a.get("c"), Some(&Value::Text("2".to_string())));
    assert_eq!(result.record.get("d"), Some(&Value::Text("3".to_string())));
}

#[test]
fn test_failed_binding_removes_field_instead_of_leaking() {
    let yaml = r#"
masking:
  - selector:
      jsonpath: "token"
    mask:
      replacement: "does_not_exist"
  - selector:
      jsonpath: "name"
    mask:
      constant: "MASKED"
"#;
    let input = record(serde_json::json!({"token": "sensitive", "name": "Jean"}));

    let result = engine_from_yaml(yaml, 0).mask(&input);
    assert!(!result.is_complete());
    assert!(!result.record.contains_key("token"));
    assert_eq!(
        result.record.get("name"),
        Some(&Value::Text("MASKED".to_string()))
    );
}

#[test]
fn test_list_field_is_masked_element_wise() {
    let yaml = r#"
masking:
  - selector:
      jsonpath: "phones"
    mask:
      constant: "REDACTED"
"#;
    let input = record(serde_json::json!({"phones": ["0601020304", "0605060708"]}));

    let result = engine_from_yaml(yaml, 0).mask(&input);
    assert!(result.is_complete());
    assert_eq!(
        result.record.get("phones"),
        Some(&Value::List(vec![
            Value::Text("REDACTED".to_string()),
            Value::Text("REDACTED".to_string())
        ]))
    );
}

#[test]
fn test_remove_rule_deletes_field() {
    let yaml = r#"
masking:
  - selector:
      jsonpath: "ssn"
    mask:
      remove: true
"#;
    let input = record(serde_json::json!({"ssn": "1850778006084", "name": "Jean"}));

    let result = engine_from_yaml(yaml, 0).mask(&input);
    assert!(result.is_complete());
    assert!(!result.record.contains_key("ssn"));
    assert!(result.record.contains_key("name"));
}

#[test]
fn test_remove_rule_deletes_nested_field_only() {
    // Deletion through a dotted path runs inside a nested engine, not
    // at the root level; siblings of the removed leaf must survive.
    let yaml = r#"
masking:
  - selector:
      jsonpath: "account.ssn"
    mask:
      remove: true
"#;
    let input = record(serde_json::json!({
        "account": {"ssn": "1850778006084", "bank": "BDF"},
        "name": "Jean"
    }));

    let result = engine_from_yaml(yaml, 0).mask(&input);
    assert!(result.is_complete());

    let account = result.record.get("account").unwrap().as_record().unwrap();
    assert!(!account.contains_key("ssn"));
    assert_eq!(account.get("bank"), Some(&Value::Text("BDF".to_string())));
    assert_eq!(
        result.record.get("name"),
        Some(&Value::Text("Jean".to_string()))
    );
}

#[test]
fn test_regex_mask_output_matches_pattern() {
    let pattern = "0[1-7]( [0-9]{2}){4}";
    let yaml = format!(
        "masking:\n  - selector:\n      jsonpath: \"phone\"\n    mask:\n      regex: \"{pattern}\"\n"
    );
    let input = record(serde_json::json!({"phone": "06 01 02 03 04"}));

    let result = engine_from_yaml(&yaml, 7).mask(&input);
    assert!(result.is_complete());

    let generated = result.record.get("phone").unwrap().as_text().unwrap();
    let checker = regex::Regex::new(&format!("^{pattern}$")).unwrap();
    assert!(checker.is_match(generated), "generated: {generated}");
}

#[test]
fn test_same_seed_same_random_sequence() {
    let yaml = r#"
masking:
  - selector:
      jsonpath: "city"
    mask:
      randomChoice: ["Nantes", "Rennes", "Brest", "Angers"]
"#;
    let inputs: Vec<Record> = (0..10)
        .map(|i| record(serde_json::json!({"city": format!("city-{i}")})))
        .collect();

    let mut left = engine_from_yaml(yaml, 42);
    let mut right = engine_from_yaml(yaml, 42);

    for input in &inputs {
        assert_eq!(
            left.mask(input).record.get("city"),
            right.mask(input).record.get("city")
        );
    }
}

#[test]
fn test_random_int_stays_within_bounds() {
    let yaml = r#"
masking:
  - selector:
      jsonpath: "age"
    mask:
      randomInt:
        min: 18
        max: 25
"#;
    let mut engine = engine_from_yaml(yaml, 3);
    for _ in 0..50 {
        let result = engine.mask(&record(serde_json::json!({"age": 99})));
        assert!(result.is_complete());
        let Some(&Value::Int(age)) = result.record.get("age") else {
            panic!("age should be an integer");
        };
        assert!((18..=25).contains(&age), "out of bounds: {age}");
    }
}
