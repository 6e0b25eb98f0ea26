//! Rule file loading and registry resolution from on-disk files.

use std::io::Write;
use tempfile::NamedTempFile;
use veil::config::RuleSet;
use veil::domain::MaskError;
use veil::masking::build_configuration;

fn write_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_yaml_file_resolves_to_configuration() {
    let file = write_file(
        ".yml",
        r#"
version: "1"
masking:
  - selector:
      jsonpath: "name"
    mask:
      hash: ["Michel", "Marc"]
  - selector:
      jsonpath: "customer.mail"
    mask:
      template: "{{name}}@example.com"
  - selector:
      jsonpath: "ssn"
    mask:
      remove: true
"#,
    );

    let ruleset = RuleSet::from_file(file.path()).unwrap();
    let configuration = build_configuration(&ruleset.masking, 0).unwrap();
    // The dotted rule binds under its head segment.
    let keys: Vec<&str> = configuration.entries().iter().map(|b| b.key()).collect();
    assert_eq!(keys, vec!["name", "customer", "ssn"]);
}

#[test]
fn test_json_file_resolves_to_configuration() {
    let file = write_file(
        ".json",
        r#"{
            "masking": [
                {"selector": {"jsonpath": "phone"}, "mask": {"regex": "[0-9]{10}"}}
            ]
        }"#,
    );

    let ruleset = RuleSet::from_file(file.path()).unwrap();
    build_configuration(&ruleset.masking, 0).unwrap();
}

#[test]
fn test_unknown_extension_is_parsed_as_yaml() {
    let file = write_file(
        ".conf",
        "masking:\n  - selector:\n      jsonpath: \"x\"\n    mask:\n      constant: 1\n",
    );
    let ruleset = RuleSet::from_file(file.path()).unwrap();
    assert_eq!(ruleset.masking.len(), 1);
}

#[test]
fn test_rule_without_mask_is_rejected_at_build_time() {
    let file = write_file(
        ".yml",
        "masking:\n  - selector:\n      jsonpath: \"name\"\n    mask: {}\n",
    );

    let ruleset = RuleSet::from_file(file.path()).unwrap();
    let err = build_configuration(&ruleset.masking, 0).unwrap_err();
    assert_eq!(err, MaskError::UnclaimedRule("name".to_string()));
}

#[test]
fn test_malformed_template_is_rejected_at_build_time() {
    let file = write_file(
        ".yml",
        r#"
masking:
  - selector:
      jsonpath: "mail"
    mask:
      template: "{{name}.{{surname}}@gmail.com"
"#,
    );

    let ruleset = RuleSet::from_file(file.path()).unwrap();
    let err = build_configuration(&ruleset.masking, 0).unwrap_err();
    assert!(matches!(err, MaskError::BadTemplate { .. }));
}

#[test]
fn test_malformed_regex_is_rejected_at_build_time() {
    let file = write_file(
        ".yml",
        "masking:\n  - selector:\n      jsonpath: \"phone\"\n    mask:\n      regex: \"[unclosed\"\n",
    );

    let ruleset = RuleSet::from_file(file.path()).unwrap();
    let err = build_configuration(&ruleset.masking, 0).unwrap_err();
    assert!(matches!(err, MaskError::BadPattern { .. }));
}
