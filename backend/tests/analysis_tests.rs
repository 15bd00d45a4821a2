//! Structured-output parsing tests for the water-conservation analysis

use shared::{ConservationAnalysis, StructuredOutputError};

fn well_formed_reply() -> String {
    r#"Here is the comparison you asked for:

```json
{
    "traditional_practice": ["stepwells", "check dams", "tank irrigation"],
    "traditional_efficiency": ["40%", "50%", "45%"],
    "traditional_description": ["community wells", "small barriers", "village tanks"],
    "modern_practice": ["drip irrigation", "recharge shafts", "automated tanks"],
    "improved_efficiency": ["90%", "75%", "80%"],
    "modern_description": ["targeted watering", "aquifer recharge", "sensor-driven storage"]
}
```

Let me know if you need more detail."#
        .to_string()
}

#[test]
fn test_parses_fenced_json_reply() {
    let analysis = ConservationAnalysis::from_model_reply(&well_formed_reply()).unwrap();
    assert_eq!(analysis.traditional_practice.len(), 3);
    assert_eq!(analysis.traditional_practice[0], "stepwells");
    assert_eq!(analysis.modern_practice[0], "drip irrigation");
    assert_eq!(analysis.improved_efficiency[2], "80%");
}

#[test]
fn test_parses_unlabeled_fence() {
    let reply = well_formed_reply().replace("```json", "```");
    let analysis = ConservationAnalysis::from_model_reply(&reply).unwrap();
    assert_eq!(analysis.traditional_practice.len(), 3);
}

#[test]
fn test_parses_bare_json_object() {
    let reply = r#"{
        "traditional_practice": ["stepwells"],
        "traditional_efficiency": ["40%"],
        "traditional_description": ["community wells"],
        "modern_practice": ["drip irrigation"],
        "improved_efficiency": ["90%"],
        "modern_description": ["targeted watering"]
    }"#;
    let analysis = ConservationAnalysis::from_model_reply(reply).unwrap();
    assert_eq!(analysis.modern_description, vec!["targeted watering"]);
}

#[test]
fn test_missing_field_is_a_schema_mismatch() {
    let reply = r#"```json
{
    "traditional_practice": ["stepwells"],
    "traditional_efficiency": ["40%"],
    "traditional_description": ["community wells"],
    "modern_practice": ["drip irrigation"],
    "improved_efficiency": ["90%"]
}
```"#;
    let err = ConservationAnalysis::from_model_reply(reply).unwrap_err();
    assert!(matches!(err, StructuredOutputError::SchemaMismatch(_)));
}

#[test]
fn test_free_text_reply_has_no_json_block() {
    let err = ConservationAnalysis::from_model_reply(
        "Traditional methods like stepwells are quite effective.",
    )
    .unwrap_err();
    assert!(matches!(err, StructuredOutputError::MissingJsonBlock));
}

#[test]
fn test_wrong_value_shape_is_a_schema_mismatch() {
    let reply = r#"```json
{
    "traditional_practice": "stepwells",
    "traditional_efficiency": ["40%"],
    "traditional_description": ["community wells"],
    "modern_practice": ["drip irrigation"],
    "improved_efficiency": ["90%"],
    "modern_description": ["targeted watering"]
}
```"#;
    let err = ConservationAnalysis::from_model_reply(reply).unwrap_err();
    assert!(matches!(err, StructuredOutputError::SchemaMismatch(_)));
}
