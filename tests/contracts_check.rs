mod common;

use common::{spawn_stub, TestEnv};
use jsonschema::JSONSchema;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

#[test]
fn written_report_matches_contract() {
    let env = TestEnv::new();
    let stub = spawn_stub(|_, _| json!({"choices": [{"message": {"content": "Yes"}}]}));
    env.run_json(&[
        "check",
        env.images_arg(),
        "--backend",
        "vision",
        "--endpoint",
        stub.url.as_str(),
    ]);

    let report = env.read_report("compliance_report.json");
    validate("compliance_report.schema.json", &report);
}

#[test]
fn error_only_report_matches_contract() {
    let env = TestEnv::new();
    let v = env.run_json(&[
        "check",
        env.images_arg(),
        "--backend",
        "vision",
        "--endpoint",
        "http://127.0.0.1:9",
        "--timeout-secs",
        "2",
    ]);
    validate("compliance_report.schema.json", &v["data"]);
}
