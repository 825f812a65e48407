use serde_json::Value;
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("CLI crate should be inside workspace")
        .to_path_buf()
}

fn load_fixture(name: &str) -> Value {
    let path = workspace_root()
        .join("clubmetrics_api/tests/fixtures")
        .join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read fixture {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("fixture is valid JSON")
}

fn load_schema() -> Value {
    let path = workspace_root().join("schema/company.schema.json");
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read schema {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("schema is valid JSON")
}

fn extract_companies(fixture: &Value) -> Value {
    fixture["companies"].clone()
}

// ---------------------------------------------------------------------------
// Positive validation: fixtures conform to the schema
// ---------------------------------------------------------------------------

#[test]
fn test_companies_fixture_conforms_to_schema() {
    let fixture = load_fixture("companies.json");
    let schema = load_schema();
    let data = extract_companies(&fixture);

    let validator = jsonschema::draft202012::new(&schema).expect("company schema compiles");
    let result = validator.validate(&data);
    if let Err(e) = &result {
        panic!("companies fixture failed validation: {e}");
    }
}

#[test]
fn test_empty_company_list_conforms_to_schema() {
    let fixture = load_fixture("companies_minimal.json");
    let schema = load_schema();
    let data = extract_companies(&fixture);

    let validator = jsonschema::draft202012::new(&schema).expect("company schema compiles");
    let result = validator.validate(&data);
    if let Err(e) = &result {
        panic!("minimal fixture failed validation: {e}");
    }
}

// ---------------------------------------------------------------------------
// Negative validation: the schema rejects invalid data
// ---------------------------------------------------------------------------

#[test]
fn test_schema_rejects_company_missing_name() {
    let fixture = load_fixture("companies.json");
    let schema = load_schema();
    let mut data = extract_companies(&fixture);

    data[0]
        .as_object_mut()
        .expect("company is an object")
        .remove("name");

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject a company missing its name"
    );
}

#[test]
fn test_schema_rejects_non_numeric_transaction_revenue() {
    let fixture = load_fixture("companies.json");
    let schema = load_schema();
    let mut data = extract_companies(&fixture);

    data[0]["transactions"][0]
        .as_object_mut()
        .expect("transaction is an object")
        .insert("Revenue".to_string(), Value::String("lots".to_string()));

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject a string transaction revenue"
    );
}

#[test]
fn test_schema_rejects_performance_point_missing_memberships() {
    let fixture = load_fixture("companies.json");
    let schema = load_schema();
    let mut data = extract_companies(&fixture);

    data[0]["performance"]["2023_Q1"]
        .as_object_mut()
        .expect("performance point is an object")
        .remove("memberships_sold");

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject a performance point without memberships_sold"
    );
}

#[test]
fn test_schema_rejects_out_of_range_year() {
    let fixture = load_fixture("companies.json");
    let schema = load_schema();
    let mut data = extract_companies(&fixture);

    data[0]["annual_summary"][0]
        .as_object_mut()
        .expect("summary is an object")
        .insert("year".to_string(), Value::Number(19999.into()));

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject an out-of-range year"
    );
}
