//! Schema validation helpers – compiled into WASM.

use jsonschema::JSONSchema;
use lazy_static::lazy_static;
use serde_json::Value;

lazy_static! {
    static ref REORDER_SCHEMA: JSONSchema = {
        // At compile-time embed the schema JSON string.
        let raw = include_str!("schema/reorder_payload_schema.json");
        let parsed: Value = serde_json::from_str(raw)
            .expect("Reorder payload JSON schema must be valid JSON");
        JSONSchema::compile(&parsed).expect("valid reorder payload schema")
    };
}

/// Validate a value against the reorder payload contract.
/// Returns `true` when valid, `false` otherwise.
pub fn validate_reorder_payload(value: &Value) -> bool {
    REORDER_SCHEMA.validate(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_canonical_payload() {
        let v = json!({ "order": [ { "id": "3", "position": 1 }, { "id": null, "position": 2 } ] });
        assert!(validate_reorder_payload(&v));
    }

    #[test]
    fn rejects_zero_position_and_missing_keys() {
        assert!(!validate_reorder_payload(&json!({ "order": [ { "id": "3", "position": 0 } ] })));
        assert!(!validate_reorder_payload(&json!({ "order": [ { "position": 1 } ] })));
        assert!(!validate_reorder_payload(&json!({ "ordered_ids": [3, 1] })));
    }
}
