use serde_json::Value;
use std::fmt;

/// Accepted JSON type for a schema field. `Boolean` accepts both `true`
/// and `false` literals, so a schema entry never needs a type set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Integer,
    String,
    Boolean,
}

impl FieldType {
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            // Token and id arithmetic is i64; integers beyond that range
            // are rejected here so they downgrade the record instead of
            // failing the typed binding later
            FieldType::Integer => value.is_i64(),
            FieldType::String => value.is_string(),
            FieldType::Boolean => value.is_boolean(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::Integer => "Integer",
            FieldType::String => "String",
            FieldType::Boolean => "Boolean",
        };
        write!(f, "{}", name)
    }
}

/// Name of the actual JSON type of a value, for defect messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "Null",
        Value::Bool(_) => "Boolean",
        Value::Number(n) if n.is_f64() => "Float",
        Value::Number(n) if n.is_i64() => "Integer",
        Value::Number(_) => "BigInteger",
        Value::String(_) => "String",
        Value::Array(_) => "Array",
        Value::Object(_) => "Object",
    }
}

pub const COMPANY_SCHEMA: &[(&str, FieldType)] = &[
    ("id", FieldType::Integer),
    ("name", FieldType::String),
    ("top_up", FieldType::Integer),
    ("email_status", FieldType::Boolean),
];

pub const USER_SCHEMA: &[(&str, FieldType)] = &[
    ("id", FieldType::Integer),
    ("company_id", FieldType::Integer),
    ("first_name", FieldType::String),
    ("last_name", FieldType::String),
    ("email", FieldType::String),
    ("tokens", FieldType::Integer),
    ("active_status", FieldType::Boolean),
    ("email_status", FieldType::Boolean),
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_type_matches() {
        assert!(FieldType::Integer.matches(&json!(42)));
        assert!(FieldType::Integer.matches(&json!(-3)));
        // JSON floats are not integers, mirroring the source data contract
        assert!(!FieldType::Integer.matches(&json!(5.0)));
        // Integers past i64::MAX cannot participate in token arithmetic
        assert!(!FieldType::Integer.matches(&json!(9_223_372_036_854_775_808u64)));
        assert!(FieldType::String.matches(&json!("hi")));
        assert!(!FieldType::String.matches(&json!(1)));
        assert!(FieldType::Boolean.matches(&json!(true)));
        assert!(FieldType::Boolean.matches(&json!(false)));
        assert!(!FieldType::Boolean.matches(&json!("true")));
    }

    #[test]
    fn test_json_type_name() {
        assert_eq!(json_type_name(&json!(null)), "Null");
        assert_eq!(json_type_name(&json!(1.5)), "Float");
        assert_eq!(json_type_name(&json!(42)), "Integer");
        assert_eq!(json_type_name(&json!(9_223_372_036_854_775_808u64)), "BigInteger");
        assert_eq!(json_type_name(&json!([])), "Array");
    }
}
