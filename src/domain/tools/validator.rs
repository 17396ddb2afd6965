//! Parameter Validator - checks candidate arguments against a tool schema.
//!
//! Validation never fails and never short-circuits: every missing key and
//! every type, enumeration or bound violation is reported in one pass.
//! Keys the schema does not declare are ignored.

use serde::Serialize;
use serde_json::{Map, Value};

use super::{ParameterSpec, ToolDescriptor};

/// Outcome of validating a parameter set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    /// Required keys that are absent or `null`, in schema order.
    pub missing: Vec<String>,
    /// Type, enumeration and numeric bound violations.
    pub type_errors: Vec<String>,
}

impl ValidationResult {
    fn from_findings(missing: Vec<String>, type_errors: Vec<String>) -> Self {
        Self {
            valid: missing.is_empty() && type_errors.is_empty(),
            missing,
            type_errors,
        }
    }
}

/// Stateless validator over tool descriptors.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterValidator;

impl ParameterValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validates `params` against `tool`'s schema.
    pub fn validate(&self, tool: &ToolDescriptor, params: &Map<String, Value>) -> ValidationResult {
        let schema = tool.parameters();

        let missing = schema
            .required_names()
            .iter()
            .filter(|name| matches!(params.get(name.as_str()), None | Some(Value::Null)))
            .cloned()
            .collect();

        let mut type_errors = Vec::new();
        for (name, spec) in schema.properties() {
            match params.get(name) {
                None | Some(Value::Null) => {}
                Some(value) => check_value(name, spec, value, &mut type_errors),
            }
        }

        ValidationResult::from_findings(missing, type_errors)
    }
}

fn check_value(name: &str, spec: &ParameterSpec, value: &Value, errors: &mut Vec<String>) {
    let expected = spec.param_type();
    if !expected.matches(value) {
        errors.push(format!(
            "{name}: expected {}, got {}",
            expected.as_str(),
            json_type_name(value)
        ));
        return;
    }

    if let Some(allowed) = spec.enum_values() {
        if !allowed.contains(value) {
            let options: Vec<String> = allowed.iter().map(render_enum_value).collect();
            errors.push(format!("{name}: must be one of [{}]", options.join(", ")));
        }
    }

    if let Some(n) = value.as_f64() {
        if let Some(min) = spec.exclusive_minimum() {
            if n <= min {
                errors.push(format!("{name}: must be greater than {min}"));
            }
        }
        if let Some(min) = spec.minimum() {
            if n < min {
                errors.push(format!("{name}: must be at least {min}"));
            }
        }
        if let Some(max) = spec.maximum() {
            if n > max {
                errors.push(format!("{name}: must be at most {max}"));
            }
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn render_enum_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
