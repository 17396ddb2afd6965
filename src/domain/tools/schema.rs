//! Parameter schema for a tool.
//!
//! A schema is an ordered list of named parameter specs plus the set of
//! required names. Order is significant: validation reports missing keys in
//! declaration order, and the JSON Schema rendering lists `required` the same
//! way.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// JSON type a parameter must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
}

impl ParamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Number => "number",
            ParamType::Integer => "integer",
            ParamType::Boolean => "boolean",
            ParamType::Object => "object",
            ParamType::Array => "array",
        }
    }

    /// Returns true if `value` has this JSON type.
    ///
    /// `Integer` accepts integral JSON numbers only; `Number` accepts any.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ParamType::String => value.is_string(),
            ParamType::Number => value.is_number(),
            ParamType::Integer => value.is_i64() || value.is_u64(),
            ParamType::Boolean => value.is_boolean(),
            ParamType::Object => value.is_object(),
            ParamType::Array => value.is_array(),
        }
    }
}

/// Declaration of a single parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    param_type: ParamType,
    description: String,
    enum_values: Option<Vec<Value>>,
    default: Option<Value>,
    minimum: Option<f64>,
    exclusive_minimum: Option<f64>,
    maximum: Option<f64>,
}

impl ParameterSpec {
    /// Creates a spec with only a type and description.
    pub fn new(param_type: ParamType, description: impl Into<String>) -> Self {
        Self {
            param_type,
            description: description.into(),
            enum_values: None,
            default: None,
            minimum: None,
            exclusive_minimum: None,
            maximum: None,
        }
    }

    pub fn string(description: impl Into<String>) -> Self {
        Self::new(ParamType::String, description)
    }

    pub fn number(description: impl Into<String>) -> Self {
        Self::new(ParamType::Number, description)
    }

    pub fn integer(description: impl Into<String>) -> Self {
        Self::new(ParamType::Integer, description)
    }

    /// Restricts the value to one of `values`.
    pub fn with_enum<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Inclusive lower bound.
    pub fn with_minimum(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Strict lower bound.
    pub fn with_exclusive_minimum(mut self, minimum: f64) -> Self {
        self.exclusive_minimum = Some(minimum);
        self
    }

    /// Inclusive upper bound.
    pub fn with_maximum(mut self, maximum: f64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    pub fn param_type(&self) -> ParamType {
        self.param_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn enum_values(&self) -> Option<&[Value]> {
        self.enum_values.as_deref()
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn minimum(&self) -> Option<f64> {
        self.minimum
    }

    pub fn exclusive_minimum(&self) -> Option<f64> {
        self.exclusive_minimum
    }

    pub fn maximum(&self) -> Option<f64> {
        self.maximum
    }

    /// Renders this spec as a JSON Schema property.
    pub fn to_json_schema(&self) -> Value {
        let mut prop = Map::new();
        prop.insert("type".into(), json!(self.param_type.as_str()));
        if !self.description.is_empty() {
            prop.insert("description".into(), json!(self.description));
        }
        if let Some(values) = &self.enum_values {
            prop.insert("enum".into(), Value::Array(values.clone()));
        }
        if let Some(default) = &self.default {
            prop.insert("default".into(), default.clone());
        }
        if let Some(min) = self.minimum {
            prop.insert("minimum".into(), json!(min));
        }
        if let Some(min) = self.exclusive_minimum {
            prop.insert("exclusiveMinimum".into(), json!(min));
        }
        if let Some(max) = self.maximum {
            prop.insert("maximum".into(), json!(max));
        }
        Value::Object(prop)
    }
}

/// Ordered parameter declarations plus required names.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParameterSchema {
    properties: Vec<(String, ParameterSpec)>,
    required: Vec<String>,
}

impl ParameterSchema {
    /// Creates an empty schema (a tool with no parameters).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a required parameter.
    pub fn required(mut self, name: impl Into<String>, spec: ParameterSpec) -> Self {
        let name = name.into();
        self.required.push(name.clone());
        self.properties.push((name, spec));
        self
    }

    /// Adds an optional parameter.
    pub fn optional(mut self, name: impl Into<String>, spec: ParameterSpec) -> Self {
        self.properties.push((name.into(), spec));
        self
    }

    /// Parameters in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &ParameterSpec)> {
        self.properties.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    /// Required parameter names in declaration order.
    pub fn required_names(&self) -> &[String] {
        &self.required
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }

    pub fn get(&self, name: &str) -> Option<&ParameterSpec> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, spec)| spec)
    }

    /// Fills absent (or `null`) optional parameters with their declared defaults.
    pub fn apply_defaults(&self, params: &Map<String, Value>) -> Map<String, Value> {
        let mut filled = params.clone();
        for (name, spec) in &self.properties {
            let absent = matches!(filled.get(name), None | Some(Value::Null));
            if absent {
                if let Some(default) = &spec.default {
                    filled.insert(name.clone(), default.clone());
                }
            }
        }
        filled
    }

    /// Renders the schema as a JSON Schema object.
    pub fn to_json_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .properties
            .iter()
            .map(|(name, spec)| (name.clone(), spec.to_json_schema()))
            .collect();

        let mut schema = Map::new();
        schema.insert("type".into(), json!("object"));
        schema.insert("properties".into(), Value::Object(properties));
        if !self.required.is_empty() {
            schema.insert("required".into(), json!(self.required));
        }
        Value::Object(schema)
    }
}
