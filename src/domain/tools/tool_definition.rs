//! Tool descriptor - metadata and parameter schema for an invocable tool.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

use super::ParameterSchema;

/// Catalog grouping for tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolCategory {
    Blockchain,
    Utility,
}

impl ToolCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolCategory::Blockchain => "blockchain",
            ToolCategory::Utility => "utility",
        }
    }
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blockchain" => Ok(ToolCategory::Blockchain),
            "utility" => Ok(ToolCategory::Utility),
            other => Err(format!("unknown tool category: {other}")),
        }
    }
}

/// Whether running the tool changes ledger state.
///
/// Mutating tools always pass through the confirmation gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolEffect {
    ReadOnly,
    Mutating,
}

impl ToolEffect {
    pub fn is_mutating(&self) -> bool {
        matches!(self, ToolEffect::Mutating)
    }
}

/// Definition of a tool that a voice intent can resolve to.
///
/// # Examples
///
/// ```ignore
/// use voice_wallet::domain::tools::{ParameterSchema, ParameterSpec, ToolCategory, ToolDescriptor, ToolEffect};
///
/// let descriptor = ToolDescriptor::new(
///     "weather_query",
///     "天气查询",
///     "查询指定城市的天气信息",
///     ToolCategory::Utility,
///     ToolEffect::ReadOnly,
///     ParameterSchema::new().required("city", ParameterSpec::string("城市名称")),
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDescriptor {
    id: String,
    name: String,
    description: String,
    category: ToolCategory,
    effect: ToolEffect,
    parameters: ParameterSchema,
}

impl ToolDescriptor {
    /// Creates a new tool descriptor.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: ToolCategory,
        effect: ToolEffect,
        parameters: ParameterSchema,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            category,
            effect,
            parameters,
        }
    }

    /// Returns the unique tool id (e.g., "transfer_sol").
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> ToolCategory {
        self.category
    }

    pub fn effect(&self) -> ToolEffect {
        self.effect
    }

    /// Returns the parameter schema.
    pub fn parameters(&self) -> &ParameterSchema {
        &self.parameters
    }

    /// Renders the descriptor as the catalog JSON shape.
    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "description": self.description,
            "category": self.category,
            "effect": self.effect,
            "parameters": self.parameters.to_json_schema(),
        })
    }
}
