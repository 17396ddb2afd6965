//! Tool Registry - Immutable catalog of invocable tools.
//!
//! The registry is built once at startup and shared behind an `Arc`. Lookups
//! are exact and never panic: `get` returns `ToolNotFound` for unknown ids.
//!
//! # Example
//!
//! ```
//! use voice_wallet::domain::tools::{ToolCategory, ToolRegistry};
//!
//! let registry = ToolRegistry::builtin(1000.0);
//!
//! assert!(registry.get("transfer_sol").is_ok());
//! assert!(registry.get("nonexistent_tool").is_err());
//! assert_eq!(registry.list(Some(ToolCategory::Utility)).len(), 1);
//! ```

use thiserror::Error;

use super::{ParameterSchema, ParameterSpec, ToolCategory, ToolDescriptor, ToolEffect};

pub const TRANSFER_TOOL_ID: &str = "transfer_sol";
pub const BALANCE_TOOL_ID: &str = "query_balance";
pub const HISTORY_TOOL_ID: &str = "query_transactions";
pub const WEATHER_TOOL_ID: &str = "weather_query";

/// Default page size for transaction history.
pub const DEFAULT_HISTORY_LIMIT: i64 = 10;

/// Largest page a history query may request.
pub const MAX_HISTORY_LIMIT: i64 = 100;

/// Lookup failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Tool not found: {0}")]
pub struct ToolNotFound(pub String);

/// Catalog of tools, in registration order.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
}

impl ToolRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool. A later registration with the same id replaces the
    /// earlier one in place.
    pub fn with_tool(mut self, tool: ToolDescriptor) -> Self {
        match self.tools.iter_mut().find(|t| t.id() == tool.id()) {
            Some(existing) => *existing = tool,
            None => self.tools.push(tool),
        }
        self
    }

    /// The built-in wallet catalog.
    ///
    /// `max_transfer_amount` is the inclusive upper bound on `transfer_sol.amount`.
    pub fn builtin(max_transfer_amount: f64) -> Self {
        Self::new()
            .with_tool(ToolDescriptor::new(
                TRANSFER_TOOL_ID,
                "SOL转账",
                "在Solana网络上转账SOL代币",
                ToolCategory::Blockchain,
                ToolEffect::Mutating,
                ParameterSchema::new()
                    .required("recipient", ParameterSpec::string("接收方地址或联系人"))
                    .required(
                        "amount",
                        ParameterSpec::number("转账金额")
                            .with_exclusive_minimum(0.0)
                            .with_maximum(max_transfer_amount),
                    )
                    .optional("currency", currency_spec("货币类型"))
                    .optional("memo", ParameterSpec::string("转账备注")),
            ))
            .with_tool(ToolDescriptor::new(
                BALANCE_TOOL_ID,
                "查询余额",
                "查询钱包余额",
                ToolCategory::Blockchain,
                ToolEffect::ReadOnly,
                ParameterSchema::new().optional("currency", currency_spec("货币类型")),
            ))
            .with_tool(ToolDescriptor::new(
                HISTORY_TOOL_ID,
                "查询交易记录",
                "查询交易历史记录",
                ToolCategory::Blockchain,
                ToolEffect::ReadOnly,
                ParameterSchema::new()
                    .optional(
                        "limit",
                        ParameterSpec::integer("返回记录数量")
                            .with_default(DEFAULT_HISTORY_LIMIT)
                            .with_minimum(1.0)
                            .with_maximum(MAX_HISTORY_LIMIT as f64),
                    )
                    .optional(
                        "offset",
                        ParameterSpec::integer("偏移量")
                            .with_default(0)
                            .with_minimum(0.0),
                    ),
            ))
            .with_tool(ToolDescriptor::new(
                WEATHER_TOOL_ID,
                "天气查询",
                "查询指定城市的天气信息",
                ToolCategory::Utility,
                ToolEffect::ReadOnly,
                ParameterSchema::new()
                    .required("city", ParameterSpec::string("城市名称"))
                    .optional("country", ParameterSpec::string("国家代码").with_default("CN")),
            ))
    }

    /// Lists tools, optionally filtered by exact category. Catalog order is kept.
    pub fn list(&self, category: Option<ToolCategory>) -> Vec<&ToolDescriptor> {
        self.tools
            .iter()
            .filter(|t| category.map_or(true, |c| t.category() == c))
            .collect()
    }

    /// Gets a tool by exact id.
    pub fn get(&self, id: &str) -> Result<&ToolDescriptor, ToolNotFound> {
        self.tools
            .iter()
            .find(|t| t.id() == id)
            .ok_or_else(|| ToolNotFound(id.to_string()))
    }

    /// Checks if a tool is registered.
    pub fn has_tool(&self, id: &str) -> bool {
        self.tools.iter().any(|t| t.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

fn currency_spec(description: &str) -> ParameterSpec {
    ParameterSpec::string(description)
        .with_enum(["SOL", "USDC"])
        .with_default("SOL")
}
