//! Currencies the wallet can hold and move.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Supported wallet currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    #[serde(rename = "SOL")]
    Sol,
    #[serde(rename = "USDC")]
    Usdc,
}

impl Currency {
    /// All supported currencies, in catalog order.
    pub const ALL: [Currency; 2] = [Currency::Sol, Currency::Usdc];

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Sol => "SOL",
            Currency::Usdc => "USDC",
        }
    }

    /// Picks USDC when the utterance mentions it anywhere, SOL otherwise.
    pub fn mentioned_in(lowercase_text: &str) -> Self {
        if lowercase_text.contains("usdc") {
            Currency::Usdc
        } else {
            Currency::Sol
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SOL" => Ok(Currency::Sol),
            "USDC" => Ok(Currency::Usdc),
            other => Err(ValidationError::invalid_format(
                "currency",
                format!("unsupported currency: {other}"),
            )),
        }
    }
}
