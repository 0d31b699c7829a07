use serde::{Deserialize, Serialize};

/// Token metadata as listed by the static registry.
///
/// Identity is the contract address; comparisons against API payloads must be
/// case-insensitive on the hex string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub name: String,
    pub address: String,
    pub symbol: String,
    pub decimals: u32,
    #[serde(default)]
    pub logo_uri: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Token {
    pub fn is_verified(&self) -> bool {
        self.tags.iter().any(|t| t == "Verified")
    }
}

/// A fixed-point integer/decimals pair, the wire format every vLens API uses
/// for prices, rates and scaled amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedPoint {
    pub value: String,
    pub decimals: u32,
}

impl FixedPoint {
    pub fn new(value: impl Into<String>, decimals: u32) -> Self {
        FixedPoint {
            value: value.into(),
            decimals,
        }
    }

    /// Decode into a float by big-integer parse followed by a single final
    /// division. Malformed values decode to zero rather than propagating into
    /// display code.
    pub fn to_f64(&self) -> f64 {
        crate::tx::units::scaled_to_f64(&self.value, self.decimals)
    }
}

/// Pool-wrapped token resolution, built by joining market data. A mapping is
/// only usable when both sides were present in the join.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMapping {
    pub v_token_address: String,
    pub underlying_address: String,
    pub symbol: String,
    pub pool: String,
    pub name: String,
}
