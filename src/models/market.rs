use serde::{Deserialize, Serialize};

use super::position::Pool;
use super::token::FixedPoint;

/// Links to a market's risk documentation. `mdx_url` points at a
/// markdown-like document carrying the machine-readable rating.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    #[serde(default)]
    pub mdx_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Pool-wrapped representation of a deposited asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VToken {
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketStats {
    #[serde(default)]
    pub can_be_borrowed: bool,
    pub total_supplied: FixedPoint,
    pub total_debt: FixedPoint,
    pub current_utilization: FixedPoint,
    pub supply_apy: FixedPoint,
    /// External incentive program APR; absent when the program does not cover
    /// this market.
    #[serde(default)]
    pub defi_spring_supply_apr: Option<FixedPoint>,
    pub borrow_apr: FixedPoint,
    /// Liquid-staking yield on top of the base rate, where applicable.
    #[serde(default)]
    pub lst_apr: Option<FixedPoint>,
}

/// One listed asset of a lending pool, joined against positions by
/// (pool id, asset address) to derive yield figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketAsset {
    pub pool: Pool,
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    pub risk: Risk,
    pub v_token: VToken,
    pub stats: MarketStats,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarketsResponse {
    pub data: Vec<MarketAsset>,
}

/// Market risk tier extracted from the risk documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    #[default]
    Medium,
    High,
    Safe,
}

impl RiskLevel {
    /// Parse a rating token from a risk document. Anything unrecognized falls
    /// back to the neutral default.
    pub fn parse(rating: &str) -> Self {
        match rating.trim().to_ascii_lowercase().as_str() {
            "low" => RiskLevel::Low,
            "high" => RiskLevel::High,
            "safe" => RiskLevel::Safe,
            _ => RiskLevel::Medium,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Safe => "safe",
        };
        write!(f, "{}", s)
    }
}
