use serde::{Deserialize, Serialize};

use super::token::FixedPoint;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    pub id: String,
    pub name: String,
}

/// Whether a position supplies to a pool or borrows from it. Every position
/// carries exactly one of these; they partition the dashboard's display
/// buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionKind {
    Earn,
    Borrow,
}

/// An asset leg of a position: collateral or debt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionAsset {
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    /// Raw integer amount in the asset's native scale.
    pub value: String,
    #[serde(default)]
    pub usd_price: Option<FixedPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ltv {
    pub max: FixedPoint,
    pub current: FixedPoint,
}

/// A wallet's stake in a pool, as projected by the positions API. Read-only;
/// fetched fresh on every wallet change and never written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub pool: Pool,
    #[serde(rename = "type")]
    pub kind: PositionKind,
    pub wallet_address: String,
    pub collateral: PositionAsset,
    #[serde(default)]
    pub collateral_shares: Option<PositionAsset>,
    #[serde(default)]
    pub debt: Option<PositionAsset>,
    #[serde(default)]
    pub ltv: Option<Ltv>,
    #[serde(default)]
    pub health_factor: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PositionsResponse {
    pub data: Vec<Position>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributorData {
    pub distributed_amount: String,
    pub claimed_amount: String,
}

/// STRK incentive rewards accrued over a date window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardsData {
    pub wallet_address: String,
    pub amount: String,
    pub decimals: u32,
    pub distributor_data: DistributorData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RewardsResponse {
    pub data: RewardsData,
}
