use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A token listed on a bridge network. The bridge API uses snake_case keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeToken {
    pub symbol: String,
    #[serde(default)]
    pub display_asset: String,
    #[serde(default)]
    pub contract: Option<String>,
    pub decimals: u32,
    #[serde(default)]
    pub price_in_usd: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeNetwork {
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub chain_id: Option<String>,
    #[serde(default)]
    pub tokens: Vec<BridgeToken>,
    #[serde(default)]
    pub transaction_explorer_template: Option<String>,
}

/// Network listing keyed by the bridge's network key.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworksResponse {
    pub data: BTreeMap<String, BridgeNetwork>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateSwapRequest {
    pub destination_address: String,
    pub reference_id: Option<String>,
    pub source_network: String,
    pub source_token: String,
    pub destination_network: String,
    pub destination_token: String,
    pub refuel: bool,
    pub use_deposit_address: bool,
    pub use_new_deposit_address: Option<bool>,
    pub amount: f64,
    pub source_address: Option<String>,
    pub slippage: Option<f64>,
}

/// The on-chain action the user must perform on the source network to fund a
/// bridge swap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepositAction {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub to_address: String,
    #[serde(default)]
    pub amount: f64,
    pub amount_in_base_units: String,
    #[serde(default)]
    pub call_data: Option<String>,
    pub network: BridgeNetwork,
    pub token: BridgeToken,
    #[serde(default)]
    pub fee_token: Option<BridgeToken>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeSwap {
    pub id: String,
    pub status: String,
    pub source_network: BridgeNetwork,
    pub destination_network: BridgeNetwork,
    pub destination_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeQuote {
    pub receive_amount: f64,
    pub min_receive_amount: f64,
    #[serde(default)]
    pub blockchain_fee: f64,
    #[serde(default)]
    pub service_fee: f64,
    #[serde(default)]
    pub total_fee: f64,
    #[serde(default)]
    pub total_fee_in_usd: f64,
    #[serde(default)]
    pub avg_completion_time: Option<String>,
    #[serde(default)]
    pub slippage: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSwapData {
    pub swap: BridgeSwap,
    pub deposit_actions: Vec<DepositAction>,
    #[serde(default)]
    pub quote: Option<BridgeQuote>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSwapResponse {
    pub data: CreateSwapData,
}
