use serde::{Deserialize, Serialize};

use super::call::Call;

/// One leg of an aggregator route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRoute {
    pub name: String,
    pub address: String,
    pub percent: f64,
    pub sell_token_address: String,
    pub buy_token_address: String,
}

/// A time-bound, priced offer to swap one token for another.
///
/// `quote_id` is opaque to the client and consumed exactly once by the build
/// step; a quote must be re-fetched whenever the swap inputs change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub quote_id: String,
    #[serde(default)]
    pub chain_id: Option<String>,
    #[serde(default)]
    pub expiry: Option<String>,

    pub sell_token_address: String,
    pub sell_amount: String,
    #[serde(default)]
    pub sell_amount_in_usd: f64,
    pub buy_token_address: String,
    pub buy_amount: String,
    #[serde(default)]
    pub buy_amount_in_usd: f64,

    #[serde(default)]
    pub gas_fees: String,
    #[serde(default)]
    pub gas_fees_in_usd: f64,
    #[serde(default)]
    pub avnu_fees: String,
    #[serde(default)]
    pub avnu_fees_in_usd: f64,
    #[serde(default)]
    pub integrator_fees: String,
    #[serde(default)]
    pub integrator_fees_in_usd: f64,

    #[serde(default)]
    pub sell_token_price_in_usd: f64,
    #[serde(default)]
    pub buy_token_price_in_usd: f64,

    #[serde(default)]
    pub routes: Vec<SwapRoute>,
}

/// Body of the build request; `quote_id` is forwarded verbatim from the quote.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildRequest {
    pub quote_id: String,
    pub taker_address: String,
    pub slippage: f64,
    pub gas_token_address: String,
    pub include_approve: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildResponse {
    pub calls: Vec<Call>,
}
