use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::models::{
    FixedPoint, MarketAsset, MarketStats, Position, PositionKind, TokenMapping,
};
use crate::tx::scaled_to_f64;
use crate::utils::eq_ignore_case;

use super::lens_api::DashboardSnapshot;

/// Derived, display-ready view over a raw dashboard snapshot. All numbers
/// here are computed locally; nothing in this module touches the network.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub snapshot: DashboardSnapshot,
}

impl DashboardData {
    pub fn new(snapshot: DashboardSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn earn_positions(&self) -> Vec<&Position> {
        self.snapshot
            .positions
            .iter()
            .filter(|p| p.kind == PositionKind::Earn)
            .collect()
    }

    pub fn borrow_positions(&self) -> Vec<&Position> {
        self.snapshot
            .positions
            .iter()
            .filter(|p| p.kind == PositionKind::Borrow)
            .collect()
    }

    /// Sum of the USD value of all collateral across positions. Positions
    /// without a price are counted as zero rather than dropped.
    pub fn total_value_locked(&self) -> f64 {
        self.snapshot
            .positions
            .iter()
            .map(|p| {
                let asset = &p.collateral;
                match &asset.usd_price {
                    Some(price) => usd_price(&asset.value, asset.decimals, price),
                    None => 0.0,
                }
            })
            .sum()
    }

    /// The markets listed under one pool, by pool id, in API order.
    pub fn markets_by_pool(&self, pool_id: &str) -> Vec<&MarketAsset> {
        self.snapshot
            .markets
            .iter()
            .filter(|m| m.pool.id == pool_id)
            .collect()
    }

    /// The market entry for an asset in a pool. Pool ids match exactly,
    /// asset addresses match ignoring hex case.
    pub fn market_by_asset(&self, pool_id: &str, asset_address: &str) -> Option<&MarketAsset> {
        self.snapshot
            .markets
            .iter()
            .find(|m| m.pool.id == pool_id && eq_ignore_case(&m.address, asset_address))
    }

    /// Mapping of every market's underlying asset to its pool-wrapped token,
    /// used by the supply assemblers.
    pub fn token_mappings(&self) -> Vec<TokenMapping> {
        self.snapshot
            .markets
            .iter()
            .map(|m| TokenMapping {
                v_token_address: m.v_token.address.clone(),
                underlying_address: m.address.clone(),
                symbol: m.symbol.clone(),
                pool: m.pool.name.clone(),
                name: m.name.clone(),
            })
            .collect()
    }

    /// Resolve the pool-wrapped token for an underlying asset. The same
    /// underlying can be listed in several pools with distinct wrapped
    /// tokens, so the lookup is always pool-scoped.
    pub fn mapping_for_underlying(&self, address: &str, pool: &str) -> Option<TokenMapping> {
        self.token_mappings()
            .into_iter()
            .find(|m| m.pool == pool && eq_ignore_case(&m.underlying_address, address))
    }

    pub fn mapping_for_v_token(&self, address: &str) -> Option<TokenMapping> {
        self.token_mappings()
            .into_iter()
            .find(|m| eq_ignore_case(&m.v_token_address, address))
    }
}

/// Combined supply APY as a percentage: base supply rate plus whatever
/// incentive and staking components the market reports. Missing components
/// contribute zero instead of poisoning the sum.
pub fn calculate_apy(stats: &MarketStats) -> f64 {
    let base = stats.supply_apy.to_f64();
    let spring = stats
        .defi_spring_supply_apr
        .as_ref()
        .map(FixedPoint::to_f64)
        .unwrap_or(0.0);
    let lst = stats.lst_apr.as_ref().map(FixedPoint::to_f64).unwrap_or(0.0);
    (base + spring + lst) * 100.0
}

/// Projected monthly yield in token units for a raw amount at the market's
/// combined APY. The raw-to-display scaling happens here, against the
/// market's own decimals.
pub fn calculate_monthly_yield(market: &MarketAsset, raw_amount: &str) -> f64 {
    let amount = scaled_to_f64(raw_amount, market.decimals);
    amount * calculate_apy(&market.stats) / 100.0 / 12.0
}

/// USD value of a raw token amount. The multiplication stays in integer
/// space; only the final scaling division goes through floating point, so
/// large balances do not lose precision twice.
pub fn usd_price(raw_value: &str, decimals: u32, price: &FixedPoint) -> f64 {
    let value = match BigInt::from_str(raw_value) {
        Ok(v) => v,
        Err(_) => return 0.0,
    };
    let price_value = match BigInt::from_str(&price.value) {
        Ok(v) => v,
        Err(_) => return 0.0,
    };
    let scale = (decimals + price.decimals) as i64;
    BigDecimal::new(value * price_value, scale)
        .to_f64()
        .unwrap_or(0.0)
}
