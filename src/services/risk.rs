use std::time::Duration;

use regex::Regex;
use reqwest::Client;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::models::{MarketAsset, Position, RiskLevel};

use super::analytics::DashboardData;

/// Pattern for the exported rating constant inside a risk document.
const RATING_PATTERN: &str = r"export const rating\s*=\s*'(\w+)'";

/// Fetches risk documentation and extracts the rating for a market.
pub struct RiskService {
    client: Client,
    rating_re: Regex,
}

impl RiskService {
    pub fn new(timeout_seconds: u64) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .user_agent("vlens/0.1")
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        // The pattern is a constant, so compilation cannot fail at runtime
        // with anything a caller could fix.
        let rating_re = Regex::new(RATING_PATTERN)
            .map_err(|e| AppError::ConfigError(format!("Invalid rating pattern: {}", e)))?;

        Ok(Self { client, rating_re })
    }

    /// The risk tier for one market. Markets without a risk document are
    /// medium by definition, with no network round trip.
    pub async fn risk_level(&self, market: &MarketAsset) -> RiskLevel {
        let Some(url) = market.risk.mdx_url.as_deref() else {
            return RiskLevel::default();
        };
        match self.fetch_rating(url).await {
            Ok(level) => level,
            Err(e) => {
                warn!(symbol = %market.symbol, error = %e, "risk document fetch failed");
                RiskLevel::default()
            }
        }
    }

    /// The risk tier for a position, joined to its market through the
    /// dashboard data. Positions without a matching market are medium.
    pub async fn position_risk_level(
        &self,
        data: &DashboardData,
        position: &Position,
    ) -> RiskLevel {
        match data.market_by_asset(&position.pool.id, &position.collateral.address) {
            Some(market) => self.risk_level(market).await,
            None => RiskLevel::default(),
        }
    }

    /// Risk tiers for a wallet's positions, in input order.
    pub async fn position_risk_levels(
        &self,
        data: &DashboardData,
        positions: &[Position],
    ) -> Vec<RiskLevel> {
        let futures = positions.iter().map(|p| self.position_risk_level(data, p));
        futures::future::join_all(futures).await
    }

    /// Risk tiers for a batch of markets, in input order. Individual
    /// failures degrade to the default tier rather than failing the batch.
    pub async fn risk_levels(&self, markets: &[MarketAsset]) -> Vec<RiskLevel> {
        let futures = markets.iter().map(|m| self.risk_level(m));
        futures::future::join_all(futures).await
    }

    async fn fetch_rating(&self, url: &str) -> Result<RiskLevel, AppError> {
        debug!(url, "fetching risk document");
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApiError(format!(
                "Risk document request failed with status {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        Ok(self.extract_rating(&body))
    }

    /// Pull the rating out of a risk document body. Documents without a
    /// recognizable rating are medium.
    pub fn extract_rating(&self, document: &str) -> RiskLevel {
        self.rating_re
            .captures(document)
            .and_then(|c| c.get(1))
            .map(|m| RiskLevel::parse(m.as_str()))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MarketStats, Pool, Risk, VToken};

    fn service() -> RiskService {
        RiskService::new(5).unwrap()
    }

    fn market_without_document() -> MarketAsset {
        let fp = crate::models::FixedPoint::new("0", 0);
        MarketAsset {
            pool: Pool {
                id: "1".to_string(),
                name: "Genesis".to_string(),
            },
            address: "0xeth".to_string(),
            name: "Ether".to_string(),
            symbol: "ETH".to_string(),
            decimals: 18,
            risk: Risk {
                mdx_url: None,
                url: None,
            },
            v_token: VToken {
                address: "0xveth".to_string(),
                name: "vEther".to_string(),
                symbol: "vETH".to_string(),
                decimals: 18,
            },
            stats: MarketStats {
                can_be_borrowed: true,
                total_supplied: fp.clone(),
                total_debt: fp.clone(),
                current_utilization: fp.clone(),
                supply_apy: fp.clone(),
                defi_spring_supply_apr: None,
                borrow_apr: fp,
                lst_apr: None,
            },
        }
    }

    #[tokio::test]
    async fn test_missing_document_is_medium_without_any_request() {
        // No server is running; a network attempt would error, not default.
        let level = service().risk_level(&market_without_document()).await;
        assert_eq!(level, RiskLevel::Medium);
    }

    #[test]
    fn test_extracts_rating_constant() {
        let doc = "import { Banner } from './components';\n\nexport const rating = 'high'\n\n# Risk\n";
        assert_eq!(service().extract_rating(doc), RiskLevel::High);
    }

    #[test]
    fn test_tolerates_spacing_variants() {
        assert_eq!(
            service().extract_rating("export const rating='low'"),
            RiskLevel::Low
        );
        assert_eq!(
            service().extract_rating("export const rating   =   'safe'"),
            RiskLevel::Safe
        );
    }

    #[test]
    fn test_missing_or_unknown_rating_is_medium() {
        assert_eq!(service().extract_rating("# Just prose"), RiskLevel::Medium);
        assert_eq!(
            service().extract_rating("export const rating = 'purple'"),
            RiskLevel::Medium
        );
    }
}
