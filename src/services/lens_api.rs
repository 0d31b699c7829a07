use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::config::LensApiSettings;
use crate::error::AppError;
use crate::models::{
    MarketAsset, MarketsResponse, Position, PositionsResponse, RewardsData, RewardsResponse,
};
use crate::utils::rewards_window;

/// Client for the lending protocol's read API: positions, rewards, markets.
pub struct LensApiClient {
    client: Client,
    base_url: String,
}

/// Everything the dashboard needs in one fetch.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub positions: Vec<Position>,
    pub rewards: Option<RewardsData>,
    pub markets: Vec<MarketAsset>,
}

impl LensApiClient {
    pub fn new(settings: &LensApiSettings) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .user_agent("vlens/0.1")
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// All positions held by `wallet_address`, across pools and kinds.
    pub async fn fetch_positions(&self, wallet_address: &str) -> Result<Vec<Position>, AppError> {
        if wallet_address.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Wallet address is required".to_string(),
            ));
        }
        let url = format!("{}/positions", self.base_url);
        debug!(wallet = wallet_address, "fetching positions");

        let response = self
            .client
            .get(&url)
            .query(&[("walletAddress", wallet_address)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApiError(format!(
                "Positions request failed with status {}",
                response.status()
            )));
        }

        let body: PositionsResponse = response.json().await?;
        Ok(body.data)
    }

    /// Accumulated incentive rewards over the trailing seven-day window
    /// ending yesterday.
    pub async fn fetch_rewards(&self, wallet_address: &str) -> Result<RewardsData, AppError> {
        if wallet_address.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Wallet address is required".to_string(),
            ));
        }
        let window = rewards_window();
        let url = format!("{}/users/{}/strk-rewards", self.base_url, wallet_address);
        debug!(
            wallet = wallet_address,
            from = %window.from,
            to = %window.to,
            "fetching rewards"
        );

        let response = self
            .client
            .get(&url)
            .query(&[("fromDate", window.from.as_str()), ("toDate", window.to.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApiError(format!(
                "Rewards request failed with status {}",
                response.status()
            )));
        }

        let body: RewardsResponse = response.json().await?;
        Ok(body.data)
    }

    /// The full market list. Not account-scoped.
    pub async fn fetch_markets(&self) -> Result<Vec<MarketAsset>, AppError> {
        let url = format!("{}/markets", self.base_url);
        debug!("fetching markets");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApiError(format!(
                "Markets request failed with status {}",
                response.status()
            )));
        }

        let body: MarketsResponse = response.json().await?;
        Ok(body.data)
    }

    /// Positions, rewards and markets fetched concurrently. Positions and
    /// markets are required; a rewards failure degrades to `None` since the
    /// dashboard renders fine without the rewards card.
    pub async fn fetch_dashboard(
        &self,
        wallet_address: &str,
    ) -> Result<DashboardSnapshot, AppError> {
        let (positions, rewards, markets) = tokio::join!(
            self.fetch_positions(wallet_address),
            self.fetch_rewards(wallet_address),
            self.fetch_markets(),
        );

        let rewards = match rewards {
            Ok(data) => Some(data),
            Err(e) => {
                warn!(error = %e, "rewards fetch failed, continuing without");
                None
            }
        };

        Ok(DashboardSnapshot {
            positions: positions?,
            rewards,
            markets: markets?,
        })
    }
}
