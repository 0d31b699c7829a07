use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use tracing::{debug, info};

use crate::config::BridgeApiSettings;
use crate::error::AppError;
use crate::models::{BridgeNetwork, CreateSwapData, CreateSwapRequest, CreateSwapResponse, NetworksResponse};

const API_KEY_HEADER: &str = "X-LS-APIKEY";

/// Look up one network by its key, case-insensitively, in a previously
/// fetched list. The listing is fetched once per session, not per lookup.
pub fn find_network<'a>(
    networks: &'a [BridgeNetwork],
    name: &str,
) -> Result<&'a BridgeNetwork, AppError> {
    networks
        .iter()
        .find(|n| n.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| AppError::NotFound(format!("Unknown bridge network: {}", name)))
}

/// Client for the cross-chain bridge API. Every request carries the API key
/// header when one is configured.
pub struct BridgeClient {
    client: Client,
    base_url: String,
    destination_network: String,
}

impl BridgeClient {
    pub fn new(settings: &BridgeApiSettings) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        if let Some(key) = &settings.api_key {
            let value = HeaderValue::from_str(key)
                .map_err(|_| AppError::ConfigError("Invalid bridge API key".to_string()))?;
            headers.insert(API_KEY_HEADER, value);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .user_agent("vlens/0.1")
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            destination_network: settings.destination_network.clone(),
        })
    }

    /// The network key all bridge swaps land on.
    pub fn destination_network(&self) -> &str {
        &self.destination_network
    }

    /// All source networks the bridge supports, with their listed tokens.
    pub async fn fetch_networks(&self) -> Result<Vec<BridgeNetwork>, AppError> {
        let url = format!("{}/networks", self.base_url);
        debug!("fetching bridge networks");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApiError(format!(
                "Networks request failed with status {}",
                response.status()
            )));
        }

        let body: NetworksResponse = response.json().await?;
        Ok(body.data.into_values().collect())
    }

    /// Create a bridge swap. The response includes the deposit actions the
    /// user must execute on the source network to fund it.
    pub async fn create_swap(
        &self,
        request: &CreateSwapRequest,
    ) -> Result<CreateSwapData, AppError> {
        if request.destination_address.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Destination address is required".to_string(),
            ));
        }
        if request.amount <= 0.0 {
            return Err(AppError::ValidationError(
                "Bridge amount must be greater than zero".to_string(),
            ));
        }
        let url = format!("{}/swaps", self.base_url);
        debug!(
            source = %request.source_network,
            destination = %request.destination_network,
            "creating bridge swap"
        );

        let response = self.client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApiError(format!(
                "Swap creation failed with status {}",
                response.status()
            )));
        }

        let body: CreateSwapResponse = response.json().await?;
        info!(swap_id = %body.data.swap.id, "bridge swap created");
        Ok(body.data)
    }

    /// Convenience constructor for the standard flow: bridge `amount` of
    /// `token` from a source network to an address on the configured
    /// destination network.
    pub fn swap_request(
        &self,
        source_network: &str,
        token_symbol: &str,
        amount: f64,
        destination_address: &str,
        source_address: Option<&str>,
    ) -> CreateSwapRequest {
        CreateSwapRequest {
            destination_address: destination_address.to_string(),
            reference_id: None,
            source_network: source_network.to_string(),
            source_token: token_symbol.to_string(),
            destination_network: self.destination_network.clone(),
            destination_token: token_symbol.to_string(),
            refuel: false,
            use_deposit_address: false,
            use_new_deposit_address: None,
            amount,
            source_address: source_address.map(str::to_string),
            slippage: None,
        }
    }
}
