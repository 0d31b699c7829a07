use std::time::Duration;

use num_bigint::BigInt;
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::config::SwapApiSettings;
use crate::error::AppError;
use crate::models::{BuildRequest, BuildResponse, Call, QuoteResponse, TxReceipt};
use crate::tx::to_hex;
use crate::wallet::WalletConnector;

/// Client for the swap aggregator's quote and build endpoints.
pub struct SwapClient {
    client: Client,
    base_url: String,
    default_slippage: f64,
}

impl SwapClient {
    pub fn new(settings: &SwapApiSettings) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .user_agent("vlens/0.1")
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            default_slippage: settings.default_slippage,
        })
    }

    /// The single best quote for selling `sell_amount` of one token for
    /// another. The amount goes over the wire as hex.
    pub async fn fetch_quote(
        &self,
        sell_token: &str,
        buy_token: &str,
        sell_amount: &BigInt,
    ) -> Result<QuoteResponse, AppError> {
        let url = format!("{}/quotes", self.base_url);
        let amount_hex = to_hex(sell_amount)?;
        debug!(sell_token, buy_token, amount = %amount_hex, "fetching quote");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("sellTokenAddress", sell_token),
                ("buyTokenAddress", buy_token),
                ("sellAmount", amount_hex.as_str()),
                ("size", "1"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApiError(format!(
                "Quote request failed with status {}",
                response.status()
            )));
        }

        let mut quotes: Vec<QuoteResponse> = response.json().await?;
        if quotes.is_empty() {
            return Err(AppError::NotFound(
                "No quote available for this pair and amount".to_string(),
            ));
        }
        Ok(quotes.remove(0))
    }

    /// Exchange a quote for the executable call batch. The aggregator
    /// prepends its own approval call, so the batch is submitted as-is.
    pub async fn build_swap(
        &self,
        quote_id: &str,
        taker_address: &str,
        gas_token_address: &str,
        slippage: Option<f64>,
    ) -> Result<Vec<Call>, AppError> {
        if taker_address.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Taker address is required".to_string(),
            ));
        }
        let url = format!("{}/build", self.base_url);
        let body = BuildRequest {
            quote_id: quote_id.to_string(),
            taker_address: taker_address.to_string(),
            slippage: slippage.unwrap_or(self.default_slippage),
            gas_token_address: gas_token_address.to_string(),
            include_approve: true,
        };
        debug!(quote_id, "building swap calls");

        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApiError(format!(
                "Build request failed with status {}",
                response.status()
            )));
        }

        let body: BuildResponse = response.json().await?;
        Ok(body.calls)
    }
}

/// Where a swap currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum SwapState {
    NoQuote,
    QuoteLoading,
    QuoteReady(QuoteResponse),
    Executing,
    Executed(TxReceipt),
    Failed(String),
}

/// Handle identifying one quote request. Only the ticket from the most
/// recent `begin_quote` can advance the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteTicket(u64);

/// State machine for one swap flow.
///
/// Quote requests race: the user can change inputs while a quote is in
/// flight. Each request gets a generation ticket, and responses carrying a
/// stale ticket are dropped, so the session always reflects the latest
/// inputs no matter the arrival order.
#[derive(Debug)]
pub struct SwapSession {
    generation: u64,
    state: SwapState,
}

impl Default for SwapSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SwapSession {
    pub fn new() -> Self {
        Self {
            generation: 0,
            state: SwapState::NoQuote,
        }
    }

    pub fn state(&self) -> &SwapState {
        &self.state
    }

    /// Inputs changed: any in-flight quote becomes stale and the current
    /// quote, if any, is discarded.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.state = SwapState::NoQuote;
    }

    /// Start a quote request. The returned ticket must be handed back to
    /// [`complete_quote`](Self::complete_quote) with the response.
    pub fn begin_quote(&mut self) -> QuoteTicket {
        self.generation += 1;
        self.state = SwapState::QuoteLoading;
        QuoteTicket(self.generation)
    }

    /// Deliver a quote response. Returns false when the ticket is stale and
    /// the response was dropped.
    pub fn complete_quote(
        &mut self,
        ticket: QuoteTicket,
        result: Result<QuoteResponse, AppError>,
    ) -> bool {
        if ticket.0 != self.generation {
            debug!(ticket = ticket.0, current = self.generation, "dropping stale quote");
            return false;
        }
        self.state = match result {
            Ok(quote) => SwapState::QuoteReady(quote),
            Err(e) => {
                warn!(error = %e, "quote request failed");
                SwapState::Failed(e.to_string())
            }
        };
        true
    }

    /// Build and submit the ready quote through the wallet. Valid only from
    /// `QuoteReady`; the session moves to `Executing` for the duration and
    /// lands on `Executed` or `Failed`.
    pub async fn execute(
        &mut self,
        client: &SwapClient,
        wallet: &dyn WalletConnector,
        gas_token_address: &str,
        slippage: Option<f64>,
    ) -> Result<TxReceipt, AppError> {
        let quote = match &self.state {
            SwapState::QuoteReady(quote) => quote.clone(),
            other => {
                return Err(AppError::ValidationError(format!(
                    "Cannot execute swap from state {:?}",
                    other
                )));
            }
        };
        self.state = SwapState::Executing;

        let outcome = async {
            let calls = client
                .build_swap(&quote.quote_id, wallet.address(), gas_token_address, slippage)
                .await?;
            wallet.submit(&calls).await
        }
        .await;

        match outcome {
            Ok(receipt) => {
                info!(tx = %receipt.transaction_hash, "swap executed");
                self.state = SwapState::Executed(receipt.clone());
                Ok(receipt)
            }
            Err(e) => {
                self.state = SwapState::Failed(e.to_string());
                Err(e)
            }
        }
    }
}
