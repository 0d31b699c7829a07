use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub lens: LensApiSettings,
    pub swap: SwapApiSettings,
    pub bridge: BridgeApiSettings,
    pub network: NetworkSettings,
}

/// Positions/rewards/markets API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LensApiSettings {
    pub base_url: String,
    pub timeout_seconds: u64,
}

/// Swap aggregator quote/build API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapApiSettings {
    pub base_url: String,
    pub timeout_seconds: u64,
    /// Fraction, e.g. 0.05 for 5%.
    pub default_slippage: f64,
}

/// Cross-chain bridge API. Requires an API key on every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeApiSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
    /// Network key the bridge flow always lands on.
    pub destination_network: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSettings {
    pub explorer_tx_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            lens: LensApiSettings::default(),
            swap: SwapApiSettings::default(),
            bridge: BridgeApiSettings::default(),
            network: NetworkSettings::default(),
        }
    }
}

impl Default for LensApiSettings {
    fn default() -> Self {
        LensApiSettings {
            base_url: "https://api.vesu.xyz".to_string(),
            timeout_seconds: 15,
        }
    }
}

impl Default for SwapApiSettings {
    fn default() -> Self {
        SwapApiSettings {
            base_url: "https://starknet.api.avnu.fi/swap/v2".to_string(),
            timeout_seconds: 15,
            default_slippage: 0.05,
        }
    }
}

impl Default for BridgeApiSettings {
    fn default() -> Self {
        BridgeApiSettings {
            base_url: "https://api.layerswap.io/api/v2".to_string(),
            api_key: None,
            timeout_seconds: 15,
            destination_network: "STARKNET_MAINNET".to_string(),
        }
    }
}

impl Default for NetworkSettings {
    fn default() -> Self {
        NetworkSettings {
            explorer_tx_url: "https://starkscan.co/tx".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the environment, with a `.env` file picked up
    /// first when one exists.
    pub fn new() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let _settings = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        let defaults = Settings::default();

        Ok(Settings {
            lens: LensApiSettings {
                base_url: env::var("LENS_API_URL").unwrap_or(defaults.lens.base_url),
                timeout_seconds: env::var("LENS_API_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.lens.timeout_seconds),
            },
            swap: SwapApiSettings {
                base_url: env::var("SWAP_API_URL").unwrap_or(defaults.swap.base_url),
                timeout_seconds: env::var("SWAP_API_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.swap.timeout_seconds),
                default_slippage: env::var("SWAP_DEFAULT_SLIPPAGE")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.swap.default_slippage),
            },
            bridge: BridgeApiSettings {
                base_url: env::var("BRIDGE_API_URL").unwrap_or(defaults.bridge.base_url),
                api_key: env::var("BRIDGE_API_KEY").ok(),
                timeout_seconds: env::var("BRIDGE_API_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.bridge.timeout_seconds),
                destination_network: env::var("BRIDGE_DESTINATION_NETWORK")
                    .unwrap_or(defaults.bridge.destination_network),
            },
            network: NetworkSettings {
                explorer_tx_url: env::var("EXPLORER_TX_URL")
                    .unwrap_or(defaults.network.explorer_tx_url),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let settings = Settings::default();
        assert!(settings.lens.base_url.contains("vesu"));
        assert!(settings.swap.base_url.contains("avnu"));
        assert_eq!(settings.bridge.destination_network, "STARKNET_MAINNET");
        assert!((settings.swap.default_slippage - 0.05).abs() < f64::EPSILON);
    }
}
