use serde::{Deserialize, Serialize};

/// The unit of work submitted to the wallet for signing: a contract address,
/// an entry point and encoded arguments. Constructed fresh per user action,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    pub contract_address: String,
    pub entrypoint: String,
    pub calldata: Vec<String>,
}

impl Call {
    pub fn new(
        contract_address: impl Into<String>,
        entrypoint: impl Into<String>,
        calldata: Vec<String>,
    ) -> Self {
        Call {
            contract_address: contract_address.into(),
            entrypoint: entrypoint.into(),
            calldata,
        }
    }
}

/// Result of one submitted call batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxReceipt {
    pub transaction_hash: String,
}

/// Balance read through the wallet provider, already formatted for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenBalance {
    pub formatted: String,
    pub symbol: String,
}
