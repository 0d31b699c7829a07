//! Wallet seam.
//!
//! Everything that actually touches the chain goes through [`WalletConnector`]
//! so the rest of the crate stays testable with a mock. Call batches are
//! submitted as a single atomic unit in the order given.

use async_trait::async_trait;
use num_bigint::BigInt;

use crate::error::AppError;
use crate::models::{Call, TokenBalance, TxReceipt};

#[async_trait]
pub trait WalletConnector: Send + Sync {
    /// The connected account address.
    fn address(&self) -> &str;

    /// Submit an ordered batch of calls as one atomic transaction.
    async fn submit(&self, calls: &[Call]) -> Result<TxReceipt, AppError>;

    /// Current balance of `token` for the connected account.
    async fn read_balance(&self, token: &str) -> Result<TokenBalance, AppError>;

    /// Current ERC20 allowance granted by the connected account to `spender`.
    async fn read_allowance(&self, token: &str, spender: &str) -> Result<BigInt, AppError>;
}
