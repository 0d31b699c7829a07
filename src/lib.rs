//! vLens: core library for a wallet-connected DeFi dashboard.
//!
//! The crate splits into a read side and a write side. The read side fetches
//! lending positions, incentive rewards, markets, swap quotes and bridge
//! networks from their remote APIs and derives display figures (APY, yield
//! projections, USD values, risk tiers) locally. The write side assembles
//! ordered call batches (with approval calls prepended where needed) and
//! hands them to a [`wallet::WalletConnector`] for atomic submission.

pub mod config;
pub mod context;
pub mod error;
pub mod models;
pub mod registry;
pub mod services;
pub mod tx;
pub mod utils;
pub mod wallet;

pub use error::AppError;
