//! Session context: the connected account and the active top-level route.
//!
//! Fetchers and assemblers take the wallet address from here, so everything
//! account-scoped goes quiet as soon as the wallet disconnects.

use serde::{Deserialize, Serialize};

/// Top-level destination within the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    App,
    Bridge,
}

/// Mutable per-session state. Default is disconnected with no route chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    account: Option<String>,
    route: Option<Route>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a wallet connection. Empty or whitespace addresses are treated
    /// as no connection at all.
    pub fn connect(&mut self, address: &str) {
        let address = address.trim();
        if address.is_empty() {
            self.account = None;
        } else {
            self.account = Some(address.to_string());
        }
    }

    /// Drop the connected account. The route selection survives so the user
    /// lands back where they were after reconnecting.
    pub fn disconnect(&mut self) {
        self.account = None;
    }

    pub fn select_route(&mut self, route: Route) {
        self.route = Some(route);
    }

    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    pub fn route(&self) -> Option<Route> {
        self.route
    }

    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }
}
