//! Built-in token registry.
//!
//! A small static list of the tokens the dashboard knows out of the box.
//! Lookups never hit the network; remote market data is joined against these
//! entries by address.

use crate::models::Token;
use crate::utils::eq_ignore_case;

struct TokenEntry {
    name: &'static str,
    address: &'static str,
    symbol: &'static str,
    decimals: u32,
    logo_uri: &'static str,
    verified: bool,
}

const TOKENS: &[TokenEntry] = &[
    TokenEntry {
        name: "Ether",
        address: "0x049d36570d4e46f48e99674bd3fcc84644ddd6b96f7c741b1562b82f9e004dc7",
        symbol: "ETH",
        decimals: 18,
        logo_uri: "https://assets.coingecko.com/coins/images/279/small/ethereum.png",
        verified: true,
    },
    TokenEntry {
        name: "Starknet Token",
        address: "0x04718f5a0fc34cc1af16a1cdee98ffb20c31f5cd61d6ab07201858f4287c938d",
        symbol: "STRK",
        decimals: 18,
        logo_uri: "https://assets.coingecko.com/coins/images/26433/small/starknet.png",
        verified: true,
    },
    TokenEntry {
        name: "USD Coin",
        address: "0x053c91253bc9682c04929ca02ed00b3e423f6710d2ee7e0d5ebb06f3ecf368a8",
        symbol: "USDC",
        decimals: 6,
        logo_uri: "https://assets.coingecko.com/coins/images/6319/small/usdc.png",
        verified: true,
    },
    TokenEntry {
        name: "Tether USD",
        address: "0x068f5c6a61780768455de69077e07e89787839bf8166decfbf92b645209c0fb8",
        symbol: "USDT",
        decimals: 6,
        logo_uri: "https://assets.coingecko.com/coins/images/325/small/Tether.png",
        verified: true,
    },
    TokenEntry {
        name: "Wrapped BTC",
        address: "0x03fe2b97c1fd336e750087d68b9b867997fd64a2661ff3ca5a7c771641e8e7ac",
        symbol: "WBTC",
        decimals: 8,
        logo_uri: "https://assets.coingecko.com/coins/images/7598/small/wrapped_bitcoin_wbtc.png",
        verified: true,
    },
    TokenEntry {
        name: "Wrapped Staked Ether",
        address: "0x042b8f0484674ca266ac5d08e4ac6a3fe65bd3129795def2dca5c34ecc5f96d2",
        symbol: "wstETH",
        decimals: 18,
        logo_uri: "https://assets.coingecko.com/coins/images/18834/small/wstETH.png",
        verified: true,
    },
    TokenEntry {
        name: "Dai Stablecoin",
        address: "0x00da114221cb83fa859dbdb4c44beeaa0bb37c7537ad5ae66fe5e0efd20e6eb3",
        symbol: "DAI",
        decimals: 18,
        logo_uri: "https://assets.coingecko.com/coins/images/9956/small/Badge_Dai.png",
        verified: false,
    },
];

impl TokenEntry {
    fn to_token(&self) -> Token {
        Token {
            name: self.name.to_string(),
            address: self.address.to_string(),
            symbol: self.symbol.to_string(),
            decimals: self.decimals,
            logo_uri: self.logo_uri.to_string(),
            tags: if self.verified {
                vec!["Verified".to_string()]
            } else {
                Vec::new()
            },
        }
    }
}

/// All registry tokens, verified or not.
pub fn all() -> Vec<Token> {
    TOKENS.iter().map(TokenEntry::to_token).collect()
}

/// The tokens offered for selection in the dashboard. Unverified entries are
/// kept in the registry for display joins but filtered out here.
pub fn verified() -> Vec<Token> {
    TOKENS
        .iter()
        .filter(|t| t.verified)
        .map(TokenEntry::to_token)
        .collect()
}

/// Symbol lookup is whitespace-trimmed and case-insensitive.
pub fn find_by_symbol(symbol: &str) -> Option<Token> {
    let wanted = symbol.trim();
    TOKENS
        .iter()
        .find(|t| t.symbol.eq_ignore_ascii_case(wanted))
        .map(TokenEntry::to_token)
}

/// Address lookup goes over the canonical form, so casing and zero padding
/// differences between API payloads and the registry do not matter.
pub fn find_by_address(address: &str) -> Option<Token> {
    TOKENS
        .iter()
        .find(|t| eq_ignore_case(t.address, address))
        .map(TokenEntry::to_token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verified_excludes_unverified_entries() {
        let tokens = verified();
        assert!(tokens.iter().all(|t| t.is_verified()));
        assert!(tokens.iter().any(|t| t.symbol == "ETH"));
        assert!(!tokens.iter().any(|t| t.symbol == "DAI"));
    }

    #[test]
    fn test_symbol_lookup_trims_and_ignores_case() {
        let token = find_by_symbol("  eth ").unwrap();
        assert_eq!(token.symbol, "ETH");
        assert_eq!(token.decimals, 18);
    }

    #[test]
    fn test_address_lookup_ignores_hex_case() {
        let upper =
            "0x049D36570D4E46F48E99674BD3FCC84644DDD6B96F7C741B1562B82F9E004DC7";
        let token = find_by_address(upper).unwrap();
        assert_eq!(token.symbol, "ETH");
    }

    #[test]
    fn test_unknown_symbol_is_none() {
        assert!(find_by_symbol("PEPE").is_none());
    }
}
