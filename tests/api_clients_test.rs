use num_bigint::BigInt;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vlens::config::{BridgeApiSettings, LensApiSettings, SwapApiSettings};
use vlens::error::AppError;
use vlens::models::PositionKind;
use vlens::services::{find_network, BridgeClient, LensApiClient, SwapClient};
use vlens::utils::rewards_window;

fn lens_settings(server: &MockServer) -> LensApiSettings {
    LensApiSettings {
        base_url: server.uri(),
        timeout_seconds: 5,
    }
}

fn swap_settings(server: &MockServer) -> SwapApiSettings {
    SwapApiSettings {
        base_url: server.uri(),
        timeout_seconds: 5,
        default_slippage: 0.05,
    }
}

fn bridge_settings(server: &MockServer, api_key: Option<&str>) -> BridgeApiSettings {
    BridgeApiSettings {
        base_url: server.uri(),
        api_key: api_key.map(str::to_string),
        timeout_seconds: 5,
        destination_network: "STARKNET_MAINNET".to_string(),
    }
}

fn position_json(kind: &str) -> serde_json::Value {
    json!({
        "pool": {"id": "1", "name": "Genesis"},
        "type": kind,
        "walletAddress": "0xabc",
        "collateral": {
            "address": "0xeth",
            "name": "Ether",
            "symbol": "ETH",
            "decimals": 18,
            "value": "1000000000000000000",
            "usdPrice": {"value": "3000000000000000000000", "decimals": 18}
        }
    })
}

#[tokio::test]
async fn positions_are_scoped_to_the_wallet() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/positions"))
        .and(query_param("walletAddress", "0xabc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [position_json("earn"), position_json("borrow")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = LensApiClient::new(&lens_settings(&server)).unwrap();
    let positions = client.fetch_positions("0xabc").await.unwrap();

    assert_eq!(positions.len(), 2);
    assert_eq!(positions[0].kind, PositionKind::Earn);
    assert_eq!(positions[1].kind, PositionKind::Borrow);
}

#[tokio::test]
async fn rewards_request_carries_the_trailing_window() {
    let server = MockServer::start().await;
    let window = rewards_window();
    Mock::given(method("GET"))
        .and(path("/users/0xabc/strk-rewards"))
        .and(query_param("fromDate", window.from.as_str()))
        .and(query_param("toDate", window.to.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "walletAddress": "0xabc",
                "amount": "42000000000000000000",
                "decimals": 18,
                "distributorData": {
                    "distributedAmount": "100",
                    "claimedAmount": "58"
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = LensApiClient::new(&lens_settings(&server)).unwrap();
    let rewards = client.fetch_rewards("0xabc").await.unwrap();

    assert_eq!(rewards.amount, "42000000000000000000");
    assert_eq!(rewards.decimals, 18);
}

#[tokio::test]
async fn malformed_positions_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/positions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"pool": {"id": "1", "name": "Genesis"}}]
        })))
        .mount(&server)
        .await;

    let client = LensApiClient::new(&lens_settings(&server)).unwrap();
    let err = client.fetch_positions("0xabc").await.unwrap_err();

    assert!(matches!(err, AppError::MalformedResponse(_)));
}

#[tokio::test]
async fn upstream_failure_surfaces_the_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/markets"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = LensApiClient::new(&lens_settings(&server)).unwrap();
    let err = client.fetch_markets().await.unwrap_err();

    match err {
        AppError::ExternalApiError(msg) => assert!(msg.contains("503")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn dashboard_fetch_degrades_without_rewards() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/positions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/markets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/0xabc/strk-rewards"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = LensApiClient::new(&lens_settings(&server)).unwrap();
    let snapshot = client.fetch_dashboard("0xabc").await.unwrap();

    assert!(snapshot.rewards.is_none());
    assert!(snapshot.positions.is_empty());
}

#[tokio::test]
async fn quote_request_sends_the_amount_as_hex_and_takes_the_first_offer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/quotes"))
        .and(query_param("sellTokenAddress", "0xsell"))
        .and(query_param("buyTokenAddress", "0xbuy"))
        .and(query_param("sellAmount", "0xf4240"))
        .and(query_param("size", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "quoteId": "q-1",
                "sellTokenAddress": "0xsell",
                "sellAmount": "0xf4240",
                "buyTokenAddress": "0xbuy",
                "buyAmount": "0x1e8480"
            },
            {
                "quoteId": "q-2",
                "sellTokenAddress": "0xsell",
                "sellAmount": "0xf4240",
                "buyTokenAddress": "0xbuy",
                "buyAmount": "0x1e8470"
            }
        ])))
        .mount(&server)
        .await;

    let client = SwapClient::new(&swap_settings(&server)).unwrap();
    let quote = client
        .fetch_quote("0xsell", "0xbuy", &BigInt::from(1_000_000u64))
        .await
        .unwrap();

    assert_eq!(quote.quote_id, "q-1");
}

#[tokio::test]
async fn empty_quote_list_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/quotes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = SwapClient::new(&swap_settings(&server)).unwrap();
    let err = client
        .fetch_quote("0xsell", "0xbuy", &BigInt::from(1u32))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn build_request_asks_for_the_approval_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/build"))
        .and(body_partial_json(json!({
            "quoteId": "q-1",
            "takerAddress": "0xtaker",
            "slippage": 0.05,
            "includeApprove": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "calls": [
                {"contractAddress": "0xsell", "entrypoint": "approve", "calldata": ["0xrouter", "100", "0"]},
                {"contractAddress": "0xrouter", "entrypoint": "swap", "calldata": []}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = SwapClient::new(&swap_settings(&server)).unwrap();
    let calls = client
        .build_swap("q-1", "0xtaker", "0xgas", None)
        .await
        .unwrap();

    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].entrypoint, "approve");
    assert_eq!(calls[1].entrypoint, "swap");
}

#[tokio::test]
async fn bridge_requests_carry_the_api_key_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/networks"))
        .and(header("X-LS-APIKEY", "secret-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "ETHEREUM_MAINNET": {
                    "name": "ETHEREUM_MAINNET",
                    "display_name": "Ethereum",
                    "chain_id": "1",
                    "tokens": [
                        {"symbol": "ETH", "decimals": 18, "price_in_usd": 3000.0}
                    ]
                },
                "STARKNET_MAINNET": {
                    "name": "STARKNET_MAINNET",
                    "display_name": "Starknet",
                    "tokens": []
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = BridgeClient::new(&bridge_settings(&server, Some("secret-key"))).unwrap();
    let networks = client.fetch_networks().await.unwrap();

    // One listing fetch serves every lookup; the mock allows a single hit.
    assert_eq!(networks.len(), 2);
    let network = find_network(&networks, "ethereum_mainnet").unwrap();
    assert_eq!(network.display_name, "Ethereum");
    let starknet = find_network(&networks, "STARKNET_MAINNET").unwrap();
    assert_eq!(starknet.display_name, "Starknet");
    assert!(find_network(&networks, "SOLANA_MAINNET").is_err());
}

#[tokio::test]
async fn create_swap_returns_the_deposit_actions() {
    let server = MockServer::start().await;
    let network = json!({
        "name": "ETHEREUM_MAINNET",
        "display_name": "Ethereum",
        "tokens": []
    });
    Mock::given(method("POST"))
        .and(path("/swaps"))
        .and(body_partial_json(json!({
            "destination_network": "STARKNET_MAINNET",
            "source_token": "ETH",
            "amount": 0.5
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "swap": {
                    "id": "swap-1",
                    "status": "user_transfer_pending",
                    "source_network": network,
                    "destination_network": {
                        "name": "STARKNET_MAINNET",
                        "display_name": "Starknet",
                        "tokens": []
                    },
                    "destination_address": "0xdest"
                },
                "deposit_actions": [
                    {
                        "type": "transfer",
                        "to_address": "0xdeposit",
                        "amount": 0.5,
                        "amount_in_base_units": "500000000000000000",
                        "network": network,
                        "token": {"symbol": "ETH", "decimals": 18, "price_in_usd": 3000.0}
                    }
                ],
                "quote": {
                    "receive_amount": 0.498,
                    "min_receive_amount": 0.495
                }
            }
        })))
        .mount(&server)
        .await;

    let client = BridgeClient::new(&bridge_settings(&server, None)).unwrap();
    let request = client.swap_request("ETHEREUM_MAINNET", "ETH", 0.5, "0xdest", None);
    let created = client.create_swap(&request).await.unwrap();

    assert_eq!(created.swap.id, "swap-1");
    assert_eq!(created.deposit_actions.len(), 1);
    assert_eq!(created.deposit_actions[0].to_address, "0xdeposit");
    assert!(created.quote.is_some());
}

#[tokio::test]
async fn zero_bridge_amount_is_rejected_before_the_wire() {
    let server = MockServer::start().await;
    let client = BridgeClient::new(&bridge_settings(&server, None)).unwrap();
    let request = client.swap_request("ETHEREUM_MAINNET", "ETH", 0.0, "0xdest", None);

    let err = client.create_swap(&request).await.unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));
}
