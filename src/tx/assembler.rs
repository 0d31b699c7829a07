use num_bigint::BigInt;
use num_traits::Zero;
use std::str::FromStr;

use crate::error::AppError;
use crate::models::{Call, DepositAction, TokenMapping};

use super::units::{parse_amount, parse_units, split_u256, Uint256};

/// ERC20-style approval of a spender for the given amount.
pub fn approve_call(token: &str, spender: &str, amount: Uint256) -> Call {
    let mut calldata = vec![spender.to_string()];
    calldata.extend(amount.to_calldata());
    Call::new(token, "approve", calldata)
}

/// A plain token transfer: a single call, no approval needed.
pub fn transfer_calls(
    token: &str,
    recipient: &str,
    amount: &str,
    decimals: u32,
) -> Result<Vec<Call>, AppError> {
    if recipient.trim().is_empty() {
        return Err(AppError::ValidationError(
            "Recipient address is required".to_string(),
        ));
    }
    let amount = parse_amount(amount, decimals)?;

    let mut calldata = vec![recipient.to_string()];
    calldata.extend(amount.to_calldata());
    Ok(vec![Call::new(token, "transfer", calldata)])
}

/// Deposit into an earn pool, check-allowance variant: the approval call is
/// emitted only when the current allowance does not cover the requested
/// amount, and always ordered before the deposit. The whole sequence is one
/// atomic batch for the wallet.
pub fn earn_deposit_calls(
    contract: &str,
    pool_id: &str,
    asset: &str,
    amount: &str,
    decimals: u32,
    allowance: &BigInt,
) -> Result<Vec<Call>, AppError> {
    let raw = parse_units(amount, decimals)?;
    if raw.is_zero() {
        return Err(AppError::ValidationError(
            "Deposit amount must be greater than zero".to_string(),
        ));
    }
    let words = split_u256(&raw)?;

    let mut deposit_calldata = vec![pool_id.to_string(), asset.to_string()];
    deposit_calldata.extend(words.to_calldata());
    let deposit = Call::new(contract, "deposit", deposit_calldata);

    if allowance >= &raw {
        Ok(vec![deposit])
    } else {
        Ok(vec![approve_call(asset, contract, words), deposit])
    }
}

/// Supply an underlying asset through its pool-wrapped token,
/// always-approve variant: the approval is emitted unconditionally, without
/// reading the current allowance first.
pub fn supply_calls(
    mapping: &TokenMapping,
    receiver: &str,
    amount: &str,
    decimals: u32,
) -> Result<Vec<Call>, AppError> {
    let words = parse_amount(amount, decimals)?;

    let approve = approve_call(&mapping.underlying_address, &mapping.v_token_address, words);

    let mut deposit_calldata = words.to_calldata();
    deposit_calldata.push(receiver.to_string());
    let deposit = Call::new(&mapping.v_token_address, "deposit", deposit_calldata);

    Ok(vec![approve, deposit])
}

/// Supply collateral and borrow against it in one batch: approve the
/// collateral for the lending contract, then the combined entry point.
/// Always-approve variant.
#[allow(clippy::too_many_arguments)]
pub fn supply_and_borrow_calls(
    contract: &str,
    pool_id: &str,
    collateral: &TokenMapping,
    debt: &TokenMapping,
    collateral_amount: &str,
    collateral_decimals: u32,
    borrow_amount: &str,
    borrow_decimals: u32,
) -> Result<Vec<Call>, AppError> {
    if pool_id.trim().is_empty() {
        return Err(AppError::ValidationError(
            "Pool id is required".to_string(),
        ));
    }
    let collateral_words = parse_amount(collateral_amount, collateral_decimals)?;
    let borrow_words = parse_amount(borrow_amount, borrow_decimals)?;

    let approve = approve_call(&collateral.underlying_address, contract, collateral_words);

    let mut calldata = vec![
        pool_id.to_string(),
        collateral.underlying_address.clone(),
        debt.underlying_address.clone(),
    ];
    calldata.extend(collateral_words.to_calldata());
    calldata.extend(borrow_words.to_calldata());
    let primary = Call::new(contract, "supply_and_borrow", calldata);

    Ok(vec![approve, primary])
}

/// The funding call for a bridge swap, taken from the deposit action the
/// bridge API returned. When the action carries pre-encoded calldata it is
/// forwarded verbatim; otherwise the base-unit amount is split into words.
pub fn bridge_deposit_calls(action: &DepositAction) -> Result<Vec<Call>, AppError> {
    if action.to_address.trim().is_empty() {
        return Err(AppError::ValidationError(
            "Deposit action has no target address".to_string(),
        ));
    }

    let calldata = match &action.call_data {
        Some(data) if !data.is_empty() => vec![data.clone()],
        _ => {
            let raw = BigInt::from_str(&action.amount_in_base_units).map_err(|_| {
                AppError::MalformedResponse(format!(
                    "Invalid deposit amount: {}",
                    action.amount_in_base_units
                ))
            })?;
            split_u256(&raw)?.to_calldata()
        }
    };

    Ok(vec![Call::new(&action.to_address, "deposit", calldata)])
}
