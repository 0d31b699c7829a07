use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::str::FromStr;

use crate::error::AppError;

/// On-chain representation of a token amount: a 256-bit unsigned integer
/// split into a low/high 128-bit pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uint256 {
    pub low: u128,
    pub high: u128,
}

impl Uint256 {
    /// Calldata felts, low word first.
    pub fn to_calldata(&self) -> Vec<String> {
        vec![self.low.to_string(), self.high.to_string()]
    }
}

/// Convert a user-entered decimal string to the token's native integer
/// representation (scaled by `10^decimals`). Excess fraction digits are
/// rounded half-up. Accepts a leading sign.
pub fn parse_units(value: &str, decimals: u32) -> Result<BigInt, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::ValidationError("Amount is empty".to_string()));
    }

    let (integer, fraction) = match value.split_once('.') {
        Some((i, f)) => (i, f),
        None => (value, ""),
    };

    let (negative, integer) = match integer.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, integer),
    };

    if !integer.chars().all(|c| c.is_ascii_digit())
        || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return Err(AppError::ValidationError(format!(
            "Invalid decimal amount: {}",
            value
        )));
    }

    let int_part = if integer.is_empty() {
        BigInt::zero()
    } else {
        BigInt::from_str(integer)
            .map_err(|e| AppError::ValidationError(format!("Invalid amount: {}", e)))?
    };

    let d = decimals as usize;
    let frac_part = if fraction.len() > d {
        // Round half-up on the first dropped digit. The carry, if any,
        // propagates into the integer part through the combined sum below.
        let truncated = &fraction[..d];
        let mut frac = if truncated.is_empty() {
            BigInt::zero()
        } else {
            BigInt::from_str(truncated)
                .map_err(|e| AppError::ValidationError(format!("Invalid amount: {}", e)))?
        };
        let next_digit = fraction.as_bytes()[d] - b'0';
        if next_digit >= 5 {
            frac += BigInt::one();
        }
        frac
    } else {
        let padded = format!("{:0<width$}", fraction, width = d);
        if padded.is_empty() {
            BigInt::zero()
        } else {
            BigInt::from_str(&padded)
                .map_err(|e| AppError::ValidationError(format!("Invalid amount: {}", e)))?
        }
    };

    let scale = BigInt::from(10u32).pow(decimals);
    let combined = int_part * scale + frac_part;

    Ok(if negative { -combined } else { combined })
}

/// Parse a user-entered amount straight into its low/high calldata pair.
/// Negative amounts are rejected; on-chain amounts are unsigned.
pub fn parse_amount(value: &str, decimals: u32) -> Result<Uint256, AppError> {
    let parsed = parse_units(value, decimals)?;
    split_u256(&parsed)
}

/// Split a non-negative integer into its 128-bit words.
pub fn split_u256(value: &BigInt) -> Result<Uint256, AppError> {
    if value.is_negative() {
        return Err(AppError::ValidationError(
            "Amount must not be negative".to_string(),
        ));
    }
    let (_, unsigned) = value.clone().into_parts();
    let mask: BigUint = (BigUint::one() << 128u32) - BigUint::one();

    let low = (&unsigned & &mask)
        .to_u128()
        .ok_or_else(|| AppError::ValidationError("Amount low word overflow".to_string()))?;
    let high = (&unsigned >> 128u32)
        .to_u128()
        .ok_or_else(|| AppError::ValidationError("Amount exceeds 256 bits".to_string()))?;

    Ok(Uint256 { low, high })
}

/// Hex encoding of an amount, as expected by the quote endpoint. Negative
/// amounts are rejected; the wire format is unsigned.
pub fn to_hex(value: &BigInt) -> Result<String, AppError> {
    if value.is_negative() {
        return Err(AppError::ValidationError(
            "Amount must not be negative".to_string(),
        ));
    }
    let (_, unsigned) = value.clone().into_parts();
    Ok(format!("{:#x}", unsigned))
}

/// Render a raw integer amount in display units, with trailing fraction
/// zeros stripped. This is the only place raw amounts are converted for
/// display; they are never stored pre-scaled.
pub fn format_token_amount(value: &str, decimals: u32) -> String {
    if value.is_empty() {
        return "0".to_string();
    }
    let raw = match BigInt::from_str(value) {
        Ok(v) => v,
        Err(_) => return "0".to_string(),
    };

    let negative = raw.is_negative();
    let (_, unsigned) = raw.into_parts();
    let divisor = BigUint::from(10u32).pow(decimals);
    let integer = &unsigned / &divisor;
    let fractional = &unsigned % &divisor;

    let mut fractional_str = format!("{:0>width$}", fractional, width = decimals as usize);
    while fractional_str.ends_with('0') {
        fractional_str.pop();
    }

    let sign = if negative { "-" } else { "" };
    if fractional_str.is_empty() {
        format!("{}{}", sign, integer)
    } else {
        format!("{}{}.{}", sign, integer, fractional_str)
    }
}

/// Fixed-point integer string to float, with big-integer arithmetic up to a
/// single final division so large values do not lose precision along the way.
/// Malformed inputs decode to zero; these values feed display code directly.
pub fn scaled_to_f64(value: &str, decimals: u32) -> f64 {
    let raw = match BigInt::from_str(value.trim()) {
        Ok(v) => v,
        Err(_) => return 0.0,
    };
    BigDecimal::new(raw, decimals as i64)
        .to_f64()
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_units_scales_amount() {
        let parsed = parse_units("12.5", 6).unwrap();
        assert_eq!(parsed, BigInt::from(12_500_000u64));
    }

    #[test]
    fn test_parse_amount_splits_words() {
        let amount = parse_amount("12.5", 6).unwrap();
        assert_eq!(amount.low, 12_500_000);
        assert_eq!(amount.high, 0);
    }

    #[test]
    fn test_parse_units_rounds_half_up_with_carry() {
        // 0.996 at two decimals rounds to 1.00
        let parsed = parse_units("0.996", 2).unwrap();
        assert_eq!(parsed, BigInt::from(100u32));

        let parsed = parse_units("0.994", 2).unwrap();
        assert_eq!(parsed, BigInt::from(99u32));
    }

    #[test]
    fn test_parse_units_rejects_garbage() {
        assert!(parse_units("", 6).is_err());
        assert!(parse_units("12a.5", 6).is_err());
        assert!(parse_units("12.5.5", 6).is_err());
    }

    #[test]
    fn test_format_token_amount_strips_trailing_zeros() {
        assert_eq!(format_token_amount("12500000", 6), "12.5");
        assert_eq!(format_token_amount("12000000", 6), "12");
        assert_eq!(format_token_amount("123", 6), "0.000123");
        assert_eq!(format_token_amount("", 6), "0");
    }

    #[test]
    fn test_scaled_to_f64_large_value() {
        // 18-decimal value in the trillions survives the conversion
        let v = scaled_to_f64("1234567890000000000000000000000", 18);
        assert!((v - 1_234_567_890_000.0).abs() < 1.0);
        assert_eq!(scaled_to_f64("not a number", 18), 0.0);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(&BigInt::from(255u32)).unwrap(), "0xff");
    }

    #[test]
    fn test_to_hex_rejects_negative_amounts() {
        let err = to_hex(&BigInt::from(-1)).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
