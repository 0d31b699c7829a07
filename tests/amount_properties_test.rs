use num_bigint::BigInt;
use proptest::prelude::*;

use vlens::tx::{format_token_amount, parse_units, split_u256, to_hex};

proptest! {
    /// Whole-token amounts survive a parse/format round trip unchanged.
    #[test]
    fn whole_amounts_round_trip(n in 0u64..1_000_000_000u64, decimals in 0u32..=18) {
        let raw = parse_units(&n.to_string(), decimals).unwrap();
        let formatted = format_token_amount(&raw.to_string(), decimals);
        prop_assert_eq!(formatted, n.to_string());
    }

    /// Parsing scales linearly with the integer part.
    #[test]
    fn parse_scales_by_decimals(n in 0u64..1_000_000u64, decimals in 0u32..=18) {
        let raw = parse_units(&n.to_string(), decimals).unwrap();
        let expected = BigInt::from(n) * BigInt::from(10u32).pow(decimals);
        prop_assert_eq!(raw, expected);
    }

    /// The 128-bit split reconstructs the original value.
    #[test]
    fn split_reconstructs(low in any::<u128>(), high in any::<u128>()) {
        let value = BigInt::from(low) + (BigInt::from(high) << 128);
        let words = split_u256(&value).unwrap();
        prop_assert_eq!(words.low, low);
        prop_assert_eq!(words.high, high);
    }

    /// Hex encoding always carries the 0x prefix and parses back.
    #[test]
    fn hex_round_trips(n in 0u128..u128::MAX) {
        let value = BigInt::from(n);
        let hex = to_hex(&value).unwrap();
        prop_assert!(hex.starts_with("0x"));
        let parsed = BigInt::parse_bytes(hex[2..].as_bytes(), 16).unwrap();
        prop_assert_eq!(parsed, value);
    }

    /// Any amount whose fraction fits within the decimals survives
    /// parse, display format, re-parse with the same integer value.
    #[test]
    fn display_round_trip_preserves_value(
        n in 0u64..1_000_000u64,
        frac in 0u64..1_000_000u64,
        decimals in 6u32..=18,
    ) {
        let input = format!("{}.{:06}", n, frac);
        let raw = parse_units(&input, decimals).unwrap();
        let displayed = format_token_amount(&raw.to_string(), decimals);
        let reparsed = parse_units(&displayed, decimals).unwrap();
        prop_assert_eq!(reparsed, raw);
    }

    /// Fractions that fit within the decimals parse exactly.
    #[test]
    fn fractions_within_decimals_are_exact(n in 0u64..1_000u64, frac in 1u64..999u64) {
        let input = format!("{}.{:03}", n, frac);
        let raw = parse_units(&input, 6).unwrap();
        let expected = BigInt::from(n) * BigInt::from(1_000_000u64)
            + BigInt::from(frac) * BigInt::from(1_000u64);
        prop_assert_eq!(raw, expected);
    }
}

#[test]
fn format_strips_trailing_fraction_zeros() {
    assert_eq!(format_token_amount("12500000", 6), "12.5");
    assert_eq!(format_token_amount("12000000", 6), "12");
}
