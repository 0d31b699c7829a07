/// Canonical form of an address for comparisons and map keys: lowercase hex
/// with leading zeros after the `0x` prefix stripped. APIs pad addresses to
/// different widths, so every join normalizes first.
pub fn normalize(address: &str) -> String {
    let address = address.trim().to_ascii_lowercase();
    match address.strip_prefix("0x") {
        Some(rest) => {
            let stripped = rest.trim_start_matches('0');
            if stripped.is_empty() {
                "0x0".to_string()
            } else {
                format!("0x{}", stripped)
            }
        }
        None => address,
    }
}

/// Address equality over the canonical form.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// Abbreviate an address for display, `0x049d...4dc7` style. Short inputs
/// are returned unchanged.
pub fn shorten(address: &str) -> String {
    let address = address.trim();
    if address.len() <= 10 {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_padding_and_case() {
        assert_eq!(normalize(" 0x00ABc1 "), "0xabc1");
        assert_eq!(normalize("0x000"), "0x0");
        assert_eq!(normalize("abc"), "abc");
    }

    #[test]
    fn test_eq_handles_differently_padded_addresses() {
        assert!(eq_ignore_case("0x00ABC1", "0xabc1"));
        assert!(eq_ignore_case(" 0xAbC1 ", "0xabc1"));
        assert!(!eq_ignore_case("0xabc1", "0xabc2"));
    }

    #[test]
    fn test_shorten_keeps_short_addresses() {
        assert_eq!(shorten("0xabc"), "0xabc");
        let long = "0x049d36570d4e46f48e99674bd3fcc84644ddd6b96f7c741b1562b82f9e004dc7";
        assert_eq!(shorten(long), "0x049d...4dc7");
    }
}
