// CIDR prefix length to dotted-decimal netmask table

/// Known short-form prefix lengths. /31 is deliberately missing, and so is
/// everything below /4, so those pass through unchanged.
const PREFIX_MASKS: [(&str, &str); 28] = [
    ("4", "240.0.0.0"),
    ("5", "248.0.0.0"),
    ("6", "252.0.0.0"),
    ("7", "254.0.0.0"),
    ("8", "255.0.0.0"),
    ("9", "255.128.0.0"),
    ("10", "255.192.0.0"),
    ("11", "255.224.0.0"),
    ("12", "255.240.0.0"),
    ("13", "255.248.0.0"),
    ("14", "255.252.0.0"),
    ("15", "255.254.0.0"),
    ("16", "255.255.0.0"),
    ("17", "255.255.128.0"),
    ("18", "255.255.192.0"),
    ("19", "255.255.224.0"),
    ("20", "255.255.240.0"),
    ("21", "255.255.248.0"),
    ("22", "255.255.252.0"),
    ("23", "255.255.254.0"),
    ("24", "255.255.255.0"),
    ("25", "255.255.255.128"),
    ("26", "255.255.255.192"),
    ("27", "255.255.255.224"),
    ("28", "255.255.255.240"),
    ("29", "255.255.255.248"),
    ("30", "255.255.255.252"),
    ("32", "255.255.255.255"),
];

/// Expand a prefix length such as `"24"` into `"255.255.255.0"`.
///
/// Anything not in the table (a long-form mask, `"31"`, garbage) is returned
/// as-is so legacy files that already carry dotted masks keep working.
pub fn expand_prefix(prefix: &str) -> &str {
    PREFIX_MASKS
        .iter()
        .find(|(len, _)| *len == prefix)
        .map(|(_, mask)| *mask)
        .unwrap_or(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_expand_common_prefixes() {
        assert_eq!(expand_prefix("24"), "255.255.255.0");
        assert_eq!(expand_prefix("8"), "255.0.0.0");
        assert_eq!(expand_prefix("9"), "255.128.0.0");
        assert_eq!(expand_prefix("32"), "255.255.255.255");
    }

    #[test]
    fn test_table_matches_bit_masks() {
        for len in (4u32..=30).chain(std::iter::once(32)) {
            let bits = if len == 32 { u32::MAX } else { !(u32::MAX >> len) };
            let expected = Ipv4Addr::from(bits).to_string();
            let len_str = len.to_string();
            let mask = expand_prefix(&len_str);
            assert_eq!(mask, expected, "prefix /{}", len);
            assert_eq!(mask.trim(), mask);
        }
    }

    #[test]
    fn test_unknown_input_passes_through() {
        assert_eq!(expand_prefix("31"), "31");
        assert_eq!(expand_prefix("3"), "3");
        assert_eq!(expand_prefix("0"), "0");
        assert_eq!(expand_prefix("08"), "08");
        assert_eq!(expand_prefix("255.255.255.0"), "255.255.255.0");
        assert_eq!(expand_prefix("abc"), "abc");
        assert_eq!(expand_prefix(""), "");
    }
}
