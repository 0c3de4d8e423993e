// ============================================================================
// Format - Helpers d'affichage des nombres
// ============================================================================

/// Insère des séparateurs de milliers : 1234567 -> "1,234,567"
///
/// Équivalent du toLocaleString() utilisé par la page web d'origine.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(45_123), "45,123");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }
}
