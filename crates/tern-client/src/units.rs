//! Monetary units.
//!
//! All wire values are in nanotern (1 TERN = 10^9 nanotern). Amounts are
//! parsed from decimal TERN strings and displayed back the same way.

use crate::error::ClientError;

/// Nanotern per whole TERN.
pub const NANO_PER_TERN: u64 = 1_000_000_000;

/// Decimal places in a TERN amount.
const DECIMALS: usize = 9;

/// Parse a decimal TERN amount ("0.01") into nanotern.
///
/// Accepts at most 9 fractional digits. Rejects empty, signed and
/// non-numeric input, and values that overflow u64.
pub fn parse_tern(s: &str) -> Result<u64, ClientError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ClientError::InvalidAmount("empty amount".into()));
    }

    let (whole_str, frac_str) = match s.split_once('.') {
        Some((w, f)) => (w, f),
        None => (s, ""),
    };

    if !whole_str.chars().all(|c| c.is_ascii_digit()) || whole_str.is_empty() {
        return Err(ClientError::InvalidAmount(format!("bad integer part in {s:?}")));
    }
    if !frac_str.chars().all(|c| c.is_ascii_digit()) {
        return Err(ClientError::InvalidAmount(format!("bad fraction in {s:?}")));
    }
    if frac_str.len() > DECIMALS {
        return Err(ClientError::InvalidAmount(format!(
            "more than {DECIMALS} decimal places in {s:?}"
        )));
    }

    let whole: u64 = whole_str
        .parse()
        .map_err(|_| ClientError::InvalidAmount(format!("integer part overflow in {s:?}")))?;

    let mut frac: u64 = 0;
    if !frac_str.is_empty() {
        frac = frac_str
            .parse()
            .map_err(|_| ClientError::InvalidAmount(format!("bad fraction in {s:?}")))?;
        frac *= 10u64.pow((DECIMALS - frac_str.len()) as u32);
    }

    whole
        .checked_mul(NANO_PER_TERN)
        .and_then(|n| n.checked_add(frac))
        .ok_or_else(|| ClientError::InvalidAmount(format!("amount overflow in {s:?}")))
}

/// Format a nanotern value as a decimal TERN string (display helper).
pub fn format_nano(nano: u64) -> String {
    let whole = nano / NANO_PER_TERN;
    let frac = nano % NANO_PER_TERN;
    if frac == 0 {
        return whole.to_string();
    }
    let mut frac_str = format!("{frac:09}");
    while frac_str.ends_with('0') {
        frac_str.pop();
    }
    format!("{whole}.{frac_str}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_whole_and_fraction() {
        assert_eq!(parse_tern("1").unwrap(), NANO_PER_TERN);
        assert_eq!(parse_tern("0.01").unwrap(), 10_000_000);
        assert_eq!(parse_tern("2.5").unwrap(), 2_500_000_000);
        assert_eq!(parse_tern("0.000000001").unwrap(), 1);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_tern("").is_err());
        assert!(parse_tern("-1").is_err());
        assert!(parse_tern("1.2.3").is_err());
        assert!(parse_tern("abc").is_err());
        assert!(parse_tern(".5").is_err());
        assert!(parse_tern("0.0000000001").is_err()); // 10 decimal places
    }

    #[test]
    fn parse_rejects_overflow() {
        assert!(parse_tern("99999999999999999999").is_err());
    }

    #[test]
    fn format_trims_trailing_zeros() {
        assert_eq!(format_nano(10_000_000), "0.01");
        assert_eq!(format_nano(NANO_PER_TERN), "1");
        assert_eq!(format_nano(2_500_000_000), "2.5");
        assert_eq!(format_nano(0), "0");
        assert_eq!(format_nano(1), "0.000000001");
    }

    #[test]
    fn parse_format_roundtrip() {
        for s in ["0.01", "1", "123.456789", "0.000000042"] {
            let nano = parse_tern(s).unwrap();
            assert_eq!(format_nano(nano), s);
        }
    }
}
