//! Lenient integer scanning used for ids embedded in text.
//!
//! Descriptor files and device properties carry ids as `056a`, `0x56a`,
//! `1a` or plain decimal. Scanning reads the longest valid prefix and hands
//! back the unread remainder, so callers can match separators themselves.

/// Scans a leading integer from `s`.
///
/// Leading whitespace and a sign are accepted. With `radix == 16` an optional
/// `0x` prefix is skipped; with `radix == 0` the base is detected from the
/// prefix (`0x` hex, `0` octal, otherwise decimal). Returns `None` if no digit
/// was read.
pub(crate) fn scan_int(s: &str, radix: u32) -> Option<(i64, &str)> {
    let s = s.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let has_hex_prefix = |t: &str| {
        let b = t.as_bytes();
        b.len() > 2 && b[0] == b'0' && (b[1] == b'x' || b[1] == b'X') && b[2].is_ascii_hexdigit()
    };

    let (radix, digits) = match radix {
        16 if has_hex_prefix(s) => (16, &s[2..]),
        0 if has_hex_prefix(s) => (16, &s[2..]),
        0 if s.starts_with('0') => (8, s),
        0 => (10, s),
        r => (r, s),
    };

    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map_or(digits.len(), |(i, _)| i);
    if end == 0 {
        return None;
    }

    let mut value: i64 = 0;
    for c in digits[..end].chars() {
        let digit = i64::from(c.to_digit(radix)?);
        value = value.saturating_mul(i64::from(radix)).saturating_add(digit);
    }

    Some((if negative { -value } else { value }, &digits[end..]))
}

/// Parses like C `strtol`: the leading integer of `s`, or 0 if there is none.
pub(crate) fn strtol(s: &str, radix: u32) -> i64 {
    scan_int(s, radix).map_or(0, |(value, _)| value)
}

/// Scans a leading integer that must fit in a `u32`.
pub(crate) fn scan_u32(s: &str, radix: u32) -> Option<(u32, &str)> {
    let (value, rest) = scan_int(s, radix)?;
    u32::try_from(value).ok().map(|v| (v, rest))
}
