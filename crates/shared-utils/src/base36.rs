//! Base-36 encoding (digits `0-9` then `a-z`) for unsigned integers.

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Encodes `value` in lowercase base 36, without padding.
///
/// ```rust
/// use shared_utils::base36;
///
/// assert_eq!(base36::encode(0), "0");
/// assert_eq!(base36::encode(35), "z");
/// assert_eq!(base36::encode(36), "10");
/// ```
pub fn encode(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    // u64::MAX is 13 digits in base 36
    let mut buf = Vec::with_capacity(13);
    while value > 0 {
        buf.push(ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    buf.reverse();

    buf.into_iter().map(char::from).collect()
}

/// Encodes `value` and left-pads with `0` up to `width` characters.
pub fn encode_padded(value: u64, width: usize) -> String {
    format!("{:0>width$}", encode(value), width = width)
}

/// Decodes a base-36 string (either case). Returns `None` on an empty string,
/// a character outside `[0-9a-zA-Z]`, or overflow.
pub fn decode(s: &str) -> Option<u64> {
    if s.is_empty() {
        return None;
    }

    s.chars().try_fold(0u64, |acc, c| {
        let digit = c.to_digit(36)?;
        acc.checked_mul(36)?.checked_add(u64::from(digit))
    })
}
