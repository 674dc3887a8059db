//! Lenient parsing of numbers typed into a search box.

/// Whole-string numeric reading: surrounding whitespace is ignored and an
/// empty string reads as zero. Anything else that is not a plain decimal
/// number yields `None`.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    if !looks_numeric(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Reads the longest leading decimal number, ignoring leading whitespace and
/// any trailing text ("4kg" reads as 4). Non-finite results are rejected.
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let end = leading_number_len(trimmed);
    if end == 0 {
        return None;
    }
    trimmed[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Sign and digits of the leading integer ("12abc" gives "12", "1.5" gives
/// "1"). The digits may not fit any integer type.
pub fn leading_integer(text: &str) -> Option<&str> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    Some(&trimmed[..end])
}

fn looks_numeric(text: &str) -> bool {
    leading_number_len(text) == text.len()
}

/// Length of the `[+-]digits[.digits][e[+-]digits]` prefix, or 0 when there
/// are no mantissa digits.
fn leading_number_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut i = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        mantissa_digits += j - frac_start;
        if mantissa_digits > 0 {
            i = j;
        }
    }

    if mantissa_digits == 0 {
        return 0;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}
