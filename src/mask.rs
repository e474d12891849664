//! Card number masking for display and logging.
//!
//! Only two views of a number ever leave the engine:
//! - the last 4 digits (`****-****-****-1234`), for results and logs
//! - the BIN plus last 4 (`411111******1234`), for operator diagnostics
//!
//! Never display or log the full card number.

/// Masks digit values, keeping only the last 4 visible.
///
/// Stars are grouped in fours with `-` separators. Four or fewer digits are
/// masked completely.
pub fn mask_digits(digits: &[u8]) -> String {
    let len = digits.len();
    if len <= 4 {
        return "*".repeat(len);
    }

    let masked_count = len - 4;
    let mut result = String::with_capacity(len + len / 4);

    for i in 0..masked_count {
        if i > 0 && i % 4 == 0 {
            result.push('-');
        }
        result.push('*');
    }

    // Separator before last 4 if the stars fill whole groups
    if masked_count % 4 == 0 {
        result.push('-');
    }

    for &d in &digits[masked_count..] {
        result.push((b'0' + d) as char);
    }

    result
}

/// Masks a raw card number string, ignoring any non-digit characters.
///
/// # Example
///
/// ```
/// use card_checker::mask::mask_string;
///
/// assert_eq!(mask_string("4111 1111 1111 1111"), "****-****-****-1111");
/// ```
pub fn mask_string(input: &str) -> String {
    mask_digits(&digit_values(input))
}

/// Masks a number showing the BIN (first 6) and last 4 digits.
///
/// Numbers of 10 digits or fewer fall back to [`mask_string`].
///
/// # Example
///
/// ```
/// use card_checker::mask::mask_with_bin;
///
/// assert_eq!(mask_with_bin("4111-1111-1111-1111"), "411111******1111");
/// ```
pub fn mask_with_bin(input: &str) -> String {
    let digits = digit_values(input);
    let len = digits.len();

    if len <= 10 {
        return mask_digits(&digits);
    }

    let mut result = String::with_capacity(len);
    for &d in &digits[..6] {
        result.push((b'0' + d) as char);
    }
    result.extend(std::iter::repeat('*').take(len - 10));
    for &d in &digits[len - 4..] {
        result.push((b'0' + d) as char);
    }
    result
}

/// Extracts the last 4 digits from a card number string.
///
/// Returns an empty string if there are fewer than 4 digits.
pub fn last_four(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= 4 {
        digits[digits.len() - 4..].iter().collect()
    } else {
        String::new()
    }
}

fn digit_values(input: &str) -> Vec<u8> {
    input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}
