//! Luhn checksum used to confirm card-number-shaped candidates.

/// Validate a digit string with the Luhn algorithm.
///
/// Starting from the rightmost digit, every second digit is doubled and the
/// decimal digits of the product are summed. The string is valid when the
/// total is divisible by 10. Empty input and any non-ASCII-digit character
/// yield `false`.
#[must_use]
pub fn is_valid_luhn(digits: &str) -> bool {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let checksum: u32 = digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(idx, b)| {
            let digit = u32::from(b - b'0');
            if idx % 2 == 1 {
                let doubled = digit * 2;
                doubled / 10 + doubled % 10
            } else {
                digit
            }
        })
        .sum();

    checksum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        assert!(is_valid_luhn("4532015112830366"));
        assert!(is_valid_luhn("4111111111111111"));
        assert!(is_valid_luhn("5555555555554444"));
        assert!(is_valid_luhn("79927398713"));
    }

    #[test]
    fn test_incremented_check_digit_fails() {
        for valid in ["4532015112830366", "4111111111111111", "5555555555554444"] {
            let (body, last) = valid.split_at(valid.len() - 1);
            let last = last.parse::<u32>().expect("digit");
            let bumped = format!("{body}{}", (last + 1) % 10);
            assert!(!is_valid_luhn(&bumped), "{bumped} should fail");
        }
    }

    #[test]
    fn test_non_digit_input_is_invalid() {
        assert!(!is_valid_luhn(""));
        assert!(!is_valid_luhn("4532-0151-1283-0366"));
        assert!(!is_valid_luhn("abcd"));
        assert!(!is_valid_luhn("٤٥٣٢")); // non-ASCII digits
    }
}
