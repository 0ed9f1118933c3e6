//! Luhn (mod 10) checksum used by payment-card numbers.

/// Returns `true` when `number` is a non-empty string of ASCII digits whose Luhn sum is
/// divisible by 10.
pub fn luhn_check(number: &str) -> bool {
    if number.is_empty() {
        return false;
    }

    let mut sum = 0u32;
    for (idx, c) in number.chars().rev().enumerate() {
        let Some(mut digit) = c.to_digit(10) else {
            return false;
        };
        if idx % 2 == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }

    sum % 10 == 0
}
