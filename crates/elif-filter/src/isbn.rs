//! ISBN-10 and ISBN-13 checksum algorithms
//!
//! Every function here is total: malformed input is reported as invalid,
//! never as an error.

/// Strip the separators commonly used when printing ISBNs (hyphens and spaces)
pub fn normalize_isbn(candidate: &str) -> String {
    candidate
        .chars()
        .filter(|c| *c != '-' && *c != ' ')
        .collect()
}

/// Check a normalized 10 or 13 character ISBN
pub fn is_valid_isbn(isbn: &str) -> bool {
    match isbn.len() {
        10 => is_valid_isbn10(isbn),
        13 => is_valid_isbn13(isbn),
        _ => false,
    }
}

/// Check an ISBN-13.
///
/// Digits at even positions carry weight 1 and digits at odd positions weight
/// 3; the weighted sum must be a multiple of 10.
pub fn is_valid_isbn13(isbn: &str) -> bool {
    let bytes = isbn.as_bytes();
    if bytes.len() != 13 {
        return false;
    }

    let mut sum = 0u32;
    for (position, byte) in bytes.iter().enumerate() {
        let Some(digit) = digit_value(*byte) else {
            return false;
        };
        sum += if position % 2 == 0 { digit } else { digit * 3 };
    }

    sum % 10 == 0
}

/// Check an ISBN-10.
///
/// Position `i` carries weight `i + 1`. The final check character may be `X`,
/// standing for 10; the weighted sum must be a multiple of 11.
pub fn is_valid_isbn10(isbn: &str) -> bool {
    let bytes = isbn.as_bytes();
    if bytes.len() != 10 {
        return false;
    }

    let mut sum = 0u32;
    for (position, byte) in bytes.iter().enumerate() {
        let weight = position as u32 + 1;
        let value = match (position, *byte) {
            (9, b'X') => 10,
            (_, byte) => match digit_value(byte) {
                Some(digit) => digit,
                None => return false,
            },
        };
        sum += value * weight;
    }

    sum % 11 == 0
}

fn digit_value(byte: u8) -> Option<u32> {
    if byte.is_ascii_digit() {
        Some(u32::from(byte - b'0'))
    } else {
        None
    }
}
