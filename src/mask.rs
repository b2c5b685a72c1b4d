//! Progressive input mask for date entry.

/// Rendered length of a complete `MM/DD/YYYY` value.
const MASK_LEN: usize = 10;

/// Reformats raw keystrokes into the `MM/DD/YYYY` mask.
///
/// Non-digits are stripped and a separator appears as soon as the month or
/// day group completes, so `"0807"` renders as `"08/07/"`. Output is capped
/// at the mask length.
pub fn format_date_input(text: &str) -> String {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();

    let mut formatted = if digits.len() >= 4 {
        format!("{}/{}/{}", &digits[..2], &digits[2..4], &digits[4..])
    } else if digits.len() >= 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    };

    formatted.truncate(MASK_LEN);
    formatted
}
