//! Display-safe card number derivation.
//!
//! Replaces every digit except the trailing four with a mask character,
//! leaving all non-digit characters (spaces, dashes) in place so the
//! original grouping survives.

/// Character substituted for hidden digits.
pub const MASK_CHAR: char = '•';

/// Mask a card number for display, keeping only the last four digits.
///
/// Non-digit characters pass through unchanged, so `"1234 5678 9012 3456"`
/// becomes `"•••• •••• •••• 3456"`. Inputs with four or fewer digits are
/// returned as-is -- there is nothing left to hide without destroying the
/// recognizable tail. Pure and deterministic; never fails.
///
/// Idempotent: masking an already-masked string yields the same string,
/// because the only digits remaining are the four that stay visible.
pub fn mask(number: &str) -> String {
    let digit_count = number.chars().filter(char::is_ascii_digit).count();
    let hidden = digit_count.saturating_sub(4);

    let mut seen = 0usize;
    number
        .chars()
        .map(|c| {
            if c.is_ascii_digit() {
                seen += 1;
                if seen <= hidden {
                    MASK_CHAR
                } else {
                    c
                }
            } else {
                c
            }
        })
        .collect()
}
