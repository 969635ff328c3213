//! The masking strategies for string values.
//!
//! Every function here is total: any input, including the empty string, yields
//! a defined output. All of them work on Unicode scalar values and, apart from
//! [`mask_as_password`], return a string with exactly as many `char`s as the
//! input.

use super::spans::{analyze_spans, is_mask_digit};

/// Character substituted for every masked rune.
pub const MASK_CHAR: char = '*';

/// Fixed output of [`mask_as_password`] for any non-empty input.
pub const PASSWORD_MASK: &str = "********";

/// Upper bound on the visible prefix of an email local part.
const EMAIL_MAX_VISIBLE: usize = 10;

/// Phone numbers keep the first four and last four digits.
const PHONE_VISIBLE: (usize, usize) = (4, 4);

/// Card numbers keep the issuer BIN (six digits) and the last four.
const CARD_PAN_VISIBLE: (usize, usize) = (6, 4);

/// Masks every non-whitespace character.
///
/// ```
/// assert_eq!(masker::mask_as_generic("foo bar baz"), "*** *** ***");
/// ```
#[must_use]
pub fn mask_as_generic(value: &str) -> String {
    value
        .chars()
        .map(|rune| if rune.is_whitespace() { rune } else { MASK_CHAR })
        .collect()
}

/// Replaces any non-empty value with [`PASSWORD_MASK`].
///
/// The output never depends on the input's length.
///
/// ```
/// assert_eq!(masker::mask_as_password(""), "");
/// assert_eq!(masker::mask_as_password("hunter2"), "********");
/// ```
#[must_use]
pub fn mask_as_password(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    PASSWORD_MASK.to_string()
}

/// Masks the local part of an email address and keeps the domain.
///
/// The visible prefix of the local part is a quarter of its length (in
/// `char`s), capped at ten. Without an `@` the value is masked with
/// [`mask_as_generic`].
///
/// ```
/// assert_eq!(masker::mask_as_email("user@mail.box"), "u***@mail.box");
/// assert_eq!(masker::mask_as_email("a@mail.box"), "*@mail.box");
/// ```
#[must_use]
pub fn mask_as_email(value: &str) -> String {
    let Some(at) = value.chars().position(|rune| rune == '@') else {
        return mask_as_generic(value);
    };

    let show_first = EMAIL_MAX_VISIBLE.min(at / 4);
    value
        .chars()
        .enumerate()
        .map(|(index, rune)| {
            if (show_first..at).contains(&index) {
                MASK_CHAR
            } else {
                rune
            }
        })
        .collect()
}

/// Masks the middle digits of a phone number.
///
/// The first four and last four digits stay visible along with every
/// non-digit character. Numbers with eight digits or fewer are fully masked,
/// except an eight-digit number split between the two visible groups by
/// separators, which comes back unchanged.
///
/// ```
/// assert_eq!(masker::mask_as_phone("+1(234)567-89-01"), "+1(234)***-89-01");
/// ```
#[must_use]
pub fn mask_as_phone(value: &str) -> String {
    mask_digits(value, PHONE_VISIBLE)
}

/// Masks a payment card number, keeping the first six and last four digits.
///
/// Spaces, dashes and other separators are preserved. Numbers with ten digits
/// or fewer are fully masked, with the same exception for a separator sitting
/// right between the two visible groups as [`mask_as_phone`].
///
/// ```
/// assert_eq!(masker::mask_as_card_pan("1234 5678 7654 3210"), "1234 56** **** 3210");
/// ```
#[must_use]
pub fn mask_as_card_pan(value: &str) -> String {
    mask_digits(value, CARD_PAN_VISIBLE)
}

fn mask_digits(value: &str, (show_first, show_last): (usize, usize)) -> String {
    let mut runes: Vec<char> = value.chars().collect();
    let window = analyze_spans(&runes, show_first, show_last, is_mask_digit);
    for rune in &mut runes[window] {
        if is_mask_digit(*rune) {
            *rune = MASK_CHAR;
        }
    }
    runes.into_iter().collect()
}
