//! Mask window computation shared by the digit-preserving strategies.
//!
//! The window is measured in *eligible* runes rather than raw indices, so
//! formatting characters between digits never count toward the visible prefix
//! or suffix.

use std::ops::Range;

/// Eligibility predicate used by the phone and card strategies.
pub(crate) fn is_mask_digit(rune: char) -> bool {
    rune.is_ascii_digit()
}

/// Computes the half-open rune window to mask.
///
/// Keeps `show_first` eligible runes visible at the start and `show_last`
/// eligible runes visible at the end. When the input does not have enough
/// eligible runes to leave a non-empty window between the two, the whole
/// input (`0..runes.len()`) is returned.
///
/// The backward scan stops once it reaches the prefix counter as left by the
/// forward scan, never the configured value.
pub(crate) fn analyze_spans<F>(
    runes: &[char],
    show_first: usize,
    show_last: usize,
    eligible: F,
) -> Range<usize>
where
    F: Fn(char) -> bool,
{
    let whole = 0..runes.len();

    let mut show_first = show_first;
    let Some(mask_from) = runes
        .iter()
        .position(|&rune| {
            if eligible(rune) {
                show_first = show_first.saturating_sub(1);
            }
            show_first == 0
        })
        .map(|index| index + 1)
    else {
        return whole;
    };

    let mut show_last = show_last;
    let mask_to = (show_first + 1..runes.len()).rev().find(|&index| {
        if eligible(runes[index]) {
            show_last = show_last.saturating_sub(1);
        }
        show_last == 0
    });

    match mask_to {
        Some(mask_to) if mask_to > mask_from => mask_from..mask_to,
        _ => whole,
    }
}

#[cfg(test)]
mod tests {
    use super::{analyze_spans, is_mask_digit};

    fn runes(value: &str) -> Vec<char> {
        value.chars().collect()
    }

    #[test]
    fn empty_input_yields_empty_window() {
        assert_eq!(analyze_spans(&[], 4, 4, is_mask_digit), 0..0);
    }

    #[test]
    fn plain_digits_leave_prefix_and_suffix() {
        let value = runes("1234567876543210");
        assert_eq!(analyze_spans(&value, 6, 4, is_mask_digit), 6..12);
    }

    #[test]
    fn separators_do_not_count_toward_visible_runes() {
        let value = runes("+1(234)567-89-01");
        // '+' and '(' are skipped: the fourth digit sits at index 5.
        assert_eq!(analyze_spans(&value, 4, 4, is_mask_digit), 6..11);
    }

    #[test]
    fn too_few_eligible_runes_masks_everything() {
        let value = runes("1234");
        assert_eq!(analyze_spans(&value, 6, 4, is_mask_digit), 0..4);

        let value = runes("abc");
        assert_eq!(analyze_spans(&value, 1, 1, is_mask_digit), 0..3);
    }

    #[test]
    fn touching_prefix_and_suffix_collapse_to_whole_input() {
        let value = runes("12345678");
        assert_eq!(analyze_spans(&value, 4, 4, is_mask_digit), 0..8);
    }

    #[test]
    fn window_may_hold_only_separators() {
        let value = runes("1234a5678");
        assert_eq!(analyze_spans(&value, 4, 4, is_mask_digit), 4..5);
    }

    #[test]
    fn zero_prefix_starts_after_first_rune() {
        let value = runes("abcdef");
        assert_eq!(analyze_spans(&value, 0, 0, |_| true), 1..5);
    }

    #[test]
    fn counts_scalar_values_not_bytes() {
        let value = runes("ä1ö2ü3é4");
        assert_eq!(analyze_spans(&value, 1, 1, is_mask_digit), 2..7);
    }
}
