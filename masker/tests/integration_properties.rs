//! Properties that hold for every strategy over a mixed input corpus.
//!
//! The corpus covers empty and whitespace-only input, short and long digit
//! runs, formatted numbers, emails with and without `@`, and multi-byte text.

use masker::{MASK_CHAR, MaskStrategy, PASSWORD_MASK};

const CORPUS: &[&str] = &[
    "",
    " ",
    "\t\n",
    "a",
    "7",
    "@",
    "1234",
    "12345",
    "12345678",
    "123456789",
    "1234567890",
    "12345678901",
    "1234567876543210",
    "1234 5678 7654 3210",
    "1234 - 5678 - 7654 - 3210",
    "+12345678901",
    "+1(234)567-89-01",
    "+1 (234-567-89) 012345 67 89 01 23 45 67 89",
    "2345-6789",
    "user@mail.box",
    "a@mail.box",
    "user@a@b",
    "@mail.box",
    "very-very-long.name+also+has+a+tag@mail.box",
    "no at sign here",
    "foo bar baz",
    "café",
    "жжжжжжжж@почта.рф",
    "☎ 8 (800) 555-35-35",
    "١٢٣٤٥٦٧٨٩٠",
    "tab\tseparated\tvalues",
    "+1234***8901",
    "123456******3210",
];

fn runes(value: &str) -> Vec<char> {
    value.chars().collect()
}

fn eligible(strategy: MaskStrategy, rune: char) -> bool {
    match strategy {
        MaskStrategy::Generic => !rune.is_whitespace(),
        MaskStrategy::Phone | MaskStrategy::CardPan => rune.is_ascii_digit(),
        MaskStrategy::Password | MaskStrategy::Email => true,
    }
}

#[test]
fn length_is_preserved_except_for_passwords() {
    for strategy in MaskStrategy::ALL {
        for input in CORPUS {
            let output = strategy.apply(input);
            if strategy == MaskStrategy::Password {
                let expected = if input.is_empty() { "" } else { PASSWORD_MASK };
                assert_eq!(output, expected, "{strategy}({input:?})");
            } else {
                assert_eq!(
                    output.chars().count(),
                    input.chars().count(),
                    "{strategy}({input:?}) = {output:?}"
                );
            }
        }
    }
}

#[test]
fn masking_is_idempotent() {
    for strategy in MaskStrategy::ALL {
        for input in CORPUS {
            let once = strategy.apply(input);
            let twice = strategy.apply(&once);
            assert_eq!(twice, once, "{strategy}({input:?})");
        }
    }
}

#[test]
fn empty_input_yields_empty_output() {
    for strategy in MaskStrategy::ALL {
        assert_eq!(strategy.apply(""), "", "{strategy}");
    }
}

#[test]
fn ineligible_runes_are_kept_in_place() {
    let strategies = [
        MaskStrategy::Generic,
        MaskStrategy::Phone,
        MaskStrategy::CardPan,
    ];
    for strategy in strategies {
        for input in CORPUS {
            let output = strategy.apply(input);
            for (before, after) in runes(input).into_iter().zip(runes(&output)) {
                if !eligible(strategy, before) {
                    assert_eq!(after, before, "{strategy}({input:?}) = {output:?}");
                }
            }
        }
    }
}

#[test]
fn changed_runes_are_always_the_mask_char() {
    for strategy in MaskStrategy::ALL {
        if strategy == MaskStrategy::Password {
            continue;
        }
        for input in CORPUS {
            let output = strategy.apply(input);
            for (before, after) in runes(input).into_iter().zip(runes(&output)) {
                if before != after {
                    assert_eq!(after, MASK_CHAR, "{strategy}({input:?}) = {output:?}");
                }
            }
        }
    }
}

#[test]
fn email_domain_is_always_revealed() {
    for input in CORPUS {
        let Some(at) = input.find('@') else {
            continue;
        };
        let output = MaskStrategy::Email.apply(input);
        assert!(output.ends_with(&input[at..]), "{input:?} -> {output:?}");
    }
}

#[test]
fn output_depends_only_on_input() {
    for strategy in MaskStrategy::ALL {
        for input in CORPUS {
            let owned = (*input).to_string();
            assert_eq!(strategy.apply(input), strategy.apply(&owned));
        }
    }
}

#[test]
fn strategies_are_usable_across_threads() {
    let handles: Vec<_> = MaskStrategy::ALL
        .into_iter()
        .map(|strategy| {
            std::thread::spawn(move || {
                CORPUS
                    .iter()
                    .map(|input| strategy.apply(input))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (strategy, handle) in MaskStrategy::ALL.into_iter().zip(handles) {
        let from_thread = handle.join().unwrap();
        let local: Vec<_> = CORPUS.iter().map(|input| strategy.apply(input)).collect();
        assert_eq!(from_thread, local, "{strategy}");
    }
}
