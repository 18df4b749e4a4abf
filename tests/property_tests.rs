//! Property-based tests for the escaping laws every format must satisfy.
//!
//! The central one is the dual round trip: a literal printed by the combined format
//! decodes back to the input string under a strict JSON parser *and* under
//! JavaScript string literal evaluation.

mod common;

use cformat::{
    encode, encode_utf16, needs_escaping, ContentFormat, EscapeGrammar, EscapeOptions,
    QuoteStyle, SlashEscape,
};
use common::{eval_js_string, eval_json_string, utf16};
use proptest::prelude::*;

/// Strings dense in the characters the grammars care about.
fn tricky_string() -> impl Strategy<Value = String> {
    let tricky = prop_oneof![
        Just('"'),
        Just('\''),
        Just('\\'),
        Just('/'),
        Just('<'),
        Just('>'),
        Just('!'),
        Just('-'),
        Just(']'),
        Just('\u{2028}'),
        Just('\u{2029}'),
        Just('\u{7F}'),
        Just('\u{85}'),
        (0u32..0x20).prop_map(|c| char::from_u32(c).unwrap_or('\0')),
        any::<char>(),
    ];
    prop::collection::vec(tricky, 0..40).prop_map(|chars| chars.into_iter().collect())
}

fn slash_policy() -> impl Strategy<Value = SlashEscape> {
    prop_oneof![
        Just(SlashEscape::Always),
        Just(SlashEscape::AfterLessThan),
        Just(SlashEscape::Never),
    ]
}

proptest! {
    #[test]
    fn prop_combined_round_trips_through_json(s in tricky_string()) {
        let literal = ContentFormat::JavaScriptOrJson.format_string(&s);
        prop_assert_eq!(eval_json_string(&literal), Ok(s));
    }

    #[test]
    fn prop_combined_round_trips_through_javascript(s in tricky_string()) {
        let literal = ContentFormat::JavaScriptOrJson.format_string(&s);
        prop_assert_eq!(eval_js_string(&literal), Ok(utf16(&s)));
    }

    #[test]
    fn prop_combined_round_trips_arbitrary_text(s in any::<String>()) {
        let literal = ContentFormat::JavaScriptOrJson.format_string(&s);
        prop_assert_eq!(eval_json_string(&literal), Ok(s.clone()));
        prop_assert_eq!(eval_js_string(&literal), Ok(utf16(&s)));
    }

    #[test]
    fn prop_json_format_round_trips_through_json(s in tricky_string()) {
        let literal = ContentFormat::Json.format_string(&s);
        prop_assert_eq!(eval_json_string(&literal), Ok(s));
    }

    #[test]
    fn prop_javascript_format_round_trips_through_javascript(s in tricky_string()) {
        let literal = ContentFormat::JavaScript.format_string(&s);
        prop_assert_eq!(eval_js_string(&literal), Ok(utf16(&s)));
    }

    #[test]
    fn prop_every_option_combination_stays_dual_valid(
        s in tricky_string(),
        slash in slash_policy(),
        html_comment_guard in any::<bool>(),
        c1 in any::<bool>(),
    ) {
        let options = EscapeOptions::new()
            .with_slash(slash)
            .with_html_comment_guard(html_comment_guard)
            .with_c1_controls(c1);
        let literal = ContentFormat::JavaScriptOrJson.format_string_with(&s, &options);
        prop_assert_eq!(eval_json_string(&literal), Ok(s.clone()));
        prop_assert_eq!(eval_js_string(&literal), Ok(utf16(&s)));
    }

    #[test]
    fn prop_clean_strings_are_only_quoted(s in "[a-zA-Z0-9 .,:;_+=?(){}\\[\\]]*") {
        for format in ContentFormat::ALL {
            prop_assert!(!needs_escaping(&s, format.grammar()));
            prop_assert_eq!(format.format_string(&s), format!("\"{}\"", s));
        }
    }

    #[test]
    fn prop_combined_is_never_laxer_than_either_grammar(s in tricky_string()) {
        // Anything one grammar escapes, the combined grammar escapes as well.
        for grammar in [EscapeGrammar::Json, EscapeGrammar::JavaScript] {
            if needs_escaping(&s, grammar) {
                prop_assert!(needs_escaping(&s, EscapeGrammar::JavaScriptOrJson));
            }
        }
    }

    #[test]
    fn prop_encoding_is_deterministic(s in tricky_string()) {
        for grammar in [EscapeGrammar::Json, EscapeGrammar::JavaScript, EscapeGrammar::JavaScriptOrJson] {
            prop_assert_eq!(
                encode(&s, grammar, QuoteStyle::Double),
                encode(&s, grammar, QuoteStyle::Double)
            );
        }
    }

    #[test]
    fn prop_lone_surrogates_survive_javascript(units in prop::collection::vec(any::<u16>(), 0..24)) {
        let grammar = EscapeGrammar::JavaScriptOrJson;
        let options = EscapeOptions::for_grammar(grammar);
        let literal = format!("\"{}\"", encode_utf16(&units, grammar, QuoteStyle::Double, &options));
        prop_assert_eq!(eval_js_string(&literal), Ok(units));
    }

    #[test]
    fn prop_escaping_twice_is_not_a_no_op(s in tricky_string()) {
        let grammar = EscapeGrammar::JavaScriptOrJson;
        let once = encode(&s, grammar, QuoteStyle::Double);
        let twice = encode(&once, grammar, QuoteStyle::Double);
        prop_assert!(twice.matches('\\').count() >= 2 * once.matches('\\').count());
        if once.contains('\\') {
            prop_assert_ne!(once, twice);
        }
    }
}
