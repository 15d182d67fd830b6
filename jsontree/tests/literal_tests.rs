// SPDX-License-Identifier: Apache-2.0

// Bare word classification under both literal policies

use jsontree::{JsonParser, LiteralPolicy, NodeKind, ParseError, ParserOptions};

fn classify(input: &str, policy: LiteralPolicy) -> Result<NodeKind, ParseError> {
    let options = ParserOptions::default().with_literal_policy(policy);
    let parser = JsonParser::from_bytes(input.as_bytes().to_vec(), options)?;
    Ok(parser.root().map(|n| n.kind()).expect("root present"))
}

macro_rules! generate_literal_tests {
    ($($name:ident: $input:expr => $lenient:expr, $strict_ok:expr;)*) => {
        $(
            paste::paste! {
                #[test]
                fn [<test_lenient_ $name>]() {
                    let kind = classify($input, LiteralPolicy::NullFallback)
                        .unwrap_or_else(|e| panic!("{:?} failed to parse: {}", $input, e));
                    assert_eq!(kind, $lenient, "classifying {:?}", $input);
                }

                #[test]
                fn [<test_strict_ $name>]() {
                    match classify($input, LiteralPolicy::Reject) {
                        Ok(kind) => {
                            assert!($strict_ok, "{:?} should be rejected, got {:?}", $input, kind);
                            assert_eq!(kind, $lenient);
                        }
                        Err(ParseError::UnrecognizedLiteral { word, offset }) => {
                            assert!(!$strict_ok, "{:?} should be accepted", $input);
                            assert_eq!(word, $input.trim());
                            assert_eq!(offset, $input.len() - $input.trim_start().len());
                        }
                        Err(e) => panic!("unexpected error for {:?}: {}", $input, e),
                    }
                }
            }
        )*
    };
}

generate_literal_tests! {
    true_word: "true" => NodeKind::True, true;
    false_word: "false" => NodeKind::False, true;
    null_word: "null" => NodeKind::Null, true;
    padded_true: "  true\n" => NodeKind::True, true;
    unknown_word: "xyz" => NodeKind::Null, false;
    prefix_of_true: "tru" => NodeKind::Null, false;
    extended_true: "trueish" => NodeKind::Null, false;
    over_long_word: "abcdefghijklmnopqrstuvwxyz" => NodeKind::Null, false;
    single_letter: "n" => NodeKind::Null, false;
}
