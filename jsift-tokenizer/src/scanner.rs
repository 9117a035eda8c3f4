//! Scanner
//!
//! This module holds the character-level scanner that extracts quoted
//! string literals and bare numeric literals from a source stream in a
//! single left-to-right pass with no lookahead.
//!
//! At every character position the scanner is in exactly one of three
//! modes: neutral space, inside a quote block, or inside a digit run.
//! A numeric scan in progress is always flushed before a quote scan
//! can begin, and vice versa; the number-end / quote-start handoff
//! happens within a single character step.
//!
//! Quote blocks
//!
//! A `"` in neutral space opens a quote block; the next `"` always
//! closes it. Everything in between is copied verbatim, escape
//! sequences included. Nested quotes are therefore not understood,
//! and an unterminated quote block at end of stream is dropped rather
//! than emitted.
//!
//! Digit runs
//!
//! A digit in neutral space starts a number. The run accepts further
//! digits and at most one decimal point. A second decimal point closes
//! the number and belongs to no token; scanning resumes in neutral
//! space immediately after it, so `123.45.6` yields `123.45` and `6`.
//! A dot in neutral space is ignored, which is why leading-dot numbers
//! (`.23`) come out without their dot.

use crate::token::Token;

/// Scanner mode. Exactly one mode holds at any character position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Outside both a quote block and a digit run.
    Neutral,
    /// Inside a quote block; everything up to the next `"` is content.
    InQuote,
    /// Inside a digit run; `decimal_seen` is set once a `.` has been
    /// consumed into the current number.
    InNumber { decimal_seen: bool },
}

/// Single-pass scanner over a character stream.
///
/// Feed characters with [`step`](Scanner::step) and collect the emitted
/// tokens with [`finish`](Scanner::finish). [`tokenize`] drives a whole
/// source string through in one call. One accumulator buffer is reused
/// across tokens, so the per-character work is allocation-free.
#[derive(Debug)]
pub struct Scanner {
    mode: Mode,
    buf: String,
    tokens: Vec<Token>,
}

impl Scanner {
    pub fn new() -> Self {
        Scanner {
            mode: Mode::Neutral,
            buf: String::new(),
            tokens: Vec::new(),
        }
    }

    /// Consume one character, emitting any token it completes.
    pub fn step(&mut self, c: char) {
        match self.mode {
            Mode::Neutral => {
                if c.is_ascii_digit() {
                    self.buf.push(c);
                    self.mode = Mode::InNumber {
                        decimal_seen: false,
                    };
                } else if c == '"' {
                    self.buf.push(c);
                    self.mode = Mode::InQuote;
                }
                // Anything else, a dot included, is ignored.
            }
            Mode::InQuote => {
                self.buf.push(c);
                if c == '"' {
                    self.flush_quoted();
                }
            }
            Mode::InNumber { decimal_seen } => {
                if c.is_ascii_digit() {
                    self.buf.push(c);
                } else if c == '.' && !decimal_seen {
                    self.buf.push(c);
                    self.mode = Mode::InNumber { decimal_seen: true };
                } else if c == '.' {
                    // Second decimal point: closes the number and belongs
                    // to no token.
                    self.flush_number();
                } else if c == '"' {
                    // The number ends and a quote block opens in the same
                    // step.
                    self.flush_number();
                    self.buf.push(c);
                    self.mode = Mode::InQuote;
                } else {
                    self.flush_number();
                }
            }
        }
    }

    /// End of stream. A pending number is emitted as a final token; an
    /// unterminated quote block is dropped.
    pub fn finish(mut self) -> Vec<Token> {
        if matches!(self.mode, Mode::InNumber { .. }) {
            self.flush_number();
        }
        self.tokens
    }

    fn flush_number(&mut self) {
        self.tokens.push(Token::Number(self.buf.clone()));
        self.buf.clear();
        self.mode = Mode::Neutral;
    }

    fn flush_quoted(&mut self) {
        self.tokens.push(Token::Quoted(self.buf.clone()));
        self.buf.clear();
        self.mode = Mode::Neutral;
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokenize a whole source string.
///
/// Total over any finite input: this never fails, at worst it produces
/// tokens that don't reflect the writer's intent for nested-quote input.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut scanner = Scanner::new();
    for c in source.chars() {
        scanner.step(c);
    }
    scanner.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{number, quoted};
    use rstest::rstest;

    #[test]
    fn test_recipe_line() {
        let tokens = tokenize(r#"{"type": "minecraft:crafting_shaped", "count": 3}"#);
        assert_eq!(
            tokens,
            vec![
                quoted("type"),
                quoted("minecraft:crafting_shaped"),
                quoted("count"),
                number("3"),
            ]
        );
    }

    #[test]
    fn test_id_line() {
        let tokens = tokenize(r#"{"id": 33}"#);
        assert_eq!(tokens, vec![quoted("id"), number("33")]);
    }

    #[test]
    fn test_single_quoted_string() {
        assert_eq!(tokenize(r#""bark""#), vec![quoted("bark")]);
    }

    #[test]
    fn test_digit_run_between_neighbors() {
        assert_eq!(tokenize("x12345y"), vec![number("12345")]);
    }

    #[test]
    fn test_decimal_number() {
        assert_eq!(tokenize("pi = 3.14,"), vec![number("3.14")]);
    }

    #[test]
    fn test_second_decimal_point_splits_the_number() {
        // The second dot is dropped and closes the number; the digits
        // after it start a fresh token.
        assert_eq!(tokenize("123.45.6"), vec![number("123.45"), number("6")]);
    }

    #[test]
    fn test_second_decimal_point_right_after_first() {
        assert_eq!(tokenize("55.."), vec![number("55.")]);
    }

    #[test]
    fn test_leading_dot_does_not_start_a_number() {
        assert_eq!(tokenize(".23"), vec![number("23")]);
    }

    #[test]
    fn test_unterminated_quote_is_dropped() {
        assert_eq!(tokenize("\"open end"), vec![]);
    }

    #[test]
    fn test_unterminated_quote_after_complete_tokens() {
        assert_eq!(
            tokenize(r#""done" 7 "half"#),
            vec![quoted("done"), number("7")]
        );
    }

    #[test]
    fn test_number_flushed_at_end_of_stream() {
        assert_eq!(tokenize("42"), vec![number("42")]);
    }

    #[test]
    fn test_number_then_quote_in_one_step() {
        // The quote both terminates the digit run and opens a quote block.
        assert_eq!(tokenize(r#"33"a""#), vec![number("33"), quoted("a")]);
    }

    #[test]
    fn test_quote_then_adjacent_number() {
        assert_eq!(tokenize(r#""a"12"#), vec![quoted("a"), number("12")]);
    }

    #[test]
    fn test_digits_inside_quotes_stay_quoted() {
        assert_eq!(tokenize(r#""444""#), vec![quoted("444")]);
    }

    #[test]
    fn test_dots_inside_quotes_are_content() {
        assert_eq!(tokenize(r#""1.2.3""#), vec![quoted("1.2.3")]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
    }

    #[test]
    fn test_non_ascii_is_neutral_outside_quotes() {
        assert_eq!(tokenize("héllo 5 wörld"), vec![number("5")]);
    }

    #[test]
    fn test_non_ascii_inside_quotes_is_content() {
        assert_eq!(tokenize("\"héllo\""), vec![quoted("héllo")]);
    }

    #[test]
    fn test_empty_quoted_string() {
        assert_eq!(tokenize(r#""""#), vec![quoted("")]);
    }

    #[test]
    fn test_step_by_step_scanner_matches_tokenize() {
        let source = r#"{"a": 1.5, "b": "two"}"#;
        let mut scanner = Scanner::new();
        for c in source.chars() {
            scanner.step(c);
        }
        assert_eq!(scanner.finish(), tokenize(source));
    }

    #[rstest]
    #[case("", &[])]
    #[case("{}", &[])]
    #[case("true false null", &[])]
    #[case("a1b2c3", &["1", "2", "3"])]
    #[case("0.0", &["0.0"])]
    #[case("1.2.3.4", &["1.2", "3.4"])]
    #[case("30 334", &["30", "334"])]
    #[case("5.", &["5."])]
    fn test_numeric_boundaries(#[case] source: &str, #[case] expected: &[&str]) {
        let expected: Vec<Token> = expected.iter().map(|t| number(t)).collect();
        assert_eq!(tokenize(source), expected);
    }

    #[rstest]
    #[case(r#""group""#, &["group"])]
    #[case(r#""a" "b""#, &["a", "b"])]
    #[case("\"spread\nover lines\"", &["spread\nover lines"])]
    #[case(r#""{not:parsed}""#, &["{not:parsed}"])]
    fn test_quote_blocks(#[case] source: &str, #[case] expected: &[&str]) {
        let expected: Vec<Token> = expected.iter().map(|t| quoted(t)).collect();
        assert_eq!(tokenize(source), expected);
    }
}
