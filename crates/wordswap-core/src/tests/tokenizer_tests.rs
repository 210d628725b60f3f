use crate::tokenizer::{Token, tokenize};

#[test]
fn test_word_wide_space_newline() {
    let tokens: Vec<Token> = tokenize("Hello   world\n").collect();

    assert_eq!(
        tokens,
        vec![
            Token::Word("Hello"),
            Token::WideSpace("   "),
            Token::Word("world"),
            Token::Newline,
        ]
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(tokenize("").count(), 0);
}

#[test]
fn test_single_spaces_and_punctuation_are_dropped() {
    let tokens: Vec<Token> = tokenize("Hi, there!").collect();

    assert_eq!(tokens, vec![Token::Word("Hi"), Token::Word("there")]);
}

#[test]
fn test_line_controls() {
    let tokens: Vec<Token> = tokenize("a\tb\rc").collect();

    assert_eq!(
        tokens,
        vec![
            Token::Word("a"),
            Token::Tab,
            Token::Word("b"),
            Token::CarriageReturn,
            Token::Word("c"),
        ]
    );
}

#[test]
fn test_whitespace_run_swallows_line_controls() {
    // Two or more whitespace chars take priority over a single newline
    let tokens: Vec<Token> = tokenize("a\r\nb").collect();

    assert_eq!(
        tokens,
        vec![Token::Word("a"), Token::WideSpace("\r\n"), Token::Word("b")]
    );
}

#[test]
fn test_underscores_and_digits_are_word_chars() {
    let tokens: Vec<Token> = tokenize("snake_case 42x").collect();

    assert_eq!(tokens, vec![Token::Word("snake_case"), Token::Word("42x")]);
}

#[test]
fn test_restartable() {
    let text = "one  two";
    let first: Vec<Token> = tokenize(text).collect();
    let second: Vec<Token> = tokenize(text).collect();
    assert_eq!(first, second);

    let mut tokens = tokenize(text);
    tokens.next();
    let replay = tokens.clone();
    assert_eq!(tokens.collect::<Vec<_>>(), replay.collect::<Vec<_>>());
}

#[test]
fn test_non_ascii_letters_split_words() {
    let tokens: Vec<Token> = tokenize("café naïve").collect();

    assert_eq!(
        tokens,
        vec![Token::Word("caf"), Token::Word("na"), Token::Word("ve")]
    );
}

#[test]
fn test_non_ascii_whitespace_is_not_a_wide_space() {
    // U+00A0 twice is not ASCII whitespace
    let tokens: Vec<Token> = tokenize("a\u{a0}\u{a0}b").collect();

    assert_eq!(tokens, vec![Token::Word("a"), Token::Word("b")]);
}
