//! Behavioural tests for the tokenizer engine.

use std::sync::Arc;

use lexrule::{
    Definition, DefinitionSpec, Token, TokenizeError, Tokenizer, compile_definition,
};

fn compiled(spec: DefinitionSpec) -> Definition {
    match compile_definition(spec) {
        Ok(definition) => definition,
        Err(err) => panic!("definition should compile: {err}"),
    }
}

fn engine(definitions: Vec<Definition>) -> Tokenizer {
    match Tokenizer::new(definitions) {
        Ok(tokenizer) => tokenizer,
        Err(err) => panic!("tokenizer should build: {err}"),
    }
}

fn tokens(tokenizer: &Tokenizer, input: &str) -> Vec<Token> {
    match tokenizer.tokenize(input) {
        Ok(tokens) => tokens,
        Err(err) => panic!("input {input:?} should tokenize: {err}"),
    }
}

fn words_and_spaces(skip_spaces: bool) -> Tokenizer {
    engine(vec![
        compiled(DefinitionSpec::new("word").pattern("[^ ]+").word_boundary(false)),
        compiled(
            DefinitionSpec::new("space")
                .pattern("[ ]+")
                .word_boundary(false)
                .skip(skip_spaces),
        ),
    ])
}

#[test]
fn skip_definitions_consume_without_emitting() {
    let produced = tokens(&words_and_spaces(true), "a b");
    assert_eq!(
        produced,
        vec![Token::new("word", "a"), Token::new("word", "b")]
    );
}

#[test]
fn every_character_is_accounted_for() {
    let produced = tokens(&words_and_spaces(false), "not all those who wander");
    let consumed: usize = produced.iter().map(|token| token.value.len()).sum();
    assert_eq!(consumed, "not all those who wander".len());
}

#[test]
fn tokenization_is_deterministic() {
    let tokenizer = words_and_spaces(true);
    let first = tokens(&tokenizer, "one two three");
    let second = tokens(&tokenizer, "one two three");
    assert_eq!(first, second);
}

#[test]
fn earlier_definitions_win_even_when_later_ones_consume_more() {
    let tokenizer = engine(vec![
        compiled(DefinitionSpec::new("short").value("ab").word_boundary(false)),
        compiled(DefinitionSpec::new("long").value("abc").word_boundary(false)),
        compiled(DefinitionSpec::new("rest").value("c").word_boundary(false)),
    ]);
    let kinds: Vec<_> = tokens(&tokenizer, "abc")
        .into_iter()
        .map(|token| token.kind)
        .collect();
    assert_eq!(kinds, vec!["short".to_string(), "rest".to_string()]);
}

#[test]
fn identical_definitions_resolve_to_the_first() {
    let tokenizer = engine(vec![
        compiled(DefinitionSpec::new("first").value("x").word_boundary(false)),
        compiled(DefinitionSpec::new("second").value("x").word_boundary(false)),
    ]);
    let produced = tokens(&tokenizer, "x");
    assert_eq!(produced, vec![Token::new("first", "x")]);
}

#[test]
fn word_boundary_default_rejects_partial_words() {
    let tokenizer = engine(vec![compiled(DefinitionSpec::new("kw").value("foo"))]);
    assert_eq!(
        tokenizer.tokenize("foobar"),
        Err(TokenizeError::NoDefinitionMatched {
            remaining: "foobar".to_string(),
        })
    );
    assert_eq!(tokens(&tokenizer, "foo"), vec![Token::new("kw", "foo")]);
}

#[test]
fn failures_carry_the_remaining_text_at_the_failure_point() {
    let tokenizer = engine(vec![compiled(
        DefinitionSpec::new("word").pattern("[a-z]+").word_boundary(false),
    )]);
    assert_eq!(
        tokenizer.tokenize("foo !"),
        Err(TokenizeError::NoDefinitionMatched {
            remaining: " !".to_string(),
        })
    );
}

#[test]
fn divergent_validation_surfaces_as_no_value_matched() {
    let tokenizer = engine(vec![compiled(
        DefinitionSpec::new("kw")
            .value("if")
            .valid("[a-z]+")
            .word_boundary(false),
    )]);
    assert_eq!(
        tokenizer.tokenize("loop"),
        Err(TokenizeError::NoValueMatched {
            remaining: "loop".to_string(),
        })
    );
}

#[test]
fn deep_definitions_attach_their_retokenized_children() {
    let tokenizer = engine(vec![
        compiled(DefinitionSpec::new("helloWorld").value("hello world").deep(true)),
        compiled(DefinitionSpec::new("hello").value("hello").word_boundary(false)),
        compiled(DefinitionSpec::new("world").value("world").word_boundary(false)),
        compiled(DefinitionSpec::new("space").value(" ").word_boundary(false)),
    ]);
    let produced = tokens(&tokenizer, "hello world");
    let mut expected = Token::new("helloWorld", "hello world");
    expected.children = Some(vec![
        Token::new("hello", "hello"),
        Token::new("space", " "),
        Token::new("world", "world"),
    ]);
    assert_eq!(produced, vec![expected]);
}

#[test]
fn mutually_recursive_deep_definitions_trip_the_loop_check() {
    let tokenizer = engine(vec![
        compiled(DefinitionSpec::new("d1").value("mock").deep(true)),
        compiled(DefinitionSpec::new("d2").value("mock").deep(true)),
    ]);
    assert_eq!(
        tokenizer.tokenize("mock"),
        Err(TokenizeError::InfiniteLoop {
            value: "mock".to_string(),
            chain: vec!["d1".to_string(), "d2".to_string(), "d1".to_string()],
        })
    );
}

#[test]
fn deep_reentry_on_shrinking_values_is_legitimate() {
    // Two mutually nesting deep definitions: each strips one layer of
    // brackets, so the recursed value keeps shrinking and the loop check
    // must stay quiet.
    let tokenizer = engine(vec![
        compiled(
            DefinitionSpec::new("braces")
                .pattern(r"\{(?P<value>.+)\}")
                .word_boundary(false)
                .deep(true),
        ),
        compiled(
            DefinitionSpec::new("brackets")
                .pattern(r"\[(?P<value>.+)\]")
                .word_boundary(false)
                .deep(true),
        ),
        compiled(DefinitionSpec::new("item").pattern("[a-z]+").word_boundary(false)),
    ]);
    let produced = tokens(&tokenizer, "{[{a}]}");

    let mut kinds = Vec::new();
    let mut level = produced;
    while let Some(token) = level.into_iter().next() {
        kinds.push(token.kind);
        level = token.children.unwrap_or_default();
    }
    assert_eq!(
        kinds,
        vec![
            "braces".to_string(),
            "brackets".to_string(),
            "braces".to_string(),
            "item".to_string(),
        ]
    );
}

#[test]
fn a_tokenizer_is_shareable_across_threads() {
    let tokenizer = Arc::new(words_and_spaces(true));
    let reference = tokens(&tokenizer, "alpha beta gamma");
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..2)
            .map(|_| {
                let tokenizer = Arc::clone(&tokenizer);
                scope.spawn(move || tokenizer.tokenize("alpha beta gamma"))
            })
            .collect();
        for handle in handles {
            match handle.join() {
                Ok(result) => assert_eq!(result, Ok(reference.clone())),
                Err(_) => panic!("tokenizing thread panicked"),
            }
        }
    });
}
