// Host-side tests for the typed-quote effect.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod typed {
    include!("../src/core/typed.rs");
}

use typed::*;

fn run(q: &mut TypedQuote) -> Vec<TypedToken> {
    std::iter::from_fn(|| q.next_token()).collect()
}

#[test]
fn nothing_is_typed_before_start() {
    let mut q = TypedQuote::new("abc");
    assert_eq!(q.next_token(), None);
    assert!(!q.is_done());
}

#[test]
fn newlines_become_line_breaks_in_order() {
    let mut q = TypedQuote::new("ab\nc\n\nd");
    assert!(q.start());
    let tokens = run(&mut q);
    assert_eq!(
        tokens,
        vec![
            TypedToken::Char('a'),
            TypedToken::Char('b'),
            TypedToken::LineBreak,
            TypedToken::Char('c'),
            TypedToken::LineBreak,
            TypedToken::LineBreak,
            TypedToken::Char('d'),
        ]
    );
    assert!(q.is_done());
    assert_eq!(q.next_token(), None);
}

#[test]
fn about_text_yields_n_minus_k_chars_and_k_breaks() {
    let n = ABOUT_TEXT.chars().count();
    let k = ABOUT_TEXT.chars().filter(|&c| c == '\n').count();
    assert!(k > 0);

    let mut q = TypedQuote::new(ABOUT_TEXT);
    q.start();
    let tokens = run(&mut q);
    let breaks = tokens.iter().filter(|t| **t == TypedToken::LineBreak).count();
    let typed: String = tokens
        .iter()
        .filter_map(|t| match t {
            TypedToken::Char(c) => Some(*c),
            TypedToken::LineBreak => None,
        })
        .collect();
    assert_eq!(breaks, k);
    assert_eq!(typed.chars().count(), n - k);
    assert_eq!(typed, ABOUT_TEXT.replace('\n', ""));
}

#[test]
fn start_is_one_shot() {
    let mut q = TypedQuote::new("xy");
    assert!(q.start());
    assert_eq!(q.next_token(), Some(TypedToken::Char('x')));
    assert!(!q.start());
    // A second start does not rewind
    assert_eq!(q.next_token(), Some(TypedToken::Char('y')));
}

#[test]
fn multibyte_characters_are_typed_whole() {
    let mut q = TypedQuote::new("I\u{2019}m \u{2014}");
    q.start();
    let tokens = run(&mut q);
    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[1], TypedToken::Char('\u{2019}'));
}

#[test]
fn first_token_is_ready_as_soon_as_typing_starts() {
    let mut q = TypedQuote::new(ABOUT_TEXT);
    assert!(q.start());
    assert_eq!(q.next_token(), Some(TypedToken::Char('H')));
    assert!(!q.is_done());
}

#[test]
fn done_flips_with_the_last_token() {
    // The driver stops scheduling on `is_done`, so no empty tick follows
    let mut q = TypedQuote::new("a\nb");
    q.start();
    assert_eq!(q.next_token(), Some(TypedToken::Char('a')));
    assert!(!q.is_done());
    assert_eq!(q.next_token(), Some(TypedToken::LineBreak));
    assert!(!q.is_done());
    assert_eq!(q.next_token(), Some(TypedToken::Char('b')));
    assert!(q.is_done());
}
