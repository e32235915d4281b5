// Transcription vectors for the English Grade 1 alphabet.
//
// These are integration-style tests exercising the public API: the
// high-level `Engine` plus a direct `Transcoder` over `EnglishBraille`.
// The expected strings are spelled out as literal glyph sequences so a
// table regression fails loudly.

use libbraille::{Engine, EnglishBraille, Transcoder, BLANK_PATTERN};
use libbraille_core::Config;

fn transcoder() -> Transcoder<EnglishBraille> {
    Transcoder::new(EnglishBraille)
}

#[test]
fn lowercase_word() {
    let engine = Engine::new();
    assert_eq!(engine.convert_to_braille("hello"), "⠓⠑⠇⠇⠕");
}

#[test]
fn uppercase_letters_carry_capital_marks() {
    let engine = Engine::new();
    assert_eq!(engine.convert_to_braille("Hello World"), "⠠⠓⠑⠇⠇⠕ ⠠⠺⠕⠗⠇⠙");
    // one vector per content character: 10 letters + 1 space, no extras
    assert_eq!(engine.convert_to_dots("Hello World").len(), 11);
}

#[test]
fn single_digit() {
    let engine = Engine::new();
    assert_eq!(engine.convert_to_braille("5"), "⠼⠑");
    assert_eq!(engine.convert_to_dots("5"), vec![[1, 0, 0, 0, 1, 0]]);
}

#[test]
fn digit_zero_wheels_onto_j() {
    let engine = Engine::new();
    assert_eq!(engine.convert_to_braille("10"), "⠼⠁⠚");
    assert_eq!(
        engine.convert_to_dots("10"),
        vec![[1, 0, 0, 0, 0, 0], [0, 1, 0, 1, 1, 0]]
    );
}

#[test]
fn letter_digit_boundary_restarts_number_mode() {
    let engine = Engine::new();
    // "a1": letter cell, then a fresh number mark before the digit
    assert_eq!(engine.convert_to_braille("a1"), "⠁⠼⠁");
    // dot mode: exactly 2 vectors, not 3 - marks have no tactile cell
    assert_eq!(
        engine.convert_to_dots("a1"),
        vec![[1, 0, 0, 0, 0, 0], [1, 0, 0, 0, 0, 0]]
    );
}

#[test]
fn whitespace_splits_digit_runs() {
    let engine = Engine::new();
    assert_eq!(engine.convert_to_braille("12 3"), "⠼⠁⠃ ⠼⠉");
}

#[test]
fn crlf_behaves_like_lf() {
    let engine = Engine::new();
    assert_eq!(
        engine.convert_to_braille("a\r\nb"),
        engine.convert_to_braille("a\nb")
    );
    assert_eq!(
        engine.convert_to_dots("a\r\nb"),
        engine.convert_to_dots("a\nb")
    );
    assert_eq!(engine.convert_to_braille("a\nb"), "⠁\n⠃");
}

#[test]
fn punctuation_glyphs() {
    let engine = Engine::new();
    assert_eq!(engine.convert_to_braille("a, b!"), "⠁⠂ ⠃⠖");
    assert_eq!(engine.convert_to_braille("don't"), "⠙⠕⠝⠄⠞");
}

#[test]
fn unmapped_punctuation_degrades_to_sentinel() {
    let engine = Engine::new();
    assert_eq!(engine.convert_to_braille("a@b"), "⠁?⠃");
    assert_eq!(
        engine.convert_to_dots("a@b"),
        vec![[1, 0, 0, 0, 0, 0], BLANK_PATTERN, [1, 1, 0, 0, 0, 0]]
    );
}

#[test]
fn accented_letter_is_unknown_but_keeps_capital_mark() {
    let engine = Engine::new();
    // 'É' lowercases to 'é', which has no cell in the Grade 1 table
    assert_eq!(engine.convert_to_braille("É"), "⠠?");
    assert_eq!(engine.convert_to_dots("É"), vec![BLANK_PATTERN]);
}

#[test]
fn both_renderers_classify_identically() {
    // same scan feeds both outputs: the number of dot vectors equals the
    // number of glyphs minus the mark glyphs
    let t = transcoder();
    let input = "The 12 cats; 3 dogs?\nDone.";
    let signs = t.scan(input);
    let glyphs = t.render_glyphs(&signs);
    let dots = t.render_dots(&signs);

    let marks = glyphs.chars().filter(|&c| c == '⠠' || c == '⠼').count();
    assert_eq!(glyphs.chars().count() - marks, dots.len());
}

#[test]
fn determinism_across_calls() {
    let engine = Engine::new();
    let input = "Braille 123, ok?";
    assert_eq!(
        engine.convert_to_braille(input),
        engine.convert_to_braille(input)
    );
    assert_eq!(engine.convert_to_dots(input), engine.convert_to_dots(input));
}

#[test]
fn marker_toggles_suppress_glyph_marks_only() {
    let cfg = Config {
        capital_marker: false,
        number_marker: false,
        ..Config::default()
    };
    let t = Transcoder::with_config(EnglishBraille, cfg);
    assert_eq!(t.glyph_string("A1"), "⠁⠁");
    // dot output is one vector per content character either way
    assert_eq!(t.dot_patterns("A1").len(), 2);
}
