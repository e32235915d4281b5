// History integration: the engine's record side effect across both
// backends, and the rule that blank input never records.

use libbraille::{BrailleConfig, ConversionLog, Engine};
use libbraille_core::Config;

fn temp_db(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("libbraille_{}_{}.redb", name, std::process::id()))
}

#[test]
fn each_entry_point_records_once() {
    let engine = Engine::new();

    engine.convert_to_braille("one");
    engine.convert_to_dots("two");
    assert_eq!(engine.history().len(), 2);

    let snap = engine.history().snapshot();
    assert_eq!(snap[0].input, "one");
    // dots path records the glyph string, same as the glyph path would
    assert_eq!(snap[1].input, "two");
    assert_eq!(snap[1].braille, "⠞⠺⠕");
}

#[test]
fn blank_input_is_not_recorded() {
    let engine = Engine::new();
    engine.convert_to_braille("");
    engine.convert_to_braille(" \t ");
    engine.convert_to_dots("\r\n");
    assert!(engine.history().is_empty());
}

#[test]
fn persistent_history_survives_reopen() {
    let path = temp_db("reopen");
    let _ = std::fs::remove_file(&path);

    {
        let log = ConversionLog::new_redb(&path).expect("open log");
        let engine = Engine::with_log(Config::default(), log);
        engine.convert_to_braille("cab 12");
        assert_eq!(engine.history().len(), 1);
    }

    let log = ConversionLog::new_redb(&path).expect("reopen log");
    let snap = log.snapshot();
    assert_eq!(snap.len(), 1);
    assert_eq!(snap[0].input, "cab 12");
    assert_eq!(snap[0].braille, "⠉⠁⠃ ⠼⠁⠃");

    let _ = std::fs::remove_file(&path);
}

#[test]
fn engine_from_config_uses_configured_backend() {
    let path = temp_db("from_config");
    let _ = std::fs::remove_file(&path);

    let config = BrailleConfig {
        history_path: Some(path.clone()),
        ..BrailleConfig::default()
    };
    let engine = Engine::from_config(config).expect("engine with redb history");
    engine.convert_to_dots("hi");
    assert_eq!(engine.history().len(), 1);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn bounded_in_memory_history() {
    let engine = Engine::with_log(Config::default(), ConversionLog::with_capacity(2));
    engine.convert_to_braille("a");
    engine.convert_to_braille("b");
    engine.convert_to_braille("c");

    let snap = engine.history().snapshot();
    assert_eq!(snap.len(), 2);
    assert_eq!(snap[0].input, "b");
    assert_eq!(snap[1].input, "c");
}
