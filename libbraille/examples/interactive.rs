// Interactive transcription demo.
//
// Type a line of text and get the Braille glyph string plus the dot vectors
// back. An empty line exits.

use std::io::{self, BufRead, Write};

use libbraille::Engine;

fn main() {
    let engine = Engine::new();
    let stdin = io::stdin();

    println!("libbraille interactive demo - empty line exits");
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("read error: {e}");
                break;
            }
        }
        let text = line.trim_end_matches(['\r', '\n']);
        if text.trim().is_empty() {
            break;
        }

        println!("  glyphs: {}", engine.convert_to_braille(text));
        for dots in engine.convert_to_dots(text) {
            println!("  {dots:?}");
        }
    }

    println!("history: {} conversions recorded", engine.history().len());
}
