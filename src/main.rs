use std::{env, process};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use klox::Klox;

fn history_path() -> Option<std::path::PathBuf> {
    home::home_dir().map(|home| home.join(".klox_history"))
}

fn run_prompt() {
    let mut klox = Klox::new();
    let mut editor = DefaultEditor::new().expect("failed to initialize line editor");

    let history = history_path();
    if let Some(path) = &history {
        let _ = editor.load_history(path);
    }

    println!("Klox REPL [ctrl+D to quit]");

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                klox.run_line(&line);
            },
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(error) => {
                eprintln!("Error reading input: {error}");
                break;
            },
        }
    }

    if let Some(path) = &history {
        let _ = editor.save_history(path);
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => run_prompt(),
        2 => Klox::new().run_file(&args[1]),
        _ => {
            println!("Usage: klox [script]");
            process::exit(klox::EX_USAGE);
        },
    }
}
