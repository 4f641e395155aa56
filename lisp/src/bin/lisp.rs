use rustyline::error::ReadlineError;
use rustyline::Editor;

fn main() {
    let mut rl = Editor::<()>::new();
    loop {
        match rl.readline("~> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str());
                match lisp::interpret(&line) {
                    Ok(result) => println!("{}", result),
                    Err(err) => println!("Error: {:?}", err),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Readline error: {:?}", err);
                break;
            }
        }
    }
}
