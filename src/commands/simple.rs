//! Simple interactive CLI mode
//!
//! Line-based game loop without the TUI

use super::session::Session;
use super::turn::{round_status, start_new_round, submit_word};
use crate::output::{print_status, print_submission};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// Each line is a word to submit, except the commands `new`, `list` and `quit`.
///
/// # Errors
///
/// Returns an error if reading input fails or no round can be started.
pub fn run_simple(session: &mut Session) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Scramble - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Make as many words as you can from the letters of the root word.");
    println!("Commands: 'new' for a new word, 'list' to see your words, 'quit' to exit");

    let status = round_status(session)?;
    print_status(&status);

    loop {
        let root = session
            .root()
            .map(|word| word.text().to_uppercase())
            .unwrap_or_default();

        let Some(input) = get_user_input(&root)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                let status = start_new_round(session)?;
                println!("\n{}", "🔄 New round started!".green());
                print_status(&status);
            }
            "list" | "l" => {
                let status = round_status(session)?;
                print_status(&status);
            }
            _ => {
                let result = submit_word(session, &input)?;
                print_submission(&result, session.rules());
            }
        }
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}> ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
