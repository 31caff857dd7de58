//! Interactive play mode
//!
//! Text-based game loop: words are submitted as typed, slash commands
//! drive everything else.

use crate::game::{Session, StartSource};
use crate::output::{
    print_complete, print_found, print_outcome, print_pangrams, print_puzzle, print_save_warning,
    print_share_token,
};
use crate::store::Store;
use colored::Colorize;
use std::io::{self, Write};

/// Run the interactive game loop
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_play<S: Store>(session: &mut Session<S>, source: StartSource) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                       B U Z Z W O R D S                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝");

    match source {
        StartSource::Shared => println!("\n🔗 Playing a shared puzzle."),
        StartSource::Restored => println!("\n💾 Resumed your saved game."),
        StartSource::Generated => println!("\n✨ New puzzle generated."),
    }

    println!("\nForm words of four or more letters using only the puzzle letters.");
    println!("Every word must use the highlighted required letter; letters may repeat.");
    println!("A pangram (a word using every letter) earns bonus points.");
    println!("\nCommands: /shuffle /found /pangrams /share /new /help /quit");

    print_puzzle(session.state());

    loop {
        let input = get_user_input("\nWord (or /help)")?;

        match input.as_str() {
            "" => continue,
            "/quit" | "/q" | "/exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "/help" | "/h" => {
                println!("\n  /shuffle   rearrange the letters");
                println!("  /found     list the words you have found");
                println!("  /pangrams  reveal the puzzle's pangrams (spoilers!)");
                println!("  /share     print a token that recreates this puzzle");
                println!("  /new       abandon this puzzle and start another");
                println!("  /quit      leave (progress is saved)");
            }
            "/shuffle" | "/s" => {
                if let Some(warning) = session.shuffle() {
                    print_save_warning(&warning);
                }
                print_puzzle(session.state());
            }
            "/found" | "/f" => print_found(session.state()),
            "/pangrams" => print_pangrams(session.state()),
            "/share" => print_share_token(&session.share_token()),
            "/new" | "/n" => {
                let letter_count = session.state().spec().letter_count();
                match session.new_game(letter_count) {
                    Ok(warning) => {
                        println!("\n🔄 New game started!");
                        if let Some(warning) = warning {
                            print_save_warning(&warning);
                        }
                        print_puzzle(session.state());
                    }
                    Err(e) => println!("\n  {} {e}", "✗".red().bold()),
                }
            }
            word if word.starts_with('/') => {
                println!("\n  {} Unknown command: {word}", "✗".red().bold());
            }
            word => {
                let normalized = word.trim().to_lowercase();
                let outcome = session.submit_word(word);

                print_outcome(
                    outcome.result,
                    session.state().spec().letter_count(),
                    &normalized,
                );
                if let Some(warning) = outcome.persist_warning {
                    print_save_warning(&warning);
                }

                if outcome.result.is_accepted() {
                    print_puzzle(session.state());

                    if session.state().is_complete() {
                        print_complete(session.state());

                        match get_user_input("Play again? (yes/no)")?
                            .to_lowercase()
                            .as_str()
                        {
                            "yes" | "y" => {
                                let letter_count = session.state().spec().letter_count();
                                match session.new_game(letter_count) {
                                    Ok(warning) => {
                                        println!("\n🔄 New game started!");
                                        if let Some(warning) = warning {
                                            print_save_warning(&warning);
                                        }
                                        print_puzzle(session.state());
                                    }
                                    Err(e) => {
                                        println!("\n  {} {e}", "✗".red().bold());
                                        return Ok(());
                                    }
                                }
                            }
                            _ => {
                                println!("\n👋 Thanks for playing!\n");
                                return Ok(());
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
