//! Buzzwords - CLI
//!
//! Spelling-bee style word puzzle: resumable games, custom and seeded
//! puzzles, shareable tokens.

use anyhow::{Context, Result, bail};
use buzzwords::{
    commands::run_play,
    game::{Session, StartSource},
    output::print_save_warning,
    puzzle::generator,
    store::{FileStore, restore, share},
    wordlists::{DICTIONARY, loader},
};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "buzzwords",
    about = "Spelling-bee style word puzzle: make words, find pangrams, share puzzles",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line (default: embedded word list)
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<PathBuf>,

    /// Save file for game progress
    #[arg(long, global = true, default_value = "buzzwords_save.json")]
    save: PathBuf,

    /// Unique letters in a new puzzle (4-9)
    #[arg(short = 'l', long, global = true, default_value_t = 7)]
    length: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Resume the saved game, or start a new one (default)
    Play,

    /// Discard the saved game and start a fresh puzzle
    New,

    /// Play a puzzle built from your own word list
    Custom {
        /// Comma-separated word list; these become the puzzle's solutions
        #[arg(short, long, value_delimiter = ',', required = true)]
        words: Vec<String>,

        /// Required letter (default: picked from letters common to all words)
        #[arg(short, long)]
        required: Option<char>,
    },

    /// Play a puzzle on an explicit letter set, solved from the dictionary
    Seeded {
        /// The puzzle letters, e.g. "catsdog"
        letters: String,

        /// Required letter (must be one of the puzzle letters)
        #[arg(short, long)]
        required: char,
    },

    /// Play a shared puzzle token
    Open {
        /// Token produced by /share or show-token
        token: String,
    },

    /// Print the share token for the saved puzzle
    ShowToken,
}

/// Load the dictionary from a file, or fall back to the embedded list
fn load_dictionary(path: Option<&Path>) -> Result<Vec<String>> {
    let words = match path {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("could not read dictionary {}", path.display()))?,
        None => loader::words_from_slice(DICTIONARY),
    };

    if words.is_empty() {
        bail!("dictionary has no usable words (four letters or longer)");
    }
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(cli.dictionary.as_deref())?;
    let store = FileStore::new(&cli.save);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let (mut session, report) =
                Session::start(dictionary, store, None, cli.length, StdRng::from_os_rng())
                    .context("could not create a puzzle")?;
            if let Some(warning) = &report.persist_warning {
                print_save_warning(warning);
            }
            run_play(&mut session, report.source).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::New => {
            let mut rng = StdRng::from_os_rng();
            let spec = generator::generate(&dictionary, cli.length, &mut rng)
                .context("could not create a puzzle")?;
            let (mut session, warning) = Session::from_spec(dictionary, store, spec, rng);
            if let Some(warning) = &warning {
                print_save_warning(warning);
            }
            run_play(&mut session, StartSource::Generated).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Custom { words, required } => {
            let mut rng = StdRng::from_os_rng();
            let spec = generator::from_word_list(&words, required, &mut rng)
                .context("could not build a puzzle from the word list")?;
            let (mut session, warning) = Session::from_spec(dictionary, store, spec, rng);
            if let Some(warning) = &warning {
                print_save_warning(warning);
            }
            run_play(&mut session, StartSource::Generated).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Seeded { letters, required } => {
            let letters: Vec<char> = letters.chars().collect();
            let spec = generator::seeded(&dictionary, &letters, required)
                .context("could not build a puzzle from the letter set")?;
            let (mut session, warning) =
                Session::from_spec(dictionary, store, spec, StdRng::from_os_rng());
            if let Some(warning) = &warning {
                print_save_warning(warning);
            }
            run_play(&mut session, StartSource::Generated).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Open { token } => {
            let (mut session, report) = Session::start(
                dictionary,
                store,
                Some(&token),
                cli.length,
                StdRng::from_os_rng(),
            )
            .context("could not create a puzzle")?;
            // Malformed tokens fall back to the saved-game/new-game path
            if let Some(e) = &report.token_error {
                eprintln!("warning: could not open shared puzzle ({e}); falling back");
            }
            if let Some(warning) = &report.persist_warning {
                print_save_warning(warning);
            }
            run_play(&mut session, report.source).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::ShowToken => {
            let Some(state) = restore(&store) else {
                bail!("no saved game at {}", cli.save.display());
            };
            println!("{}", share::encode(state.spec()));
            Ok(())
        }
    }
}
