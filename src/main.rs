//! Word Scramble - CLI
//!
//! Word game with TUI and CLI modes. Rounds persist between runs.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use word_scramble::{
    commands::{
        Session, find_hints, round_status, run_simple, run_survey, start_new_round, submit_word,
    },
    config::GameConfig,
    logging::{LogConfig, LogTarget, init_logging},
    output::{print_hints, print_status, print_submission, print_survey},
    validation::LanguageTag,
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make words from the letters of a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Where the round is saved
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    /// Root word pool, one word per line
    #[arg(long, global = true)]
    pool: Option<PathBuf>,

    /// Dictionary used to recognize words, one word per line
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,

    /// Words this long or shorter are refused
    #[arg(long, global = true)]
    min_length_threshold: Option<usize>,

    /// Spell checker language
    #[arg(long, global = true)]
    language: Option<String>,

    /// Seed for root word selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, without TUI)
    Simple,

    /// Start a new round and show the root word
    New,

    /// Submit a word to the current round
    Submit {
        /// The word to submit
        word: String,
    },

    /// Show the current round
    Status,

    /// Count the words still playable from the current root
    Hints {
        /// List the words too
        #[arg(long)]
        show: bool,
    },

    /// Rank root words by how many words they allow
    Survey {
        /// Limit number of roots to survey
        #[arg(short, long)]
        limit: Option<usize>,

        /// How many roots to show
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Print the effective configuration
    Config,
}

impl Cli {
    /// Merge command-line overrides into the loaded configuration
    fn apply_overrides(&self, config: &mut GameConfig) {
        if let Some(path) = &self.state {
            config.state_path = Some(path.clone());
        }
        if let Some(path) = &self.pool {
            config.pool_path = Some(path.clone());
        }
        if let Some(path) = &self.dictionary {
            config.dictionary_path = Some(path.clone());
        }
        if let Some(threshold) = self.min_length_threshold {
            config.rules.min_length_threshold = threshold;
        }
        if let Some(language) = &self.language {
            config.rules.language = LanguageTag::new(language);
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    let mut log_config = LogConfig::from_verbosity(cli.verbose);
    if matches!(command, Commands::Play) {
        // The TUI owns the terminal
        log_config = log_config.with_target(LogTarget::Discard);
    }
    init_logging(&log_config.with_log_file(cli.log_file.clone()))
        .context("Failed to initialize logging")?;

    let mut config = GameConfig::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple(&mut Session::open(&config)),
        Commands::New => {
            let status = start_new_round(&mut Session::open(&config))?;
            print_status(&status);
            Ok(())
        }
        Commands::Submit { word } => {
            let mut session = Session::open(&config);
            let result = submit_word(&mut session, &word)?;
            print_submission(&result, session.rules());
            Ok(())
        }
        Commands::Status => {
            let status = round_status(&mut Session::open(&config))?;
            print_status(&status);
            Ok(())
        }
        Commands::Hints { show } => {
            let result = find_hints(&mut Session::open(&config))?;
            print_hints(&result, show);
            Ok(())
        }
        Commands::Survey { limit, top } => {
            let session = Session::open(&config);
            let count = limit.map_or(session.pool().len(), |n| n.min(session.pool().len()));
            println!("🔎 Surveying {count} roots...");
            let result = run_survey(&session, limit, true);
            print_survey(&result, top);
            Ok(())
        }
        Commands::Config => run_config_command(cli.config.as_deref(), &config),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(Session::open(config))?;
    run_tui(app)
}

fn run_config_command(explicit: Option<&Path>, config: &GameConfig) -> Result<()> {
    let source = explicit
        .map(PathBuf::from)
        .or_else(GameConfig::default_path)
        .map_or_else(|| "(none)".to_string(), |path| path.display().to_string());

    println!("# Config file: {source}");
    if let Some(state) = config.resolved_state_path() {
        println!("# Saved round: {}", state.display());
    }
    print!("{}", config.to_toml_string()?);
    Ok(())
}
