use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four::config::AppConfig;
use connect_four::game::{GameOutcome, COLS};
use connect_four::session::{GameMode, Session};
use connect_four::{Difficulty, Player};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", version, about = "Play Connect Four against the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Game mode: pve or pvp
    #[arg(long)]
    mode: Option<GameMode>,

    /// Computer strength: easy or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Color played by the computer: red or yellow
    #[arg(long)]
    ai_player: Option<Player>,

    /// Override hard-mode search depth (plies)
    #[arg(long)]
    depth: Option<usize>,

    /// Seed for easy-mode randomness
    #[arg(long)]
    seed: Option<u64>,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,
}

enum Command {
    Drop(usize),
    Reset,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "q" | "quit" => Some(Command::Quit),
        "r" | "reset" => Some(Command::Reset),
        other => other
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=COLS).contains(n))
            .map(|n| Command::Drop(n - 1)),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(mode) = cli.mode {
        config.game.mode = mode;
    }
    if let Some(difficulty) = cli.difficulty {
        config.game.difficulty = difficulty;
    }
    if let Some(ai_player) = cli.ai_player {
        config.game.ai_player = ai_player;
    }
    if let Some(depth) = cli.depth {
        config.ai.hard_depth = depth;
    }
    if cli.seed.is_some() {
        config.ai.seed = cli.seed;
    }
    config.validate().context("invalid settings")?;

    run(Session::from_config(&config), Duration::from_millis(config.game.ai_delay_ms))
}

fn run(mut session: Session, ai_delay: Duration) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Connect Four  |  columns 1-{COLS}, 'r' new game, 'q' quit");
    loop {
        println!("\n{}\n", session.state().board());

        let state = *session.state();
        if state.is_terminal() {
            match state.outcome() {
                GameOutcome::Winner(player) => println!("{player} wins!"),
                _ => println!("Draw."),
            }
            let scores = session.scores();
            println!(
                "Score  Red {}  Yellow {}  Draws {}",
                scores.red, scores.yellow, scores.draws
            );
            println!("Press Enter for a new game or 'q' to quit.");
            match lines.next().transpose()? {
                Some(line) if matches!(parse_command(&line), Some(Command::Quit)) => break,
                None => break,
                Some(_) => {
                    session.reset_game();
                    continue;
                }
            }
        }

        if session.is_ai_turn() {
            thread::sleep(ai_delay);
            let (column, _) = session.play_ai().context("computer move")?;
            println!(
                "{} ({}) plays column {}",
                session.ai_player(),
                session.difficulty(),
                column + 1
            );
            continue;
        }

        print!("{} to move > ", state.current_player());
        io::stdout().flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Reset) => session.reset_game(),
            Some(Command::Drop(column)) => {
                if let Err(err) = session.play(column) {
                    println!("{err}");
                }
            }
            None => println!("Enter a column number from 1 to {COLS}."),
        }
    }

    Ok(())
}
