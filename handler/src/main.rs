use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use handler::{embed_svg, update_text_board, SvgBoard};
use omok::{
    board_text, format_coordinate, load_state, parse_move_text, save_state, GameState,
    LoadOutcome, MoveOutcome,
};
use tracing::{info, warn};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Path of the persisted game state
    #[arg(long, default_value = omok::STATE_FILE)]
    state_file: PathBuf,

    /// Path of the README that displays the board
    #[arg(long, default_value = "README.md")]
    readme: PathBuf,

    /// Path of the rendered SVG board
    #[arg(long, default_value = "board.svg")]
    svg_file: PathBuf,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start a new game, discarding any previous one
    Reset,
    /// Apply one move extracted from free-form text, e.g. an issue title
    Move {
        /// The text to extract a coordinate from, e.g. "play at H,8"
        text: String,
        /// Number of the issue the move came from, for the logs
        #[arg(long)]
        issue_number: Option<u64>,
    },
    /// Print the current board and status
    Status,
    /// Regenerate the SVG board and embed it into the README
    Render,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    match &args.command {
        Command::Reset => reset(&args),
        Command::Move { text, issue_number } => process_move(&args, text, *issue_number),
        Command::Status => show_status(&args),
        Command::Render => render(&args),
    }
}

fn reset(args: &Args) -> anyhow::Result<()> {
    let state = GameState::new();
    save_state(&args.state_file, &state)?;
    update_text_board(&args.readme, &state)?;
    info!("Game reset");
    println!("{}", state.status_line());
    Ok(())
}

fn process_move(args: &Args, text: &str, issue_number: Option<u64>) -> anyhow::Result<()> {
    if let Some(issue_number) = issue_number {
        info!(issue_number, "Processing move");
    }
    let mut state = load(&args.state_file)?;

    if state.status().is_terminal() {
        println!("{}", state.status_line());
        anyhow::bail!("The game is already finished; run the reset command to start a new one");
    }

    let Some((row, col)) = parse_move_text(text) else {
        anyhow::bail!(
            "No coordinate found in '{}'; expected a column letter A-O and \
             a row number 1-15, e.g. 'A,1', 'A 1', 'A1' or 'play at A,1'",
            text
        );
    };
    info!(coordinate = %format_coordinate(row, col), "Parsed move");

    let player = state.current_player();
    let outcome = state.apply_move(row, col)?;
    save_state(&args.state_file, &state)?;
    update_text_board(&args.readme, &state)?;

    println!(
        "{} stone placed at {}",
        player,
        format_coordinate(row, col)
    );
    match outcome {
        MoveOutcome::Won(winner) => {
            println!("{} wins the game!", winner);
            println!("Run the reset command to start a new one");
        }
        MoveOutcome::Draw => println!("The board is full; the game is a draw"),
        MoveOutcome::Continued => println!("Next turn: {}", state.current_player()),
    }
    println!("{}", state.status_line());
    Ok(())
}

fn show_status(args: &Args) -> anyhow::Result<()> {
    let state = load(&args.state_file)?;

    println!("{}", state.status_line());
    println!("Moves played: {}", state.move_count());
    if let Some((row, col)) = state.last_move() {
        println!("Last move: {}", format_coordinate(row, col));
    }
    println!();
    println!("{}", board_text(&state));
    Ok(())
}

fn render(args: &Args) -> anyhow::Result<()> {
    let state = load(&args.state_file)?;

    let svg = SvgBoard::new().render(&state);
    std::fs::write(&args.svg_file, &svg)?;
    embed_svg(&args.readme, &svg)?;
    info!(path = %args.svg_file.display(), "SVG board rendered and embedded");
    Ok(())
}

/// Load the state, logging when a corrupt file had to be replaced.
fn load(state_file: &Path) -> anyhow::Result<GameState> {
    let (state, outcome) = load_state(state_file)?;
    match outcome {
        LoadOutcome::Fresh => info!("No state file found, started a fresh game"),
        LoadOutcome::Existing => {}
        LoadOutcome::Recovered { reason } => {
            warn!(reason = %reason, "State file was malformed, replaced it with a fresh game");
        }
    }
    Ok(state)
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
