use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use hanoi_core::{
    min_moves, GameRules, GameSession, ListenerError, MoveOutcome, PegIndex, PuzzleError,
    PuzzleEvent, PuzzleSnapshot,
};
use tracing_subscriber::EnvFilter;

mod play;

use play::{parse_move_list, render_pegs, PlayCommand};

#[derive(Parser)]
#[command(name = "hanoi-cli", version, about = "Tower of hanoi in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct DiskArgs {
    /// Number of disks; clamped to the supported range unless --strict.
    #[arg(long, env = "HANOI_DISKS")]
    disks: Option<u32>,
    /// Fail instead of clamping an out-of-range disk count.
    #[arg(long)]
    strict: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively: type moves like `0 2` or `a c`.
    Play {
        #[command(flatten)]
        disks: DiskArgs,
        /// Do not ring the terminal bell on a win.
        #[arg(long)]
        quiet: bool,
    },
    /// Apply a comma separated move list such as `0-2,0-1,2-1`.
    Replay {
        #[command(flatten)]
        disks: DiskArgs,
        #[arg(long)]
        moves: String,
        /// Print the final snapshot as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();
    let rules = GameRules::default();

    match cli.command {
        Commands::Play { disks, quiet } => {
            let disk_count = resolve_disk_count(&rules, disks.disks, disks.strict)?;
            let mut session = GameSession::new(rules, disk_count);
            session.subscribe(move |event: &PuzzleEvent| announce(event, quiet));
            run_play(&mut session, disks.strict)?;
        }
        Commands::Replay { disks, moves, json } => {
            let disk_count = resolve_disk_count(&rules, disks.disks, disks.strict)?;
            let moves = parse_move_list(&moves)?;
            let mut session = GameSession::new(rules, disk_count);
            for (step, (source, target)) in moves.into_iter().enumerate() {
                if let MoveOutcome::Rejected(reason) = session.move_disk(source, target) {
                    eprintln!("move {} ({source} -> {target}) rejected: {reason}", step + 1);
                }
            }
            print_result(&session.snapshot(), json)?;
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Picks the disk count for a new game. Strict mode rejects counts outside the
/// rules instead of clamping them.
fn resolve_disk_count(
    rules: &GameRules,
    requested: Option<u32>,
    strict: bool,
) -> Result<u32, PuzzleError> {
    let requested = requested.unwrap_or(rules.default_disks());
    if strict {
        return rules.validate_disk_count(requested);
    }
    let disk_count = rules.clamp_disk_count(requested);
    if disk_count != requested {
        tracing::warn!(requested, disk_count, "disk count clamped to supported range");
    }
    Ok(disk_count)
}

fn announce(event: &PuzzleEvent, quiet: bool) -> Result<(), ListenerError> {
    let mut stdout = io::stdout().lock();
    let written = match event {
        PuzzleEvent::MoveApplied {
            source,
            target,
            disk,
            ..
        } => writeln!(stdout, "moved disk {disk} from {source} to {target}"),
        PuzzleEvent::Solved { move_count } => {
            let bell = if quiet { "" } else { "\x07" };
            writeln!(stdout, "{bell}solved in {move_count} moves!")
        }
        PuzzleEvent::Reset { disk_count } => writeln!(
            stdout,
            "new game with {disk_count} disks (best possible: {} moves)",
            min_moves(*disk_count)
        ),
        PuzzleEvent::DiskPickedUp { .. } => Ok(()),
    };
    written.map_err(|err| ListenerError::new(err.to_string()))
}

/// `reset` without a count keeps the current one.
fn restart_disk_count(
    rules: &GameRules,
    requested: Option<u32>,
    strict: bool,
) -> Result<Option<u32>, PuzzleError> {
    requested
        .map(|count| resolve_disk_count(rules, Some(count), strict))
        .transpose()
}

fn run_play(session: &mut GameSession, strict: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let disk_count = session.state().disk_count();
    println!(
        "{disk_count} disks, move them all to peg {} (best possible: {} moves)",
        PegIndex::GOAL,
        min_moves(disk_count)
    );
    println!("{}", render_pegs(&session.snapshot()));
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        match PlayCommand::parse(&line) {
            Ok(PlayCommand::Move { source, target }) => {
                if let MoveOutcome::Rejected(reason) = session.move_disk(source, target) {
                    println!("can't move: {reason}");
                }
                println!("{}", render_pegs(&session.snapshot()));
                println!("moves: {}", session.state().move_count());
            }
            Ok(PlayCommand::Reset { disk_count }) => {
                match restart_disk_count(&session.rules(), disk_count, strict) {
                    Ok(disk_count) => {
                        session.reset(disk_count);
                        println!("{}", render_pegs(&session.snapshot()));
                    }
                    Err(err) => println!("{err}"),
                }
            }
            Ok(PlayCommand::Show) => println!("{}", render_pegs(&session.snapshot())),
            Ok(PlayCommand::Help) => println!("{}", play::HELP),
            Ok(PlayCommand::Quit) => break,
            Ok(PlayCommand::Empty) => {}
            Err(message) => println!("{message}"),
        }
        prompt()?;
    }
    Ok(())
}

fn prompt() -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "> ")?;
    stdout.flush()
}

fn print_result(snapshot: &PuzzleSnapshot, json: bool) -> Result<(), serde_json::Error> {
    println!("{}", format_result(snapshot, json)?);
    Ok(())
}

fn format_result(snapshot: &PuzzleSnapshot, json: bool) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string_pretty(snapshot);
    }
    Ok(format!(
        "{}\nmoves: {}\nsolved: {}",
        render_pegs(snapshot),
        snapshot.move_count,
        snapshot.solved
    ))
}
