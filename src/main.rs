// Terminal front-end: prints the board as text and reads coordinate moves.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};

use chess_duel::agent::{ComputerPlayer, GameResult, Player};
use chess_duel::game_repr::{Board, Color, GameState, GameStatus, Move, MoveOutcome, Position, Square, Type};
use chess_duel::network::{GameRegistry, GameSnapshot, MoveProposal};
use chess_duel::{Difficulty, GameConfig, GameMode, GameSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Who plays: two humans, human against the computer, or a hosted game
    #[arg(short, long, value_enum, default_value_t = GameMode::Local)]
    mode: GameMode,

    /// Computer strength
    #[arg(short, long, value_enum, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Color of the human in computer mode
    #[arg(short, long, value_enum, default_value_t = Side::White)]
    color: Side,

    /// Start from this position instead of the standard one
    #[arg(long)]
    fen: Option<String>,

    /// Let the computer play both sides
    #[arg(long)]
    self_play: bool,

    /// Search depth for self-play; defaults to the difficulty's depth
    #[arg(long)]
    depth: Option<u8>,

    /// Stop self-play after this many plies
    #[arg(long, default_value_t = 200)]
    max_plies: usize,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(args) {
        log::error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let start = match &args.fen {
        Some(fen) => Position::from_fen(fen).with_context(|| format!("Invalid FEN: {fen}"))?,
        None => Position::default(),
    };

    if args.self_play {
        let depth = args.depth.unwrap_or(args.difficulty.max_depth());
        return self_play(start, depth, args.max_plies);
    }

    match args.mode {
        GameMode::Local => play_session(GameSession::with_position(GameConfig::local(), start)),
        GameMode::Computer => {
            let config = GameConfig::computer(args.color.into(), args.difficulty);
            play_session(GameSession::with_position(config, start))
        }
        GameMode::Online => {
            if args.fen.is_some() {
                bail!("Hosted games always start from the standard position");
            }
            play_hosted()
        }
    }
}

fn render(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..8u8 {
        out.push_str(&format!("{} ", 8 - row));
        for col in 0..8u8 {
            let c = board.get(Square::new(row, col)).map_or('.', |p| p.to_char());
            out.push(' ');
            out.push(c);
        }
        out.push('\n');
    }
    out.push_str("   a b c d e f g h");
    out
}

fn describe(status: GameStatus, side: Color) -> String {
    match status {
        GameStatus::InProgress { in_check: true } => format!("{side} to move (check)"),
        GameStatus::InProgress { in_check: false } => format!("{side} to move"),
        GameStatus::Checkmate { winner } => format!("Checkmate, {winner} wins"),
        GameStatus::Stalemate => "Stalemate".to_string(),
    }
}

fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, text: &str) -> Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_lowercase())),
        None => Ok(None),
    }
}

fn parse_promotion(input: &str) -> Option<Type> {
    input
        .chars()
        .next()
        .and_then(Type::from_char)
        .filter(|kind| kind.is_promotion_target())
}

fn play_session(mut session: GameSession) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if session.is_thinking() {
            println!("Computer is thinking...");
            if let Some(mv) = session.wait_for_computer() {
                println!("Computer plays {mv}");
            }
            continue;
        }

        println!("\n{}", render(session.state().board()));
        println!("{}", describe(session.status(), session.side_to_move()));
        if session.game_result().is_some() {
            return Ok(());
        }

        let Some(input) = prompt(&mut lines, "> ")? else {
            return Ok(());
        };
        match input.as_str() {
            "" => continue,
            "quit" | "exit" => return Ok(()),
            "undo" => match session.undo() {
                Ok(plies) => println!("Took back {plies} move(s)"),
                Err(e) => println!("{e}"),
            },
            "reset" => session.reset(),
            "fen" => println!("{}", session.state().position().to_fen()),
            _ => {
                let Some(mv) = Move::parse(&input) else {
                    println!("Enter a move like e2e4 or e7e8q, or: undo, reset, fen, quit");
                    continue;
                };
                match session.submit_move(mv.from, mv.to, mv.promotion) {
                    Ok(MoveOutcome::Completed(_)) => {}
                    Ok(MoveOutcome::PendingPromotion { square, .. }) => loop {
                        let Some(choice) = prompt(&mut lines, &format!("Promote on {square} to (q/r/b/n): "))? else {
                            return Ok(());
                        };
                        let Some(kind) = parse_promotion(&choice) else {
                            continue;
                        };
                        match session.complete_promotion(kind) {
                            Ok(_) => break,
                            Err(e) => println!("{e}"),
                        }
                    },
                    Err(e) => println!("{e}"),
                }
            }
        }
    }
}

fn self_play(start: Position, depth: u8, max_plies: usize) -> Result<()> {
    let mut state = GameState::from_position(start);
    let mut white = ComputerPlayer::new(depth, "White".to_string());
    let mut black = ComputerPlayer::new(depth, "Black".to_string());

    println!("{}", render(state.board()));
    for _ in 0..max_plies {
        let status = state.status();
        if let Some(result) = GameResult::from_status(status) {
            println!("{}", describe(status, state.side_to_move()));
            white.game_ended(result);
            black.game_ended(result);
            return Ok(());
        }

        let (player, opponent): (&mut ComputerPlayer, &mut ComputerPlayer) = match state.side_to_move() {
            Color::White => (&mut white, &mut black),
            Color::Black => (&mut black, &mut white),
        };
        let Some(mv) = player.get_move(&state) else {
            bail!("{} found no move in a live position", player.name());
        };
        if let MoveOutcome::PendingPromotion { .. } = state.apply(mv)? {
            state.complete_promotion(Type::Queen)?;
        }
        opponent.opponent_moved(mv);

        println!("{} plays {}\n{}", player.name(), mv, render(state.board()));
    }

    println!("Stopped after {max_plies} plies: {}", state.position().to_fen());
    Ok(())
}

/// Both seats of a hosted game on one terminal, each move validated by the host
fn play_hosted() -> Result<()> {
    let registry = GameRegistry::new();
    let game_id = registry.create_game();
    registry.join_game(&game_id, "white", "White")?;
    let (_, mut snapshot) = registry.join_game(&game_id, "black", "Black")?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_snapshot(&snapshot)?;
        if snapshot.game_status.is_over() {
            return Ok(());
        }

        let Some(input) = prompt(&mut lines, "> ")? else {
            return Ok(());
        };
        match input.as_str() {
            "" => continue,
            "quit" | "exit" => {
                registry.disconnect("white");
                registry.disconnect("black");
                return Ok(());
            }
            _ => {
                let Some(mv) = Move::parse(&input) else {
                    println!("Enter a move like e2e4 or e7e8q, or quit");
                    continue;
                };
                let player_id = match snapshot.side_to_move {
                    Color::White => "white",
                    Color::Black => "black",
                };
                match registry.make_move(&game_id, player_id, MoveProposal::new(mv.from, mv.to, mv.promotion)) {
                    Ok(next) => snapshot = next,
                    Err(e) => println!("{e}"),
                }
            }
        }
    }
}

fn print_snapshot(snapshot: &GameSnapshot) -> Result<()> {
    log::debug!("Snapshot: {}", snapshot.to_json()?);
    println!("\n{}", render(&snapshot.board));
    println!("{}", describe(snapshot.game_status, snapshot.side_to_move));
    Ok(())
}
