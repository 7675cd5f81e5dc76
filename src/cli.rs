use std::io::{self, BufRead};
use std::str::FromStr;
use std::time::Instant;

use crate::board::{Move, Position};
use crate::perft;
use crate::search::{SearchState, best_move_with};
use crate::types::DEFAULT_DEPTH;

/// Line-based protocol loop. The core is strictly synchronous, so each
/// command runs to completion before the next line is read.
pub fn run() {
    let stdin = io::stdin();

    let mut position = Position::default();
    let mut state = SearchState::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        match tokens[0] {
            "uci" => {
                println!("id name pyrite");
                println!("id author pyrite contributors");
                println!("uciok");
            }
            "isready" => println!("readyok"),
            "ucinewgame" => {
                position = Position::default();
                state.reset();
            }
            "position" => {
                if let Err(err) = parse_position(&tokens, &mut position) {
                    println!("info string {}", err);
                }
            }
            "go" => {
                let depth = parse_depth(&tokens).unwrap_or(DEFAULT_DEPTH);
                state.nodes = 0;
                let start = Instant::now();
                let best = best_move_with(&mut position, &mut state, depth);
                let elapsed_ms = start.elapsed().as_millis().max(1) as u64;
                println!(
                    "info depth {} nodes {} time {} nps {}",
                    depth,
                    state.nodes,
                    elapsed_ms,
                    state.nodes * 1000 / elapsed_ms
                );
                match best {
                    Some(mv) => println!("bestmove {}", mv),
                    None => println!("bestmove 0000"),
                }
            }
            "perft" => {
                let depth = tokens.get(1).and_then(|t| t.parse().ok()).unwrap_or(1);
                let start = Instant::now();
                perft::divide(&mut position, depth);
                println!("time {} ms", start.elapsed().as_millis());
            }
            "d" | "print" => {
                print!("{}", position.pretty());
                println!("fen {}", position);
            }
            "quit" => break,
            _ => {}
        }
    }
}

fn parse_depth(tokens: &[&str]) -> Option<u8> {
    let idx = tokens.iter().position(|&t| t == "depth")?;
    tokens.get(idx + 1)?.parse().ok()
}

/// `position [startpos | fen <6 fields>] [moves <move>...]`
fn parse_position(tokens: &[&str], position: &mut Position) -> Result<(), String> {
    let mut idx = 1;
    match tokens.get(idx) {
        Some(&"startpos") => {
            *position = Position::default();
            idx += 1;
        }
        Some(&"fen") => {
            let end = tokens[idx + 1..]
                .iter()
                .position(|&t| t == "moves")
                .map(|n| idx + 1 + n)
                .unwrap_or(tokens.len());
            let fen = tokens[idx + 1..end].join(" ");
            *position = Position::from_str(&fen)?;
            idx = end;
        }
        _ => return Err("position needs startpos or fen".to_string()),
    }

    if tokens.get(idx) == Some(&"moves") {
        for token in &tokens[idx + 1..] {
            let mv = resolve_move(position, token)
                .ok_or_else(|| format!("illegal or unknown move: {}", token))?;
            position.make(mv);
        }
    }

    // replayed games can outgrow the undo stack; the history is never
    // unmade past this point anyway
    position.clear_history();
    Ok(())
}

/// Find the legal move matching a move token. Tokens use from-to[-promo]
/// with castling written king-from to rook-from; the four conventional
/// king-destination spellings are accepted and translated.
fn resolve_move(position: &mut Position, token: &str) -> Option<Move> {
    let legal = position.legal_moves();

    if let Some(mv) = legal.iter().find(|m| m.to_string() == token) {
        return Some(*mv);
    }

    let translated = match token {
        "e1g1" => "e1h1",
        "e1c1" => "e1a1",
        "e8g8" => "e8h8",
        "e8c8" => "e8a8",
        _ => return None,
    };
    legal
        .iter()
        .find(|m| m.is_castle() && m.to_string() == translated)
        .copied()
}


// The engine's own castling notation names the rook square, which is what
// the move encoding stores. GUIs speak king-destination; translating the
// four fixed spellings at the boundary keeps the core encoding untouched.
