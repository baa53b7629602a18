// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{convert::TryFrom, str::FromStr};

use anyhow::{anyhow, Context};
use chessboard::{movegen, Board, Piece, Position};
use structopt::StructOpt;
use tracing_subscriber::{filter::LevelFilter, EnvFilter, FmtSubscriber};

/// A piece and the square it stands on, written as the piece letter followed by the square: `Bd4` is a White
/// bishop on d4, `pf6` a Black pawn on f6.
#[derive(Debug)]
struct Placement {
    piece: Piece,
    position: Position,
}

impl FromStr for Placement {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let c = chars
            .next()
            .ok_or_else(|| anyhow!("empty piece placement"))?;
        let piece = Piece::try_from(c)?;
        let position = chars
            .as_str()
            .parse::<Position>()
            .with_context(|| format!("invalid square in placement `{}`", s))?;
        Ok(Placement { piece, position })
    }
}

/// Prints the candidate moves of a single piece on an arbitrary board.
#[derive(Debug, StructOpt)]
struct Options {
    /// Square of the piece to generate moves for.
    #[structopt(name = "SQUARE")]
    square: Position,

    /// Pieces to place on the board, e.g. `Bd4 pf6 Ke1`.
    #[structopt(name = "PIECES")]
    pieces: Vec<Placement>,

    /// Print the moves as JSON instead of UCI strings.
    #[structopt(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(LevelFilter::WARN)
        .with_env_filter(EnvFilter::from_env("CHESSBOARD_LOG"))
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let ops = Options::from_args();
    let mut board = Board::new();
    for placement in ops.pieces {
        board.place(placement.position, placement.piece);
    }

    if board.piece_at(ops.square).is_none() {
        return Err(anyhow!("no piece on {}", ops.square));
    }

    let moves = movegen::moves_from(&board, ops.square);
    if ops.json {
        println!("{}", serde_json::to_string_pretty(&moves)?);
    } else {
        println!("{}", board);
        for mov in moves {
            println!("{}", mov.as_uci());
        }
    }

    Ok(())
}
