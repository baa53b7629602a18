// Copyright 2017-2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use thiserror::Error;
use tracing::{debug, warn};

use crate::core::{self, Piece, Position};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("not implemented: {0}")]
    Unimplemented(&'static str),
}

/// An 8x8 chessboard. Each square holds at most one piece.
///
/// A Board is nothing more than a grid: it does not know whose turn it is, and it does not validate that the
/// pieces placed on it make up a reachable chess position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    /// Indexed by zero-based row, then zero-based column.
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Creates a new, empty board.
    pub fn new() -> Board {
        Board::default()
    }

    /// Places a piece at the given position, replacing whatever was there.
    pub fn place(&mut self, position: Position, piece: Piece) {
        let (row, column) = position.as_index();
        if let Some(old) = self.squares[row][column].replace(piece) {
            debug!(%position, %old, %piece, "replaced piece");
        } else {
            debug!(%position, %piece, "placed piece");
        }
    }

    /// Returns the piece at the given position, if there is one.
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        let (row, column) = position.as_index();
        self.squares[row][column]
    }

    /// Sets the board to the standard chess starting position.
    ///
    /// This is not implemented yet. It always fails and leaves the board as it was.
    pub fn reset_to_starting_position(&mut self) -> Result<(), BoardError> {
        warn!("reset_to_starting_position called, but it is not implemented");
        Err(BoardError::Unimplemented("reset_to_starting_position"))
    }

    /// Iterates over every occupied square, starting from a1 and moving along each row.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        core::positions().filter_map(move |pos| self.piece_at(pos).map(|piece| (pos, piece)))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in (1..=8).rev() {
            for column in 1..=8 {
                let pos = Position::new(row, column).map_err(|_| fmt::Error)?;
                if let Some(piece) = self.piece_at(pos) {
                    write!(f, " {} ", piece)?;
                } else {
                    write!(f, " . ")?;
                }
            }

            writeln!(f, "| {}", row)?;
        }

        for _ in 0..8 {
            write!(f, "---")?;
        }

        writeln!(f)?;
        for file in 'a'..='h' {
            write!(f, " {} ", file)?;
        }

        writeln!(f)?;
        Ok(())
    }
}
