// Copyright 2017-2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{convert::TryFrom, fmt, str::FromStr};

use serde::{Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PositionError {
    #[error("position out of range: row {row}, column {column}")]
    OutOfRange { row: u8, column: u8 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PositionParseError {
    #[error("invalid file: {0}")]
    InvalidFile(char),
    #[error("invalid rank: {0}")]
    InvalidRank(char),
    #[error("unexpected EOF while reading")]
    UnexpectedEnd,
    #[error("trailing characters after square")]
    TrailingChars,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PieceParseError {
    #[error("invalid char: {0}")]
    InvalidChar(char),
}

/// A square on the chessboard, addressed by a 1-indexed row and column.
///
/// Row 1 is White's back rank and column 1 is the a-file, so `Position::new(4, 4)` is d4. A `Position` can
/// only be constructed for coordinates that lie on the board; anything holding a `Position` may index a board
/// with it without further checks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    // Both fields are zero-based internally.
    row: u8,
    column: u8,
}

impl Position {
    const fn at(row: u8, column: u8) -> Position {
        Position {
            row: row - 1,
            column: column - 1,
        }
    }

    /// Creates a new position from a 1-indexed row and column, failing if either is outside of 1..=8.
    pub fn new(row: u8, column: u8) -> Result<Position, PositionError> {
        if !(1..=8).contains(&row) || !(1..=8).contains(&column) {
            return Err(PositionError::OutOfRange { row, column });
        }

        Ok(Position::at(row, column))
    }

    /// The 1-indexed row of this position.
    pub const fn row(self) -> u8 {
        self.row + 1
    }

    /// The 1-indexed column of this position.
    pub const fn column(self) -> u8 {
        self.column + 1
    }

    /// Returns the position `d_row` rows and `d_column` columns away from this one, or `None` if that lands off
    /// of the board.
    pub fn offset(self, d_row: i8, d_column: i8) -> Option<Position> {
        let row = self.row as i8 + d_row;
        let column = self.column as i8 + d_column;
        if !(0..8).contains(&row) || !(0..8).contains(&column) {
            return None;
        }

        Some(Position {
            row: row as u8,
            column: column as u8,
        })
    }

    pub(crate) const fn as_index(self) -> (usize, usize) {
        (self.row as usize, self.column as usize)
    }
}

impl TryFrom<(u8, u8)> for Position {
    type Error = PositionError;

    fn try_from((row, column): (u8, u8)) -> Result<Self, Self::Error> {
        Position::new(row, column)
    }
}

impl FromStr for Position {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let file = chars.next().ok_or(PositionParseError::UnexpectedEnd)?;
        let rank = chars.next().ok_or(PositionParseError::UnexpectedEnd)?;
        if chars.next().is_some() {
            return Err(PositionParseError::TrailingChars);
        }

        let column = match file {
            'a'..='h' => file as u8 - b'a' + 1,
            c => return Err(PositionParseError::InvalidFile(c)),
        };
        let row = match rank {
            '1'..='8' => rank as u8 - b'0',
            c => return Err(PositionParseError::InvalidRank(c)),
        };

        Ok(Position::at(row, column))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.column) as char, self.row + 1)
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub const A1: Position = Position::at(1, 1);
pub const B1: Position = Position::at(1, 2);
pub const C1: Position = Position::at(1, 3);
pub const D1: Position = Position::at(1, 4);
pub const E1: Position = Position::at(1, 5);
pub const F1: Position = Position::at(1, 6);
pub const G1: Position = Position::at(1, 7);
pub const H1: Position = Position::at(1, 8);
pub const A2: Position = Position::at(2, 1);
pub const B2: Position = Position::at(2, 2);
pub const C2: Position = Position::at(2, 3);
pub const D2: Position = Position::at(2, 4);
pub const E2: Position = Position::at(2, 5);
pub const F2: Position = Position::at(2, 6);
pub const G2: Position = Position::at(2, 7);
pub const H2: Position = Position::at(2, 8);
pub const A3: Position = Position::at(3, 1);
pub const B3: Position = Position::at(3, 2);
pub const C3: Position = Position::at(3, 3);
pub const D3: Position = Position::at(3, 4);
pub const E3: Position = Position::at(3, 5);
pub const F3: Position = Position::at(3, 6);
pub const G3: Position = Position::at(3, 7);
pub const H3: Position = Position::at(3, 8);
pub const A4: Position = Position::at(4, 1);
pub const B4: Position = Position::at(4, 2);
pub const C4: Position = Position::at(4, 3);
pub const D4: Position = Position::at(4, 4);
pub const E4: Position = Position::at(4, 5);
pub const F4: Position = Position::at(4, 6);
pub const G4: Position = Position::at(4, 7);
pub const H4: Position = Position::at(4, 8);
pub const A5: Position = Position::at(5, 1);
pub const B5: Position = Position::at(5, 2);
pub const C5: Position = Position::at(5, 3);
pub const D5: Position = Position::at(5, 4);
pub const E5: Position = Position::at(5, 5);
pub const F5: Position = Position::at(5, 6);
pub const G5: Position = Position::at(5, 7);
pub const H5: Position = Position::at(5, 8);
pub const A6: Position = Position::at(6, 1);
pub const B6: Position = Position::at(6, 2);
pub const C6: Position = Position::at(6, 3);
pub const D6: Position = Position::at(6, 4);
pub const E6: Position = Position::at(6, 5);
pub const F6: Position = Position::at(6, 6);
pub const G6: Position = Position::at(6, 7);
pub const H6: Position = Position::at(6, 8);
pub const A7: Position = Position::at(7, 1);
pub const B7: Position = Position::at(7, 2);
pub const C7: Position = Position::at(7, 3);
pub const D7: Position = Position::at(7, 4);
pub const E7: Position = Position::at(7, 5);
pub const F7: Position = Position::at(7, 6);
pub const G7: Position = Position::at(7, 7);
pub const H7: Position = Position::at(7, 8);
pub const A8: Position = Position::at(8, 1);
pub const B8: Position = Position::at(8, 2);
pub const C8: Position = Position::at(8, 3);
pub const D8: Position = Position::at(8, 4);
pub const E8: Position = Position::at(8, 5);
pub const F8: Position = Position::at(8, 6);
pub const G8: Position = Position::at(8, 7);
pub const H8: Position = Position::at(8, 8);

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn toggle(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PieceKind {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceKind {
    fn as_char(self) -> char {
        match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Rook => 'r',
            PieceKind::Pawn => 'p',
        }
    }
}

impl TryFrom<char> for PieceKind {
    type Error = PieceParseError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let kind = match value.to_ascii_lowercase() {
            'k' => PieceKind::King,
            'q' => PieceKind::Queen,
            'b' => PieceKind::Bishop,
            'n' => PieceKind::Knight,
            'r' => PieceKind::Rook,
            'p' => PieceKind::Pawn,
            _ => return Err(PieceParseError::InvalidChar(value)),
        };

        Ok(kind)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single chess piece. Pieces are plain values; they know nothing about where they stand.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Piece {
        Piece { color, kind }
    }
}

/// Uppercase letters are White pieces and lowercase letters are Black pieces.
impl TryFrom<char> for Piece {
    type Error = PieceParseError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let kind = PieceKind::try_from(value)?;
        let color = if value.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };

        Ok(Piece { color, kind })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self.color {
            Color::White => self.kind.as_char().to_ascii_uppercase(),
            Color::Black => self.kind.as_char(),
        };

        write!(f, "{}", c)
    }
}

/// Iterator over every position on the board, row by row starting from a1.
pub struct AllPositions(u8, u8);

impl Iterator for AllPositions {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 >= self.1 {
            None
        } else {
            let next = self.0;
            self.0 += 1;
            Some(Position {
                row: next / 8,
                column: next % 8,
            })
        }
    }
}

impl DoubleEndedIterator for AllPositions {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.1 <= self.0 {
            None
        } else {
            self.1 -= 1;
            Some(Position {
                row: self.1 / 8,
                column: self.1 % 8,
            })
        }
    }
}

impl Default for AllPositions {
    fn default() -> Self {
        AllPositions(0, 64)
    }
}

pub fn positions() -> AllPositions {
    AllPositions::default()
}

pub fn piece_kinds() -> std::array::IntoIter<PieceKind, 6> {
    [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
        PieceKind::Pawn,
    ]
    .into_iter()
}

pub fn colors() -> std::array::IntoIter<Color, 2> {
    [Color::White, Color::Black].into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_one_indexed() {
        let pos = Position::new(4, 4).unwrap();
        assert_eq!(D4, pos);
        assert_eq!(4, pos.row());
        assert_eq!(4, pos.column());
    }

    #[test]
    fn new_out_of_range() {
        assert_eq!(
            PositionError::OutOfRange { row: 0, column: 4 },
            Position::new(0, 4).unwrap_err()
        );
        assert_eq!(
            PositionError::OutOfRange { row: 3, column: 9 },
            Position::new(3, 9).unwrap_err()
        );
        assert!(Position::try_from((9, 9)).is_err());
    }

    #[test]
    fn corners() {
        assert_eq!(Position::new(1, 1).unwrap(), A1);
        assert_eq!(Position::new(1, 8).unwrap(), H1);
        assert_eq!(Position::new(8, 1).unwrap(), A8);
        assert_eq!(Position::new(8, 8).unwrap(), H8);
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(Some(E5), D4.offset(1, 1));
        assert_eq!(Some(B3), C1.offset(2, -1));
        assert_eq!(None, A1.offset(-1, 0));
        assert_eq!(None, H8.offset(0, 1));
        assert_eq!(None, A1.offset(1, -1));
    }

    #[test]
    fn parse_and_display() {
        assert_eq!(Ok(D4), "d4".parse::<Position>());
        assert_eq!(Ok(H8), "h8".parse::<Position>());
        assert_eq!("a1", A1.to_string());
        assert_eq!("g7", G7.to_string());
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Err(PositionParseError::UnexpectedEnd), "".parse::<Position>());
        assert_eq!(Err(PositionParseError::UnexpectedEnd), "e".parse::<Position>());
        assert_eq!(
            Err(PositionParseError::InvalidFile('i')),
            "i1".parse::<Position>()
        );
        assert_eq!(
            Err(PositionParseError::InvalidRank('9')),
            "a9".parse::<Position>()
        );
        assert_eq!(
            Err(PositionParseError::TrailingChars),
            "a11".parse::<Position>()
        );
    }

    #[test]
    fn all_positions() {
        let all: Vec<_> = positions().collect();
        assert_eq!(64, all.len());
        assert_eq!(A1, all[0]);
        assert_eq!(H1, all[7]);
        assert_eq!(A2, all[8]);
        assert_eq!(Some(H8), positions().next_back());
    }

    #[test]
    fn piece_chars() {
        let white_knight = Piece::try_from('N').unwrap();
        assert_eq!(Piece::new(Color::White, PieceKind::Knight), white_knight);
        let black_queen = Piece::try_from('q').unwrap();
        assert_eq!(Piece::new(Color::Black, PieceKind::Queen), black_queen);
        assert_eq!("N", white_knight.to_string());
        assert_eq!("q", black_queen.to_string());
        assert_eq!(
            PieceParseError::InvalidChar('z'),
            Piece::try_from('z').unwrap_err()
        );
    }

    #[test]
    fn piece_equality() {
        let a = Piece::new(Color::White, PieceKind::Rook);
        let b = Piece::new(Color::White, PieceKind::Rook);
        assert_eq!(a, b);
        assert_ne!(a, Piece::new(Color::Black, PieceKind::Rook));
        assert_ne!(a, Piece::new(Color::White, PieceKind::Bishop));
    }

    #[test]
    fn toggle() {
        assert_eq!(Color::Black, Color::White.toggle());
        assert_eq!(Color::White, Color::Black.toggle());
    }
}
