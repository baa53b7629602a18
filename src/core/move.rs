// Copyright 2017-2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use serde::Serialize;

use crate::core::*;

/// A candidate move for a single piece: where it starts, where it ends, and, for pawns reaching the last row,
/// which piece it promotes to.
///
/// Moves carry no knowledge of captures or of the moving piece; both can be recovered from the board the move was
/// generated against.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    start: Position,
    end: Position,
    promotion: Option<PieceKind>,
}

impl Move {
    /// Constructs a new move from the start position to the end position.
    pub fn new(start: Position, end: Position) -> Move {
        Move {
            start,
            end,
            promotion: None,
        }
    }

    /// Constructs a new move from the start position to the end position, promoting the moving piece to the
    /// given piece kind.
    pub fn promotion(start: Position, end: Position, promoted: PieceKind) -> Move {
        assert!(
            promoted != PieceKind::King && promoted != PieceKind::Pawn,
            "invalid promotion piece"
        );
        Move {
            start,
            end,
            promotion: Some(promoted),
        }
    }

    /// Returns the start position of this move.
    pub fn start(self) -> Position {
        self.start
    }

    /// Returns the end position of this move.
    pub fn end(self) -> Position {
        self.end
    }

    /// Returns the piece kind this move promotes to, if any.
    pub fn promotion_piece(self) -> Option<PieceKind> {
        self.promotion
    }

    pub fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// Returns an UCI-compatible string representation of this move.
    pub fn as_uci(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::core::*;

    #[test]
    fn plain() {
        let mov = Move::new(A4, A5);
        assert_eq!(A4, mov.start());
        assert_eq!(A5, mov.end());
        assert!(!mov.is_promotion());
        assert_eq!(None, mov.promotion_piece());
    }

    #[test]
    fn promotion() {
        for kind in [
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
            PieceKind::Queen,
        ] {
            let promo = Move::promotion(E7, E8, kind);
            assert!(promo.is_promotion());
            assert_eq!(Some(kind), promo.promotion_piece());
        }
    }

    #[test]
    #[should_panic]
    fn promotion_to_king() {
        Move::promotion(E7, E8, PieceKind::King);
    }

    #[test]
    fn equality_includes_promotion() {
        assert_eq!(Move::new(D4, E5), Move::new(D4, E5));
        assert_ne!(Move::new(E7, E8), Move::promotion(E7, E8, PieceKind::Queen));
        assert_ne!(
            Move::promotion(E7, E8, PieceKind::Rook),
            Move::promotion(E7, E8, PieceKind::Queen)
        );
    }

    #[test]
    fn uci() {
        assert_eq!("d4e5", Move::new(D4, E5).as_uci());
        assert_eq!("e7e8q", Move::promotion(E7, E8, PieceKind::Queen).as_uci());
        assert_eq!("b2a1n", Move::promotion(B2, A1, PieceKind::Knight).as_uci());
    }
}
