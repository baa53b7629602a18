// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Per-piece move generation.
//!
//! Every generator here produces the squares a single piece could move to on a given board, without regard for
//! whether the move would leave that side's king in check. Output order is stable: sliding pieces scan their
//! directions in the order listed in `BISHOP_DIRECTIONS` and `ROOK_DIRECTIONS`, and stepping pieces try their
//! offsets in the order listed in `KING_OFFSETS` and `KNIGHT_OFFSETS`.

use tracing::trace;

use crate::core::*;
use crate::Board;

/// Diagonal rays as (row, column) steps: top-right, top-left, bottom-left, bottom-right.
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// Orthogonal rays as (row, column) steps: up, left, down, right.
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (0, -1), (-1, 0), (0, 1)];

/// Clockwise, starting from straight up.
const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Clockwise, starting from two up and one right.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
    PieceKind::Queen,
];

/// What a moving piece of a given color finds on a square.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Occupancy {
    Empty,
    Enemy,
    Friendly,
}

fn occupancy(us: Color, board: &Board, pos: Position) -> Occupancy {
    match board.piece_at(pos) {
        None => Occupancy::Empty,
        Some(piece) if piece.color == us => Occupancy::Friendly,
        Some(_) => Occupancy::Enemy,
    }
}

/// Casts a ray from `origin` along each direction, stopping at the board edge or at the first occupied square. An
/// enemy on that square is a capture; a friendly piece is not.
fn generate_ray_moves(
    us: Color,
    board: &Board,
    origin: Position,
    directions: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(d_row, d_column) in directions {
        let mut cursor = origin;
        while let Some(target) = cursor.offset(d_row, d_column) {
            match occupancy(us, board, target) {
                Occupancy::Empty => moves.push(Move::new(origin, target)),
                Occupancy::Enemy => {
                    moves.push(Move::new(origin, target));
                    break;
                }
                Occupancy::Friendly => break,
            }

            cursor = target;
        }
    }
}

/// Tries each offset from `origin` once; a target is kept if it is on the board and not held by a friendly piece.
fn generate_offset_moves(
    us: Color,
    board: &Board,
    origin: Position,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(d_row, d_column) in offsets {
        if let Some(target) = origin.offset(d_row, d_column) {
            if occupancy(us, board, target) != Occupancy::Friendly {
                moves.push(Move::new(origin, target));
            }
        }
    }
}

pub fn generate_pawn_moves(us: Color, board: &Board, origin: Position, moves: &mut Vec<Move>) {
    let (up, start_row, promo_row) = match us {
        Color::White => (1, 2, 8),
        Color::Black => (-1, 7, 1),
    };

    let mut push = |target: Position| {
        if target.row() == promo_row {
            for kind in PROMOTION_KINDS {
                moves.push(Move::promotion(origin, target, kind));
            }
        } else {
            moves.push(Move::new(origin, target));
        }
    };

    // Single and double pushes. Neither may land on an occupied square.
    if let Some(single) = origin.offset(up, 0) {
        if board.piece_at(single).is_none() {
            push(single);
            if origin.row() == start_row {
                if let Some(double) = single.offset(up, 0) {
                    if board.piece_at(double).is_none() {
                        push(double);
                    }
                }
            }
        }
    }

    // Diagonal captures, which only happen when there's something to capture.
    for d_column in [-1, 1] {
        if let Some(target) = origin.offset(up, d_column) {
            if occupancy(us, board, target) == Occupancy::Enemy {
                push(target);
            }
        }
    }
}

/// Appends to `moves` every move a piece of the given kind and color could make from `origin`.
pub fn generate_moves_for_kind(
    kind: PieceKind,
    us: Color,
    board: &Board,
    origin: Position,
    moves: &mut Vec<Move>,
) {
    let before = moves.len();
    match kind {
        PieceKind::King => generate_offset_moves(us, board, origin, &KING_OFFSETS, moves),
        PieceKind::Knight => generate_offset_moves(us, board, origin, &KNIGHT_OFFSETS, moves),
        PieceKind::Bishop => generate_ray_moves(us, board, origin, &BISHOP_DIRECTIONS, moves),
        PieceKind::Rook => generate_ray_moves(us, board, origin, &ROOK_DIRECTIONS, moves),
        PieceKind::Queen => {
            generate_ray_moves(us, board, origin, &BISHOP_DIRECTIONS, moves);
            generate_ray_moves(us, board, origin, &ROOK_DIRECTIONS, moves);
        }
        PieceKind::Pawn => generate_pawn_moves(us, board, origin, moves),
    }

    trace!(%origin, ?kind, ?us, count = moves.len() - before, "generated moves");
}

/// Generates moves for whatever piece stands at `origin`. An empty square has no moves.
pub fn moves_from(board: &Board, origin: Position) -> Vec<Move> {
    match board.piece_at(origin) {
        Some(piece) => piece.moves_from(board, origin),
        None => {
            trace!(%origin, "no piece to generate moves for");
            Vec::new()
        }
    }
}

impl Piece {
    /// Calculates every position this piece could move to if it stood at `position` on `board`.
    ///
    /// The piece does not have to actually be on the board at `position`; whatever is there is ignored. Moves that
    /// would leave this piece's king in check are included.
    pub fn moves_from(self, board: &Board, position: Position) -> Vec<Move> {
        let mut moves = Vec::new();
        generate_moves_for_kind(self.kind, self.color, board, position, &mut moves);
        moves
    }
}
