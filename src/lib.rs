// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A chessboard and per-piece move generation.
//!
//! `chessboard` models an 8x8 board of optional pieces and computes, for any single piece on it, the squares
//! that piece could move to. It stops there: there is no notion of whose turn it is, of check, or of applying a
//! move. Those belong to whatever game layer sits on top of this crate.

pub mod board;
pub mod core;
pub mod movegen;

pub use crate::board::{Board, BoardError};
pub use crate::core::{Color, Move, Piece, PieceKind, Position};
