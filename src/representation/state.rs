use crate::error::EngineError;

use super::{Move, Payoffs, Phase, Piece, Player, Square, ADIAG, COLS, DIAG, PIECES, ROWS, SQUARES};

/// A Quarto position.
///
/// `State` is a plain value type: `play` returns a new `State` rather
/// than mutating in place, which is what the search engines need (a
/// node in an MCTS tree or a transposition-table key is just a
/// `State`, cheaply `Clone`d). `squares_mask` and `pieces_mask` cache
/// occupancy as bitsets so move generation and legality checks don't
/// have to scan `board`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    board: [Option<Piece>; 16],
    squares_mask: u16,
    pieces_mask: u16,
    selected: Option<Piece>,
    last_square: Option<Square>,
    ply: u8,
}

impl Default for State {
    fn default() -> Self {
        State {
            board: [None; 16],
            squares_mask: 0,
            pieces_mask: 0,
            selected: None,
            last_square: None,
            ply: 0,
        }
    }
}

impl State {
    /// The empty board, GIVE phase, `Player1` to select first.
    pub fn new() -> Self {
        State::default()
    }

    pub fn ply(&self) -> u8 {
        self.ply
    }

    /// GIVE if no piece is currently selected, PUT otherwise.
    pub fn phase(&self) -> Phase {
        if self.ply % 2 == 0 {
            Phase::Give
        } else {
            Phase::Put
        }
    }

    /// The player who acts next (selects in GIVE, places in PUT).
    pub fn player_to_move(&self) -> Player {
        Player::to_move(self.ply)
    }

    pub fn selected(&self) -> Option<Piece> {
        self.selected
    }

    /// Bit `v` set means piece value `v` is somewhere on the board.
    pub fn pieces_mask(&self) -> u16 {
        self.pieces_mask
    }

    /// Bit `i` set means square `i` (row-major) is occupied.
    pub fn squares_mask(&self) -> u16 {
        self.squares_mask
    }

    /// Relabels every piece on the board (and the selected piece, if
    /// any) through `f`, without changing which squares are occupied.
    ///
    /// Used by the symmetry engine to fold a newly reached position
    /// back onto the canonical representative of its piece-labelling
    /// equivalence class.
    pub fn remap_pieces<F: Fn(Piece) -> Piece>(&self, f: F) -> State {
        let mut next = self.clone();
        for slot in next.board.iter_mut() {
            if let Some(piece) = slot {
                *piece = f(*piece);
            }
        }
        next.selected = next.selected.map(&f);
        next.pieces_mask = next
            .board
            .iter()
            .filter_map(|slot| *slot)
            .fold(0u16, |mask, piece| mask | (1 << piece.bits()));
        next
    }

    /// Relocates every occupied square through `f`, without changing
    /// which pieces occupy them.
    ///
    /// Used by the symmetry engine to fold a newly reached position
    /// back onto the canonical representative of its board-shape
    /// equivalence class.
    pub fn remap_squares<F: Fn(Square) -> Square>(&self, f: F) -> State {
        let mut new_board = [None; 16];
        let mut new_mask = 0u16;
        for (i, slot) in self.board.iter().enumerate() {
            if let Some(piece) = slot {
                let new_square = f(Square::from_index(i));
                new_board[new_square.index()] = Some(*piece);
                new_mask |= 1 << new_square.index();
            }
        }
        let mut next = self.clone();
        next.board = new_board;
        next.squares_mask = new_mask;
        next.last_square = next.last_square.map(&f);
        next
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.board[square.index()]
    }

    /// The legal moves in the current phase, in a fixed deterministic
    /// order (ascending piece bit pattern for GIVE, row-major square
    /// order for PUT).
    pub fn legal_moves(&self) -> Vec<Move> {
        match self.phase() {
            Phase::Give => PIECES
                .iter()
                .filter(|piece| self.pieces_mask & (1 << piece.bits()) == 0)
                .map(|&piece| Move::Give(piece))
                .collect(),
            Phase::Put => SQUARES
                .iter()
                .filter(|square| self.squares_mask & (1 << square.index()) == 0)
                .map(|&square| Move::Put(square))
                .collect(),
        }
    }

    /// Applies `mv`, returning the resulting state.
    ///
    /// Fails if `mv` does not belong to the current phase or is not
    /// among the positions/pieces still available.
    pub fn play(&self, mv: Move) -> Result<State, EngineError> {
        let mut next = self.clone();
        match (self.phase(), mv) {
            (Phase::Give, Move::Give(piece)) => {
                if self.pieces_mask & (1 << piece.bits()) != 0 {
                    return Err(illegal(mv, self.phase()));
                }
                next.selected = Some(piece);
            }
            (Phase::Put, Move::Put(square)) => {
                if self.squares_mask & (1 << square.index()) != 0 {
                    return Err(illegal(mv, self.phase()));
                }
                let piece = self.selected.ok_or_else(|| {
                    EngineError::InvariantViolation(
                        "PUT phase with no piece selected".to_string(),
                    )
                })?;
                next.board[square.index()] = Some(piece);
                next.squares_mask |= 1 << square.index();
                next.pieces_mask |= 1 << piece.bits();
                next.selected = None;
                next.last_square = Some(square);
            }
            _ => return Err(illegal(mv, self.phase())),
        }
        next.ply += 1;
        Ok(next)
    }

    /// The winner, if the piece just placed completed a quarto through
    /// its row, column, or (when on one) diagonal.
    ///
    /// A PUT is the only move that can create a winner, so this only
    /// looks at anything once the phase has flipped back to GIVE and
    /// at least 4 squares are occupied.
    pub fn winner(&self) -> Option<Player> {
        if self.phase() != Phase::Give || self.squares_mask.count_ones() < 4 {
            return None;
        }
        let square = self.last_square?;
        let wins_through = |line: &[Square; 4]| -> bool {
            let mut pieces = [None; 4];
            for (slot, &sq) in pieces.iter_mut().zip(line.iter()) {
                *slot = self.get(sq);
            }
            match (pieces[0], pieces[1], pieces[2], pieces[3]) {
                (Some(a), Some(b), Some(c), Some(d)) => is_quarto([a, b, c, d]),
                _ => false,
            }
        };
        let found = wins_through(&ROWS[square.row as usize])
            || wins_through(&COLS[square.col as usize])
            || (DIAG.contains(&square) && wins_through(&DIAG))
            || (ADIAG.contains(&square) && wins_through(&ADIAG));
        found.then(|| self.player_to_move())
    }

    /// True once the game has a winner, or the board is full with none.
    pub fn is_over(&self) -> bool {
        self.winner().is_some() || self.squares_mask.count_ones() == 16
    }

    pub fn payoffs(&self) -> Payoffs {
        Payoffs::terminal(self.winner())
    }

    pub fn board_to_string(&self) -> String {
        ROWS.iter()
            .map(|row| {
                row.iter()
                    .map(|&sq| match self.get(sq) {
                        Some(piece) => piece.to_string(),
                        None => "----".to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The canonical printable form used as the transposition-table
    /// key: which player is to move, the ply and phase, the board, and
    /// the currently selected piece (or `----` if none).
    pub fn state_to_string(&self) -> String {
        let piece = match self.selected {
            Some(piece) => piece.to_string(),
            None => "----".to_string(),
        };
        format!(
            "plying={}\nply={:>2}\tphase={}\n{}\npiece={}",
            self.player_to_move(),
            self.ply,
            self.phase(),
            self.board_to_string(),
            piece
        )
    }
}

fn is_quarto(pieces: [Piece; 4]) -> bool {
    (0u8..4).any(|attr| {
        let first = pieces[0].attribute(attr);
        pieces[1..].iter().all(|p| p.attribute(attr) == first)
    })
}

fn illegal(attempted: Move, phase: Phase) -> EngineError {
    EngineError::IllegalMove {
        attempted,
        phase: match phase {
            Phase::Give => "GIVE",
            Phase::Put => "PUT",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_empty_give_phase() {
        let state = State::new();
        assert_eq!(state.phase(), Phase::Give);
        assert_eq!(state.player_to_move(), Player::Player1);
        assert_eq!(state.legal_moves().len(), 16);
        assert!(!state.is_over());
    }

    #[test]
    fn give_then_put_places_the_piece() {
        let state = State::new();
        let state = state.play(Move::Give(Piece::new(0))).unwrap();
        assert_eq!(state.phase(), Phase::Put);
        assert_eq!(state.selected(), Some(Piece::new(0)));
        assert_eq!(state.legal_moves().len(), 16);

        let state = state.play(Move::Put(Square::new(0, 0))).unwrap();
        assert_eq!(state.phase(), Phase::Give);
        assert_eq!(state.get(Square::new(0, 0)), Some(Piece::new(0)));
        assert_eq!(state.legal_moves().len(), 15);
    }

    #[test]
    fn rejects_reselecting_a_used_piece() {
        let state = State::new().play(Move::Give(Piece::new(3))).unwrap();
        let state = state.play(Move::Put(Square::new(1, 1))).unwrap();
        assert!(state.play(Move::Give(Piece::new(3))).is_err());
    }

    #[test]
    fn rejects_a_move_from_the_wrong_phase() {
        let state = State::new();
        assert!(state.play(Move::Put(Square::new(0, 0))).is_err());
    }

    #[test]
    fn detects_a_row_quarto() {
        // All four pieces share attribute bit 0 (their low bit is 1).
        let pieces = [Piece::new(0b0001), Piece::new(0b0011), Piece::new(0b0101), Piece::new(0b0111)];
        let mut state = State::new();
        for (i, &piece) in pieces.iter().enumerate() {
            state = state.play(Move::Give(piece)).unwrap();
            state = state.play(Move::Put(Square::new(0, i as u8))).unwrap();
        }
        assert_eq!(state.winner(), Some(Player::Player1));
        assert!(state.is_over());
        assert_eq!(state.payoffs()[Player::Player1], 1.0);
    }

    #[test]
    fn no_quarto_without_a_shared_attribute() {
        let pieces = [Piece::new(0b0000), Piece::new(0b0011), Piece::new(0b0101), Piece::new(0b1000)];
        let mut state = State::new();
        for (i, &piece) in pieces.iter().enumerate() {
            state = state.play(Move::Give(piece)).unwrap();
            state = state.play(Move::Put(Square::new(0, i as u8))).unwrap();
        }
        assert_eq!(state.winner(), None);
        assert!(!state.is_over());
    }
}
