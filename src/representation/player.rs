use std::fmt;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    /// The player to move at the given ply (the player who selects or
    /// places next).
    ///
    /// A ply counts half-actions (a GIVE and a PUT each count as one),
    /// so the actor does not simply alternate with ply parity: the same
    /// player both places a piece and then immediately selects the next
    /// one. Round `n` (the `n`-th piece placed) is given by `Player1`
    /// when `n` is even and `Player2` when `n` is odd, and placed by
    /// whichever one of them gave it; `ceil(ply / 2)` recovers the
    /// round a ply belongs to regardless of GIVE/PUT phase.
    pub fn to_move(ply: u8) -> Self {
        let round = (u16::from(ply) + 1) / 2;
        if round % 2 == 0 {
            Player::Player1
        } else {
            Player::Player2
        }
    }

    /// The other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Player1 => write!(f, "player1"),
            Player::Player2 => write!(f, "player2"),
        }
    }
}
