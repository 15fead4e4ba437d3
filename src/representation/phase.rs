use std::fmt;

/// Which kind of move is legal next.
///
/// `Give` holds when no piece is currently selected; a player chooses a
/// piece for the opponent. `Put` holds once a piece is selected; the
/// opponent places it on a free square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Give,
    Put,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Give => write!(f, "GIVE"),
            Phase::Put => write!(f, "PUT"),
        }
    }
}
