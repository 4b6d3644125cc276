use super::Player;
use crate::error::MoveError;

/// Why a game reached its terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// A four-in-a-row of this player's tokens is on the board.
    Winner(Player),
    /// `player` attempted an illegal move, which ends the game.
    Forfeit { player: Player, reason: MoveError },
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Winner(player) => write!(f, "{} wins", player.symbol()),
            GameOutcome::Forfeit { player, reason } => {
                write!(f, "{} forfeits: {}", player.symbol(), reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_display() {
        assert_eq!(GameOutcome::Winner(Player::X).to_string(), "X wins");

        let forfeit = GameOutcome::Forfeit {
            player: Player::O,
            reason: MoveError::ColumnFull(2),
        };
        assert_eq!(forfeit.to_string(), "O forfeits: column 2 is full");
    }
}
