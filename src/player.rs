use std::ops::Not;

/// Represent a player.  The first player's stones hash with the first row of Zobrist codes.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialOrd, PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Player {
    One,
    Two,
}

/// How many players are there?
pub const NUM_PLAYERS: usize = 2;
/// List all players
pub const ALL_PLAYERS: [Player; NUM_PLAYERS] = [Player::One, Player::Two];

impl Player {
    /// Convert the `Player` to a `usize` for table lookups.
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }
}

impl Not for Player {
    type Output = Player;

    /// Get the other player.
    #[inline]
    fn not(self) -> Player {
        if self == Player::One {
            Player::Two
        } else {
            Player::One
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_table_order() {
        assert_eq!(Player::One.to_index(), 0);
        assert_eq!(Player::Two.to_index(), 1);
        for (i, player) in ALL_PLAYERS.iter().enumerate() {
            assert_eq!(player.to_index(), i);
        }
    }

    #[test]
    fn other_player() {
        assert_eq!(!Player::One, Player::Two);
        assert_eq!(!Player::Two, Player::One);
    }
}
