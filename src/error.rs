use crate::player::Player;
use crate::square::Square;
use failure::Fail;

/// Sometimes, bad stuff happens.
#[derive(Debug, Fail)]
pub enum Error {
    /// Writing the generated tables failed
    #[fail(display = "Could not write the generated tables: {}", cause)]
    Io {
        #[cause]
        cause: std::io::Error,
    },

    /// A Zobrist code is zero, so that square would never change the hash
    #[fail(display = "The Zobrist code for {:?} on square {} is zero", player, square)]
    ZeroZobristCode { player: Player, square: Square },

    /// Two Zobrist codes are identical, so their squares cancel out in the hash
    #[fail(
        display = "The Zobrist codes for {:?} on square {} and {:?} on square {} are identical",
        first_player, first_square, second_player, second_square
    )]
    DuplicateZobristCode {
        first_player: Player,
        first_square: Square,
        second_player: Player,
        second_square: Square,
    },
}

impl From<std::io::Error> for Error {
    fn from(cause: std::io::Error) -> Error {
        Error::Io { cause }
    }
}
