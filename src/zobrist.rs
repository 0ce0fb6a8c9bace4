use crate::error::Error;
use crate::player::{Player, ALL_PLAYERS, NUM_PLAYERS};
use crate::square::{Square, ALL_SQUARES, NUM_SQUARES};

/// The per-square Zobrist codes of the reference engine.
///
/// These are true random numbers from HotBits (https://www.fourmilab.ch/hotbits/), not the
/// output of a PRNG, so they are written out here rather than generated.  Row `p` holds the
/// codes for player `p`, indexed by square.
pub const HOTBITS_CODES: [[u64; NUM_SQUARES]; NUM_PLAYERS] = [
    [
        0xa4b992578b5b3456, 0xf330a30c9d0730d9, 0xb3e85d8d02b651f1, 0x573510fff1d1f459,
        0xed1aee5209af033d, 0xfa38fbc2cb4792e9, 0x36efbf736eef226b, 0x11ff729bc72587a6,
        0xf76844cee5cffd46, 0x81b69742fdf65311, 0xf9b3f146f21b28fa, 0x7b21f2eb7bdab97e,
        0xbca3c499f196c1eb, 0x964031eba47fbb2b, 0xf023a91ed963ba6e, 0x8ba8183a38d4b9d9,
        0xfc03e2f903b3e48f, 0xb558c2b52f644f25, 0xf516a6ab6fce4bb1, 0x33611e32ee3fc9d8,
        0x9507f661546b9800, 0xde593c442e032002, 0x83c2bd47e38ecebf, 0xc8922212ecb30d57,
        0xf813503afe497776, 0x2b78df97032da10e, 0x2698fd5b97495a66, 0xb0cf0e39cc9a879a,
        0x945c16ae586c10a2, 0xd5722b36a59f17fb, 0xcaee5bd9374402fd, 0x2fafc38e53c62926,
        0xf0ca14e075b6fa38, 0x3f156942d16fb555, 0xb7a1962e378c4d9a, 0x1ef8efcecc037f02,
        0x1c9b68d26cd8fc4d, 0xdf06de55036678c6, 0xbd0a763b7430bbab, 0xe415426270218010,
        0xfe1ab2f22f514f39, 0x36956ac566c725bd, 0x34613723b5fcab2f, 0x1b42202ab7a6744e,
        0x24eac324ad759f43, 0xc309a33d13c5955a, 0xfb1d0417bf02ccc0, 0x848abd77a6c220d5,
        0x4812b8944701c8e8,
    ],
    [
        0xd9ae6a4e6583bd30, 0x70e216dd31c98aec, 0x339c23151ba2b545, 0xdc0a792b26a8721c,
        0xa1850e0102e9bc19, 0x9ea4f6559019c42f, 0x30dc375b8402de77, 0x24c417c393d2d28f,
        0xb37bd74950098b48, 0x444d37d19d9f4ce8, 0x28dbcbf4dc921453, 0x4139983678f19ac4,
        0x08196401fdde3dd5, 0x4c6d89fdd450d209, 0xd15bf0a129b6c39f, 0xee0e9fbb6ae450fb,
        0xb747b112812be75f, 0xcf4248576afc6b91, 0xbd588171d1a0fa86, 0xc3018abd5d4ba7e7,
        0x2bc2e72af052c597, 0xdad519e74e02fc61, 0x48ef9808bf97baf9, 0xd818e726bb5800f6,
        0x3acdb8d8c295b948, 0xe558506f1ecc9fa8, 0x8c54b57960c398b0, 0x0b47447208a63bc8,
        0xf3e190a6e309c035, 0x6a338b19c28d810c, 0x975037209de7c464, 0x44ffc7127aeb0cf2,
        0xcad98e38bf6e2439, 0xe21839e7f474a876, 0x8e133351f3a03746, 0x48a9006bfdd06cf1,
        0x2326d156c5158c6d, 0xa439594e6ac0fbbf, 0x88dbb962a6a90167, 0x96538736374bd5c3,
        0x90a43ebdee961048, 0x70d451c2f0cfe557, 0x19064d64d8d4bef8, 0x1ce9063fbadd8a20,
        0x5d876ef94a5b67a1, 0x4699437680baf525, 0xba4f2292119b0fe1, 0xd1f06e24324d4786,
        0x1db29bc2db4959fe,
    ],];

/// One 64-bit code per (player, square).  The codes are supplied by the caller; nothing in
/// here makes up random numbers.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ZobristCodes {
    codes: [[u64; NUM_SQUARES]; NUM_PLAYERS],
}

impl ZobristCodes {
    /// Wrap a set of codes.  The codes are assumed to be independent and high entropy.
    pub fn new(codes: [[u64; NUM_SQUARES]; NUM_PLAYERS]) -> ZobristCodes {
        ZobristCodes { codes }
    }

    /// Get the code for a player's stone on a square.
    #[inline]
    pub fn code(&self, player: Player, square: Square) -> u64 {
        self.codes[player.to_index()][square.to_index()]
    }

    /// Get every code for one player, indexed by square.
    #[inline]
    pub fn player_codes(&self, player: Player) -> &[u64; NUM_SQUARES] {
        &self.codes[player.to_index()]
    }

    /// Check the codes for the two things that would quietly ruin the hash: a code of zero
    /// (that stone never changes the hash) and two equal codes (those stones cancel out).
    pub fn audit(&self) -> Result<(), Error> {
        let mut seen: Vec<(u64, Player, Square)> = Vec::with_capacity(NUM_PLAYERS * NUM_SQUARES);
        for player in ALL_PLAYERS.iter() {
            for square in ALL_SQUARES.iter() {
                let code = self.code(*player, *square);
                if code == 0 {
                    return Err(Error::ZeroZobristCode {
                        player: *player,
                        square: *square,
                    });
                }
                seen.push((code, *player, *square));
            }
        }

        seen.sort_by_key(|(code, _, _)| *code);
        for pair in seen.windows(2) {
            if pair[0].0 == pair[1].0 {
                let (first, second) = if (pair[0].1, pair[0].2) < (pair[1].1, pair[1].2) {
                    (pair[0], pair[1])
                } else {
                    (pair[1], pair[0])
                };
                return Err(Error::DuplicateZobristCode {
                    first_player: first.1,
                    first_square: first.2,
                    second_player: second.1,
                    second_square: second.2,
                });
            }
        }
        Ok(())
    }
}

impl Default for ZobristCodes {
    fn default() -> ZobristCodes {
        ZobristCodes::new(HOTBITS_CODES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotbits_codes_pass_the_audit() {
        assert!(ZobristCodes::new(HOTBITS_CODES).audit().is_ok());
    }

    #[test]
    fn lookups_are_player_major() {
        let codes = ZobristCodes::default();
        assert_eq!(codes.code(Player::One, Square::new(0)), 0xa4b992578b5b3456);
        assert_eq!(codes.code(Player::One, Square::new(48)), 0x4812b8944701c8e8);
        assert_eq!(codes.code(Player::Two, Square::new(0)), 0xd9ae6a4e6583bd30);
        assert_eq!(codes.code(Player::Two, Square::new(48)), 0x1db29bc2db4959fe);
        assert_eq!(codes.player_codes(Player::Two)[12], 0x08196401fdde3dd5);
    }

    #[test]
    fn audit_finds_zero_codes() {
        let mut raw = HOTBITS_CODES;
        raw[1][17] = 0;
        match ZobristCodes::new(raw).audit() {
            Err(Error::ZeroZobristCode { player, square }) => {
                assert_eq!(player, Player::Two);
                assert_eq!(square, Square::new(17));
            }
            other => panic!("unexpected audit result: {:?}", other),
        }
    }

    #[test]
    fn audit_finds_duplicate_codes() {
        let mut raw = HOTBITS_CODES;
        raw[1][40] = raw[0][3];
        match ZobristCodes::new(raw).audit() {
            Err(Error::DuplicateZobristCode {
                first_player,
                first_square,
                second_player,
                second_square,
            }) => {
                assert_eq!((first_player, first_square), (Player::One, Square::new(3)));
                assert_eq!((second_player, second_square), (Player::Two, Square::new(40)));
            }
            other => panic!("unexpected audit result: {:?}", other),
        }
    }
}
