use std::collections::BTreeSet;

use crate::{Player, BOARD_SIZE};

impl quickcheck::Arbitrary for Player {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[Player::Black, Player::White]).unwrap()
    }
}

/// A sequence of distinct in-bounds coordinates, in play order.
///
/// Feeding these to `apply_move` one by one yields only successful moves
/// (until the game ends), which is what the state invariant properties
/// need.
#[derive(Clone, Debug)]
pub struct MoveSequence(pub Vec<(usize, usize)>);

impl quickcheck::Arbitrary for MoveSequence {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let len = usize::arbitrary(g) % 60;
        let mut seen = BTreeSet::new();
        let mut moves = Vec::new();
        for _ in 0..len {
            let row = usize::arbitrary(g) % BOARD_SIZE;
            let col = usize::arbitrary(g) % BOARD_SIZE;
            if seen.insert((row, col)) {
                moves.push((row, col));
            }
        }
        MoveSequence(moves)
    }
}
