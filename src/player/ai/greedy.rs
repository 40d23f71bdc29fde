use crate::core::{Board, Position};
use crate::logic::{legal_moves, place_stone};
use crate::player::PlayerController;
use rand::seq::SliceRandom;
use rand::Rng;

/// その1手で返せる石の数だけを最大化するAI
pub struct GreedyAI {
    pub name: String,
}

impl GreedyAI {
    pub fn new(name: &str) -> Self {
        GreedyAI {
            name: name.to_string(),
        }
    }

    /// 最多フリップの手を選ぶ。同率は一様ランダム。
    pub fn choose_with_rng(&self, board: &Board, rng: &mut impl Rng) -> Option<Position> {
        let mut best = 0;
        let mut best_moves: Vec<Position> = Vec::new();
        for mv in legal_moves(board) {
            let mut probe = board.clone();
            let flipped = place_stone(&mut probe, mv);
            if flipped > best {
                best = flipped;
                best_moves.clear();
                best_moves.push(mv);
            } else if flipped == best {
                best_moves.push(mv);
            }
        }
        best_moves.choose(rng).copied()
    }
}

impl PlayerController for GreedyAI {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &Board) -> Option<Position> {
        let mut rng = rand::thread_rng();
        self.choose_with_rng(board, &mut rng)
    }
}
