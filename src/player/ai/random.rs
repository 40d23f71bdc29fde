use crate::core::{Board, Position, Stone};
use crate::logic::flipping_directions;
use crate::player::PlayerController;
use rand::seq::SliceRandom;
use rand::Rng;

pub struct RandomAI {
    pub name: String,
}

impl RandomAI {
    pub fn new(name: &str) -> Self {
        RandomAI {
            name: name.to_string(),
        }
    }
}

/// 全マスの座標をシャッフルして、先頭から順に合法手を探す。
/// 合法手の中から一様ランダムに1つ選ぶのと等価。
pub fn find_random_move(board: &Board, stone: Stone, rng: &mut impl Rng) -> Option<Position> {
    let mut coordinates = Vec::new();
    for row in 0..board.size() {
        for col in 0..board.size() {
            coordinates.push(Position::new(row, col));
        }
    }
    coordinates.shuffle(rng);

    coordinates.into_iter().find(|&pos| {
        board.stone_at(pos.row, pos.col).is_none()
            && !flipping_directions(board, stone, pos).is_empty()
    })
}

impl PlayerController for RandomAI {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &Board) -> Option<Position> {
        let mut rng = rand::thread_rng();
        find_random_move(board, board.turn(), &mut rng)
    }
}
