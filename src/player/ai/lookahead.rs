use crate::core::{Board, Position, Stone};
use crate::logic::legal_moves;
use crate::logic::tree::{GameTree, NodeId};
use crate::player::PlayerController;
use rand::seq::SliceRandom;
use rand::Rng;

/// 自分の手番を turns 回先まで読む平均化探索AI。
/// minimax ではなく、末端局面の自石数の平均で手を選ぶ。
pub struct LookaheadAI {
    pub stone: Stone,
    pub name: String,
    /// 先読みする自分の手番の数。相手の手番は含まない。
    pub turns: usize,
}

impl LookaheadAI {
    pub fn new(stone: Stone, name: &str, turns: usize) -> Self {
        Self {
            stone,
            name: name.to_string(),
            turns,
        }
    }

    /// 最高スコアの手を選ぶ。同率は一様ランダム。
    pub fn choose_with_rng(&self, board: &Board, rng: &mut impl Rng) -> Option<Position> {
        if legal_moves(board).is_empty() {
            // 現局面で打てる手がない
            return None;
        }

        let mut possibilities = GameTree::new(board.clone());
        // シミュレーションする手数には相手の手番も含める
        let depth = 2 * self.turns - 1;
        for _ in 0..depth {
            possibilities.expand_all_leaves();
        }

        // ルート直下の各手にスコアを付け、最高のものを集める
        let mut best_score = -1.0;
        let mut best_moves: Vec<Position> = Vec::new();
        for i in 0..possibilities.size(GameTree::ROOT) {
            let child = possibilities.child(GameTree::ROOT, i);
            let mv = match possibilities.previous_move(child) {
                Some(mv) => mv,
                // ルートに合法手がある以上、パスの子は現れない
                None => continue,
            };
            let score = self.score(&possibilities, child);
            if score > best_score {
                best_score = score;
                best_moves.clear();
                best_moves.push(mv);
            } else if score == best_score {
                best_moves.push(mv);
            }
        }

        best_moves.choose(rng).copied()
    }

    /// 葉は自石数、内部ノードは子スコアの算術平均。
    /// 途中で終局した枝は、その深さの葉のスコアをそのまま平均に加える。
    fn score(&self, tree: &GameTree, id: NodeId) -> f64 {
        let n = tree.size(id);
        if n == 0 {
            return tree.board(id).count_stones(self.stone) as f64;
        }
        let mut total = 0.0;
        for i in 0..n {
            total += self.score(tree, tree.child(id, i));
        }
        total / n as f64
    }
}

impl PlayerController for LookaheadAI {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &Board) -> Option<Position> {
        let mut rng = rand::thread_rng();
        self.choose_with_rng(board, &mut rng)
    }
}
