use crate::core::{Board, Position};

/// プレイヤー操作のtrait
pub trait PlayerController {
    /// 石を置く座標を選ぶ。置ける場所がなければ None。
    fn choose_move(&self, board: &Board) -> Option<Position>;
    fn name(&self) -> &str;
}
