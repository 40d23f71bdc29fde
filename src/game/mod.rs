pub mod record;
pub mod replay;

pub use record::KifuData;
pub use replay::ReplayViewer;

use crate::core::{Board, Move, Position, Stone};
use crate::display::{render_board, DisplayState};
use crate::logic::{legal_moves, place_stone};
use crate::player::PlayerController;

/// 対局の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win(Stone),
    Draw,
    /// 投了した側
    Resigned(Stone),
}

pub struct Game {
    pub board: Board,
    pub history: Vec<Move>,
}

impl Game {
    pub fn new(board: Board) -> Self {
        Game {
            board,
            history: Vec::new(),
        }
    }

    pub fn play(
        &mut self,
        black: &dyn PlayerController,
        white: &dyn PlayerController,
    ) -> GameResult {
        loop {
            let controller: &dyn PlayerController = match self.board.turn() {
                Stone::Black => black,
                Stone::White => white,
            };

            // 現状をまず描画
            let mut state = DisplayState::default();
            state.show_cursor = false;
            state.last_move = self.last_placement();
            state.status_msg = Some(format!(
                "{}'s turn ({:?})",
                controller.name(),
                self.board.turn()
            ));
            render_board(&self.board, &state);

            // 合法手生成
            let moves = legal_moves(&self.board);
            if moves.is_empty() {
                // 相手にも手がなければ終局
                let mut passed = self.board.clone();
                passed.next_turn();
                if legal_moves(&passed).is_empty() {
                    return self.finish();
                }

                state.status_msg = Some(format!(
                    "{} has no moves and passes",
                    controller.name()
                ));
                render_board(&self.board, &state);
                std::thread::sleep(std::time::Duration::from_millis(800));

                self.history.push(Move::Pass);
                self.board.next_turn();
                continue;
            }

            if controller.name().contains("AI") {
                state.status_msg = Some(format!(
                    "{} ({:?}) is thinking...",
                    controller.name(),
                    self.board.turn()
                ));
                render_board(&self.board, &state);

                // 思考ウェイト中に終了判定
                let timeout = std::time::Duration::from_millis(600);
                if crossterm::event::poll(timeout).unwrap_or(false) {
                    if let Ok(crossterm::event::Event::Key(key)) = crossterm::event::read() {
                        if key.code == crossterm::event::KeyCode::Char('q') {
                            return GameResult::Resigned(self.board.turn());
                        }
                    }
                }
            }

            match controller.choose_move(&self.board) {
                Some(pos) => {
                    if place_stone(&mut self.board, pos) == 0 {
                        // 1石も返せない手は無視してもう一度
                        continue;
                    }
                    self.history.push(Move::Place(pos));
                }
                None => {
                    // 合法手があるのに指さないのは投了
                    return GameResult::Resigned(self.board.turn());
                }
            }
        }
    }

    fn last_placement(&self) -> Option<Position> {
        match self.history.last() {
            Some(Move::Place(pos)) => Some(*pos),
            _ => None,
        }
    }

    fn finish(&self) -> GameResult {
        let black = self.board.count_stones(Stone::Black);
        let white = self.board.count_stones(Stone::White);
        if black > white {
            GameResult::Win(Stone::Black)
        } else if white > black {
            GameResult::Win(Stone::White)
        } else {
            GameResult::Draw
        }
    }
}
