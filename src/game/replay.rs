use crate::core::{Board, HistoryStack, Move, MoveRecord};
use crate::display::{render_board, DisplayState};
use crate::game::KifuData;
use crate::logic::{place_stone_tracked, redo_move, undo_move};
use anyhow::Context;
use crossterm::event::{self, Event, KeyCode};
use std::time::Duration;

/// 保存した棋譜を1手ずつ再生するビューア
pub struct ReplayViewer {
    kifu: KifuData,
    board: Board,
    history: HistoryStack,
}

impl ReplayViewer {
    /// 棋譜を最後まで適用して履歴を組み立て、読み位置を初期局面まで巻き戻す。
    pub fn new(kifu: KifuData) -> anyhow::Result<Self> {
        let mut board = Board::new(kifu.board_size);
        let mut history = HistoryStack::new();

        for mv in &kifu.moves {
            match mv {
                Move::Place(pos) => {
                    let record = place_stone_tracked(&mut board, *pos)
                        .with_context(|| format!("kifu contains an illegal move {}", pos))?;
                    history.push(record);
                }
                Move::Pass => {
                    let stone = board.turn();
                    board.next_turn();
                    history.push(MoveRecord::pass(stone));
                }
            }
        }

        // 初期局面まで戻す
        while let Some(record) = history.previous().cloned() {
            undo_move(&mut board, &record);
        }

        Ok(Self {
            kifu,
            board,
            history,
        })
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let mut state = DisplayState::default();
            state.show_cursor = false;
            state.last_move = self.history.current().and_then(|r| r.location);
            render_board(&self.board, &state);

            print!("\r\n=== Kifu Replay ===\r\n");
            print!(
                "{} (B) vs {} (W)\r\n",
                self.kifu.black_name, self.kifu.white_name
            );
            let position = match self.history.position() {
                Some(i) => i + 1,
                None => 0,
            };
            print!(
                "Move {}/{} | [Left/Right]: Navigate | [q]: Quit\r\n",
                position,
                self.history.size()
            );

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Right | KeyCode::Char('n') => {
                            if let Some(record) = self.history.next().cloned() {
                                redo_move(&mut self.board, &record);
                            }
                        }
                        KeyCode::Left | KeyCode::Char('p') => {
                            if let Some(record) = self.history.previous().cloned() {
                                undo_move(&mut self.board, &record);
                            }
                        }
                        _ => {}
                    }
                }
            }
        }
        Ok(())
    }
}
