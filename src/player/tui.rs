use crate::core::{Board, Position};
use crate::display::{render_board, DisplayState};
use crate::logic::{flipping_directions, legal_moves};
use crate::player::PlayerController;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::time::Duration;

pub struct TuiController {
    name: String,
}

impl TuiController {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl PlayerController for TuiController {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &Board) -> Option<Position> {
        let mut state = DisplayState::default();
        state.status_msg = Some(format!("{}'s turn ({:?})", self.name, board.turn()));
        state.highlights = legal_moves(board);

        loop {
            // 描画
            render_board(board, &state);
            print!("[Arrows]: Move | [Enter]: Place | [h]: Hints | [s]: Save | [q]: Resign\r\n");

            if event::poll(Duration::from_millis(100)).unwrap() {
                if let Event::Key(KeyEvent { code, .. }) = event::read().unwrap() {
                    match code {
                        KeyCode::Char('q') => return None,
                        KeyCode::Up => {
                            if state.cursor.row > 0 {
                                state.cursor.row -= 1;
                            }
                        }
                        KeyCode::Down => {
                            if state.cursor.row < board.size() - 1 {
                                state.cursor.row += 1;
                            }
                        }
                        KeyCode::Left => {
                            if state.cursor.col > 0 {
                                state.cursor.col -= 1;
                            }
                        }
                        KeyCode::Right => {
                            if state.cursor.col < board.size() - 1 {
                                state.cursor.col += 1;
                            }
                        }
                        KeyCode::Char('h') => {
                            if state.highlights.is_empty() {
                                state.highlights = legal_moves(board);
                            } else {
                                state.highlights.clear();
                            }
                        }
                        KeyCode::Char('s') => {
                            state.status_msg = Some(match board.save("board.txt") {
                                Ok(()) => "Saved to board.txt".to_string(),
                                Err(e) => format!("Save failed: {}", e),
                            });
                        }
                        KeyCode::Enter | KeyCode::Char(' ') => {
                            let pos = state.cursor;
                            if board.stone_at(pos.row, pos.col).is_none()
                                && !flipping_directions(board, board.turn(), pos).is_empty()
                            {
                                return Some(pos);
                            }
                            state.status_msg = Some(format!("{} is not a valid move", pos));
                        }
                        _ => {}
                    }
                }
            }
        }
    }
}
