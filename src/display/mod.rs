use crate::core::{Board, Position, Stone};
use crossterm::{cursor, execute, style::Stylize, terminal};
use std::io::stdout;

pub struct DisplayState {
    pub cursor: Position,
    pub highlights: Vec<Position>,
    pub status_msg: Option<String>,
    pub last_move: Option<Position>,
    pub show_cursor: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            cursor: Position::default(),
            highlights: Vec::new(),
            status_msg: None,
            last_move: None,
            show_cursor: true,
        }
    }
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn render_board(board: &Board, state: &DisplayState) {
    let mut out = stdout();

    // 画面クリア（スクロール防止）
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )
    .unwrap();

    print!("=== Othello ===\r\n");
    if let Some(msg) = &state.status_msg {
        print!("{}\r\n", msg.clone().bold().yellow());
    } else {
        print!("\r\n");
    }
    print!("\r\n");

    // X軸ラベル
    print!("   ");
    for col in 0..board.size() {
        print!(" {} ", col);
    }
    print!("\r\n");

    for row in 0..board.size() {
        print!("{:2} ", row);
        for col in 0..board.size() {
            let pos = Position::new(row, col);
            let glyph = match board.stone_at(row, col) {
                Some(Stone::Black) => "●",
                Some(Stone::White) => "○",
                None => " ",
            };
            let cell = format!("{} ", glyph);

            let styled = if state.show_cursor && state.cursor == pos {
                cell.on_blue()
            } else if state.last_move == Some(pos) {
                cell.on_dark_yellow()
            } else if state.highlights.contains(&pos) {
                cell.on_dark_grey()
            } else {
                cell.on_dark_green()
            };
            print!(" {}", styled);
        }
        print!("\r\n");
    }

    print!("\r\n");
    print!(
        "● Black: {}   ○ White: {}\r\n",
        board.count_stones(Stone::Black),
        board.count_stones(Stone::White)
    );
}
