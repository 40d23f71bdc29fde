use crossterm::{execute, terminal};
use othello_aho_ai::core::{Board, Stone};
use othello_aho_ai::display::{render_board, DisplayState};
use othello_aho_ai::game::{record, Game, GameResult, KifuData, ReplayViewer};
use othello_aho_ai::player::ai::{GreedyAI, LookaheadAI, RandomAI};
use othello_aho_ai::player::{PlayerController, TuiController};
use std::io;

fn main() -> anyhow::Result<()> {
    // ターミナル初期化
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;

    let res = run();

    // ターミナル復帰
    execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    res
}

fn run() -> anyhow::Result<()> {
    use crossterm::event::{self, Event, KeyCode};
    use std::time::Duration;

    print!("=== Othello ===\r\n");

    print!("\r\nSelect mode:\r\n");
    print!("1. Local Play\r\n");
    print!("2. Replay Kifu\r\n");
    print!("q. Quit\r\n");

    let mode = loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('1') => break "local",
                    KeyCode::Char('2') => break "replay",
                    KeyCode::Char('q') => return Ok(()),
                    _ => {}
                }
            }
        }
    };

    match mode {
        "replay" => run_replay(),
        _ => run_local(),
    }
}

fn select_player(stone: Stone) -> anyhow::Result<Option<Box<dyn PlayerController>>> {
    use crossterm::event::{self, Event, KeyCode};
    use std::time::Duration;

    print!("\r\nSelect {:?} player:\r\n", stone);
    print!("1. Human\r\n");
    print!("2. Random AI\r\n");
    print!("3. Greedy AI\r\n");
    print!("4. Lookahead AI (2 turns)\r\n");

    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                let controller: Box<dyn PlayerController> = match key.code {
                    KeyCode::Char('1') => Box::new(TuiController::new("Human")),
                    KeyCode::Char('2') => Box::new(RandomAI::new("Random AI")),
                    KeyCode::Char('3') => Box::new(GreedyAI::new("Greedy AI")),
                    KeyCode::Char('4') => Box::new(LookaheadAI::new(stone, "Lookahead AI", 2)),
                    KeyCode::Char('q') => return Ok(None),
                    _ => continue,
                };
                return Ok(Some(controller));
            }
        }
    }
}

fn run_local() -> anyhow::Result<()> {
    let black = match select_player(Stone::Black)? {
        Some(controller) => controller,
        None => return Ok(()),
    };
    let white = match select_player(Stone::White)? {
        Some(controller) => controller,
        None => return Ok(()),
    };

    let mut game = Game::new(Board::new(8));
    let result = game.play(black.as_ref(), white.as_ref());

    // 結果表示
    let black_count = game.board.count_stones(Stone::Black);
    let white_count = game.board.count_stones(Stone::White);
    let mut state = DisplayState::default();
    state.show_cursor = false;
    state.status_msg = Some(match result {
        GameResult::Win(stone) => {
            format!("{:?} wins! ({} - {})", stone, black_count, white_count)
        }
        GameResult::Draw => format!("Draw! ({} - {})", black_count, white_count),
        GameResult::Resigned(stone) => format!("{:?} resigned.", stone),
    });
    render_board(&game.board, &state);

    // 棋譜保存
    let kifu = KifuData {
        board_size: game.board.size(),
        black_name: black.name().to_string(),
        white_name: white.name().to_string(),
        moves: game.history.clone(),
    };
    match record::save_kifu(&kifu) {
        Ok(path) => print!("\r\nKifu saved: {}\r\n", path.display()),
        Err(e) => print!("\r\nFailed to save kifu: {}\r\n", e),
    }

    print!("Press any key to return.\r\n");
    wait_any_key()
}

fn run_replay() -> anyhow::Result<()> {
    use crossterm::event::{self, Event, KeyCode};
    use std::time::Duration;

    // kifu ディレクトリから棋譜ファイルを列挙
    let mut files: Vec<std::path::PathBuf> = match std::fs::read_dir("kifu") {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().map_or(false, |ext| ext == "json"))
            .collect(),
        Err(_) => Vec::new(),
    };
    files.sort();

    if files.is_empty() {
        print!("\r\nNo kifu files found in kifu/.\r\n");
        print!("Press any key to return.\r\n");
        return wait_any_key();
    }

    print!("\r\nSelect kifu:\r\n");
    for (i, path) in files.iter().enumerate().take(9) {
        print!("{}. {}\r\n", i + 1, path.display());
    }
    print!("q. Back\r\n");

    let selected = loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char(c) => {
                        if let Some(i) = c.to_digit(10) {
                            let i = i as usize;
                            if i >= 1 && i <= files.len().min(9) {
                                break files[i - 1].clone();
                            }
                        }
                    }
                    _ => {}
                }
            }
        }
    };

    let kifu = KifuData::load(&selected)?;
    let mut viewer = ReplayViewer::new(kifu)?;
    viewer.run()
}

fn wait_any_key() -> anyhow::Result<()> {
    use crossterm::event::{self, Event};
    use std::time::Duration;

    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(_) = event::read()? {
                return Ok(());
            }
        }
    }
}
